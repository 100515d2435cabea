use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;
use flate2::read::GzDecoder;
use log::debug;
use reqwest::blocking::Client;
use tar::Archive;
use tempfile::NamedTempFile;
use crate::error::{GobrewError, Result};

/// Puts the resource at `url` on disk at `dest`, or fails.
///
/// Only success or failure is observed: no resume, no checksum.
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Unpacks the archive at `archive` into `dest`, or fails.
pub trait Extractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()>;
}

/// Blocking HTTP download with `reqwest`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gobrew/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(30))
            // release archives are large, the whole body may take a while
            .timeout(None)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        debug!("GET {}", url);
        let mut response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(GobrewError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        // Stage next to the destination so a half-written body never carries the artifact name.
        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| GobrewError::io(dir, e))?;
        let written = response.copy_to(staged.as_file_mut())?;
        staged
            .persist(dest)
            .map_err(|e| GobrewError::io(dest, e.error))?;
        debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(())
    }
}

/// `.tar.gz` extraction with `flate2` and `tar`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarGzExtractor;

impl Extractor for TarGzExtractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        let file = File::open(archive).map_err(|e| GobrewError::io(archive, e))?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut archive_reader = Archive::new(decoder);
        archive_reader.set_preserve_permissions(true);
        archive_reader
            .unpack(dest)
            .map_err(|e| GobrewError::io(archive, e))?;
        Ok(())
    }
}
