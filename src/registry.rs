use std::process::Command;
use log::debug;
use regex::Regex;
use crate::error::{GobrewError, Result};

/// Where release archives are downloaded from.
pub const DEFAULT_REGISTRY_URL: &str = "https://golang.org/dl/";
/// Repository whose `go*` tags name the available releases.
pub const DEFAULT_TAGS_REPO: &str = "https://github.com/golang/go";

/// Produces the raw tag listing of a repository.
pub trait TagSource {
    fn list_tags(&self, repo: &str) -> Result<String>;
}

/// Lists tags with `git ls-remote`, sorted by git's version ordering.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitTagSource;

impl TagSource for GitTagSource {
    fn list_tags(&self, repo: &str) -> Result<String> {
        debug!("git ls-remote --tags {}", repo);
        let output = Command::new("git")
            .args(["ls-remote", "--sort=version:refname", "--tags", repo, "go*"])
            .output()
            .map_err(|e| GobrewError::RemoteListing(format!("could not run git: {}", e)))?;
        if !output.status.success() {
            return Err(GobrewError::RemoteListing(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Extracts the version following every `tags/go` marker, in listing order.
///
/// Peeled refs (`refs/tags/go1.17^{}`) repeat a tag and are skipped.
pub fn parse_remote_versions(listing: &str) -> Result<Vec<String>> {
    let re = Regex::new(r"tags/go(\S+)")?;
    Ok(re
        .captures_iter(listing)
        .map(|cap| cap[1].to_string())
        .filter(|version| !version.ends_with("^{}"))
        .collect())
}

/// Full download URL of a release archive.
pub fn download_url(registry_url: &str, artifact_name: &str) -> String {
    if registry_url.ends_with('/') {
        format!("{}{}", registry_url, artifact_name)
    } else {
        format!("{}/{}", registry_url, artifact_name)
    }
}
