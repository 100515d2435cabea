use std::path::Path;
use log::debug;
use crate::layout::Layout;

/// Returns the version `current/bin` points into, or `None` when no version is
/// active (link absent, broken, or pointing outside `versions/`).
pub fn current_version(layout: &Layout) -> Option<String> {
    let target = std::fs::canonicalize(layout.current_bin()).ok()?;
    let versions_dir = std::fs::canonicalize(layout.versions_dir()).ok()?;
    let version = version_from_target(&target, &versions_dir, &["go", "bin"]);
    debug!("{} resolves to {:?}", layout.current_bin().display(), version);
    version
}

/// Same as [`current_version`] but read from the `current/go` link.
pub fn current_go_version(layout: &Layout) -> Option<String> {
    let target = std::fs::canonicalize(layout.current_go()).ok()?;
    let versions_dir = std::fs::canonicalize(layout.versions_dir()).ok()?;
    let version = version_from_target(&target, &versions_dir, &["go"]);
    debug!("{} resolves to {:?}", layout.current_go().display(), version);
    version
}

/// Strips `<versions_dir>/` and the trailing `suffix` components from a resolved link target.
fn version_from_target(target: &Path, versions_dir: &Path, suffix: &[&str]) -> Option<String> {
    let mut relative = target.strip_prefix(versions_dir).ok()?;
    for component in suffix.iter().rev() {
        if relative.file_name()? != *component {
            return None;
        }
        relative = relative.parent()?;
    }
    let version = relative.to_string_lossy().to_string();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

/// True iff `versions/<version>/go` exists right now.
pub fn version_exists(layout: &Layout, version: &str) -> bool {
    layout.version_go_dir(version).exists()
}

/// Host OS and architecture in the form used by Go release archives,
/// e.g. `linux-amd64` or `darwin-arm64`.
pub fn arch_string() -> String {
    let os = match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    };
    let arch = match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "arm" => "armv6l",
        "powerpc64" => "ppc64le",
        other => other,
    };
    format!("{}-{}", os, arch)
}

/// Name of the release archive for a version on this host,
/// e.g. `go1.17.linux-amd64.tar.gz`.
pub fn artifact_name(version: &str) -> String {
    artifact_name_for(version, &arch_string())
}

pub fn artifact_name_for(version: &str, arch: &str) -> String {
    format!("go{}.{}.tar.gz", version, arch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_version_from_bin_target() {
        let versions = PathBuf::from("/r/versions");
        let bin = ["go", "bin"];
        assert_eq!(
            version_from_target(&versions.join("1.18beta2/go/bin"), &versions, &bin),
            Some("1.18beta2".to_string())
        );
        assert_eq!(version_from_target(&versions.join("go/bin"), &versions, &bin), None);
        assert_eq!(version_from_target(&versions.join("1.17/go"), &versions, &bin), None);
        assert_eq!(version_from_target(Path::new("/usr/local/go/bin"), &versions, &bin), None);
    }

    #[test]
    fn test_version_from_go_target() {
        let versions = PathBuf::from("/r/versions");
        assert_eq!(
            version_from_target(&versions.join("1.17/go"), &versions, &["go"]),
            Some("1.17".to_string())
        );
        assert_eq!(version_from_target(&versions.join("1.17/go/bin"), &versions, &["go"]), None);
    }

    #[test]
    fn test_artifact_name_for() {
        assert_eq!(artifact_name_for("1.17", "linux-amd64"), "go1.17.linux-amd64.tar.gz");
        assert_eq!(
            artifact_name_for("1.18beta2", "darwin-arm64"),
            "go1.18beta2.darwin-arm64.tar.gz"
        );
    }

    #[test]
    fn test_arch_string_uses_go_names() {
        let arch = arch_string();
        assert!(!arch.contains("x86_64"));
        assert!(!arch.contains("macos"));
        assert_eq!(arch.matches('-').count(), 1);
        assert!(artifact_name("1.17").contains(&arch));
    }

    #[test]
    fn test_current_version_without_link_is_none() {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path());
        assert_eq!(current_version(&layout), None);
        layout.ensure_skeleton("1.17").unwrap();
        assert_eq!(current_version(&layout), None);
    }

    #[test]
    fn test_version_exists_requires_go_dir() {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path());
        layout.ensure_skeleton("1.17").unwrap();
        assert!(!version_exists(&layout, "1.17"));
        std::fs::create_dir_all(layout.version_go_dir("1.17")).unwrap();
        assert!(version_exists(&layout, "1.17"));
        std::fs::remove_dir_all(layout.version_dir("1.17")).unwrap();
        assert!(!version_exists(&layout, "1.17"));
    }

    #[cfg(unix)]
    #[test]
    fn test_current_version_follows_bin_link() {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path());
        layout.ensure_skeleton("1.17").unwrap();
        std::fs::create_dir_all(layout.version_bin_dir("1.17")).unwrap();
        std::os::unix::fs::symlink(layout.version_bin_dir("1.17"), layout.current_bin()).unwrap();
        assert_eq!(current_version(&layout), Some("1.17".to_string()));
        assert_eq!(current_go_version(&layout), None);
        std::os::unix::fs::symlink(layout.version_go_dir("1.17"), layout.current_go()).unwrap();
        assert_eq!(current_go_version(&layout), Some("1.17".to_string()));

        // broken link
        std::fs::remove_dir_all(layout.version_dir("1.17")).unwrap();
        assert_eq!(current_version(&layout), None);
        assert_eq!(current_go_version(&layout), None);
    }
}
