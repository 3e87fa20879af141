//! Where a stub is written for a given stylesheet.
//!
//! Pure path arithmetic only; nothing here touches the filesystem.

use crate::stub::STUB_EXTENSION;
use std::path::{Path, PathBuf};

/// `dest_dir` value meaning "next to the stylesheet".
pub const CURRENT_DIR_SENTINEL: &str = "current";

/// Directory used when no destination is configured.
pub const DEFAULT_DEST_DIR: &str = "./src/styles";

/// Marker appended to the stylesheet name to form the module name.
const STYLES_SUFFIX: &str = "Styles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPath {
    pub directory: PathBuf,
    pub filename: String,
}

impl DestinationPath {
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Directory holding `source` and the stub filename derived from it.
///
/// `App.module.css` and `App.css` both map to `AppStyles.re`.
pub fn path_and_filename(source: &Path) -> (PathBuf, String) {
    let current_dir = source.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = stem.strip_suffix(".module").unwrap_or(&stem);

    (
        current_dir,
        format!("{}{}.{}", name, STYLES_SUFFIX, STUB_EXTENSION),
    )
}

/// Pick the output directory from the configured `dest_dir`.
pub fn final_dest_dir(dest_dir: Option<&str>, current_dir: &Path) -> PathBuf {
    match dest_dir {
        Some(CURRENT_DIR_SENTINEL) => current_dir.to_path_buf(),
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DEST_DIR),
    }
}

pub fn resolve_output_destination(source: &Path, dest_dir: Option<&str>) -> DestinationPath {
    let (current_dir, filename) = path_and_filename(source);
    DestinationPath {
        directory: final_dest_dir(dest_dir, &current_dir),
        filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_filename() {
        let (dir, filename) = path_and_filename(Path::new("/app/File.css"));
        assert_eq!(dir, PathBuf::from("/app"));
        assert_eq!(filename, "FileStyles.re");
    }

    #[test]
    fn test_path_and_filename_strips_module_infix() {
        let (dir, filename) = path_and_filename(Path::new("/app/File.module.css"));
        assert_eq!(dir, PathBuf::from("/app"));
        assert_eq!(filename, "FileStyles.re");
    }

    #[test]
    fn test_module_only_stripped_at_end_of_stem() {
        let (_, filename) = path_and_filename(Path::new("/app/File.modules.css"));
        assert_eq!(filename, "File.modulesStyles.re");
    }

    #[test]
    fn test_final_dest_dir_uses_configured_dir() {
        assert_eq!(
            final_dest_dir(Some("/app/"), Path::new("/src/")),
            PathBuf::from("/app/")
        );
    }

    #[test]
    fn test_final_dest_dir_defaults() {
        assert_eq!(
            final_dest_dir(None, Path::new("/src/")),
            PathBuf::from("./src/styles")
        );
        assert_eq!(
            final_dest_dir(Some(""), Path::new("/src/")),
            PathBuf::from("./src/styles")
        );
    }

    #[test]
    fn test_final_dest_dir_current() {
        assert_eq!(
            final_dest_dir(Some("current"), Path::new("/src/")),
            PathBuf::from("/src/")
        );
    }

    #[test]
    fn test_resolve_output_destination() {
        let dest = resolve_output_destination(Path::new("/app/File.module.css"), None);
        assert_eq!(dest.directory, PathBuf::from(DEFAULT_DEST_DIR));
        assert_eq!(dest.filename, "FileStyles.re");
        assert_eq!(
            dest.full_path(),
            PathBuf::from("./src/styles/FileStyles.re")
        );

        let dest = resolve_output_destination(Path::new("/app/File.css"), Some("current"));
        assert_eq!(dest.full_path(), PathBuf::from("/app/FileStyles.re"));
    }

    #[test]
    fn test_relative_source_without_parent() {
        let dest = resolve_output_destination(Path::new("File.css"), Some("current"));
        assert_eq!(dest.directory, PathBuf::new());
        assert_eq!(dest.full_path(), PathBuf::from("FileStyles.re"));
    }
}
