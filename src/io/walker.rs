use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix the loader adds to a stylesheet path for its processed output.
pub const PROCESSED_SUFFIX: &str = ".js";

/// Finds processed CSS-module outputs below a root directory.
pub struct ProcessedOutputWalker {
    root: PathBuf,
    pattern: glob::Pattern,
    ignore_patterns: Vec<glob::Pattern>,
}

impl ProcessedOutputWalker {
    pub fn new(root: PathBuf, pattern: &str) -> Result<Self> {
        let pattern = glob::Pattern::new(pattern)
            .with_context(|| format!("Invalid file pattern: {}", pattern))?;
        Ok(Self {
            root,
            pattern,
            ignore_patterns: Vec::new(),
        })
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        for pattern in patterns {
            self.ignore_patterns.push(
                glob::Pattern::new(pattern)
                    .with_context(|| format!("Invalid ignore pattern: {}", pattern))?,
            );
        }
        Ok(self)
    }

    /// Processed output files, sorted for stable batch ordering.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type().is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if path.components().any(|c| c.as_os_str() == "node_modules") {
            return false;
        }
        if !self.pattern.matches(&name.to_string_lossy()) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.matches(&path_str))
    }
}

/// Stylesheet path a processed output belongs to (`App.css.js` -> `App.css`).
pub fn resource_for_output(output: &Path) -> PathBuf {
    let raw = output.to_string_lossy();
    match raw.strip_suffix(PROCESSED_SUFFIX) {
        Some(resource) => PathBuf::from(resource),
        None => output.to_path_buf(),
    }
}

/// Stylesheets whose processed outputs live below `root`.
pub fn find_resources(root: &Path, pattern: &str, ignore: &[String]) -> Result<Vec<PathBuf>> {
    Ok(ProcessedOutputWalker::new(root.to_path_buf(), pattern)?
        .with_ignore_patterns(ignore)?
        .walk()?
        .iter()
        .map(|output| resource_for_output(output))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_walk_finds_matching_outputs() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("src/App.module.css.js"));
        touch(&temp.path().join("src/nested/Button.css.js"));
        touch(&temp.path().join("src/App.module.css"));
        touch(&temp.path().join("src/index.js"));
        touch(&temp.path().join("node_modules/lib/Vendor.css.js"));

        let files = ProcessedOutputWalker::new(temp.path().to_path_buf(), "*.css.js")
            .unwrap()
            .walk()
            .unwrap();

        assert_eq!(
            files,
            vec![
                temp.path().join("src/App.module.css.js"),
                temp.path().join("src/nested/Button.css.js"),
            ]
        );
    }

    #[test]
    fn test_extra_ignore_patterns() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("src/App.css.js"));
        touch(&temp.path().join("build/App.css.js"));

        let files = ProcessedOutputWalker::new(temp.path().to_path_buf(), "*.css.js")
            .unwrap()
            .with_ignore_patterns(&["*/build/*".to_string()])
            .unwrap()
            .walk()
            .unwrap();

        assert_eq!(files, vec![temp.path().join("src/App.css.js")]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(ProcessedOutputWalker::new(PathBuf::from("."), "[").is_err());
    }

    #[test]
    fn test_resource_for_output() {
        assert_eq!(
            resource_for_output(Path::new("/app/App.module.css.js")),
            PathBuf::from("/app/App.module.css")
        );
        assert_eq!(
            resource_for_output(Path::new("/app/App.css")),
            PathBuf::from("/app/App.css")
        );
    }

    #[test]
    fn test_find_resources() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("App.css.js"));

        let resources = find_resources(temp.path(), "*.css.js", &[]).unwrap();
        assert_eq!(resources, vec![temp.path().join("App.css")]);
    }
}
