use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# recss Configuration

# Where generated <Name>Styles.re files go:
#   "current"      next to each stylesheet
#   "<path>"       a fixed directory
#   (unset)        ./src/styles
# dest_dir = "current"

# Suppress warnings about class names that are ReasonML keywords
silent = false

# Options forwarded verbatim to the CSS-module processor.
# `modules` is always forced on.
[processor]

[batch]
pattern = "*.css.js"
ignore = []
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
