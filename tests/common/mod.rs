// Test utility module for recss integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Compiled css-loader output exporting the given class names.
pub fn loader_output(names: &[&str]) -> String {
    let entries = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("\t\"{}\": \"_{}_{}\"", name, name, i))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "exports = module.exports = require(\"css-loader/dist/runtime/api.js\")(false);\n\
         exports.push([module.id, \"\", \"\"]);\n\
         // Exports\n\
         exports.locals = {{\n{}\n}};\n",
        entries
    )
}

/// Write `content` to `dir/name`, creating parents.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().expect("fixture has a parent")).expect("create fixture dir");
    fs::write(&path, content).expect("write fixture");
    path
}
