//! Class-name extraction from compiled CSS-module text.
//!
//! This is a deliberately narrow micro-parser, not a JavaScript lexer. The
//! contract:
//!
//! 1. Locate the region between `exports.locals = {` and the last `};` in
//!    the text (greedy, spanning newlines).
//! 2. Inside that region, every `"key":` contributes `key`, where the key is
//!    one or more characters that are neither `"` nor `\`.
//! 3. Keys are returned in order of first appearance with exact duplicates
//!    removed.
//!
//! When the region is missing the stylesheet exports nothing and callers
//! pass the text through untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static LOCALS_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)exports\.locals = \{(.*)\};").expect("locals block pattern is valid")
});

static QUOTED_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^\\"]+)":"#).expect("quoted key pattern is valid"));

/// Return the body of the `exports.locals` block, if present.
pub fn locals_block(content: &str) -> Option<&str> {
    LOCALS_BLOCK
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Quoted keys of a locals body in first-seen order, without duplicates.
pub fn quoted_keys(block: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    QUOTED_KEY
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|key| seen.insert(*key))
        .map(str::to_string)
        .collect()
}

/// Extract exported class names, or `None` if no locals block exists.
pub fn extract_locals(content: &str) -> Option<Vec<String>> {
    locals_block(content).map(quoted_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const LOADER_OUTPUT: &str = indoc! {r#"
        exports = module.exports = require("../node_modules/css-loader/dist/runtime/api.js")(false);
        exports.push([module.id, "._1x2y { color: red; }", ""]);
        // Exports
        exports.locals = {
        	"red": "_1x2y",
        	"title-box": "_3a4b",
        	"titleBox": "_5c6d",
        	"red": "_1x2y"
        };
    "#};

    #[test]
    fn test_extract_locals_in_order_without_duplicates() {
        let names = extract_locals(LOADER_OUTPUT).unwrap();
        assert_eq!(names, vec!["red", "title-box", "titleBox"]);
    }

    #[test]
    fn test_missing_block_is_none() {
        let content = "exports.push([module.id, \"a { color: red; }\", \"\"]);";
        assert!(extract_locals(content).is_none());
    }

    #[test]
    fn test_empty_block_yields_no_names() {
        assert_eq!(extract_locals("exports.locals = {};"), Some(vec![]));
    }

    #[test]
    fn test_values_are_not_keys() {
        let names = extract_locals(r#"exports.locals = { "a": "hash-a", "b": "x" };"#).unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_hyphenated_keys_are_extracted_as_is() {
        let names = extract_locals(r#"exports.locals = { "is-read": "x", "is_read": "y" };"#)
            .unwrap();
        assert_eq!(names, vec!["is-read", "is_read"]);
    }

    #[test]
    fn test_block_is_greedy_to_last_terminator() {
        let content = indoc! {r#"
            exports.locals = {
            	"first": "_a"
            };
            other = { "second": "_b" };
        "#};
        let names = extract_locals(content).unwrap();
        assert_eq!(names, vec!["first", "second"]);
    }
}
