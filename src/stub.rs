//! ReasonML type rendering.

/// Extension of generated stub files.
pub const STUB_EXTENSION: &str = "re";

/// Render the `Js.t` object type for a list of class names.
///
/// Output depends only on the ordered input: one `    name: string,` line per
/// entry, nothing reordered, dropped or added, and no surrounding whitespace.
pub fn render_stub(valid_names: &[String]) -> String {
    let fields = valid_names
        .iter()
        .map(|name| format!("    {}: string,", name))
        .collect::<Vec<_>>()
        .join("\n");

    format!("\ntype definition = Js.t({{.\n{}\n}})\n    ", fields)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_stub_exact_output() {
        let stub = render_stub(&strings(&["red", "forYou", "includeNext"]));
        let expected = indoc! {"
            type definition = Js.t({.
                red: string,
                forYou: string,
                includeNext: string,
            })"};
        assert_eq!(stub, expected);
    }

    #[test]
    fn test_render_stub_empty() {
        assert_eq!(render_stub(&[]), "type definition = Js.t({.\n\n})");
    }

    proptest! {
        #[test]
        fn prop_render_is_deterministic(names in prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..16)) {
            prop_assert_eq!(render_stub(&names), render_stub(&names));
        }

        #[test]
        fn prop_render_keeps_every_name_in_order(
            names in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..16)
        ) {
            let stub = render_stub(&names);
            let fields: Vec<&str> = stub
                .lines()
                .filter_map(|line| line.strip_prefix("    "))
                .filter_map(|line| line.strip_suffix(": string,"))
                .collect();
            prop_assert_eq!(fields, names.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
