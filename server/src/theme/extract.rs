//! Line-oriented metadata scanning for theme files.
//!
//! Theme files are TOML-like, but only flat `key = "value"` lines are
//! understood here. Tables, arrays and escape sequences are not parsed; the
//! rest of the file is passed through untouched as raw content.

/// Return the quoted value of the first line that starts with `key =`.
///
/// Lines are trimmed before matching. The value is whatever sits between the
/// first and the last `"` on that line, so a quote inside the value cuts it
/// short. A matching line without a usable pair of quotes yields an empty
/// string, as does a missing key.
pub fn extract_value(content: &str, key: &str) -> String {
    let prefix = format!("{key} =");

    let Some(line) = content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
    else {
        return String::new();
    };

    match (line.find('"'), line.rfind('"')) {
        (Some(start), Some(end)) if start < end => line[start + 1..end].to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_simple_value() {
        assert_eq!(extract_value("author = \"jane\"", "author"), "jane");
    }

    #[test]
    fn test_missing_key_yields_empty() {
        assert_eq!(extract_value("name = \"Dark\"", "author"), "");
        assert_eq!(extract_value("", "author"), "");
    }

    #[test]
    fn test_first_match_wins() {
        let content = "name = \"First\"\nname = \"Second\"";
        assert_eq!(extract_value(content, "name"), "First");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let content = "[metadata]\n    version = \"2.0\"   \r\n";
        assert_eq!(extract_value(content, "version"), "2.0");
    }

    #[test]
    fn test_requires_space_before_equals() {
        assert_eq!(extract_value("name=\"Tight\"", "name"), "");
    }

    #[test]
    fn test_prefix_of_other_key_does_not_match() {
        let content = "namespace = \"wrong\"\nname = \"right\"";
        assert_eq!(extract_value(content, "name"), "right");
    }

    #[test]
    fn test_unusable_quotes_yield_empty() {
        assert_eq!(extract_value("name = Dark", "name"), "");
        assert_eq!(extract_value("name = \"Dark", "name"), "");
        assert_eq!(extract_value("name = \"\"", "name"), "");
    }

    #[test]
    fn test_first_matching_line_decides_even_without_quotes() {
        let content = "name = unquoted\nname = \"Quoted\"";
        assert_eq!(extract_value(content, "name"), "");
    }

    #[test]
    fn test_spans_first_to_last_quote() {
        let content = "description = \"say \"hi\" twice\"";
        assert_eq!(extract_value(content, "description"), "say \"hi\" twice");

        let content = "name = \"a\" # \"comment\"";
        assert_eq!(extract_value(content, "name"), "a\" # \"comment");
    }
}
