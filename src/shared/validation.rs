use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for category labels.
    /// Indicators group answers by exact string match, so a label must not
    /// start or end with whitespace.
    /// - Valid: "Digital Tools", "Infraestructura", "A"
    /// - Invalid: " Digital Tools", "Digital Tools ", "", "   "
    pub static ref CATEGORY_REGEX: Regex = Regex::new(r"^\S(?:.*\S)?$").unwrap();

    /// Regex for required free text (at least one non-whitespace character)
    pub static ref NON_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_regex_valid() {
        assert!(CATEGORY_REGEX.is_match("Digital Tools"));
        assert!(CATEGORY_REGEX.is_match("Digitalización de Procesos"));
        assert!(CATEGORY_REGEX.is_match("A"));
        assert!(CATEGORY_REGEX.is_match("e-learning / LMS"));
    }

    #[test]
    fn test_category_regex_invalid() {
        assert!(!CATEGORY_REGEX.is_match("")); // empty
        assert!(!CATEGORY_REGEX.is_match("   ")); // blank
        assert!(!CATEGORY_REGEX.is_match(" Tools")); // leading space
        assert!(!CATEGORY_REGEX.is_match("Tools ")); // trailing space
        assert!(!CATEGORY_REGEX.is_match("Tools\n")); // trailing newline
    }

    #[test]
    fn test_non_blank_regex() {
        assert!(NON_BLANK_REGEX.is_match(" a "));
        assert!(!NON_BLANK_REGEX.is_match(" \t "));
    }
}
