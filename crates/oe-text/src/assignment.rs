//! `key = value` line parsing for INI-like resource and settings files

/// Prefixes that mark a whole line as a comment
const COMMENT_PREFIXES: [&str; 3] = ["--", "//", ";"];

/// Split an assignment line into its trimmed left and right sides.
///
/// Returns `false` for comment lines and leaves `left`/`right` untouched.
/// Any other line is accepted: without an `=` the whole trimmed line becomes
/// the left side and the right side is empty.
pub fn parse_assignment(text: &str, left: &mut String, right: &mut String) -> bool {
    if COMMENT_PREFIXES.iter().any(|prefix| text.starts_with(prefix)) {
        return false;
    }

    let (lhs, rhs) = text.split_once('=').unwrap_or((text, ""));
    left.clear();
    left.push_str(lhs.trim());
    right.clear();
    right.push_str(rhs.trim());
    true
}

/// Owned result of parsing one assignment line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAssignment {
    pub lvalue: String,
    pub rvalue: String,
    pub is_comment: bool,
}

impl ParsedAssignment {
    pub fn new(line: &str) -> Self {
        let mut lvalue = String::new();
        let mut rvalue = String::new();
        let is_comment = !parse_assignment(line, &mut lvalue, &mut rvalue);
        Self {
            lvalue,
            rvalue,
            is_comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Option<(String, String)> {
        let (mut l, mut r) = (String::new(), String::new());
        parse_assignment(line, &mut l, &mut r).then_some((l, r))
    }

    #[test]
    fn test_comment_prefixes() {
        assert_eq!(split("-- comment"), None);
        assert_eq!(split("// comment = 1"), None);
        assert_eq!(split(";key=value"), None);
        // Only a prefix at column zero counts
        assert_eq!(split(" ;x"), Some((";x".into(), "".into())));
    }

    #[test]
    fn test_key_value() {
        assert_eq!(split("key = value"), Some(("key".into(), "value".into())));
        assert_eq!(split("\tpath=a b c  "), Some(("path".into(), "a b c".into())));
    }

    #[test]
    fn test_splits_on_first_equals() {
        assert_eq!(split("expr = a=b"), Some(("expr".into(), "a=b".into())));
    }

    #[test]
    fn test_no_equals() {
        assert_eq!(split("justtext"), Some(("justtext".into(), "".into())));
        assert_eq!(split(""), Some(("".into(), "".into())));
    }

    #[test]
    fn test_comment_leaves_outputs() {
        let mut l = String::from("keep");
        let mut r = String::from("me");
        assert!(!parse_assignment("-- x = y", &mut l, &mut r));
        assert_eq!((l.as_str(), r.as_str()), ("keep", "me"));
    }

    #[test]
    fn test_parsed_assignment() {
        let parsed = ParsedAssignment::new("Volume = 80");
        assert!(!parsed.is_comment);
        assert_eq!(parsed.lvalue, "Volume");
        assert_eq!(parsed.rvalue, "80");

        assert!(ParsedAssignment::new("// disabled").is_comment);
    }
}
