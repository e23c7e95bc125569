//! Locating a named cookie inside a raw `Cookie` string.

use crate::base::cookieerror::CookieError;
use regex::Regex;

/// Characters that would otherwise be read as pattern syntax.
const ESCAPED: &[char] = &[
    '[', ']', '{', '}', '(', ')', '|', '=', ';', '+', '?', ',', '.', '*', '^', '$',
];

/// Escape `name` so the pattern matches it literally.
pub fn escape_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if ESCAPED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape `name` and let each ASCII letter match either case. Other
/// characters, including non-ASCII letters, match only themselves.
fn name_pattern(name: &str) -> String {
    let escaped = escape_name(name);
    let mut pattern = String::with_capacity(escaped.len() * 2);
    for c in escaped.chars() {
        if c.is_ascii_alphabetic() {
            pattern.push('[');
            pattern.push(c.to_ascii_lowercase());
            pattern.push(c.to_ascii_uppercase());
            pattern.push(']');
        } else {
            pattern.push(c);
        }
    }
    pattern
}

/// Matches `name=value` at the start of a raw cookie string or after a `;`
/// separator, capturing the value up to the next `;`.
///
/// Name comparison is ASCII case-insensitive. RFC 6265 compares names
/// case-sensitively; the looser match is kept for compatibility with stores
/// written by earlier versions of this service.
#[derive(Debug, Clone)]
pub struct CookieNameMatcher {
    pattern: Regex,
}

impl CookieNameMatcher {
    /// Build a matcher for `name` exactly as it appears in the raw string,
    /// i.e. already percent-encoded.
    pub fn new(name: &str) -> Result<Self, CookieError> {
        let name = name_pattern(name);
        let pattern = Regex::new(&format!(r"(?:^{name}|;\s*{name})=(.*?)(?:;|$)"))?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, raw: &str) -> bool {
        self.pattern.is_match(raw)
    }

    /// Raw (still encoded) value of the first occurrence.
    pub fn find<'a>(&self, raw: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Raw values of every occurrence, in string order. A cookie string can
    /// hold the same name several times when cookies differ by path or domain.
    pub fn find_iter<'a>(&'a self, raw: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        // Resume at the end of the value, not of the whole match, so the
        // terminating `;` can open the next occurrence.
        let mut start = 0;
        std::iter::from_fn(move || {
            let caps = self.pattern.captures_at(raw, start)?;
            let value = caps.get(1)?;
            start = value.end();
            Some(value.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_name() {
        assert_eq!(escape_name("a.b"), r"a\.b");
        assert_eq!(escape_name("(x)*"), r"\(x\)\*");
        assert_eq!(escape_name("plain_name-1"), "plain_name-1");
    }

    #[test]
    fn test_match_at_start() {
        let m = CookieNameMatcher::new("foo").unwrap();
        assert_eq!(m.find("foo=bar; baz=qux"), Some("bar"));
    }

    #[test]
    fn test_match_after_separator() {
        let m = CookieNameMatcher::new("baz").unwrap();
        assert_eq!(m.find("foo=bar; baz=qux"), Some("qux"));
        assert_eq!(m.find("foo=bar;baz=qux"), Some("qux"));
    }

    #[test]
    fn test_value_stops_at_semicolon() {
        let m = CookieNameMatcher::new("a").unwrap();
        assert_eq!(m.find("a=1; b=2; c=3"), Some("1"));
    }

    #[test]
    fn test_empty_value() {
        let m = CookieNameMatcher::new("a").unwrap();
        assert_eq!(m.find("a=; b=2"), Some(""));
        assert!(m.is_match("a="));
    }

    #[test]
    fn test_no_prefix_or_suffix_match() {
        let m = CookieNameMatcher::new("foo").unwrap();
        assert!(!m.is_match("foobar=1"));
        assert!(!m.is_match("xfoo=1"));
        assert!(!m.is_match("a=1; barfoo=2"));
        assert!(!m.is_match("a=foo=1"));
    }

    #[test]
    fn test_dot_is_literal() {
        let m = CookieNameMatcher::new("a.b").unwrap();
        assert!(m.is_match("a.b=1"));
        assert!(!m.is_match("axb=1"));
    }

    #[test]
    fn test_case_insensitive_name() {
        let m = CookieNameMatcher::new("Session").unwrap();
        assert_eq!(m.find("session=abc"), Some("abc"));
        assert_eq!(m.find("SESSION=abc"), Some("abc"));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        // U+212A KELVIN SIGN and U+017F LONG S fold to `k`/`s` under Unicode rules.
        let k = CookieNameMatcher::new("k").unwrap();
        assert!(!k.is_match("\u{212A}=1"));
        assert!(k.is_match("K=1"));

        let s = CookieNameMatcher::new("s").unwrap();
        assert_eq!(s.find("\u{17F}=v"), None);
    }

    #[test]
    fn test_non_ascii_name_matches_itself() {
        let m = CookieNameMatcher::new("straße").unwrap();
        assert_eq!(m.find("STRAßE=1"), Some("1"));
        assert!(!m.is_match("STRASSE=1"));
    }

    #[test]
    fn test_find_iter_all_occurrences() {
        let m = CookieNameMatcher::new("id").unwrap();
        let values: Vec<&str> = m.find_iter("id=1; other=x; id=2").collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn test_find_iter_adjacent_occurrences() {
        let m = CookieNameMatcher::new("id").unwrap();
        let values: Vec<&str> = m.find_iter("id=1; id=2;id=3").collect();
        assert_eq!(values, vec!["1", "2", "3"]);
        assert_eq!(m.find_iter("other=1").count(), 0);
    }
}
