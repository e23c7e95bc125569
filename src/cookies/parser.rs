//! Reading cookies out of a raw `Cookie` string.
//!
//! A raw cookie string is what `document.cookie` returns or what a client
//! sends in its `Cookie` header: `name=value` pairs joined by `"; "`, each
//! component percent-encoded.

use crate::cookies::encoding::{decode, encode};
use crate::cookies::namematcher::CookieNameMatcher;
use std::collections::HashMap;

fn matcher_for(name: &str) -> Option<CookieNameMatcher> {
    match CookieNameMatcher::new(&encode(name)) {
        Ok(matcher) => Some(matcher),
        Err(e) => {
            tracing::debug!(name = %name, error = %e, "cookie name matcher rejected");
            None
        }
    }
}

/// True if a cookie called `name` is present in `raw`.
pub fn exists(name: &str, raw: &str) -> bool {
    matcher_for(name).is_some_and(|m| m.is_match(raw))
}

/// Decoded value of the first cookie called `name`, or an empty string.
pub fn get_one(name: &str, raw: &str) -> String {
    let Some(matcher) = matcher_for(name) else {
        return String::new();
    };
    match matcher.find(raw) {
        Some(value) if !value.is_empty() => decode(value),
        _ => String::new(),
    }
}

/// Every cookie in `raw`, decoded. Later duplicates overwrite earlier ones.
pub fn get_all(raw: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    if raw.is_empty() {
        return cookies;
    }

    for fragment in raw.split(';') {
        let (raw_name, raw_value) = fragment.split_once('=').unwrap_or((fragment, ""));
        let raw_name = raw_name.strip_prefix(' ').unwrap_or(raw_name);
        if raw_name.is_empty() && raw_value.is_empty() {
            continue;
        }
        cookies.insert(decode(raw_name), decode(raw_value));
    }

    cookies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists() {
        assert!(exists("a", "a=1; b=2"));
        assert!(exists("b", "a=1; b=2"));
        assert!(!exists("c", "a=1; b=2"));
        assert!(!exists("a", ""));
    }

    #[test]
    fn test_exists_not_substring() {
        assert!(!exists("foo", "foobar=1"));
        assert!(!exists("bar", "foobar=1"));
    }

    #[test]
    fn test_exists_ascii_case_only() {
        assert!(exists("k", "K=1"));
        assert!(!exists("k", "\u{212A}=1"));
        assert_eq!(get_one("s", "\u{17F}=v"), "");
    }

    #[test]
    fn test_exists_encodes_name() {
        assert!(exists("my cookie", "my%20cookie=1"));
        assert!(!exists("my cookie", "my cookie=1"));
    }

    #[test]
    fn test_get_one() {
        assert_eq!(get_one("b", "a=1; b=hello%20world; c=3"), "hello world");
        assert_eq!(get_one("missing", "a=1"), "");
        assert_eq!(get_one("a", "a=; b=2"), "");
    }

    #[test]
    fn test_get_one_malformed_value() {
        assert_eq!(get_one("pct", "pct=100%"), "100%");
    }

    #[test]
    fn test_get_all_empty() {
        assert!(get_all("").is_empty());
    }

    #[test]
    fn test_get_all() {
        let cookies = get_all("a=1; b=2");
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies["a"], "1");
        assert_eq!(cookies["b"], "2");
    }

    #[test]
    fn test_get_all_decodes_names_and_values() {
        let cookies = get_all("my%20name=a%3Db; plain=x");
        assert_eq!(cookies["my name"], "a=b");
        assert_eq!(cookies["plain"], "x");
    }

    #[test]
    fn test_get_all_last_wins() {
        let cookies = get_all("id=1; id=2");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies["id"], "2");
    }

    #[test]
    fn test_get_all_value_keeps_equals() {
        let cookies = get_all("token=abc==");
        assert_eq!(cookies["token"], "abc==");
    }

    #[test]
    fn test_get_all_tolerates_odd_fragments() {
        let cookies = get_all("a=1;; flag; b=2;");
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies["flag"], "");
        assert_eq!(cookies["b"], "2");
    }
}
