//! The browser-side cookie store.

use std::sync::{Mutex, MutexGuard};
use time::OffsetDateTime;

/// Access to a live `document.cookie`.
///
/// Reading returns every visible cookie as `name=value` pairs joined by
/// `"; "`. Assigning sets (or removes) a single cookie described by a
/// `Set-Cookie` style string; it never replaces the whole store.
pub trait DocumentCookie: Send + Sync {
    fn cookie(&self) -> String;
    fn set_cookie(&self, cookie: &str);
}

/// An in-process `document.cookie`.
///
/// Assignments follow the browser rules that matter for a single document:
/// a cookie with an expiry in the past (or `Max-Age<=0`) is removed, any
/// other cookie replaces the entry with the same name in place or is
/// appended. Path and domain scoping are not modelled; every cookie is
/// visible. Nameless cookies (`=value`) are not stored: the assignment is
/// ignored, where a browser would keep a cookie with an empty name.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    // Raw (still encoded) name/value pairs in creation order.
    entries: Mutex<Vec<(String, String)>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a raw cookie string such as `"a=1; b=2"`.
    pub fn with_cookie_string(raw: &str) -> Self {
        let entries = raw
            .split(';')
            .map(|fragment| fragment.trim_start())
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| {
                let (name, value) = fragment.split_once('=').unwrap_or((fragment, ""));
                (name.to_string(), value.to_string())
            })
            .collect();
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<(String, String)>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DocumentCookie for MemoryDocument {
    fn cookie(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie(&self, line: &str) {
        let parsed = match cookie::Cookie::parse(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(line = %line, error = %e, "ignoring unparsable cookie");
                return;
            }
        };

        let now = OffsetDateTime::now_utc();
        let expired = parsed.expires_datetime().is_some_and(|at| at <= now)
            || parsed
                .max_age()
                .is_some_and(|age| age <= time::Duration::ZERO);

        let mut entries = self.entries();
        let existing = entries.iter().position(|(name, _)| name == parsed.name());

        match (existing, expired) {
            (Some(idx), true) => {
                entries.remove(idx);
            }
            (None, true) => {}
            (Some(idx), false) => entries[idx].1 = parsed.value().to_string(),
            (None, false) => {
                entries.push((parsed.name().to_string(), parsed.value().to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = MemoryDocument::new();
        assert_eq!(doc.cookie(), "");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_assignment_appends() {
        let doc = MemoryDocument::new();
        doc.set_cookie("a=1;sameSite=Lax;");
        doc.set_cookie("b=2;path=/;sameSite=Lax;");
        assert_eq!(doc.cookie(), "a=1; b=2");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_assignment_replaces_in_place() {
        let doc = MemoryDocument::with_cookie_string("a=1; b=2; c=3");
        doc.set_cookie("b=20;sameSite=Lax;");
        assert_eq!(doc.cookie(), "a=1; b=20; c=3");
    }

    #[test]
    fn test_past_expiry_removes() {
        let doc = MemoryDocument::with_cookie_string("a=1; b=2");
        doc.set_cookie("a=;expires=Thu, 01 Jan 1970 00:00:01 GMT;sameSite=Lax;");
        assert_eq!(doc.cookie(), "b=2");
    }

    #[test]
    fn test_past_expiry_for_unknown_cookie_is_noop() {
        let doc = MemoryDocument::with_cookie_string("a=1");
        doc.set_cookie("zzz=;expires=Thu, 01 Jan 1970 00:00:01 GMT;");
        assert_eq!(doc.cookie(), "a=1");
    }

    #[test]
    fn test_zero_max_age_removes() {
        let doc = MemoryDocument::with_cookie_string("a=1");
        doc.set_cookie("a=1; Max-Age=0");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_future_expiry_kept() {
        let doc = MemoryDocument::new();
        doc.set_cookie("a=1;expires=Tue, 01 Jan 2999 00:00:00 GMT;sameSite=Lax;");
        assert_eq!(doc.cookie(), "a=1");
    }

    #[test]
    fn test_encoded_value_kept_raw() {
        let doc = MemoryDocument::new();
        doc.set_cookie("my%20name=a%3Bb;sameSite=Lax;");
        assert_eq!(doc.cookie(), "my%20name=a%3Bb");
    }

    #[test]
    fn test_nameless_assignment_ignored() {
        let doc = MemoryDocument::with_cookie_string("a=1");
        doc.set_cookie("=v;sameSite=Lax;");
        assert_eq!(doc.cookie(), "a=1");
    }

    #[test]
    fn test_unparsable_assignment_ignored() {
        let doc = MemoryDocument::with_cookie_string("a=1");
        doc.set_cookie("no-equals-sign");
        assert_eq!(doc.cookie(), "a=1");
    }
}
