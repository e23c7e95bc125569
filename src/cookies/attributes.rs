//! Write-time cookie policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

/// The `SameSite` attribute. Every written cookie carries one; `Lax` when
/// the caller does not choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SameSite {
    #[default]
    Lax,
    None,
    Strict,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Lax => "Lax",
            SameSite::None => "None",
            SameSite::Strict => "Strict",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SameSite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("lax") {
            Ok(SameSite::Lax)
        } else if s.eq_ignore_ascii_case("none") {
            Ok(SameSite::None)
        } else if s.eq_ignore_ascii_case("strict") {
            Ok(SameSite::Strict)
        } else {
            Err(format!("unknown SameSite value: {s}"))
        }
    }
}

impl From<SameSite> for cookie::SameSite {
    fn from(value: SameSite) -> Self {
        match value {
            SameSite::Lax => cookie::SameSite::Lax,
            SameSite::None => cookie::SameSite::None,
            SameSite::Strict => cookie::SameSite::Strict,
        }
    }
}

impl From<cookie::SameSite> for SameSite {
    fn from(value: cookie::SameSite) -> Self {
        match value {
            cookie::SameSite::Lax => SameSite::Lax,
            cookie::SameSite::None => SameSite::None,
            cookie::SameSite::Strict => SameSite::Strict,
        }
    }
}

/// When a cookie expires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expires {
    /// Days from the moment the cookie is written. Fractions are allowed,
    /// negative values produce a date in the past.
    Days(f64),
    /// A fixed point in time.
    At(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
}

impl From<OffsetDateTime> for Expires {
    fn from(value: OffsetDateTime) -> Self {
        Expires::At(value)
    }
}

impl From<f64> for Expires {
    fn from(days: f64) -> Self {
        Expires::Days(days)
    }
}

impl From<i32> for Expires {
    fn from(days: i32) -> Self {
        Expires::Days(f64::from(days))
    }
}

/// Optional attributes for a cookie write.
///
/// `secure` and `partitioned` are tri-state: `Some(false)` (explicitly off)
/// is treated differently from `None` (not specified) when `SameSite=None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CookieAttributes {
    pub expires: Option<Expires>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: Option<bool>,
    pub same_site: Option<SameSite>,
    pub partitioned: Option<bool>,
}

impl CookieAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize the positional argument form into one attributes value.
    ///
    /// `same_site` falls back to `Lax`.
    pub fn positional(
        expires: Option<Expires>,
        path: Option<&str>,
        domain: Option<&str>,
        secure: Option<bool>,
        same_site: Option<SameSite>,
        partitioned: Option<bool>,
    ) -> Self {
        Self {
            expires,
            path: path.map(str::to_string),
            domain: domain.map(str::to_string),
            secure,
            same_site: Some(same_site.unwrap_or_default()),
            partitioned,
        }
    }

    pub fn expires(mut self, expires: impl Into<Expires>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    pub fn partitioned(mut self, partitioned: bool) -> Self {
        self.partitioned = Some(partitioned);
        self
    }

    /// Fill every unset field from `defaults`.
    pub fn or(&self, defaults: &CookieAttributes) -> CookieAttributes {
        CookieAttributes {
            expires: self.expires.or(defaults.expires),
            path: self.path.clone().or_else(|| defaults.path.clone()),
            domain: self.domain.clone().or_else(|| defaults.domain.clone()),
            secure: self.secure.or(defaults.secure),
            same_site: self.same_site.or(defaults.same_site),
            partitioned: self.partitioned.or(defaults.partitioned),
        }
    }
}
