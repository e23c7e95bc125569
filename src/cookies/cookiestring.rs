//! Serializing a cookie write into a `Set-Cookie` compatible string.
//!
//! Attributes are emitted in a fixed order, each terminated by `;`:
//!
//! ```text
//! name=value;expires=<date>;path=<path>;domain=<domain>;secure;sameSite=<Lax|None|Strict>;Partitioned;
//! ```
//!
//! The same string is assigned to `document.cookie` in a browser and sent as
//! a `Set-Cookie` header value during server rendering.

use crate::base::cookieerror::{CookieError, CookieWarning};
use crate::cookies::attributes::{CookieAttributes, Expires, SameSite};
use crate::cookies::diagnostics::CookieDiagnostics;
use crate::cookies::encoding::encode;
use time::macros::{datetime, format_description};
use time::{Duration, OffsetDateTime, UtcOffset};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// `Thu, 01 Jan 1970 00:00:01 GMT`, the expiry written by deletes.
pub const EXPIRED: OffsetDateTime = datetime!(1970-01-01 00:00:01 UTC);

/// Format `at` as an HTTP date, e.g. `Thu, 01 Jan 1970 00:00:01 GMT`.
pub fn http_date(at: OffsetDateTime) -> Result<String, CookieError> {
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    Ok(at.to_offset(UtcOffset::UTC).format(&format)?)
}

/// Resolve an expiry to an absolute time. `Days(0)` and `Days(NaN)` mean
/// "no expiry", matching how an unset value is treated.
fn resolve_expiry(
    expires: Expires,
    now: OffsetDateTime,
) -> Result<Option<OffsetDateTime>, CookieError> {
    match expires {
        Expires::At(at) => Ok(Some(at)),
        Expires::Days(days) if days == 0.0 || days.is_nan() => Ok(None),
        Expires::Days(days) => {
            let millis = days * MILLIS_PER_DAY;
            if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
                return Err(CookieError::DateOutOfRange);
            }
            now.checked_add(Duration::milliseconds(millis as i64))
                .map(Some)
                .ok_or(CookieError::DateOutOfRange)
        }
    }
}

/// Build the cookie string for writing `name=value` with `attributes`,
/// computing relative expiries from the current time.
pub fn build(
    name: &str,
    value: &str,
    attributes: &CookieAttributes,
    diagnostics: &dyn CookieDiagnostics,
) -> String {
    build_at(name, value, attributes, OffsetDateTime::now_utc(), diagnostics)
}

/// [`build`] with an explicit clock.
pub fn build_at(
    name: &str,
    value: &str,
    attributes: &CookieAttributes,
    now: OffsetDateTime,
    diagnostics: &dyn CookieDiagnostics,
) -> String {
    let mut cookie = format!("{}={};", encode(name), encode(value));

    if let Some(expires) = attributes.expires {
        match resolve_expiry(expires, now).and_then(|at| at.map(http_date).transpose()) {
            Ok(Some(date)) => {
                cookie.push_str("expires=");
                cookie.push_str(&date);
                cookie.push(';');
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(name = %name, error = %e, "dropping unrepresentable expiry");
            }
        }
    }

    if let Some(path) = attributes.path.as_deref().filter(|p| !p.is_empty()) {
        cookie.push_str("path=");
        cookie.push_str(path);
        cookie.push(';');
    }

    if let Some(domain) = attributes.domain.as_deref().filter(|d| !d.is_empty()) {
        cookie.push_str("domain=");
        cookie.push_str(domain);
        cookie.push(';');
    }

    let same_site = attributes.same_site.unwrap_or_default();

    // Browsers reject SameSite=None without Secure.
    let mut secure = attributes.secure.unwrap_or(false);
    if attributes.secure == Some(false) && same_site == SameSite::None {
        secure = true;
        diagnostics.warn(&CookieWarning::SecureForced {
            name: name.to_string(),
        });
    }

    if secure {
        cookie.push_str("secure;");
    }

    cookie.push_str("sameSite=");
    cookie.push_str(same_site.as_str());
    cookie.push(';');

    if attributes.partitioned == Some(true) {
        cookie.push_str("Partitioned;");
    }

    cookie
}
