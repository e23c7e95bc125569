//! The server-side cookie store: the incoming `Cookie` header and the
//! outgoing `Set-Cookie` headers of the response being rendered.

use crate::base::cookieerror::CookieError;
use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Read access to the cookies a client sent.
pub trait RequestCookies: Send + Sync {
    /// The raw `Cookie` header, or `None` when the request carries none.
    fn cookie_header(&self) -> Option<String>;
}

/// Write access to the response's `Set-Cookie` headers.
pub trait ResponseCookieSink: Send + Sync {
    /// Append one `Set-Cookie` header. Values that cannot be sent are dropped.
    fn append_set_cookie(&self, value: &str);
}

impl RequestCookies for HeaderMap {
    /// HTTP/2 clients may split cookies across several header fields; those
    /// are joined back with `"; "`.
    fn cookie_header(&self) -> Option<String> {
        let values: Vec<&str> = self
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| match std::str::from_utf8(value.as_bytes()) {
                Ok(s) => Some(s),
                Err(_) => {
                    tracing::debug!("skipping non UTF-8 cookie header");
                    None
                }
            })
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join("; "))
        }
    }
}

impl RequestCookies for http::request::Parts {
    fn cookie_header(&self) -> Option<String> {
        self.headers.cookie_header()
    }
}

impl<B: Send + Sync> RequestCookies for http::Request<B> {
    fn cookie_header(&self) -> Option<String> {
        self.headers().cookie_header()
    }
}

/// A raw `Cookie` header captured up front.
impl RequestCookies for String {
    fn cookie_header(&self) -> Option<String> {
        Some(self.clone())
    }
}

fn append_to(headers: &mut HeaderMap, value: &str) -> Result<(), CookieError> {
    let value = HeaderValue::from_str(value)
        .map_err(|e| CookieError::invalid_header_value("set-cookie", e.to_string()))?;
    headers.append(SET_COOKIE, value);
    Ok(())
}

fn append_or_warn(headers: &mut HeaderMap, value: &str) {
    if let Err(e) = append_to(headers, value) {
        tracing::warn!(error = %e, "dropping Set-Cookie header");
    }
}

impl ResponseCookieSink for Mutex<HeaderMap> {
    fn append_set_cookie(&self, value: &str) {
        let mut headers = self.lock().unwrap_or_else(PoisonError::into_inner);
        append_or_warn(&mut headers, value);
    }
}

/// Response headers shared between the code rendering a page and the code
/// that eventually sends the response.
///
/// Clones point at the same header map.
#[derive(Debug, Clone, Default)]
pub struct ResponseHeaders {
    inner: Arc<Mutex<HeaderMap>>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `Set-Cookie` header, reporting values that are not valid
    /// header values.
    pub fn try_append_set_cookie(&self, value: &str) -> Result<(), CookieError> {
        append_to(&mut self.lock(), value)
    }

    /// Every `Set-Cookie` value appended so far, in order.
    pub fn set_cookies(&self) -> Vec<String> {
        self.lock()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// Copy the collected `Set-Cookie` headers into `headers`.
    pub fn apply_to(&self, headers: &mut HeaderMap) {
        for value in self.lock().get_all(SET_COOKIE) {
            headers.append(SET_COOKIE, value.clone());
        }
    }

    pub fn into_header_map(self) -> HeaderMap {
        match Arc::try_unwrap(self.inner) {
            Ok(headers) => headers.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => {
                let headers = shared
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone();
                headers
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, HeaderMap> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResponseCookieSink for ResponseHeaders {
    fn append_set_cookie(&self, value: &str) {
        append_or_warn(&mut self.lock(), value);
    }
}
