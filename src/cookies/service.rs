//! The cookie service: one API over the browser and server stores.

use crate::cookies::attributes::{CookieAttributes, Expires};
use crate::cookies::backend::{CookieBackend, ExecutionContext};
use crate::cookies::config::CookieServiceConfig;
use crate::cookies::cookiestring::{build, EXPIRED};
use crate::cookies::diagnostics::{CookieDiagnostics, TracingDiagnostics};
use crate::cookies::document::DocumentCookie;
use crate::cookies::headers::{RequestCookies, ResponseCookieSink};
use crate::cookies::parser;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Reads and writes cookies through whichever store the execution context
/// provides.
///
/// The context is fixed at construction. Every call reads the raw cookie
/// string afresh or writes exactly one serialized cookie; nothing is cached.
///
/// # Example
/// ```rust
/// use isocookie::cookies::attributes::CookieAttributes;
/// use isocookie::cookies::headers::ResponseHeaders;
/// use isocookie::cookies::service::CookieService;
/// use std::sync::Arc;
///
/// let response = ResponseHeaders::new();
/// let cookies = CookieService::server(
///     Some(Arc::new("theme=dark".to_string())),
///     Some(Arc::new(response.clone())),
/// );
///
/// assert_eq!(cookies.get("theme"), "dark");
/// cookies.set("visited", "1", &CookieAttributes::new().path("/"));
/// assert_eq!(response.set_cookies(), vec!["visited=1;path=/;sameSite=Lax;"]);
/// ```
#[derive(Clone)]
pub struct CookieService {
    backend: CookieBackend,
    config: CookieServiceConfig,
    diagnostics: Arc<dyn CookieDiagnostics>,
}

impl CookieService {
    pub fn new(backend: CookieBackend) -> Self {
        Self {
            backend,
            config: CookieServiceConfig::default(),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn browser(document: Arc<dyn DocumentCookie>) -> Self {
        Self::new(CookieBackend::browser(document))
    }

    pub fn server(
        request: Option<Arc<dyn RequestCookies>>,
        response: Option<Arc<dyn ResponseCookieSink>>,
    ) -> Self {
        Self::new(CookieBackend::server(request, response))
    }

    pub fn with_config(mut self, config: CookieServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn CookieDiagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn context(&self) -> ExecutionContext {
        self.backend.context()
    }

    pub fn config(&self) -> &CookieServiceConfig {
        &self.config
    }

    /// True if a cookie called `name` is visible.
    pub fn check(&self, name: &str) -> bool {
        parser::exists(name, &self.backend.read())
    }

    /// Value of the cookie called `name`, or an empty string.
    pub fn get(&self, name: &str) -> String {
        parser::get_one(name, &self.backend.read())
    }

    /// Every visible cookie by name.
    pub fn get_all(&self) -> HashMap<String, String> {
        parser::get_all(&self.backend.read())
    }

    /// Write a cookie. Unset attributes fall back to the configured defaults.
    pub fn set(&self, name: &str, value: &str, attributes: &CookieAttributes) {
        let attributes = attributes.or(&self.config.defaults);
        let cookie = build(name, value, &attributes, self.diagnostics.as_ref());
        tracing::debug!(context = ?self.context(), name = %name, "writing cookie");
        self.backend.write(&cookie);
    }

    /// Expire the cookie called `name`. `path` and `domain` must match the
    /// ones it was written with.
    pub fn delete(&self, name: &str, attributes: &CookieAttributes) {
        let attributes = CookieAttributes {
            expires: Some(Expires::At(EXPIRED)),
            ..attributes.clone()
        };
        self.set(name, "", &attributes);
    }

    /// Expire every visible cookie with the same attributes.
    pub fn delete_all(&self, attributes: &CookieAttributes) {
        for name in self.get_all().keys() {
            self.delete(name, attributes);
        }
    }
}

impl fmt::Debug for CookieService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieService")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .finish()
    }
}
