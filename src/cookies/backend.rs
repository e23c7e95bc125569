//! Routing cookie reads and writes to the store of the current execution
//! context.

use crate::cookies::document::DocumentCookie;
use crate::cookies::headers::{RequestCookies, ResponseCookieSink};
use std::fmt;
use std::sync::Arc;

/// Where the service is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    /// A live document exists.
    Browser,
    /// Server-side rendering: only request and response headers exist.
    Server,
}

/// The backing store, chosen once when the service is built.
///
/// In `Server` the store is write-only on the response side: a write appends
/// a `Set-Cookie` header but later reads still see the request's `Cookie`
/// header as it arrived.
#[derive(Clone)]
pub enum CookieBackend {
    Browser(Arc<dyn DocumentCookie>),
    Server {
        request: Option<Arc<dyn RequestCookies>>,
        response: Option<Arc<dyn ResponseCookieSink>>,
    },
}

impl CookieBackend {
    pub fn browser(document: Arc<dyn DocumentCookie>) -> Self {
        CookieBackend::Browser(document)
    }

    pub fn server(
        request: Option<Arc<dyn RequestCookies>>,
        response: Option<Arc<dyn ResponseCookieSink>>,
    ) -> Self {
        CookieBackend::Server { request, response }
    }

    /// Platform detection: a present document means a browser.
    pub fn detect(
        document: Option<Arc<dyn DocumentCookie>>,
        request: Option<Arc<dyn RequestCookies>>,
        response: Option<Arc<dyn ResponseCookieSink>>,
    ) -> Self {
        match document {
            Some(document) => Self::browser(document),
            None => Self::server(request, response),
        }
    }

    pub fn context(&self) -> ExecutionContext {
        match self {
            CookieBackend::Browser(_) => ExecutionContext::Browser,
            CookieBackend::Server { .. } => ExecutionContext::Server,
        }
    }

    /// The current raw cookie string. Empty when there is nothing to read.
    pub fn read(&self) -> String {
        match self {
            CookieBackend::Browser(document) => document.cookie(),
            CookieBackend::Server { request, .. } => request
                .as_ref()
                .and_then(|request| request.cookie_header())
                .unwrap_or_default(),
        }
    }

    /// Store one serialized cookie.
    pub fn write(&self, cookie: &str) {
        match self {
            CookieBackend::Browser(document) => document.set_cookie(cookie),
            CookieBackend::Server {
                response: Some(response),
                ..
            } => response.append_set_cookie(cookie),
            CookieBackend::Server { response: None, .. } => {
                tracing::debug!("no response headers, dropping cookie write");
            }
        }
    }
}

impl fmt::Debug for CookieBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookieBackend::Browser(_) => f.debug_tuple("Browser").finish(),
            CookieBackend::Server { request, response } => f
                .debug_struct("Server")
                .field("request", &request.is_some())
                .field("response", &response.is_some())
                .finish(),
        }
    }
}
