//! Cookie reading and writing across browser and server rendering.
//!
//! # Architecture
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`namematcher`] | Locate a named cookie in a raw cookie string |
//! | [`encoding`] | Percent-encode names/values, decode without failing |
//! | [`parser`] | `exists` / `get_one` / `get_all` over a raw cookie string |
//! | [`cookiestring`] | Serialize a write into a `Set-Cookie` string |
//! | [`backend`] | Route reads/writes to the document or the header pair |
//! | [`service`] | [`CookieService`](service::CookieService), the public entry point |
//!
//! Collaborators are traits so the service never touches a store directly:
//! [`DocumentCookie`](document::DocumentCookie) in a browser,
//! [`RequestCookies`](headers::RequestCookies) and
//! [`ResponseCookieSink`](headers::ResponseCookieSink) on the server.
//!
//! # Server rendering
//!
//! ```rust
//! use isocookie::cookies::attributes::{CookieAttributes, SameSite};
//! use isocookie::cookies::headers::ResponseHeaders;
//! use isocookie::cookies::service::CookieService;
//! use std::sync::Arc;
//!
//! let request = http::Request::builder()
//!     .header("Cookie", "session=abc123; lang=en")
//!     .body(())
//!     .unwrap();
//! let response = ResponseHeaders::new();
//!
//! let cookies = CookieService::server(Some(Arc::new(request)), Some(Arc::new(response.clone())));
//! assert_eq!(cookies.get("lang"), "en");
//!
//! cookies.set("lang", "de", &CookieAttributes::new().expires(30).same_site(SameSite::Strict));
//! // Writes go to the response only.
//! assert_eq!(cookies.get("lang"), "en");
//! assert_eq!(response.set_cookies().len(), 1);
//! ```
//!
//! # Browser
//!
//! ```rust
//! use isocookie::cookies::attributes::CookieAttributes;
//! use isocookie::cookies::document::MemoryDocument;
//! use isocookie::cookies::service::CookieService;
//! use std::sync::Arc;
//!
//! let cookies = CookieService::browser(Arc::new(MemoryDocument::new()));
//! cookies.set("lang", "de", &CookieAttributes::new());
//! assert_eq!(cookies.get("lang"), "de");
//! cookies.delete("lang", &CookieAttributes::new());
//! assert!(!cookies.check("lang"));
//! ```

pub mod attributes;
pub mod backend;
pub mod config;
pub mod cookiestring;
pub mod diagnostics;
pub mod document;
pub mod encoding;
pub mod headers;
pub mod namematcher;
pub mod parser;
pub mod service;
