//! # isocookie
//!
//! One cookie API for code that runs both in a browser document and during
//! server-side rendering.
//!
//! In a browser, reads and writes go to the live `document.cookie`. While
//! rendering on the server, reads come from the incoming request's `Cookie`
//! header and writes append `Set-Cookie` headers to the outgoing response.
//! The same calls produce the same cookie strings in both places.
//!
//! ## Features
//!
//! - **Parsing**: `check`, `get` and `get_all` over a raw cookie string
//! - **Serialization**: attribute order, `SameSite=Lax` default, `Secure` forced for `SameSite=None`
//! - **Context dispatch**: browser document or request/response header pair, fixed at construction
//! - **Never fails**: malformed encodings and missing collaborators degrade to empty reads and dropped writes
//!
//! ## Quick Start
//!
//! ```rust
//! use isocookie::cookies::attributes::CookieAttributes;
//! use isocookie::cookies::headers::ResponseHeaders;
//! use isocookie::cookies::service::CookieService;
//! use std::sync::Arc;
//!
//! let response = ResponseHeaders::new();
//! let cookies = CookieService::server(
//!     Some(Arc::new("consent=yes".to_string())),
//!     Some(Arc::new(response.clone())),
//! );
//!
//! if cookies.check("consent") {
//!     cookies.set("tracking", "off", &CookieAttributes::new().path("/").expires(365));
//! }
//! assert_eq!(response.set_cookies().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error and warning types
//! - [`cookies`] - Parsing, serialization, stores and the cookie service

pub mod base;
pub mod cookies;
