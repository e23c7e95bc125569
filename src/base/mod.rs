//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): failures inside the cookie pipeline
//! - [`CookieWarning`](cookieerror::CookieWarning): recoverable policy corrections

pub mod cookieerror;
