//! Percent-encoding of cookie names and values.
//!
//! Names and values are written with the `encodeURIComponent` character set
//! and read back with a decoder that never fails: a string that is not valid
//! percent-encoding comes back untouched.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a cookie name or value.
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Decode a percent-encoded cookie component.
///
/// Returns `input` unchanged when it contains a `%` that is not followed by
/// two hex digits, or when the escapes decode to invalid UTF-8.
pub fn decode(input: &str) -> String {
    match try_decode(input) {
        Some(decoded) => decoded,
        None => {
            tracing::trace!(input = %input, "malformed percent-encoding, keeping raw value");
            input.to_string()
        }
    }
}

fn try_decode(input: &str) -> Option<String> {
    if !has_well_formed_escapes(input) {
        return None;
    }
    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// `percent_decode_str` passes stray `%` through, so escapes are checked first.
fn has_well_formed_escapes(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
