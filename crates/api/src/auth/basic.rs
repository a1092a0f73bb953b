//! Decoding of `Authorization: Basic <base64(login:password)>` headers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Login and password carried by a Basic `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub login: String,
    pub password: String,
}

/// Parse the value of an `Authorization` header.
///
/// Returns `None` for any other scheme, invalid base64, non-UTF-8 payloads,
/// or a payload without a `:` separator. The password may itself contain `:`.
pub fn parse_basic_header(value: &str) -> Option<BasicCredentials> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (login, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        login: login.to_string(),
        password: password.to_string(),
    })
}
