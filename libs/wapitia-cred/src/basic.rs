//! HTTP Basic `Authorization` header parsing.

use std::fmt;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const BASIC_SCHEME: &str = "Basic";

/// Standard alphabet, padding optional, stray trailing bits ignored.
const PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Username and password carried by an HTTP Basic `Authorization` header.
///
/// A header that cannot be parsed yields an invalid value with an empty
/// username and password rather than an error; callers decide what an
/// invalid login means.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ParsedAuth {
    #[zeroize(skip)]
    is_valid: bool,
    username: String,
    password: String,
}

impl ParsedAuth {
    /// Parse a header value of the form `Basic <base64(user:password)>`.
    ///
    /// The value must split on whitespace runs into exactly the scheme
    /// (matched case-sensitively) and the payload. Leading whitespace counts
    /// as an empty first part; trailing whitespace is ignored. The payload
    /// may omit its `=` padding. The decoded payload is split on its first
    /// colon only; without a colon it is all username.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let parts = header_parts(header);
        let [scheme, payload] = parts.as_slice() else {
            tracing::debug!(parts = parts.len(), "authorization header is not two parts");
            return Self::invalid();
        };
        if *scheme != BASIC_SCHEME {
            tracing::debug!(scheme, "authorization header is not Basic");
            return Self::invalid();
        }

        let decoded = match PAYLOAD.decode(payload) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "authorization payload is not base64");
                return Self::invalid();
            }
        };
        let mut text = match String::from_utf8(decoded) {
            Ok(text) => text,
            Err(e) => {
                e.into_bytes().zeroize();
                tracing::debug!("authorization payload is not UTF-8");
                return Self::invalid();
            }
        };

        let parsed = match text.split_once(':') {
            Some((username, password)) => Self::valid(username, password),
            None => Self::valid(&text, ""),
        };
        text.zeroize();
        parsed
    }

    /// Value for an unusable header.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            username: String::new(),
            password: String::new(),
        }
    }

    fn valid(username: &str, password: &str) -> Self {
        Self {
            is_valid: true,
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Whitespace-separated parts of `header`. A leading run of whitespace
/// yields an empty first part, trailing whitespace yields none.
fn header_parts(header: &str) -> Vec<&str> {
    let mut pieces = header.trim_end().split(char::is_whitespace);
    let first = pieces.next().unwrap_or_default();
    std::iter::once(first)
        .chain(pieces.filter(|p| !p.is_empty()))
        .collect()
}

impl fmt::Debug for ParsedAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedAuth")
            .field("is_valid", &self.is_valid)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
