//! Credential helpers for Wapitia services.
//!
//! Passwords are hashed with PBKDF2-HMAC-SHA1 and a shared salt, HTTP Basic
//! `Authorization` headers are parsed into [`ParsedAuth`], and
//! [`HttpBasicCredentials`] ties both together to look up a session token
//! through a caller-supplied [`SessionTokenProvider`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod basic;
pub mod config;
pub mod password;
pub mod secret;
pub mod session;

pub use basic::ParsedAuth;
pub use config::{ConfigError, CredentialsConfig};
pub use secret::SecretString;
pub use session::{HttpBasicCredentials, SessionToken, SessionTokenProvider};
