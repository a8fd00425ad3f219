//! Session token lookup from HTTP Basic credentials.

use crate::basic::ParsedAuth;
use crate::config::CredentialsConfig;
use crate::password;
use crate::secret::SecretString;

/// Marker for values handed out as session tokens.
pub trait SessionToken {}

/// Resolves a session token for a login attempt.
///
/// `password_hash` is the base64 PBKDF2 hash of the supplied password, never
/// the password itself. Providers are called for invalid headers too, with
/// `is_valid == false` and empty credentials.
pub trait SessionTokenProvider<T: SessionToken> {
    fn lookup_token(
        &self,
        is_valid: bool,
        username: &str,
        password_hash: &str,
        module: &str,
    ) -> T;
}

impl<T, F> SessionTokenProvider<T> for F
where
    T: SessionToken,
    F: Fn(bool, &str, &str, &str) -> T,
{
    fn lookup_token(
        &self,
        is_valid: bool,
        username: &str,
        password_hash: &str,
        module: &str,
    ) -> T {
        self(is_valid, username, password_hash, module)
    }
}

/// Turns `Authorization` headers into session tokens using a fixed salt.
#[derive(Debug, Clone)]
pub struct HttpBasicCredentials {
    salt: SecretString,
}

impl HttpBasicCredentials {
    #[must_use]
    pub fn new(salt: impl Into<String>) -> Self {
        Self {
            salt: SecretString::new(salt),
        }
    }

    #[must_use]
    pub fn from_config(config: &CredentialsConfig) -> Self {
        Self {
            salt: config.password_salt.clone(),
        }
    }

    /// Parse `auth_header`, hash its password and ask `provider` for the
    /// token of `module`.
    #[must_use]
    pub fn session_token<T, P>(&self, auth_header: &str, module: &str, provider: &P) -> T
    where
        T: SessionToken,
        P: SessionTokenProvider<T> + ?Sized,
    {
        let auth = ParsedAuth::parse(auth_header);
        let password_hash = password::encrypt(auth.password(), self.salt.expose().as_bytes());
        tracing::trace!(
            valid = auth.is_valid(),
            username = auth.username(),
            module,
            "looking up session token"
        );
        provider.lookup_token(auth.is_valid(), auth.username(), &password_hash, module)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Token(String);

    impl SessionToken for Token {}

    struct Users;

    impl SessionTokenProvider<Token> for Users {
        fn lookup_token(
            &self,
            is_valid: bool,
            username: &str,
            password_hash: &str,
            module: &str,
        ) -> Token {
            let known = is_valid
                && username == "elk"
                && password_hash == password::encrypt("antlers", b"NaCl");
            if known {
                Token(format!("{module}:{username}"))
            } else {
                Token(String::new())
            }
        }
    }

    #[test]
    fn known_user_gets_token() {
        let creds = HttpBasicCredentials::new("NaCl");
        let token = creds.session_token("Basic ZWxrOmFudGxlcnM=", "herd", &Users);
        assert_eq!(token, Token("herd:elk".to_owned()));
    }

    #[test]
    fn wrong_salt_rejects() {
        let creds = HttpBasicCredentials::new("KCl");
        let token = creds.session_token("Basic ZWxrOmFudGxlcnM=", "herd", &Users);
        assert_eq!(token, Token(String::new()));
    }

    #[test]
    fn closure_provider_sees_invalid_headers() {
        let creds = HttpBasicCredentials::new("NaCl");
        let provider = |is_valid: bool, username: &str, hash: &str, module: &str| {
            Token(format!("{is_valid}|{username}|{}|{module}", hash.is_empty()))
        };
        let token = creds.session_token("Bearer abc", "herd", &provider);
        assert_eq!(token, Token("false||false|herd".to_owned()));
    }

    #[test]
    fn provider_receives_hash_not_password() {
        let creds = HttpBasicCredentials::new("salt");
        let provider = |_: bool, _: &str, hash: &str, _: &str| Token(hash.to_owned());
        let token = creds.session_token("Basic ZWxrOnBhc3N3b3Jk", "herd", &provider);
        assert_eq!(
            token,
            Token("osJkYYaChHS3VFkaVHwY8TLYjXRMFSZVpHAWGhoFITU=".to_owned())
        );
    }
}
