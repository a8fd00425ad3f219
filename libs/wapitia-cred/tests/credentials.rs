#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use wapitia_cred::{
    ConfigError, CredentialsConfig, HttpBasicCredentials, SessionToken, SessionTokenProvider,
};

#[derive(Debug, PartialEq, Eq)]
enum Session {
    Granted { user: String, module: String },
    Denied,
}

impl SessionToken for Session {}

struct SingleUser {
    username: &'static str,
    password_hash: String,
}

impl SessionTokenProvider<Session> for SingleUser {
    fn lookup_token(
        &self,
        is_valid: bool,
        username: &str,
        password_hash: &str,
        module: &str,
    ) -> Session {
        if is_valid && username == self.username && password_hash == self.password_hash {
            Session::Granted {
                user: username.to_owned(),
                module: module.to_owned(),
            }
        } else {
            Session::Denied
        }
    }
}

fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn login_with_salt_from_yaml() {
    let file = yaml_file("password_salt: NaCl-2019\n");
    temp_env::with_var_unset("WAPITIA_CRED_PASSWORD_SALT", || {
        let config = CredentialsConfig::load(Some(file.path())).unwrap();
        let creds = HttpBasicCredentials::from_config(&config);

        // "wapiti:wapiti"
        let users = SingleUser {
            username: "wapiti",
            password_hash: "1AYUxGKoSX0TDcfEH8ckZqS1c/wHwqBrSOjJKKAEU/I=".to_owned(),
        };
        let granted = creds.session_token("Basic d2FwaXRpOndhcGl0aQ==", "catalog", &users);
        assert_eq!(
            granted,
            Session::Granted {
                user: "wapiti".to_owned(),
                module: "catalog".to_owned()
            }
        );

        let denied = creds.session_token("Basic d2FwaXRpOmVsaw==", "catalog", &users);
        assert_eq!(denied, Session::Denied);
    });
}

#[test]
fn environment_overrides_file() {
    let file = yaml_file("password_salt: from-file\n");
    temp_env::with_var("WAPITIA_CRED_PASSWORD_SALT", Some("from-env"), || {
        let config = CredentialsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.password_salt.expose(), "from-env");
    });
}

#[test]
fn environment_only() {
    temp_env::with_var("WAPITIA_CRED_PASSWORD_SALT", Some("env-salt"), || {
        let config = CredentialsConfig::load(None).unwrap();
        assert_eq!(config.password_salt.expose(), "env-salt");
    });
}

#[test]
fn nothing_configured() {
    temp_env::with_var_unset("WAPITIA_CRED_PASSWORD_SALT", || {
        let err = CredentialsConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    });
}
