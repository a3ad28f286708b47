//! Credential resolution from CLI flags, environment and `.netrc`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{HerokuError, Result};

/// Credentials used to authenticate against the Platform API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// OAuth authorization / API token
    Token(String),
    /// Account email and password
    Basic { username: String, password: String },
}

impl Credentials {
    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        match self {
            Credentials::Token(token) => format!("Bearer {}", token),
            Credentials::Basic { username, password } => {
                let encoded = BASE64.encode(format!("{}:{}", username, password));
                format!("Basic {}", encoded)
            }
        }
    }
}

/// Credential resolution with fallback logic
pub struct CredentialsResolver {
    netrc_path: Option<PathBuf>,
}

impl Default for CredentialsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsResolver {
    /// Create a resolver that falls back to `~/.netrc`
    pub fn new() -> Self {
        Self {
            netrc_path: dirs::home_dir().map(|home| home.join(credentials::NETRC_FILE)),
        }
    }

    /// Create a resolver with an explicit `.netrc` location
    pub fn with_netrc_path(netrc_path: Option<PathBuf>) -> Self {
        Self { netrc_path }
    }

    /// Resolve credentials with fallback:
    /// 1. Token (flag or HEROKU_AUTH_TOKEN); basic auth is ignored when present
    /// 2. Username and password (flags or HEROKU_USERNAME / HEROKU_PASSWORD)
    /// 3. `api.heroku.com` entry in `~/.netrc`, as written by `heroku login`
    pub fn resolve(
        &self,
        token: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Credentials> {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            debug!("Using bearer token");
            return Ok(Credentials::Token(token.to_string()));
        }

        match (username, password) {
            (Some(username), Some(password)) => {
                debug!("Using basic auth for user '{}'", username);
                return Ok(Credentials::Basic {
                    username: username.to_string(),
                    password: password.to_string(),
                });
            }
            (Some(_), None) => {
                return Err(HerokuError::Credentials(format!(
                    "A password is required with --username (or set {})",
                    credentials::PASSWORD_ENV_VAR
                )));
            }
            _ => {}
        }

        self.read_from_netrc()
    }

    fn read_from_netrc(&self) -> Result<Credentials> {
        let path = self
            .netrc_path
            .as_deref()
            .ok_or_else(|| HerokuError::CredentialsNotFound(not_found_message(None)))?;

        debug!("Looking for credentials in {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|_| HerokuError::CredentialsNotFound(not_found_message(Some(path))))?;

        match netrc_password(&content, credentials::NETRC_MACHINE) {
            Some(token) => {
                debug!("Using token from {}", path.display());
                Ok(Credentials::Token(token))
            }
            None => Err(HerokuError::CredentialsNotFound(not_found_message(Some(
                path,
            )))),
        }
    }
}

fn not_found_message(netrc_path: Option<&Path>) -> String {
    let netrc_info = netrc_path
        .map(|p| format!(" or a '{}' entry in {}", credentials::NETRC_MACHINE, p.display()))
        .unwrap_or_default();

    format!(
        "No Heroku credentials found. Use --token or --username/--password, set {} or {}/{}{}.",
        credentials::TOKEN_ENV_VAR,
        credentials::USERNAME_ENV_VAR,
        credentials::PASSWORD_ENV_VAR,
        netrc_info
    )
}

/// Extract the password of a `machine` entry from `.netrc` content
fn netrc_password(content: &str, machine: &str) -> Option<String> {
    let mut tokens = content.split_whitespace();
    let mut in_machine = false;

    while let Some(token) = tokens.next() {
        match token {
            "machine" => in_machine = tokens.next() == Some(machine),
            "default" => in_machine = false,
            "password" if in_machine => return tokens.next().map(str::to_string),
            "login" | "account" | "password" => {
                tokens.next();
            }
            _ => {}
        }
    }
    None
}
