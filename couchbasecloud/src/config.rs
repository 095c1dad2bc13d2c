use crate::error::{ErrorKind, Result};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://cloudapi.cloud.couchbase.com";
pub const DEFAULT_API_VERSION: &str = "v2";

pub const ENV_ACCESS_KEY: &str = "CBC_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "CBC_SECRET_KEY";
pub const ENV_BASE_URL: &str = "CBC_BASE_URL";

/// Configuration for a Couchbase Cloud client.
#[derive(Clone)]
pub struct Config {
    /// Scheme and host of the API, without the version prefix.
    pub base_url: String,

    /// Version segment prepended to every endpoint path, e.g. "v2".
    pub api_version: String,

    /// Public part of the API key pair, sent in the Authorization header.
    pub access_key: String,

    /// Secret part of the API key pair, only used to sign requests.
    pub secret_key: String,

    pub user_agent: String,

    /// Applied to every request. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new_authenticated(access_key: &str, secret_key: &str) -> Self {
        Config {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            ..Config::default()
        }
    }

    /// Reads the API keys from `CBC_ACCESS_KEY` and `CBC_SECRET_KEY`.
    /// `CBC_BASE_URL` overrides the default endpoint when set.
    pub fn from_env() -> Result<Self> {
        let access_key = require_env(ENV_ACCESS_KEY)?;
        let secret_key = require_env(ENV_SECRET_KEY)?;

        let mut cfg = Config::new_authenticated(&access_key, &secret_key);
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            if !base_url.is_empty() {
                cfg.base_url = base_url;
            }
        }

        Ok(cfg)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            access_key: String::new(),
            secret_key: String::new(),
            user_agent: format!("couchbasecloud-rs/{}", env!("CARGO_PKG_VERSION")),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(ErrorKind::Config(format!("{} is not set", key)).into()),
    }
}
