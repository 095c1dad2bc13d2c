use crate::error::{ErrorKind, Result};
use crate::{util, Config};
use reqwest::blocking::RequestBuilder;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

/// A blocking client for the Couchbase Cloud public API.
///
/// The client holds its configuration and a pooled HTTP client and nothing
/// else; every call maps onto exactly one request (or, for the `*_pages`
/// helpers, one request per page).
#[derive(Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: Url,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        if config.access_key.is_empty() || config.secret_key.is_empty() {
            let msg = "access key and secret key are required".to_string();
            return Err(ErrorKind::Config(msg).into());
        }

        let base_url = util::parse_base_url(&config)?;
        let http = util::get_client(&config)?;

        Ok(Client {
            http,
            base_url,
            config,
        })
    }

    /// Builds a client from `CBC_ACCESS_KEY`, `CBC_SECRET_KEY` and optionally `CBC_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Client::new(Config::from_env()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = util::endpoint_url(&self.base_url, &self.config.api_version, segments)?;
        Ok(util::get_request_builder(&self.http, method, url))
    }

    /// Sends the request and decodes the JSON response body.
    pub(crate) fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = util::send(&self.http, &self.config, builder)?;
        util::decode(response)
    }

    /// Sends the request and drops the response body.
    pub(crate) fn send(&self, builder: RequestBuilder) -> Result<()> {
        util::send(&self.http, &self.config, builder)?;
        Ok(())
    }
}

pub(crate) fn require_id(what: &str, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ErrorKind::InvalidArgument(format!("{} must not be empty", what)).into());
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_requires_keys() {
        let err = Client::new(Config::default()).unwrap_err();
        match err.kind() {
            ErrorKind::Config(_) => {}
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let cfg = Config::new_authenticated("a", "s").with_base_url("::nope::");
        assert!(Client::new(cfg).is_err());
    }

    #[test]
    fn test_request_url() {
        let client = Client::new(Config::new_authenticated("a", "s")).unwrap();
        let req = client
            .request(Method::DELETE, &["projects", "p-1"])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://cloudapi.cloud.couchbase.com/v2/projects/p-1"
        );
    }

    #[test]
    fn test_require_id() {
        assert!(require_id("cluster id", "abc").is_ok());
        assert_eq!(
            require_id("cluster id", "").unwrap_err().kind(),
            &ErrorKind::InvalidArgument("cluster id must not be empty".to_string())
        );
    }
}
