use crate::error::{ErrorKind, Result};
use crate::Config;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use reqwest::blocking::Request;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) const TIMESTAMP_HEADER: &str = "Couchbase-Timestamp";

/// Adds the `Authorization` and `Couchbase-Timestamp` headers to a fully built request.
///
/// The signed endpoint is the url path including the query string, so this
/// has to run after all query parameters have been attached.
pub(crate) fn authorize(cfg: &Config, request: &mut Request) -> Result<()> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| ErrorKind::Unknown)?
        .as_millis()
        .to_string();

    let endpoint = match request.url().query() {
        Some(q) => format!("{}?{}", request.url().path(), q),
        None => request.url().path().to_string(),
    };

    let signature = get_signature(&cfg.secret_key, request.method(), &endpoint, &timestamp)?;
    let bearer = format!("Bearer {}:{}", cfg.access_key, signature);

    let headers = request.headers_mut();
    headers.insert(AUTHORIZATION, header_value(&bearer)?);
    headers.insert(TIMESTAMP_HEADER, header_value(&timestamp)?);

    Ok(())
}

/// base64(HMAC-SHA256(secret, "METHOD\nendpoint\ntimestamp"))
pub(crate) fn get_signature(
    secret: &str,
    method: &Method,
    endpoint: &str,
    timestamp: &str,
) -> Result<String> {
    let mut hmac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|_| ErrorKind::Config("secret key cannot be used for signing".to_string()))?;
    hmac.update(format!("{}\n{}\n{}", method.as_str(), endpoint, timestamp).as_bytes());

    Ok(STANDARD.encode(hmac.finalize().into_bytes()))
}

fn header_value(s: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(s).map_err(|_| {
        ErrorKind::Config("credentials contain characters not allowed in a header".to_string())
            .into()
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use reqwest::Url;

    #[test]
    fn test_get_signature() {
        let sig = get_signature(
            "supersecret",
            &Method::GET,
            "/v2/clusters?page=2&perPage=10",
            "1600000000000",
        )
        .unwrap();
        assert_eq!(sig, "E+O1JEYly1MjqX+p6iReczK/9Uoa75ousyzV+i/G9Qk=");
    }

    #[test]
    fn test_signature_depends_on_every_part() {
        let base = get_signature("s", &Method::GET, "/v2/projects", "1").unwrap();
        let tests = vec![
            get_signature("other", &Method::GET, "/v2/projects", "1").unwrap(),
            get_signature("s", &Method::DELETE, "/v2/projects", "1").unwrap(),
            get_signature("s", &Method::GET, "/v2/projects?page=1", "1").unwrap(),
            get_signature("s", &Method::GET, "/v2/projects", "2").unwrap(),
        ];

        for sig in tests {
            assert_ne!(sig, base);
        }
    }

    #[test]
    fn test_authorize_sets_headers() {
        let cfg = Config::new_authenticated("my-access", "my-secret");
        let url = Url::parse("https://cloudapi.cloud.couchbase.com/v2/users?page=3").unwrap();
        let mut req = Request::new(Method::GET, url);

        authorize(&cfg, &mut req).unwrap();

        let timestamp = req.headers()[TIMESTAMP_HEADER]
            .to_str()
            .unwrap()
            .to_string();
        let expect = format!(
            "Bearer my-access:{}",
            get_signature("my-secret", &Method::GET, "/v2/users?page=3", &timestamp).unwrap()
        );
        assert_eq!(req.headers()[AUTHORIZATION].to_str().unwrap(), expect);
        assert!(timestamp.parse::<u128>().is_ok());
    }
}
