use crate::error::{ErrorKind, Result};
use crate::util::signature;
use crate::Config;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Body the API sends along with a failed request.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: String,
}

/// Returns a 'reqwest' client configured with the user agent and timeout of the config.
pub fn get_client(cfg: &Config) -> Result<Client> {
    let client = Client::builder()
        .user_agent(cfg.user_agent.as_str())
        .timeout(cfg.timeout)
        .build()?;
    Ok(client)
}

/// Validates the configured base url once, so requests can join onto it safely.
pub fn parse_base_url(cfg: &Config) -> Result<Url> {
    let url = Url::parse(&cfg.base_url)
        .map_err(|e| ErrorKind::Config(format!("invalid base url {:?}: {}", cfg.base_url, e)))?;

    if url.cannot_be_a_base() {
        let msg = format!("base url {:?} cannot carry a path", cfg.base_url);
        return Err(ErrorKind::Config(msg).into());
    }

    Ok(url)
}

/// Builds `<base>/<version>/<segments..>`. Every segment is percent-encoded on its own,
/// so identifiers can never break out of their position in the path.
pub fn endpoint_url(base: &Url, version: &str, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);

    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ErrorKind::Config("base url cannot carry a path".to_string()))?;
        path.pop_if_empty();
        if !version.is_empty() {
            path.push(version);
        }
        path.extend(segments);
    }

    Ok(url)
}

/// Returns a 'reqwest' request-builder for a given method and url
/// with the JSON content headers every endpoint expects.
pub fn get_request_builder(client: &Client, method: Method, url: Url) -> RequestBuilder {
    client
        .request(method, url)
        .header(ACCEPT, JSON_CONTENT_TYPE)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
}

/// Attaches `payload` as the JSON request body.
pub fn json_body<T: Serialize + ?Sized>(
    builder: RequestBuilder,
    payload: &T,
) -> Result<RequestBuilder> {
    let body = serde_json::to_vec(payload)?;
    Ok(builder.body(body))
}

/// Signs and executes a request. Responses outside of the 2xx range are turned
/// into `ErrorKind::Status`; transport errors are passed through as the cause.
pub fn send(client: &Client, cfg: &Config, builder: RequestBuilder) -> Result<Response> {
    let mut request = builder.build()?;
    signature::authorize(cfg, &mut request)?;

    debug!(method = %request.method(), url = %request.url(), "sending request");
    let response = client.execute(request)?;

    let status = response.status();
    debug!(status = status.as_u16(), "received response");

    if !status.is_success() {
        let code = status.as_u16();
        let message = match response.json::<ErrorResponse>() {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => format!("unknown error, status code: {}", code),
        };
        warn!(status = code, message = %message, "request failed");

        return Err(ErrorKind::Status {
            status: code,
            message,
        }
        .into());
    }

    Ok(response)
}

/// Reads the whole body and decodes it as JSON.
pub fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}
