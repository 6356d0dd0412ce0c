use std::time::{Duration, Instant};

use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::forward_service::{
    error::{ForwardServiceError, ForwardServiceErrorChecker},
    forward_service::ForwardService,
    request::{ForwardHeaders, ForwardRequest},
    response::{ForwardData, ForwardResult},
};

const FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct ReqwestForwardService {
    client: reqwest::Client,
}

impl ReqwestForwardService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FORWARD_TIMEOUT)
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ForwardService for ReqwestForwardService {
    async fn execute(
        &self,
        request: ForwardRequest,
    ) -> Result<ForwardResult, ForwardServiceError> {
        let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
            .map_err(|e| ForwardServiceError::InvalidRequest(e.to_string()))?;

        info!("Forwarding {} {}", method, request.url);

        let mut request_builder = self
            .client
            .request(method.clone(), &request.url)
            .headers(request.headers.into());

        if let Some(body) = outbound_body(&method, request.body)? {
            request_builder = request_builder.body(body);
        }

        let started = Instant::now();

        let response = request_builder
            .send()
            .await
            .map_err(ForwardServiceError::from)?;

        // Headers are in at this point; reading the body is not timed.
        let response_time_ms = started.elapsed().as_millis() as u64;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let headers: ForwardHeaders = response.headers().into();

        let content_type = headers.get("content-type").cloned().unwrap_or_default();

        let text = response
            .text()
            .await
            .map_err(|e| ForwardServiceError::Network(e.to_string()))?;

        Ok(ForwardResult {
            status: status.as_u16(),
            status_text,
            data: classify_body(&content_type, text),
            response_time_ms,
            headers,
        })
    }
}

/// The body travels only on POST and PUT, and JSON null counts as absent.
/// Anything that is not already a string is serialized to JSON text.
fn outbound_body(
    method: &Method,
    body: Option<Value>,
) -> Result<Option<String>, ForwardServiceError> {
    let Some(body) = body else {
        return Ok(None);
    };

    if body.is_null() || !(*method == Method::POST || *method == Method::PUT) {
        return Ok(None);
    }

    match body {
        Value::String(text) => Ok(Some(text)),
        value => serde_json::to_string(&value)
            .map(Some)
            .map_err(|e| ForwardServiceError::InvalidRequest(e.to_string())),
    }
}

/// A failed parse of a body announced as JSON does not fail the forward: the
/// raw text is logged and replaced by a diagnostic payload.
fn classify_body(content_type: &str, text: String) -> ForwardData {
    if !content_type.contains("application/json") {
        return ForwardData::Raw(text);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => ForwardData::from_value(value),
        Err(parse_error) => {
            error!(
                "Failed to parse JSON response from target: {parse_error}. Raw response text: {text}"
            );
            ForwardData::Structured(json!({
                "message": "Failed to parse JSON response from target",
                "error": parse_error.to_string(),
            }))
        }
    }
}

impl ForwardServiceErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

impl<T: ForwardServiceErrorChecker> From<T> for ForwardServiceError {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            ForwardServiceError::Timeout
        } else if err.is_connect() || err.is_request() {
            ForwardServiceError::Network(err.error_string())
        } else {
            ForwardServiceError::InvalidRequest(err.error_string())
        }
    }
}

impl From<&HeaderMap> for ForwardHeaders {
    fn from(headers: &HeaderMap) -> Self {
        let map = headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();
        ForwardHeaders(map)
    }
}

impl From<ForwardHeaders> for HeaderMap {
    fn from(h: ForwardHeaders) -> Self {
        let mut header_map = HeaderMap::new();
        for (k, v) in h.0 {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(&v),
            ) {
                header_map.insert(name, value);
            }
        }
        header_map
    }
}
