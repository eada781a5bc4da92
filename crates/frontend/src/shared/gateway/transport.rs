use super::GatewayError;
use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{RequestCache, RequestMode, RequestRedirect};

/// The gateway reads request bodies as plain text and parses them itself
const POST_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayRequest {
    /// `query` is already encoded, without the leading `?`
    Get { query: String },
    /// `body` is JSON text
    Post { body: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl GatewayResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves a request to the gateway and back, without interpreting the body.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError>;
}

/// Browser `fetch` transport
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn get_url(&self, query: &str) -> String {
        if query.is_empty() {
            return self.endpoint.clone();
        }
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.endpoint, separator, query)
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        let sent = match request {
            GatewayRequest::Get { query } => Request::get(&self.get_url(&query)).send().await,
            GatewayRequest::Post { body } => Request::post(&self.endpoint)
                .header("Content-Type", POST_CONTENT_TYPE)
                .mode(RequestMode::Cors)
                .cache(RequestCache::NoCache)
                .redirect(RequestRedirect::Follow)
                .body(body)
                .map_err(|e| GatewayError::Request(format!("Failed to build request: {}", e)))?
                .send()
                .await,
        };
        let response =
            sent.map_err(|e| GatewayError::Request(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Decode(format!("Failed to read body: {}", e)))?;

        Ok(GatewayResponse {
            status,
            status_text,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_url_joins_query() {
        let plain = FetchTransport::new("https://gw.example.com/exec");
        assert_eq!(
            plain.get_url("action=getSheetNames"),
            "https://gw.example.com/exec?action=getSheetNames"
        );
        assert_eq!(plain.get_url(""), "https://gw.example.com/exec");

        let with_query = FetchTransport::new("https://gw.example.com/exec?key=1");
        assert_eq!(
            with_query.get_url("action=getData"),
            "https://gw.example.com/exec?key=1&action=getData"
        );
    }

    #[test]
    fn test_success_range() {
        assert!(GatewayResponse::ok("{}").is_success());
        let not_found = GatewayResponse {
            status: 404,
            status_text: "Not Found".to_string(),
            body: String::new(),
        };
        assert!(!not_found.is_success());
    }
}
