use thiserror::Error;

/// Why a gateway call produced no data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request could not be built or sent at all
    #[error("Request failed: {0}")]
    Request(String),
    /// Non-2xx HTTP status
    #[error("Network error: {status} {status_text}")]
    Transport { status: u16, status_text: String },
    /// The body was not the expected JSON
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The script reported `status: "error"`
    #[error("Script error: {0}")]
    Application(String),
}
