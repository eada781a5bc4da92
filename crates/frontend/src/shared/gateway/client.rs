use super::{GatewayError, GatewayRequest, GatewayResponse, Transport};
use crate::shared::busy::BusyIndicator;
use contracts::gateway::{Envelope, ReadQuery};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Typed access to the gateway.
///
/// Raises the busy indicator for the duration of every call and logs every
/// failure; reacting to the failure is left to the caller.
#[derive(Clone)]
pub struct GatewayClient {
    transport: Arc<dyn Transport>,
    busy: BusyIndicator,
}

impl GatewayClient {
    pub fn new(transport: Arc<dyn Transport>, busy: BusyIndicator) -> Self {
        Self { transport, busy }
    }

    pub async fn get<T: DeserializeOwned>(&self, query: &ReadQuery) -> Result<T, GatewayError> {
        let query = serde_qs::to_string(query)
            .map_err(|e| GatewayError::Request(format!("Failed to encode query: {}", e)))?;
        self.call(GatewayRequest::Get { query }).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, payload: &B) -> Result<T, GatewayError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| GatewayError::Request(format!("Failed to serialize request: {}", e)))?;
        self.call(GatewayRequest::Post { body }).await
    }

    async fn call<T: DeserializeOwned>(&self, request: GatewayRequest) -> Result<T, GatewayError> {
        let _busy = self.busy.acquire();
        let result = match self.transport.send(request).await {
            Ok(response) => decode_response(response),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log::error!("Gateway call failed: {}", e);
        }
        result
    }
}

fn decode_response<T: DeserializeOwned>(response: GatewayResponse) -> Result<T, GatewayError> {
    if !response.is_success() {
        return Err(GatewayError::Transport {
            status: response.status,
            status_text: response.status_text,
        });
    }

    let envelope: Envelope = serde_json::from_str(&response.body)
        .map_err(|e| GatewayError::Decode(format!("Failed to parse response: {}", e)))?;
    let data = envelope.into_result().map_err(GatewayError::Application)?;

    serde_json::from_value(data)
        .map_err(|e| GatewayError::Decode(format!("Unexpected payload: {}", e)))
}
