//! Scripted gateway double for native tests

use super::{GatewayError, GatewayRequest, GatewayResponse, Transport};
use crate::shared::busy::BusyIndicator;
use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Reply = Result<GatewayResponse, GatewayError>;

/// Handle of a held reply; the request stays in flight until released.
pub struct Release(oneshot::Sender<()>);

impl Release {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

/// Replies with queued responses in order and records what was sent.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<(Option<oneshot::Receiver<()>>, Reply)>>,
    requests: Mutex<Vec<GatewayRequest>>,
    busy: BusyIndicator,
    busy_seen: Mutex<Vec<usize>>,
}

impl ScriptedTransport {
    pub fn new(busy: BusyIndicator) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            busy,
            busy_seen: Mutex::new(Vec::new()),
        })
    }

    pub fn reply(&self, response: GatewayResponse) {
        self.replies.lock().unwrap().push_back((None, Ok(response)));
    }

    /// Queues `data` as a success reply that is only delivered once the
    /// returned handle is released.
    pub fn hold_data(&self, data: Value) -> Release {
        let (tx, rx) = oneshot::channel();
        let body = json!({ "status": "success", "data": data }).to_string();
        self.replies
            .lock()
            .unwrap()
            .push_back((Some(rx), Ok(GatewayResponse::ok(body))));
        Release(tx)
    }

    pub fn reply_json(&self, body: Value) {
        self.reply(GatewayResponse::ok(body.to_string()));
    }

    pub fn reply_data(&self, data: Value) {
        self.reply_json(json!({ "status": "success", "data": data }));
    }

    pub fn fail(&self, error: GatewayError) {
        self.replies.lock().unwrap().push_back((None, Err(error)));
    }

    pub fn requests(&self) -> Vec<GatewayRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// POST bodies sent so far, parsed
    pub fn posted(&self) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                GatewayRequest::Post { body } => serde_json::from_str(&body).ok(),
                GatewayRequest::Get { .. } => None,
            })
            .collect()
    }

    /// GET query strings sent so far
    pub fn queries(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                GatewayRequest::Get { query } => Some(query),
                GatewayRequest::Post { .. } => None,
            })
            .collect()
    }

    /// Pending-call count observed by each request while in flight
    pub fn busy_seen(&self) -> Vec<usize> {
        self.busy_seen.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        self.busy_seen.lock().unwrap().push(self.busy.pending());
        self.requests.lock().unwrap().push(request);
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some((Some(gate), reply)) => {
                let _ = gate.await;
                reply
            }
            Some((None, reply)) => reply,
            None => Err(GatewayError::Request("no scripted reply".to_string())),
        }
    }
}
