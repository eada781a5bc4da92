//! Client of the remote spreadsheet gateway
//!
//! One endpoint serves every read (GET with an `action` query) and every
//! write (POST with a JSON text body). Responses come wrapped in
//! [`contracts::gateway::Envelope`].

mod client;
mod error;
mod transport;

#[cfg(test)]
pub mod testing;

pub use client::GatewayClient;
pub use error::GatewayError;
pub use transport::{FetchTransport, GatewayRequest, GatewayResponse, Transport};
