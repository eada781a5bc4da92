//! Wire contracts for the spreadsheet gateway.
//!
//! Everything the browser client sends to or receives from the remote
//! endpoint is described here, so the shapes can be checked without a browser.

pub mod gateway;
pub mod sheets;
