//! RPC transport boundary
//!
//! The executor consumes the ledger's RPC interface through [`SorobanRpc`]:
//! one async operation per method, carried by the request/response payloads
//! in [`protocol`]. [`HttpClient`] is the production implementation; tests
//! substitute their own. Cancellation and timeouts live at this boundary,
//! and nothing below it retries.

mod http;
pub mod protocol;

pub use http::{HttpClient, HttpClientConfig};

use async_trait::async_trait;
use thiserror::Error;

use protocol::{
    GetLedgerEntriesRequest, GetLedgerEntriesResponse, SendTransactionRequest,
    SendTransactionResponse, SimulateTransactionRequest, SimulateTransactionResponse,
};

/// Transport-level failure. The outcome of the remote call is unknown.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The request never completed or came back with a non-success HTTP status
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a JSON-RPC error object
    #[error("rpc server error {code}: {message}")]
    Server { code: i64, message: String },

    /// The response body did not match the JSON-RPC envelope
    #[error("malformed rpc response: {0}")]
    Protocol(String),
}

/// The three ledger RPC operations the executor consumes.
#[async_trait]
pub trait SorobanRpc: Send + Sync {
    /// Dry-run a transaction envelope without submitting it.
    async fn simulate_transaction(
        &self,
        request: SimulateTransactionRequest,
    ) -> Result<SimulateTransactionResponse, RpcError>;

    /// Submit a signed transaction envelope for inclusion.
    async fn send_transaction(
        &self,
        request: SendTransactionRequest,
    ) -> Result<SendTransactionResponse, RpcError>;

    /// Batch-fetch ledger entries by encoded key.
    async fn get_ledger_entries(
        &self,
        request: GetLedgerEntriesRequest,
    ) -> Result<GetLedgerEntriesResponse, RpcError>;
}
