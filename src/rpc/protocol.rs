//! JSON-RPC protocol payloads
//!
//! Request and response shapes for the three RPC methods the executor
//! consumes. Field names follow the server's camelCase wire names. XDR-bearing
//! fields stay base64 strings at this layer; decoding belongs to the callers.

use serde::{Deserialize, Serialize};

/// `simulateTransaction` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateTransactionRequest {
    /// Base64 XDR transaction envelope.
    pub transaction: String,
}

/// One host-function result inside a simulation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateHostFunctionResult {
    /// Authorization payloads the call requires (base64 XDR), one per signer.
    #[serde(default)]
    pub auth: Vec<String>,
    /// Base64 XDR of the function's return value; absent when the function
    /// returns nothing.
    #[serde(default)]
    pub xdr: Option<String>,
}

/// `simulateTransaction` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateTransactionResponse {
    /// One entry per host-function operation; exactly one for the
    /// single-operation transactions this crate builds.
    #[serde(default)]
    pub results: Vec<SimulateHostFunctionResult>,
    /// Server-side simulation failure, e.g. a trapped contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Ledger sequence the simulation ran against.
    #[serde(default)]
    pub latest_ledger: u32,
}

/// `sendTransaction` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionRequest {
    /// Base64 XDR transaction envelope, signed.
    pub transaction: String,
}

/// `sendTransaction` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionResponse {
    /// Ingestion status reported by the server: PENDING, DUPLICATE,
    /// TRY_AGAIN_LATER, or ERROR.
    #[serde(default)]
    pub status: String,
    /// Hex transaction hash assigned by the network.
    #[serde(default)]
    pub hash: String,
    /// Base64 XDR of the rejection detail; absent or empty on acceptance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_result_xdr: Option<String>,
    /// Latest ledger known to the server at submission time.
    #[serde(default)]
    pub latest_ledger: u32,
}

/// `getLedgerEntries` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLedgerEntriesRequest {
    /// Base64 XDR ledger keys, in request order.
    pub keys: Vec<String>,
}

/// One ledger entry in a lookup response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryResult {
    /// Base64 XDR ledger key, echoing a requested key.
    pub key: String,
    /// Base64 XDR of the entry's data.
    pub xdr: String,
    /// Ledger sequence of the entry's last modification.
    #[serde(default)]
    pub last_modified_ledger_seq: u32,
    /// Expiry ledger for entries with a lifetime, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_until_ledger_seq: Option<u32>,
}

/// `getLedgerEntries` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLedgerEntriesResponse {
    /// Entries for the requested keys that exist, in request order.
    #[serde(default)]
    pub entries: Vec<LedgerEntryResult>,
    /// Latest ledger known to the server at lookup time.
    #[serde(default)]
    pub latest_ledger: u32,
}
