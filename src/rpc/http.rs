//! Reqwest-backed JSON-RPC 2.0 client
//!
//! One client wraps one endpoint. Retries, failover, and rate limiting are
//! caller policy and do not live here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::protocol::{
    GetLedgerEntriesRequest, GetLedgerEntriesResponse, SendTransactionRequest,
    SendTransactionResponse, SimulateTransactionRequest, SimulateTransactionResponse,
};
use super::{RpcError, SorobanRpc};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("soroban-executor/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// JSON-RPC endpoint URL.
    pub url: String,
    /// Per-request timeout. The client performs no retries.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Settings for `url` with the default timeout and user agent.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Replace the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// JSON-RPC 2.0 client over HTTP implementing [`SorobanRpc`].
pub struct HttpClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

#[derive(Serialize)]
struct JsonRpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct JsonRpcResponse<R> {
    // Absent fields parse as None without serde(default); the attribute on
    // the generic field would force an R: Default bound onto callers.
    result: Option<R>,
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

impl HttpClient {
    /// Build a client from endpoint settings.
    pub fn new(config: HttpClientConfig) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self {
            http,
            url: config.url,
            next_id: AtomicU64::new(1),
        })
    }

    /// Client for `url` with default settings.
    pub fn from_url(url: impl Into<String>) -> Result<Self, RpcError> {
        Self::new(HttpClientConfig::new(url))
    }

    /// Endpoint this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<P, R>(&self, method: &str, params: P) -> Result<R, RpcError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, "rpc request");

        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: JsonRpcResponse<R> = serde_json::from_str(&body)
            .map_err(|e| RpcError::Protocol(format!("method {method}: {e}")))?;

        if let Some(error) = envelope.error {
            return Err(RpcError::Server {
                code: error.code,
                message: error.message,
            });
        }
        envelope.result.ok_or_else(|| {
            RpcError::Protocol(format!(
                "method {method}: response carried neither result nor error"
            ))
        })
    }
}

#[async_trait]
impl SorobanRpc for HttpClient {
    async fn simulate_transaction(
        &self,
        request: SimulateTransactionRequest,
    ) -> Result<SimulateTransactionResponse, RpcError> {
        self.call("simulateTransaction", request).await
    }

    async fn send_transaction(
        &self,
        request: SendTransactionRequest,
    ) -> Result<SendTransactionResponse, RpcError> {
        self.call("sendTransaction", request).await
    }

    async fn get_ledger_entries(
        &self,
        request: GetLedgerEntriesRequest,
    ) -> Result<GetLedgerEntriesResponse, RpcError> {
        self.call("getLedgerEntries", request).await
    }
}
