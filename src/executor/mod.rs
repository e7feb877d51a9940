//! Contract execution surface
//!
//! [`Executor`] wraps one transport handle and exposes the three ledger
//! operations: dry-run simulation, signed submission, and ledger-entry
//! resolution. The executor holds no other state; concurrency and retry
//! policy belong to the caller.

mod contract;
mod ledger;

use std::sync::Arc;

use crate::error::Error;
use crate::rpc::{HttpClient, SorobanRpc};
use crate::tx_builder::MIN_BASE_FEE;

/// Client-side executor for contract invocation against one RPC endpoint.
pub struct Executor {
    rpc: Arc<dyn SorobanRpc>,
    base_fee: u32,
}

impl Executor {
    /// Executor over an existing transport handle.
    pub fn new(rpc: Arc<dyn SorobanRpc>) -> Self {
        Self {
            rpc,
            base_fee: MIN_BASE_FEE,
        }
    }

    /// Executor over a fresh HTTP client for `url`.
    pub fn from_url(url: impl Into<String>) -> Result<Self, Error> {
        let client = HttpClient::from_url(url)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Replace the base fee (stroops) used for built transactions.
    pub fn with_base_fee(mut self, base_fee: u32) -> Self {
        self.base_fee = base_fee;
        self
    }

    /// The underlying transport handle.
    pub fn rpc(&self) -> &Arc<dyn SorobanRpc> {
        &self.rpc
    }
}
