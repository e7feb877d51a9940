//! soroban-executor - client-side contract invocation for Soroban
//!
//! Builds invoke-host-function transactions, signs them with ordered key
//! pairs, drives simulate/submit through a pluggable JSON-RPC transport, and
//! resolves ledger entries back to typed values.
//!
//! The read path builds and simulates without signing; the write path signs
//! with every supplied key pair in order and classifies the outcome as an
//! accepted hash, a decoded on-chain rejection, or a transport failure with
//! unknown outcome. Nothing in this crate retries a submission.

pub mod codec;
pub mod error;
pub mod executor;
pub mod keypair;
pub mod network;
pub mod rpc;
pub mod signing;
pub mod tx_builder;
pub mod types;
pub mod wire;

// Re-export commonly used types
pub use error::Error;
pub use executor::Executor;
pub use keypair::Keypair;
pub use types::SourceAccount;

// XDR value types the public API speaks
pub use stellar_xdr::curr::{Int128Parts, LedgerEntryData, LedgerKey, ScAddress, ScVal};
