//! Error types for the executor
//!
//! One crate-level taxonomy covering the whole invocation lifecycle: address
//! parsing, transaction assembly, signing, simulation, submission, and
//! ledger-entry resolution. The split that matters most to callers is
//! [`Error::ContractExecution`] versus [`Error::Transport`]: the first is a
//! completed round-trip carrying the network's rejection, the second means
//! the outcome of the call is unknown.

use stellar_xdr::curr::ScError;
use thiserror::Error;

use crate::rpc::RpcError;
use crate::wire::WireError;

/// Crate-level error for all executor operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed textual address (bad length, version byte, or checksum)
    #[error("malformed address {text:?}: {reason}")]
    Format {
        /// The offending input text
        text: String,
        /// What the caller was expected to supply
        reason: &'static str,
    },

    /// Transaction assembly failed before anything touched the network
    #[error("transaction build failed: {reason}")]
    Build { reason: String },

    /// Signing aborted; no partially signed transaction is surfaced
    #[error("transaction signing failed: {reason}")]
    Sign { reason: String },

    /// A simulation response carried a result count other than one
    #[error("unexpected number of simulation results: {count}")]
    UnexpectedResultCount { count: usize },

    /// The network processed the submission and rejected it
    ///
    /// This is a successful round-trip with a negative outcome, carrying the
    /// decoded on-chain error detail.
    #[error("contract error: {error:?}")]
    ContractExecution { error: ScError },

    /// Network or RPC-layer failure; the outcome of the call is unknown
    #[error("transport failure: {0}")]
    Transport(#[from] RpcError),

    /// A ledger key could not be encoded for the batch request
    #[error("error encoding ledger key at index {index}: {source}")]
    KeyEncode {
        index: usize,
        #[source]
        source: WireError,
    },

    /// A response entry's key or data field could not be decoded
    #[error("error decoding ledger entry at index {index}: {source}")]
    EntryDecode {
        index: usize,
        #[source]
        source: WireError,
    },

    /// Wire codec failure outside the indexed ledger-entry paths
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl Error {
    /// True when the network received and rejected the submission: the
    /// outcome is known, and retrying would re-execute the same failure.
    pub fn is_contract_rejection(&self) -> bool {
        matches!(self, Self::ContractExecution { .. })
    }

    /// True when the call failed below the protocol layer: the outcome is
    /// unknown, and a submission may or may not have reached the network.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Error category for logging and assertions.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Format { .. } => "format",
            Self::Build { .. } => "build",
            Self::Sign { .. } => "sign",
            Self::UnexpectedResultCount { .. } => "simulation",
            Self::ContractExecution { .. } => "contract",
            Self::Transport(_) => "transport",
            Self::KeyEncode { .. } => "ledger-key",
            Self::EntryDecode { .. } => "ledger-entry",
            Self::Wire(_) => "wire",
        }
    }
}

// Convenience constructors for the string-carrying variants
impl Error {
    /// Malformed address input.
    pub fn format(text: impl Into<String>, reason: &'static str) -> Self {
        Self::Format {
            text: text.into(),
            reason,
        }
    }

    /// Transaction assembly failure.
    pub fn build(reason: impl Into<String>) -> Self {
        Self::Build {
            reason: reason.into(),
        }
    }

    /// Signing failure.
    pub fn sign(reason: impl Into<String>) -> Self {
        Self::Sign {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnexpectedResultCount { count: 2 };
        assert_eq!(err.to_string(), "unexpected number of simulation results: 2");

        let err = Error::format("XBADADDR", "expected an account address (G...)");
        assert_eq!(
            err.to_string(),
            "malformed address \"XBADADDR\": expected an account address (G...)"
        );

        let err = Error::build("operation list exceeds the transaction bound");
        assert_eq!(
            err.to_string(),
            "transaction build failed: operation list exceeds the transaction bound"
        );
    }

    #[test]
    fn test_rejection_and_transport_are_distinct() {
        let rejection = Error::ContractExecution {
            error: ScError::Contract(5),
        };
        assert!(rejection.is_contract_rejection());
        assert!(!rejection.is_transport());

        let transport = Error::Transport(RpcError::Protocol("empty body".to_string()));
        assert!(transport.is_transport());
        assert!(!transport.is_contract_rejection());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            Error::ContractExecution {
                error: ScError::Contract(1)
            }
            .category(),
            "contract"
        );
        assert_eq!(
            Error::Transport(RpcError::Protocol("x".to_string())).category(),
            "transport"
        );
        assert_eq!(
            Error::KeyEncode {
                index: 3,
                source: WireError::Base64(base64::DecodeError::InvalidPadding),
            }
            .category(),
            "ledger-key"
        );
        assert_eq!(Error::sign("x").category(), "sign");
    }

    #[test]
    fn test_indexed_variants_carry_their_index() {
        let err = Error::EntryDecode {
            index: 7,
            source: WireError::Base64(base64::DecodeError::InvalidPadding),
        };
        assert!(err.to_string().contains("index 7"));
    }

    #[test]
    fn test_convenience_constructors() {
        assert!(matches!(Error::format("x", "y"), Error::Format { .. }));
        assert!(matches!(Error::build("x"), Error::Build { .. }));
        assert!(matches!(Error::sign("x"), Error::Sign { .. }));
    }
}
