//! Source-account context for transaction construction

use stellar_strkey::ed25519;
use stellar_xdr::curr::{AccountId, MuxedAccount, PublicKey, ScAddress, Uint256};

use crate::error::Error;
use crate::keypair::Keypair;

/// The account a transaction is built against: who pays the fee and which
/// sequence number the transaction consumes.
///
/// The ledger requires a transaction's sequence to be exactly one above the
/// account's current value, so the builder consumes `sequence() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAccount {
    ed25519: [u8; 32],
    sequence: i64,
}

impl SourceAccount {
    /// Source account from its strkey account id and current on-ledger
    /// sequence number.
    pub fn new(account_id: &str, sequence: i64) -> Result<Self, Error> {
        let key = ed25519::PublicKey::from_string(account_id)
            .map_err(|_| Error::format(account_id, "expected an account address (G...)"))?;
        Ok(Self {
            ed25519: key.0,
            sequence,
        })
    }

    /// Source account for a key pair the caller controls.
    pub fn from_keypair(keypair: &Keypair, sequence: i64) -> Self {
        Self {
            ed25519: keypair.public_key(),
            sequence,
        }
    }

    /// Strkey account id (`G...`).
    pub fn account_id(&self) -> String {
        ed25519::PublicKey(self.ed25519).to_string()
    }

    /// Current on-ledger sequence number.
    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    /// Transaction-source form of the account.
    pub fn muxed_account(&self) -> MuxedAccount {
        MuxedAccount::Ed25519(Uint256(self.ed25519))
    }

    /// Account-typed address, e.g. for balance lookups.
    pub fn sc_address(&self) -> ScAddress {
        ScAddress::Account(AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(
            self.ed25519,
        ))))
    }
}
