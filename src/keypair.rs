//! Ed25519 key pairs
//!
//! Wraps the dalek signing key behind the strkey forms the ledger speaks:
//! `S...` secret seeds in, `G...` account ids out, plus the XDR account and
//! signature-hint views the transaction layer needs. Secret material is
//! zeroized after import and never appears in Debug output or error text.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use rand::RngCore;
use stellar_strkey::ed25519;
use stellar_xdr::curr::{
    AccountId, DecoratedSignature, MuxedAccount, PublicKey, ScAddress, Signature, SignatureHint,
    Uint256,
};
use zeroize::Zeroizing;

use crate::error::Error;

/// An ed25519 key pair that can sign transactions.
#[derive(Clone)]
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    /// Import a key pair from its strkey secret seed (`S...`).
    pub fn from_secret_seed(seed: &str) -> Result<Self, Error> {
        let secret = ed25519::PrivateKey::from_string(seed)
            .map_err(|_| Error::format("<secret seed>", "expected a secret seed (S...)"))?;
        let bytes = Zeroizing::new(secret.0);
        Ok(Self {
            signing: SigningKey::from_bytes(&bytes),
        })
    }

    /// Key pair from a raw 32-byte seed.
    pub fn from_seed_bytes(seed: &[u8; 32]) -> Self {
        Self {
            signing: SigningKey::from_bytes(seed),
        }
    }

    /// Generate a fresh random key pair.
    pub fn random() -> Self {
        let mut seed = Zeroizing::new([0u8; 32]);
        OsRng.fill_bytes(&mut *seed);
        Self {
            signing: SigningKey::from_bytes(&seed),
        }
    }

    /// Strkey account id (`G...`).
    pub fn address(&self) -> String {
        ed25519::PublicKey(self.public_key()).to_string()
    }

    /// Raw 32-byte ed25519 public key.
    pub fn public_key(&self) -> [u8; 32] {
        self.signing.verifying_key().to_bytes()
    }

    /// XDR account id of this key pair.
    pub fn account_id(&self) -> AccountId {
        AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(self.public_key())))
    }

    /// Account-typed address, e.g. for use as an invocation argument.
    pub fn sc_address(&self) -> ScAddress {
        ScAddress::Account(self.account_id())
    }

    /// Transaction-source form of this key pair's account.
    pub fn muxed_account(&self) -> MuxedAccount {
        MuxedAccount::Ed25519(Uint256(self.public_key()))
    }

    /// Last four bytes of the public key, identifying which key produced a
    /// decorated signature.
    pub fn hint(&self) -> SignatureHint {
        let key = self.public_key();
        SignatureHint([key[28], key[29], key[30], key[31]])
    }

    /// Sign an arbitrary message, returning the raw 64-byte signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }

    /// Sign a message and wrap the signature with this key's hint.
    pub fn sign_decorated(&self, message: &[u8]) -> Result<DecoratedSignature, Error> {
        let signature = Signature(
            self.sign(message)
                .to_vec()
                .try_into()
                .map_err(|_| Error::sign("signature exceeds the 64-byte bound"))?,
        );
        Ok(DecoratedSignature {
            hint: self.hint(),
            signature,
        })
    }

    /// Verify a signature made by this key pair over `message`.
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        let signature = ed25519_dalek::Signature::from_bytes(signature);
        self.signing
            .verifying_key()
            .verify_strict(message, &signature)
            .is_ok()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
