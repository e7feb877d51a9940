//! Transaction signing
//!
//! A signature commits to the network id and the transaction body: the
//! signature base is the SHA-256 digest of the XDR-encoded signature payload
//! {network id, tagged transaction}. That digest doubles as the transaction
//! hash the network reports once the transaction is accepted. Key pairs are
//! applied strictly in the order supplied, and each signature lands in the
//! envelope's signature list at the matching position.

use sha2::{Digest, Sha256};
use stellar_xdr::curr::{
    DecoratedSignature, Transaction, TransactionEnvelope, TransactionSignaturePayload,
    TransactionSignaturePayloadTaggedTransaction, TransactionV1Envelope, VecM,
};
use tracing::debug;

use crate::error::Error;
use crate::keypair::Keypair;
use crate::network::network_id;
use crate::wire;

/// Upper bound on decorated signatures in one envelope (XDR vector bound).
pub const MAX_SIGNATURES: usize = 20;

/// Network-scoped transaction hash: the digest every signature covers and
/// the id the ledger reports for the transaction.
pub fn transaction_hash(tx: &Transaction, network_passphrase: &str) -> Result<[u8; 32], Error> {
    let payload = TransactionSignaturePayload {
        network_id: network_id(network_passphrase),
        tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone()),
    };
    let encoded = wire::to_bytes(&payload)?;
    Ok(Sha256::digest(&encoded).into())
}

/// Sign `tx` with every key pair in order, producing a v1 envelope whose
/// signature list matches the key list position for position.
///
/// The first failure aborts the whole call; no partially signed envelope is
/// returned. The input transaction is left untouched either way.
pub fn sign_transaction(
    tx: &Transaction,
    network_passphrase: &str,
    keypairs: &[Keypair],
) -> Result<TransactionEnvelope, Error> {
    if keypairs.len() > MAX_SIGNATURES {
        return Err(Error::sign(format!(
            "{} keypairs exceed the {MAX_SIGNATURES}-signature envelope bound",
            keypairs.len()
        )));
    }

    let hash = transaction_hash(tx, network_passphrase)?;
    debug!(tx_hash = %hex::encode(hash), "derived transaction signature base");

    let mut signatures = Vec::with_capacity(keypairs.len());
    for keypair in keypairs {
        debug!(address = %keypair.address(), "signing transaction");
        signatures.push(keypair.sign_decorated(&hash)?);
    }

    let signatures: VecM<DecoratedSignature, 20> = signatures
        .try_into()
        .map_err(|_| Error::sign("signature list exceeds the envelope bound"))?;

    Ok(TransactionEnvelope::Tx(TransactionV1Envelope {
        tx: tx.clone(),
        signatures,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellar_xdr::curr::{ContractId, Hash, ScAddress};

    use crate::network::{PUBLIC_NETWORK_PASSPHRASE, TESTNET_NETWORK_PASSPHRASE};
    use crate::tx_builder::{build_invocation_tx, MIN_BASE_FEE};
    use crate::types::SourceAccount;

    fn test_tx() -> Transaction {
        let contract = ScAddress::Contract(ContractId(Hash([2u8; 32])));
        let source =
            SourceAccount::from_keypair(&Keypair::from_seed_bytes(&[1u8; 32]), 100);
        build_invocation_tx(&contract, &source, vec![], "noop", MIN_BASE_FEE).unwrap()
    }

    fn signatures_of(envelope: &TransactionEnvelope) -> Vec<DecoratedSignature> {
        let TransactionEnvelope::Tx(v1) = envelope else {
            panic!("expected v1 envelope");
        };
        v1.signatures.to_vec()
    }

    #[test]
    fn hash_is_deterministic_and_network_scoped() {
        let tx = test_tx();
        let testnet = transaction_hash(&tx, TESTNET_NETWORK_PASSPHRASE).unwrap();
        assert_eq!(
            testnet,
            transaction_hash(&tx, TESTNET_NETWORK_PASSPHRASE).unwrap()
        );
        assert_ne!(
            testnet,
            transaction_hash(&tx, PUBLIC_NETWORK_PASSPHRASE).unwrap()
        );
    }

    #[test]
    fn signatures_follow_keypair_order() {
        let tx = test_tx();
        let a = Keypair::from_seed_bytes(&[10u8; 32]);
        let b = Keypair::from_seed_bytes(&[11u8; 32]);

        let forward = sign_transaction(&tx, TESTNET_NETWORK_PASSPHRASE, &[a.clone(), b.clone()])
            .unwrap();
        let sigs = signatures_of(&forward);
        assert_eq!(sigs.len(), 2);
        assert_eq!(sigs[0].hint, a.hint());
        assert_eq!(sigs[1].hint, b.hint());

        let reversed =
            sign_transaction(&tx, TESTNET_NETWORK_PASSPHRASE, &[b.clone(), a.clone()]).unwrap();
        let reversed_sigs = signatures_of(&reversed);
        assert_eq!(reversed_sigs[0].hint, b.hint());
        assert_eq!(reversed_sigs[1].hint, a.hint());
        // Same signatures, opposite positions.
        assert_eq!(sigs[0], reversed_sigs[1]);
        assert_eq!(sigs[1], reversed_sigs[0]);
    }

    #[test]
    fn signatures_verify_against_the_transaction_hash() {
        let tx = test_tx();
        let keypair = Keypair::from_seed_bytes(&[12u8; 32]);
        let envelope =
            sign_transaction(&tx, TESTNET_NETWORK_PASSPHRASE, &[keypair.clone()]).unwrap();
        let hash = transaction_hash(&tx, TESTNET_NETWORK_PASSPHRASE).unwrap();

        let sigs = signatures_of(&envelope);
        let mut raw = [0u8; 64];
        raw.copy_from_slice(sigs[0].signature.0.as_slice());
        assert!(keypair.verify(&hash, &raw));

        // A signature made against one network does not verify against the
        // other network's hash.
        let public_hash = transaction_hash(&tx, PUBLIC_NETWORK_PASSPHRASE).unwrap();
        assert!(!keypair.verify(&public_hash, &raw));
    }

    #[test]
    fn envelope_preserves_the_transaction_body() {
        let tx = test_tx();
        let keypair = Keypair::from_seed_bytes(&[13u8; 32]);
        let envelope = sign_transaction(&tx, TESTNET_NETWORK_PASSPHRASE, &[keypair]).unwrap();
        let TransactionEnvelope::Tx(v1) = envelope else {
            panic!("expected v1 envelope");
        };
        assert_eq!(v1.tx, tx);
    }

    #[test]
    fn empty_keypair_list_yields_unsigned_envelope() {
        let tx = test_tx();
        let envelope = sign_transaction(&tx, TESTNET_NETWORK_PASSPHRASE, &[]).unwrap();
        assert!(signatures_of(&envelope).is_empty());
    }

    #[test]
    fn too_many_keypairs_is_a_sign_error() {
        let tx = test_tx();
        let keypairs: Vec<Keypair> = (0..21)
            .map(|i| Keypair::from_seed_bytes(&[i as u8 + 1; 32]))
            .collect();
        let err = sign_transaction(&tx, TESTNET_NETWORK_PASSPHRASE, &keypairs).unwrap_err();
        assert!(matches!(err, Error::Sign { .. }));
    }
}
