//! Network passphrases and identifiers
//!
//! A signature is only valid for the network whose passphrase derived its
//! signature base, so every signing entry point takes the passphrase
//! explicitly and callers must use one passphrase consistently per
//! submission.

use sha2::{Digest, Sha256};
use stellar_xdr::curr::Hash;

/// Passphrase of the public Stellar network.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Passphrase of the SDF test network.
pub const TESTNET_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Passphrase of the SDF future network.
pub const FUTURENET_NETWORK_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";

/// 32-byte network id scoping signatures to one network: the SHA-256 digest
/// of the passphrase.
pub fn network_id(passphrase: &str) -> Hash {
    let digest = Sha256::digest(passphrase.as_bytes());
    Hash(digest.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_network_id_matches_known_value() {
        let id = network_id(TESTNET_NETWORK_PASSPHRASE);
        assert_eq!(
            hex::encode(id.0),
            "cee0302d59844d32bdca915c8203dd44b33fbb7edc19051ea37abedf28ecd472"
        );
    }

    #[test]
    fn public_network_id_matches_known_value() {
        let id = network_id(PUBLIC_NETWORK_PASSPHRASE);
        assert_eq!(
            hex::encode(id.0),
            "7ac33997544e3175d266bd022439b22cdb16508c01163f26e5cb2a3e1045a979"
        );
    }

    #[test]
    fn distinct_passphrases_yield_distinct_ids() {
        assert_ne!(
            network_id(PUBLIC_NETWORK_PASSPHRASE),
            network_id(TESTNET_NETWORK_PASSPHRASE)
        );
        assert_ne!(
            network_id(TESTNET_NETWORK_PASSPHRASE),
            network_id(FUTURENET_NETWORK_PASSPHRASE)
        );
    }
}
