//! Address and wide-integer codecs
//!
//! Bridges the human-readable strkey forms (`G...` accounts, `C...`
//! contracts) to the XDR address union, and reconstructs 128-bit wire
//! integers into native numeric types. Checksum and version-byte validation
//! is done by the strkey layer; these functions add the XDR typing on top.

use stellar_strkey::ed25519;
use stellar_strkey::Contract;
use stellar_xdr::curr::{
    AccountId, ContractId, Hash, Int128Parts, PublicKey, ScAddress, Uint256,
};

use crate::error::Error;

/// Decode a `G...` account address into an account-typed [`ScAddress`].
pub fn decode_account_address(text: &str) -> Result<ScAddress, Error> {
    let key = ed25519::PublicKey::from_string(text)
        .map_err(|_| Error::format(text, "expected an account address (G...)"))?;
    Ok(ScAddress::Account(AccountId(
        PublicKey::PublicKeyTypeEd25519(Uint256(key.0)),
    )))
}

/// Decode a `C...` contract address into a contract-typed [`ScAddress`].
pub fn decode_contract_address(text: &str) -> Result<ScAddress, Error> {
    let contract = Contract::from_string(text)
        .map_err(|_| Error::format(text, "expected a contract address (C...)"))?;
    Ok(ScAddress::Contract(ContractId(Hash(contract.0))))
}

/// Encode a contract id back to its `C...` textual form.
///
/// Inverse of [`decode_contract_address`]: decoding the returned text yields
/// the same 32 bytes.
pub fn encode_contract_address(contract_id: &ContractId) -> String {
    let ContractId(Hash(bytes)) = contract_id;
    Contract(*bytes).to_string()
}

/// Reconstruct the native 128-bit value from its high/low wire parts.
///
/// The low part is unsigned; the high part carries the sign.
pub fn i128_from_parts(parts: &Int128Parts) -> i128 {
    ((parts.hi as i128) << 64) | (parts.lo as i128)
}

/// Convert a 128-bit wire integer to a float, dividing by `scale`.
///
/// Lossy above 2^53. Intended for display of scaled amounts such as token
/// balances carrying a decimal offset.
pub fn i128_to_f64(parts: &Int128Parts, scale: f64) -> f64 {
    i128_from_parts(parts) as f64 / scale
}

/// Convert a 128-bit wire integer to an i64, truncating to the low 64 bits.
///
/// Values outside the i64 range wrap. Callers that need the full range use
/// [`i128_from_parts`].
pub fn i128_to_i64(parts: &Int128Parts) -> i64 {
    i128_from_parts(parts) as i64
}
