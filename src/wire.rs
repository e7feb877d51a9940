//! Base64 XDR bridge
//!
//! Every value placed on the wire is XDR-encoded to bytes and then
//! base64-encoded; every value read back is decoded with the same scheme in
//! reverse. These helpers centralize that bridge so the rest of the crate
//! never touches engine or limit plumbing directly.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use stellar_xdr::curr::{Limits, ReadXdr, WriteXdr};
use thiserror::Error;

/// Failure while crossing the XDR/base64 boundary.
#[derive(Error, Debug)]
pub enum WireError {
    /// Input was not valid base64
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// XDR serialization or deserialization failed
    #[error("xdr codec failed: {0}")]
    Xdr(#[from] stellar_xdr::curr::Error),
}

/// Encode an XDR value to raw bytes.
pub fn to_bytes<T: WriteXdr>(value: &T) -> Result<Vec<u8>, WireError> {
    Ok(value.to_xdr(Limits::none())?)
}

/// Encode an XDR value to its base64 wire form.
pub fn to_base64<T: WriteXdr>(value: &T) -> Result<String, WireError> {
    Ok(BASE64.encode(to_bytes(value)?))
}

/// Decode an XDR value from its base64 wire form.
pub fn from_base64<T: ReadXdr>(encoded: &str) -> Result<T, WireError> {
    let bytes = BASE64.decode(encoded)?;
    Ok(T::from_xdr(bytes, Limits::none())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellar_xdr::curr::{ScSymbol, ScVal};

    #[test]
    fn round_trips_scval() {
        let value = ScVal::U32(42);
        let encoded = to_base64(&value).unwrap();
        let decoded: ScVal = from_base64(&encoded).unwrap();
        assert_eq!(decoded, value);

        let value = ScVal::Symbol(ScSymbol("transfer".try_into().unwrap()));
        let encoded = to_base64(&value).unwrap();
        let decoded: ScVal = from_base64(&encoded).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = from_base64::<ScVal>("not base64!!!").unwrap_err();
        assert!(matches!(err, WireError::Base64(_)));
    }

    #[test]
    fn rejects_truncated_xdr() {
        // Two zero bytes cannot hold a full ScVal discriminant.
        let encoded = BASE64.encode([0u8, 0u8]);
        let err = from_base64::<ScVal>(&encoded).unwrap_err();
        assert!(matches!(err, WireError::Xdr(_)));
    }

    #[test]
    fn base64_layer_matches_byte_layer() {
        let value = ScVal::I32(-7);
        let bytes = to_bytes(&value).unwrap();
        assert_eq!(to_base64(&value).unwrap(), BASE64.encode(bytes));
    }
}
