//! Syntactic checks for base-58 account addresses and transaction signatures.
//!
//! Neither check touches the network. They only confirm that the string
//! decodes to the byte length of the underlying key or signature.

/// Byte length of an ed25519 public key.
pub const PUBKEY_BYTES: usize = 32;

/// Byte length of an ed25519 signature.
pub const SIGNATURE_BYTES: usize = 64;

/// Returns `true` if `address` is a base-58 encoded 32-byte public key.
pub fn is_valid_address(address: &str) -> bool {
    decodes_to(address, PUBKEY_BYTES)
}

/// Returns `true` if `signature` is a base-58 encoded 64-byte signature.
pub fn is_valid_signature(signature: &str) -> bool {
    decodes_to(signature, SIGNATURE_BYTES)
}

fn decodes_to(encoded: &str, len: usize) -> bool {
    // A base-58 digit carries < 6 bits, so anything longer can't fit.
    if encoded.is_empty() || encoded.len() > len * 2 {
        return false;
    }
    let mut buf = [0u8; SIGNATURE_BYTES];
    match bs58::decode(encoded).onto(&mut buf[..len]) {
        Ok(written) => written == len,
        Err(_) => false,
    }
}
