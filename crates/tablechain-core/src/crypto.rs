//! Cryptographic primitives: SHA-256 hashing and CIDv1 derivation.
//!
//! **Why SHA-256?**
//! - Universal: hardware acceleration everywhere (Intel SHA-NI, ARM SHA)
//! - Interoperable: CIDv1/IPFS ecosystem, every language has it

use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::ChainError;
use crate::types::RowCid;

/// CIDv1 version byte.
const CID_VERSION: u8 = 0x01;
/// Multicodec content-type tag for raw binary.
const RAW_CODEC: u8 = 0x55;
/// Multihash function code for sha2-256.
const SHA2_256_CODE: u8 = 0x12;
/// Digest length sha2-256 declares: 32 bytes.
const SHA2_256_LEN: u8 = 0x20;

/// A 32-byte SHA-256 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Hash(pub [u8; 32]);

impl Sha256Hash {
    /// Compute the SHA-256 hash of data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();
        Self(result.into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA256({}...)", &self.to_hex()[..8])
    }
}

impl AsRef<[u8]> for Sha256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Sha256Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Wrap a digest in a multihash header: function-code || length || digest.
///
/// Only sha2-256 is supported; the declared length must match the digest.
fn encode_multihash(code: u8, digest: &[u8]) -> Result<Vec<u8>, ChainError> {
    if code != SHA2_256_CODE {
        return Err(ChainError::UnsupportedHashFunction(code));
    }
    if digest.len() != SHA2_256_LEN as usize {
        return Err(ChainError::DigestLengthMismatch {
            got: digest.len(),
            expected: SHA2_256_LEN as usize,
        });
    }
    let mut mh = Vec::with_capacity(2 + digest.len());
    mh.push(code);
    mh.push(SHA2_256_LEN);
    mh.extend_from_slice(digest);
    Ok(mh)
}

/// Derive the CIDv1 identifier for a digest.
///
/// Format: `b` + base32lower(0x01 || 0x55 || 0x12 || 0x20 || digest)
/// (version 1, raw-binary codec, sha2-256 multihash).
pub fn cid_for_digest(digest: &Sha256Hash) -> Result<RowCid, ChainError> {
    let mh = encode_multihash(SHA2_256_CODE, digest.as_bytes())?;

    let mut cid_bytes = Vec::with_capacity(2 + mh.len());
    cid_bytes.push(CID_VERSION);
    cid_bytes.push(RAW_CODEC);
    cid_bytes.extend_from_slice(&mh);

    // Base32 lower with 'b' prefix (multibase)
    Ok(RowCid::from_string(format!("b{}", base32_encode(&cid_bytes))))
}

// RFC 4648 Base32 encoding (lowercase, no padding)
fn base32_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz234567";
    let mut result = String::new();
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in data {
        buffer = (buffer << 8) | (byte as u64);
        bits_in_buffer += 8;

        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let index = ((buffer >> bits_in_buffer) & 0x1f) as usize;
            result.push(ALPHABET[index] as char);
        }
    }

    if bits_in_buffer > 0 {
        let index = ((buffer << (5 - bits_in_buffer)) & 0x1f) as usize;
        result.push(ALPHABET[index] as char);
    }

    result
}
