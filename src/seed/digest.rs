use std::fmt;

use sha2::Digest as _;

use crate::seed::time_key::TimeKey;

/// 32-byte SHA-256 fingerprint of `input + ":" + time_key`.
///
/// Every random decision made while rendering is a function of these bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; 32],
}

impl Digest {
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    pub fn derive(input: &str, time_key: &TimeKey) -> Self {
        let mut hasher = sha2::Sha256::new();
        hasher.update(input.as_bytes());
        hasher.update(b":");
        hasher.update(time_key.as_str().as_bytes());
        Self {
            bytes: hasher.finalize().into(),
        }
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Lowercase hex, as surfaced in the `X-Avatar-Hash` header.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seed/digest.rs"]
mod tests;
