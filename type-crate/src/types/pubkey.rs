use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::{
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};
use thiserror::Error;

/// A 32‐byte ed25519 public key, suitable for zero‐copy. Identifies participants and the admin.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    /// Construct from raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }

    /// A key that is distinct from every other key produced by this function in the process.
    pub fn new_unique() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);

        let mut bytes = [0u8; 32];
        let i = COUNTER.fetch_add(1, Ordering::Relaxed);
        bytes[..8].copy_from_slice(&i.to_be_bytes());
        Pubkey(bytes)
    }

    /// Return the raw byte array.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Default for Pubkey {
    /// The “all zero” key.
    fn default() -> Self {
        Pubkey([0; 32])
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePubkeyError {
    #[error("invalid base58 string")]
    Invalid,
    #[error("decoded key is {0} bytes, expected 32")]
    WrongSize(usize),
}

impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| ParsePubkeyError::Invalid)?;
        let array: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ParsePubkeyError::WrongSize(bytes.len()))?;
        Ok(Pubkey(array))
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
