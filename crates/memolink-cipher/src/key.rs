//! Key handling.
//!
//! The receiving server derives both the AES key and the CBC IV from the
//! same shared string: the key is the string's UTF-8 bytes (truncated to the
//! largest AES size they cover) and the IV is its first 16 bytes. This must
//! stay bit-for-bit compatible with the server.

use crate::error::CipherError;
use sha2::{Digest, Sha256};

/// Minimum key length, in characters.
pub const MIN_KEY_CHARS: usize = 16;
/// CBC initialization vector length, equal to the AES block size.
pub const IV_LEN: usize = 16;

const FINGERPRINT_HEX_LEN: usize = 12;

/// AES variant selected by key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    pub fn bytes(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    fn for_len(len: usize) -> Self {
        if len >= Self::Aes256.bytes() {
            Self::Aes256
        } else if len >= Self::Aes192.bytes() {
            Self::Aes192
        } else {
            Self::Aes128
        }
    }
}

/// A validated shared key.
#[derive(Clone, Copy)]
pub struct CipherKey<'a> {
    bytes: &'a [u8],
    size: KeySize,
}

impl<'a> CipherKey<'a> {
    /// Checks the length precondition. No cryptographic work happens here.
    pub fn parse(key: &'a str) -> Result<Self, CipherError> {
        let chars = key.chars().count();
        if chars < MIN_KEY_CHARS {
            return Err(CipherError::InvalidKey {
                min: MIN_KEY_CHARS,
                actual: chars,
            });
        }
        let bytes = key.as_bytes();
        Ok(Self {
            bytes,
            size: KeySize::for_len(bytes.len()),
        })
    }

    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Key material handed to the block cipher.
    pub fn material(&self) -> &'a [u8] {
        &self.bytes[..self.size.bytes()]
    }

    pub fn iv(&self) -> &'a [u8] {
        &self.bytes[..IV_LEN]
    }

    /// Short SHA-256 digest of the key, safe to log.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.bytes);
        let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
        hex[..FINGERPRINT_HEX_LEN].to_string()
    }
}

impl std::fmt::Debug for CipherKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherKey")
            .field("size", &self.size)
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}
