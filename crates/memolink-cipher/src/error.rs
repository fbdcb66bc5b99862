//! Error types for the payload codec.

/// Failures while encrypting or decrypting a search payload.
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    /// The key is absent or shorter than one AES block.
    #[error("AES key must be a string with at least {min} characters (got {actual})")]
    InvalidKey { min: usize, actual: usize },

    /// Ciphertext is not valid base64.
    #[error("ciphertext is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decryption produced bytes with broken PKCS#7 padding, usually a
    /// wrong key.
    #[error("ciphertext padding is invalid; the key may not match")]
    Padding,

    /// Decryption succeeded but the plaintext is not UTF-8 text.
    #[error("decrypted payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
