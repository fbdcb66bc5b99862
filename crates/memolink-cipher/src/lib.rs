//! # memolink-cipher
//!
//! Symmetric encryption of validated search payloads and the transport-safe
//! token form embedded in dispatch URLs.
//!
//! ```text
//! payload text ──AES-CBC/PKCS#7──▶ base64 ──to_transport_safe──▶ URL token
//! ```

pub mod codec;
pub mod error;
pub mod key;
pub mod transport;

pub use codec::{decrypt, decrypt_bytes, encrypt, encrypt_bytes};
pub use error::CipherError;
pub use key::{CipherKey, IV_LEN, KeySize, MIN_KEY_CHARS};
pub use transport::{from_transport_safe, to_transport_safe};
