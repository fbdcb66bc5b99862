//! AES-CBC/PKCS#7 payload codec.
//!
//! Ciphertext travels as standard, padded base64, the same text form the
//! server decodes before decrypting.

use crate::error::CipherError;
use crate::key::{CipherKey, KeySize};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes192CbcEnc = cbc::Encryptor<aes::Aes192>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypts `plain_text` and returns base64 ciphertext.
pub fn encrypt(plain_text: &str, key: &str) -> Result<String, CipherError> {
    let key = CipherKey::parse(key)?;
    Ok(BASE64.encode(encrypt_bytes(plain_text.as_bytes(), &key)))
}

/// Inverse of [`encrypt`].
pub fn decrypt(cipher_text: &str, key: &str) -> Result<String, CipherError> {
    let key = CipherKey::parse(key)?;
    let bytes = BASE64.decode(cipher_text.trim())?;
    let plain = decrypt_bytes(&bytes, &key)?;
    Ok(String::from_utf8(plain)?)
}

pub fn encrypt_bytes(plain: &[u8], key: &CipherKey<'_>) -> Vec<u8> {
    let (material, iv) = (key.material(), key.iv());
    // Slice lengths are fixed by `CipherKey`, so construction cannot fail.
    match key.size() {
        KeySize::Aes128 => Aes128CbcEnc::new(material.into(), iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plain),
        KeySize::Aes192 => Aes192CbcEnc::new(material.into(), iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plain),
        KeySize::Aes256 => Aes256CbcEnc::new(material.into(), iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plain),
    }
}

pub fn decrypt_bytes(cipher: &[u8], key: &CipherKey<'_>) -> Result<Vec<u8>, CipherError> {
    let (material, iv) = (key.material(), key.iv());
    let plain = match key.size() {
        KeySize::Aes128 => Aes128CbcDec::new(material.into(), iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(cipher),
        KeySize::Aes192 => Aes192CbcDec::new(material.into(), iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(cipher),
        KeySize::Aes256 => Aes256CbcDec::new(material.into(), iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(cipher),
    };
    plain.map_err(|_| CipherError::Padding)
}
