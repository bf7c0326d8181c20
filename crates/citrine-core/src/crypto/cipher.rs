//! AES-256-GCM passphrase encryption for opaque string payloads.
//!
//! The encryption key is derived from the passphrase with Argon2id over a
//! fixed domain salt, so the same passphrase always reaches the same key.
//! Each encryption generates a fresh random 96-bit nonce, prepended to the
//! ciphertext, and the whole payload is base64-encoded:
//!
//! `base64( nonce (12 bytes) || ciphertext+tag )`
//!
//! GCM authenticates the ciphertext, so decrypting under the wrong
//! passphrase fails the tag check instead of returning garbage plaintext.
//!
//! Passphrases arrive as parsed JSON option values; anything other than a
//! JSON string is rejected before any key material is derived.
//!
//! SECURITY: Error types never contain plaintext, passphrases, or key
//! material in their Display/Debug output.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use citrine_types::error::{DecryptionError, EncryptionError};
use citrine_types::tag::TypeTag;
use serde_json::Value;

/// Nonce size for AES-256-GCM (96 bits / 12 bytes).
const NONCE_SIZE: usize = 12;

/// Domain salt for Argon2id passphrase derivation.
const KDF_SALT: &[u8] = b"citrine-cipher-v1";

/// Derive a 32-byte encryption key from a passphrase using Argon2id.
///
/// Uses OWASP recommended parameters:
/// - 19 MiB memory (19456 KiB)
/// - 2 iterations
/// - 1 parallelism degree
///
/// The salt is deterministic so the same passphrase always produces the
/// same key. The passphrase itself provides the entropy; the hash is used
/// as a KDF for encryption, not stored for verification.
fn derive_key(passphrase: &str) -> Option<[u8; 32]> {
    use argon2::{Algorithm, Argon2, Params, Version};

    let params = Params::new(19456, 2, 1, Some(32)).ok()?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; 32];
    argon2
        .hash_password_into(passphrase.as_bytes(), KDF_SALT, &mut key)
        .ok()?;
    Some(key)
}

/// Encrypt `text` under `passphrase`, returning an opaque payload string.
///
/// Each call generates a fresh random nonce, so encrypting the same
/// plaintext twice produces different payloads. Both payloads decrypt to
/// the same plaintext under the same passphrase.
pub fn encrypt(text: &str, passphrase: &Value) -> Result<String, EncryptionError> {
    let Some(passphrase) = passphrase.as_str() else {
        return Err(EncryptionError::InvalidPassphrase(TypeTag::of(passphrase)));
    };

    let key = derive_key(passphrase).ok_or(EncryptionError::KeyDerivation)?;
    let cipher = Aes256Gcm::new(&key.into());

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, text.as_bytes())
        .map_err(|_| EncryptionError::CipherFailure)?;

    // Prepend nonce to ciphertext
    let mut payload = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(payload))
}

/// Decrypt a payload produced by [`encrypt`], returning the plaintext.
///
/// Decrypting with the same passphrase used to encrypt returns the original
/// plaintext exactly. A wrong passphrase or a tampered payload fails the
/// GCM tag check and reports a cipher failure.
pub fn decrypt(payload: &str, passphrase: &Value) -> Result<String, DecryptionError> {
    let Some(passphrase) = passphrase.as_str() else {
        return Err(DecryptionError::InvalidPassphrase(TypeTag::of(passphrase)));
    };

    let data = BASE64
        .decode(payload)
        .map_err(|_| DecryptionError::InvalidEncoding)?;
    if data.len() < NONCE_SIZE {
        return Err(DecryptionError::PayloadTooShort);
    }

    let key = derive_key(passphrase).ok_or(DecryptionError::KeyDerivation)?;
    let cipher = Aes256Gcm::new(&key.into());

    let (nonce_bytes, ciphertext) = data.split_at(NONCE_SIZE);
    let nonce = Nonce::from_slice(nonce_bytes);

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| DecryptionError::CipherFailure)?;
    String::from_utf8(plaintext).map_err(|_| DecryptionError::InvalidPlaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let encrypted = encrypt("Hello World", &json!("123")).unwrap();
        let decrypted = decrypt(&encrypted, &json!("123")).unwrap();
        assert_eq!(decrypted, "Hello World");
    }

    #[test]
    fn test_encrypt_with_non_string_passphrase_fails() {
        let result = encrypt("Hello World", &json!({ "fake": "FAKE" }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Couldn't encrypt the data"));
    }

    #[test]
    fn test_decrypt_with_non_string_passphrase_fails() {
        let encrypted = encrypt("Hello World", &json!("123")).unwrap();
        let err = decrypt(&encrypted, &json!({ "fake": "FAKE" })).unwrap_err();
        assert!(err.to_string().contains("Couldn't decrypt the data"));
    }

    #[test]
    fn test_decrypt_with_wrong_passphrase_fails() {
        let encrypted = encrypt("secret data", &json!("right")).unwrap();
        let result = decrypt(&encrypted, &json!("wrong"));
        assert!(matches!(result.unwrap_err(), DecryptionError::CipherFailure));
    }

    #[test]
    fn test_decrypt_rejects_invalid_base64() {
        let result = decrypt("not base64 at all!!!", &json!("123"));
        assert!(matches!(result.unwrap_err(), DecryptionError::InvalidEncoding));
    }

    #[test]
    fn test_decrypt_rejects_short_payload() {
        // Valid base64, but shorter than a 12-byte nonce
        let payload = BASE64.encode([0u8; 5]);
        let result = decrypt(&payload, &json!("123"));
        assert!(matches!(result.unwrap_err(), DecryptionError::PayloadTooShort));
    }

    #[test]
    fn test_decrypt_rejects_tampered_payload() {
        let encrypted = encrypt("Hello World", &json!("123")).unwrap();
        let mut data = BASE64.decode(&encrypted).unwrap();
        let last = data.len() - 1;
        data[last] ^= 0xFF;
        let tampered = BASE64.encode(data);

        let result = decrypt(&tampered, &json!("123"));
        assert!(matches!(result.unwrap_err(), DecryptionError::CipherFailure));
    }

    #[test]
    fn test_random_nonce_produces_different_payloads() {
        let first = encrypt("same plaintext", &json!("123")).unwrap();
        let second = encrypt("same plaintext", &json!("123")).unwrap();

        // Payloads differ (different random nonces)
        assert_ne!(first, second);

        // But both decrypt to the same plaintext
        assert_eq!(decrypt(&first, &json!("123")).unwrap(), "same plaintext");
        assert_eq!(decrypt(&second, &json!("123")).unwrap(), "same plaintext");
    }

    #[test]
    fn test_empty_plaintext_roundtrip() {
        let encrypted = encrypt("", &json!("123")).unwrap();
        assert_eq!(decrypt(&encrypted, &json!("123")).unwrap(), "");
    }

    #[test]
    fn test_errors_never_contain_secrets() {
        let passphrase = "sk-super-secret-passphrase-12345";
        let encrypted = encrypt("private plaintext", &json!(passphrase)).unwrap();

        let wrong = decrypt(&encrypted, &json!("other")).unwrap_err();
        let bad_shape = encrypt("private plaintext", &json!(42)).unwrap_err();

        for msg in [wrong.to_string(), bad_shape.to_string()] {
            assert!(!msg.contains(passphrase), "Error leaks passphrase: {msg}");
            assert!(!msg.contains("private plaintext"), "Error leaks plaintext: {msg}");
        }
    }
}
