use thiserror::Error;

use crate::tag::TypeTag;

/// Errors from hashing operations.
#[derive(Debug, Error)]
pub enum HashingError {
    #[error("Couldn't hash the data: no input provided")]
    MissingInput,
}

/// Errors from encryption operations.
///
/// IMPORTANT: These errors never include plaintext, passphrases, or key
/// material in their Display/Debug output. A bad passphrase is reported by
/// its type tag only.
#[derive(Debug, Error)]
pub enum EncryptionError {
    #[error("Couldn't encrypt the data: passphrase must be a string, got {0}")]
    InvalidPassphrase(TypeTag),

    #[error("Couldn't encrypt the data: key derivation failed")]
    KeyDerivation,

    #[error("Couldn't encrypt the data: cipher failure")]
    CipherFailure,
}

/// Errors from decryption operations.
///
/// Same hygiene rule as [`EncryptionError`]: no secret values in messages.
#[derive(Debug, Error)]
pub enum DecryptionError {
    #[error("Couldn't decrypt the data: passphrase must be a string, got {0}")]
    InvalidPassphrase(TypeTag),

    #[error("Couldn't decrypt the data: payload is not valid base64")]
    InvalidEncoding,

    #[error("Couldn't decrypt the data: payload too short")]
    PayloadTooShort,

    #[error("Couldn't decrypt the data: key derivation failed")]
    KeyDerivation,

    #[error("Couldn't decrypt the data: cipher failure")]
    CipherFailure,

    #[error("Couldn't decrypt the data: plaintext is not valid UTF-8")]
    InvalidPlaintext,
}

/// Errors from runtime type assertions.
#[derive(Debug, Error)]
pub enum TypeAssertionError {
    #[error("Not an instance of {expected}")]
    Missing { expected: TypeTag },

    #[error("Provided {actual} is not an instance of {expected}")]
    Mismatch { actual: TypeTag, expected: TypeTag },
}
