//! SHA-256 content hashing.
//!
//! Uses the `sha2` crate (RustCrypto ecosystem). Digests are lowercase
//! hex-encoded and deterministic: equal inputs always produce equal digests.

use citrine_types::error::HashingError;
use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 digest of `text`.
///
/// Hash inputs arrive from loosely typed CLI option values and may be
/// absent; `None` fails rather than hashing an empty stand-in, so a partial
/// or misleading digest is never produced.
pub fn hash(text: Option<&str>) -> Result<String, HashingError> {
    let text = text.ok_or(HashingError::MissingInput)?;
    let digest = Sha256::digest(text.as_bytes());
    Ok(format!("{digest:x}"))
}
