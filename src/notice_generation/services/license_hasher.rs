use sha2::{Digest, Sha256};

/// Computes the de-duplication digest of a license text
///
/// Formatting is irrelevant but wording is not: the text is lower-cased,
/// every character outside the ASCII word class `[A-Za-z0-9_]` is dropped,
/// and the remainder is hashed with SHA-256. The result is 64 lowercase
/// hex characters. Total over all inputs, including the empty string.
pub fn license_hash(text: &str) -> String {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    hex::encode(Sha256::digest(normalized.as_bytes()))
}
