use sha2::{Digest, Sha256};

/// Tokens are stored (blacklist, reset repository) by digest only, so a
/// leaked Redis dump never yields a usable credential.
pub fn digest(token: &str) -> String {
    let hash = Sha256::digest(token.as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
