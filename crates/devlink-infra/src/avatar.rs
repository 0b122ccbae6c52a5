//! Deterministic avatar derivation.
//!
//! Gravatar-style: the avatar URL is a pure function of the e-mail address,
//! so registration never depends on an external service.

use sha2::{Digest, Sha256};

/// Derive an avatar URL from an e-mail address.
///
/// The address is trimmed and lowercased before hashing, so cosmetic
/// variations of the same address map to the same avatar.
pub fn avatar_url_for_email(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{byte:02x}"));
    }

    format!("https://www.gravatar.com/avatar/{hex}?s=200&r=pg&d=mm")
}
