//! Avatar fingerprints.
//!
//! The service sends avatars as a 20-byte SHA-1 digest; caches and events carry
//! them as 40 lowercase hex characters. An all-zero digest means "no avatar".

use std::fmt::Write;

/// Hex length of a well-formed fingerprint.
pub const AVATAR_HEX_LEN: usize = 40;

const EMPTY_AVATAR: &str = "0000000000000000000000000000000000000000";

/// Lowercase hex encoding of a raw avatar digest.
#[must_use]
pub fn avatar_hex(digest: &[u8]) -> String {
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// True when `avatar` is a non-empty 40-character fingerprint.
#[must_use]
pub fn is_valid_avatar(avatar: &str) -> bool {
    avatar.len() == AVATAR_HEX_LEN && avatar != EMPTY_AVATAR
}
