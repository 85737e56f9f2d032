//! Password digests attached to generated logins.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Lowercase hex MD5 of `text`.
#[must_use]
pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

/// Padded URL-safe base64 SHA-1 of `text`.
#[must_use]
pub fn sha1_base64url(text: &str) -> String {
    URL_SAFE.encode(Sha1::digest(text.as_bytes()))
}

/// Padded URL-safe base64 SHA-256 of `text`.
#[must_use]
pub fn sha256_base64url(text: &str) -> String {
    URL_SAFE.encode(Sha256::digest(text.as_bytes()))
}
