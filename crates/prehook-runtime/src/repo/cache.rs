//! Checkout directory naming inside the repository cache.

use sha2::{Digest, Sha256};

/// Hex digits of the reference digest kept in a checkout name.
const DIGEST_LEN: usize = 12;

/// Directory name for `repo` checked out at `rev`.
///
/// Characters outside `[A-Za-z0-9._-]` become `_`, so every reference maps to
/// a single path component. A short SHA-256 of the raw `repo@rev` keeps
/// references that sanitize alike apart.
pub fn checkout_name(repo: &str, rev: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(format!("{repo}@{rev}").as_bytes()));
    format!(
        "{}@{}-{}",
        sanitize(repo),
        sanitize(rev),
        &digest[..DIGEST_LEN]
    )
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
