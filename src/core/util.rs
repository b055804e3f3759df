//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

/// Compute the XXH3 digest of a line sequence
///
/// Lines are joined with '\n' before hashing so the digest is stable across
/// re-scans of an unchanged tree.
pub fn digest_lines(lines: &[String]) -> String {
    format!("{:016x}", xxh3_64(lines.join("\n").as_bytes()))
}
