//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

/// Compute the XXH3 hash of the raw input content, hex-encoded.
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Current local time as an RFC 3339 timestamp, for report metadata.
pub fn timestamp_rfc3339() -> String {
    chrono::Local::now().to_rfc3339()
}
