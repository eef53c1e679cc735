//! Record ID generation.
//!
//! IDs have the shape `req-<hash>` where the hash is base36 lowercase,
//! derived from the request contents via SHA256 with a nonce loop for
//! collision avoidance.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// ID prefix for help-request records.
pub const RECORD_ID_PREFIX: &str = "req";

const HASH_LENGTH: usize = 8;

/// Generate a unique record ID.
///
/// The `exists` closure checks candidates against the live collection.
pub fn generate_record_id<F>(
    name: &str,
    ticket: &str,
    created_at: DateTime<Utc>,
    exists: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    for nonce in 0..10 {
        let seed = id_seed(name, ticket, created_at, nonce);
        let id = format!("{RECORD_ID_PREFIX}-{}", compute_id_hash(&seed, HASH_LENGTH));
        if !exists(&id) {
            return id;
        }
    }

    // All short candidates collided; widen the hash and keep counting.
    let mut nonce = 10u32;
    loop {
        let seed = id_seed(name, ticket, created_at, nonce);
        let id = format!("{RECORD_ID_PREFIX}-{}", compute_id_hash(&seed, 12));
        if !exists(&id) {
            return id;
        }
        nonce += 1;
    }
}

fn id_seed(name: &str, ticket: &str, created_at: DateTime<Utc>, nonce: u32) -> String {
    format!(
        "{}|{}|{}|{}",
        name,
        ticket,
        created_at.timestamp_nanos_opt().unwrap_or(0),
        nonce
    )
}

fn compute_id_hash(input: &str, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();

    let mut num = 0u64;
    for &byte in result.iter().take(8) {
        num = (num << 8) | u64::from(byte);
    }

    let mut encoded = base36_encode(num);
    if encoded.len() < length {
        encoded = format!("{encoded:0>length$}");
    }
    encoded.chars().take(length).collect()
}

fn base36_encode(mut num: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if num == 0 {
        return "0".to_string();
    }
    let mut chars = Vec::new();
    while num > 0 {
        chars.push(ALPHABET[(num % 36) as usize] as char);
        num /= 36;
    }
    chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36_encode() {
        assert_eq!(base36_encode(0), "0");
        assert_eq!(base36_encode(10), "a");
        assert_eq!(base36_encode(35), "z");
        assert_eq!(base36_encode(36), "10");
    }

    #[test]
    fn test_id_format() {
        let id = generate_record_id("María", "APS-20260805-0001", Utc::now(), |_| false);
        assert!(id.starts_with("req-"));
        assert_eq!(id.len(), RECORD_ID_PREFIX.len() + 1 + HASH_LENGTH);
        assert!(
            id[RECORD_ID_PREFIX.len() + 1..]
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_id_deterministic_for_same_inputs() {
        let now = Utc::now();
        let a = generate_record_id("Ana", "APS-20260805-0002", now, |_| false);
        let b = generate_record_id("Ana", "APS-20260805-0002", now, |_| false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_collision_handling() {
        let now = Utc::now();
        let mut taken = std::collections::HashSet::new();

        let first = generate_record_id("Ana", "APS-20260805-0003", now, |id| taken.contains(id));
        taken.insert(first.clone());

        let second = generate_record_id("Ana", "APS-20260805-0003", now, |id| taken.contains(id));
        assert_ne!(first, second);
    }
}
