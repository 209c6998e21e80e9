//! Stable user identity derived from email addresses.
//!
//! Every per-user collection is keyed by a `UserId` of the shape
//! `user_<base36>`, where the base36 token is the absolute value of a
//! polynomial rolling hash of the email. The same token doubles as the seed
//! for all mock-data generation, so identity and synthetic history are both
//! pure functions of the email string.
//!
//! This is a bucketing hash, not a security primitive: collisions are merely
//! improbable at demo scale, and nothing relies on their absence.

use clementine_core::UserId;

/// Polynomial rolling hash over the input's characters.
///
/// Order-sensitive and wrapping in 32 bits, so `"ab"` and `"ba"` hash
/// differently and results are identical on every platform. Total over any
/// string, including the empty one.
#[must_use]
pub fn hash(input: &str) -> i32 {
    let mut acc: i32 = 0;
    for c in input.chars() {
        #[allow(clippy::cast_possible_wrap)]
        let code = c as i32;
        acc = acc.wrapping_mul(31).wrapping_add(code);
    }
    acc
}

/// Derive the stable user id for an email address.
///
/// ```
/// use clementine_storefront::identity::user_id;
///
/// let a = user_id("ada@example.com");
/// let b = user_id("ada@example.com");
/// assert_eq!(a, b);
/// assert!(a.as_str().starts_with("user_"));
/// ```
#[must_use]
pub fn user_id(email: &str) -> UserId {
    UserId::new(format!("user_{}", to_base36(u64::from(hash(email).unsigned_abs()))))
}

/// Recover the generation seed for a user id.
///
/// Ids minted by [`user_id`] parse their base36 token back directly. Any
/// other id - notably the `"guest"` sentinel - is re-hashed, so every id
/// still yields a stable seed.
#[must_use]
pub fn seed_for(id: &UserId) -> u64 {
    id.as_str()
        .strip_prefix("user_")
        .and_then(|token| u64::from_str_radix(token, 36).ok())
        .unwrap_or_else(|| u64::from(hash(id.as_str()).unsigned_abs()))
}

/// Seed for an arbitrary entity identifier (e.g. a product id).
#[must_use]
pub fn seed_for_str(id: &str) -> u64 {
    u64::from(hash(id).unsigned_abs())
}

/// Render a value in lowercase base36.
#[must_use]
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        #[allow(clippy::cast_possible_truncation, clippy::indexing_slicing)]
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash("ada@example.com"), hash("ada@example.com"));
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        assert_ne!(hash("ab"), hash("ba"));
    }

    #[test]
    fn test_hash_total_over_empty_input() {
        assert_eq!(hash(""), 0);
        // An empty email still yields a usable id and seed.
        let id = user_id("");
        assert_eq!(id.as_str(), "user_0");
        assert_eq!(seed_for(&id), 0);
    }

    #[test]
    fn test_user_id_shape() {
        let id = user_id("ada@example.com");
        let token = id.as_str().strip_prefix("user_").unwrap();
        assert!(!token.is_empty());
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_distinct_emails_distinct_ids() {
        assert_ne!(user_id("ada@example.com"), user_id("grace@example.com"));
    }

    #[test]
    fn test_seed_roundtrip() {
        let id = user_id("ada@example.com");
        let seed = seed_for(&id);
        assert_eq!(seed, u64::from(hash("ada@example.com").unsigned_abs()));
    }

    #[test]
    fn test_guest_seed_is_stable() {
        let guest = UserId::guest();
        assert_eq!(seed_for(&guest), seed_for(&guest));
        assert_eq!(seed_for(&guest), u64::from(hash("guest").unsigned_abs()));
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(46_655), "zzz");
    }
}
