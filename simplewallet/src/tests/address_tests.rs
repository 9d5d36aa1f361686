use crate::address::{namespace_prefix, AccountKey};

#[test]
fn test_namespace_prefix_is_stable() {
    assert_eq!(namespace_prefix(), "7e2664");
    assert_eq!(namespace_prefix(), namespace_prefix());
}

#[test]
fn test_key_is_deterministic() {
    let first = AccountKey::from_identity("alice-pubkey");
    let second = AccountKey::from_identity("alice-pubkey");
    assert_eq!(first, second);
}

#[test]
fn test_key_value_is_prefixed_hex() {
    let key = AccountKey::from_identity("alice-pubkey");
    assert_eq!(key.value().len(), 70);
    assert!(key.value().starts_with("7e2664"));
    assert!(key.value().chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(key.value(), key.value().to_lowercase());
}

#[test]
fn test_known_identity_derivation() {
    let key = AccountKey::from_identity("alice-pubkey");
    assert_eq!(
        key.value(),
        "7e266433125f35af80ec730639efc548bb8e041cbd54ba0b58a8d25ac8695f70d54d6f",
    );
}

#[test]
fn test_distinct_identities_yield_distinct_keys() {
    let identities = ["alice-pubkey", "bob-pubkey", "carol-pubkey", "", "a", "A"];
    let keys: Vec<_> = identities
        .iter()
        .map(|identity| AccountKey::from_identity(identity))
        .collect();
    for (i, left) in keys.iter().enumerate() {
        for right in &keys[i + 1..] {
            assert_ne!(left, right);
        }
    }
}
