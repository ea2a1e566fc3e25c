//! Tests for seed combination

use syncrand::{make_seed, SyncRandError};

#[test]
fn test_make_seed_vector() {
    let seed = make_seed([&b"hello"[..], &b"henlo"[..]]).unwrap();
    assert_eq!(seed.as_bytes(), &[0u8, 0, 2, 0, 0]);
}

#[test]
fn test_make_seed_bad_lengths() {
    let result = make_seed([&b"hello"[..], &b"henloe"[..]]);
    assert_eq!(
        result,
        Err(SyncRandError::MismatchedNonceLengths {
            index: 1,
            expected: 5,
            found: 6
        })
    );
    assert!(!result.unwrap_err().is_recoverable());
}

#[test]
fn test_make_seed_commutative() {
    let ab = make_seed([&b"hello"[..], &b"aloha"[..]]).unwrap();
    let ba = make_seed([&b"aloha"[..], &b"hello"[..]]).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn test_make_seed_self_cancels() {
    let seed = make_seed([b"hello", b"hello"]).unwrap();
    assert_eq!(seed.as_bytes(), &[0u8; 5]);
}

#[test]
fn test_make_seed_many_peers_order_independent() {
    let nonces: Vec<Vec<u8>> = vec![
        b"peer-one".to_vec(),
        b"peer-two".to_vec(),
        b"peer-3!!".to_vec(),
        b"peer-4??".to_vec(),
    ];
    let forward = make_seed(&nonces).unwrap();
    let reversed = make_seed(nonces.iter().rev()).unwrap();
    assert_eq!(forward, reversed);
    assert_eq!(forward.len(), 8);
}

#[test]
fn test_make_seed_empty() {
    let none: Vec<Vec<u8>> = Vec::new();
    assert_eq!(make_seed(none), Err(SyncRandError::NoNonces));
}
