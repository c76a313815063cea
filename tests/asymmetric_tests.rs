// tests/asymmetric_tests.rs
mod common;

use crypto_box::aead::generic_array::GenericArray;
use crypto_box::aead::Aead;
use crypto_box::SalsaBox;
use sealkit::consts::{MIN_MESSAGE_SIZE, NONCE_SIZE, TAG_SIZE};
use sealkit::{generate_key_pair, open, seal, CryptoError, Nonce, Operation};

fn is_open_failure(result: Result<Vec<u8>, CryptoError>) -> bool {
    matches!(
        result,
        Err(CryptoError::AuthenticationFailure(Operation::Open))
    )
}

#[test]
fn seal_then_open_returns_hello() {
    common::setup();
    let alice = generate_key_pair();
    let bob = generate_key_pair();

    let sealed = seal(b"hello", &bob.public, &alice.private).unwrap();
    let opened = open(&sealed, &alice.public, &bob.private).unwrap();

    assert_eq!(opened, b"hello");
}

#[test]
fn round_trips_empty_and_large_plaintexts() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();

    let large: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    for plaintext in [Vec::new(), vec![0u8], large] {
        let sealed = seal(&plaintext, &bob.public, &alice.private).unwrap();
        assert_eq!(sealed.len(), plaintext.len() + MIN_MESSAGE_SIZE);
        assert_eq!(open(&sealed, &alice.public, &bob.private).unwrap(), plaintext);
    }
}

#[test]
fn either_direction_shares_the_same_agreement() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();

    let to_alice = seal(b"reply", &alice.public, &bob.private).unwrap();
    assert_eq!(open(&to_alice, &bob.public, &alice.private).unwrap(), b"reply");
}

#[test]
fn same_input_seals_differently_each_time() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();

    let first = seal(b"same plaintext", &bob.public, &alice.private).unwrap();
    let second = seal(b"same plaintext", &bob.public, &alice.private).unwrap();

    assert_ne!(first[..NONCE_SIZE], second[..NONCE_SIZE]);
    assert_ne!(first, second);
    assert_eq!(open(&first, &alice.public, &bob.private).unwrap(), b"same plaintext");
    assert_eq!(open(&second, &alice.public, &bob.private).unwrap(), b"same plaintext");
}

#[test]
fn every_single_bit_flip_is_rejected() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();
    let sealed = seal(b"hello", &bob.public, &alice.private).unwrap();

    for ((byte, bit), tampered) in common::single_bit_flips(&sealed) {
        assert!(
            is_open_failure(open(&tampered, &alice.public, &bob.private)),
            "flip at byte {byte} bit {bit} was accepted"
        );
    }
}

#[test]
fn truncated_or_extended_ciphertext_is_rejected() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();
    let sealed = seal(b"hello world", &bob.public, &alice.private).unwrap();

    assert!(is_open_failure(open(
        &sealed[..sealed.len() - 1],
        &alice.public,
        &bob.private
    )));

    let mut extended = sealed.clone();
    extended.push(0);
    assert!(is_open_failure(open(&extended, &alice.public, &bob.private)));
}

#[test]
fn substituting_any_of_the_four_keys_fails() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();
    let mallory = generate_key_pair();

    // Wrong keys at open time
    let sealed = seal(b"hello", &bob.public, &alice.private).unwrap();
    assert!(is_open_failure(open(&sealed, &mallory.public, &bob.private)));
    assert!(is_open_failure(open(&sealed, &alice.public, &mallory.private)));

    // Wrong keys at seal time
    let wrong_recipient = seal(b"hello", &mallory.public, &alice.private).unwrap();
    assert!(is_open_failure(open(&wrong_recipient, &alice.public, &bob.private)));

    let wrong_sender = seal(b"hello", &bob.public, &mallory.private).unwrap();
    assert!(is_open_failure(open(&wrong_sender, &alice.public, &bob.private)));
}

#[test]
fn authentication_failures_carry_the_open_code() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();
    let sealed = seal(b"hello", &bob.public, &alice.private).unwrap();

    let err = open(&sealed, &bob.public, &alice.private).unwrap_err();
    assert_eq!(err.code(), 101);
    assert_eq!(CryptoError::CATEGORY, "crypto");
    assert_eq!(err.to_string(), "unable to open bytes: authentication failed");
}

#[test]
fn inputs_shorter_than_a_nonce_are_rejected_before_slicing() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();

    for len in [0usize, 1, NONCE_SIZE - 1] {
        let err = open(&vec![0u8; len], &alice.public, &bob.private).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::TruncatedMessage { minimum: NONCE_SIZE, actual } if actual == len
        ));
        assert_eq!(err.code(), 104);
    }
}

#[test]
fn nonce_only_or_short_tag_fails_authentication() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();

    for len in [NONCE_SIZE, NONCE_SIZE + TAG_SIZE - 1] {
        assert!(is_open_failure(open(&vec![0u8; len], &alice.public, &bob.private)));
    }
}

#[test]
fn output_is_nonce_prefixed_nacl_box() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();
    let sealed = seal(b"interop", &bob.public, &alice.private).unwrap();

    let nonce = Nonce::from_message(&sealed).unwrap();
    let raw = SalsaBox::new(
        &crypto_box::PublicKey::from(*alice.public.as_bytes()),
        &crypto_box::SecretKey::from(*bob.private.as_bytes()),
    );
    let plaintext = raw
        .decrypt(GenericArray::from_slice(nonce.as_bytes()), &sealed[NONCE_SIZE..])
        .unwrap();
    assert_eq!(plaintext, b"interop");
}

#[test]
fn opens_a_raw_nacl_box_with_prefixed_nonce() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();
    let nonce = [0x24u8; NONCE_SIZE];

    let raw = SalsaBox::new(
        &crypto_box::PublicKey::from(*bob.public.as_bytes()),
        &crypto_box::SecretKey::from(*alice.private.as_bytes()),
    );
    let ciphertext = raw
        .encrypt(GenericArray::from_slice(&nonce), b"from elsewhere".as_slice())
        .unwrap();

    let mut message = nonce.to_vec();
    message.extend_from_slice(&ciphertext);
    assert_eq!(open(&message, &alice.public, &bob.private).unwrap(), b"from elsewhere");
}

#[test]
fn concurrent_calls_need_no_coordination() {
    let alice = generate_key_pair();
    let bob = generate_key_pair();

    std::thread::scope(|s| {
        for i in 0..8u8 {
            let (alice, bob) = (&alice, &bob);
            s.spawn(move || {
                let plaintext = vec![i; 64];
                let sealed = seal(&plaintext, &bob.public, &alice.private).unwrap();
                assert_eq!(open(&sealed, &alice.public, &bob.private).unwrap(), plaintext);
            });
        }
    });
}
