//! Tests for base64 encoding (encode).

use base64_coder::{decode, encode, encoded_len, PAD};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn known_vectors() {
    assert_eq!(encode(b"Aladdin:open sesame"), "QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    assert_eq!(encode(b"a"), "YQ==");
    assert_eq!(encode(b"aa"), "YWE=");
    assert_eq!(encode(b"a="), "YT0=");
    assert_eq!(encode(b""), "");
}

#[test]
fn rfc4648_vectors() {
    assert_eq!(encode(b"f"), "Zg==");
    assert_eq!(encode(b"fo"), "Zm8=");
    assert_eq!(encode(b"foo"), "Zm9v");
    assert_eq!(encode(b"foob"), "Zm9vYg==");
    assert_eq!(encode(b"fooba"), "Zm9vYmE=");
    assert_eq!(encode(b"foobar"), "Zm9vYmFy");
}

#[test]
fn padding_count_follows_trailing_group() {
    for length in 0..30 {
        let data = vec![0x5Au8; length];
        let encoded = encode(&data);
        let padding = encoded.chars().rev().take_while(|&c| c == PAD).count();
        let expected = match length % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        assert_eq!(padding, expected, "length {length}");
        assert_eq!(encoded.len() % 4, 0, "length {length}");
    }
}

#[test]
fn output_uses_only_alphabet_and_padding() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = encode(&data);
    assert_eq!(encoded.len(), encoded_len(data.len()));
    for c in encoded.chars() {
        assert!(
            c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=',
            "Invalid base64 character: {}",
            c
        );
    }
}

#[test]
fn round_trips_random_blobs() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        assert_eq!(decode(&encoded).unwrap(), blob);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let blob = generate_blob();
    let first = encode(&blob);
    for _ in 0..10 {
        assert_eq!(encode(&blob), first);
    }
}
