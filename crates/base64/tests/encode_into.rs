//! Tests for appending base64 encoding (encode_into).

use base64_coder::{encode, encode_into, encoded_len};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected = encode(&blob);

        let mut out = b"abc".to_vec();
        let written = encode_into(&blob, &mut out);
        assert_eq!(written, encoded_len(blob.len()));
        assert_eq!(&out[..3], b"abc");
        assert_eq!(
            &out[3..],
            expected.as_bytes(),
            "Failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn does_not_mutate_input() {
    let blob = generate_blob();
    let dupe = blob.clone();
    let mut out = Vec::new();
    encode_into(&blob, &mut out);
    assert_eq!(dupe, blob);
}

#[test]
fn empty_input() {
    let mut out = Vec::new();
    assert_eq!(encode_into(b"", &mut out), 0);
    assert!(out.is_empty());
}

#[test]
fn sub_slice() {
    let data = b"__hello__";
    let mut out = Vec::new();
    encode_into(&data[2..7], &mut out);
    assert_eq!(out, b"aGVsbG8=");
}
