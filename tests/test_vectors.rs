//! Regression tests that verify signing against stored test vectors.
//! If any test here fails, it means the wire format has changed.

use sha2::{Sha256, Sha512};

use sso_signer::keys::derive_key;
use sso_signer::token::{decode_signature, split_token};
use sso_signer::{Signer, SignerError};

/// Load test vectors from testdata/vectors.json.
fn load_vectors() -> serde_json::Value {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/vectors.json");
    let data = std::fs::read_to_string(path).expect("failed to read test vectors file");
    serde_json::from_str(&data).expect("failed to parse test vectors JSON")
}

fn vectors_for(hash: &str) -> Vec<serde_json::Value> {
    load_vectors()["vectors"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|v| v["hash"].as_str().unwrap() == hash)
        .cloned()
        .collect()
}

/// Find a vector by name.
fn find_vector(name: &str) -> serde_json::Value {
    load_vectors()["vectors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["name"].as_str().unwrap() == name)
        .unwrap_or_else(|| panic!("test vector '{name}' not found"))
        .clone()
}

fn key_of(v: &serde_json::Value) -> Vec<u8> {
    hex::decode(v["key_hex"].as_str().unwrap()).unwrap()
}

#[test]
fn test_vectors_sha256_sign() {
    let vectors = vectors_for("sha256");
    assert!(!vectors.is_empty());
    for v in vectors {
        let name = v["name"].as_str().unwrap();
        let signer = Signer::new(key_of(&v));
        let token = signer.sign(v["data"].as_str().unwrap());
        assert_eq!(
            token,
            v["expected_token"].as_str().unwrap(),
            "{name}: token mismatch"
        );
    }
}

#[test]
fn test_vectors_sha256_unsign() {
    for v in vectors_for("sha256") {
        let name = v["name"].as_str().unwrap();
        let signer = Signer::new(key_of(&v));
        let data = signer
            .unsign(v["expected_token"].as_str().unwrap())
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(data, v["data"].as_str().unwrap(), "{name}: data mismatch");
    }
}

#[test]
fn test_vectors_derived_key() {
    for v in vectors_for("sha256") {
        let name = v["name"].as_str().unwrap();
        let derived = derive_key::<Sha256>(&key_of(&v));
        assert_eq!(
            hex::encode(&*derived),
            v["derived_key_hex"].as_str().unwrap(),
            "{name}: derived key mismatch"
        );
    }
    for v in vectors_for("sha512") {
        let derived = derive_key::<Sha512>(&key_of(&v));
        assert_eq!(hex::encode(&*derived), v["derived_key_hex"].as_str().unwrap());
    }
}

#[test]
fn test_vectors_mac_segment() {
    for v in load_vectors()["vectors"].as_array().unwrap() {
        let token = v["expected_token"].as_str().unwrap();
        let parts = split_token(token).unwrap();
        let mac = decode_signature(parts.signature).unwrap();
        assert_eq!(hex::encode(mac), v["mac_hex"].as_str().unwrap());
        assert_eq!(parts.data, v["data"].as_str().unwrap());
    }
}

#[test]
fn test_vector_hello_secret_exact() {
    let v = find_vector("hello_secret");
    assert_eq!(
        v["expected_token"].as_str().unwrap(),
        "hello.nbaicuKTO_lA1tn2qSAXKPkJuMdd1zx0yhL23OVTPTg"
    );
    let signer = Signer::new(b"secret");
    assert_eq!(
        signer.sign("hello"),
        "hello.nbaicuKTO_lA1tn2qSAXKPkJuMdd1zx0yhL23OVTPTg"
    );
}

#[test]
fn test_vector_data_with_separator_roundtrips() {
    let v = find_vector("data_with_separator");
    let token = v["expected_token"].as_str().unwrap();
    let signer = Signer::new(key_of(&v));
    assert_eq!(signer.unsign(token).unwrap(), "user.name@example.com");
}

#[test]
fn test_vector_sha512() {
    let v = find_vector("sha512_hello");
    let signer = Signer::<Sha512>::with_hash(key_of(&v));
    let token = v["expected_token"].as_str().unwrap();
    assert_eq!(signer.sign(v["data"].as_str().unwrap()), token);
    assert_eq!(signer.unsign(token).unwrap(), "hello");
}

#[test]
fn test_vectors_rejected_by_other_key() {
    let signer = Signer::new(b"not-the-vector-key");
    for v in vectors_for("sha256") {
        let token = v["expected_token"].as_str().unwrap();
        assert!(
            matches!(signer.unsign(token), Err(SignerError::BadSignature)),
            "{} should not verify under another key",
            v["name"]
        );
    }
}
