#![no_main]
use libfuzzer_sys::fuzz_target;
use sso_signer::Signer;

fuzz_target!(|input: (&[u8], &str)| {
    let (key, data) = input;
    let signer = Signer::new(key);
    let token = signer.sign(data);
    assert_eq!(
        signer.unsign(&token).expect("freshly signed token must verify"),
        data,
        "roundtrip mismatch: unsign(sign(data)) != data"
    );
});
