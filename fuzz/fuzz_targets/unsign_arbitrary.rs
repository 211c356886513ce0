#![no_main]
use libfuzzer_sys::fuzz_target;
use sso_signer::token::split_token;
use sso_signer::Signer;

fuzz_target!(|data: &str| {
    // Must never panic, regardless of input.
    let signer = Signer::new(b"fuzz-key");
    if let Ok(recovered) = signer.unsign(data) {
        // Anything that verifies must be exactly what signing would produce.
        assert_eq!(signer.sign(recovered), data);
    }
    let _ = split_token(data);
});
