use helpers::icp::DerivedIdentity;

// The key the icp_principal script derives from.
const SECRET_KEY_HEX: &str = "efeb1c2f5a0fd6b15eaf61f2a6e48c8c7d4b3a2910efccdb8897a65d4c3b2a79";

#[test]
fn principal_derivation_is_deterministic() {
    let first = DerivedIdentity::from_secret_key_hex(SECRET_KEY_HEX).unwrap();
    let second = DerivedIdentity::from_secret_key_hex(SECRET_KEY_HEX).unwrap();
    assert_eq!(first.principal(), second.principal());
    assert_eq!(first.principal_text(), second.principal_text());
    assert!(!first.principal_text().is_empty());
}

#[test]
fn different_keys_yield_different_principals() {
    let first = DerivedIdentity::from_secret_key(&[0x11; 32]);
    let second = DerivedIdentity::from_secret_key(&[0x22; 32]);
    assert_ne!(first.principal(), second.principal());
}

#[test]
fn short_keys_are_rejected() {
    let error = DerivedIdentity::from_secret_key_hex("efeb1c2f").unwrap_err();
    assert_eq!(error.op, "parse secret key");
}
