use anyhow::Result;
use helpers::icp::DerivedIdentity;
use helpers::init_logging;

// Throwaway devnet key; derivation is deterministic, so the printed
// principal is stable across runs.
const SECRET_KEY_HEX: &str = "efeb1c2f5a0fd6b15eaf61f2a6e48c8c7d4b3a2910efccdb8897a65d4c3b2a79";

fn main() -> Result<()> {
    init_logging();

    let identity = DerivedIdentity::from_secret_key_hex(SECRET_KEY_HEX)?;
    println!("Principal: {}", identity.principal_text());
    Ok(())
}
