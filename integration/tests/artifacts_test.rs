use helpers::artifacts::{const_name_for, decode_hex, encode_hex, render_bytecode_module};

#[test]
fn hex_round_trip_reproduces_the_bytes() {
    let bytes: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
    assert_eq!(decode_hex(&encode_hex(&bytes)).unwrap(), bytes);
}

#[tokio::test]
async fn artifact_to_embedded_constant_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let artifact = dir.path().join("nft_collection.bin");
    let payload: Vec<u8> = (0u32..512).map(|i| (i % 251) as u8).collect();
    tokio::fs::write(&artifact, &payload).await?;

    // Same pipeline as the wasm_to_hex script: read, render, write, verify.
    let bytes = tokio::fs::read(&artifact).await?;
    let module = render_bytecode_module(&const_name_for("nft_collection"), &bytes);
    let out = dir.path().join("nft_collection.rs");
    tokio::fs::write(&out, &module).await?;

    let written = tokio::fs::read_to_string(&out).await?;
    assert!(written.contains("pub const NFT_COLLECTION_BYTECODE: &str"));
    let embedded = written.split('"').nth(1).expect("constant present");
    assert_eq!(decode_hex(embedded)?, payload);
    Ok(())
}
