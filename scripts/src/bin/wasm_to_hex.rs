use std::path::Path;

use anyhow::Result;
use helpers::artifacts::{const_name_for, decode_hex, render_bytecode_module};
use helpers::init_logging;

const ARTIFACT_PATH: &str = "artifacts/nft_collection.bin";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let artifact = Path::new(ARTIFACT_PATH);
    let bytes = tokio::fs::read(artifact).await?;
    tracing::info!(bytes = bytes.len(), path = ARTIFACT_PATH, "read artifact");

    let stem = artifact
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("artifact");
    let const_name = const_name_for(stem);
    let module = render_bytecode_module(&const_name, &bytes);

    let out_path = artifact.with_extension("rs");
    tokio::fs::write(&out_path, &module).await?;

    // The constant must decode back to the exact artifact bytes before
    // anything embeds it.
    let written = tokio::fs::read_to_string(&out_path).await?;
    let embedded = written
        .split('"')
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("no constant found in {}", out_path.display()))?;
    anyhow::ensure!(
        decode_hex(embedded)? == bytes,
        "hex round trip mismatch for {}",
        artifact.display()
    );

    println!(
        "Embedded {} bytes as {} in {}",
        bytes.len(),
        const_name,
        out_path.display()
    );
    Ok(())
}
