use anyhow::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use helpers::init_logging;
use helpers::ton::{build_content_cell, cell_hash_hex, child_cell, read_tag, serialize_boc};

// TIP-64 off-chain content layout: tag byte, then the metadata URI. The URI
// tail beyond the first cell's capacity goes into a child reference.
const OFFCHAIN_CONTENT_TAG: u8 = 0x01;
const CONTENT_URI: &str = "ipfs://bafybeialrfps3l6qvhqkzaa/collection.json";
const FIRST_CHUNK: usize = 32;

fn main() -> Result<()> {
    init_logging();

    let uri = CONTENT_URI.as_bytes();
    let (head, tail) = uri.split_at(FIRST_CHUNK.min(uri.len()));
    let continuation = if tail.is_empty() {
        None
    } else {
        Some(child_cell(tail)?)
    };
    let cell = build_content_cell(OFFCHAIN_CONTENT_TAG, head, continuation)?;

    let boc = serialize_boc(&cell)?;
    println!("Content cell hash: {}", cell_hash_hex(&cell));
    println!("Content cell boc:  {}", BASE64.encode(&boc));

    // Read the tag back out of the built cell as a sanity check on the
    // layout before it is used on chain.
    let tag = read_tag(&cell)?;
    println!("Stored tag reads back as 0x{tag:02x}");
    Ok(())
}
