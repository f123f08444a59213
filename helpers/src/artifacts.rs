//! Compiled-artifact tooling: hex transforms and source-embeddable
//! bytecode constants.

use crate::error::OpFailure;

pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string, with or without a `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, OpFailure> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| OpFailure::new("decode hex", e))
}

/// Render a binary artifact as a Rust source fragment holding a hex string
/// constant, ready to embed next to the deployment scripts.
pub fn render_bytecode_module(const_name: &str, bytes: &[u8]) -> String {
    format!(
        "// Generated from a compiled artifact; do not edit by hand.\n\
         pub const {}: &str = \"{}\";\n",
        const_name,
        encode_hex(bytes)
    )
}

/// SHOUTY constant name for an artifact file stem.
pub fn const_name_for(file_stem: &str) -> String {
    let mut name: String = file_stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name.push_str("_BYTECODE");
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_is_exact() {
        let bytes = vec![0x00, 0x01, 0x7f, 0x80, 0xff];
        assert_eq!(decode_hex(&encode_hex(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn decode_accepts_0x_prefix_and_whitespace() {
        assert_eq!(decode_hex("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex(" deadbeef \n").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_rejects_odd_length() {
        assert!(decode_hex("abc").is_err());
    }

    #[test]
    fn rendered_module_embeds_the_exact_bytes() {
        let bytes = vec![0x60, 0x80, 0x60, 0x40];
        let module = render_bytecode_module("COUNTER_BYTECODE", &bytes);
        assert!(module.contains("pub const COUNTER_BYTECODE: &str"));
        let embedded = module.split('"').nth(1).unwrap();
        assert_eq!(decode_hex(embedded).unwrap(), bytes);
    }

    #[test]
    fn const_names_are_valid_identifiers() {
        assert_eq!(const_name_for("nft_collection"), "NFT_COLLECTION_BYTECODE");
        assert_eq!(const_name_for("increment-note"), "INCREMENT_NOTE_BYTECODE");
        assert_eq!(const_name_for("1inch"), "_1INCH_BYTECODE");
    }
}
