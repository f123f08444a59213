use helpers::ton::{
    build_content_cell, cell_hash_hex, child_cell, parse_boc, read_tag, serialize_boc,
};

const TAG: u8 = 0x01;
const URI: &[u8] = b"ipfs://bafybeialrfps3l6qvhqkzaa/collection.json";

#[test]
fn identical_inputs_build_identical_hashes() {
    let first = build_content_cell(TAG, URI, None).unwrap();
    let second = build_content_cell(TAG, URI, None).unwrap();
    assert_eq!(cell_hash_hex(&first), cell_hash_hex(&second));
}

#[test]
fn payload_changes_the_hash() {
    let first = build_content_cell(TAG, URI, None).unwrap();
    let second = build_content_cell(TAG, b"ipfs://other.json", None).unwrap();
    assert_ne!(cell_hash_hex(&first), cell_hash_hex(&second));
}

#[test]
fn child_reference_changes_the_hash() {
    let child = child_cell(b"continuation").unwrap();
    let with_child = build_content_cell(TAG, URI, Some(child)).unwrap();
    let without_child = build_content_cell(TAG, URI, None).unwrap();
    assert_ne!(cell_hash_hex(&with_child), cell_hash_hex(&without_child));
}

#[test]
fn stored_tag_reads_back() {
    let cell = build_content_cell(TAG, URI, None).unwrap();
    assert_eq!(read_tag(&cell).unwrap(), TAG);
}

#[test]
fn bag_of_cells_round_trip_preserves_the_root_hash() {
    let child = child_cell(b"continuation").unwrap();
    let cell = build_content_cell(TAG, URI, Some(child)).unwrap();

    let boc = serialize_boc(&cell).unwrap();
    let root = parse_boc(&boc).unwrap();

    assert_eq!(cell_hash_hex(&root), cell_hash_hex(&cell));
    assert_eq!(read_tag(&root).unwrap(), TAG);
}
