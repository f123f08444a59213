//! TON cell construction: content cells, hashing, and bag-of-cells
//! serialization.

use std::sync::Arc;

use tonlib_core::cell::{ArcCell, BagOfCells, Cell, CellBuilder};

use crate::error::OpFailure;

fn cell_err(op: &'static str) -> impl Fn(tonlib_core::cell::TonCellError) -> OpFailure {
    move |e| OpFailure::new(op, e)
}

/// Build a content cell: an 8-bit tag, a byte payload, and an optional
/// child reference (the continuation cell in snake format).
pub fn build_content_cell(
    tag: u8,
    payload: &[u8],
    child: Option<ArcCell>,
) -> Result<Cell, OpFailure> {
    let mut builder = CellBuilder::new();
    builder.store_u8(8, tag).map_err(cell_err("build cell"))?;
    builder.store_slice(payload).map_err(cell_err("build cell"))?;
    if let Some(child) = child {
        builder
            .store_reference(&child)
            .map_err(cell_err("build cell"))?;
    }
    builder.build().map_err(cell_err("build cell"))
}

/// A plain payload cell, for use as a child reference.
pub fn child_cell(payload: &[u8]) -> Result<ArcCell, OpFailure> {
    let mut builder = CellBuilder::new();
    builder.store_slice(payload).map_err(cell_err("build cell"))?;
    Ok(Arc::new(builder.build().map_err(cell_err("build cell"))?))
}

/// Read the stored 8-bit tag back out of a built cell.
pub fn read_tag(cell: &Cell) -> Result<u8, OpFailure> {
    let mut parser = cell.parser();
    parser.load_u8(8).map_err(cell_err("read cell"))
}

/// Serialize to a checksummed bag of cells, the wire form of a cell tree.
pub fn serialize_boc(cell: &Cell) -> Result<Vec<u8>, OpFailure> {
    BagOfCells::from_root(cell.clone())
        .serialize(true)
        .map_err(cell_err("serialize boc"))
}

/// Parse a bag of cells back into its single root.
pub fn parse_boc(bytes: &[u8]) -> Result<ArcCell, OpFailure> {
    let boc = BagOfCells::parse(bytes).map_err(cell_err("parse boc"))?;
    let root = boc.single_root().map_err(cell_err("parse boc"))?;
    Ok(root.clone())
}

/// Hex form of the cell's representation hash.
pub fn cell_hash_hex(cell: &Cell) -> String {
    hex::encode(cell.cell_hash())
}
