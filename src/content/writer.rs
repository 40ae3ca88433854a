//! Binary content writer for raw tilemaps and tilesets.
//!
//! Everything is little-endian. Strings and pixel buffers are written as a
//! u32 byte length followed by the bytes. See the reader for the validation
//! performed on load.

use std::io::Write;

use crate::content::{TILEMAP_MAGIC, TILESET_MAGIC, VERSION};
use crate::error::ContentError;
use crate::raw::{RawTilemap, RawTilemapLayer, RawTileset};

/// Write `map` as a tilemap content stream.
///
/// Layout: magic, version, map name, tileset count, tilesets, layer count,
/// layers (each with its full `columns * rows` tile grid).
pub fn write_tilemap<W: Write>(out: &mut W, map: &RawTilemap) -> Result<(), ContentError> {
    out.write_all(&TILEMAP_MAGIC)?;
    write_u16(out, VERSION)?;
    write_string(out, &map.name)?;

    write_u32(out, map.tilesets.len() as u32)?;
    for tileset in &map.tilesets {
        write_tileset_body(out, tileset)?;
    }

    write_u32(out, map.layers.len() as u32)?;
    for layer in &map.layers {
        write_layer(out, layer)?;
    }
    Ok(())
}

/// Write `tileset` as a standalone tileset content stream.
pub fn write_tileset<W: Write>(out: &mut W, tileset: &RawTileset) -> Result<(), ContentError> {
    out.write_all(&TILESET_MAGIC)?;
    write_u16(out, VERSION)?;
    write_tileset_body(out, tileset)
}

fn write_tileset_body<W: Write>(out: &mut W, tileset: &RawTileset) -> Result<(), ContentError> {
    write_u32(out, tileset.id)?;
    write_string(out, &tileset.name)?;
    write_u32(out, tileset.tile_count)?;
    write_u32(out, tileset.tile_width)?;
    write_u32(out, tileset.tile_height)?;
    write_u32(out, tileset.pixels.len() as u32)?;
    out.write_all(&tileset.pixels)?;
    Ok(())
}

fn write_layer<W: Write>(out: &mut W, layer: &RawTilemapLayer) -> Result<(), ContentError> {
    write_string(out, &layer.name)?;
    write_u32(out, layer.tileset_id)?;
    write_u32(out, layer.columns)?;
    write_u32(out, layer.rows)?;
    write_f32(out, layer.offset_x)?;
    write_f32(out, layer.offset_y)?;
    for tile in &layer.tiles {
        write_u32(out, tile.tileset_tile_id)?;
        out.write_all(&[tile.flip_x as u8, tile.flip_y as u8])?;
        write_u32(out, tile.rotation)?;
    }
    Ok(())
}

fn write_u16<W: Write>(out: &mut W, value: u16) -> Result<(), ContentError> {
    out.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn write_u32<W: Write>(out: &mut W, value: u32) -> Result<(), ContentError> {
    out.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn write_f32<W: Write>(out: &mut W, value: f32) -> Result<(), ContentError> {
    out.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn write_string<W: Write>(out: &mut W, value: &str) -> Result<(), ContentError> {
    write_u32(out, value.len() as u32)?;
    out.write_all(value.as_bytes())?;
    Ok(())
}
