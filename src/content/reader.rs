//! Binary content reader for raw tilemaps and tilesets.
//!
//! Mirrors the writer byte for byte and validates on the way in: magic,
//! format version, string encoding, pixel payload size against the declared
//! geometry, and every layer's tileset binding. A map that reads
//! successfully always satisfies the layer→tileset invariant the runtime
//! relies on.

use std::collections::HashSet;
use std::io::Read;

use log::debug;

use crate::content::{TILEMAP_MAGIC, TILESET_MAGIC, VERSION};
use crate::error::ContentError;
use crate::raw::{RawTile, RawTilemap, RawTilemapLayer, RawTileset};

/// Read a tilemap content stream written by
/// [`write_tilemap`](crate::write_tilemap).
pub fn read_tilemap<R: Read>(input: &mut R) -> Result<RawTilemap, ContentError> {
    read_magic(input, TILEMAP_MAGIC)?;
    read_version(input)?;
    let name = read_string(input)?;

    let tileset_count = read_u32(input)?;
    let mut tilesets = Vec::with_capacity(tileset_count as usize);
    for _ in 0..tileset_count {
        tilesets.push(read_tileset_body(input)?);
    }

    let layer_count = read_u32(input)?;
    let mut layers = Vec::with_capacity(layer_count as usize);
    for _ in 0..layer_count {
        layers.push(read_layer(input)?);
    }

    let known: HashSet<u32> = tilesets.iter().map(|t| t.id).collect();
    for layer in &layers {
        if !known.contains(&layer.tileset_id) {
            return Err(ContentError::UnknownTilesetId {
                layer: layer.name.clone(),
                tileset_id: layer.tileset_id,
            });
        }
    }

    debug!(
        "read tilemap content '{}': {} tilesets, {} layers",
        name,
        tilesets.len(),
        layers.len()
    );

    Ok(RawTilemap {
        name,
        layers,
        tilesets,
    })
}

/// Read a standalone tileset content stream written by
/// [`write_tileset`](crate::write_tileset).
pub fn read_tileset<R: Read>(input: &mut R) -> Result<RawTileset, ContentError> {
    read_magic(input, TILESET_MAGIC)?;
    read_version(input)?;
    read_tileset_body(input)
}

fn read_tileset_body<R: Read>(input: &mut R) -> Result<RawTileset, ContentError> {
    let id = read_u32(input)?;
    let name = read_string(input)?;
    let tile_count = read_u32(input)?;
    let tile_width = read_u32(input)?;
    let tile_height = read_u32(input)?;

    let pixel_len = read_u32(input)? as usize;
    let expected = (tile_width * tile_height * tile_count * 4) as usize;
    if pixel_len != expected {
        return Err(ContentError::PixelSizeMismatch {
            name,
            expected,
            actual: pixel_len,
        });
    }
    let mut pixels = vec![0u8; pixel_len];
    input.read_exact(&mut pixels)?;

    Ok(RawTileset {
        id,
        name,
        tile_count,
        tile_width,
        tile_height,
        pixels,
    })
}

fn read_layer<R: Read>(input: &mut R) -> Result<RawTilemapLayer, ContentError> {
    let name = read_string(input)?;
    let tileset_id = read_u32(input)?;
    let columns = read_u32(input)?;
    let rows = read_u32(input)?;
    let offset_x = read_f32(input)?;
    let offset_y = read_f32(input)?;

    let count = (columns * rows) as usize;
    let mut tiles = Vec::with_capacity(count);
    for _ in 0..count {
        let tileset_tile_id = read_u32(input)?;
        let mut flips = [0u8; 2];
        input.read_exact(&mut flips)?;
        let rotation = read_u32(input)?;
        tiles.push(RawTile {
            tileset_tile_id,
            flip_x: flips[0] != 0,
            flip_y: flips[1] != 0,
            rotation,
        });
    }

    Ok(RawTilemapLayer {
        name,
        tileset_id,
        columns,
        rows,
        offset_x,
        offset_y,
        tiles,
    })
}

fn read_magic<R: Read>(input: &mut R, expected: [u8; 4]) -> Result<(), ContentError> {
    let mut found = [0u8; 4];
    input.read_exact(&mut found)?;
    if found != expected {
        return Err(ContentError::BadMagic { found });
    }
    Ok(())
}

fn read_version<R: Read>(input: &mut R) -> Result<(), ContentError> {
    let mut buf = [0u8; 2];
    input.read_exact(&mut buf)?;
    let found = u16::from_le_bytes(buf);
    if found != VERSION {
        return Err(ContentError::UnsupportedVersion {
            found,
            expected: VERSION,
        });
    }
    Ok(())
}

fn read_u32<R: Read>(input: &mut R) -> Result<u32, ContentError> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_f32<R: Read>(input: &mut R) -> Result<f32, ContentError> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

fn read_string<R: Read>(input: &mut R) -> Result<String, ContentError> {
    let len = read_u32(input)? as usize;
    let mut buf = vec![0u8; len];
    input.read_exact(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}
