// src/raw.rs
//! Canonical, engine-agnostic content records.
//!
//! Raw records sit between the parsed Aseprite model and the GPU-backed
//! runtime types: they carry everything needed to build runtime objects and
//! nothing tied to a graphics device, so the same record can feed live
//! loading or be baked to the binary content format.

use serde::{Deserialize, Serialize};

/// One tile placement as extracted from a tilemap cel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTile {
    /// Tileset-local tile id; 0 is the empty tile.
    pub tileset_tile_id: u32,
    /// Horizontal flip.
    pub flip_x: bool,
    /// Vertical flip.
    pub flip_y: bool,
    /// Rotation value, carried verbatim from the source tool.
    pub rotation: u32,
}

/// A tile layer: grid geometry, offset and `columns * rows` tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTilemapLayer {
    /// Layer name.
    pub name: String,
    /// Id of the tileset every tile in this layer draws from.
    pub tileset_id: u32,
    /// Grid width in tiles.
    pub columns: u32,
    /// Grid height in tiles.
    pub rows: u32,
    /// Layer offset on the canvas, x in pixels.
    pub offset_x: f32,
    /// Layer offset on the canvas, y in pixels.
    pub offset_y: f32,
    /// Row-major tiles, length `columns * rows`.
    pub tiles: Vec<RawTile>,
}

/// A tileset: geometry plus the RGBA8 vertical-strip pixel data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTileset {
    /// Unique tileset id.
    pub id: u32,
    /// Tileset name.
    pub name: String,
    /// Number of tiles in the strip.
    pub tile_count: u32,
    /// Width of one tile in pixels.
    pub tile_width: u32,
    /// Height of one tile in pixels.
    pub tile_height: u32,
    /// RGBA8 pixels, `tile_width * tile_height * tile_count * 4` bytes.
    pub pixels: Vec<u8>,
}

/// A processed tilemap: ordered layers plus the tilesets they reference,
/// one entry per distinct id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTilemap {
    /// Name of the source file.
    pub name: String,
    /// Layers in source order.
    pub layers: Vec<RawTilemapLayer>,
    /// Referenced tilesets, deduplicated by id in first-seen order.
    pub tilesets: Vec<RawTileset>,
}

/// One sprite-sheet frame region: bounds within the sheet texture plus the
/// frame's display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFrameRegion {
    /// Left edge within the sheet, in pixels.
    pub x: u32,
    /// Top edge within the sheet, in pixels.
    pub y: u32,
    /// Region width in pixels.
    pub width: u32,
    /// Region height in pixels.
    pub height: u32,
    /// Display duration in milliseconds.
    pub duration_ms: u32,
}

/// A named animation over sprite-sheet frame indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnimationTag {
    /// Animation name.
    pub name: String,
    /// Indices into the sheet's region table, in play order.
    pub frames: Vec<u32>,
    /// Whether playback restarts after the last frame.
    pub is_looping: bool,
    /// Whether playback starts at the last frame moving backwards.
    pub is_reversed: bool,
    /// Whether playback bounces between the ends.
    pub is_ping_pong: bool,
}

/// A processed sprite sheet: frame regions plus named animations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpriteSheet {
    /// Name of the source file.
    pub name: String,
    /// Frame regions in frame order.
    pub regions: Vec<RawFrameRegion>,
    /// Animation tags in source order.
    pub tags: Vec<RawAnimationTag>,
}
