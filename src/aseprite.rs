//! In-memory model of a parsed Aseprite file.
//!
//! This crate does not read `.ase`/`.aseprite` files itself; an external
//! parser is expected to fill these structures. Field encodings follow the
//! source tool: frame durations are milliseconds, tile flip fields are raw
//! integer bits (non-zero = set), tileset pixels are RGBA8 laid out as a
//! vertical strip of tiles.

use serde::{Deserialize, Serialize};

/// A parsed Aseprite file: canvas geometry plus frames, layers, animation
/// tags and tilesets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsepriteFile {
    /// Name of the file (without extension).
    pub name: String,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Animation frames in playback order.
    pub frames: Vec<AsepriteFrame>,
    /// Layers bottom-to-top, indexed by [`AsepriteCel::layer_index`].
    pub layers: Vec<AsepriteLayer>,
    /// Animation tags defined in the file.
    pub tags: Vec<AsepriteTag>,
    /// Tilesets defined in the file, keyed by [`AsepriteTileset::id`].
    pub tilesets: Vec<AsepriteTileset>,
}

impl AsepriteFile {
    /// Look up a tileset by its id.
    pub fn tileset(&self, id: u32) -> Option<&AsepriteTileset> {
        self.tilesets.iter().find(|t| t.id == id)
    }
}

/// One animation frame and the cels it contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsepriteFrame {
    /// Display duration in milliseconds.
    pub duration_ms: u32,
    /// Cels in source order (bottom layer first).
    pub cels: Vec<AsepriteCel>,
}

/// A single layer's content within one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsepriteCel {
    /// Index into [`AsepriteFile::layers`] of the owning layer.
    pub layer_index: usize,
    /// X position of the cel on the canvas, in pixels.
    pub x: i32,
    /// Y position of the cel on the canvas, in pixels.
    pub y: i32,
    /// The cel's pixel or tile content.
    pub content: AsepriteCelContent,
}

/// What a cel carries: raster pixels or a tile grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AsepriteCelContent {
    /// A raster image cel.
    Image {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// RGBA8 pixel data, `width * height * 4` bytes.
        pixels: Vec<u8>,
    },
    /// A tilemap cel.
    Tilemap(AsepriteTilemapCel),
}

/// Tile grid content of a tilemap cel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsepriteTilemapCel {
    /// Id of the tileset this cel draws from.
    pub tileset_id: u32,
    /// Grid width in tiles.
    pub columns: u32,
    /// Grid height in tiles.
    pub rows: u32,
    /// Row-major tile entries, `columns * rows` of them.
    pub tiles: Vec<AsepriteTile>,
}

/// One tile entry as the source tool encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsepriteTile {
    /// Tileset-local tile id; 0 is the empty tile.
    pub id: u32,
    /// Raw horizontal-flip bits, non-zero = flipped.
    pub flip_x: u32,
    /// Raw vertical-flip bits, non-zero = flipped.
    pub flip_y: u32,
    /// Raw rotation value, carried verbatim.
    pub rotation: u32,
}

/// A layer definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsepriteLayer {
    /// Layer name as authored in the editor.
    pub name: String,
    /// Whether the layer is visible in the editor.
    pub is_visible: bool,
}

/// Loop direction of an animation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsepriteLoopDirection {
    /// Play frames from first to last.
    Forward,
    /// Play frames from last to first.
    Reverse,
    /// Play forward, then backward, repeating.
    PingPong,
}

/// A named animation tag covering an inclusive frame range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsepriteTag {
    /// Tag name as authored in the editor.
    pub name: String,
    /// First frame of the range (inclusive).
    pub from: usize,
    /// Last frame of the range (inclusive).
    pub to: usize,
    /// Playback direction.
    pub direction: AsepriteLoopDirection,
    /// Repeat count; 0 means repeat forever.
    pub repeat: u16,
}

/// A tileset: fixed-size tile images stored as one vertical pixel strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsepriteTileset {
    /// Unique tileset id within the file.
    pub id: u32,
    /// Tileset name as authored in the editor.
    pub name: String,
    /// Number of tiles, including the empty tile 0.
    pub tile_count: u32,
    /// Width of one tile in pixels.
    pub tile_width: u32,
    /// Height of one tile in pixels.
    pub tile_height: u32,
    /// RGBA8 pixels, tile N occupying rows `N*tile_height..(N+1)*tile_height`.
    pub pixels: Vec<u8>,
}
