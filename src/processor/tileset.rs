//! Converts an Aseprite tileset into a [`RawTileset`].

use crate::aseprite::AsepriteTileset;
use crate::raw::RawTileset;

/// Build a [`RawTileset`] from a parsed tileset.
///
/// Pure copy of geometry and pixel data; a zero-tile tileset is legal and
/// yields an empty pixel strip.
pub fn build_raw_tileset(tileset: &AsepriteTileset) -> RawTileset {
    RawTileset {
        id: tileset.id,
        name: tileset.name.clone(),
        tile_count: tileset.tile_count,
        tile_width: tileset.tile_width,
        tile_height: tileset.tile_height,
        pixels: tileset.pixels.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_geometry_and_pixels() {
        let source = AsepriteTileset {
            id: 3,
            name: "terrain".to_string(),
            tile_count: 2,
            tile_width: 4,
            tile_height: 4,
            pixels: vec![0xAB; 4 * 4 * 2 * 4],
        };
        let raw = build_raw_tileset(&source);
        assert_eq!(raw.id, 3);
        assert_eq!(raw.name, "terrain");
        assert_eq!(raw.tile_count, 2);
        assert_eq!(raw.pixels, source.pixels);
    }

    #[test]
    fn empty_tileset_is_legal() {
        let source = AsepriteTileset {
            id: 0,
            name: "empty".to_string(),
            tile_count: 0,
            tile_width: 16,
            tile_height: 16,
            pixels: Vec::new(),
        };
        let raw = build_raw_tileset(&source);
        assert_eq!(raw.tile_count, 0);
        assert!(raw.pixels.is_empty());
    }
}
