use macroquad::prelude::*;

use crate::raw::RawTileset;

/// A runtime tileset: one GPU texture holding all tiles as a vertical
/// strip, plus the geometry needed to slice it.
///
/// Tilesets are shared by reference: a [`Tilemap`](crate::Tilemap) owns its
/// tilesets in an id-keyed arena and layers look them up by id.
pub struct Tileset {
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
    /// The strip texture, `tile_width` x `tile_height * tile_count`.
    pub texture: Texture2D,
}

impl Tileset {
    /// Upload `raw` to the GPU and wrap it as a runtime tileset.
    ///
    /// Deterministic: the same raw tileset always yields pixel-identical
    /// texture content. A zero-tile tileset produces an empty texture.
    pub fn from_raw(raw: &RawTileset) -> Self {
        let texture = Texture2D::from_rgba8(
            raw.tile_width as u16,
            (raw.tile_height * raw.tile_count) as u16,
            &raw.pixels,
        );
        texture.set_filter(FilterMode::Nearest);

        Tileset {
            id: raw.id,
            name: raw.name.clone(),
            tile_count: raw.tile_count,
            tile_width: raw.tile_width,
            tile_height: raw.tile_height,
            texture,
        }
    }

    /// Source rectangle of one tile within the strip texture.
    #[inline]
    pub fn tile_source(&self, tile_id: u32) -> Rect {
        Rect::new(
            0.0,
            (tile_id * self.tile_height) as f32,
            self.tile_width as f32,
            self.tile_height as f32,
        )
    }
}
