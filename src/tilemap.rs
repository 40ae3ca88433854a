use std::collections::HashMap;

use macroquad::prelude::*;

use crate::raw::RawTilemap;
use crate::tileset::Tileset;

/// One resolved cell of a runtime layer.
#[derive(Debug, Clone, Copy)]
pub struct PlacedTile {
    /// Tileset-local tile id; 0 is the empty tile.
    pub tile_id: u32,
    /// Horizontal flip.
    pub flip_x: bool,
    /// Vertical flip.
    pub flip_y: bool,
    /// Rotation in quarter-turns clockwise.
    pub rotation: u32,
    /// Pixel position of the cell, layer offset included.
    pub position: Vec2,
}

/// A named runtime layer: grid geometry plus a full `columns * rows`
/// placement grid. References its tileset by id, never by ownership.
#[derive(Debug, Clone)]
pub struct TilemapLayer {
    /// Layer name.
    pub name: String,
    /// Id of the tileset this layer draws from.
    pub tileset_id: u32,
    /// Grid width in tiles.
    pub columns: u32,
    /// Grid height in tiles.
    pub rows: u32,
    /// Layer offset on the canvas.
    pub offset: Vec2,
    /// Row-major placements, length `columns * rows`.
    pub tiles: Vec<PlacedTile>,
}

/// A runtime tilemap: ordered named layers plus an id-keyed arena of the
/// tilesets they share.
pub struct Tilemap {
    /// Name of the source file.
    pub name: String,
    layers: Vec<TilemapLayer>,
    tilesets: HashMap<u32, Tileset>,
}

impl Tilemap {
    /// Materialize `raw` into GPU-backed form.
    ///
    /// Builds one [`Tileset`] per raw tileset, then binds each layer to its
    /// tileset and precomputes per-cell pixel positions. Layer order matches
    /// the raw map.
    ///
    /// # Panics
    ///
    /// Panics if a layer references a tileset id absent from
    /// `raw.tilesets`. Maps produced by
    /// [`build_raw_tilemap`](crate::build_raw_tilemap) or read back through
    /// [`read_tilemap`](crate::read_tilemap) always uphold this invariant;
    /// a violation means the raw value was constructed by hand.
    pub fn from_raw(raw: &RawTilemap) -> Self {
        let tilesets: HashMap<u32, Tileset> = raw
            .tilesets
            .iter()
            .map(|t| (t.id, Tileset::from_raw(t)))
            .collect();

        let layers = raw
            .layers
            .iter()
            .map(|layer| {
                let Some(tileset) = tilesets.get(&layer.tileset_id) else {
                    panic!(
                        "tilemap '{}': layer '{}' references tileset id {} with no matching tileset",
                        raw.name, layer.name, layer.tileset_id
                    );
                };
                let offset = vec2(layer.offset_x, layer.offset_y);
                let tw = tileset.tile_width as f32;
                let th = tileset.tile_height as f32;

                let tiles = layer
                    .tiles
                    .iter()
                    .enumerate()
                    .map(|(idx, tile)| {
                        let col = idx as u32 % layer.columns;
                        let row = idx as u32 / layer.columns;
                        PlacedTile {
                            tile_id: tile.tileset_tile_id,
                            flip_x: tile.flip_x,
                            flip_y: tile.flip_y,
                            rotation: tile.rotation,
                            position: offset + vec2(col as f32 * tw, row as f32 * th),
                        }
                    })
                    .collect();

                TilemapLayer {
                    name: layer.name.clone(),
                    tileset_id: layer.tileset_id,
                    columns: layer.columns,
                    rows: layer.rows,
                    offset,
                    tiles,
                }
            })
            .collect();

        Tilemap {
            name: raw.name.clone(),
            layers,
            tilesets,
        }
    }

    /// Layers in source order.
    pub fn layers(&self) -> &[TilemapLayer] {
        &self.layers
    }

    /// Look up a layer by name.
    pub fn layer(&self, name: &str) -> Option<&TilemapLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Look up a tileset by id.
    pub fn tileset(&self, id: u32) -> Option<&Tileset> {
        self.tilesets.get(&id)
    }

    /// Draw every layer in order, `origin` at the map's top-left.
    ///
    /// Empty tiles (id 0) are skipped. Flips and rotation map onto
    /// [`DrawTextureParams`]; rotation is quarter-turns clockwise.
    pub fn draw(&self, origin: Vec2) {
        for layer in &self.layers {
            // from_raw guarantees the binding exists
            let tileset = &self.tilesets[&layer.tileset_id];
            for tile in &layer.tiles {
                if tile.tile_id == 0 {
                    continue;
                }
                draw_texture_ex(
                    &tileset.texture,
                    origin.x + tile.position.x,
                    origin.y + tile.position.y,
                    WHITE,
                    DrawTextureParams {
                        source: Some(tileset.tile_source(tile.tile_id)),
                        rotation: tile.rotation as f32 * std::f32::consts::FRAC_PI_2,
                        flip_x: tile.flip_x,
                        flip_y: tile.flip_y,
                        ..Default::default()
                    },
                );
            }
        }
    }
}
