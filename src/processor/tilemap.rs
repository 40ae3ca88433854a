// src/processor/tilemap.rs
//! Converts one frame's tilemap cels into a [`RawTilemap`].

use std::collections::HashSet;

use log::{debug, trace};

use crate::aseprite::{AsepriteCelContent, AsepriteFile};
use crate::error::ProcessError;
use crate::raw::{RawTile, RawTilemap, RawTilemapLayer, RawTileset};

use super::tileset::build_raw_tileset;

/// Settings for a tilemap processing pass.
///
/// A plain value; construct it with the fields you need and pass it by
/// reference. [`Default`] selects frame 0 and skips hidden layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilemapOptions {
    /// Which source frame to extract.
    pub frame_index: usize,
    /// Skip cels whose owning layer is hidden in the source file.
    pub only_visible_layers: bool,
}

impl Default for TilemapOptions {
    fn default() -> Self {
        Self {
            frame_index: 0,
            only_visible_layers: true,
        }
    }
}

/// Build a [`RawTilemap`] from one frame of `file`.
///
/// Walks the frame's cels in source order, keeping tilemap cels whose owning
/// layer passes the visibility filter, then resolves each referenced tileset
/// exactly once (first-seen order). Layer order in the result matches cel
/// order in the source.
pub fn build_raw_tilemap(
    file: &AsepriteFile,
    options: &TilemapOptions,
) -> Result<RawTilemap, ProcessError> {
    let frame = file
        .frames
        .get(options.frame_index)
        .ok_or(ProcessError::FrameIndexOutOfBounds {
            index: options.frame_index,
            frame_count: file.frames.len(),
        })?;

    debug!(
        "building raw tilemap '{}' from frame {} ({} cels)",
        file.name,
        options.frame_index,
        frame.cels.len()
    );

    let mut layers = Vec::new();
    for cel in &frame.cels {
        let AsepriteCelContent::Tilemap(grid) = &cel.content else {
            continue;
        };
        let layer = &file.layers[cel.layer_index];
        if options.only_visible_layers && !layer.is_visible {
            trace!("skipping hidden layer '{}'", layer.name);
            continue;
        }

        let expected = (grid.columns * grid.rows) as usize;
        if grid.tiles.len() != expected {
            return Err(ProcessError::InvalidCelSize {
                layer: layer.name.clone(),
                columns: grid.columns,
                rows: grid.rows,
                expected,
                actual: grid.tiles.len(),
            });
        }

        // Flip bits and rotation are carried verbatim; the source tool's
        // encoding is not normalized here.
        let tiles = grid
            .tiles
            .iter()
            .map(|t| RawTile {
                tileset_tile_id: t.id,
                flip_x: t.flip_x != 0,
                flip_y: t.flip_y != 0,
                rotation: t.rotation,
            })
            .collect();

        layers.push(RawTilemapLayer {
            name: layer.name.clone(),
            tileset_id: grid.tileset_id,
            columns: grid.columns,
            rows: grid.rows,
            offset_x: cel.x as f32,
            offset_y: cel.y as f32,
            tiles,
        });
    }

    let tilesets = collect_tilesets(file, &layers)?;

    debug!(
        "raw tilemap '{}': {} layers, {} tilesets",
        file.name,
        layers.len(),
        tilesets.len()
    );

    Ok(RawTilemap {
        name: file.name.clone(),
        layers,
        tilesets,
    })
}

/// Resolve every tileset id referenced by `layers`, once each, in
/// first-seen order.
fn collect_tilesets(
    file: &AsepriteFile,
    layers: &[RawTilemapLayer],
) -> Result<Vec<RawTileset>, ProcessError> {
    let mut seen = HashSet::new();
    let mut tilesets = Vec::new();
    for layer in layers {
        if !seen.insert(layer.tileset_id) {
            continue;
        }
        let source = file
            .tileset(layer.tileset_id)
            .ok_or_else(|| ProcessError::UnknownTilesetId {
                layer: layer.name.clone(),
                tileset_id: layer.tileset_id,
            })?;
        tilesets.push(build_raw_tileset(source));
    }
    Ok(tilesets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aseprite::{
        AsepriteCel, AsepriteFrame, AsepriteLayer, AsepriteTile, AsepriteTilemapCel,
        AsepriteTileset,
    };

    fn tile(id: u32) -> AsepriteTile {
        AsepriteTile {
            id,
            flip_x: 0,
            flip_y: 0,
            rotation: 0,
        }
    }

    fn tilemap_cel(layer_index: usize, tileset_id: u32, columns: u32, rows: u32) -> AsepriteCel {
        AsepriteCel {
            layer_index,
            x: 0,
            y: 0,
            content: AsepriteCelContent::Tilemap(AsepriteTilemapCel {
                tileset_id,
                columns,
                rows,
                tiles: (0..columns * rows).map(tile).collect(),
            }),
        }
    }

    fn tileset(id: u32) -> AsepriteTileset {
        AsepriteTileset {
            id,
            name: format!("tileset-{id}"),
            tile_count: 2,
            tile_width: 8,
            tile_height: 8,
            pixels: vec![0; 8 * 8 * 2 * 4],
        }
    }

    fn file_with(layers: Vec<AsepriteLayer>, cels: Vec<AsepriteCel>) -> AsepriteFile {
        AsepriteFile {
            name: "map".to_string(),
            canvas_width: 32,
            canvas_height: 32,
            frames: vec![AsepriteFrame {
                duration_ms: 100,
                cels,
            }],
            layers,
            tags: Vec::new(),
            tilesets: vec![tileset(0), tileset(1)],
        }
    }

    fn visible(name: &str) -> AsepriteLayer {
        AsepriteLayer {
            name: name.to_string(),
            is_visible: true,
        }
    }

    #[test]
    fn dedups_tilesets_first_seen() {
        let file = file_with(
            vec![visible("a"), visible("b"), visible("c")],
            vec![
                tilemap_cel(0, 1, 2, 2),
                tilemap_cel(1, 0, 2, 2),
                tilemap_cel(2, 1, 2, 2),
            ],
        );
        let raw = build_raw_tilemap(&file, &TilemapOptions::default()).unwrap();
        let ids: Vec<u32> = raw.tilesets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 0]);
    }

    #[test]
    fn cel_offset_becomes_layer_offset() {
        let mut file = file_with(vec![visible("a")], vec![tilemap_cel(0, 0, 1, 1)]);
        file.frames[0].cels[0].x = -4;
        file.frames[0].cels[0].y = 12;
        let raw = build_raw_tilemap(&file, &TilemapOptions::default()).unwrap();
        assert_eq!(raw.layers[0].offset_x, -4.0);
        assert_eq!(raw.layers[0].offset_y, 12.0);
    }

    #[test]
    fn rejects_tile_buffer_size_mismatch() {
        let mut file = file_with(vec![visible("oops")], vec![tilemap_cel(0, 0, 2, 2)]);
        if let AsepriteCelContent::Tilemap(grid) = &mut file.frames[0].cels[0].content {
            grid.tiles.pop();
        }
        let err = build_raw_tilemap(&file, &TilemapOptions::default()).unwrap_err();
        assert!(matches!(err, ProcessError::InvalidCelSize { layer, .. } if layer == "oops"));
    }

    #[test]
    fn rejects_dangling_tileset_reference() {
        let file = file_with(vec![visible("a")], vec![tilemap_cel(0, 7, 1, 1)]);
        let err = build_raw_tilemap(&file, &TilemapOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::UnknownTilesetId { tileset_id: 7, .. }
        ));
    }
}
