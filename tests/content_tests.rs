// tests/content_tests.rs

use std::io::Cursor;

use macroquad_aseprite::{
    read_tilemap, read_tileset, write_tilemap, write_tileset, ContentError, RawTile, RawTilemap,
    RawTilemapLayer, RawTileset,
};
use pretty_assertions::assert_eq;

fn tileset(id: u32) -> RawTileset {
    RawTileset {
        id,
        name: format!("tiles-{id}"),
        tile_count: 2,
        tile_width: 4,
        tile_height: 4,
        pixels: (0..4 * 4 * 2 * 4).map(|i| i as u8).collect(),
    }
}

fn layer(name: &str, tileset_id: u32) -> RawTilemapLayer {
    let tiles = (0..6u32)
        .map(|i| RawTile {
            tileset_tile_id: i % 3,
            flip_x: i % 2 == 0,
            flip_y: i % 3 == 0,
            rotation: i,
        })
        .collect();
    RawTilemapLayer {
        name: name.to_string(),
        tileset_id,
        columns: 3,
        rows: 2,
        offset_x: -8.0,
        offset_y: 16.5,
        tiles,
    }
}

fn tilemap() -> RawTilemap {
    RawTilemap {
        name: "level-1".to_string(),
        layers: vec![layer("ground", 0), layer("props", 1)],
        tilesets: vec![tileset(0), tileset(1)],
    }
}

#[test]
fn tilemap_round_trips() {
    let map = tilemap();
    let mut bytes = Vec::new();
    write_tilemap(&mut bytes, &map).expect("write should succeed");

    let back = read_tilemap(&mut Cursor::new(&bytes)).expect("read should succeed");
    assert_eq!(back, map);
}

#[test]
fn standalone_tileset_round_trips() {
    let set = tileset(7);
    let mut bytes = Vec::new();
    write_tileset(&mut bytes, &set).expect("write should succeed");

    let back = read_tileset(&mut Cursor::new(&bytes)).expect("read should succeed");
    assert_eq!(back, set);
}

#[test]
fn empty_tilemap_round_trips() {
    let map = RawTilemap {
        name: String::new(),
        layers: Vec::new(),
        tilesets: Vec::new(),
    };
    let mut bytes = Vec::new();
    write_tilemap(&mut bytes, &map).expect("write should succeed");
    let back = read_tilemap(&mut Cursor::new(&bytes)).expect("read should succeed");
    assert_eq!(back, map);
}

#[test]
fn wrong_magic_is_rejected() {
    let mut bytes = Vec::new();
    write_tilemap(&mut bytes, &tilemap()).expect("write should succeed");
    bytes[0] = b'X';

    let err = read_tilemap(&mut Cursor::new(&bytes)).unwrap_err();
    assert!(matches!(err, ContentError::BadMagic { .. }));
}

#[test]
fn tileset_stream_is_not_a_tilemap_stream() {
    let mut bytes = Vec::new();
    write_tileset(&mut bytes, &tileset(0)).expect("write should succeed");

    let err = read_tilemap(&mut Cursor::new(&bytes)).unwrap_err();
    assert!(matches!(err, ContentError::BadMagic { .. }));
}

#[test]
fn future_version_is_rejected() {
    let mut bytes = Vec::new();
    write_tilemap(&mut bytes, &tilemap()).expect("write should succeed");
    bytes[4] = 0xFF;
    bytes[5] = 0xFF;

    let err = read_tilemap(&mut Cursor::new(&bytes)).unwrap_err();
    assert!(matches!(
        err,
        ContentError::UnsupportedVersion {
            found: 0xFFFF,
            expected: 1
        }
    ));
}

#[test]
fn dangling_layer_binding_is_rejected() {
    let map = RawTilemap {
        name: "broken".to_string(),
        layers: vec![layer("ground", 5)],
        tilesets: vec![tileset(0)],
    };
    let mut bytes = Vec::new();
    write_tilemap(&mut bytes, &map).expect("writer does not validate bindings");

    let err = read_tilemap(&mut Cursor::new(&bytes)).unwrap_err();
    assert!(matches!(
        err,
        ContentError::UnknownTilesetId {
            tileset_id: 5,
            ..
        }
    ));
}

#[test]
fn mismatched_pixel_payload_is_rejected() {
    let mut set = tileset(0);
    set.pixels.truncate(8);
    let mut bytes = Vec::new();
    write_tileset(&mut bytes, &set).expect("writer does not validate pixels");

    let err = read_tileset(&mut Cursor::new(&bytes)).unwrap_err();
    assert!(matches!(
        err,
        ContentError::PixelSizeMismatch {
            actual: 8,
            ..
        }
    ));
}

#[test]
fn truncated_stream_is_an_io_error() {
    let mut bytes = Vec::new();
    write_tilemap(&mut bytes, &tilemap()).expect("write should succeed");
    bytes.truncate(bytes.len() / 2);

    let err = read_tilemap(&mut Cursor::new(&bytes)).unwrap_err();
    assert!(matches!(err, ContentError::Io(_)));
}
