#![warn(missing_docs)]

//! Aseprite tilemap, tileset & animation importer for Macroquad.
//!
//! Takes an in-memory parsed Aseprite file ([`AsepriteFile`], filled by an
//! external parser) and turns it into runtime-ready assets in two stages:
//! pure processors produce engine-agnostic raw records
//! ([`RawTilemap`], [`RawTileset`], [`RawSpriteSheet`]), which are then
//! materialized into texture-backed runtime objects ([`Tilemap`],
//! [`Tileset`], [`SpriteSheet`]) or baked to a binary content stream for
//! later loading.

mod animation;
mod aseprite;
mod content {
    pub mod reader;
    pub mod writer;

    pub(crate) const TILEMAP_MAGIC: [u8; 4] = *b"ASTM";
    pub(crate) const TILESET_MAGIC: [u8; 4] = *b"ASTS";
    pub(crate) const VERSION: u16 = 1;
}
mod error;
mod processor {
    pub mod sprite_sheet;
    pub mod tilemap;
    pub mod tileset;
}
mod raw;
mod tilemap;
mod tileset;

pub use animation::{
    AnimatedSprite, AnimationEvent, AnimationFrame, AnimationTag, FrameRegion, SpriteSheet,
};
pub use aseprite::{
    AsepriteCel, AsepriteCelContent, AsepriteFile, AsepriteFrame, AsepriteLayer,
    AsepriteLoopDirection, AsepriteTag, AsepriteTile, AsepriteTilemapCel, AsepriteTileset,
};
pub use content::reader::{read_tilemap, read_tileset};
pub use content::writer::{write_tilemap, write_tileset};
pub use error::{ContentError, ProcessError};
pub use processor::sprite_sheet::build_raw_sprite_sheet;
pub use processor::tilemap::{build_raw_tilemap, TilemapOptions};
pub use processor::tileset::build_raw_tileset;
pub use raw::{
    RawAnimationTag, RawFrameRegion, RawSpriteSheet, RawTile, RawTilemap, RawTilemapLayer,
    RawTileset,
};
pub use tilemap::{PlacedTile, Tilemap, TilemapLayer};
pub use tileset::Tileset;
