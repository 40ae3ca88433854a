use std::io;
use thiserror::Error;

/// Errors produced while transforming parsed Aseprite data into raw or
/// runtime assets.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The requested frame does not exist in the source file.
    #[error("frame index {index} out of bounds, file has {frame_count} frames")]
    FrameIndexOutOfBounds {
        /// Requested frame index.
        index: usize,
        /// Number of frames in the file.
        frame_count: usize,
    },
    /// A tilemap cel's tile buffer does not match its column/row counts.
    #[error("tilemap cel on layer '{layer}' has {actual} tiles, expected {expected} ({columns}x{rows})")]
    InvalidCelSize {
        /// Name of the owning layer.
        layer: String,
        /// Cel width in tiles.
        columns: u32,
        /// Cel height in tiles.
        rows: u32,
        /// columns * rows.
        expected: usize,
        /// Actual tile buffer length.
        actual: usize,
    },
    /// A tilemap cel references a tileset id the file does not define.
    #[error("layer '{layer}' references tileset id {tileset_id} not present in the file")]
    UnknownTilesetId {
        /// Name of the owning layer.
        layer: String,
        /// The dangling tileset id.
        tileset_id: u32,
    },
    /// No animation tag with the requested name exists on the sprite sheet.
    #[error("no animation named '{name}' in sprite sheet")]
    AnimationNotFound {
        /// The requested animation name.
        name: String,
    },
    /// An animation tag lists a frame index outside the sheet's region table.
    #[error("animation '{tag}' references frame {index}, sheet has {region_count} regions")]
    FrameOutOfBounds {
        /// Name of the animation tag.
        tag: String,
        /// The offending frame index.
        index: usize,
        /// Number of regions in the sheet.
        region_count: usize,
    },
}

/// Errors produced while reading or writing binary content streams.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Underlying stream failure.
    #[error("content i/o error")]
    Io(#[from] io::Error),
    /// The stream does not start with the expected magic bytes.
    #[error("bad content magic {found:?}")]
    BadMagic {
        /// The four bytes actually read.
        found: [u8; 4],
    },
    /// The stream was written with a format version this build cannot read.
    #[error("unsupported content version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version found in the stream.
        found: u16,
        /// Version this reader understands.
        expected: u16,
    },
    /// A string field is not valid UTF-8.
    #[error("content string is not valid utf-8")]
    InvalidString(#[from] std::string::FromUtf8Error),
    /// A tileset's pixel payload does not match its declared geometry.
    #[error("tileset '{name}' pixel data is {actual} bytes, expected {expected}")]
    PixelSizeMismatch {
        /// Tileset name.
        name: String,
        /// tile_width * tile_height * tile_count * 4.
        expected: usize,
        /// Byte count found in the stream.
        actual: usize,
    },
    /// A layer in the stream references a tileset the stream does not carry.
    #[error("layer '{layer}' references tileset id {tileset_id} missing from content")]
    UnknownTilesetId {
        /// Layer name.
        layer: String,
        /// The dangling tileset id.
        tileset_id: u32,
    },
}
