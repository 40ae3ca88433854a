//! Converts a file's frames and tags into a [`RawSpriteSheet`].

use log::debug;

use crate::aseprite::{AsepriteFile, AsepriteLoopDirection};
use crate::raw::{RawAnimationTag, RawFrameRegion, RawSpriteSheet};

/// Build a [`RawSpriteSheet`] from `file`.
///
/// Regions follow the horizontal-strip sheet layout the editor exports:
/// frame `i` covers `(i * canvas_width, 0, canvas_width, canvas_height)`
/// and keeps the frame's duration. Tags become named animations; a tag with
/// a finite repeat count does not loop.
pub fn build_raw_sprite_sheet(file: &AsepriteFile) -> RawSpriteSheet {
    let regions = file
        .frames
        .iter()
        .enumerate()
        .map(|(i, frame)| RawFrameRegion {
            x: i as u32 * file.canvas_width,
            y: 0,
            width: file.canvas_width,
            height: file.canvas_height,
            duration_ms: frame.duration_ms,
        })
        .collect();

    let tags = file
        .tags
        .iter()
        .map(|tag| RawAnimationTag {
            name: tag.name.clone(),
            frames: (tag.from..=tag.to).map(|i| i as u32).collect(),
            is_looping: tag.repeat == 0,
            is_reversed: tag.direction == AsepriteLoopDirection::Reverse,
            is_ping_pong: tag.direction == AsepriteLoopDirection::PingPong,
        })
        .collect::<Vec<_>>();

    debug!(
        "raw sprite sheet '{}': {} frames, {} tags",
        file.name,
        file.frames.len(),
        tags.len()
    );

    RawSpriteSheet {
        name: file.name.clone(),
        regions,
        tags,
    }
}
