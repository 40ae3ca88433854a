//! Sprite-sheet regions, named animation tags and the playback state
//! machine.
//!
//! [`SpriteSheet`] holds the frame-region table and the tags; it does not
//! own a texture, so playback logic stays testable and callers pass the
//! sheet texture at draw time. Selecting an animation builds a fresh
//! [`AnimatedSprite`]; stepping one returns the [`AnimationEvent`]s fired
//! during that step instead of invoking callbacks, leaving dispatch to the
//! caller.

use std::collections::HashMap;

use log::debug;
use macroquad::prelude::*;

use crate::error::ProcessError;
use crate::raw::RawSpriteSheet;

/// One sprite-sheet frame region: bounds within the sheet texture plus the
/// frame's display duration in seconds.
#[derive(Debug, Clone, Copy)]
pub struct FrameRegion {
    /// Region bounds within the sheet texture.
    pub bounds: Rect,
    /// Display duration in seconds.
    pub duration: f32,
}

/// A named animation over sprite-sheet frame indices. Immutable once
/// authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationTag {
    /// Animation name.
    pub name: String,
    /// Indices into the sheet's region table, in play order.
    pub frames: Vec<usize>,
    /// Whether playback restarts after the last frame.
    pub is_looping: bool,
    /// Whether playback starts at the last frame moving backwards.
    pub is_reversed: bool,
    /// Whether playback bounces between the ends.
    pub is_ping_pong: bool,
}

/// A sprite sheet: frame-region table plus named animation tags.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// Name of the source file.
    pub name: String,
    regions: Vec<FrameRegion>,
    tags: HashMap<String, AnimationTag>,
}

impl SpriteSheet {
    /// Build a sheet from a region table and a set of tags.
    pub fn new(
        name: impl Into<String>,
        regions: Vec<FrameRegion>,
        tags: impl IntoIterator<Item = AnimationTag>,
    ) -> Self {
        SpriteSheet {
            name: name.into(),
            regions,
            tags: tags.into_iter().map(|t| (t.name.clone(), t)).collect(),
        }
    }

    /// Build a sheet from its raw record.
    pub fn from_raw(raw: &RawSpriteSheet) -> Self {
        let regions = raw
            .regions
            .iter()
            .map(|r| FrameRegion {
                bounds: Rect::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32),
                duration: r.duration_ms as f32 / 1000.0,
            })
            .collect();
        let tags = raw.tags.iter().map(|t| AnimationTag {
            name: t.name.clone(),
            frames: t.frames.iter().map(|&i| i as usize).collect(),
            is_looping: t.is_looping,
            is_reversed: t.is_reversed,
            is_ping_pong: t.is_ping_pong,
        });
        Self::new(raw.name.clone(), regions, tags)
    }

    /// The frame-region table.
    pub fn regions(&self) -> &[FrameRegion] {
        &self.regions
    }

    /// Look up an animation tag by name.
    pub fn tag(&self, name: &str) -> Option<&AnimationTag> {
        self.tags.get(name)
    }

    /// Start the named animation.
    ///
    /// Fails with [`ProcessError::AnimationNotFound`] for an unknown name
    /// and [`ProcessError::FrameOutOfBounds`] when the tag lists a frame
    /// index outside the region table. The returned sprite replaces any
    /// previous one wholesale; running animations are never retargeted in
    /// place.
    pub fn animated_sprite(&self, name: &str) -> Result<AnimatedSprite, ProcessError> {
        let tag = self
            .tags
            .get(name)
            .ok_or_else(|| ProcessError::AnimationNotFound {
                name: name.to_string(),
            })?;
        debug!("starting animation '{}' from sheet '{}'", name, self.name);
        AnimatedSprite::new(tag, &self.regions)
    }
}

/// One event fired by [`AnimatedSprite::update`]. Frame indices are
/// positions within the animation's own frame list, not region indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The given frame started displaying.
    FrameBegin(usize),
    /// The given frame finished displaying.
    FrameEnd(usize),
    /// Playback wrapped or bounced at an end.
    Looped,
    /// A non-looping animation passed its last frame and stopped.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

/// A resolved animation frame: which region it shows and for how long.
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrame {
    /// Index into the owning sheet's region table.
    pub region_index: usize,
    /// Region bounds within the sheet texture.
    pub bounds: Rect,
    /// Display duration in seconds.
    pub duration: f32,
}

/// Playback state for one running animation.
///
/// Owned exclusively by one sprite; stepping it mutates only this value.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    tag_name: String,
    frames: Vec<AnimationFrame>,
    is_looping: bool,
    is_ping_pong: bool,
    current: usize,
    direction: Direction,
    elapsed: f32,
    finished: bool,
}

impl AnimatedSprite {
    /// Resolve `tag` against `regions` and reset playback to the tag's
    /// declared starting frame and direction.
    pub fn new(tag: &AnimationTag, regions: &[FrameRegion]) -> Result<Self, ProcessError> {
        let frames = tag
            .frames
            .iter()
            .map(|&index| {
                let region = regions.get(index).ok_or(ProcessError::FrameOutOfBounds {
                    tag: tag.name.clone(),
                    index,
                    region_count: regions.len(),
                })?;
                Ok(AnimationFrame {
                    region_index: index,
                    bounds: region.bounds,
                    duration: region.duration,
                })
            })
            .collect::<Result<Vec<_>, ProcessError>>()?;

        let (current, direction) = if tag.is_reversed {
            (frames.len().saturating_sub(1), Direction::Reverse)
        } else {
            (0, Direction::Forward)
        };

        Ok(AnimatedSprite {
            tag_name: tag.name.clone(),
            frames,
            is_looping: tag.is_looping,
            is_ping_pong: tag.is_ping_pong,
            current,
            direction,
            elapsed: 0.0,
            finished: false,
        })
    }

    /// Name of the tag this sprite is playing.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Index of the displayed frame within the animation's frame list.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The displayed frame, if the animation has any frames.
    pub fn current_frame(&self) -> Option<&AnimationFrame> {
        self.frames.get(self.current)
    }

    /// Whether a non-looping animation has passed its last frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance playback by `dt` seconds and return the events fired.
    ///
    /// A finished or empty animation consumes no time and fires nothing.
    /// At most one full cycle of frames advances per call, so a frame with
    /// zero or negative duration cannot spin forever; when the cap is hit
    /// the remaining accumulated time is dropped.
    pub fn update(&mut self, dt: f32) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        if self.finished || self.frames.is_empty() {
            return events;
        }

        self.elapsed += dt;
        let max_advances = self.frames.len();
        let mut advances = 0;
        while !self.finished && self.elapsed >= self.frames[self.current].duration {
            if advances == max_advances {
                self.elapsed = 0.0;
                break;
            }
            advances += 1;
            self.elapsed -= self.frames[self.current].duration;
            events.push(AnimationEvent::FrameEnd(self.current));
            self.advance(&mut events);
        }
        events
    }

    /// Move one frame in the current direction, handling the ends.
    fn advance(&mut self, events: &mut Vec<AnimationEvent>) {
        let last = self.frames.len() - 1;
        let at_end = match self.direction {
            Direction::Forward => self.current == last,
            Direction::Reverse => self.current == 0,
        };

        if at_end {
            if self.is_ping_pong {
                // Bounce onto the penultimate frame so the end frame is not
                // shown twice in a row: 0,1,2,1,0,...
                self.direction = match self.direction {
                    Direction::Forward => Direction::Reverse,
                    Direction::Reverse => Direction::Forward,
                };
                self.current = match self.direction {
                    Direction::Reverse => self.current.saturating_sub(1),
                    Direction::Forward => (self.current + 1).min(last),
                };
                events.push(AnimationEvent::Looped);
            } else if self.is_looping {
                self.current = match self.direction {
                    Direction::Forward => 0,
                    Direction::Reverse => last,
                };
                events.push(AnimationEvent::Looped);
            } else {
                // Clamp at the boundary and go idle.
                self.finished = true;
                events.push(AnimationEvent::Ended);
                return;
            }
        } else {
            self.current = match self.direction {
                Direction::Forward => self.current + 1,
                Direction::Reverse => self.current - 1,
            };
        }
        events.push(AnimationEvent::FrameBegin(self.current));
    }

    /// Draw the current frame of `texture` at `position`.
    pub fn draw(&self, texture: &Texture2D, position: Vec2) {
        let Some(frame) = self.current_frame() else {
            return;
        };
        draw_texture_ex(
            texture,
            position.x,
            position.y,
            WHITE,
            DrawTextureParams {
                source: Some(frame.bounds),
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(durations: &[f32]) -> Vec<FrameRegion> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &duration)| FrameRegion {
                bounds: Rect::new(i as f32 * 16.0, 0.0, 16.0, 16.0),
                duration,
            })
            .collect()
    }

    fn tag(frames: &[usize], looping: bool, reversed: bool, ping_pong: bool) -> AnimationTag {
        AnimationTag {
            name: "t".to_string(),
            frames: frames.to_vec(),
            is_looping: looping,
            is_reversed: reversed,
            is_ping_pong: ping_pong,
        }
    }

    #[test]
    fn ping_pong_bounces_onto_penultimate_frame() {
        let regions = regions(&[0.1, 0.1, 0.1]);
        let mut sprite = AnimatedSprite::new(&tag(&[0, 1, 2], false, false, true), &regions)
            .expect("valid tag");
        let mut visited = vec![sprite.current_index()];
        for _ in 0..6 {
            sprite.update(0.1);
            visited.push(sprite.current_index());
        }
        assert_eq!(visited, vec![0, 1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn zero_duration_frame_cannot_spin_forever() {
        let regions = regions(&[0.0, 0.0, 0.0]);
        let mut sprite = AnimatedSprite::new(&tag(&[0, 1, 2], true, false, false), &regions)
            .expect("valid tag");
        // One full cycle at most per call, then the leftover time is dropped.
        for _ in 0..4 {
            let events = sprite.update(0.016);
            let advances = events
                .iter()
                .filter(|e| matches!(e, AnimationEvent::FrameEnd(_)))
                .count();
            assert_eq!(advances, 3);
        }
    }

    #[test]
    fn single_frame_ping_pong_stays_put() {
        let regions = regions(&[0.1]);
        let mut sprite =
            AnimatedSprite::new(&tag(&[0], false, false, true), &regions).expect("valid tag");
        for _ in 0..4 {
            sprite.update(0.1);
            assert_eq!(sprite.current_index(), 0);
            assert!(!sprite.is_finished());
        }
    }
}
