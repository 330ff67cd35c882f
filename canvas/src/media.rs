//! Media model: the kinds of embeddable media and the placed-item type.
//!
//! A `MediaItem` is one sticker on the canvas: a typed media reference plus
//! its placement (position in percent-of-canvas coordinates, rotation in
//! degrees, scale multiplier). Placement invariants are enforced here so
//! every mutation path goes through the same clamping.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    NEW_ITEM_SCALE, POSITION_MAX, POSITION_MIN, SCALE_MAX, SCALE_MIN, SPAWN_MIN, SPAWN_RANGE,
};

/// Unique identifier for a placed media item.
pub type ItemId = Uuid;

/// The kind of media an item embeds. Wire tags are the lowercase platform
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Instagram post or reel (social post).
    Instagram,
    /// YouTube video (video embed).
    Youtube,
    /// Spotify track, album, or playlist (audio embed).
    Spotify,
    /// Substack article (article link).
    Substack,
    /// Letterboxd film page or review (film reference).
    Letterboxd,
    /// Twitter/X status (microblog post).
    Twitter,
    /// Any other well-formed http(s) URL (generic link).
    Link,
}

/// One placed, manipulable media sticker.
///
/// `media_ref` is opaque and interpreted per kind: a platform ID for
/// instagram/youtube/twitter, a `segment/id` pair for spotify, and the full
/// URL for substack/letterboxd/link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    /// Stable unique identifier, assigned at creation.
    pub id: ItemId,
    /// Which platform the reference targets.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Opaque media reference; meaning depends on `kind`.
    #[serde(rename = "mediaId")]
    pub media_ref: String,
    /// Horizontal position in percent of canvas width, within `[5, 95]`.
    pub x: f64,
    /// Vertical position in percent of canvas height, within `[5, 95]`.
    pub y: f64,
    /// Clockwise rotation in degrees. Unbounded.
    pub rotation: f64,
    /// Scale multiplier, within `[0.3, 3.0]`.
    pub scale: f64,
}

impl MediaItem {
    /// Create a new item at a randomized position inside the central spawn
    /// window, rotation 0, default scale.
    #[must_use]
    pub fn new(kind: MediaKind, media_ref: String) -> Self {
        let mut rng = rand::rng();
        Self {
            id: Uuid::new_v4(),
            kind,
            media_ref,
            x: SPAWN_MIN + rng.random_range(0.0..SPAWN_RANGE),
            y: SPAWN_MIN + rng.random_range(0.0..SPAWN_RANGE),
            rotation: 0.0,
            scale: NEW_ITEM_SCALE,
        }
    }

    /// Create a new item at an explicit position (e.g. a drag-and-drop
    /// target), clamped to the visible canvas bounds.
    #[must_use]
    pub fn new_at(kind: MediaKind, media_ref: String, x: f64, y: f64) -> Self {
        let mut item = Self::new(kind, media_ref);
        item.set_position(x, y);
        item
    }

    /// Move the item, clamping both axes to `[5, 95]`.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x.clamp(POSITION_MIN, POSITION_MAX);
        self.y = y.clamp(POSITION_MIN, POSITION_MAX);
    }

    /// Set the rotation in degrees. No wraparound; values past ±360° are
    /// kept as-is.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
    }

    /// Rescale the item, clamping to `[0.3, 3.0]`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(SCALE_MIN, SCALE_MAX);
    }
}
