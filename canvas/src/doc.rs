//! Bouquet document: the aggregate of placed items plus canvas settings.
//!
//! A `BouquetDocument` is the unit of persistence. It is created empty,
//! mutated only through item add/remove and the gesture engine, and
//! serialized whole when the user saves. Item order is z-order only: later
//! items render above earlier ones.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BG_COLOR;
use crate::media::{ItemId, MediaItem, MediaKind};

/// The background art choice, serialized as the asset reference documents
/// store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundArt {
    /// Primary bouquet photograph.
    #[default]
    #[serde(rename = "/flowers.png")]
    Flowers,
    /// Alternate bouquet photograph.
    #[serde(rename = "/flowers2.png")]
    Flowers2,
    /// ASCII-art bouquet.
    #[serde(rename = "ascii")]
    Ascii,
}

impl BackgroundArt {
    /// The asset reference stored in documents and the database.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowers => "/flowers.png",
            Self::Flowers2 => "/flowers2.png",
            Self::Ascii => "ascii",
        }
    }

    /// Parse a stored asset reference back into a variant.
    #[must_use]
    pub fn from_asset(reference: &str) -> Option<Self> {
        match reference {
            "/flowers.png" => Some(Self::Flowers),
            "/flowers2.png" => Some(Self::Flowers2),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }
}

/// A user's bouquet: placed media items plus canvas-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouquetDocument {
    /// Placed items in z-order (later items draw on top).
    pub items: Vec<MediaItem>,
    /// Background art choice.
    #[serde(rename = "image_url", default)]
    pub background: BackgroundArt,
    /// Canvas background color.
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    /// Optional personal note shown alongside the shared bouquet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Optional sender name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    /// Optional recipient name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_name: Option<String>,
    /// Public share key. Assigned at persistence time; absent while the
    /// document is being edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

fn default_bg_color() -> String {
    DEFAULT_BG_COLOR.to_owned()
}

impl Default for BouquetDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl BouquetDocument {
    /// Create an empty, unsaved document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            background: BackgroundArt::default(),
            bg_color: default_bg_color(),
            note: None,
            from_name: None,
            to_name: None,
            slug: None,
        }
    }

    /// Append a new item at a randomized central position. Returns its id.
    pub fn add_item(&mut self, kind: MediaKind, media_ref: String) -> ItemId {
        let item = MediaItem::new(kind, media_ref);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Append a new item at an explicit (clamped) position, e.g. from a
    /// drag-and-drop onto the canvas. Returns its id.
    pub fn add_item_at(&mut self, kind: MediaKind, media_ref: String, x: f64, y: f64) -> ItemId {
        let item = MediaItem::new_at(kind, media_ref, x, y);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Remove an item by id. Returns false (and changes nothing) when the
    /// id is not present.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut MediaItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when no items are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the document may be persisted. Empty bouquets cannot be
    /// saved; the Save control stays inert until an item exists.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.items.is_empty()
    }
}
