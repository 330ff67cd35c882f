//! Gesture engine: pointer streams → item mutations.
//!
//! The engine tracks at most one gesture at a time as a tagged state union,
//! so a drag can never overlap a rotate or scale by construction. Each
//! active variant carries the context captured at pointer-down (offset,
//! start angle, start distance) needed to compute deltas on every move and
//! decide click-vs-drag on release.
//!
//! All operations are synchronous and infallible: a gesture referencing an
//! item that was deleted mid-flight resets to idle instead of failing.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::{ARRANGE_SCALE, ARRANGE_SLOTS, SCALE_MAX, SCALE_MIN};
use crate::doc::BouquetDocument;
use crate::media::ItemId;
use crate::view::{CanvasFrame, Point, angle_from, distance_from};

/// The active gesture, if any. Exactly one mode can be live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an item across the canvas.
    Dragging {
        /// Item being dragged.
        id: ItemId,
        /// Pixel vector from the item's anchor to the pointer, captured at
        /// pointer-down and held constant for the whole gesture.
        offset: Point,
        /// Whether the pointer has moved at all. A release without movement
        /// is a click and opens the item instead.
        moved: bool,
    },
    /// The user is rotating an item via its rotate handle.
    Rotating {
        /// Item being rotated.
        id: ItemId,
        /// Pointer angle from the item center at gesture start, degrees.
        start_angle: f64,
        /// Item rotation at gesture start, degrees.
        start_rotation: f64,
    },
    /// The user is rescaling an item via its scale handle.
    Scaling {
        /// Item being scaled.
        id: ItemId,
        /// Pixel distance from item center to pointer at gesture start.
        start_distance: f64,
        /// Item scale at gesture start.
        start_scale: f64,
    },
}

/// What a pointer event did, for the host to react to (re-render, open a
/// detail view, persist).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Nothing changed.
    None,
    /// An item moved to a new (clamped) position.
    ItemMoved { id: ItemId, x: f64, y: f64 },
    /// An item's rotation changed.
    ItemRotated { id: ItemId, rotation: f64 },
    /// An item's scale changed.
    ItemScaled { id: ItemId, scale: f64 },
    /// A click (press and release without movement) on an item; the host
    /// should open its detail view.
    ItemOpened { id: ItemId },
}

/// The canvas engine: owns the document being edited, the rendered frame
/// geometry, and the gesture state machine.
pub struct CanvasEngine {
    pub doc: BouquetDocument,
    frame: CanvasFrame,
    state: InteractionState,
}

impl CanvasEngine {
    /// Create an engine around a document, with the given rendered frame.
    #[must_use]
    pub fn new(doc: BouquetDocument, frame: CanvasFrame) -> Self {
        Self { doc, frame, state: InteractionState::Idle }
    }

    /// Update the rendered frame after a resize.
    pub fn set_frame(&mut self, frame: CanvasFrame) {
        self.frame = frame;
    }

    /// The current gesture state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Pixel position of an item's anchor (its center) in the frame.
    fn item_center(&self, id: ItemId) -> Option<Point> {
        let item = self.doc.get(id)?;
        Some(self.frame.to_px(Point::new(item.x, item.y)))
    }

    // --- Gesture entry ---

    /// Pointer-down on an item's body: start a drag. Captures the pointer
    /// offset from the item anchor once. No-op for unknown ids.
    pub fn begin_drag(&mut self, id: ItemId, pointer: Point) {
        let Some(center) = self.item_center(id) else {
            return;
        };
        let offset = Point::new(pointer.x - center.x, pointer.y - center.y);
        self.state = InteractionState::Dragging { id, offset, moved: false };
    }

    /// Pointer-down on the rotate handle: start a rotation session.
    pub fn begin_rotate(&mut self, id: ItemId, pointer: Point) {
        let Some(center) = self.item_center(id) else {
            return;
        };
        let Some(item) = self.doc.get(id) else {
            return;
        };
        self.state = InteractionState::Rotating {
            id,
            start_angle: angle_from(center, pointer),
            start_rotation: item.rotation,
        };
    }

    /// Pointer-down on the scale handle: start a scale session.
    pub fn begin_scale(&mut self, id: ItemId, pointer: Point) {
        let Some(center) = self.item_center(id) else {
            return;
        };
        let Some(item) = self.doc.get(id) else {
            return;
        };
        self.state = InteractionState::Scaling {
            id,
            start_distance: distance_from(center, pointer),
            start_scale: item.scale,
        };
    }

    // --- Gesture progress ---

    /// Pointer-move while a gesture is active. Mutates the target item and
    /// reports what changed. If the item vanished mid-gesture the engine
    /// resets to idle.
    pub fn pointer_move(&mut self, pointer: Point) -> Action {
        match self.state {
            InteractionState::Idle => Action::None,
            InteractionState::Dragging { id, offset, .. } => {
                let anchor_px = Point::new(pointer.x - offset.x, pointer.y - offset.y);
                let percent = self.frame.to_percent(anchor_px);
                let Some(item) = self.doc.get_mut(id) else {
                    self.state = InteractionState::Idle;
                    return Action::None;
                };
                item.set_position(percent.x, percent.y);
                let (x, y) = (item.x, item.y);
                self.state = InteractionState::Dragging { id, offset, moved: true };
                Action::ItemMoved { id, x, y }
            }
            InteractionState::Rotating { id, start_angle, start_rotation } => {
                let Some(center) = self.item_center(id) else {
                    self.state = InteractionState::Idle;
                    return Action::None;
                };
                let angle = angle_from(center, pointer);
                let rotation = start_rotation + (angle - start_angle);
                let Some(item) = self.doc.get_mut(id) else {
                    self.state = InteractionState::Idle;
                    return Action::None;
                };
                item.set_rotation(rotation);
                Action::ItemRotated { id, rotation }
            }
            InteractionState::Scaling { id, start_distance, start_scale } => {
                let Some(center) = self.item_center(id) else {
                    self.state = InteractionState::Idle;
                    return Action::None;
                };
                let distance = distance_from(center, pointer);
                let factor = distance / start_distance;
                if !factor.is_finite() {
                    return Action::None;
                }
                let scale = (start_scale * factor).clamp(SCALE_MIN, SCALE_MAX);
                let Some(item) = self.doc.get_mut(id) else {
                    self.state = InteractionState::Idle;
                    return Action::None;
                };
                item.set_scale(scale);
                Action::ItemScaled { id, scale: item.scale }
            }
        }
    }

    /// Pointer-up: end the gesture. A drag that never moved is a click and
    /// opens the item; everything else just settles at its final value.
    pub fn pointer_up(&mut self) -> Action {
        let action = match self.state {
            InteractionState::Dragging { id, moved: false, .. } if self.doc.get(id).is_some() => {
                Action::ItemOpened { id }
            }
            _ => Action::None,
        };
        self.state = InteractionState::Idle;
        action
    }

    /// Pointer left the canvas: abandon the gesture. Mutations already
    /// applied are retained.
    pub fn cancel(&mut self) {
        self.state = InteractionState::Idle;
    }

    // --- Arrangement ---

    /// Snap every item onto the canonical slot ring: slot `i % 8`, rotation
    /// reset to 0, scale reduced to the arrange value. Deterministic given
    /// item order; a no-op for an empty document.
    pub fn arrange(&mut self) {
        for (index, item) in self.doc.items.iter_mut().enumerate() {
            let (x, y) = ARRANGE_SLOTS[index % ARRANGE_SLOTS.len()];
            item.set_position(x, y);
            item.set_rotation(0.0);
            item.set_scale(ARRANGE_SCALE);
        }
    }
}
