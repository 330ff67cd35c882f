//! Shared numeric constants for item placement and gestures.

/// Lower clamp bound for item positions, in percent of canvas size.
pub const POSITION_MIN: f64 = 5.0;
/// Upper clamp bound for item positions, in percent of canvas size.
pub const POSITION_MAX: f64 = 95.0;

/// Lower bound of the randomized spawn window for new items.
pub const SPAWN_MIN: f64 = 30.0;
/// Width of the randomized spawn window for new items.
pub const SPAWN_RANGE: f64 = 40.0;

/// Minimum item scale.
pub const SCALE_MIN: f64 = 0.3;
/// Maximum item scale.
pub const SCALE_MAX: f64 = 3.0;

/// Scale assigned to freshly added items.
pub const NEW_ITEM_SCALE: f64 = 0.8;

/// Scale assigned by auto-arrange.
pub const ARRANGE_SCALE: f64 = 0.7;

/// Canonical auto-arrange slots, in percent coordinates, symmetric around
/// the bouquet. Items are assigned slot `index % 8`.
pub const ARRANGE_SLOTS: [(f64, f64); 8] = [
    (15.0, 25.0),
    (85.0, 25.0),
    (10.0, 55.0),
    (90.0, 55.0),
    (20.0, 80.0),
    (80.0, 80.0),
    (50.0, 15.0),
    (50.0, 85.0),
];

/// Default canvas background color.
pub const DEFAULT_BG_COLOR: &str = "#ffffff";
