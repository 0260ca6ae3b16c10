//! Default sizes and settings (all in pixels).

pub const DEFAULT_TILE_WIDTH: f64 = 180.0;
pub const DEFAULT_ROAD_WIDTH: f64 = 32.0;

pub const TILE_CORNER_RADIUS: f64 = 20.0;
pub const ROAD_ARC_RADIUS: f64 = 20.0;
pub const ROAD_LINE_WIDTH: f64 = 4.0;
pub const DASH_LINE_WIDTH: f64 = 2.0;
pub const TRAIN_DASH_SPACING: f64 = 16.0;
pub const TRAIN_DASH_LENGTH: f64 = 18.0;
pub const CAR_DASH_LENGTH: f64 = 12.0;

/// Margin of the blocked marker beyond the center square, per side.
pub const BLOCK_PADDING: f64 = 4.0;

/// Half-length of each stroke of the crossing mark.
pub const CROSS_HALF_LENGTH: f64 = 8.0;
