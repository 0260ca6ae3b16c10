//! Geometry configuration for tile rendering.

use crate::errors::ConfigError;
use crate::render::defaults;

/// Pixel-space geometry for [`render`](crate::render()).
///
/// All fields are pixels. `road_width < tile_width` is assumed but not
/// enforced; rendering stays deterministic for any values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileConfig {
    /// Side length of the square tile.
    pub tile_width: f64,
    /// Width of the car road band.
    pub road_width: f64,
    /// Corner radius of the tile outline.
    pub tile_corner_radius: f64,
    /// Radius of road corner and rail curve arcs.
    pub road_arc_radius: f64,
    /// Stroke width for road edges and rail lines.
    pub road_line_width: f64,
    /// Stroke width for lane dashes, ties and the crossing mark.
    pub dash_line_width: f64,
    /// Distance between consecutive rail ties.
    pub train_dash_spacing: f64,
    /// Tie length, perpendicular to the rail.
    pub train_dash_length: f64,
    /// Length of one lane dash; the gap before it is the same length.
    pub car_dash_length: f64,
}

impl TileConfig {
    /// Config with the given widths and default styling (unchecked).
    /// Use [`try_new`](Self::try_new) for user-provided values.
    pub fn new(tile_width: f64, road_width: f64) -> Self {
        TileConfig {
            tile_width,
            road_width,
            tile_corner_radius: defaults::TILE_CORNER_RADIUS,
            road_arc_radius: defaults::ROAD_ARC_RADIUS,
            road_line_width: defaults::ROAD_LINE_WIDTH,
            dash_line_width: defaults::DASH_LINE_WIDTH,
            train_dash_spacing: defaults::TRAIN_DASH_SPACING,
            train_dash_length: defaults::TRAIN_DASH_LENGTH,
            car_dash_length: defaults::CAR_DASH_LENGTH,
        }
    }

    /// Like [`new`](Self::new), with validation.
    pub fn try_new(tile_width: f64, road_width: f64) -> Result<Self, ConfigError> {
        let config = TileConfig::new(tile_width, road_width);
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is finite and strictly positive, reporting
    /// the first offender.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("tile_width", self.tile_width),
            ("road_width", self.road_width),
            ("tile_corner_radius", self.tile_corner_radius),
            ("road_arc_radius", self.road_arc_radius),
            ("road_line_width", self.road_line_width),
            ("dash_line_width", self.dash_line_width),
            ("train_dash_spacing", self.train_dash_spacing),
            ("train_dash_length", self.train_dash_length),
            ("car_dash_length", self.car_dash_length),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        TileConfig::new(defaults::DEFAULT_TILE_WIDTH, defaults::DEFAULT_ROAD_WIDTH)
    }
}
