//! Turns a [`TileModel`] plus a [`TileConfig`] into an ordered [`Path`] of
//! drawing ops.
//!
//! Rendering is deterministic and the op order is the paint order: the tile
//! outline first, then one road per connected side going top, right,
//! bottom, left, then the center decorations on top.

mod angles;
mod car;
mod frame;
mod train;

pub mod defaults;

use glam::DVec2;

use crate::config::TileConfig;
use crate::log::debug;
use crate::path::{Color, Path};
use crate::tile::{RoadSide, RoadType, TileModel};

/// Renders a tile into a fresh [`Path`].
pub fn render(tile: &TileModel, config: &TileConfig) -> Path {
    let mut path = Path::with_capacity(32);
    render_into(&mut path, tile, config);
    path
}

/// Renders a tile into an existing buffer, clearing it first.
///
/// Reusing one buffer across tiles avoids reallocating when drawing a whole
/// board. The result is identical to [`render`].
pub fn render_into(path: &mut Path, tile: &TileModel, config: &TileConfig) {
    debug!(?tile, tile_width = config.tile_width, "rendering tile");
    path.clear();
    draw_outline(path, config);
    for side in RoadSide::ALL {
        match tile.road(side) {
            RoadType::None => {}
            RoadType::Car => car::draw_car_road(path, tile, config, side),
            RoadType::Train => train::draw_train_road(path, tile, config, side),
        }
    }
    draw_center(path, tile, config);
}

/// White rounded square filling the whole tile, stroked with the main line.
fn draw_outline(path: &mut Path, config: &TileConfig) {
    path.set_line_style(config.road_line_width, Color::BLACK, 1.0);
    path.begin_fill(Color::WHITE);
    path.rounded_rect(
        DVec2::ZERO,
        config.tile_width,
        config.tile_width,
        config.tile_corner_radius,
    );
    path.end_fill();
}

fn draw_center(path: &mut Path, tile: &TileModel, config: &TileConfig) {
    if crossing_mark_wanted(tile) {
        draw_crossing_mark(path, config);
    }
    if tile.blocked {
        draw_blocked_marker(path, config);
    }
}

/// A crossing mark calls out a meeting point of three or more rails, on an
/// open tile with no car roads.
pub(crate) fn crossing_mark_wanted(tile: &TileModel) -> bool {
    if tile.blocked || tile.any_roads_are_cars() {
        return false;
    }
    let rails = tile
        .roads()
        .iter()
        .filter(|&&road| road == RoadType::Train)
        .count();
    rails >= 3
}

/// Thin diagonal cross over the tile center.
fn draw_crossing_mark(path: &mut Path, config: &TileConfig) {
    let mid = config.tile_width / 2.0;
    let half = defaults::CROSS_HALF_LENGTH;
    path.set_line_style(config.dash_line_width, Color::BLACK, 1.0);
    path.move_to(DVec2::new(mid - half, mid - half));
    path.line_to(DVec2::new(mid + half, mid + half));
    path.move_to(DVec2::new(mid + half, mid - half));
    path.line_to(DVec2::new(mid - half, mid + half));
    path.set_line_style(config.road_line_width, Color::BLACK, 1.0);
}

/// Filled black square over the center, padded a little past the road band.
fn draw_blocked_marker(path: &mut Path, config: &TileConfig) {
    let near = config.tile_width / 2.0 - config.road_width / 2.0 - defaults::BLOCK_PADDING;
    let size = config.road_width + 2.0 * defaults::BLOCK_PADDING;
    path.begin_fill(Color::BLACK);
    path.rect(DVec2::new(near, near), size, size);
    path.end_fill();
}
