//! Train roads: a single rail stroke per side, bending a quarter turn when
//! exactly two rails meet around a corner, with short perpendicular tie
//! marks along the straight run.

use crate::config::TileConfig;
use crate::log::trace;
use crate::path::{Color, Path};
use crate::tile::{RoadSide, RoadType, TileModel};

use super::angles::{end_angle, start_angle, winding};
use super::crossing_mark_wanted;
use super::frame::Frame;

/// Where this side's rail goes: around a corner, and which way the
/// canonical frame is mirrored to get there.
#[derive(Clone, Copy)]
struct RailBend {
    curve: bool,
    mirror_x: bool,
    mirror_y: bool,
}

/// A rail bends toward a neighboring rail only when that neighbor is the
/// sole other connection: the remaining two sides must be empty.
fn rail_bend(tile: &TileModel, side: RoadSide) -> RailBend {
    let bend_to = |toward: RoadSide, other: RoadSide, far: RoadSide| {
        tile.road(toward) == RoadType::Train
            && tile.road(other) == RoadType::None
            && tile.road(far) == RoadType::None
    };
    match side {
        RoadSide::Top => {
            let curve_right = bend_to(RoadSide::Right, RoadSide::Left, RoadSide::Bottom);
            let curve_left = bend_to(RoadSide::Left, RoadSide::Right, RoadSide::Bottom);
            RailBend {
                curve: curve_right || curve_left,
                mirror_x: curve_right,
                mirror_y: false,
            }
        }
        RoadSide::Right => {
            let curve_top = bend_to(RoadSide::Top, RoadSide::Bottom, RoadSide::Left);
            let curve_bottom = bend_to(RoadSide::Bottom, RoadSide::Top, RoadSide::Left);
            RailBend {
                curve: curve_top || curve_bottom,
                mirror_x: true,
                mirror_y: curve_bottom,
            }
        }
        RoadSide::Bottom => {
            let curve_right = bend_to(RoadSide::Right, RoadSide::Left, RoadSide::Top);
            let curve_left = bend_to(RoadSide::Left, RoadSide::Right, RoadSide::Top);
            RailBend {
                curve: curve_right || curve_left,
                mirror_x: curve_right,
                mirror_y: true,
            }
        }
        RoadSide::Left => {
            let curve_top = bend_to(RoadSide::Top, RoadSide::Bottom, RoadSide::Right);
            let curve_bottom = bend_to(RoadSide::Bottom, RoadSide::Top, RoadSide::Right);
            RailBend {
                curve: curve_top || curve_bottom,
                mirror_x: false,
                mirror_y: curve_bottom,
            }
        }
    }
}

pub(crate) fn draw_train_road(
    path: &mut Path,
    tile: &TileModel,
    config: &TileConfig,
    side: RoadSide,
) {
    trace!(?side, "drawing train road");
    let mid = config.tile_width / 2.0;
    let bend = rail_bend(tile, side);
    let frame = Frame::new(side.axis(), bend.mirror_x, bend.mirror_y, config.tile_width);

    path.move_to(frame.point(0.0, mid));
    if bend.curve {
        let turn = mid - config.road_arc_radius;
        path.line_to(frame.point(turn, mid));
        path.arc(
            frame.point(turn, turn),
            config.road_arc_radius,
            start_angle(frame.axis, bend.mirror_x, bend.mirror_y),
            end_angle(bend.mirror_x, bend.mirror_y),
            winding(frame.axis, bend.mirror_x, bend.mirror_y),
        );
    } else {
        // A rail crossing a car road yields at the edge of the car band.
        let x_end = if crosses_car_road(tile, side) {
            mid - config.road_width / 2.0
        } else {
            mid
        };
        path.line_to(frame.point(x_end, mid));
    }

    draw_tie_marks(path, tile, config, frame, bend.curve);
}

/// True when a car road runs perpendicular to this side's rail, so the
/// rail has to stop at the car band instead of reaching the center.
fn crosses_car_road(tile: &TileModel, side: RoadSide) -> bool {
    match side {
        RoadSide::Top | RoadSide::Bottom => {
            tile.left == RoadType::Car || tile.right == RoadType::Car
        }
        RoadSide::Left | RoadSide::Right => {
            tile.top == RoadType::Car || tile.bottom == RoadType::Car
        }
    }
}

/// Evenly spaced tie marks perpendicular to the rail, from the tile edge up
/// to whatever the rail runs into first.
fn draw_tie_marks(
    path: &mut Path,
    tile: &TileModel,
    config: &TileConfig,
    frame: Frame,
    curved: bool,
) {
    let mid = config.tile_width / 2.0;
    let stop = if curved {
        mid - config.road_arc_radius
    } else if tile.any_roads_are_cars() {
        mid - config.road_width / 2.0
    } else if crossing_mark_wanted(tile) {
        mid - config.train_dash_spacing
    } else {
        mid
    };

    let count = (stop / config.train_dash_spacing).floor() as usize;
    if count == 0 {
        return;
    }

    let half_tie = config.train_dash_length / 2.0;
    path.set_line_style(config.dash_line_width, Color::BLACK, 1.0);
    for k in 1..=count {
        let d = k as f64 * config.train_dash_spacing;
        path.move_to(frame.point(d, mid - half_tie));
        path.line_to(frame.point(d, mid + half_tie));
    }
    path.set_line_style(config.road_line_width, Color::BLACK, 1.0);
}
