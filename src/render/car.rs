//! Car roads: two stroked edge lines per side, rounded inner corners where
//! two car roads meet, outer arcs where a road turns past a dead end, and
//! a dashed lane line down the middle.

use glam::DVec2;

use crate::config::TileConfig;
use crate::log::trace;
use crate::path::{Color, Path};
use crate::tile::{RoadAxis, RoadSide, RoadType, TileModel};

use super::angles::{end_angle, start_angle, winding};
use super::frame::Frame;

/// Neighborhood of one edge line: the roads it can connect to, and the
/// frame flags mounting its canonical space.
#[derive(Clone, Copy)]
struct Segment {
    /// Road on the side this edge line turns toward.
    adjacent: RoadType,
    /// Road on the side opposite the one being drawn.
    opposite: RoadType,
    /// Road on the side opposite `adjacent`.
    opposite_adjacent: RoadType,
    mirror_x: bool,
    mirror_y: bool,
    axis: RoadAxis,
}

pub(crate) fn draw_car_road(
    path: &mut Path,
    tile: &TileModel,
    config: &TileConfig,
    side: RoadSide,
) {
    trace!(?side, "drawing car road");
    let (first, second) = match side {
        RoadSide::Top => (
            Segment {
                adjacent: tile.left,
                opposite: tile.bottom,
                opposite_adjacent: tile.right,
                mirror_x: false,
                mirror_y: false,
                axis: RoadAxis::TopBottom,
            },
            Segment {
                adjacent: tile.right,
                opposite: tile.bottom,
                opposite_adjacent: tile.left,
                mirror_x: true,
                mirror_y: false,
                axis: RoadAxis::TopBottom,
            },
        ),
        RoadSide::Right => (
            Segment {
                adjacent: tile.top,
                opposite: tile.left,
                opposite_adjacent: tile.bottom,
                mirror_x: true,
                mirror_y: false,
                axis: RoadAxis::LeftRight,
            },
            Segment {
                adjacent: tile.bottom,
                opposite: tile.left,
                opposite_adjacent: tile.top,
                mirror_x: true,
                mirror_y: true,
                axis: RoadAxis::LeftRight,
            },
        ),
        RoadSide::Bottom => (
            Segment {
                adjacent: tile.left,
                opposite: tile.top,
                opposite_adjacent: tile.right,
                mirror_x: false,
                mirror_y: true,
                axis: RoadAxis::TopBottom,
            },
            Segment {
                adjacent: tile.right,
                opposite: tile.top,
                opposite_adjacent: tile.left,
                mirror_x: true,
                mirror_y: true,
                axis: RoadAxis::TopBottom,
            },
        ),
        RoadSide::Left => (
            Segment {
                adjacent: tile.top,
                opposite: tile.right,
                opposite_adjacent: tile.bottom,
                mirror_x: false,
                mirror_y: false,
                axis: RoadAxis::LeftRight,
            },
            Segment {
                adjacent: tile.bottom,
                opposite: tile.right,
                opposite_adjacent: tile.top,
                mirror_x: false,
                mirror_y: true,
                axis: RoadAxis::LeftRight,
            },
        ),
    };
    draw_edge_line(path, tile, config, first);
    draw_edge_line(path, tile, config, second);
    draw_lane_dashes(path, config, side);
}

/// One edge line of the road band, drawn in the segment's canonical space
/// from the tile edge toward the center.
fn draw_edge_line(path: &mut Path, tile: &TileModel, config: &TileConfig, seg: Segment) {
    let mid = config.tile_width / 2.0;
    let mid_road = config.road_width / 2.0;
    let frame = Frame::new(seg.axis, seg.mirror_x, seg.mirror_y, config.tile_width);

    path.move_to(frame.point(0.0, mid - mid_road));

    if !tile.blocked && seg.adjacent == RoadType::Car {
        // Rounded inner corner into the adjacent road band.
        let turn = mid - mid_road - config.road_arc_radius;
        path.line_to(frame.point(turn, mid - mid_road));
        path.arc(
            frame.point(turn, turn),
            config.road_arc_radius,
            start_angle(seg.axis, seg.mirror_x, seg.mirror_y),
            end_angle(seg.mirror_x, seg.mirror_y),
            winding(seg.axis, seg.mirror_x, seg.mirror_y),
        );
        return;
    }

    // Straight edge. A blocked tile that still touches a car road stops at
    // the center square; everything else runs to the exact center.
    let x_end = if seg.adjacent == RoadType::Car {
        mid - mid_road
    } else {
        mid
    };
    path.line_to(frame.point(x_end, mid - mid_road));

    if seg.adjacent == RoadType::None
        && seg.opposite == RoadType::None
        && seg.opposite_adjacent == RoadType::Car
    {
        draw_outer_arc(path, config, seg);
    }
}

/// Convex quarter corner at the center square, where the road band of a
/// turning car road passes a dead-end side. The center is the exact tile
/// center and the mirror flag across the drawing axis is inverted.
fn draw_outer_arc(path: &mut Path, config: &TileConfig, seg: Segment) {
    let mid = config.tile_width / 2.0;
    let (mirror_x, mirror_y) = match seg.axis {
        RoadAxis::TopBottom => (!seg.mirror_x, seg.mirror_y),
        RoadAxis::LeftRight => (seg.mirror_x, !seg.mirror_y),
    };
    path.arc(
        DVec2::new(mid, mid),
        config.road_width / 2.0,
        start_angle(seg.axis, mirror_x, mirror_y),
        end_angle(mirror_x, mirror_y),
        winding(seg.axis, mirror_x, mirror_y),
    );
}

/// Dashed lane line down the road centerline. Dashes repeat on a fixed
/// period of twice the dash length, gap first; the count is
/// `floor(half_tile / period)`.
fn draw_lane_dashes(path: &mut Path, config: &TileConfig, side: RoadSide) {
    let mid = config.tile_width / 2.0;
    let period = 2.0 * config.car_dash_length;
    let count = (mid / period).floor() as usize;
    if count == 0 {
        return;
    }

    let frame = Frame::for_side(side, config.tile_width);
    path.set_line_style(config.dash_line_width, Color::BLACK, 1.0);
    for k in 0..count {
        let from = k as f64 * period + config.car_dash_length;
        let to = (k + 1) as f64 * period;
        path.move_to(frame.point(from, mid));
        path.line_to(frame.point(to, mid));
    }
    path.set_line_style(config.road_line_width, Color::BLACK, 1.0);
}
