//! Coordinate frames: one canonical drawing space, eight mountings.
//!
//! Road routines draw in a canonical space where the road enters from the
//! left edge and runs toward +x. A [`Frame`] mounts that space onto a
//! concrete side of the tile: [`RoadAxis::TopBottom`] swaps the axes, and
//! the mirror flags reflect across the tile's vertical and horizontal
//! midlines.

use glam::DVec2;

use crate::tile::{RoadAxis, RoadSide};

/// Remaps canonical drawing coordinates into tile space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Frame {
    pub axis: RoadAxis,
    pub mirror_x: bool,
    pub mirror_y: bool,
    pub tile_width: f64,
}

impl Frame {
    pub fn new(axis: RoadAxis, mirror_x: bool, mirror_y: bool, tile_width: f64) -> Self {
        Frame {
            axis,
            mirror_x,
            mirror_y,
            tile_width,
        }
    }

    /// The frame for a side's unmirrored straight run, used by the rail
    /// line and the thin overlays.
    pub fn for_side(side: RoadSide, tile_width: f64) -> Self {
        let (mirror_x, mirror_y) = match side {
            RoadSide::Top | RoadSide::Left => (false, false),
            RoadSide::Right => (true, false),
            RoadSide::Bottom => (false, true),
        };
        Frame::new(side.axis(), mirror_x, mirror_y, tile_width)
    }

    /// Map a canonical point into tile space: axis swap first, then the
    /// mirrors.
    pub fn point(&self, x: f64, y: f64) -> DVec2 {
        let (nx, ny) = match self.axis {
            RoadAxis::LeftRight => (x, y),
            RoadAxis::TopBottom => (y, x),
        };
        DVec2::new(
            if self.mirror_x { self.tile_width - nx } else { nx },
            if self.mirror_y { self.tile_width - ny } else { ny },
        )
    }
}
