//! Angle table for quarter-corner arcs.
//!
//! Every rounded road corner is a pair of 45° arcs, one drawn by each
//! participating side, meeting on the corner's diagonal. Each arc starts
//! axis-aligned and ends on the diagonal; which quadrant and which sweep
//! direction fall out of the drawing frame's axis and mirror flags.
//!
//! Angles are radians from +x toward +y (clockwise on screen);
//! `counterclockwise = true` means the sweep runs toward decreasing angles.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::tile::RoadAxis;

/// The axis-aligned angle an arc starts from.
///
/// Only the mirror flag across the drawing axis matters; call sites never
/// distinguish the flag along it.
pub(crate) fn start_angle(axis: RoadAxis, mirror_x: bool, mirror_y: bool) -> f64 {
    match (axis, mirror_x, mirror_y) {
        (RoadAxis::LeftRight, _, false) => FRAC_PI_2,
        (RoadAxis::LeftRight, _, true) => 3.0 * FRAC_PI_2,
        (RoadAxis::TopBottom, false, _) => 0.0,
        (RoadAxis::TopBottom, true, _) => PI,
    }
}

/// The diagonal angle an arc ends on, one per tile quadrant.
pub(crate) fn end_angle(mirror_x: bool, mirror_y: bool) -> f64 {
    match (mirror_x, mirror_y) {
        (false, false) => FRAC_PI_4,
        (false, true) => 7.0 * FRAC_PI_4,
        (true, false) => 3.0 * FRAC_PI_4,
        (true, true) => 5.0 * FRAC_PI_4,
    }
}

/// Sweep direction for the arc; `true` runs toward decreasing angles.
pub(crate) fn winding(axis: RoadAxis, mirror_x: bool, mirror_y: bool) -> bool {
    (mirror_x == mirror_y) == (axis == RoadAxis::LeftRight)
}
