//! The fixed set of tile archetypes, keyed by small ids.

use crate::tile::{RoadType, TileModel};

use RoadType::{Car, Train};

/// Number of defined archetypes; valid ids are `0..ARCHETYPE_COUNT`.
pub const ARCHETYPE_COUNT: u8 = 15;

/// Look up the archetype for an id.
///
/// Unknown ids fall back to [`TileModel::EMPTY`] so callers can render any
/// id without checking bounds first.
pub fn archetype(id: u8) -> TileModel {
    let empty = TileModel::EMPTY;
    match id {
        0 => TileModel {
            top: Car,
            right: Car,
            bottom: Train,
            left: Car,
            blocked: true,
        },
        1 => TileModel {
            top: Car,
            right: Train,
            bottom: Train,
            left: Train,
            blocked: true,
        },
        2 => TileModel {
            top: Car,
            right: Car,
            bottom: Car,
            left: Car,
            ..empty
        },
        3 => TileModel {
            top: Train,
            right: Train,
            bottom: Train,
            left: Train,
            ..empty
        },
        4 => TileModel {
            top: Car,
            right: Train,
            bottom: Train,
            left: Car,
            blocked: true,
        },
        5 => TileModel {
            top: Car,
            right: Train,
            bottom: Car,
            left: Train,
            blocked: true,
        },
        6 => TileModel {
            top: Train,
            left: Train,
            ..empty
        },
        7 => TileModel {
            top: Train,
            right: Train,
            left: Train,
            ..empty
        },
        8 => TileModel {
            top: Train,
            bottom: Train,
            ..empty
        },
        9 => TileModel {
            top: Car,
            left: Car,
            ..empty
        },
        10 => TileModel {
            top: Car,
            right: Car,
            left: Car,
            ..empty
        },
        11 => TileModel {
            top: Car,
            bottom: Car,
            ..empty
        },
        12 => TileModel {
            top: Car,
            right: Train,
            bottom: Car,
            left: Train,
            ..empty
        },
        13 => TileModel {
            top: Train,
            bottom: Car,
            blocked: true,
            ..empty
        },
        14 => TileModel {
            top: Train,
            left: Car,
            blocked: true,
            ..empty
        },
        _ => empty,
    }
}
