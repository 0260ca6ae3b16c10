//! Tile model: four edges, a road type per edge, and a blocked flag.
//!
//! Everything here is a plain `Copy` value. Transforms return new tiles
//! rather than mutating, and `Eq`/`Hash` are derived so callers can memoize
//! rendered paths keyed by tile value.

/// What a tile edge carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoadType {
    /// Nothing on this edge.
    #[default]
    None,
    /// A car road: a band of two stroked edge lines with a dashed lane line.
    Car,
    /// A train track: a single rail line with tie marks.
    Train,
}

/// One of the four tile edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoadSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl RoadSide {
    /// All sides, in draw order.
    pub const ALL: [RoadSide; 4] = [
        RoadSide::Top,
        RoadSide::Right,
        RoadSide::Bottom,
        RoadSide::Left,
    ];

    /// The axis a road on this side is drawn along.
    pub fn axis(self) -> RoadAxis {
        match self {
            RoadSide::Left | RoadSide::Right => RoadAxis::LeftRight,
            RoadSide::Top | RoadSide::Bottom => RoadAxis::TopBottom,
        }
    }
}

/// Drawing axis for a road or a coordinate frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoadAxis {
    /// Canonical space maps straight onto tile space.
    LeftRight,
    /// Canonical x and y are swapped.
    TopBottom,
}

/// A tile: the road type on each edge plus a blocked flag.
///
/// Blocked tiles keep their roads but the rendering cuts every connection
/// at the center square and covers it with a marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileModel {
    pub top: RoadType,
    pub right: RoadType,
    pub bottom: RoadType,
    pub left: RoadType,
    pub blocked: bool,
}

impl TileModel {
    /// The all-empty tile: no roads, not blocked.
    pub const EMPTY: TileModel = TileModel {
        top: RoadType::None,
        right: RoadType::None,
        bottom: RoadType::None,
        left: RoadType::None,
        blocked: false,
    };

    pub fn new(
        top: RoadType,
        right: RoadType,
        bottom: RoadType,
        left: RoadType,
        blocked: bool,
    ) -> Self {
        TileModel {
            top,
            right,
            bottom,
            left,
            blocked,
        }
    }

    /// The road type on one side.
    pub fn road(&self, side: RoadSide) -> RoadType {
        match side {
            RoadSide::Top => self.top,
            RoadSide::Right => self.right,
            RoadSide::Bottom => self.bottom,
            RoadSide::Left => self.left,
        }
    }

    /// All four edges, in [`RoadSide::ALL`] order.
    pub fn roads(&self) -> [RoadType; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Rotate the tile a quarter turn. Clockwise moves the top edge onto
    /// the right side. Four turns in either direction are the identity.
    pub fn rotate(&self, counterclockwise: bool) -> TileModel {
        let (top, right, bottom, left) = if counterclockwise {
            (self.right, self.bottom, self.left, self.top)
        } else {
            (self.left, self.top, self.right, self.bottom)
        };
        TileModel {
            top,
            right,
            bottom,
            left,
            blocked: self.blocked,
        }
    }

    /// Mirror the tile: `LeftRight` swaps the left and right edges,
    /// `TopBottom` swaps top and bottom. Applying twice is the identity.
    pub fn mirror(&self, axis: RoadAxis) -> TileModel {
        let mut out = *self;
        match axis {
            RoadAxis::LeftRight => {
                out.left = self.right;
                out.right = self.left;
            }
            RoadAxis::TopBottom => {
                out.top = self.bottom;
                out.bottom = self.top;
            }
        }
        out
    }

    /// True if any edge carries a car road.
    pub fn any_roads_are_cars(&self) -> bool {
        self.roads().into_iter().any(|r| r == RoadType::Car)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROAD_TYPES: [RoadType; 3] = [RoadType::None, RoadType::Car, RoadType::Train];

    /// Every possible tile value (3^4 edge combinations, blocked or not).
    fn all_tiles() -> Vec<TileModel> {
        let mut tiles = Vec::with_capacity(162);
        for top in ROAD_TYPES {
            for right in ROAD_TYPES {
                for bottom in ROAD_TYPES {
                    for left in ROAD_TYPES {
                        for blocked in [false, true] {
                            tiles.push(TileModel::new(top, right, bottom, left, blocked));
                        }
                    }
                }
            }
        }
        tiles
    }

    #[test]
    fn default_is_the_empty_tile() {
        assert_eq!(TileModel::default(), TileModel::EMPTY);
        assert!(!TileModel::EMPTY.any_roads_are_cars());
    }

    #[test]
    fn road_matches_roads_order() {
        for tile in all_tiles() {
            let by_side: Vec<_> = RoadSide::ALL.iter().map(|&s| tile.road(s)).collect();
            assert_eq!(by_side, tile.roads());
        }
    }

    #[test]
    fn rotate_clockwise_moves_top_to_right() {
        let tile = TileModel::new(
            RoadType::Car,
            RoadType::None,
            RoadType::Train,
            RoadType::None,
            false,
        );
        let turned = tile.rotate(false);
        assert_eq!(turned.right, RoadType::Car);
        assert_eq!(turned.bottom, RoadType::None);
        assert_eq!(turned.left, RoadType::Train);
        assert_eq!(turned.top, RoadType::None);
    }

    #[test]
    fn four_rotations_are_identity() {
        for tile in all_tiles() {
            for ccw in [false, true] {
                let mut turned = tile;
                for _ in 0..4 {
                    turned = turned.rotate(ccw);
                }
                assert_eq!(turned, tile);
            }
        }
    }

    #[test]
    fn rotate_then_counter_rotate_is_identity() {
        for tile in all_tiles() {
            assert_eq!(tile.rotate(false).rotate(true), tile);
            assert_eq!(tile.rotate(true).rotate(false), tile);
        }
    }

    #[test]
    fn rotation_preserves_blocked() {
        let tile = TileModel {
            blocked: true,
            ..TileModel::EMPTY
        };
        assert!(tile.rotate(false).blocked);
        assert!(tile.rotate(true).blocked);
    }

    #[test]
    fn mirror_swaps_the_named_edges() {
        let tile = TileModel::new(
            RoadType::Car,
            RoadType::Train,
            RoadType::None,
            RoadType::Car,
            false,
        );

        let lr = tile.mirror(RoadAxis::LeftRight);
        assert_eq!(lr.left, tile.right);
        assert_eq!(lr.right, tile.left);
        assert_eq!(lr.top, tile.top);
        assert_eq!(lr.bottom, tile.bottom);

        let tb = tile.mirror(RoadAxis::TopBottom);
        assert_eq!(tb.top, tile.bottom);
        assert_eq!(tb.bottom, tile.top);
        assert_eq!(tb.left, tile.left);
        assert_eq!(tb.right, tile.right);
    }

    #[test]
    fn mirror_is_an_involution() {
        for tile in all_tiles() {
            for axis in [RoadAxis::LeftRight, RoadAxis::TopBottom] {
                assert_eq!(tile.mirror(axis).mirror(axis), tile);
            }
        }
    }

    #[test]
    fn any_roads_are_cars_sees_every_edge() {
        for side in RoadSide::ALL {
            let mut tile = TileModel::EMPTY;
            match side {
                RoadSide::Top => tile.top = RoadType::Car,
                RoadSide::Right => tile.right = RoadType::Car,
                RoadSide::Bottom => tile.bottom = RoadType::Car,
                RoadSide::Left => tile.left = RoadType::Car,
            }
            assert!(tile.any_roads_are_cars());
        }

        let trains_only = TileModel::new(
            RoadType::Train,
            RoadType::Train,
            RoadType::Train,
            RoadType::Train,
            false,
        );
        assert!(!trains_only.any_roads_are_cars());
    }

    #[test]
    fn side_axes() {
        assert_eq!(RoadSide::Left.axis(), RoadAxis::LeftRight);
        assert_eq!(RoadSide::Right.axis(), RoadAxis::LeftRight);
        assert_eq!(RoadSide::Top.axis(), RoadAxis::TopBottom);
        assert_eq!(RoadSide::Bottom.axis(), RoadAxis::TopBottom);
    }
}
