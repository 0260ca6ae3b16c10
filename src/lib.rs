//! Deterministic vector paths for square road-and-rail game tiles.
//!
//! A [`TileModel`] says which of a tile's four edges carry a car road, a
//! train road, or nothing, and whether the center is blocked. [`render`]
//! turns one model into an ordered [`Path`] of drawing ops (lines, arcs,
//! fills) sized by a [`TileConfig`]. The same tile and config always
//! produce the same ops, so output can be cached or snapshot tested.
//!
//! ```
//! use traku::{archetype, render, TileConfig};
//!
//! let tile = archetype(6); // rails on top and left, curving into each other
//! let path = render(&tile, &TileConfig::new(180.0, 32.0));
//! assert!(path.ops().len() > 4); // outline plus the two rails
//! ```

pub mod catalog;
pub mod config;
pub mod errors;
pub mod path;
pub mod render;
pub mod tile;

pub(crate) mod log;

pub use catalog::{ARCHETYPE_COUNT, archetype};
pub use config::TileConfig;
pub use errors::ConfigError;
pub use path::{Color, Path, PathOp, PathSink};
pub use render::{render, render_into};
pub use tile::{RoadAxis, RoadSide, RoadType, TileModel};

/// The vector math crate all geometry is expressed in. Re-exported so
/// callers can name [`glam::DVec2`] without adding their own dependency.
pub use glam;
