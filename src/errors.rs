//! Error types with diagnostic codes using miette.
//!
//! Rendering itself is total and has no error type; the only thing that
//! can be invalid is a user-provided [`TileConfig`](crate::TileConfig).

use miette::Diagnostic;
use thiserror::Error;

/// Invalid geometry configuration.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be strictly positive, got {value}")]
    #[diagnostic(
        code(traku::config::non_positive),
        help("every TileConfig field is a pixel measure and must be > 0")
    )]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    #[diagnostic(code(traku::config::not_finite))]
    NotFinite { name: &'static str, value: f64 },
}
