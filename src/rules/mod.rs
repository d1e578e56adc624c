//! Round and game rules.
//!
//! - Category resolution: which side wins a chosen category and for how many
//!   points
//! - Final result from the closing score

pub mod result;
pub mod scoring;

pub use result::GameResult;
pub use scoring::{resolve_category, Marker, PointTable, RoundResolution};
