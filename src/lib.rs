//! Levenshtein distance with a traceable alignment.
//!
//! The core is a single Needleman-Wunsch style DP (`nw`) over the full
//! `(n+1) x (m+1)` matrix, parameterized by a [`Band`]:
//! - [`Band::Full`] computes every cell.
//! - [`Band::Fixed`] only computes `|i - j| <= max_cost`, and stops as soon as a
//!   whole row exceeds `max_cost`.
//! - [`Band::Adaptive`] starts from a narrow band and shrinks it after every row
//!   using the gap-cost to the end as a lower bound.
//!
//! Each cell stores the set of all [`Op`]s that reach its minimal value, so
//! that [`cigar::alignments`] can enumerate every optimal alignment and
//! [`render::render`] can draw the arrows.
//!
//! A banded run that proves the distance is larger than `max_cost` stores the
//! sentinel `max_cost + 1` in the final cell.

pub mod band;
pub mod cigar;
#[cfg(feature = "cli")]
pub mod cli;
pub mod distance;
pub mod error;
pub mod grid;
pub mod nw;
pub mod ops;
pub mod render;
pub mod stats;


/// The type used for distances and bounds.
pub type Cost = i32;

pub use band::Band;
pub use error::{Error, Result};
pub use grid::Grid;
pub use nw::{compute_adaptive_banded, compute_banded, compute_full, DpResult, Outcome};
pub use ops::{Op, Ops};
pub use stats::Stats;

pub mod prelude {
    pub use crate::band::{Band, JRange};
    pub use crate::cigar::{alignments, Cigar, CigarElem};
    pub use crate::distance::{bounded_distance, bounded_similarity, distance, similarity};
    pub use crate::error::{Error, Result};
    pub use crate::grid::Grid;
    pub use crate::nw::*;
    pub use crate::ops::{Op, Ops};
    pub use crate::render::render;
    pub use crate::stats::Stats;
    pub use crate::Cost;
}
