use crate::Cost;
use thiserror::Error;

/// The largest accepted `max_cost`.
///
/// Values computed next to the band start at the sentinel `max_cost + 1` and
/// grow by at most the sequence lengths, so this leaves room to never overflow.
pub const MAX_BOUND: Cost = Cost::MAX / 2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("max_cost must be in 0..={MAX_BOUND}, got {max_cost}")]
    InvalidBound { max_cost: Cost },

    #[error(
        "banded alignment needs the first sequence to be at most as long as the second, got lengths {len_a} and {len_b}"
    )]
    InputOrder { len_a: usize, len_b: usize },

    #[error("min_similarity must be in [0, 1], got {min_similarity}")]
    InvalidSimilarity { min_similarity: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check that `min_similarity` is a similarity. Rejects NaN.
pub fn check_similarity(min_similarity: f64) -> Result<()> {
    if (0.0..=1.0).contains(&min_similarity) {
        Ok(())
    } else {
        Err(Error::InvalidSimilarity { min_similarity })
    }
}

/// Check that `max_cost` can be used as a band bound.
pub fn check_bound(max_cost: Cost) -> Result<()> {
    if (0..=MAX_BOUND).contains(&max_cost) {
        Ok(())
    } else {
        Err(Error::InvalidBound { max_cost })
    }
}
