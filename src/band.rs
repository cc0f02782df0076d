//! The band policy: which cells of each row are computed.
use crate::Cost;
use log::trace;
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};
use std::fmt;

/// Inclusive range of columns to compute in a row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JRange(pub usize, pub usize);

impl JRange {
    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }
    pub fn len(&self) -> usize {
        (self.1 + 1).saturating_sub(self.0)
    }
}

/// Which part of the DP matrix to compute.
///
/// The banded variants assume `a.len() <= b.len()`, with `a` indexing the rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// Compute the entire rectangle.
    #[default]
    Full,
    /// Compute cells with `|i - j| <= max_cost`.
    Fixed(Cost),
    /// Compute cells whose value plus the gap cost to the end is at most
    /// `max_cost`, as far as the previous row shows.
    Adaptive(Cost),
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Full => write!(f, "Full"),
            Band::Fixed(k) => write!(f, "Banded (max_cost = {k})"),
            Band::Adaptive(k) => write!(f, "Adaptive banded (max_cost = {k})"),
        }
    }
}

impl Band {
    pub fn max_cost(&self) -> Option<Cost> {
        match *self {
            Band::Full => None,
            Band::Fixed(k) | Band::Adaptive(k) => Some(k),
        }
    }

    /// The range for the first row, before anything is computed.
    pub(crate) fn first_range(&self, n: usize, m: usize) -> JRange {
        match *self {
            Band::Full => JRange(1, m),
            Band::Fixed(_) => self.row_range(1, m, JRange(1, m)),
            Band::Adaptive(k) => {
                let d = m as Cost - n as Cost;
                JRange(1, min(m, ((k + d) / 2 + 1) as usize))
            }
        }
    }

    /// The range to compute in row `i`, given the range carried over from the
    /// previous row.
    #[inline]
    pub(crate) fn row_range(&self, i: usize, m: usize, carried: JRange) -> JRange {
        match *self {
            Band::Full | Band::Adaptive(_) => carried,
            Band::Fixed(k) => {
                let k = k as usize;
                JRange(max(1, i.saturating_sub(k)), min(m, i + k))
            }
        }
    }

    /// For the adaptive band, shrink `range` using the values of row `i`.
    ///
    /// A cell can only be on a path of cost at most `k` when its value plus the
    /// gap `|(m - j) - (n - i)|` to the end is at most `k`. The end of the
    /// range moves left to the last such cell and then allows one step of
    /// growth; the start moves right to the first such cell.
    /// Other bands return `range` unchanged.
    pub(crate) fn shrink(
        &self,
        i: usize,
        n: usize,
        m: usize,
        row: &[Cost],
        range: JRange,
    ) -> JRange {
        let Band::Adaptive(k) = *self else {
            return range;
        };
        let d = m as Cost - n as Cost;
        let gap = |j: usize| (j as Cost - i as Cost - d).abs();

        let JRange(mut start, mut end) = range;
        while end > 0 && row[end] + gap(end) > k {
            end -= 1;
        }
        end = min(m, end + 1);
        while start <= end && gap(start) + row[start] > k {
            start += 1;
        }
        trace!("row {i}: band {:?} -> {start}..={end}", range);
        JRange(start, end)
    }
}
