//! Needleman-Wunsch DP for unit-cost edit distance, restricted to a [`Band`].
//!
//! `a` indexes the rows (`i`), `b` the columns (`j`). All three strategies run
//! the same row-by-row loop and only differ in the columns they visit and in
//! when they give up.
use crate::band::Band;
use crate::error::{check_bound, Error, Result};
use crate::grid::Grid;
use crate::ops::{Op, Ops};
use crate::stats::Stats;
use crate::Cost;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The final cell holds the exact distance.
    Completed,
    /// The distance is larger than `max_cost`. The final cell holds
    /// `max_cost + 1` and computation stopped after `row`.
    ExceedsBound { row: usize },
}

/// The DP matrix, the optimal operations into every cell, and run statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpResult {
    pub band: Band,
    pub dist: Grid<Cost>,
    pub ops: Grid<Ops>,
    pub outcome: Outcome,
    pub stats: Stats,
}

impl DpResult {
    /// The value of the final cell: the distance, or `max_cost + 1` when the
    /// bound was exceeded.
    pub fn distance(&self) -> Cost {
        *self.dist.last()
    }

    pub fn exceeds_bound(&self) -> bool {
        matches!(self.outcome, Outcome::ExceedsBound { .. })
    }

    /// The distance, when it was computed exactly.
    pub fn exact_distance(&self) -> Option<Cost> {
        (!self.exceeds_bound()).then(|| self.distance())
    }
}

/// Distance matrix and optimal operations for the entire rectangle.
pub fn compute_full<T: Eq>(a: &[T], b: &[T]) -> DpResult {
    run(a, b, Band::Full)
}

/// Only compute cells with `|i - j| <= max_cost`.
///
/// Requires `a.len() <= b.len()`.
pub fn compute_banded<T: Eq>(a: &[T], b: &[T], max_cost: Cost) -> Result<DpResult> {
    Band::Fixed(max_cost).compute(a, b)
}

/// Like [`compute_banded`], but shrink the band after every row based on the
/// values computed so far.
///
/// Requires `a.len() <= b.len()`.
pub fn compute_adaptive_banded<T: Eq>(a: &[T], b: &[T], max_cost: Cost) -> Result<DpResult> {
    Band::Adaptive(max_cost).compute(a, b)
}

impl Band {
    /// Run the DP for this band after validating the inputs.
    pub fn compute<T: Eq>(self, a: &[T], b: &[T]) -> Result<DpResult> {
        if let Some(k) = self.max_cost() {
            check_bound(k)?;
            if a.len() > b.len() {
                return Err(Error::InputOrder {
                    len_a: a.len(),
                    len_b: b.len(),
                });
            }
        }
        Ok(run(a, b, self))
    }
}

/// Compute cell `(i, j)` from its three parents and record all optimal ops.
#[inline]
fn fill_cell<T: Eq>(
    a: &[T],
    b: &[T],
    dist: &mut Grid<Cost>,
    ops: &mut Grid<Ops>,
    i: usize,
    j: usize,
) -> Cost {
    let is_match = a[i - 1] == b[j - 1];
    let diag = dist[(i - 1, j - 1)] + if is_match { 0 } else { 1 };
    let del = dist[(i - 1, j)] + 1;
    let ins = dist[(i, j - 1)] + 1;
    let d = min(diag, min(del, ins));

    let mut o = Ops::EMPTY;
    if diag == d {
        o |= if is_match { Op::Match } else { Op::Sub };
    }
    if del == d {
        o |= Op::Del;
    }
    if ins == d {
        o |= Op::Ins;
    }
    dist[(i, j)] = d;
    ops[(i, j)] = o;
    d
}

fn run<T: Eq>(a: &[T], b: &[T], band: Band) -> DpResult {
    let (n, m) = (a.len(), b.len());
    let bound = band.max_cost();
    // Cells that are never computed keep this value. For a banded run this
    // makes every cell next to the band read as `max_cost + 1`.
    let sentinel = bound.map_or(0, |k| k + 1);

    let mut dist = Grid::new(n + 1, m + 1, sentinel);
    let mut ops = Grid::new(n + 1, m + 1, Ops::EMPTY);
    for j in 0..=m {
        dist[(0, j)] = j as Cost;
        if j > 0 {
            ops[(0, j)] = Op::Ins.into();
        }
    }
    for i in 1..=n {
        dist[(i, 0)] = i as Cost;
        ops[(i, 0)] = Op::Del.into();
    }

    let mut stats = Stats::new();
    let mut outcome = Outcome::Completed;
    let mut range = band.first_range(n, m);

    for i in 1..=n {
        range = band.row_range(i, m, range);
        trace!("row {i}: computing {range:?}");
        debug_assert!(range.is_empty() || (range.0 >= 1 && range.1 <= m));

        // At least `m - n` indels are needed in any case.
        let mut row_min = max(i, m.saturating_sub(n)) as Cost;
        for j in range.0..=range.1 {
            row_min = min(row_min, fill_cell(a, b, &mut dist, &mut ops, i, j));
        }
        stats.cells += range.len();

        let Some(k) = bound else {
            continue;
        };
        if row_min > k {
            debug!("{band}: row {i} has minimum {row_min} > {k}; stopping");
            outcome = Outcome::ExceedsBound { row: i };
            break;
        }
        range = band.shrink(i, n, m, dist.row(i), range);
        if range.is_empty() {
            debug!("{band}: band is empty after row {i}; stopping");
            outcome = Outcome::ExceedsBound { row: i };
            break;
        }
    }

    if let Some(k) = bound {
        if outcome != Outcome::Completed {
            stats.early_exits += 1;
        }
        // Also covers a final cell outside the band, e.g. when m - n > k.
        if outcome != Outcome::Completed || *dist.last() > k {
            *dist.last_mut() = k + 1;
            *ops.last_mut() = Ops::EMPTY;
            if outcome == Outcome::Completed {
                outcome = Outcome::ExceedsBound { row: n };
            }
        }
    }

    debug!(
        "{band}: n={n} m={m} distance={} cells={} {outcome:?}",
        dist.last(),
        stats.cells
    );
    DpResult {
        band,
        dist,
        ops,
        outcome,
        stats,
    }
}
