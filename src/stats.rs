use derive_more::AddAssign;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Counters for one or more DP runs.
#[derive(Default, Clone, Copy, AddAssign, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// DP cells evaluated by the recurrence. Row 0 and column 0 are not counted.
    pub cells: usize,
    /// Number of runs that stopped because the bound was exceeded.
    pub early_exits: usize,
    /// Number of runs added together.
    pub samples: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            samples: 1,
            ..Default::default()
        }
    }

    fn format_raw<T: Display>(width: usize, title: &str, val: T) -> (String, String) {
        (format!("{title:>width$}"), format!("{val:>width$}"))
    }

    /// Header and value columns, for table output.
    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        [
            Self::format_raw(8, "samples", self.samples),
            Self::format_raw(10, "cells", self.cells),
            Self::format_raw(6, "exits", self.early_exits),
        ]
        .into_iter()
        .unzip()
    }
}
