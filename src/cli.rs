use crate::{
    band::Band,
    cigar::{alignments, Cigar},
    nw::DpResult,
    stats::Stats,
    Cost, Result,
};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Strategy {
    /// Compute the full matrix.
    Full,
    /// Compute a fixed band of width `max-cost` around the diagonal.
    Banded,
    /// Shrink the band using the values computed so far.
    Adaptive,
}

impl Strategy {
    pub fn band(self, max_cost: Cost) -> Band {
        match self {
            Strategy::Full => Band::Full,
            Strategy::Banded => Band::Fixed(max_cost),
            Strategy::Adaptive => Band::Adaptive(max_cost),
        }
    }
}

#[derive(clap::Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[clap(next_help_heading = "Algorithm")]
pub struct Params {
    /// Largest distance the banded strategies compute exactly.
    ///
    /// Larger distances are reported as `max-cost + 1`.
    #[clap(short = 'k', long, default_value_t = 4, allow_negative_numbers = true)]
    pub max_cost: Cost,

    /// Strategy to run. Pass multiple times to run several; runs all by default.
    #[clap(short, long, value_enum)]
    pub strategy: Vec<Strategy>,
}

impl Params {
    pub fn bands(&self) -> Vec<Band> {
        let strategies = if self.strategy.is_empty() {
            vec![Strategy::Full, Strategy::Banded, Strategy::Adaptive]
        } else {
            self.strategy.clone()
        };
        strategies
            .into_iter()
            .map(|s| s.band(self.max_cost))
            .collect()
    }
}

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(author, about)]
pub struct Cli {
    /// The sequence along the rows.
    #[clap(default_value = "lysmata amboinensis")]
    pub a: String,

    /// The sequence along the columns. Should be at least as long as `A`.
    #[clap(default_value = "lysmmata amhbonensis")]
    pub b: String,

    #[clap(flatten)]
    pub params: Params,

    /// Print up to this many optimal alignments for each strategy.
    #[clap(short = 'n', long, default_value_t = 0)]
    pub alignments: usize,

    /// Do not draw the matrix.
    #[clap(long)]
    pub no_render: bool,

    /// Print the results as JSON.
    #[clap(long)]
    pub json: bool,
}

/// One strategy applied to the input.
#[derive(Debug, Serialize)]
pub struct Run {
    pub band: Band,
    /// `None` when the bound was exceeded.
    pub distance: Option<Cost>,
    pub alignments: Vec<String>,
    pub result: DpResult,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub a: String,
    pub b: String,
    pub params: &'a Params,
    pub runs: Vec<Run>,
    pub stats: Stats,
}

impl Cli {
    /// The input sequences, split into characters.
    ///
    /// The banded strategies need the shorter sequence on the rows, so the
    /// sequences are swapped when `a` is longer.
    pub fn sequences(&self) -> (Vec<char>, Vec<char>) {
        let a: Vec<char> = self.a.chars().collect();
        let b: Vec<char> = self.b.chars().collect();
        if a.len() > b.len() {
            warn!(
                "A is longer than B ({} > {}); swapping them",
                a.len(),
                b.len()
            );
            (b, a)
        } else {
            (a, b)
        }
    }

    /// Run all configured strategies.
    pub fn run(&self, a: &[char], b: &[char]) -> Result<Vec<Run>> {
        self.params
            .bands()
            .into_iter()
            .map(|band| {
                let result = band.compute(a, b)?;
                info!(
                    "{band}: distance {} using {} cells",
                    result.distance(),
                    result.stats.cells
                );
                let alignments = alignments(&result, self.alignments)
                    .iter()
                    .map(Cigar::to_string)
                    .collect();
                Ok(Run {
                    band,
                    distance: result.exact_distance(),
                    alignments,
                    result,
                })
            })
            .collect()
    }

    pub fn report<'a>(&'a self, a: &[char], b: &[char], runs: Vec<Run>) -> Report<'a> {
        let mut stats = Stats::default();
        for run in &runs {
            stats += run.result.stats;
        }
        Report {
            a: a.iter().collect(),
            b: b.iter().collect(),
            params: &self.params,
            runs,
            stats,
        }
    }
}
