//! Text rendering of a DP matrix with the optimal operations as arrows.
//!
//! ```text
//!        s   i   t
//!    0 → 1 → 2 → 3
//!    ↓ ↘ ↓ ⇘
//! i  1   1 → 1   2
//! ```
//! Values are right-aligned. Between two rows, `↓` sits under a cell reached by
//! a deletion and `↘`/`⇘` (substitution/match) points into the cell to the
//! lower right. A `→` between two cells marks an insertion into the right one.
use crate::nw::DpResult;
use crate::ops::Op;
use std::fmt::{self, Display};

/// Displays `res` for the sequences `a` (rows) and `b` (columns).
pub struct Render<'a, T> {
    pub a: &'a [T],
    pub b: &'a [T],
    pub res: &'a DpResult,
}

pub fn render<T: Display>(a: &[T], b: &[T], res: &DpResult) -> String {
    Render { a, b, res }.to_string()
}

impl<T: Display> Display for Render<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Render { a, b, res } = *self;
        let (dist, ops) = (&res.dist, &res.ops);
        let m = b.len();
        let w = dist
            .iter_rows()
            .flatten()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1)
            .max(2);
        let pad = |n: usize| " ".repeat(n);

        // Column headers, aligned with the last digit of each value.
        write!(f, "{}", pad(2 * w + 3))?;
        for c in b {
            write!(f, "{c}{}", pad(w + 1))?;
        }
        write!(f, "\n  ")?;

        // The first row only has insertions.
        for j in 0..=m {
            write!(f, "{:>w$}", dist[(0, j)])?;
            if j < m {
                write!(f, " →")?;
            }
        }

        for (i, c) in a.iter().enumerate().map(|(i, c)| (i + 1, c)) {
            write!(f, "\n{}", pad(w + 1))?;
            for j in 0..=m {
                let down = if ops[(i, j)].contains(Op::Del) { '↓' } else { ' ' };
                let diag = match ops.get(i, j + 1) {
                    Some(o) if o.contains(Op::Sub) => '↘',
                    Some(o) if o.contains(Op::Match) => '⇘',
                    _ => ' ',
                };
                write!(f, "{down} {diag}{}", pad(w - 1))?;
            }
            write!(f, "\n{c} ")?;
            for j in 0..=m {
                write!(f, "{:>w$}", dist[(i, j)])?;
                match ops.get(i, j + 1) {
                    Some(o) if o.contains(Op::Ins) => write!(f, " →")?,
                    _ => write!(f, "  ")?,
                }
            }
        }
        writeln!(f)
    }
}
