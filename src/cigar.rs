//! Reconstruct optimal alignments by walking the operation grid back from the
//! final cell.
use crate::nw::DpResult;
use crate::ops::Op;
use crate::Cost;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CigarElem {
    pub op: Op,
    pub cnt: usize,
}

/// A run-length encoded alignment from `(0, 0)` to `(n, m)`.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cigar {
    pub ops: Vec<CigarElem>,
}

impl Cigar {
    pub fn push(&mut self, op: Op) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == op {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(CigarElem { op, cnt: 1 });
    }

    pub fn cost(&self) -> Cost {
        self.ops
            .iter()
            .map(|elem| elem.op.cost() * elem.cnt as Cost)
            .sum()
    }

    /// Iterate over the individual operations.
    pub fn iter_ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.ops
            .iter()
            .flat_map(|elem| std::iter::repeat(elem.op).take(elem.cnt))
    }

    /// Check that this cigar is a valid alignment of `a` and `b`: every match
    /// is an equal pair of symbols, every substitution an unequal one, and all
    /// of both sequences is consumed.
    pub fn verify<T: Eq>(&self, a: &[T], b: &[T]) -> bool {
        let (mut i, mut j) = (0, 0);
        for op in self.iter_ops() {
            let (di, dj) = op.delta();
            if i + di > a.len() || j + dj > b.len() {
                return false;
            }
            let ok = match op {
                Op::Match => a[i] == b[j],
                Op::Sub => a[i] != b[j],
                Op::Ins | Op::Del => true,
            };
            if !ok {
                return false;
            }
            i += di;
            j += dj;
        }
        (i, j) == (a.len(), b.len())
    }
}

impl FromIterator<Op> for Cigar {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        let mut cigar = Cigar::default();
        for op in iter {
            cigar.push(op);
        }
        cigar
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.ops
                .iter()
                .map(|elem| format!("{}{}", elem.cnt, elem.op.to_char()))
                .join("")
        )
    }
}

/// Enumerate up to `limit` distinct optimal alignments.
///
/// Every cell with more than one operation is a branch point. Alignments are
/// produced depth-first, preferring matches, then deletions, insertions and
/// substitutions. Returns nothing when the result exceeded its bound.
pub fn alignments(res: &DpResult, limit: usize) -> Vec<Cigar> {
    let mut out = vec![];
    if res.exceeds_bound() || limit == 0 {
        return out;
    }
    let ops = &res.ops;
    let (n, m) = (ops.rows() - 1, ops.cols() - 1);

    // (i, j, length of the path before this step, step into (i, j))
    let mut stack: Vec<(usize, usize, usize, Option<Op>)> = vec![(n, m, 0, None)];
    // Operations from (n, m) backwards.
    let mut path = vec![];
    while let Some((i, j, len, op)) = stack.pop() {
        path.truncate(len);
        path.extend(op);
        if (i, j) == (0, 0) {
            out.push(path.iter().rev().copied().collect());
            if out.len() == limit {
                break;
            }
            continue;
        }
        let depth = path.len();
        // Reversed, so that the first op is explored first.
        for op in ops[(i, j)].iter().collect_vec().into_iter().rev() {
            let (di, dj) = op.delta();
            stack.push((i - di, j - dj, depth, Some(op)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nw::{compute_banded, compute_full};

    #[test]
    fn push_merges_runs() {
        let c: Cigar = [Op::Match, Op::Match, Op::Sub, Op::Ins, Op::Ins, Op::Match]
            .into_iter()
            .collect();
        assert_eq!(c.to_string(), "2=1X2I1=");
        assert_eq!(c.cost(), 3);
        assert_eq!(c.iter_ops().count(), 6);
    }

    #[test]
    fn verify() {
        let c: Cigar = [Op::Match, Op::Sub, Op::Del].into_iter().collect();
        assert!(c.verify(b"abc", b"ax"));
        assert!(!c.verify(b"abc", b"ab"));
        assert!(!c.verify(b"ab", b"ax"));
    }

    #[test]
    fn kitten_sitting() {
        let (a, b) = (b"kitten", b"sitting");
        let res = compute_full(a, b);
        let all = alignments(&res, usize::MAX);
        assert!(!all.is_empty());
        for c in &all {
            assert_eq!(c.cost(), 3, "{c}");
            assert!(c.verify(a, b), "{c}");
        }
        assert!(all.iter().any(|c| c.to_string() == "1X3=1X1=1I"));
        assert_eq!(alignments(&res, 1).len(), 1);
    }

    #[test]
    fn all_ties_are_enumerated() {
        // "ab" -> "ba": 2 substitutions, or keep one symbol and move the other.
        let res = compute_full(b"ab", b"ba");
        let all = alignments(&res, usize::MAX);
        let strings = all.iter().map(|c| c.to_string()).sorted().collect_vec();
        assert_eq!(strings, vec!["1D1=1I", "1I1=1D", "2X"]);
    }

    #[test]
    fn empty() {
        let res = compute_full::<u8>(b"", b"");
        assert_eq!(alignments(&res, 10), vec![Cigar::default()]);
        let res = compute_full(b"", b"abc");
        assert_eq!(
            alignments(&res, 10)
                .iter()
                .map(|c| c.to_string())
                .collect_vec(),
            vec!["3I"]
        );
    }

    #[test]
    fn exceeded_bound_has_no_alignments() {
        let res = compute_banded(b"abc", b"xyz", 1).unwrap();
        assert!(alignments(&res, 10).is_empty());
    }
}
