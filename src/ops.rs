use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// An edit operation, seen as the last step of a path into a cell.
///
/// `Del` moves down (consumes a symbol of `a`), `Ins` moves right (consumes a
/// symbol of `b`), `Match` and `Sub` move diagonally.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Op {
    Match,
    Del,
    Ins,
    Sub,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Match, Op::Del, Op::Ins, Op::Sub];

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// The `(di, dj)` step this operation takes.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Op::Match | Op::Sub => (1, 1),
            Op::Del => (1, 0),
            Op::Ins => (0, 1),
        }
    }

    pub fn cost(self) -> crate::Cost {
        match self {
            Op::Match => 0,
            Op::Del | Op::Ins | Op::Sub => 1,
        }
    }

    /// The extended SAM cigar character.
    pub fn to_char(self) -> char {
        match self {
            Op::Match => '=',
            Op::Sub => 'X',
            Op::Ins => 'I',
            Op::Del => 'D',
        }
    }

    /// The arrow drawn into a cell for this operation.
    pub fn arrow(self) -> char {
        match self {
            Op::Match => '⇘',
            Op::Sub => '↘',
            Op::Ins => '→',
            Op::Del => '↓',
        }
    }
}

/// The set of operations reaching the minimum of a cell, as a 4-bit set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Op>", into = "Vec<Op>")]
pub struct Ops(u8);

impl Ops {
    pub const EMPTY: Ops = Ops(0);

    pub fn contains(self, op: Op) -> bool {
        self.0 & op.bit() != 0
    }

    pub fn insert(&mut self, op: Op) {
        self.0 |= op.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Op> {
        Op::ALL.into_iter().filter(move |&op| self.contains(op))
    }
}

impl From<Op> for Ops {
    fn from(op: Op) -> Self {
        Ops(op.bit())
    }
}

impl BitOr<Op> for Ops {
    type Output = Ops;

    fn bitor(mut self, op: Op) -> Ops {
        self.insert(op);
        self
    }
}

impl BitOrAssign<Op> for Ops {
    fn bitor_assign(&mut self, op: Op) {
        self.insert(op);
    }
}

impl FromIterator<Op> for Ops {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        iter.into_iter().fold(Ops::EMPTY, |s, op| s | op)
    }
}

impl From<Vec<Op>> for Ops {
    fn from(ops: Vec<Op>) -> Self {
        ops.into_iter().collect()
    }
}

impl From<Ops> for Vec<Op> {
    fn from(ops: Ops) -> Self {
        ops.iter().collect()
    }
}

impl fmt::Debug for Ops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for Ops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in self.iter() {
            write!(f, "{}", op.arrow())?;
        }
        Ok(())
    }
}
