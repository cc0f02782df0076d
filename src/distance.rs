//! Distance-only computation in linear memory.
//!
//! These functions do not build the DP matrix. They strip the common prefix and
//! suffix first, and accept the sequences in either order.
//!
//! The similarity of two sequences is `1 - distance / max(len(a), len(b))`,
//! and `1` when both are empty.
use crate::error::{check_bound, check_similarity, Result, MAX_BOUND};
use crate::Cost;
use log::debug;
use std::cmp::{max, min};

/// Strip the common prefix and suffix.
fn trim<'a, T: Eq>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    let p = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[p..], &b[p..]);
    let s = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    (&a[..a.len() - s], &b[..b.len() - s])
}

/// Trim and put the shorter sequence first.
fn prepare<'a, T: Eq>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    let (a, b) = trim(a, b);
    if a.len() > b.len() {
        (b, a)
    } else {
        (a, b)
    }
}

/// The edit distance between `a` and `b`.
pub fn distance<T: Eq>(a: &[T], b: &[T]) -> Cost {
    let (a, b) = prepare(a, b);
    // One column of the DP, indexed by the shorter sequence.
    let mut col: Vec<Cost> = (0..=a.len() as Cost).collect();
    for (j, cb) in b.iter().enumerate() {
        let mut diag = col[0];
        col[0] = j as Cost + 1;
        for (i, ca) in a.iter().enumerate() {
            let up = col[i + 1];
            col[i + 1] = min(min(up, col[i]) + 1, diag + (ca != cb) as Cost);
            diag = up;
        }
    }
    col[a.len()]
}

/// The edit distance between `a` and `b` when it is at most `max_cost`, and
/// `max_cost + 1` otherwise.
///
/// Only cells with `|i - j| <= max_cost` are computed, and the computation
/// stops as soon as a complete row exceeds `max_cost`.
pub fn bounded_distance<T: Eq>(a: &[T], b: &[T], max_cost: Cost) -> Result<Cost> {
    check_bound(max_cost)?;
    let (a, b) = prepare(a, b);
    let (n, m) = (a.len(), b.len());
    let too_far = max_cost + 1;

    if (m - n) as Cost > max_cost {
        return Ok(too_far);
    }
    if n == 0 {
        return Ok(m as Cost);
    }

    // The distance is at most `m`, so a wider band never helps.
    let k = min(max_cost, m as Cost);
    let ku = k as usize;
    let mut row: Vec<Cost> = (0..=m as Cost).collect();
    for i in 1..=n {
        let start = max(1, i.saturating_sub(ku));
        let end = min(m, i + ku);

        // Left of the band is out of range for this row.
        let mut diag = row[start - 1];
        row[start - 1] = if start == 1 { i as Cost } else { k + 1 };

        let mut row_min = Cost::MAX;
        for j in start..=end {
            let up = row[j];
            let v = min(min(up, row[j - 1]) + 1, diag + (a[i - 1] != b[j - 1]) as Cost);
            diag = up;
            row[j] = v;
            row_min = min(row_min, v);
        }
        // Right of the band is out of range for the next row.
        if end < m {
            row[end + 1] = k + 1;
        }
        if row_min > k {
            debug!("bounded_distance: row {i} has minimum {row_min} > {k}; stopping");
            return Ok(too_far);
        }
    }
    Ok(if row[m] > max_cost { too_far } else { row[m] })
}

fn ratio(dist: Cost, max_len: usize) -> f64 {
    if max_len == 0 {
        return 1.0;
    }
    (1.0 - dist as f64 / max_len as f64).max(0.0)
}

/// The largest distance whose similarity is still at least `min_similarity`.
fn similarity_to_max_edits(min_similarity: f64, max_len: usize) -> Cost {
    let max_len = min(max_len, MAX_BOUND as usize);
    let mut edits = ((1.0 - min_similarity) * max_len as f64) as Cost;
    // `1 - s` is not exact, e.g. for s = 0.9.
    if (edits as usize) < max_len && ratio(edits + 1, max_len) >= min_similarity {
        edits += 1;
    }
    edits
}

/// The normalized similarity of `a` and `b`, in `[0, 1]`.
pub fn similarity<T: Eq>(a: &[T], b: &[T]) -> f64 {
    ratio(distance(a, b), max(a.len(), b.len()))
}

/// The similarity of `a` and `b` when it is at least `min_similarity`.
///
/// Otherwise returns the similarity of one edit more than allowed, which is
/// below `min_similarity`. Only the band of the corresponding edit bound is
/// computed.
pub fn bounded_similarity<T: Eq>(a: &[T], b: &[T], min_similarity: f64) -> Result<f64> {
    check_similarity(min_similarity)?;
    let max_len = max(a.len(), b.len());
    if max_len == 0 {
        return Ok(1.0);
    }
    let max_edits = similarity_to_max_edits(min_similarity, max_len);
    let d = bounded_distance(a, b, max_edits)?;
    if d > max_edits {
        debug!("bounded_similarity: more than {max_edits} edits; below {min_similarity}");
    }
    Ok(ratio(d, max_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn trims_prefix_and_suffix() {
        assert_eq!(trim(b"abcxdef", b"abcydef"), (&b"x"[..], &b"y"[..]));
        assert_eq!(trim(b"abc", b"abcd"), (&b""[..], &b"d"[..]));
        assert_eq!(trim(b"aaa", b"aa"), (&b"a"[..], &b""[..]));
    }

    #[test]
    fn distances() {
        assert_eq!(distance(b"kitten", b"sitting"), 3);
        assert_eq!(distance(b"sitting", b"kitten"), 3);
        assert_eq!(distance(b"", b"abc"), 3);
        assert_eq!(distance(b"abc", b""), 3);
        assert_eq!(distance(b"abc", b"abc"), 0);
        assert_eq!(distance(b"ab", b"ba"), 2);
    }

    #[test]
    fn bounded() {
        assert_eq!(bounded_distance(b"kitten", b"sitting", 3), Ok(3));
        assert_eq!(bounded_distance(b"kitten", b"sitting", 2), Ok(3));
        assert_eq!(bounded_distance(b"kitten", b"sitting", 1), Ok(2));
        assert_eq!(bounded_distance(b"sitting", b"kitten", 10), Ok(3));
        assert_eq!(bounded_distance(b"abc", b"xyz", 1), Ok(2));
        assert_eq!(bounded_distance(b"abc", b"abc", 0), Ok(0));
        assert_eq!(bounded_distance(b"", b"abcd", 3), Ok(4));
        assert_eq!(bounded_distance(b"", b"abcd", 4), Ok(4));
    }

    #[test]
    fn similarities() {
        assert_eq!(similarity(b"", b""), 1.0);
        assert_eq!(similarity(b"abc", b"abc"), 1.0);
        assert_eq!(similarity(b"", b"abc"), 0.0);
        assert_eq!(similarity(b"abc", b"xyz"), 0.0);
        assert_eq!(similarity(b"kitten", b"sitting"), 1.0 - 3.0 / 7.0);
        assert_eq!(similarity(b"sitting", b"kitten"), 1.0 - 3.0 / 7.0);
    }

    #[test]
    fn max_edits() {
        assert_eq!(similarity_to_max_edits(1.0, 7), 0);
        assert_eq!(similarity_to_max_edits(0.0, 7), 7);
        assert_eq!(similarity_to_max_edits(0.5, 7), 3);
        assert_eq!(similarity_to_max_edits(0.6, 7), 2);
        // (1 - 0.9) * 10 rounds down to 0.99..., but 1 edit is exactly 0.9.
        assert_eq!(similarity_to_max_edits(0.9, 10), 1);
    }

    #[test]
    fn bounded_similarities() {
        let exact = similarity(b"kitten", b"sitting");
        assert_eq!(bounded_similarity(b"kitten", b"sitting", 0.5), Ok(exact));
        assert_eq!(bounded_similarity(b"kitten", b"sitting", 0.0), Ok(exact));
        // At most 2 edits are allowed; 3 are reported, which is below 0.6.
        let s = bounded_similarity(b"kitten", b"sitting", 0.6).unwrap();
        assert_eq!(s, 1.0 - 3.0 / 7.0);
        assert!(s < 0.6);
        let s = bounded_similarity(b"kitten", b"sitting", 0.9).unwrap();
        assert!(s < 0.9);

        assert_eq!(bounded_similarity(b"abcdefghij", b"abcdefghiz", 0.9), Ok(0.9));
        assert_eq!(bounded_similarity(b"", b"", 1.0), Ok(1.0));
        assert_eq!(bounded_similarity(b"abc", b"abc", 1.0), Ok(1.0));
        assert!(bounded_similarity(b"abc", b"abd", 1.0).unwrap() < 1.0);
    }

    #[test]
    fn bounded_similarity_rejects_invalid() {
        for s in [-0.5, 1.01, f64::NAN] {
            assert!(matches!(
                bounded_similarity(b"a", b"b", s),
                Err(Error::InvalidSimilarity { .. })
            ));
        }
        assert!(bounded_similarity::<u8>(b"", b"", 2.0).is_err());
    }

    #[test]
    fn bounded_rejects_negative() {
        assert_eq!(
            bounded_distance(b"a", b"b", -1),
            Err(Error::InvalidBound { max_cost: -1 })
        );
    }
}
