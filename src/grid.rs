//! A dense 2D grid stored as a single row-major allocation.
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// A `rows x cols` grid with every cell set to `value`.
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i < self.rows && j < self.cols,
            "({i}, {j}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        (i < self.rows && j < self.cols).then(|| &self.data[i * self.cols + j])
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on 0.
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    /// The bottom-right cell.
    pub fn last(&self) -> &T {
        &self[(self.rows - 1, self.cols - 1)]
    }

    pub fn last_mut(&mut self) -> &mut T {
        let (i, j) = (self.rows - 1, self.cols - 1);
        &mut self[(i, j)]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.idx(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let idx = self.idx(i, j);
        &mut self.data[idx]
    }
}
