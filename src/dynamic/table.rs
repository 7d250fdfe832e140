//! `DpTable` — a dense 2D table for tabulated dynamic programming.
//!
//! Storage is a single row-major `Vec`, so filling row by row walks memory
//! contiguously. Tables are built per call and dropped with it.

use core::ops::{Index, IndexMut};

/// A dense, row-major 2D table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> DpTable<T> {
    /// Creates a `rows x cols` table with every cell set to `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(rows, cols, T::default())
    }

    /// Creates a `rows x cols` table with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Returns the bottom-right cell, the answer of most tabulations.
    pub fn corner(&self) -> Option<&T> {
        self.data.last()
    }
}

impl<T> Index<(usize, usize)> for DpTable<T> {
    type Output = T;

    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "DpTable index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DpTable<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "DpTable index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}
