use std::ops::{Index, IndexMut};

/// Returns the position of the cell (`row`, `col`) in a row-major square
/// matrix of given size.
#[inline]
pub fn index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

/// Row-major square matrix with fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Clone> SquareMatrix<T> {
    pub fn new(size: usize, value: T) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }
}

impl<T> SquareMatrix<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(index(row, col, self.size))
        } else {
            None
        }
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.size, "column out of bounds");
        &self.data[index(row, col, self.size)]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(col < self.size, "column out of bounds");
        &mut self.data[index(row, col, self.size)]
    }
}
