use num_traits::Zero;
use std::ops::{Add, Mul};

pub trait Element: Copy + Zero + Add<Output = Self> + Mul<Output = Self> + std::fmt::Debug {}

impl<T> Element for T where T: Copy + Zero + Add<Output = T> + Mul<Output = T> + std::fmt::Debug {}

/// Square grid of coefficients with one right-hand constant per row.
///
/// Row `i` holds the left-hand coefficients of equation `i`. Indices are
/// always loop-derived, so an out-of-range access is a bug and panics.
/// The size is fixed once built:
///
/// ```compile_fail
/// let mut m = linsys_dispatch::Matrix2D::<f64>::new(2);
/// m.size = 1;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix2D<T> {
    size: usize,
    cells: Vec<T>,
    constants: Vec<T>,
}

impl<T: Element> Matrix2D<T> {
    pub fn new(size: usize) -> Matrix2D<T> {
        Matrix2D {
            size,
            cells: vec![T::zero(); size * size],
            constants: vec![T::zero(); size],
        }
    }

    pub fn from_rows(rows: Vec<Vec<T>>, constants: Vec<T>) -> Matrix2D<T> {
        let size = rows.len();
        assert!(rows.iter().all(|row| row.len() == size), "Matrix is not square");
        assert_eq!(constants.len(), size, "One constant per row is required");

        Matrix2D {
            size,
            cells: rows.into_iter().flatten().collect(),
            constants,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn constants(&self) -> &[T] {
        &self.constants
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    pub fn constant(&self, row: usize) -> T {
        self.constants[row]
    }

    pub fn set_constant(&mut self, row: usize, value: T) {
        self.constants[row] = value;
    }

    /// Left-hand value of equation `row` for the given unknowns.
    pub fn row_dot(&self, row: usize, vector: &[T]) -> T {
        assert_eq!(vector.len(), self.size, "Dimensions not compatible");
        (0..self.size)
            .map(|col| self.get(row, col) * vector[col])
            .fold(T::zero(), |acc, x| acc + x)
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "Index ({}, {}) out of range for a {}x{} matrix",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_2d() {
        let mut m = Matrix2D::<f64>::new(3);
        assert_eq!(m.to_list(), vec![vec![0.0; 3]; 3]);
        assert_eq!(m.constants(), &[0.0; 3]);

        m.set(1, 2, 7.5);
        m.set_constant(2, -1.0);
        assert_eq!(m.get(1, 2), 7.5);
        assert_eq!(m.cells[5], 7.5);
        assert_eq!(m.constant(2), -1.0);

        let m = Matrix2D::from_rows(vec![vec![1, 2], vec![3, 4]], vec![5, 6]);
        assert_eq!(m.size(), 2);
        assert_eq!(m.to_list(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.rows().count(), 2);
        assert_eq!(m.row_dot(0, &[10, 1]), 12);
        assert_eq!(m.row_dot(1, &[10, 1]), 34);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_column_out_of_range() {
        let m = Matrix2D::<f64>::new(2);
        // would alias (1, 0) without the check
        m.get(0, 2);
    }

    #[test]
    #[should_panic(expected = "Dimensions not compatible")]
    fn test_row_dot_wrong_length() {
        let m = Matrix2D::<f64>::new(3);
        m.row_dot(0, &[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "not square")]
    fn test_from_rows_ragged() {
        Matrix2D::from_rows(vec![vec![1.0, 2.0], vec![3.0]], vec![0.0, 0.0]);
    }
}
