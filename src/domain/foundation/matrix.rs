//! Dense row-major matrix used for judgment and decision data.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::StructuralError;

/// A rectangular matrix of `f64` values stored row by row.
///
/// Rows are never ragged: construction from nested vectors rejects rows of
/// differing length. Serializes as a nested array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from nested rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, StructuralError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(StructuralError::RaggedRow {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates a matrix with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Creates the n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::filled(n, n, 0.0);
        for i in 0..n {
            matrix[(i, i)] = 1.0;
        }
        matrix
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the entry at (row, col), or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over the rows.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Iterates over one column top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(move |r| self.data[r * self.cols + col])
    }

    /// Returns the main diagonal (length `min(rows, cols)`).
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).collect()
    }

    /// Returns the sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        (0..self.cols).map(|c| self.column(c).sum()).collect()
    }

    /// Returns the sum of each row.
    pub fn row_sums(&self) -> Vec<f64> {
        self.row_iter().map(|row| row.iter().sum()).collect()
    }

    /// Applies `f` to every entry of one column.
    pub fn map_column(&mut self, col: usize, mut f: impl FnMut(f64) -> f64) {
        for r in 0..self.rows {
            let entry = &mut self.data[r * self.cols + col];
            *entry = f(*entry);
        }
    }

    /// Standard matrix-vector product.
    pub fn mul_vector(&self, vector: &[f64]) -> Result<Vec<f64>, StructuralError> {
        if vector.len() != self.cols {
            return Err(StructuralError::DimensionMismatch {
                criteria: vector.len(),
                columns: self.cols,
            });
        }

        Ok(self
            .row_iter()
            .map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.row_iter().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = StructuralError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}
