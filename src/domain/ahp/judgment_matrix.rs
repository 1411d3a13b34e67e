//! Judgment matrices and the pairwise-comparison builder that produces them.

use serde::Serialize;
use std::collections::HashSet;

use super::SaatyValue;
use crate::domain::foundation::{AhpError, Matrix, StructuralError, ValidationError};

/// Number of judgments needed to fill an n×n matrix: n·(n-1)/2.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// A square pairwise-comparison matrix that passed diagonal and
/// reciprocity validation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JudgmentMatrix(Matrix);

impl JudgmentMatrix {
    /// Wraps a matrix the validator has already accepted.
    pub(super) fn from_validated(matrix: Matrix) -> Self {
        Self(matrix)
    }

    /// Returns the number of compared items.
    pub fn order(&self) -> usize {
        self.0.rows()
    }

    /// Returns the underlying matrix.
    pub fn as_matrix(&self) -> &Matrix {
        &self.0
    }

    /// Consumes the wrapper.
    pub fn into_inner(self) -> Matrix {
        self.0
    }
}

/// One pairwise judgment: how much more important `first` is than `second`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub first: String,
    pub second: String,
    pub value: SaatyValue,
}

/// Builder that turns labelled pairwise judgments into a judgment matrix.
///
/// Only one orientation of each pair is needed; the diagonal is set to 1 and
/// the mirrored entry to the reciprocal. A later judgment on the same pair
/// replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct PairwiseJudgments {
    items: Vec<String>,
    judgments: Vec<Judgment>,
}

impl PairwiseJudgments {
    /// Creates a builder over the given items, in matrix order.
    pub fn new(items: Vec<impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            judgments: Vec::new(),
        }
    }

    /// Records that `first` is `value` times as important as `second`.
    pub fn judge(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
        value: SaatyValue,
    ) -> Self {
        self.judgments.push(Judgment {
            first: first.into(),
            second: second.into(),
            value,
        });
        self
    }

    /// Returns the items in matrix order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the number of judgments still required for a complete matrix.
    pub fn required_judgments(&self) -> usize {
        pair_count(self.items.len())
    }

    /// Builds the judgment matrix.
    ///
    /// # Errors
    /// - No items, an empty label, or a duplicate label
    /// - A judgment naming an unknown item or comparing an item with itself
    /// - Any upper-triangle pair left without a judgment
    pub fn build(&self) -> Result<Matrix, AhpError> {
        check_labels("items", &self.items)?;

        let n = self.items.len();
        let mut matrix = Matrix::identity(n);
        let mut judged = HashSet::new();

        for judgment in &self.judgments {
            let i = self.index_of(&judgment.first)?;
            let j = self.index_of(&judgment.second)?;
            if i == j {
                return Err(StructuralError::SelfComparison {
                    label: judgment.first.clone(),
                }
                .into());
            }

            matrix[(i, j)] = judgment.value.value();
            matrix[(j, i)] = judgment.value.reciprocal().value();
            judged.insert((i.min(j), i.max(j)));
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if !judged.contains(&(i, j)) {
                    return Err(StructuralError::MissingJudgment {
                        first: self.items[i].clone(),
                        second: self.items[j].clone(),
                    }
                    .into());
                }
            }
        }

        Ok(matrix)
    }

    fn index_of(&self, label: &str) -> Result<usize, StructuralError> {
        self.items
            .iter()
            .position(|item| item == label)
            .ok_or_else(|| StructuralError::UnknownItem {
                label: label.to_string(),
            })
    }
}

/// Rejects empty label lists, blank labels and duplicates.
pub(crate) fn check_labels(field: &str, labels: &[String]) -> Result<(), ValidationError> {
    if labels.is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    let mut seen = HashSet::new();
    for label in labels {
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{} label", field)));
        }
        if !seen.insert(label.as_str()) {
            return Err(ValidationError::duplicate(field, label.clone()));
        }
    }
    Ok(())
}
