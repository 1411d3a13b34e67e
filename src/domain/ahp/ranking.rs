//! Ranking - Result vectors paired with alternative labels.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::StructuralError;

/// One score per alternative, in decision-matrix row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultVector(Vec<f64>);

impl ResultVector {
    /// Wraps computed scores.
    pub fn from_scores(scores: Vec<f64>) -> Self {
        Self(scores)
    }

    /// Returns the scores in row order.
    pub fn scores(&self) -> &[f64] {
        &self.0
    }

    /// Returns the score of one alternative.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Returns the number of alternatives scored.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was scored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the highest score; the first one wins on ties.
    pub fn best_index(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (index, &score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((index, score)),
            })
            .map(|(index, _)| index)
    }

    /// Consumes the vector, returning the scores.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// Coarse classification of an alternative relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBand {
    /// Holds the maximum score.
    Best,
    /// Neither the maximum nor the minimum.
    Intermediate,
    /// Holds the minimum score.
    Worst,
}

/// An alternative with its score, rank and band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: String,
    pub score: f64,
    /// 1-based; tied scores share a rank.
    pub rank: usize,
    pub band: RankBand,
}

/// Alternatives ordered from highest to lowest score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedAlternative>,
}

impl Ranking {
    /// Ranks labelled scores.
    ///
    /// # Edge Cases
    /// - Ties keep their input order and share a rank
    /// - When every score is equal, every alternative is `Best`
    pub fn from_scores(labels: &[String], scores: &ResultVector) -> Result<Self, StructuralError> {
        if labels.len() != scores.len() {
            return Err(StructuralError::LabelMismatch {
                expected: scores.len(),
                actual: labels.len(),
            });
        }

        let values = scores.scores();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);

        let mut entries: Vec<RankedAlternative> = labels
            .iter()
            .zip(values)
            .map(|(label, &score)| RankedAlternative {
                alternative: label.clone(),
                score,
                rank: 1 + values.iter().filter(|&&other| other > score).count(),
                band: Self::band(score, max, min),
            })
            .collect();

        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(Self { entries })
    }

    fn band(score: f64, max: f64, min: f64) -> RankBand {
        if score == max {
            RankBand::Best
        } else if score != min {
            RankBand::Intermediate
        } else {
            RankBand::Worst
        }
    }

    /// Returns the ranked entries, best first.
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    /// Returns the single best alternative, or None if empty or tied for first.
    pub fn best(&self) -> Option<&RankedAlternative> {
        match self.entries.as_slice() {
            [first, second, ..] if first.score == second.score => None,
            [first, ..] => Some(first),
            [] => None,
        }
    }

    /// Finds the entry for one alternative.
    pub fn position_of(&self, alternative: &str) -> Option<&RankedAlternative> {
        self.entries.iter().find(|e| e.alternative == alternative)
    }
}
