//! Qualitative Scale - Weights for the values of a qualitative criterion.
//!
//! The values of a qualitative criterion ("Low", "Medium", "High") are
//! compared pairwise like criteria are, and the resulting priority vector
//! becomes the number each label stands for in the decision matrix.

use serde::{Deserialize, Serialize};

use super::{check_labels, AhpEngine, ConsistencyReport, PairwiseJudgments};
use crate::domain::foundation::{AhpError, StructuralError};

/// A qualitative value and its derived weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelWeight {
    pub label: String,
    pub weight: f64,
}

/// Label weights for one qualitative criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeScale {
    criterion: String,
    weights: Vec<LabelWeight>,
    /// Absent when the criterion has a single value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    consistency: Option<ConsistencyReport>,
}

impl QualitativeScale {
    /// Derives label weights from pairwise judgments between the values.
    ///
    /// # Edge Cases
    /// - A single value gets weight 1 and no consistency test
    /// - Judgments with a consistency ratio at or above the engine's
    ///   threshold are rejected, naming the criterion
    pub fn derive(
        criterion: impl Into<String>,
        judgments: &PairwiseJudgments,
        engine: &AhpEngine,
    ) -> Result<Self, AhpError> {
        let criterion = criterion.into();
        let matrix = judgments.build()?;

        if judgments.items().len() == 1 {
            return Ok(Self {
                criterion,
                weights: vec![LabelWeight {
                    label: judgments.items()[0].clone(),
                    weight: 1.0,
                }],
                consistency: None,
            });
        }

        let weighted = engine.weigh(&format!("criterion '{}'", criterion), &matrix)?;
        let weights = judgments
            .items()
            .iter()
            .zip(weighted.priority.weights())
            .map(|(label, &weight)| LabelWeight {
                label: label.clone(),
                weight,
            })
            .collect();

        Ok(Self {
            criterion,
            weights,
            consistency: Some(weighted.consistency),
        })
    }

    /// Creates a scale from weights computed elsewhere.
    pub fn from_weights(
        criterion: impl Into<String>,
        weights: Vec<LabelWeight>,
    ) -> Result<Self, AhpError> {
        let labels: Vec<String> = weights.iter().map(|w| w.label.clone()).collect();
        check_labels("qualitative values", &labels)?;

        Ok(Self {
            criterion: criterion.into(),
            weights,
            consistency: None,
        })
    }

    /// Returns the criterion this scale belongs to.
    pub fn criterion(&self) -> &str {
        &self.criterion
    }

    /// Returns the weights in declaration order.
    pub fn weights(&self) -> &[LabelWeight] {
        &self.weights
    }

    /// Returns the consistency report of the value judgments, if one was run.
    pub fn consistency(&self) -> Option<&ConsistencyReport> {
        self.consistency.as_ref()
    }

    /// Looks up the weight for one value.
    pub fn weight_of(&self, label: &str) -> Result<f64, StructuralError> {
        self.weights
            .iter()
            .find(|w| w.label == label)
            .map(|w| w.weight)
            .ok_or_else(|| StructuralError::UnknownLabel {
                criterion: self.criterion.clone(),
                label: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::SaatyValue;

    fn saaty(label: &str) -> SaatyValue {
        SaatyValue::parse(label).unwrap()
    }

    fn comfort_judgments() -> PairwiseJudgments {
        PairwiseJudgments::new(vec!["High", "Medium", "Low"])
            .judge("High", "Medium", saaty("3"))
            .judge("High", "Low", saaty("5"))
            .judge("Medium", "Low", saaty("3"))
    }

    #[test]
    fn derive_assigns_descending_weights() {
        let scale =
            QualitativeScale::derive("Comfort", &comfort_judgments(), &AhpEngine::default())
                .unwrap();

        let high = scale.weight_of("High").unwrap();
        let medium = scale.weight_of("Medium").unwrap();
        let low = scale.weight_of("Low").unwrap();

        assert!(high > medium && medium > low);
        assert!((high + medium + low - 1.0).abs() < 1e-9);
        assert!(scale.consistency().unwrap().ratio.value() < 10.0);
        assert_eq!(scale.criterion(), "Comfort");
    }

    #[test]
    fn single_value_weighs_one() {
        let judgments = PairwiseJudgments::new(vec!["Only"]);
        let scale = QualitativeScale::derive("Colour", &judgments, &AhpEngine::default()).unwrap();

        assert_eq!(scale.weight_of("Only").unwrap(), 1.0);
        assert!(scale.consistency().is_none());
    }

    #[test]
    fn inconsistent_values_are_rejected_naming_criterion() {
        let judgments = PairwiseJudgments::new(vec!["A", "B", "C"])
            .judge("A", "B", saaty("9"))
            .judge("B", "C", saaty("9"))
            .judge("A", "C", saaty("1/9"));

        let err = QualitativeScale::derive("Comfort", &judgments, &AhpEngine::default())
            .unwrap_err();

        assert!(matches!(err, AhpError::Inconsistent { ref subject, .. } if subject == "criterion 'Comfort'"));
    }

    #[test]
    fn unknown_label_names_criterion() {
        let scale =
            QualitativeScale::derive("Comfort", &comfort_judgments(), &AhpEngine::default())
                .unwrap();

        assert_eq!(
            scale.weight_of("Extreme"),
            Err(StructuralError::UnknownLabel {
                criterion: "Comfort".to_string(),
                label: "Extreme".to_string(),
            })
        );
    }

    #[test]
    fn from_weights_rejects_duplicates() {
        let weights = vec![
            LabelWeight {
                label: "Yes".to_string(),
                weight: 0.5,
            },
            LabelWeight {
                label: "Yes".to_string(),
                weight: 0.5,
            },
        ];
        assert!(QualitativeScale::from_weights("Flag", weights).is_err());
    }
}
