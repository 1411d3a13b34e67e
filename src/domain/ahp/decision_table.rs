//! Decision Table - Alternatives × criteria with numeric or qualitative cells.
//!
//! The table is the labelled form a user fills in. It converts into the
//! plain decision matrix and monotonicity list the engine consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{check_labels, CriterionCharacteristic, Monotonicity, QualitativeScale};
use crate::domain::foundation::{AhpError, Matrix, StructuralError};

/// Whether a criterion is measured or described.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    #[default]
    Quantitative,
    Qualitative,
}

/// A decision criterion as declared by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(default)]
    pub kind: CriterionKind,
    #[serde(default)]
    pub characteristic: CriterionCharacteristic,
}

impl Criterion {
    /// Creates a numeric criterion.
    pub fn quantitative(name: impl Into<String>, characteristic: CriterionCharacteristic) -> Self {
        Self {
            name: name.into(),
            kind: CriterionKind::Quantitative,
            characteristic,
        }
    }

    /// Creates a criterion whose values are labels weighted by a scale.
    pub fn qualitative(name: impl Into<String>, characteristic: CriterionCharacteristic) -> Self {
        Self {
            name: name.into(),
            kind: CriterionKind::Qualitative,
            characteristic,
        }
    }

    /// Returns true if cells hold labels.
    pub fn is_qualitative(&self) -> bool {
        self.kind == CriterionKind::Qualitative
    }
}

/// One cell of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Label(String),
}

/// Alternatives × criteria table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTable {
    /// Ordered alternative labels; row order of the decision matrix.
    pub alternatives: Vec<String>,
    /// Ordered criteria; column order of the decision matrix.
    pub criteria: Vec<Criterion>,
    /// Cell data keyed by alternative, then criterion.
    pub cells: HashMap<String, HashMap<String, CellValue>>,
}

impl DecisionTable {
    /// Creates a builder for constructing a decision table.
    pub fn builder() -> DecisionTableBuilder {
        DecisionTableBuilder::new()
    }

    /// Gets a cell by alternative and criterion.
    pub fn get_cell(&self, alternative: &str, criterion: &str) -> Option<&CellValue> {
        self.cells.get(alternative)?.get(criterion)
    }

    /// Returns the criterion names in column order.
    pub fn criterion_names(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.name.clone()).collect()
    }

    /// Returns one direction per criterion, in column order.
    pub fn monotonicity(&self) -> Vec<Monotonicity> {
        self.criteria
            .iter()
            .map(|c| c.characteristic.monotonicity())
            .collect()
    }

    /// Checks that each named scale targets a distinct qualitative criterion.
    pub fn check_scale_targets<'a>(
        &self,
        scale_criteria: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), StructuralError> {
        let mut seen: Vec<&str> = Vec::new();
        for name in scale_criteria {
            let qualitative = self
                .criteria
                .iter()
                .any(|c| c.name == name && c.is_qualitative());
            if !qualitative {
                return Err(StructuralError::UnexpectedScale {
                    criterion: name.to_string(),
                });
            }
            if seen.contains(&name) {
                return Err(StructuralError::DuplicateScale {
                    criterion: name.to_string(),
                });
            }
            seen.push(name);
        }
        Ok(())
    }

    /// Resolves every cell to a number.
    ///
    /// Labels in qualitative columns are replaced by their weight from the
    /// matching scale.
    ///
    /// # Errors
    /// - No alternatives or criteria, blank or duplicate names
    /// - A missing cell
    /// - A label in a quantitative column or a number in a qualitative one
    /// - A qualitative criterion without a scale, or a label the scale lacks
    /// - A scale for an unknown or quantitative criterion, or a second scale
    pub fn to_decision_matrix(
        &self,
        scales: &[QualitativeScale],
    ) -> Result<(Matrix, Vec<Monotonicity>), AhpError> {
        check_labels("alternatives", &self.alternatives)?;
        check_labels("criteria", &self.criterion_names())?;
        self.check_scale_targets(scales.iter().map(|s| s.criterion()))?;

        let mut rows = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            let mut row = Vec::with_capacity(self.criteria.len());
            for criterion in &self.criteria {
                row.push(self.resolve(alternative, criterion, scales)?);
            }
            rows.push(row);
        }

        Ok((Matrix::from_rows(rows)?, self.monotonicity()))
    }

    fn resolve(
        &self,
        alternative: &str,
        criterion: &Criterion,
        scales: &[QualitativeScale],
    ) -> Result<f64, StructuralError> {
        let cell = self
            .get_cell(alternative, &criterion.name)
            .ok_or_else(|| StructuralError::MissingCell {
                alternative: alternative.to_string(),
                criterion: criterion.name.clone(),
            })?;

        match (criterion.kind, cell) {
            (CriterionKind::Quantitative, CellValue::Number(value)) => Ok(*value),
            (CriterionKind::Qualitative, CellValue::Label(label)) => scales
                .iter()
                .find(|s| s.criterion() == criterion.name)
                .ok_or_else(|| StructuralError::MissingScale {
                    criterion: criterion.name.clone(),
                })?
                .weight_of(label),
            (kind, _) => Err(StructuralError::CellKindMismatch {
                alternative: alternative.to_string(),
                criterion: criterion.name.clone(),
                expected: match kind {
                    CriterionKind::Quantitative => "numeric",
                    CriterionKind::Qualitative => "qualitative",
                },
            }),
        }
    }
}

/// Builder for constructing DecisionTable instances.
#[derive(Debug, Default)]
pub struct DecisionTableBuilder {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    cells: HashMap<String, HashMap<String, CellValue>>,
}

impl DecisionTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternatives.
    pub fn alternatives(mut self, names: Vec<impl Into<String>>) -> Self {
        self.alternatives = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends a criterion.
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Sets all criteria.
    pub fn criteria(mut self, criteria: Vec<Criterion>) -> Self {
        self.criteria = criteria;
        self
    }

    /// Sets a cell to a value.
    pub fn cell(
        mut self,
        alternative: impl Into<String>,
        criterion: impl Into<String>,
        value: CellValue,
    ) -> Self {
        self.cells
            .entry(alternative.into())
            .or_default()
            .insert(criterion.into(), value);
        self
    }

    /// Sets a numeric cell.
    pub fn number(
        self,
        alternative: impl Into<String>,
        criterion: impl Into<String>,
        value: f64,
    ) -> Self {
        self.cell(alternative, criterion, CellValue::Number(value))
    }

    /// Sets a qualitative cell.
    pub fn label(
        self,
        alternative: impl Into<String>,
        criterion: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.cell(alternative, criterion, CellValue::Label(label.into()))
    }

    /// Builds the decision table.
    pub fn build(self) -> DecisionTable {
        DecisionTable {
            alternatives: self.alternatives,
            criteria: self.criteria,
            cells: self.cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::LabelWeight;
    use crate::domain::foundation::ValidationError;

    fn comfort_scale() -> QualitativeScale {
        QualitativeScale::from_weights(
            "Comfort",
            vec![
                LabelWeight {
                    label: "High".to_string(),
                    weight: 0.6,
                },
                LabelWeight {
                    label: "Low".to_string(),
                    weight: 0.4,
                },
            ],
        )
        .unwrap()
    }

    fn car_table() -> DecisionTableBuilder {
        DecisionTable::builder()
            .alternatives(vec!["Sedan", "Coupe"])
            .criterion(Criterion::quantitative(
                "Price",
                CriterionCharacteristic::HigherIsWorse,
            ))
            .criterion(Criterion::qualitative(
                "Comfort",
                CriterionCharacteristic::HigherIsBetter,
            ))
            .number("Sedan", "Price", 20000.0)
            .number("Coupe", "Price", 30000.0)
            .label("Sedan", "Comfort", "High")
            .label("Coupe", "Comfort", "Low")
    }

    #[test]
    fn converts_to_matrix_in_declared_order() {
        let (matrix, monotonicity) = car_table()
            .build()
            .to_decision_matrix(&[comfort_scale()])
            .unwrap();

        assert_eq!(
            matrix.to_rows(),
            vec![vec![20000.0, 0.6], vec![30000.0, 0.4]]
        );
        assert_eq!(monotonicity, vec![Monotonicity::Cost, Monotonicity::Profit]);
    }

    #[test]
    fn missing_cell_is_reported() {
        let table = DecisionTable::builder()
            .alternatives(vec!["Sedan"])
            .criterion(Criterion::quantitative(
                "Price",
                CriterionCharacteristic::HigherIsWorse,
            ))
            .build();

        assert_eq!(
            table.to_decision_matrix(&[]),
            Err(AhpError::Structural(StructuralError::MissingCell {
                alternative: "Sedan".to_string(),
                criterion: "Price".to_string(),
            }))
        );
    }

    #[test]
    fn label_in_numeric_column_is_rejected() {
        let table = car_table().label("Sedan", "Price", "Cheap").build();

        assert!(matches!(
            table.to_decision_matrix(&[comfort_scale()]),
            Err(AhpError::Structural(StructuralError::CellKindMismatch { expected: "numeric", .. }))
        ));
    }

    #[test]
    fn number_in_qualitative_column_is_rejected() {
        let table = car_table().number("Coupe", "Comfort", 3.0).build();

        assert!(matches!(
            table.to_decision_matrix(&[comfort_scale()]),
            Err(AhpError::Structural(StructuralError::CellKindMismatch { expected: "qualitative", .. }))
        ));
    }

    #[test]
    fn qualitative_column_needs_scale() {
        assert_eq!(
            car_table().build().to_decision_matrix(&[]),
            Err(AhpError::Structural(StructuralError::MissingScale {
                criterion: "Comfort".to_string()
            }))
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        let table = car_table().label("Coupe", "Comfort", "Medium").build();

        assert!(matches!(
            table.to_decision_matrix(&[comfort_scale()]),
            Err(AhpError::Structural(StructuralError::UnknownLabel { .. }))
        ));
    }

    #[test]
    fn duplicate_alternatives_are_rejected() {
        let table = car_table().alternatives(vec!["Sedan", "Sedan"]).build();

        assert!(matches!(
            table.to_decision_matrix(&[comfort_scale()]),
            Err(AhpError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn separator_characters_in_labels_keep_cells_apart() {
        let (matrix, _) = DecisionTable::builder()
            .alternatives(vec!["A", "A:B"])
            .criterion(Criterion::quantitative("B:C", CriterionCharacteristic::HigherIsBetter))
            .criterion(Criterion::quantitative("C", CriterionCharacteristic::HigherIsBetter))
            .number("A", "B:C", 1.0)
            .number("A", "C", 2.0)
            .number("A:B", "B:C", 3.0)
            .number("A:B", "C", 4.0)
            .build()
            .to_decision_matrix(&[])
            .unwrap();

        assert_eq!(matrix.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn scale_must_target_a_single_qualitative_criterion() {
        let table = car_table().build();

        assert_eq!(
            table.check_scale_targets(["Comfort", "Price"]),
            Err(StructuralError::UnexpectedScale {
                criterion: "Price".to_string()
            })
        );
        assert_eq!(
            table.check_scale_targets(["Style"]),
            Err(StructuralError::UnexpectedScale {
                criterion: "Style".to_string()
            })
        );
        assert_eq!(
            table.to_decision_matrix(&[comfort_scale(), comfort_scale()]),
            Err(AhpError::Structural(StructuralError::DuplicateScale {
                criterion: "Comfort".to_string()
            }))
        );
    }

    #[test]
    fn cell_value_is_untagged() {
        let number: CellValue = serde_json::from_str("12.5").unwrap();
        let label: CellValue = serde_json::from_str("\"High\"").unwrap();

        assert_eq!(number, CellValue::Number(12.5));
        assert_eq!(label, CellValue::Label("High".to_string()));
    }

    #[test]
    fn criterion_defaults_to_quantitative_profit() {
        let criterion: Criterion = serde_json::from_str(r#"{ "name": "Speed" }"#).unwrap();

        assert!(!criterion.is_qualitative());
        assert_eq!(criterion.characteristic.monotonicity(), Monotonicity::Profit);
    }
}
