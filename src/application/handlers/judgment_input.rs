//! Pairwise judgments as they arrive in request documents.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{PairwiseJudgments, SaatyValue};

/// One comparison: `more` is `value` times as important as `less`.
///
/// `value` is a Saaty scale label such as `"5"` or `"1/3"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentInput {
    pub more: String,
    pub less: String,
    pub value: SaatyValue,
}

impl JudgmentInput {
    pub fn new(more: impl Into<String>, less: impl Into<String>, value: SaatyValue) -> Self {
        Self {
            more: more.into(),
            less: less.into(),
            value,
        }
    }
}

/// Collects labelled judgments into a builder over `items`.
pub fn pairwise(items: &[String], judgments: &[JudgmentInput]) -> PairwiseJudgments {
    judgments
        .iter()
        .fold(PairwiseJudgments::new(items.to_vec()), |builder, j| {
            builder.judge(j.more.clone(), j.less.clone(), j.value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_saaty_label() {
        let input: JudgmentInput =
            serde_json::from_str(r#"{ "more": "Price", "less": "Comfort", "value": "1/3" }"#)
                .unwrap();

        assert_eq!(input.value, SaatyValue::parse("1/3").unwrap());
    }

    #[test]
    fn rejects_off_scale_value() {
        let result: Result<JudgmentInput, _> =
            serde_json::from_str(r#"{ "more": "A", "less": "B", "value": "10" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn pairwise_builds_full_matrix() {
        let items = vec!["A".to_string(), "B".to_string()];
        let judgments = vec![JudgmentInput::new("A", "B", SaatyValue::parse("3").unwrap())];

        let matrix = pairwise(&items, &judgments).build().unwrap();
        assert_eq!(matrix[(0, 1)], 3.0);
        assert_eq!(matrix[(1, 0)], 1.0 / 3.0);
    }
}
