use crate::model::{PlanningError, N_TRAITS};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// a traveler's reaction to a planned route.
///
/// deserializes from "positive"/"negative", from 1/0, or from true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", try_from = "RawFeedbackSignal")]
pub enum FeedbackSignal {
    Positive,
    Negative,
}

impl FeedbackSignal {
    /// moves traits away from the car driver profile, toward the transit commuter.
    pub const POSITIVE_DELTA: [f64; N_TRAITS] = [-0.1, 0.1, -0.1, 0.1, 0.1];
    pub const NEGATIVE_DELTA: [f64; N_TRAITS] = [0.1, -0.1, 0.1, -0.1, -0.1];

    pub fn delta(&self) -> &'static [f64; N_TRAITS] {
        match self {
            FeedbackSignal::Positive => &Self::POSITIVE_DELTA,
            FeedbackSignal::Negative => &Self::NEGATIVE_DELTA,
        }
    }
}

impl Display for FeedbackSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackSignal::Positive => write!(f, "positive"),
            FeedbackSignal::Negative => write!(f, "negative"),
        }
    }
}

impl FromStr for FeedbackSignal {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" | "+" | "1" => Ok(FeedbackSignal::Positive),
            "negative" | "neg" | "-" | "0" => Ok(FeedbackSignal::Negative),
            other => Err(PlanningError::InvalidFeedback(format!(
                "'{other}' is not one of 'positive' or 'negative'"
            ))),
        }
    }
}

impl TryFrom<i64> for FeedbackSignal {
    type Error = PlanningError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FeedbackSignal::Positive),
            0 => Ok(FeedbackSignal::Negative),
            other => Err(PlanningError::InvalidFeedback(format!(
                "{other} is not one of 1 (positive) or 0 (negative)"
            ))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFeedbackSignal {
    Flag(bool),
    Code(i64),
    Text(String),
}

impl TryFrom<RawFeedbackSignal> for FeedbackSignal {
    type Error = PlanningError;

    fn try_from(value: RawFeedbackSignal) -> Result<Self, Self::Error> {
        match value {
            RawFeedbackSignal::Flag(true) => Ok(FeedbackSignal::Positive),
            RawFeedbackSignal::Flag(false) => Ok(FeedbackSignal::Negative),
            RawFeedbackSignal::Code(code) => FeedbackSignal::try_from(code),
            RawFeedbackSignal::Text(text) => FeedbackSignal::from_str(&text),
        }
    }
}

#[cfg(test)]
mod test {
    use super::FeedbackSignal;
    use crate::model::PlanningError;

    #[test]
    fn test_deltas_are_exact_negations() {
        for (p, n) in FeedbackSignal::POSITIVE_DELTA
            .iter()
            .zip(FeedbackSignal::NEGATIVE_DELTA.iter())
        {
            assert_eq!(*p, -*n);
        }
    }

    #[test]
    fn test_deserialize_encodings() {
        let signals: Vec<FeedbackSignal> =
            serde_json::from_str(r#"["positive", "negative", 1, 0, true, false]"#)
                .expect("test failed");
        use FeedbackSignal as F;
        assert_eq!(
            signals,
            vec![F::Positive, F::Negative, F::Positive, F::Negative, F::Positive, F::Negative]
        );
    }

    #[test]
    fn test_unrecognized_signal() {
        let result: Result<Vec<FeedbackSignal>, _> = serde_json::from_str(r#"["maybe"]"#);
        assert!(result.is_err());
        let result: Result<Vec<FeedbackSignal>, _> = serde_json::from_str("[2]");
        assert!(result.is_err());
        let result = "sideways".parse::<FeedbackSignal>();
        assert!(matches!(result, Err(PlanningError::InvalidFeedback(_))));
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let s = serde_json::to_string(&FeedbackSignal::Negative).expect("test failed");
        assert_eq!(s, "\"negative\"");
    }
}
