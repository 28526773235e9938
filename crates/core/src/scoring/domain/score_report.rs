use serde::Serialize;

/// Scores for one reference/hypothesis pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreReport {
    pub wer: f64,
    pub tmr: f64,
    pub teme_error: f64,
    pub alpha: f64,
    /// Gold terms found in the hypothesis, in gold-list order.
    pub matched_terms: Vec<String>,
    /// Distinct gold terms not found in the hypothesis.
    pub missing_terms: Vec<String>,
}

impl ScoreReport {
    pub fn wer_percent(&self) -> f64 {
        self.wer * 100.0
    }

    pub fn tmr_percent(&self) -> f64 {
        self.tmr * 100.0
    }

    pub fn teme_error_percent(&self) -> f64 {
        self.teme_error * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn report() -> ScoreReport {
        ScoreReport {
            wer: 0.25,
            tmr: 0.5,
            teme_error: 0.375,
            alpha: 0.5,
            matched_terms: vec!["fever".to_string()],
            missing_terms: vec!["cough".to_string()],
        }
    }

    #[test]
    fn test_percentages() {
        let r = report();
        assert_relative_eq!(r.wer_percent(), 25.0);
        assert_relative_eq!(r.tmr_percent(), 50.0);
        assert_relative_eq!(r.teme_error_percent(), 37.5);
    }

    #[test]
    fn test_serializes_field_names() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["wer"], 0.25);
        assert_eq!(json["teme_error"], 0.375);
        assert_eq!(json["missing_terms"][0], "cough");
    }
}
