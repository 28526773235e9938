use std::collections::HashSet;

use crate::corpus::domain::scoring_record::ScoringRecord;
use crate::scoring::domain::composite::{teme_error, DEFAULT_ALPHA};
use crate::scoring::domain::score_report::ScoreReport;
use crate::scoring::domain::term_matcher::find_terms_in_text;
use crate::scoring::domain::term_recall::{compute_tmr, SeverityWeights};
use crate::scoring::domain::word_error_rate::compute_wer;

/// Scores one record: WER on the transcripts, term matching on the
/// hypothesis, weighted TMR over the gold terms and their blend.
pub struct ScoreRecordUseCase {
    weights: SeverityWeights,
    alpha: f64,
}

impl Default for ScoreRecordUseCase {
    fn default() -> Self {
        Self::new(SeverityWeights::default(), DEFAULT_ALPHA)
    }
}

impl ScoreRecordUseCase {
    pub fn new(weights: SeverityWeights, alpha: f64) -> Self {
        if !(0.0..=1.0).contains(&alpha) {
            log::warn!("Alpha {alpha} is outside [0, 1]; TEME-Error will extrapolate");
        }
        Self { weights, alpha }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn score(&self, record: &ScoringRecord) -> ScoreReport {
        let wer = compute_wer(&record.reference, &record.hypothesis);
        let matched = find_terms_in_text(&record.terms, &record.hypothesis);
        let tmr = compute_tmr(&record.terms, matched.iter().copied(), Some(&self.weights));
        let teme = teme_error(wer, tmr, self.alpha);

        let matched_terms: Vec<String> = matched.into_iter().cloned().collect();
        let found: HashSet<&str> = matched_terms.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        let missing_terms: Vec<String> = record
            .terms
            .iter()
            .filter(|t| !found.contains(t.as_str()) && seen.insert(t.as_str()))
            .cloned()
            .collect();

        log::debug!(
            "wer={wer:.4} tmr={tmr:.4} teme={teme:.4} matched={} missing={}",
            matched_terms.len(),
            missing_terms.len()
        );

        ScoreReport {
            wer,
            tmr,
            teme_error: teme,
            alpha: self.alpha,
            matched_terms,
            missing_terms,
        }
    }
}
