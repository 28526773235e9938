use std::collections::{HashMap, HashSet};

use crate::shared::constants::DEFAULT_TERM_WEIGHT;

/// Per-term severity multipliers keyed by the raw term as supplied.
///
/// Lookups are exact: keys are not normalized, so callers must use the same
/// spelling in the weight map and the gold term list. Terms without an entry
/// weigh [`DEFAULT_TERM_WEIGHT`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeverityWeights {
    weights: HashMap<String, f64>,
}

impl SeverityWeights {
    pub fn new(weights: HashMap<String, f64>) -> Self {
        Self { weights }
    }

    pub fn weight(&self, term: &str) -> f64 {
        self.weights
            .get(term)
            .copied()
            .unwrap_or(DEFAULT_TERM_WEIGHT)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(String, f64)> for SeverityWeights {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Severity-weighted share of gold terms missing from `matched_terms`.
///
/// `total = Σ weight(t)` over every entry of `ref_terms`; the missed weight
/// sums each distinct gold term absent from `matched_terms` once. Returns
/// `missed / total`, or `0.0` when the total is not positive. Passing `None`
/// for `weights` is the same as passing an empty map.
///
/// Matched terms that are not gold terms carry no penalty; the incorrect-term
/// weight is always zero.
pub fn compute_tmr<R, M>(
    ref_terms: &[R],
    matched_terms: M,
    weights: Option<&SeverityWeights>,
) -> f64
where
    R: AsRef<str>,
    M: IntoIterator,
    M::Item: AsRef<str>,
{
    let empty = SeverityWeights::default();
    let weights = weights.unwrap_or(&empty);

    let gold: Vec<&str> = ref_terms.iter().map(|t| t.as_ref()).collect();
    let total_weight: f64 = gold.iter().map(|t| weights.weight(t)).sum();

    let matched: HashSet<String> = matched_terms
        .into_iter()
        .map(|t| t.as_ref().to_owned())
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let missed_weight: f64 = gold
        .iter()
        .copied()
        .filter(|t| !matched.contains(*t) && seen.insert(*t))
        .map(|t| weights.weight(t))
        .sum();

    let incorrect_weight = 0.0;

    if total_weight > 0.0 {
        (missed_weight + incorrect_weight) / total_weight
    } else {
        if total_weight < 0.0 {
            log::warn!("Total severity weight {total_weight} is negative; TMR reported as 0");
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn weights(pairs: &[(&str, f64)]) -> SeverityWeights {
        pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    #[test]
    fn test_partial_recall() {
        assert_relative_eq!(compute_tmr(&["fever", "cough"], ["fever"], None), 0.5);
    }

    #[test]
    fn test_full_recall_scores_zero() {
        assert_eq!(compute_tmr(&["fever", "cough"], ["cough", "fever"], None), 0.0);
    }

    #[test]
    fn test_no_recall_scores_one() {
        let matched: [&str; 0] = [];
        assert_relative_eq!(compute_tmr(&["fever", "cough"], matched, None), 1.0);
    }

    #[test]
    fn test_no_reference_terms_scores_zero() {
        let gold: [&str; 0] = [];
        assert_eq!(compute_tmr(&gold, ["anything"], None), 0.0);
    }

    #[test]
    fn test_severity_weighting() {
        let w = weights(&[("cough", 3.0)]);
        assert_relative_eq!(compute_tmr(&["fever", "cough"], ["fever"], Some(&w)), 0.75);
    }

    #[test]
    fn test_none_and_empty_weights_agree() {
        let empty = SeverityWeights::default();
        let gold = ["fever", "cough", "rash"];
        let with_none = compute_tmr(&gold, ["rash"], None);
        let with_empty = compute_tmr(&gold, ["rash"], Some(&empty));
        assert_eq!(with_none, with_empty);
    }

    #[test]
    fn test_weight_lookup_is_exact_key() {
        // "Cough" in the map does not apply to "cough" in the gold list
        let w = weights(&[("Cough", 10.0)]);
        assert_relative_eq!(compute_tmr(&["fever", "cough"], ["fever"], Some(&w)), 0.5);
    }

    #[test]
    fn test_duplicate_gold_terms_counted_once_when_missing() {
        // total = 1 + 1 + 1, missing = {cough} -> 1
        let tmr = compute_tmr(&["cough", "cough", "fever"], ["fever"], None);
        assert_relative_eq!(tmr, 1.0 / 3.0);
    }

    #[test]
    fn test_spurious_matches_carry_no_penalty() {
        let tmr = compute_tmr(&["fever"], ["fever", "headache", "nausea"], None);
        assert_eq!(tmr, 0.0);
    }

    #[test]
    fn test_zero_total_weight_scores_zero() {
        let w = weights(&[("fever", 0.0)]);
        assert_eq!(compute_tmr(&["fever"], Vec::<String>::new(), Some(&w)), 0.0);
    }

    #[test]
    fn test_accepts_owned_strings() {
        let gold = vec!["fever".to_string(), "cough".to_string()];
        let matched = vec![&gold[1]];
        assert_relative_eq!(compute_tmr(&gold, matched, None), 0.5);
    }

    #[test]
    fn test_default_weight_for_unlisted_term() {
        let w = weights(&[("fever", 2.0)]);
        assert_eq!(w.weight("fever"), 2.0);
        assert_eq!(w.weight("cough"), DEFAULT_TERM_WEIGHT);
    }
}
