use super::normalizer::{normalize, tokenize};

/// Minimum number of unit-cost insertions, deletions and substitutions
/// turning `reference` into `hypothesis`.
///
/// Levenshtein over whole tokens, kept as two rolling rows of the
/// `(n+1) x (m+1)` table so memory is O(m).
pub fn edit_distance<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> usize {
    let m = hypothesis.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];

    for (i, r) in reference.iter().enumerate() {
        curr[0] = i + 1;
        for (j, h) in hypothesis.iter().enumerate() {
            let substitution = prev[j] + usize::from(r != h);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Word Error Rate of `hypothesis` against `reference`.
///
/// Both sides are normalized and split on spaces; the token edit distance is
/// divided by the reference token count. An empty reference scores `0.0`
/// whatever the hypothesis holds.
///
/// The ratio is not clamped: a hypothesis much longer than the reference
/// scores above `1.0`.
pub fn compute_wer(reference: &str, hypothesis: &str) -> f64 {
    let reference = normalize(reference);
    let hypothesis = normalize(hypothesis);
    let r = tokenize(&reference);
    let h = tokenize(&hypothesis);

    if r.is_empty() {
        return 0.0;
    }

    edit_distance(&r, &h) as f64 / r.len() as f64
}
