use super::normalizer::normalize;

/// Returns the terms of `terms` that occur in `text`, in input order.
///
/// Both sides are normalized first and a term counts as found when its
/// normalized form is a substring of the normalized text. Matching does not
/// respect word boundaries: "ear" is found in "nearly".
///
/// The returned items are the caller's original, unnormalized terms.
pub fn find_terms_in_text<'a, S: AsRef<str>>(terms: &'a [S], text: &str) -> Vec<&'a S> {
    let haystack = normalize(text);
    terms
        .iter()
        .filter(|term| haystack.contains(normalize(term.as_ref()).as_str()))
        .collect()
}
