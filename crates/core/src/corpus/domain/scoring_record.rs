/// One unit of scoring work: a gold transcript, an ASR transcript and the
/// gold medical terms expected in it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoringRecord {
    pub reference: String,
    pub hypothesis: String,
    pub terms: Vec<String>,
}

impl ScoringRecord {
    pub fn new(
        reference: impl Into<String>,
        hypothesis: impl Into<String>,
        terms: Vec<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            hypothesis: hypothesis.into(),
            terms,
        }
    }
}
