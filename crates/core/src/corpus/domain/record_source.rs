use super::scoring_record::ScoringRecord;

/// Supplies scoring records from some backing store.
///
/// Implementations own parsing and file access; the scoring pipeline only
/// sees `ScoringRecord`s in source order.
pub trait RecordSource {
    /// Returns an iterator over the records in source order. A record that
    /// fails to load comes through as an `Err`.
    fn records(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<ScoringRecord, Box<dyn std::error::Error>>> + '_>;

    /// Whether records should be reported as numbered batch entries.
    fn is_batch(&self) -> bool {
        true
    }
}
