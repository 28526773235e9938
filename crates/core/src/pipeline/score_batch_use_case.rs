use crate::corpus::domain::record_source::RecordSource;
use crate::pipeline::report_sink::ReportSink;
use crate::pipeline::score_record_use_case::ScoreRecordUseCase;

/// Scoring pipeline: read records → score → publish.
///
/// Records are independent; each is scored and published before the next is
/// read. A record that fails to load aborts the run with that error.
pub struct ScoreBatchUseCase {
    scorer: ScoreRecordUseCase,
}

impl ScoreBatchUseCase {
    pub fn new(scorer: ScoreRecordUseCase) -> Self {
        Self { scorer }
    }

    /// Scores every record from `source` into `sink`, returning how many
    /// were scored.
    pub fn execute(
        &self,
        source: &mut dyn RecordSource,
        sink: &mut dyn ReportSink,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let numbered = source.is_batch();
        let mut scored = 0;

        for (i, record) in source.records().enumerate() {
            let record = record?;
            let report = self.scorer.score(&record);
            let entry = numbered.then_some(i + 1);
            sink.publish(entry, &report)?;
            scored += 1;
        }

        sink.finish()?;
        log::info!(
            "Scored {scored} record(s) with alpha {}",
            self.scorer.alpha()
        );
        Ok(scored)
    }
}
