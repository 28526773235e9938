use std::io::Write;

use serde::Serialize;

use crate::scoring::domain::score_report::ScoreReport;

/// Destination for score reports.
///
/// Decouples the scoring pipeline from presentation so the CLI, tests and
/// other callers can render results however they need.
pub trait ReportSink {
    /// Publish one report. `entry` is the 1-based batch position, or `None`
    /// when a single record was scored.
    fn publish(
        &mut self,
        entry: Option<usize>,
        report: &ScoreReport,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush any buffered output. Default: no-op.
    fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

/// Discards every report.
pub struct NullReportSink;

impl ReportSink for NullReportSink {
    fn publish(
        &mut self,
        _entry: Option<usize>,
        _report: &ScoreReport,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

/// Human-readable percentages, one metric per line.
///
/// Batch entries get a `Results for entry N:` header underlined with dashes.
pub struct TextReportSink<W: Write> {
    writer: W,
}

impl<W: Write> TextReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextReportSink<W> {
    fn publish(
        &mut self,
        entry: Option<usize>,
        report: &ScoreReport,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(n) = entry {
            writeln!(self.writer)?;
            writeln!(self.writer, "Results for entry {n}:")?;
            writeln!(self.writer, "{}", "-".repeat(20))?;
        }
        writeln!(self.writer, "WER: {:.2}%", report.wer_percent())?;
        writeln!(self.writer, "TMR: {:.2}%", report.tmr_percent())?;
        writeln!(
            self.writer,
            "TEME-Error(α={:?}): {:.2}%",
            report.alpha,
            report.teme_error_percent()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    entry: Option<usize>,
    #[serde(flatten)]
    report: &'a ScoreReport,
}

/// One JSON object per report, newline-delimited.
pub struct JsonLinesReportSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonLinesReportSink<W> {
    fn publish(
        &mut self,
        entry: Option<usize>,
        report: &ScoreReport,
    ) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.writer, &JsonLine { entry, report })?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.flush()?;
        Ok(())
    }
}
