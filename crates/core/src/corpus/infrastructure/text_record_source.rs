use std::fs;
use std::path::{Path, PathBuf};

use super::json_loader::load_terms;
use super::load_error::LoadError;
use crate::corpus::domain::record_source::RecordSource;
use crate::corpus::domain::scoring_record::ScoringRecord;

/// A single record read from a reference transcript, a hypothesis transcript
/// and a JSON gold term list.
///
/// Transcripts are read whole and passed through untouched; normalization
/// happens at scoring time.
pub struct TextRecordSource {
    reference: PathBuf,
    hypothesis: PathBuf,
    terms: PathBuf,
}

impl TextRecordSource {
    pub fn new(reference: &Path, hypothesis: &Path, terms: &Path) -> Self {
        Self {
            reference: reference.to_path_buf(),
            hypothesis: hypothesis.to_path_buf(),
            terms: terms.to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<ScoringRecord, LoadError> {
        let reference = read_text(&self.reference)?;
        let hypothesis = read_text(&self.hypothesis)?;
        let terms = load_terms(&self.terms)?;
        log::debug!(
            "Read reference ({} bytes) and hypothesis ({} bytes)",
            reference.len(),
            hypothesis.len()
        );
        Ok(ScoringRecord {
            reference,
            hypothesis,
            terms,
        })
    }
}

impl RecordSource for TextRecordSource {
    fn records(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<ScoringRecord, Box<dyn std::error::Error>>> + '_> {
        let record = self
            .load()
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>);
        Box::new(std::iter::once(record))
    }

    fn is_batch(&self) -> bool {
        false
    }
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
