use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use super::json_loader::parse_terms;
use super::load_error::LoadError;
use crate::corpus::domain::record_source::RecordSource;
use crate::corpus::domain::scoring_record::ScoringRecord;
use crate::shared::constants::{CELL_QUOTE, HYPOTHESIS_COLUMN, REFERENCE_COLUMN, TERMS_COLUMN};

struct Columns {
    reference: usize,
    hypothesis: usize,
    terms: usize,
}

/// Batch records from a CSV file with a header row.
///
/// Required columns are `Reference`, `Hypothesis` and `Medical terms`; any
/// others are ignored. The terms cell holds a JSON array of strings. Quote
/// characters left around transcript cells after CSV unquoting are stripped.
pub struct CsvRecordSource<R = File> {
    reader: csv::Reader<R>,
    columns: Columns,
    path: PathBuf,
}

impl CsvRecordSource<File> {
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let reader = csv::Reader::from_path(path).map_err(|e| LoadError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::with_reader(reader, path)
    }
}

impl<R: io::Read> CsvRecordSource<R> {
    /// Wraps an arbitrary reader; `path` only labels errors.
    pub fn from_reader(rdr: R, path: &Path) -> Result<Self, LoadError> {
        Self::with_reader(csv::Reader::from_reader(rdr), path)
    }

    fn with_reader(mut reader: csv::Reader<R>, path: &Path) -> Result<Self, LoadError> {
        let headers = reader.headers().map_err(|e| LoadError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };
        let columns = Columns {
            reference: find(REFERENCE_COLUMN)?,
            hypothesis: find(HYPOTHESIS_COLUMN)?,
            terms: find(TERMS_COLUMN)?,
        };

        log::debug!("Opened batch file {}", path.display());
        Ok(Self {
            reader,
            columns,
            path: path.to_path_buf(),
        })
    }
}

impl<R: io::Read> RecordSource for CsvRecordSource<R> {
    fn records(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<ScoringRecord, Box<dyn std::error::Error>>> + '_> {
        let columns = &self.columns;
        let path = &self.path;
        Box::new(
            self.reader
                .records()
                .enumerate()
                .map(move |(i, row)| -> Result<ScoringRecord, LoadError> {
                    let row = row.map_err(|e| LoadError::Csv {
                        path: path.clone(),
                        source: e,
                    })?;
                    let cell = |idx: usize| row.get(idx).unwrap_or_default();

                    let terms =
                        parse_terms(cell(columns.terms)).map_err(|e| LoadError::InvalidTerms {
                            path: path.clone(),
                            row: i + 1,
                            column: TERMS_COLUMN,
                            source: e,
                        })?;

                    Ok(ScoringRecord {
                        reference: cell(columns.reference).trim_matches(CELL_QUOTE).to_string(),
                        hypothesis: cell(columns.hypothesis).trim_matches(CELL_QUOTE).to_string(),
                        terms,
                    })
                })
                .map(|r| r.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn source(csv: &str) -> CsvRecordSource<&[u8]> {
        CsvRecordSource::from_reader(csv.as_bytes(), Path::new("batch.csv")).unwrap()
    }

    fn collect(source: &mut CsvRecordSource<&[u8]>) -> Vec<ScoringRecord> {
        source
            .records()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_reads_rows_in_order() {
        let mut src = source(
            "Reference,Hypothesis,Medical terms\n\
             the cat sat,the dog sat,\"[\"\"fever\"\"]\"\n\
             no fever,no fever,\"[\"\"fever\"\", \"\"cough\"\"]\"\n",
        );
        let records = collect(&mut src);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].reference, "the cat sat");
        assert_eq!(records[0].hypothesis, "the dog sat");
        assert_eq!(records[0].terms, vec!["fever"]);
        assert_eq!(records[1].terms, vec!["fever", "cough"]);
    }

    #[test]
    fn test_strips_leftover_quotes() {
        let mut src = source(
            "Reference,Hypothesis,Medical terms\n\
             \"\"\"quoted ref\"\"\",plain hyp,[]\n",
        );
        let records = collect(&mut src);
        assert_eq!(records[0].reference, "quoted ref");
        assert_eq!(records[0].hypothesis, "plain hyp");
        assert!(records[0].terms.is_empty());
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let mut src = source(
            "id,Medical terms,Hypothesis,Reference\n\
             7,[],hyp text,ref text\n",
        );
        let records = collect(&mut src);
        assert_eq!(records[0].reference, "ref text");
        assert_eq!(records[0].hypothesis, "hyp text");
    }

    #[test]
    fn test_missing_column_is_named() {
        let err = CsvRecordSource::from_reader(
            "Reference,Hypothesis\na,b\n".as_bytes(),
            Path::new("batch.csv"),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            LoadError::MissingColumn {
                column: TERMS_COLUMN,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_terms_cell_reports_row() {
        let mut src = source(
            "Reference,Hypothesis,Medical terms\n\
             a,a,[]\n\
             b,b,fever\n",
        );
        let results: Vec<_> = src.records().collect();
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        let load_err = err.downcast_ref::<LoadError>().unwrap();
        assert!(matches!(load_err, LoadError::InvalidTerms { row: 2, .. }));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_open_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.csv");
        fs::write(
            &path,
            "Reference,Hypothesis,Medical terms\nfever today,fever today,\"[\"\"fever\"\"]\"\n",
        )
        .unwrap();

        let mut src = CsvRecordSource::open(&path).unwrap();
        assert!(src.is_batch());
        let records: Vec<_> = src.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvRecordSource::open(&dir.path().join("nope.csv"))
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::Csv { .. }));
    }
}
