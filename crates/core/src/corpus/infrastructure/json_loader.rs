use std::fs;
use std::path::Path;

use serde_json::Value;

use super::load_error::LoadError;
use crate::scoring::domain::term_recall::SeverityWeights;

/// Loads a gold term list: a JSON array of strings.
pub fn load_terms(path: &Path) -> Result<Vec<String>, LoadError> {
    let value = read_json(path)?;
    let terms = terms_from_value(value).ok_or_else(|| LoadError::NotATermList {
        path: path.to_path_buf(),
    })?;
    log::info!("Loaded {} gold terms from {}", terms.len(), path.display());
    Ok(terms)
}

/// Loads severity weights: a JSON object mapping term to a number.
///
/// Keys are kept exactly as written. Non-numeric values are rejected with the
/// offending term named; negative weights pass through unchanged.
pub fn load_severity_weights(path: &Path) -> Result<SeverityWeights, LoadError> {
    let Value::Object(map) = read_json(path)? else {
        return Err(LoadError::NotAWeightMap {
            path: path.to_path_buf(),
        });
    };

    let weights = map
        .into_iter()
        .map(|(term, value)| match value.as_f64() {
            Some(w) if w.is_finite() => Ok((term, w)),
            _ => Err(LoadError::InvalidWeight {
                path: path.to_path_buf(),
                term,
            }),
        })
        .collect::<Result<SeverityWeights, _>>()?;

    log::info!(
        "Loaded {} severity weights from {}",
        weights.len(),
        path.display()
    );
    Ok(weights)
}

/// Parses an inline JSON term list, as found in a CSV cell.
pub fn parse_terms(json: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(json)
}

fn read_json(path: &Path) -> Result<Value, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

fn terms_from_value(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}
