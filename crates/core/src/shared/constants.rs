/// Weight of a gold term that has no entry in the severity map.
pub const DEFAULT_TERM_WEIGHT: f64 = 1.0;

pub const REFERENCE_COLUMN: &str = "Reference";
pub const HYPOTHESIS_COLUMN: &str = "Hypothesis";
pub const TERMS_COLUMN: &str = "Medical terms";

/// Stripped from both ends of CSV transcript cells after unquoting.
pub const CELL_QUOTE: char = '"';
