pub mod composite;
pub mod normalizer;
pub mod score_report;
pub mod term_matcher;
pub mod term_recall;
pub mod word_error_rate;
