pub mod record_source;
pub mod scoring_record;
