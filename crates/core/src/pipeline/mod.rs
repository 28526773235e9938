pub mod report_sink;
pub mod score_batch_use_case;
pub mod score_record_use_case;
