pub mod csv_record_source;
pub mod json_loader;
pub mod load_error;
pub mod text_record_source;
