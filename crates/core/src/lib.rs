//! Transcript scoring for medical speech recognition.
//!
//! Three numbers compare an ASR hypothesis against a gold reference:
//! word error rate (WER), severity-weighted terminology recall error (TMR)
//! and their linear blend, TEME-Error. The metric functions under
//! [`scoring::domain`] are pure and stateless; [`corpus`] loads records from
//! text, JSON and CSV files and [`pipeline`] wires the two together.

pub mod corpus;
pub mod pipeline;
pub mod scoring;
pub mod shared;
