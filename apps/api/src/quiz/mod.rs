// Aptitude quiz: question bank, scoring, the per-run state machine and the
// dashboard progress figures derived from a result.

pub mod handlers;
pub mod insights;
pub mod questions;
pub mod scoring;
pub mod session;
