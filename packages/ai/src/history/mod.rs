// ABOUTME: Analysis history module
// ABOUTME: Append-only, newest-first log of analyses, filtered per user on read

pub mod storage;
pub mod types;

pub use storage::AnalysisHistory;
pub use types::AnalysisRecord;
