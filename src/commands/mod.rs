//! Command implementations

pub mod audit;
pub mod check;
pub mod puzzle;

pub use audit::{AuditReport, AuditRow, run_audit};
pub use check::{CheckResult, check_word};
pub use puzzle::{PuzzleView, puzzle_view};
