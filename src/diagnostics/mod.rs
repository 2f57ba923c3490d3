//! Failure capture and reporting.

pub mod report;
pub mod reporter;

pub use report::FailureReport;
pub use reporter::{CollectingReporter, ConsoleReporter, Reporter};
