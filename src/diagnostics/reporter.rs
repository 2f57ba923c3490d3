use std::cell::RefCell;

use crate::diagnostics::report::FailureReport;

/// Sink for captured failures. Implementations must not fail.
pub trait Reporter {
    fn report(&self, report: FailureReport);
}

/// Accumulates reports in memory for later inspection.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: RefCell<Vec<FailureReport>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    /// Cloned snapshot of the collected reports, oldest first.
    pub fn reports(&self) -> Vec<FailureReport> {
        self.reports.borrow().clone()
    }

    /// Drains the collected reports.
    pub fn take(&self) -> Vec<FailureReport> {
        std::mem::take(&mut *self.reports.borrow_mut())
    }

    /// Serializes the collected reports as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&*self.reports.borrow())
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, report: FailureReport) {
        self.reports.borrow_mut().push(report);
    }
}

/// Writes each report to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, report: FailureReport) {
        eprintln!("{}", report);
    }
}
