//! Hand-off state between the dashboard and the result viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard records the latest report after a successful `/analyze`
//! call; the result page renders whatever is recorded here.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::net::types::AnalysisResult;

/// A completed analysis together with the preview of the submitted image.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    /// Object URL of the original upload.
    pub preview_url: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisState {
    latest: Option<AnalysisReport>,
}

impl AnalysisState {
    pub fn latest(&self) -> Option<&AnalysisReport> {
        self.latest.as_ref()
    }

    /// Replace the latest report.
    ///
    /// Returns the displaced report's preview URL when the new report does
    /// not reuse it, so the caller can release it.
    #[must_use]
    pub fn record(&mut self, report: AnalysisReport) -> Option<String> {
        let displaced = self
            .latest
            .take()
            .map(|old| old.preview_url)
            .filter(|url| *url != report.preview_url);
        self.latest = Some(report);
        displaced
    }

    /// Drop the latest report, returning its preview URL.
    #[must_use]
    pub fn clear(&mut self) -> Option<String> {
        self.latest.take().map(|report| report.preview_url)
    }
}
