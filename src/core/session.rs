//! Scan session
//!
//! The caller holds at most one completed scan at a time; a new scan replaces
//! the previous result wholesale. Export-mode switching operates on the most
//! recent result and fails when no scan has completed.

use crate::core::model::{ExportMode, Page, ScanResult};
use crate::scan::ScanError;

/// Holder of the most recent scan result (last-writer-wins)
#[derive(Debug, Default)]
pub struct ScanSession {
    last: Option<ScanResult>,
    mode: ExportMode,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held result; the export mode resets to the resized set
    pub fn complete(&mut self, result: ScanResult) {
        self.last = Some(result);
        self.mode = ExportMode::Selected;
    }

    /// Discard any held result
    pub fn reset(&mut self) {
        self.last = None;
        self.mode = ExportMode::default();
    }

    /// The most recent result, if any
    pub fn last(&self) -> Option<&ScanResult> {
        self.last.as_ref()
    }

    /// Switch the export page set; returns the active export page count
    pub fn select_export_mode(&mut self, mode: ExportMode) -> Result<usize, ScanError> {
        let result = self.last.as_ref().ok_or(ScanError::NoScan)?;
        self.mode = mode;
        Ok(result.pages_for(mode).len())
    }

    /// Pages of the active export mode
    pub fn export_pages(&self) -> Result<&[Page], ScanError> {
        let result = self.last.as_ref().ok_or(ScanError::NoScan)?;
        Ok(result.pages_for(self.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_pages(full: usize, selected: usize) -> ScanResult {
        ScanResult {
            project_path: "/p".to_string(),
            file_count: 1,
            effective_lines: full,
            pages: vec![vec!["a".to_string()]; full],
            export_pages: vec![vec!["a".to_string()]; selected],
            digest: "0".repeat(16),
        }
    }

    #[test]
    fn test_select_without_scan_fails() {
        let mut session = ScanSession::new();
        assert!(matches!(
            session.select_export_mode(ExportMode::All),
            Err(ScanError::NoScan)
        ));
        assert!(session.export_pages().is_err());
    }

    #[test]
    fn test_mode_switching() {
        let mut session = ScanSession::new();
        session.complete(result_with_pages(5, 3));

        assert_eq!(session.export_pages().unwrap().len(), 3);
        assert_eq!(session.select_export_mode(ExportMode::All).unwrap(), 5);
        assert_eq!(session.export_pages().unwrap().len(), 5);
        assert_eq!(session.select_export_mode(ExportMode::Selected).unwrap(), 3);
    }

    #[test]
    fn test_last_writer_wins() {
        let mut session = ScanSession::new();
        session.complete(result_with_pages(5, 3));
        session.select_export_mode(ExportMode::All).unwrap();

        // a new scan replaces the result and resets the mode
        session.complete(result_with_pages(2, 1));
        assert_eq!(session.export_pages().unwrap().len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut session = ScanSession::new();
        session.complete(result_with_pages(1, 1));
        session.reset();
        assert!(session.last().is_none());
        assert!(session.export_pages().is_err());
    }
}
