//! Run-level accounting.

use std::path::{Path, PathBuf};

use crate::extract::Outcome;

/// Append-only counters for one extraction run.
#[derive(Debug, Default)]
pub struct Report {
    pub extracted: usize,
    pub skipped_missing: usize,
    pub skipped_empty: usize,
    pub failed: usize,
    /// Modules scanned, in order.
    pub modules: Vec<PathBuf>,
}

impl Report {
    pub fn module_scanned(&mut self, path: &Path) {
        self.modules.push(path.to_path_buf());
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Extracted { .. } => self.extracted += 1,
            Outcome::SkippedMissing => self.skipped_missing += 1,
            Outcome::SkippedEmpty => self.skipped_empty += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    /// Total qualifying items seen.
    pub fn total(&self) -> usize {
        self.extracted + self.skipped_missing + self.skipped_empty + self.failed
    }

    pub fn summary(&self) -> String {
        format!("Successfully extracted {} SoundBanks", self.extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::path::PathBuf;

    #[test]
    fn counts_each_outcome_kind() {
        let mut report = Report::default();
        report.record(&Outcome::Extracted {
            path: PathBuf::from("a.bnk"),
            bytes: 128,
        });
        report.record(&Outcome::SkippedMissing);
        report.record(&Outcome::SkippedMissing);
        report.record(&Outcome::SkippedEmpty);
        report.record(&Outcome::Failed(Error::NoItemData));

        assert_eq!(report.extracted, 1);
        assert_eq!(report.skipped_missing, 2);
        assert_eq!(report.skipped_empty, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total(), 5);
        assert_eq!(report.summary(), "Successfully extracted 1 SoundBanks");
    }
}
