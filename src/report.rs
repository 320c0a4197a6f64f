//! Copy report types.
//!
//! Summarizes how many images landed in each class directory, per split, so
//! the result of a run can be checked at a glance or consumed as JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::split::Split;

/// Report for a full reorganize run.
#[derive(Clone, Debug, Serialize)]
pub struct ReorganizeReport {
    pub dataset: PathBuf,
    pub output: PathBuf,
    pub classes: usize,
    pub splits: Vec<SplitReport>,
}

impl ReorganizeReport {
    pub fn new(dataset: impl Into<PathBuf>, output: impl Into<PathBuf>, classes: usize) -> Self {
        Self {
            dataset: dataset.into(),
            output: output.into(),
            classes,
            splits: Vec::new(),
        }
    }

    /// Total images copied across all splits.
    pub fn total_copied(&self) -> usize {
        self.splits.iter().map(|s| s.copied).sum()
    }

    /// Report for `split`, if that split has run.
    pub fn split(&self, split: Split) -> Option<&SplitReport> {
        self.splits.iter().find(|s| s.split == split)
    }
}

impl fmt::Display for ReorganizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Copied {} image(s) from {} into {} ({} classes)",
            self.total_copied(),
            self.dataset.display(),
            self.output.display(),
            self.classes
        )?;

        for split in &self.splits {
            write!(f, "{}", split)?;
        }

        Ok(())
    }
}

/// Counts for a single split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub split: Split,
    pub copied: usize,
    /// Copies per class name; classes with no images are absent.
    pub per_class: BTreeMap<String, usize>,
}

impl SplitReport {
    pub fn new(split: Split) -> Self {
        Self {
            split,
            copied: 0,
            per_class: BTreeMap::new(),
        }
    }

    /// Record one copied image for `class_name`.
    pub fn record(&mut self, class_name: &str) {
        self.copied += 1;
        *self.per_class.entry(class_name.to_string()).or_default() += 1;
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}: {} image(s)", self.split, self.copied)?;
        for (class_name, count) in &self.per_class {
            writeln!(f, "    {}: {}", class_name, count)?;
        }
        Ok(())
    }
}
