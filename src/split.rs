//! Dataset splits and their on-disk layout.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A named partition of the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    Train,
    Val,
}

impl Split {
    /// Both splits, in processing order.
    pub const ALL: [Split; 2] = [Split::Train, Split::Val];

    /// Directory name in the source YOLO dataset.
    pub fn source_dir_name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "valid",
        }
    }

    /// Directory name in the classification output.
    pub fn output_dir_name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
        }
    }

    /// Resolve the directories for this split.
    pub fn layout(self, dataset_root: &Path, output_root: &Path) -> SplitLayout {
        let source = dataset_root.join(self.source_dir_name());
        SplitLayout {
            split: self,
            images_dir: source.join("images"),
            labels_dir: source.join("labels"),
            output_dir: output_root.join(self.output_dir_name()),
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.output_dir_name())
    }
}

/// Source and destination directories for one split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitLayout {
    pub split: Split,
    pub images_dir: PathBuf,
    pub labels_dir: PathBuf,
    /// Root under which `<class_name>/` directories are created.
    pub output_dir: PathBuf,
}
