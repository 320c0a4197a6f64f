//! Classifying copier.
//!
//! Copies every image of a split into `<output_dir>/<class_name>/`, keeping
//! its original file name. Existing files are overwritten, so running twice
//! over the same input produces the same tree.

use std::fs;

use indicatif::ProgressBar;
use tracing::debug;

use crate::annotation::{label_path_for, samples};
use crate::class_table::ClassTable;
use crate::error::Yolo2ClsError;
use crate::report::SplitReport;
use crate::split::SplitLayout;

/// Copy one split without progress output.
pub fn copy_split(layout: &SplitLayout, table: &ClassTable) -> Result<SplitReport, Yolo2ClsError> {
    copy_split_with_progress(layout, table, &ProgressBar::hidden())
}

/// Copy one split, ticking `progress` once per copied image.
///
/// Stops at the first error. Images copied before the error stay in place.
pub fn copy_split_with_progress(
    layout: &SplitLayout,
    table: &ClassTable,
    progress: &ProgressBar,
) -> Result<SplitReport, Yolo2ClsError> {
    let mut report = SplitReport::new(layout.split);

    for sample in samples(&layout.images_dir, &layout.labels_dir) {
        let sample = sample?;

        let class_name =
            table
                .get(sample.class_index)
                .ok_or_else(|| Yolo2ClsError::ClassIndexOutOfRange {
                    label: label_path_for(&layout.labels_dir, &sample.file_name),
                    class_index: sample.class_index,
                    class_count: table.len(),
                })?;

        let class_dir = layout.output_dir.join(class_name);
        fs::create_dir_all(&class_dir).map_err(|source| Yolo2ClsError::CreateDir {
            path: class_dir.clone(),
            source,
        })?;

        let destination = class_dir.join(&sample.file_name);
        fs::copy(&sample.image_path, &destination).map_err(|source| Yolo2ClsError::Copy {
            from: sample.image_path.clone(),
            to: destination.clone(),
            source,
        })?;

        debug!(
            from = %sample.image_path.display(),
            to = %destination.display(),
            "copied image"
        );
        report.record(class_name);
        progress.inc(1);
    }

    Ok(report)
}
