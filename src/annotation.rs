//! Image/label pairing for one split directory.
//!
//! Each image in an `images/` directory has a label file of the same stem in
//! the sibling `labels/` directory. Only the class index at the start of the
//! first line is read; the box coordinates that follow are ignored.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Yolo2ClsError;

/// Extension of YOLO label files.
pub const LABEL_EXTENSION: &str = "txt";

/// An image paired with the class index from its label file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub image_path: PathBuf,
    pub file_name: OsString,
    pub class_index: usize,
}

/// Lazy sequence of samples over the files directly inside an image directory.
///
/// Order follows the directory listing and is not guaranteed to be stable.
/// The first error ends the run, so callers stop at the first `Err`.
pub struct Samples {
    images_dir: PathBuf,
    labels_dir: PathBuf,
    entries: walkdir::IntoIter,
}

/// Start a new sample sequence. Calling this again restarts from the top.
pub fn samples(images_dir: &Path, labels_dir: &Path) -> Samples {
    let entries = WalkDir::new(images_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter();

    Samples {
        images_dir: images_dir.to_path_buf(),
        labels_dir: labels_dir.to_path_buf(),
        entries,
    }
}

impl Iterator for Samples {
    type Item = Result<Sample, Yolo2ClsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) if is_dangling_link(&source) => continue,
                Err(source) => {
                    return Some(Err(Yolo2ClsError::LayoutInvalid {
                        path: self.images_dir.clone(),
                        message: format!("failed while listing images: {source}"),
                    }));
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let image_path = entry.path().to_path_buf();
            let file_name = entry.file_name().to_os_string();
            let label_path = label_path_for(&self.labels_dir, &file_name);

            return Some(pair_sample(image_path, file_name, &label_path));
        }
    }
}

/// A symlink in the image directory whose target does not exist.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    let Some(path) = err.path() else {
        return false;
    };

    err.depth() == 1
        && err
            .io_error()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
        && path
            .symlink_metadata()
            .is_ok_and(|meta| meta.file_type().is_symlink())
}

/// Label file expected for an image file name: same stem, `.txt` extension.
pub fn label_path_for(labels_dir: &Path, image_file_name: &OsStr) -> PathBuf {
    labels_dir.join(Path::new(image_file_name).with_extension(LABEL_EXTENSION))
}

fn pair_sample(
    image_path: PathBuf,
    file_name: OsString,
    label_path: &Path,
) -> Result<Sample, Yolo2ClsError> {
    if !label_path.is_file() {
        return Err(Yolo2ClsError::AnnotationMissing {
            image: image_path,
            label: label_path.to_path_buf(),
        });
    }

    let class_index = read_class_index(label_path)?;
    Ok(Sample {
        image_path,
        file_name,
        class_index,
    })
}

/// Read the class index from the first line of a label file.
pub fn read_class_index(label_path: &Path) -> Result<usize, Yolo2ClsError> {
    let file = File::open(label_path).map_err(|source| Yolo2ClsError::AnnotationParse {
        path: label_path.to_path_buf(),
        message: format!("failed to open: {source}"),
    })?;

    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(|source| Yolo2ClsError::AnnotationParse {
            path: label_path.to_path_buf(),
            message: format!("failed to read first line: {source}"),
        })?;

    parse_class_index(&first_line).map_err(|message| Yolo2ClsError::AnnotationParse {
        path: label_path.to_path_buf(),
        message,
    })
}

/// Parse the leading class index of a single label line.
pub fn parse_class_index(line: &str) -> Result<usize, String> {
    let Some(token) = line.split_whitespace().next() else {
        return Err("first line is empty; expected a class index".to_string());
    };

    token
        .parse::<usize>()
        .map_err(|_| format!("invalid class index '{token}'; expected non-negative integer"))
}

/// Fuzz-only entrypoint for label line parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_class_index(input: &str) -> Result<usize, String> {
    parse_class_index(input)
}
