use std::path::PathBuf;
use thiserror::Error;

/// The main error type for yolo2cls operations.
#[derive(Debug, Error)]
pub enum Yolo2ClsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read class list {path}: {source}")]
    DataYamlRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse class list {path}: {source}")]
    DataYamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid class name {name:?} at index {index} in {path}: not usable as a directory name")]
    ClassNameInvalid {
        path: PathBuf,
        index: usize,
        name: String,
    },

    #[error("Missing annotation for image {image}: expected {label}")]
    AnnotationMissing { image: PathBuf, label: PathBuf },

    #[error("Failed to parse annotation {path}: {message}")]
    AnnotationParse { path: PathBuf, message: String },

    #[error("Class index {class_index} in {label} is out of range for {class_count} class(es)")]
    ClassIndexOutOfRange {
        label: PathBuf,
        class_index: usize,
        class_count: usize,
    },

    #[error("Invalid dataset layout at {path}: {message}")]
    LayoutInvalid { path: PathBuf, message: String },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report as JSON: {0}")]
    ReportJson(#[from] serde_json::Error),

    #[error("Unsupported report format: {0}")]
    UnsupportedReportFormat(String),
}
