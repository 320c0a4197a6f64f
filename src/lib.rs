//! yolo2cls: turn a YOLO detection dataset into a classification dataset.
//!
//! Every image in the `train` and `valid` splits is copied into a directory
//! named after the class index found at the start of its label file:
//!
//! ```text
//! <dataset>/train/images/a.jpg + labels/a.txt ("1 ...")  ->  <output>/train/dog/a.jpg
//! <dataset>/valid/images/b.jpg + labels/b.txt ("0 ...")  ->  <output>/val/cat/b.jpg
//! ```
//!
//! # Modules
//!
//! - [`class_table`]: class names from `data.yaml`
//! - [`annotation`]: lazy image/label pairing
//! - [`copier`]: per-split classifying copy
//! - [`report`]: per-class copy counts
//! - [`error`]: Error types for yolo2cls operations

pub mod annotation;
pub mod class_table;
pub mod copier;
pub mod error;
pub mod logging;
pub mod report;
pub mod split;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

pub use class_table::{load_class_table, ClassTable};
pub use error::Yolo2ClsError;
pub use report::{ReorganizeReport, SplitReport};
pub use split::{Split, SplitLayout};

/// Default validation proportion accepted by `--split`.
pub const DEFAULT_SPLIT_RATIO: f64 = 0.2;

/// The yolo2cls CLI application.
#[derive(Parser)]
#[command(name = "yolo2cls")]
#[command(version, about)]
struct Cli {
    /// Path to the source YOLO dataset (contains data.yaml, train/, valid/).
    #[arg(long)]
    dataset: PathBuf,

    /// Path to the output classification dataset.
    #[arg(long)]
    output: PathBuf,

    /// Proportion of the data to include in the validation set.
    ///
    /// Accepted for compatibility; the existing train/valid split is kept.
    #[arg(long, default_value_t = DEFAULT_SPLIT_RATIO)]
    split: f64,

    /// Summary format printed after a successful run ('text' or 'json').
    #[arg(long, default_value = "text")]
    report: String,

    /// Hide the progress spinner and informational logs.
    #[arg(short, long)]
    quiet: bool,
}

/// Run-time configuration, built once from the command line.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub dataset: PathBuf,
    pub output: PathBuf,
    /// Currently unused by the copy; see `reorganize`.
    pub split_ratio: f64,
    pub show_progress: bool,
}

impl RunConfig {
    pub fn new(dataset: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            output: output.into(),
            split_ratio: DEFAULT_SPLIT_RATIO,
            show_progress: false,
        }
    }
}

/// Run the yolo2cls CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), Yolo2ClsError> {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet);

    // Reject a bad report format before touching the filesystem.
    if !matches!(cli.report.as_str(), "text" | "json") {
        return Err(Yolo2ClsError::UnsupportedReportFormat(format!(
            "'{}' (supported: text, json)",
            cli.report
        )));
    }

    let config = RunConfig {
        dataset: cli.dataset,
        output: cli.output,
        split_ratio: cli.split,
        show_progress: !cli.quiet,
    };

    let report = reorganize(&config)?;

    match cli.report.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", report),
    }

    Ok(())
}

/// Copy the train and valid splits of `config.dataset` into per-class
/// directories under `config.output`.
///
/// The split ratio is not applied; the dataset's own `train`/`valid`
/// partition is used as-is. A failure aborts the run and leaves already
/// copied files in place.
pub fn reorganize(config: &RunConfig) -> Result<ReorganizeReport, Yolo2ClsError> {
    let table = load_class_table(&config.dataset)?;
    info!(
        classes = table.len(),
        dataset = %config.dataset.display(),
        "loaded class table"
    );

    if (config.split_ratio - DEFAULT_SPLIT_RATIO).abs() > f64::EPSILON {
        warn!(
            split = config.split_ratio,
            "split ratio is ignored; keeping the dataset's train/valid partition"
        );
    }

    let layouts: Vec<SplitLayout> = Split::ALL
        .iter()
        .map(|split| split.layout(&config.dataset, &config.output))
        .collect();

    for layout in &layouts {
        fs::create_dir_all(&layout.output_dir).map_err(|source| Yolo2ClsError::CreateDir {
            path: layout.output_dir.clone(),
            source,
        })?;
    }

    let mut report = ReorganizeReport::new(&config.dataset, &config.output, table.len());

    for layout in &layouts {
        info!(
            split = %layout.split,
            images = %layout.images_dir.display(),
            "copying split"
        );

        let progress = split_progress(layout.split, config.show_progress);
        let split_report = copier::copy_split_with_progress(layout, &table, &progress);
        progress.finish_and_clear();
        let split_report = split_report?;

        info!(
            split = %layout.split,
            copied = split_report.copied,
            classes = split_report.per_class.len(),
            "finished split"
        );
        report.splits.push(split_report);
    }

    Ok(report)
}

fn split_progress(split: Split, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}: {human_pos} image(s) [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(format!("Copying {split} images"));
    bar
}
