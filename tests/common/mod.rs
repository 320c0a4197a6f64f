#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Distinct file contents per image; the copier never decodes them.
pub fn image_bytes(file_name: &str, size: u32) -> Vec<u8> {
    let mut bytes = format!("image:{file_name}:").into_bytes();
    bytes.extend((0..size).map(|i| (i % 251) as u8));
    bytes
}

pub fn write_image(path: &Path, size: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    fs::write(path, image_bytes(file_name, size)).expect("write image file");
}

/// Write `data.yaml` plus empty `images/` and `labels/` dirs for both splits.
pub fn create_dataset(root: &Path, class_names: &[&str]) {
    let mut yaml = String::from("nc: ");
    yaml.push_str(&class_names.len().to_string());
    yaml.push_str("\nnames:\n");
    for name in class_names {
        yaml.push_str(&format!("  - '{}'\n", name));
    }
    create_dataset_with_yaml(root, &yaml);
}

/// Like `create_dataset`, with a caller-supplied `data.yaml`.
pub fn create_dataset_with_yaml(root: &Path, data_yaml: &str) {
    for split in ["train", "valid"] {
        fs::create_dir_all(root.join(split).join("images")).expect("create images dir");
        fs::create_dir_all(root.join(split).join("labels")).expect("create labels dir");
    }
    fs::write(root.join("data.yaml"), data_yaml).expect("write data yaml");
}

/// Add one image with a single-box label to `split` (`train` or `valid`).
pub fn add_image(root: &Path, split: &str, file_name: &str, size: u32, label: &str) {
    write_image(&root.join(split).join("images").join(file_name), size);

    let label_name = Path::new(file_name).with_extension("txt");
    fs::write(root.join(split).join("labels").join(label_name), label)
        .expect("write label file");
}
