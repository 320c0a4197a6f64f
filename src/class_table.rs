//! Class table loading from a YOLO `data.yaml`.
//!
//! The table maps a zero-based class index to the class name used as the
//! destination directory for every image of that class.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Yolo2ClsError;

/// File name of the dataset metadata document.
pub const DATA_YAML: &str = "data.yaml";

/// Class names keyed by class id.
///
/// Ids come straight from `data.yaml` and may be sparse when `names` is a
/// mapping; an id with no entry has no class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassTable {
    names: BTreeMap<usize, String>,
}

impl ClassTable {
    /// Build a dense table from names that are already known to be valid.
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names: names.into_iter().enumerate().collect(),
        }
    }

    /// Parse a `data.yaml` document held in memory.
    ///
    /// `origin` only labels errors; nothing is read from it.
    pub fn from_yaml_str(yaml: &str, origin: &Path) -> Result<Self, Yolo2ClsError> {
        let parsed: DataYaml =
            serde_yaml::from_str(yaml).map_err(|source| Yolo2ClsError::DataYamlParse {
                path: origin.to_path_buf(),
                source,
            })?;

        let names: BTreeMap<usize, String> = match parsed.names {
            DataYamlNames::Sequence(names) => names.into_iter().enumerate().collect(),
            DataYamlNames::Mapping(mapping) => mapping,
        };

        for (&index, name) in &names {
            if !is_valid_dir_name(name) {
                return Err(Yolo2ClsError::ClassNameInvalid {
                    path: origin.to_path_buf(),
                    index,
                    name: name.clone(),
                });
            }
        }

        Ok(Self { names })
    }

    /// Class name for `index`, or `None` when no class has that id.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Class names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }
}

/// Load the class table from `<dataset_root>/data.yaml`.
pub fn load_class_table(dataset_root: &Path) -> Result<ClassTable, Yolo2ClsError> {
    let path = dataset_root.join(DATA_YAML);
    let data = fs::read_to_string(&path).map_err(|source| Yolo2ClsError::DataYamlRead {
        path: path.clone(),
        source,
    })?;
    ClassTable::from_yaml_str(&data, &path)
}

#[derive(Debug, Deserialize)]
struct DataYaml {
    names: DataYamlNames,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DataYamlNames {
    Sequence(Vec<String>),
    Mapping(BTreeMap<usize, String>),
}

fn is_valid_dir_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}
