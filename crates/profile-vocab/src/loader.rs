//! Dictionary file loader

use crate::resource::DictionaryContent;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Extensions probed for a vocabulary identifier, in resolution order
const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Loads dictionary resources from a configured directory.
///
/// A vocabulary identifier `seniority_levels` resolves to
/// `seniority_levels.json`, falling back to the `.yaml` / `.yml` variants.
/// Every call re-reads the file: dictionaries are immutable during a
/// generation run, and a missing dictionary is an expected, recoverable
/// condition.
pub struct DictionaryLoader {
    dictionaries_dir: PathBuf,
}

impl DictionaryLoader {
    /// Create a loader rooted at the given dictionaries directory
    pub fn new(dictionaries_dir: impl Into<PathBuf>) -> Self {
        Self {
            dictionaries_dir: dictionaries_dir.into(),
        }
    }

    /// The configured dictionaries directory
    #[must_use]
    pub fn dictionaries_dir(&self) -> &Path {
        &self.dictionaries_dir
    }

    /// Load the dictionary for a vocabulary identifier
    pub fn load(&self, identifier: &str) -> Result<DictionaryContent> {
        for extension in EXTENSIONS {
            let candidate = self
                .dictionaries_dir
                .join(format!("{identifier}.{extension}"));
            if candidate.exists() {
                trace!("Found dictionary file: {:?}", candidate);
                return self.load_from_file(&candidate);
            }
        }

        warn!(
            "Dictionary '{}' not found in {:?}",
            identifier, self.dictionaries_dir
        );
        Err(Error::NotFound(format!(
            "dictionary '{}' not found in {:?}",
            identifier, self.dictionaries_dir
        )))
    }

    /// Load a dictionary from a specific file path
    pub fn load_from_file(&self, path: &Path) -> Result<DictionaryContent> {
        trace!("Loading dictionary from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;

        if path
            .extension()
            .map(|e| e == "yaml" || e == "yml")
            .unwrap_or(false)
        {
            self.load_from_yaml(&content)
        } else {
            self.load_from_json(&content)
        }
    }

    /// Parse dictionary content from a JSON string
    pub fn load_from_json(&self, json: &str) -> Result<DictionaryContent> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| Error::Parse(format!("JSON parse error: {e}")))?;
        DictionaryContent::from_value(value)
    }

    /// Parse dictionary content from a YAML string
    pub fn load_from_yaml(&self, yaml: &str) -> Result<DictionaryContent> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)
            .map_err(|e| Error::Parse(format!("YAML parse error: {e}")))?;
        DictionaryContent::from_value(value)
    }
}
