//! Enumeration extraction from dictionary content

use crate::enumeration::Enumeration;
use crate::resource::DictionaryContent;
use std::collections::BTreeSet;
use tracing::warn;

/// How an enumeration is derived from a dictionary resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Flat list passthrough, order preserved
    Flat,
    /// Top-level category names of a hierarchical dictionary, file order
    CategoryNames,
    /// Sorted, deduplicated union of all values across categories
    CategoryValues,
}

/// Derive an enumeration from dictionary content.
///
/// A content/mode mismatch degrades to an empty enumeration with a
/// diagnostic rather than failing, so one misshapen dictionary cannot
/// block schema generation.
pub fn extract(content: &DictionaryContent, mode: ExtractionMode) -> Enumeration {
    match (content, mode) {
        (DictionaryContent::Flat(values), ExtractionMode::Flat) => {
            // Duplicates pass through untouched: flat sources are curated.
            Enumeration::from_texts(values.iter().cloned())
        }
        (DictionaryContent::Categorized(categories), ExtractionMode::CategoryNames) => {
            Enumeration::from_texts(categories.iter().map(|(name, _)| name.clone()))
        }
        (DictionaryContent::Categorized(categories), ExtractionMode::CategoryValues) => {
            let union: BTreeSet<&String> = categories
                .iter()
                .flat_map(|(_, values)| values.iter())
                .collect();
            Enumeration::from_texts(union.into_iter().cloned())
        }
        (content, mode) => {
            warn!(
                "extraction mode {:?} does not match dictionary shape ({}), using empty enumeration",
                mode,
                match content {
                    DictionaryContent::Flat(_) => "flat list",
                    DictionaryContent::Categorized(_) => "category map",
                }
            );
            Enumeration::new()
        }
    }
}
