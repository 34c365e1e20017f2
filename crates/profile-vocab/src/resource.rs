//! Dictionary content model

use crate::{Error, Result};
use serde_json::Value;

/// Parsed content of a dictionary resource.
///
/// A resource is structurally valid in exactly two shapes: a flat ordered
/// list of strings, or an ordered mapping from category name to a list of
/// strings. Anything else is an [`Error::InvalidFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryContent {
    /// Flat ordered sequence of values
    Flat(Vec<String>),
    /// Ordered mapping of category name to values
    Categorized(Vec<(String, Vec<String>)>),
}

impl DictionaryContent {
    /// Classify a parsed JSON value into dictionary content.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => {
                let values = scalar_values(items)?;
                Ok(DictionaryContent::Flat(values))
            }
            Value::Object(map) => {
                let mut categories = Vec::with_capacity(map.len());
                for (name, entry) in map {
                    let Value::Array(items) = entry else {
                        return Err(Error::InvalidFormat(format!(
                            "category '{}' must hold a list of values, found {}",
                            name,
                            shape_name(&entry)
                        )));
                    };
                    categories.push((name, scalar_values(items)?));
                }
                Ok(DictionaryContent::Categorized(categories))
            }
            other => Err(Error::InvalidFormat(format!(
                "expected a list or a category map, found {}",
                shape_name(&other)
            ))),
        }
    }

    /// Check if the resource carries no values at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            DictionaryContent::Flat(values) => values.is_empty(),
            DictionaryContent::Categorized(categories) => {
                categories.iter().all(|(_, values)| values.is_empty())
            }
        }
    }

    /// Total number of values across the resource
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            DictionaryContent::Flat(values) => values.len(),
            DictionaryContent::Categorized(categories) => {
                categories.iter().map(|(_, values)| values.len()).sum()
            }
        }
    }
}

fn scalar_values(items: Vec<Value>) -> Result<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(Error::InvalidFormat(format!(
                "expected a string value, found {}",
                shape_name(&other)
            ))),
        })
        .collect()
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
