//! Enumerations and the absent marker

use serde::Serialize;

/// A single allowed value in an enumeration.
///
/// `Absent` is the explicit "no value provided" sentinel and serializes as
/// JSON `null`, so it can never collide with a real vocabulary string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// A vocabulary value
    Text(String),
    /// The absent marker (JSON `null`)
    Absent,
}

impl EnumValue {
    /// Check if this is the absent marker
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, EnumValue::Absent)
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::Text(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        EnumValue::Text(value)
    }
}

/// An ordered sequence of allowed values for one schema leaf
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Enumeration {
    values: Vec<EnumValue>,
}

impl Enumeration {
    /// Create a new empty enumeration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an ordered sequence of text values
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: texts
                .into_iter()
                .map(|text| EnumValue::Text(text.into()))
                .collect(),
        }
    }

    /// Append a value
    pub fn push(&mut self, value: impl Into<EnumValue>) {
        self.values.push(value.into());
    }

    /// The values in order
    #[must_use]
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    /// Check if the enumeration holds no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values, absent marker included
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the absent marker is present
    #[must_use]
    pub fn has_absent(&self) -> bool {
        self.values.iter().any(EnumValue::is_absent)
    }

    /// Check if a text value is present
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.values
            .iter()
            .any(|value| matches!(value, EnumValue::Text(t) if t == text))
    }

    /// Normalize an optional enumeration with the absent marker.
    ///
    /// Appends `Absent` unless the marker itself or its textual alias
    /// `"null"` is already present. Idempotent.
    #[must_use]
    pub fn with_absent(mut self) -> Self {
        if !self.has_absent() && !self.contains_text("null") {
            self.values.push(EnumValue::Absent);
        }
        self
    }
}

impl FromIterator<EnumValue> for Enumeration {
    fn from_iter<I: IntoIterator<Item = EnumValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
