//! # profile-vocab
//!
//! Controlled vocabulary resources for profile schema generation.
//!
//! A vocabulary is a named finite set of allowed values maintained in an
//! external dictionary file, shaped either as a flat list of strings or as
//! a mapping from category name to a list of strings. This crate loads
//! dictionaries, derives enumerations from them, and normalizes optional
//! enumerations with an explicit absent marker.

pub mod enumeration;
pub mod extract;
pub mod loader;
pub mod resource;

pub use enumeration::{EnumValue, Enumeration};
pub use extract::{extract, ExtractionMode};
pub use loader::DictionaryLoader;
pub use resource::DictionaryContent;

use thiserror::Error;

/// Errors that can occur when working with dictionary resources
#[derive(Error, Debug)]
pub enum Error {
    #[error("Dictionary not found: {0}")]
    NotFound(String),

    #[error("Invalid dictionary shape: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
