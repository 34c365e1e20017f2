//! # profile-schema
//!
//! Schema tree model and assembler for profile validation schemas.
//!
//! The assembler walks the fixed profile document shape and, at each leaf
//! bound in the field binding table, substitutes the enumeration resolved
//! from its dictionary. The finished tree renders as a JSON Schema
//! (draft-07) document.

pub mod assembler;
pub mod bindings;
pub mod node;

pub use assembler::{DocumentVariant, SchemaAssembler};
pub use bindings::{Binding, BindingTable};
pub use node::{SchemaDocument, SchemaNode};

use thiserror::Error;

/// Errors that can occur during schema assembly
#[derive(Error, Debug)]
pub enum Error {
    /// The assembler queried a field path with no binding. This is a bug
    /// in the document shape code, not an input condition.
    #[error("No binding for field path: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, Error>;
