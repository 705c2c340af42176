//! Data model for the scrub cleaning pipeline.
//!
//! Rows arrive with unknown shape (any field set, any value form) and flow
//! through the pipeline as dynamic tagged values. This crate defines that
//! value variant, the row/table containers, the inferred field types that
//! drive every later stage, and the shared error type.

pub mod error;
pub mod options;
pub mod table;
pub mod types;
pub mod value;

pub use error::{Result, ScrubError};
pub use options::MissingStrategy;
pub use table::{Row, Table};
pub use types::{FieldType, FieldTypeMap};
pub use value::Value;
