//! Error types for the editor

use crate::engine::ParseError;
use lookedit_schema::SchemaError;
use lookedit_values::ValueFormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("value format error: {0}")]
    Value(#[from] ValueFormatError),

    #[error("no session named {0:?}")]
    UnknownSession(String),

    #[error("no element named {0:?} in the store")]
    UnknownElement(String),
}
