//! Error types for the lnkd-xml binding layer.
//!
//! Only structural necessities surface here. Optional fields never produce an
//! error; they fall back to their default instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed XML: {0}")]
  Xml(String),

  #[error("document has no root element")]
  EmptyDocument,

  #[error("{shape}: required node `{path}` is missing")]
  MissingRequired {
    shape: &'static str,
    path:  &'static str,
  },

  #[error("required field `{field}` is missing")]
  MissingField { field: &'static str },

  #[error("invalid number in `{field}`: {value:?}")]
  InvalidNumber { field: &'static str, value: String },

  #[error("invalid date: year {year}, month {month}")]
  InvalidDate { year: i64, month: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
