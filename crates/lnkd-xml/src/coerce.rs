//! Typed scalar coercion for extracted text.
//!
//! `str_to_bool` and `opt_number` are fail-soft. `parse_int` and `parse_date`
//! are for fields the upstream contract guarantees, so they propagate.

use std::str::FromStr;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
  access::{Lookup, get_child},
  error::{Error, Result},
  tree::Element,
};

/// `"true"` / `"false"` in any ASCII case; anything else is unknown.
pub fn str_to_bool(text: Option<&str>) -> Option<bool> {
  let text = text?;
  if text.eq_ignore_ascii_case("true") {
    Some(true)
  } else if text.eq_ignore_ascii_case("false") {
    Some(false)
  } else {
    None
  }
}

/// A mandatory integer field.
pub fn parse_int(field: &'static str, text: Option<&str>) -> Result<i64> {
  let text = text.ok_or(Error::MissingField { field })?;
  text.trim().parse().map_err(|_| Error::InvalidNumber {
    field,
    value: text.to_string(),
  })
}

/// An optional number; malformed text is dropped with a debug event.
pub fn opt_number<T: FromStr>(field: &str, text: Option<&str>) -> Option<T> {
  let text = text?;
  match text.trim().parse() {
    Ok(n) => Some(n),
    Err(_) => {
      debug!(field, value = text, "discarding malformed number");
      None
    }
  }
}

/// A `<year>`/`<month>` node as the first day of that month. `year` is
/// required; `month` defaults to January.
pub fn parse_date(node: &Element) -> Result<NaiveDate> {
  let year = parse_int(
    "year",
    get_child(Some(node), "year", Lookup::Child).as_deref(),
  )?;
  let month = match get_child(Some(node), "month", Lookup::Child) {
    Some(month) => parse_int("month", Some(&month))?,
    None => 1,
  };
  i32::try_from(year)
    .ok()
    .zip(u32::try_from(month).ok())
    .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1))
    .ok_or(Error::InvalidDate { year, month })
}
