//! Nodes each shape assumes are present.
//!
//! This table is the complete list of structural assumptions made while
//! building updates. A missing entry fails the whole record; everything not
//! listed here is fail-soft. Outside this table, only the envelope's
//! `timestamp`, date `year`, and the profile's `<person>` element are
//! required.

use lnkd_core::UpdateType;

use crate::{
  access::Accessor,
  error::{Error, Result},
  tree::Element,
};

/// Required under the envelope for every registered tag.
pub const CONTENT: &str = "update-content";

/// Paths relative to `update-content` that `ty` requires.
pub fn required_paths(ty: UpdateType) -> &'static [&'static str] {
  match ty {
    UpdateType::Shar => &["person", "person/current-share"],
    UpdateType::Qstn | UpdateType::Answ => &["question"],
    UpdateType::Jobp => &["job"],
    UpdateType::Conn
    | UpdateType::Ncon
    | UpdateType::Ccem
    | UpdateType::Stat
    | UpdateType::Virl
    | UpdateType::Jgrp
    | UpdateType::Apps
    | UpdateType::Appm
    | UpdateType::Picu
    | UpdateType::Prof
    | UpdateType::Prfx
    | UpdateType::Prec
    | UpdateType::Svpr => &["person"],
  }
}

/// Fail with the first required path missing under `content`.
pub fn check(ty: UpdateType, content: &Element) -> Result<()> {
  let a = Accessor::child(content);
  match required_paths(ty).iter().copied().find(|path| a.node_at(path).is_none()) {
    Some(path) => Err(Error::MissingRequired {
      shape: ty.as_str(),
      path,
    }),
    None => Ok(()),
  }
}

/// Resolve one required path for a constructor.
pub fn node<'a>(
  ty: UpdateType,
  content: &'a Element,
  path: &'static str,
) -> Result<&'a Element> {
  debug_assert!(
    required_paths(ty).contains(&path),
    "{path} is not listed as required for {ty}"
  );
  Accessor::child(content)
    .node_at(path)
    .ok_or(Error::MissingRequired {
      shape: ty.as_str(),
      path,
    })
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn every_type_requires_something() {
    for ty in UpdateType::iter() {
      assert!(!required_paths(ty).is_empty(), "{ty} has no required paths");
    }
  }

  #[test]
  fn check_reports_the_missing_path() {
    let content =
      Element::parse("<update-content><person/></update-content>").unwrap();
    assert!(check(UpdateType::Ncon, &content).is_ok());
    let err = check(UpdateType::Shar, &content).unwrap_err();
    assert!(matches!(err, Error::MissingRequired {
      shape: "SHAR",
      path:  "person/current-share",
    }));
    assert!(check(UpdateType::Qstn, &content).is_err());
  }
}
