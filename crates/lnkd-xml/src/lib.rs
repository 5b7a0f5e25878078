//! XML binding for social-network API documents.
//!
//! Documents are parsed into an owned [`Element`] tree, then copied into the
//! records of `lnkd-core`. Optional fields are read through the tolerant
//! [`Accessor`] and never fail; the few required nodes are listed in
//! [`required`].
//!
//! ```ignore
//! let update = lnkd_xml::parse_update(xml, "CONN", &Options::default())?;
//! println!("{}", update.message());
//! ```

pub mod access;
pub mod coerce;
pub mod dispatch;
pub mod error;
pub mod options;
pub mod person;
pub mod profile;
pub mod required;
pub mod shapes;
pub mod tree;


use lnkd_core::{Update, profile::Profile};
use tracing::debug;

pub use self::{
  access::{Accessor, Lookup, get_child, unescape_entities},
  dispatch::{CreateUpdate, create_update, update_from_envelope},
  error::{Error, Result},
  options::Options,
  tree::Element,
};

/// Construct a record from a node of the tree.
pub trait FromNode: Sized {
  fn from_node(node: &Element, options: &Options) -> Result<Self>;
}

/// Parse a profile document: a `<person>` root or anything containing one.
pub fn parse_profile(xml: &str, options: &Options) -> Result<Profile> {
  Profile::from_node(&Element::parse(xml)?, options)
}

/// Parse a single `<update>` envelope, dispatching on `type_tag`.
pub fn parse_update(
  xml: &str,
  type_tag: &str,
  options: &Options,
) -> Result<Update> {
  create_update(&Element::parse(xml)?, type_tag, options)
}

/// Parse every `<update>` of a feed. The root may be a single `<update>` or
/// any element holding them (`<updates>`, `<network>`...). Each entry reads
/// its tag from `<update-type>` and succeeds or fails on its own; only an
/// unreadable document fails the call.
pub fn parse_updates(
  xml: &str,
  options: &Options,
) -> Result<Vec<Result<Update>>> {
  let root = Element::parse(xml)?;
  let entries: Vec<&Element> = if root.name() == "update" {
    vec![&root]
  } else {
    root.descendants().filter(|e| e.name() == "update").collect()
  };

  Ok(
    entries
      .into_iter()
      .enumerate()
      .map(|(index, entry)| {
        update_from_envelope(entry, options).inspect_err(|error| {
          debug!(index, %error, "skipping unreadable update");
        })
      })
      .collect(),
  )
}
