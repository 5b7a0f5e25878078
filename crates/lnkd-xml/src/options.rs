//! Extraction options.

use lnkd_core::LinkStyle;
use serde::{Deserialize, Serialize};

use crate::access::Lookup;

/// Knobs for building records. Every field has a default, so an empty TOML
/// table or no configuration at all is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
  /// How profile records resolve their fields. `descendant` matches any
  /// element with the tag below the node, not just direct children.
  pub profile_lookup: Lookup,
  /// Keep the re-serialized source XML on top-level profiles.
  pub capture_xml:    bool,
  /// Link format for rendered update messages.
  pub link_style:     LinkStyle,
}
