//! The tolerant accessor. Every optional lookup goes through here.
//!
//! Nothing in this module fails. A missing node, a node without text, or a
//! lookup on an absent parent all produce `None` (or the caller's default),
//! so one missing optional field never aborts extraction of the rest.

use serde::{Deserialize, Serialize};

use crate::tree::Element;

/// How a tag name is resolved against a node.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lookup {
  /// First direct child with the tag.
  #[default]
  Child,
  /// First element with the tag anywhere below the node, in document order.
  Descendant,
}

impl Lookup {
  pub fn find<'a>(self, node: &'a Element, tag: &str) -> Option<&'a Element> {
    match self {
      Self::Child => node.find(tag),
      Self::Descendant => node.find_descendant(tag),
    }
  }

  pub fn find_all<'a>(self, node: &'a Element, tag: &str) -> Vec<&'a Element> {
    match self {
      Self::Child => node.find_all(tag).collect(),
      Self::Descendant => {
        node.descendants().filter(|e| e.name() == tag).collect()
      }
    }
  }
}

/// Text of the first `tag` under `node`, or `None` if the node is absent, has
/// no such child, or the child has no text.
pub fn get_child(
  node: Option<&Element>,
  tag: &str,
  lookup: Lookup,
) -> Option<String> {
  let found = lookup.find(node?, tag)?;
  found.text().filter(|t| !t.is_empty()).map(str::to_owned)
}

/// Decode entity references left in text that was encoded twice upstream.
///
/// Each `&...;` reference is decoded on its own; a bare `&` or an unknown
/// reference is kept as written and does not stop the rest from decoding.
pub fn unescape_entities(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut rest = text;
  while let Some(start) = rest.find('&') {
    out.push_str(&rest[..start]);
    let tail = &rest[start..];
    let decoded = tail.find(';').and_then(|end| {
      let reference = &tail[..=end];
      quick_xml::escape::unescape(reference)
        .ok()
        .map(|value| (reference.len(), value))
    });
    match decoded {
      Some((consumed, value)) => {
        out.push_str(&value);
        rest = &tail[consumed..];
      }
      None => {
        out.push('&');
        rest = &tail[1..];
      }
    }
  }
  out.push_str(rest);
  out
}

/// A node paired with a lookup mode.
///
/// Paths are `/`-separated tag names; each step resolves with the same mode.
#[derive(Debug, Clone, Copy)]
pub struct Accessor<'a> {
  node:   &'a Element,
  lookup: Lookup,
}

impl<'a> Accessor<'a> {
  pub fn new(node: &'a Element, lookup: Lookup) -> Self { Self { node, lookup } }

  /// Direct-child lookups, as used by every update shape.
  pub fn child(node: &'a Element) -> Self { Self::new(node, Lookup::Child) }

  pub fn element(&self) -> &'a Element { self.node }

  pub fn lookup(&self) -> Lookup { self.lookup }

  pub fn node(&self, tag: &str) -> Option<&'a Element> {
    self.lookup.find(self.node, tag)
  }

  pub fn node_at(&self, path: &str) -> Option<&'a Element> {
    path
      .split('/')
      .try_fold(self.node, |node, tag| self.lookup.find(node, tag))
  }

  /// The node at `path`, keeping this accessor's mode.
  pub fn at(&self, path: &str) -> Option<Accessor<'a>> {
    self.node_at(path).map(|node| Self::new(node, self.lookup))
  }

  /// Every node matching the last step of `path` under the node its parent
  /// steps resolve to, in document order.
  pub fn each(&self, path: &str) -> Vec<Accessor<'a>> {
    let (parent, tag) = match path.rsplit_once('/') {
      Some((parent, tag)) => (self.node_at(parent), tag),
      None => (Some(self.node), path),
    };
    parent
      .map(|p| self.lookup.find_all(p, tag))
      .unwrap_or_default()
      .into_iter()
      .map(|node| Self::new(node, self.lookup))
      .collect()
  }

  pub fn text(&self, path: &str) -> Option<String> {
    match path.rsplit_once('/') {
      Some((parent, tag)) => get_child(self.node_at(parent), tag, self.lookup),
      None => get_child(Some(self.node), path, self.lookup),
    }
  }

  pub fn text_or(&self, path: &str, default: &str) -> String {
    self.text(path).unwrap_or_else(|| default.to_string())
  }

  /// Like [`Accessor::text`] with one more round of entity decoding.
  pub fn unescaped(&self, path: &str) -> Option<String> {
    self.text(path).map(|t| unescape_entities(&t))
  }

  pub fn attr(&self, name: &str) -> Option<&'a str> { self.node.attr(name) }
}
