//! The person sub-record, the actor of nearly every update shape.

use serde::{Deserialize, Serialize};

/// Identity of a member as it appears inside update content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:          Option<String>,
  pub first_name:  Option<String>,
  pub last_name:   Option<String>,
  /// `first_name` and `last_name` joined by one space. An absent part is an
  /// empty token, so the space is always present.
  pub name:        String,
  pub headline:    Option<String>,
  /// From `site-standard-profile-request/url`.
  pub public_url:  Option<String>,
  pub picture_url: Option<String>,
}

impl Person {
  /// Join first and last name the way every record in this crate does.
  pub fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
  }

  pub fn source(&self) -> Source<'_> {
    Source {
      id:   self.id.as_deref(),
      name: &self.name,
    }
  }
}

/// The `(actor id, actor name)` pair reported by
/// [`Update::source`](crate::Update::source).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
  pub id:   Option<&'a str>,
  pub name: &'a str,
}

impl Source<'static> {
  /// Reported when a shape's actor node was absent.
  pub const ANONYMOUS: Source<'static> = Source { id: None, name: "" };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn join_keeps_the_space_for_missing_parts() {
    assert_eq!(Person::join_name(Some("John"), Some("Irving")), "John Irving");
    assert_eq!(Person::join_name(Some("John"), None), "John ");
    assert_eq!(Person::join_name(None, Some("Irving")), " Irving");
    assert_eq!(Person::join_name(None, None), " ");
  }
}
