//! Building the person sub-record shared by every shape.

use lnkd_core::Person;

use crate::{access::Accessor, tree::Element};

/// Copy identity fields out of a `<person>`-like node (`person`, `author`,
/// `recommendee`, `job-poster`, ...). Every field is optional.
pub fn person_from(node: &Element) -> Person {
  let a = Accessor::child(node);
  let first_name = a.text("first-name");
  let last_name = a.text("last-name");
  Person {
    id: a.text("id"),
    name: Person::join_name(first_name.as_deref(), last_name.as_deref()),
    first_name,
    last_name,
    headline: a.text("headline"),
    public_url: a.unescaped("site-standard-profile-request/url"),
    picture_url: a.unescaped("picture-url"),
  }
}

/// The person at `path` below `node`, if that node exists.
pub fn person_at(node: &Element, path: &str) -> Option<Person> {
  Accessor::child(node).node_at(path).map(person_from)
}

/// Members listed under a `<connections>`-style node. Both bare `<person>`
/// children and `<connection><person>` wrappers are accepted, in document
/// order.
pub fn people_in(list: Option<&Element>) -> Vec<Person> {
  list
    .into_iter()
    .flat_map(Element::children)
    .filter_map(|child| match child.name() {
      "person" => Some(child),
      "connection" => child.find("person"),
      _ => None,
    })
    .map(person_from)
    .collect()
}
