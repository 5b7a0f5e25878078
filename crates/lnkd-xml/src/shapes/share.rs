//! Shares, status updates, and viral activity on someone else's update.

use lnkd_core::{
  UpdateType,
  update::{OriginalUpdate, Share, Shar, Stat, Virl},
};

use crate::{
  access::Accessor,
  error::Result,
  person::{person_at, person_from},
  required,
  tree::Element,
};

/// A `current-share` node. Every field is optional.
pub fn share_from(node: &Element) -> Share {
  let a = Accessor::child(node);
  Share {
    id:               a.text("id"),
    timestamp:        a.text("timestamp"),
    comment:          a.unescaped("comment"),
    content_url:      a.unescaped("content/submitted-url"),
    content_title:    a.unescaped("content/title"),
    service_provider: a.text("source/service-provider/name"),
    application:      a.text("source/application/name"),
    author:           person_at(node, "author"),
  }
}

pub fn shar(content: &Element) -> Result<Shar> {
  let person = required::node(UpdateType::Shar, content, "person")?;
  let share =
    required::node(UpdateType::Shar, content, "person/current-share")?;
  Ok(Shar {
    sharer: person_from(person),
    share:  share_from(share),
  })
}

pub fn stat(content: &Element) -> Result<Stat> {
  let person = required::node(UpdateType::Stat, content, "person")?;
  Ok(Stat {
    person:         person_from(person),
    current_status: Accessor::child(person).unescaped("current-status"),
  })
}

/// Only the actor is required; anything under `update-action` may be
/// missing.
pub fn virl(content: &Element) -> Result<Virl> {
  let person = required::node(UpdateType::Virl, content, "person")?;
  let a = Accessor::child(content);
  Ok(Virl {
    person:      person_from(person),
    action_code: a.text("update-action/action/code"),
    original:    a
      .node_at("update-action/original-update")
      .map(original_update),
  })
}

fn original_update(node: &Element) -> OriginalUpdate {
  let a = Accessor::child(node);
  OriginalUpdate {
    update_key:  a.text("update-key"),
    update_type: a.text("update-type"),
    person:      person_at(node, "update-content/person"),
    share:       a
      .node_at("update-content/person/current-share")
      .map(share_from),
  }
}
