//! The update dispatcher: envelope fields plus a payload chosen by tag.

use std::str::FromStr;

use lnkd_core::{Payload, Update, UpdateType};
use tracing::{debug, trace};

use crate::{
  Options,
  access::Accessor,
  coerce::{opt_number, parse_int, str_to_bool},
  error::{Error, Result},
  required, shapes,
  tree::Element,
};

/// Build an update from its `<update>` envelope.
///
/// `type_tag` picks the payload shape. A tag without a registered shape still
/// yields an update, with [`Payload::Unknown`] and no content checks.
pub fn create_update(
  envelope: &Element,
  type_tag: &str,
  options: &Options,
) -> Result<Update> {
  let a = Accessor::child(envelope);
  let timestamp = parse_int("timestamp", a.text("timestamp").as_deref())?;

  let payload = match UpdateType::from_str(type_tag) {
    Ok(ty) => {
      trace!(%ty, "dispatching update");
      let content = a.node(required::CONTENT).ok_or(Error::MissingRequired {
        shape: ty.as_str(),
        path:  required::CONTENT,
      })?;
      required::check(ty, content)?;
      shapes::construct(ty, content, options)?
    }
    Err(_) => {
      debug!(tag = type_tag, "no shape registered for update type");
      Payload::Unknown {
        tag: type_tag.to_string(),
      }
    }
  };

  Ok(Update {
    timestamp,
    update_key:     a.text("update-key"),
    update_type:    type_tag.to_string(),
    is_commentable: str_to_bool(a.text("is-commentable").as_deref()),
    is_likeable:    str_to_bool(a.text("is-likeable").as_deref()),
    is_liked:       str_to_bool(a.text("is-liked").as_deref()),
    num_likes:      opt_number("num-likes", a.text("num-likes").as_deref()),
    update_fields:  a
      .each("updated-fields/update-field")
      .into_iter()
      .filter_map(|f| f.text("name"))
      .collect(),
    payload,
  })
}

/// Like [`create_update`], with the tag read from the envelope's own
/// `<update-type>` element.
pub fn update_from_envelope(
  envelope: &Element,
  options: &Options,
) -> Result<Update> {
  let tag = Accessor::child(envelope)
    .text("update-type")
    .ok_or(Error::MissingField {
      field: "update-type",
    })?;
  create_update(envelope, &tag, options)
}

/// `Update::create(node, tag, options)`.
pub trait CreateUpdate: Sized {
  fn create(envelope: &Element, type_tag: &str, options: &Options)
  -> Result<Self>;
}

impl CreateUpdate for Update {
  fn create(
    envelope: &Element,
    type_tag: &str,
    options: &Options,
  ) -> Result<Self> {
    create_update(envelope, type_tag, options)
  }
}
