//! Activity-stream updates: the envelope and its polymorphic payload.
//!
//! The registry of known update shapes is [`UpdateType`]. A tag that does not
//! parse into an `UpdateType` is kept as [`Payload::Unknown`] rather than being
//! dropped, so the envelope is still usable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
  person::{Person, Source},
  profile::Position,
  render::{LinkStyle, Render},
};

// ─── Registry ────────────────────────────────────────────────────────────────

/// Every update type tag with a registered constructor.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UpdateType {
  /// A connection made a new connection.
  Conn,
  /// Someone became a connection of the viewer.
  Ncon,
  /// An address-book contact joined the network.
  Ccem,
  /// A member shared or reshared an item.
  Shar,
  /// A status update.
  Stat,
  /// Viral activity: a like or comment on another update.
  Virl,
  /// A member joined a group.
  Jgrp,
  /// A question was asked.
  Qstn,
  /// A question was answered.
  Answ,
  /// Application activity from a connection.
  Apps,
  /// Application activity from the member.
  Appm,
  /// A new profile picture.
  Picu,
  /// A profile change.
  Prof,
  /// An extended profile change.
  Prfx,
  /// A member gave recommendations.
  Prec,
  /// A member received service-provider recommendations.
  Svpr,
  /// A job was posted.
  Jobp,
}

impl UpdateType {
  pub fn as_str(self) -> &'static str { self.into() }
}

// ─── Shared sub-records ──────────────────────────────────────────────────────

/// A share, as found under `current-share`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
  pub id:               Option<String>,
  pub timestamp:        Option<String>,
  pub comment:          Option<String>,
  /// `content/submitted-url`.
  pub content_url:      Option<String>,
  /// `content/title`.
  pub content_title:    Option<String>,
  /// `source/service-provider/name`.
  pub service_provider: Option<String>,
  /// `source/application/name`.
  pub application:      Option<String>,
  /// The original sharer.
  pub author:           Option<Person>,
}

/// The update a VIRL update reacts to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalUpdate {
  pub update_key:  Option<String>,
  pub update_type: Option<String>,
  pub person:      Option<Person>,
  /// The original person's `current-share`, author included.
  pub share:       Option<Share>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
  pub id:   Option<String>,
  pub name: Option<String>,
  /// `site-group-request/url`.
  pub url:  Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCategory {
  pub code: Option<String>,
  pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:         Option<String>,
  pub title:      Option<String>,
  pub web_url:    Option<String>,
  pub author:     Option<Person>,
  pub categories: Vec<QuestionCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
  pub id:      Option<String>,
  pub web_url: Option<String>,
  pub author:  Option<Person>,
}

/// One entry of `person-activities`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
  pub app_id: Option<String>,
  pub body:   Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
  pub id:          Option<String>,
  /// `recommendation-type/code`.
  pub kind:        Option<String>,
  pub snippet:     Option<String>,
  /// The recommendee for PREC, the recommender for SVPR.
  pub counterpart: Option<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
  pub id:      Option<String>,
  /// `position/title`.
  pub title:   Option<String>,
  /// `company/name`.
  pub company: Option<String>,
  pub poster:  Option<Person>,
  /// `site-job-request/url`.
  pub url:     Option<String>,
}

// ─── Shape variants ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conn {
  pub person:      Person,
  /// The newly connected members, in document order.
  pub connections: Vec<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ncon {
  pub person: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ccem {
  pub person: Person,
}

/// SHAR is the one shape whose actor is not called `person`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shar {
  pub sharer: Person,
  pub share:  Share,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
  pub person:         Person,
  pub current_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Virl {
  pub person:      Person,
  /// `update-action/action/code`, e.g. `LIKE`.
  pub action_code: Option<String>,
  pub original:    Option<OriginalUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jgrp {
  pub person: Person,
  pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qstn {
  pub question: Question,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answ {
  pub question: Question,
  pub answers:  Vec<Answer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apps {
  pub person:     Person,
  pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appm {
  pub person:     Person,
  pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picu {
  pub person: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prof {
  pub person:    Person,
  pub positions: Vec<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prfx {
  pub person: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prec {
  pub person:          Person,
  pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Svpr {
  pub person:          Person,
  pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jobp {
  pub job: Job,
}

// ─── Payload ─────────────────────────────────────────────────────────────────

/// The type-specific content of an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "UPPERCASE")]
pub enum Payload {
  Conn(Conn),
  Ncon(Ncon),
  Ccem(Ccem),
  Shar(Shar),
  Stat(Stat),
  Virl(Virl),
  Jgrp(Jgrp),
  Qstn(Qstn),
  Answ(Answ),
  Apps(Apps),
  Appm(Appm),
  Picu(Picu),
  Prof(Prof),
  Prfx(Prfx),
  Prec(Prec),
  Svpr(Svpr),
  Jobp(Jobp),
  /// The tag has no registered constructor.
  Unknown { tag: String },
}

impl Payload {
  /// The registered type, or `None` for [`Payload::Unknown`].
  pub fn update_type(&self) -> Option<UpdateType> {
    Some(match self {
      Self::Conn(_) => UpdateType::Conn,
      Self::Ncon(_) => UpdateType::Ncon,
      Self::Ccem(_) => UpdateType::Ccem,
      Self::Shar(_) => UpdateType::Shar,
      Self::Stat(_) => UpdateType::Stat,
      Self::Virl(_) => UpdateType::Virl,
      Self::Jgrp(_) => UpdateType::Jgrp,
      Self::Qstn(_) => UpdateType::Qstn,
      Self::Answ(_) => UpdateType::Answ,
      Self::Apps(_) => UpdateType::Apps,
      Self::Appm(_) => UpdateType::Appm,
      Self::Picu(_) => UpdateType::Picu,
      Self::Prof(_) => UpdateType::Prof,
      Self::Prfx(_) => UpdateType::Prfx,
      Self::Prec(_) => UpdateType::Prec,
      Self::Svpr(_) => UpdateType::Svpr,
      Self::Jobp(_) => UpdateType::Jobp,
      Self::Unknown { .. } => return None,
    })
  }

  /// The type tag this payload was built for.
  pub fn tag(&self) -> &str {
    match self {
      Self::Unknown { tag } => tag,
      other => other.update_type().map(UpdateType::as_str).unwrap_or_default(),
    }
  }

  /// The person sub-record holding the actor of this shape.
  ///
  /// Which field holds the actor is spelled out per variant. `None` means the
  /// actor node was absent in a shape where it is optional, or the payload is
  /// [`Payload::Unknown`].
  pub fn actor(&self) -> Option<&Person> {
    match self {
      Self::Conn(u) => Some(&u.person),
      Self::Ncon(u) => Some(&u.person),
      Self::Ccem(u) => Some(&u.person),
      Self::Shar(u) => Some(&u.sharer),
      Self::Stat(u) => Some(&u.person),
      Self::Virl(u) => Some(&u.person),
      Self::Jgrp(u) => Some(&u.person),
      Self::Qstn(u) => u.question.author.as_ref(),
      Self::Answ(u) => u.answers.first().and_then(|a| a.author.as_ref()),
      Self::Apps(u) => Some(&u.person),
      Self::Appm(u) => Some(&u.person),
      Self::Picu(u) => Some(&u.person),
      Self::Prof(u) => Some(&u.person),
      Self::Prfx(u) => Some(&u.person),
      Self::Prec(u) => Some(&u.person),
      Self::Svpr(u) => Some(&u.person),
      Self::Jobp(u) => u.job.poster.as_ref(),
      Self::Unknown { .. } => None,
    }
  }

  /// Actor id and name. An unregistered tag reports itself as both.
  pub fn source(&self) -> Source<'_> {
    match self {
      Self::Unknown { tag } => Source {
        id:   Some(tag.as_str()),
        name: tag,
      },
      other => other.actor().map(Person::source).unwrap_or(Source::ANONYMOUS),
    }
  }
}

// ─── Update envelope ─────────────────────────────────────────────────────────

/// One entry of the activity stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
  /// Milliseconds since the Unix epoch.
  pub timestamp:      i64,
  pub update_key:     Option<String>,
  /// The tag the update was dispatched on, registered or not.
  pub update_type:    String,
  pub is_commentable: Option<bool>,
  pub is_likeable:    Option<bool>,
  pub is_liked:       Option<bool>,
  pub num_likes:      Option<u64>,
  /// Names of changed profile fields, in document order.
  pub update_fields:  Vec<String>,
  pub payload:        Payload,
}

impl Update {
  /// The payload, or `None` when the tag is unregistered.
  pub fn content(&self) -> Option<&Payload> {
    match self.payload {
      Payload::Unknown { .. } => None,
      ref payload => Some(payload),
    }
  }

  pub fn source(&self) -> Source<'_> { self.payload.source() }

  /// The timestamp as a UTC instant, if it is in range.
  pub fn posted_at(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(self.timestamp)
  }

  pub fn message(&self) -> String { self.payload.render() }

  pub fn message_with(&self, style: LinkStyle) -> String {
    self.payload.render_with(style)
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use super::*;

  fn envelope(payload: Payload) -> Update {
    Update {
      timestamp: 1_285_966_221_000,
      update_key: None,
      update_type: payload.tag().to_string(),
      is_commentable: None,
      is_likeable: None,
      is_liked: None,
      num_likes: None,
      update_fields: Vec::new(),
      payload,
    }
  }

  #[test]
  fn tags_round_trip_through_strum() {
    for ty in UpdateType::iter() {
      assert_eq!(UpdateType::from_str(ty.as_str()).unwrap(), ty);
      assert_eq!(ty.as_str().len(), 4);
      assert_eq!(ty.as_str(), ty.as_str().to_uppercase());
    }
    assert!(UpdateType::from_str("conn").is_err());
    assert!(UpdateType::from_str("CMPY").is_err());
  }

  #[test]
  fn unknown_payload_reports_tag_as_source() {
    let update = envelope(Payload::Unknown { tag: "CMPY".into() });
    assert!(update.content().is_none());
    assert_eq!(update.source(), Source {
      id:   Some("CMPY"),
      name: "CMPY",
    });
    assert_eq!(update.payload.tag(), "CMPY");
  }

  #[test]
  fn shar_actor_is_the_sharer() {
    let sharer = Person {
      id: Some("s1".into()),
      name: "Taylor Singletary".into(),
      ..Default::default()
    };
    let update = envelope(Payload::Shar(Shar {
      sharer,
      share: Share::default(),
    }));
    assert_eq!(update.source().id, Some("s1"));
    assert_eq!(update.source().name, "Taylor Singletary");
    assert_eq!(update.payload.tag(), "SHAR");
  }

  #[test]
  fn missing_optional_actor_is_anonymous() {
    let update = envelope(Payload::Qstn(Qstn::default()));
    assert!(update.content().is_some());
    assert_eq!(update.source(), Source::ANONYMOUS);
  }

  #[test]
  fn posted_at_reads_milliseconds() {
    let update = envelope(Payload::Ncon(Ncon::default()));
    let at = update.posted_at().unwrap();
    assert_eq!(at.timestamp(), 1_285_966_221);
  }

  #[test]
  fn payload_serializes_with_type_tag() {
    let json =
      serde_json::to_value(Payload::Ncon(Ncon::default())).unwrap();
    assert_eq!(json["type"], "NCON");
    assert!(json["data"]["person"].is_object());
  }
}
