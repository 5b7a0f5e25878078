//! Profile records: the `<person>` document and its nested entities.
//!
//! These are flat records of optional scalars plus zero or more nested
//! children. None of them take part in update dispatch; PROF updates reuse
//! [`Position`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{person::Person, update::Share};

// ─── Leaf records ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
  pub id:       Option<String>,
  pub name:     Option<String>,
  /// The `<type>` element, e.g. "Public Company".
  pub kind:     Option<String>,
  pub size:     Option<String>,
  pub industry: Option<String>,
  pub ticker:   Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
  pub id:         Option<String>,
  pub title:      Option<String>,
  pub summary:    Option<String>,
  pub start_date: Option<NaiveDate>,
  pub end_date:   Option<NaiveDate>,
  pub is_current: Option<bool>,
  pub company:    Option<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
  pub id:             Option<String>,
  pub school_name:    Option<String>,
  pub degree:         Option<String>,
  pub field_of_study: Option<String>,
  pub start_date:     Option<NaiveDate>,
  pub end_date:       Option<NaiveDate>,
  pub activities:     Option<String>,
  pub notes:          Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
  pub name:         Option<String>,
  pub country_code: Option<String>,
}

/// A publication listed on a profile. Authors are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
  pub id:             Option<String>,
  pub title:          Option<String>,
  pub publisher_name: Option<String>,
  pub date:           Option<NaiveDate>,
  pub url:            Option<String>,
  pub summary:        Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationToViewer {
  pub distance:                Option<i32>,
  /// Falls back to the `total` attribute of `<connections>`.
  pub num_related_connections: Option<u32>,
  pub connections:             Vec<Profile>,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// A member profile as returned by the profile API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
  pub id:                     Option<String>,
  pub first_name:             Option<String>,
  pub last_name:              Option<String>,
  pub headline:               Option<String>,
  pub location:               Option<Location>,
  pub industry:               Option<String>,
  pub distance:               Option<i32>,
  pub relation_to_viewer:     Option<RelationToViewer>,
  pub summary:                Option<String>,
  pub specialties:            Option<String>,
  pub proposal_comments:      Option<String>,
  pub associations:           Option<String>,
  pub interests:              Option<String>,
  pub honors:                 Option<String>,
  /// From `public-profile-url`.
  pub public_url:             Option<String>,
  /// From `site-standard-profile-request/url`.
  pub private_url:            Option<String>,
  pub picture_url:            Option<String>,
  pub current_status:         Option<String>,
  pub current_share:          Option<Share>,
  /// Falls back to the `total` attribute of `<connections>`.
  pub num_connections:        Option<u32>,
  pub num_connections_capped: Option<bool>,
  pub languages:              Vec<String>,
  pub skills:                 Vec<String>,
  pub connections:            Vec<Profile>,
  pub positions:              Vec<Position>,
  pub educations:             Vec<Education>,
  pub publications:           Vec<Publication>,
  /// The source document, re-serialized, when capture was requested.
  pub xml:                    Option<String>,
}

impl Profile {
  pub fn name(&self) -> String {
    Person::join_name(self.first_name.as_deref(), self.last_name.as_deref())
  }

  /// The positions flagged `is-current`, in document order.
  pub fn current_positions(&self) -> impl Iterator<Item = &Position> {
    self.positions.iter().filter(|p| p.is_current == Some(true))
  }

  /// Project the profile onto the person sub-record used by updates.
  pub fn to_person(&self) -> Person {
    Person {
      id:          self.id.clone(),
      first_name:  self.first_name.clone(),
      last_name:   self.last_name.clone(),
      name:        self.name(),
      headline:    self.headline.clone(),
      public_url:  self.private_url.clone(),
      picture_url: self.picture_url.clone(),
    }
  }
}
