//! `FromNode` for the profile records.
//!
//! Profile lookups honour [`Options::profile_lookup`]; nested records inherit
//! the mode from the profile they were found in.

use chrono::NaiveDate;
use lnkd_core::profile::{
  Company, Education, Location, Position, Profile, Publication,
  RelationToViewer,
};

use crate::{
  FromNode, Options,
  access::Accessor,
  coerce::{opt_number, parse_date, str_to_bool},
  error::{Error, Result},
  shapes::share_from,
  tree::Element,
};

fn accessor<'a>(node: &'a Element, options: &Options) -> Accessor<'a> {
  Accessor::new(node, options.profile_lookup)
}

/// An optional `<year>`/`<month>` child. Present but malformed is an error.
fn date_at(a: &Accessor<'_>, tag: &str) -> Result<Option<NaiveDate>> {
  a.node(tag).map(parse_date).transpose()
}

/// Every node matching `path`, built with `T::from_node`.
fn list_of<T: FromNode>(
  a: &Accessor<'_>,
  path: &str,
  options: &Options,
) -> Result<Vec<T>> {
  a.each(path)
    .into_iter()
    .map(|item| T::from_node(item.element(), options))
    .collect()
}

/// A count element, falling back to the `total` attribute of
/// `<connections>`.
fn count_or_total(a: &Accessor<'_>, tag: &'static str) -> Option<u32> {
  opt_number(tag, a.text(tag).as_deref()).or_else(|| {
    opt_number("connections@total", a.at("connections")?.attr("total"))
  })
}

/// Members under `<connections>`, bare or wrapped in `<connection>`. Nested
/// profiles never capture XML.
fn connections(a: &Accessor<'_>, options: &Options) -> Result<Vec<Profile>> {
  let nested = Options {
    capture_xml: false,
    ..options.clone()
  };
  a.node("connections")
    .into_iter()
    .flat_map(Element::children)
    .filter_map(|child| match child.name() {
      "person" => Some(child),
      "connection" => child.find("person"),
      _ => None,
    })
    .map(|person| Profile::from_node(person, &nested))
    .collect()
}

/// Names from `<skills><skill><skill><name>` (or a flat `<skill><name>`).
/// Only direct children of the list count, so a nested `<skill>` is never
/// read twice.
fn names(a: &Accessor<'_>, list: &str, item: &str) -> Vec<String> {
  let nested_name = format!("{item}/name");
  a.node(list)
    .into_iter()
    .flat_map(|node| node.find_all(item))
    .filter_map(|node| {
      let entry = Accessor::new(node, a.lookup());
      entry.text(&nested_name).or_else(|| entry.text("name"))
    })
    .collect()
}

impl FromNode for Company {
  fn from_node(node: &Element, options: &Options) -> Result<Self> {
    let a = accessor(node, options);
    Ok(Company {
      id:       a.text("id"),
      name:     a.text("name"),
      kind:     a.text("type"),
      size:     a.text("size"),
      industry: a.text("industry"),
      ticker:   a.text("ticker"),
    })
  }
}

impl FromNode for Position {
  fn from_node(node: &Element, options: &Options) -> Result<Self> {
    let a = accessor(node, options);
    Ok(Position {
      id:         a.text("id"),
      title:      a.text("title"),
      summary:    a.text("summary"),
      start_date: date_at(&a, "start-date")?,
      end_date:   date_at(&a, "end-date")?,
      is_current: str_to_bool(a.text("is-current").as_deref()),
      company:    a
        .node("company")
        .map(|c| Company::from_node(c, options))
        .transpose()?,
    })
  }
}

impl FromNode for Education {
  fn from_node(node: &Element, options: &Options) -> Result<Self> {
    let a = accessor(node, options);
    Ok(Education {
      id:             a.text("id"),
      school_name:    a.text("school-name"),
      degree:         a.text("degree"),
      field_of_study: a.text("field-of-study"),
      start_date:     date_at(&a, "start-date")?,
      end_date:       date_at(&a, "end-date")?,
      activities:     a.text("activities"),
      notes:          a.text("notes"),
    })
  }
}

impl FromNode for Location {
  fn from_node(node: &Element, options: &Options) -> Result<Self> {
    let a = accessor(node, options);
    Ok(Location {
      name:         a.text("name"),
      country_code: a.text("country/code"),
    })
  }
}

impl FromNode for Publication {
  fn from_node(node: &Element, options: &Options) -> Result<Self> {
    let a = accessor(node, options);
    Ok(Publication {
      id:             a.text("id"),
      title:          a.text("title"),
      publisher_name: a.text("publisher/name"),
      date:           date_at(&a, "date")?,
      url:            a.unescaped("url"),
      summary:        a.text("summary"),
    })
  }
}

impl FromNode for RelationToViewer {
  fn from_node(node: &Element, options: &Options) -> Result<Self> {
    let a = accessor(node, options);
    Ok(RelationToViewer {
      distance:                opt_number("distance", a.text("distance").as_deref()),
      num_related_connections: count_or_total(&a, "num-related-connections"),
      connections:             connections(&a, options)?,
    })
  }
}

impl FromNode for Profile {
  /// `node` is the `<person>` element itself or any ancestor of one.
  fn from_node(node: &Element, options: &Options) -> Result<Self> {
    let person = if node.name() == "person" {
      node
    } else {
      node
        .find_descendant("person")
        .ok_or(Error::MissingRequired {
          shape: "profile",
          path:  "person",
        })?
    };
    let a = accessor(person, options);

    Ok(Profile {
      id:                     a.text("id"),
      first_name:             a.text("first-name"),
      last_name:              a.text("last-name"),
      headline:               a.text("headline"),
      location:               a
        .node("location")
        .map(|l| Location::from_node(l, options))
        .transpose()?,
      industry:               a.text("industry"),
      distance:               opt_number("distance", a.text("distance").as_deref()),
      relation_to_viewer:     a
        .node("relation-to-viewer")
        .map(|r| RelationToViewer::from_node(r, options))
        .transpose()?,
      summary:                a.text("summary"),
      specialties:            a.text("specialties"),
      proposal_comments:      a.text("proposal-comments"),
      associations:           a.text("associations"),
      interests:              a.text("interests"),
      honors:                 a.text("honors"),
      public_url:             a.unescaped("public-profile-url"),
      private_url:            a.unescaped("site-standard-profile-request/url"),
      picture_url:            a.unescaped("picture-url"),
      current_status:         a.unescaped("current-status"),
      current_share:          a.node("current-share").map(share_from),
      num_connections:        count_or_total(&a, "num-connections"),
      num_connections_capped: str_to_bool(
        a.text("num-connections-capped").as_deref(),
      ),
      languages:              names(&a, "languages", "language"),
      skills:                 names(&a, "skills", "skill"),
      connections:            connections(&a, options)?,
      positions:              list_of(&a, "positions/position", options)?,
      educations:             list_of(&a, "educations/education", options)?,
      publications:           list_of(&a, "publications/publication", options)?,
      xml:                    if options.capture_xml {
        Some(person.to_xml()?)
      } else {
        None
      },
    })
  }
}
