//! Shapes about the member themself: new connections, profile changes, and
//! the bare-actor notifications.

use lnkd_core::{
  UpdateType,
  profile::Position,
  update::{Ccem, Conn, Ncon, Picu, Prfx, Prof},
};

use crate::{
  FromNode, Options,
  access::Accessor,
  error::Result,
  person::{people_in, person_from},
  required,
  tree::Element,
};

pub fn conn(content: &Element) -> Result<Conn> {
  let person = required::node(UpdateType::Conn, content, "person")?;
  Ok(Conn {
    person:      person_from(person),
    connections: people_in(person.find("connections")),
  })
}

pub fn ncon(content: &Element) -> Result<Ncon> {
  let person = required::node(UpdateType::Ncon, content, "person")?;
  Ok(Ncon {
    person: person_from(person),
  })
}

pub fn ccem(content: &Element) -> Result<Ccem> {
  let person = required::node(UpdateType::Ccem, content, "person")?;
  Ok(Ccem {
    person: person_from(person),
  })
}

pub fn picu(content: &Element) -> Result<Picu> {
  let person = required::node(UpdateType::Picu, content, "person")?;
  Ok(Picu {
    person: person_from(person),
  })
}

pub fn prfx(content: &Element) -> Result<Prfx> {
  let person = required::node(UpdateType::Prfx, content, "person")?;
  Ok(Prfx {
    person: person_from(person),
  })
}

/// Changed positions reuse the profile record, so a malformed date inside one
/// fails the update just as it would fail a profile, and they follow
/// [`Options::profile_lookup`].
pub fn prof(content: &Element, options: &Options) -> Result<Prof> {
  let person = required::node(UpdateType::Prof, content, "person")?;
  let positions = Accessor::child(person)
    .each("positions/position")
    .into_iter()
    .map(|p| Position::from_node(p.element(), options))
    .collect::<Result<Vec<_>>>()?;
  Ok(Prof {
    person: person_from(person),
    positions,
  })
}
