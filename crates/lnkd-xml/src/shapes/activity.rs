//! Group memberships and application activity.

use lnkd_core::{
  UpdateType,
  update::{Activity, Appm, Apps, Group, Jgrp},
};

use crate::{
  access::Accessor,
  error::Result,
  person::person_from,
  required,
  tree::Element,
};

pub fn jgrp(content: &Element) -> Result<Jgrp> {
  let person = required::node(UpdateType::Jgrp, content, "person")?;
  let groups = Accessor::child(person)
    .each("member-groups/member-group")
    .into_iter()
    .map(|g| Group {
      id:   g.text("id"),
      name: g.text("name"),
      url:  g.unescaped("site-group-request/url"),
    })
    .collect();
  Ok(Jgrp {
    person: person_from(person),
    groups,
  })
}

pub fn apps(content: &Element) -> Result<Apps> {
  let person = required::node(UpdateType::Apps, content, "person")?;
  Ok(Apps {
    person:     person_from(person),
    activities: activities(person),
  })
}

pub fn appm(content: &Element) -> Result<Appm> {
  let person = required::node(UpdateType::Appm, content, "person")?;
  Ok(Appm {
    person:     person_from(person),
    activities: activities(person),
  })
}

fn activities(person: &Element) -> Vec<Activity> {
  Accessor::child(person)
    .each("person-activities/activity")
    .into_iter()
    .map(|a| Activity {
      app_id: a.text("app-id"),
      body:   a.unescaped("body"),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn groups_in_document_order() {
    let c = Element::parse(
      "<update-content><person>
        <member-groups>
          <member-group><id>1</id><name>Rustaceans</name>
            <site-group-request><url>http://g/1</url></site-group-request>
          </member-group>
          <member-group><id>2</id></member-group>
        </member-groups>
      </person></update-content>",
    )
    .unwrap();
    let jgrp = jgrp(&c).unwrap();
    assert_eq!(jgrp.groups.len(), 2);
    assert_eq!(jgrp.groups[0].url.as_deref(), Some("http://g/1"));
    assert_eq!(jgrp.groups[1].name, None);
  }

  #[test]
  fn activity_bodies_are_unescaped() {
    let c = Element::parse(
      "<update-content><person>
        <person-activities>
          <activity><app-id>1001</app-id><body>&amp;lt;b&amp;gt;hi</body></activity>
        </person-activities>
      </person></update-content>",
    )
    .unwrap();
    let apps = apps(&c).unwrap();
    assert_eq!(apps.activities, vec![Activity {
      app_id: Some("1001".into()),
      body:   Some("<b>hi".into()),
    }]);
    assert!(appm(&Element::parse("<update-content/>").unwrap()).is_err());
  }
}
