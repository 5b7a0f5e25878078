//! Recommendations given (PREC) and service-provider recommendations
//! received (SVPR).

use lnkd_core::{
  UpdateType,
  update::{Prec, Recommendation, Svpr},
};

use crate::{
  access::Accessor,
  error::Result,
  person::{person_at, person_from},
  required,
  tree::Element,
};

pub fn prec(content: &Element) -> Result<Prec> {
  let person = required::node(UpdateType::Prec, content, "person")?;
  Ok(Prec {
    person:          person_from(person),
    recommendations: recommendations(
      person,
      "recommendations-given/recommendation",
      "recommendee",
    ),
  })
}

pub fn svpr(content: &Element) -> Result<Svpr> {
  let person = required::node(UpdateType::Svpr, content, "person")?;
  Ok(Svpr {
    person:          person_from(person),
    recommendations: recommendations(
      person,
      "recommendations-received/recommendation",
      "recommender",
    ),
  })
}

fn recommendations(
  person: &Element,
  path: &str,
  counterpart: &str,
) -> Vec<Recommendation> {
  Accessor::child(person)
    .each(path)
    .into_iter()
    .map(|r| Recommendation {
      id:          r.text("id"),
      kind:        r.text("recommendation-type/code"),
      snippet:     r.unescaped("recommendation-snippet"),
      counterpart: person_at(r.element(), counterpart),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counterpart_depends_on_direction() {
    let c = Element::parse(
      "<update-content><person>
        <recommendations-given>
          <recommendation>
            <id>r1</id>
            <recommendation-type><code>colleague</code></recommendation-type>
            <recommendee><first-name>Ada</first-name><last-name>L</last-name></recommendee>
          </recommendation>
        </recommendations-given>
        <recommendations-received>
          <recommendation>
            <id>r2</id>
            <recommender><first-name>Bo</first-name></recommender>
          </recommendation>
        </recommendations-received>
      </person></update-content>",
    )
    .unwrap();

    let prec = prec(&c).unwrap();
    assert_eq!(prec.recommendations.len(), 1);
    assert_eq!(prec.recommendations[0].kind.as_deref(), Some("colleague"));
    assert_eq!(
      prec.recommendations[0].counterpart.as_ref().map(|p| p.name.as_str()),
      Some("Ada L")
    );

    let svpr = svpr(&c).unwrap();
    assert_eq!(svpr.recommendations[0].id.as_deref(), Some("r2"));
    assert_eq!(
      svpr.recommendations[0].counterpart.as_ref().map(|p| p.name.as_str()),
      Some("Bo ")
    );
  }
}
