//! Job postings. The actor is the job poster, which may be absent.

use lnkd_core::{
  UpdateType,
  update::{Job, Jobp},
};

use crate::{
  access::Accessor,
  error::Result,
  person::person_at,
  required,
  tree::Element,
};

pub fn jobp(content: &Element) -> Result<Jobp> {
  let job = required::node(UpdateType::Jobp, content, "job")?;
  let a = Accessor::child(job);
  Ok(Jobp {
    job: Job {
      id:      a.text("id"),
      title:   a.unescaped("position/title"),
      company: a.unescaped("company/name"),
      poster:  person_at(job, "job-poster"),
      url:     a.unescaped("site-job-request/url"),
    },
  })
}
