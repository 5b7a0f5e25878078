//! Questions and answers. The actor lives inside `question`, so the only
//! required node is `question` itself.

use lnkd_core::{
  UpdateType,
  update::{Answ, Answer, Qstn, Question, QuestionCategory},
};

use crate::{
  access::Accessor,
  error::Result,
  person::person_at,
  required,
  tree::Element,
};

pub fn qstn(content: &Element) -> Result<Qstn> {
  let question = required::node(UpdateType::Qstn, content, "question")?;
  Ok(Qstn {
    question: question_from(question),
  })
}

pub fn answ(content: &Element) -> Result<Answ> {
  let question = required::node(UpdateType::Answ, content, "question")?;
  let answers = Accessor::child(question)
    .each("answers/answer")
    .into_iter()
    .map(|a| Answer {
      id:      a.text("id"),
      web_url: a.unescaped("web-url"),
      author:  person_at(a.element(), "author"),
    })
    .collect();
  Ok(Answ {
    question: question_from(question),
    answers,
  })
}

fn question_from(node: &Element) -> Question {
  let a = Accessor::child(node);
  Question {
    id:         a.text("id"),
    title:      a.unescaped("title"),
    web_url:    a.unescaped("web-url"),
    author:     person_at(node, "author"),
    categories: a
      .each("question-categories/question-category")
      .into_iter()
      .map(|c| QuestionCategory {
        code: c.text("code"),
        name: c.text("name"),
      })
      .collect(),
  }
}
