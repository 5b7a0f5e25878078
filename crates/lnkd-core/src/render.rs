//! Human-readable summaries of update payloads.
//!
//! Each shape renders the actor plus what they did. Where a URL is known the
//! related name or title is wrapped in a link, formatted per [`LinkStyle`].
//! Document text is escaped for the chosen format, since names and URLs come
//! straight from the remote document.

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use crate::{
  person::Person,
  update::{
    Activity, Answ, Appm, Apps, Ccem, Conn, Jgrp, Jobp, Ncon, Payload, Picu,
    Prec, Prfx, Prof, Qstn, Recommendation, Shar, Stat, Svpr, Virl,
  },
};

/// How links are written into rendered text.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
  /// `<a href="url">text</a>`
  #[default]
  Html,
  /// `[text](url)`
  Markdown,
  /// The text alone.
  Plain,
}

impl LinkStyle {
  /// Wrap `text` in a link to `url`; without a URL only the text is written.
  pub fn link(self, text: &str, url: Option<&str>) -> String {
    match (self, url) {
      (Self::Html, Some(url)) => {
        format!("<a href=\"{}\">{}</a>", escape(url), escape(text))
      }
      (Self::Markdown, Some(url)) => {
        format!("[{}]({})", markdown_text(text), markdown_url(url))
      }
      _ => self.text(text),
    }
  }

  /// Document text written outside a link.
  pub fn text(self, text: &str) -> String {
    match self {
      Self::Html => escape(text).into_owned(),
      Self::Markdown | Self::Plain => text.to_string(),
    }
  }
}

fn markdown_text(text: &str) -> String {
  text
    .replace('\\', "\\\\")
    .replace('[', "\\[")
    .replace(']', "\\]")
}

/// Spaces and parentheses would end the link target early.
fn markdown_url(url: &str) -> String {
  url
    .replace(' ', "%20")
    .replace('(', "%28")
    .replace(')', "%29")
}

/// One capability shared by every update shape.
pub trait Render {
  fn render_with(&self, style: LinkStyle) -> String;

  fn render(&self) -> String { self.render_with(LinkStyle::default()) }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn person(p: &Person, style: LinkStyle) -> String {
  style.link(&p.name, p.public_url.as_deref())
}

fn someone(p: Option<&Person>, style: LinkStyle) -> String {
  p.map(|p| person(p, style))
    .unwrap_or_else(|| "A member".to_string())
}

fn people<'a>(
  list: impl IntoIterator<Item = &'a Person>,
  style: LinkStyle,
) -> String {
  list
    .into_iter()
    .map(|p| person(p, style))
    .collect::<Vec<_>>()
    .join(", ")
}

fn counterparts(list: &[Recommendation], style: LinkStyle) -> String {
  people(list.iter().filter_map(|r| r.counterpart.as_ref()), style)
}

fn activities(actor: &str, list: &[Activity], style: LinkStyle) -> String {
  let bodies: Vec<String> = list
    .iter()
    .filter_map(|a| a.body.as_deref())
    .map(|body| style.text(body))
    .collect();
  if bodies.is_empty() {
    format!("{actor} has new application activity.")
  } else {
    format!("{actor}: {}", bodies.join("; "))
  }
}

// ─── Shapes ──────────────────────────────────────────────────────────────────

impl Render for Conn {
  fn render_with(&self, style: LinkStyle) -> String {
    let actor = person(&self.person, style);
    if self.connections.is_empty() {
      format!("{actor} has a new connection.")
    } else {
      format!(
        "{actor} is now connected to {}.",
        people(&self.connections, style)
      )
    }
  }
}

impl Render for Ncon {
  fn render_with(&self, style: LinkStyle) -> String {
    format!("{} is now a connection.", person(&self.person, style))
  }
}

impl Render for Ccem {
  fn render_with(&self, style: LinkStyle) -> String {
    format!("{} has joined LinkedIn.", person(&self.person, style))
  }
}

impl Render for Shar {
  fn render_with(&self, style: LinkStyle) -> String {
    let share = &self.share;
    let what = match (
      self.sharer.picture_url.as_deref(),
      share.content_url.as_deref(),
      share.content_title.as_deref(),
    ) {
      (Some(picture), ..) => style.link("a picture", Some(picture)),
      (None, Some(url), title) => style.link(title.unwrap_or(url), Some(url)),
      (None, None, Some(title)) => style.text(title),
      (None, None, None) => match share.comment.as_deref() {
        Some(comment) => format!("\"{}\"", style.text(comment)),
        None => "an update".to_string(),
      },
    };
    let mut out = format!("{} shared {what}.", person(&self.sharer, style));
    if let Some(author) = &share.author
      && author.source() != self.sharer.source()
    {
      out.push_str(&format!(" Originally shared by {}.", person(author, style)));
    }
    out
  }
}

impl Render for Stat {
  fn render_with(&self, style: LinkStyle) -> String {
    let actor = person(&self.person, style);
    match self.current_status.as_deref() {
      Some(status) => format!("{actor} {}", style.text(status)),
      None => format!("{actor} cleared their status."),
    }
  }
}

impl Render for Virl {
  fn render_with(&self, style: LinkStyle) -> String {
    let verb = match self.action_code.as_deref().map(str::to_ascii_uppercase) {
      Some(code) if code == "LIKE" => "likes",
      Some(code) if code == "CMNT" || code == "COMMENT" => "commented on",
      Some(code) if code == "SHAR" || code == "SHARE" => "shared",
      _ => "reacted to",
    };
    let original = self.original.as_ref();
    let whose = match original.and_then(|o| o.person.as_ref()) {
      Some(owner) => format!("{}'s update", person(owner, style)),
      None => "an update".to_string(),
    };
    let mut out = format!("{} {verb} {whose}", person(&self.person, style));
    if let Some(share) = original.and_then(|o| o.share.as_ref())
      && let Some(url) = share.content_url.as_deref()
    {
      let title = share.content_title.as_deref().unwrap_or(url);
      out.push_str(&format!(": {}", style.link(title, Some(url))));
    }
    out.push('.');
    out
  }
}

impl Render for Jgrp {
  fn render_with(&self, style: LinkStyle) -> String {
    let actor = person(&self.person, style);
    let names: Vec<String> = self
      .groups
      .iter()
      .filter_map(|g| {
        g.name
          .as_deref()
          .map(|name| style.link(name, g.url.as_deref()))
      })
      .collect();
    match names.as_slice() {
      [] => format!("{actor} joined a group."),
      [one] => format!("{actor} joined the group {one}."),
      many => format!("{actor} joined the groups {}.", many.join(", ")),
    }
  }
}

impl Render for Qstn {
  fn render_with(&self, style: LinkStyle) -> String {
    let q = &self.question;
    let title = q.title.as_deref().unwrap_or("(untitled)");
    format!(
      "{} asked a question: {}",
      someone(q.author.as_ref(), style),
      style.link(title, q.web_url.as_deref())
    )
  }
}

impl Render for Answ {
  fn render_with(&self, style: LinkStyle) -> String {
    let q = &self.question;
    let first = self.answers.first();
    let title = q.title.as_deref().unwrap_or("(untitled)");
    let url = first
      .and_then(|a| a.web_url.as_deref())
      .or(q.web_url.as_deref());
    format!(
      "{} answered the question: {}",
      someone(first.and_then(|a| a.author.as_ref()), style),
      style.link(title, url)
    )
  }
}

impl Render for Apps {
  fn render_with(&self, style: LinkStyle) -> String {
    activities(&person(&self.person, style), &self.activities, style)
  }
}

impl Render for Appm {
  fn render_with(&self, style: LinkStyle) -> String {
    activities(&person(&self.person, style), &self.activities, style)
  }
}

impl Render for Picu {
  fn render_with(&self, style: LinkStyle) -> String {
    format!(
      "{} has a new {}.",
      person(&self.person, style),
      style.link("profile photo", self.person.picture_url.as_deref())
    )
  }
}

impl Render for Prof {
  fn render_with(&self, style: LinkStyle) -> String {
    let actor = person(&self.person, style);
    let role = self.positions.first().and_then(|p| {
      let company = p.company.as_ref()?.name.as_deref()?;
      Some((p.title.as_deref()?, company))
    });
    match role {
      Some((title, company)) => format!(
        "{actor} is now {} at {}.",
        style.text(title),
        style.text(company)
      ),
      None => format!("{actor} has an updated profile."),
    }
  }
}

impl Render for Prfx {
  fn render_with(&self, style: LinkStyle) -> String {
    format!(
      "{} has an updated extended profile.",
      person(&self.person, style)
    )
  }
}

impl Render for Prec {
  fn render_with(&self, style: LinkStyle) -> String {
    let actor = person(&self.person, style);
    let names = counterparts(&self.recommendations, style);
    if names.is_empty() {
      format!("{actor} made a recommendation.")
    } else {
      format!("{actor} recommended {names}.")
    }
  }
}

impl Render for Svpr {
  fn render_with(&self, style: LinkStyle) -> String {
    let actor = person(&self.person, style);
    let names = counterparts(&self.recommendations, style);
    if names.is_empty() {
      format!("{actor} received a recommendation.")
    } else {
      format!("{actor} was recommended by {names}.")
    }
  }
}

impl Render for Jobp {
  fn render_with(&self, style: LinkStyle) -> String {
    let job = &self.job;
    let title = style.link(
      job.title.as_deref().unwrap_or("a position"),
      job.url.as_deref(),
    );
    let mut out = format!(
      "{} posted a job: {title}",
      someone(job.poster.as_ref(), style)
    );
    if let Some(company) = job.company.as_deref() {
      out.push_str(&format!(" at {}", style.text(company)));
    }
    out.push('.');
    out
  }
}

impl Render for Payload {
  fn render_with(&self, style: LinkStyle) -> String {
    match self {
      Self::Conn(u) => u.render_with(style),
      Self::Ncon(u) => u.render_with(style),
      Self::Ccem(u) => u.render_with(style),
      Self::Shar(u) => u.render_with(style),
      Self::Stat(u) => u.render_with(style),
      Self::Virl(u) => u.render_with(style),
      Self::Jgrp(u) => u.render_with(style),
      Self::Qstn(u) => u.render_with(style),
      Self::Answ(u) => u.render_with(style),
      Self::Apps(u) => u.render_with(style),
      Self::Appm(u) => u.render_with(style),
      Self::Picu(u) => u.render_with(style),
      Self::Prof(u) => u.render_with(style),
      Self::Prfx(u) => u.render_with(style),
      Self::Prec(u) => u.render_with(style),
      Self::Svpr(u) => u.render_with(style),
      Self::Jobp(u) => u.render_with(style),
      Self::Unknown { tag } => {
        format!("[unsupported update type {}]", style.text(tag))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    profile::{Company, Position},
    update::{Answer, Group, Job, OriginalUpdate, Question, Share},
  };

  fn member(id: &str, first: &str, last: &str, url: Option<&str>) -> Person {
    Person {
      id: Some(id.into()),
      first_name: Some(first.into()),
      last_name: Some(last.into()),
      name: Person::join_name(Some(first), Some(last)),
      public_url: url.map(Into::into),
      ..Default::default()
    }
  }

  #[test]
  fn link_styles() {
    let url = Some("http://x");
    assert_eq!(LinkStyle::Html.link("a", url), "<a href=\"http://x\">a</a>");
    assert_eq!(LinkStyle::Markdown.link("a", url), "[a](http://x)");
    assert_eq!(LinkStyle::Plain.link("a", url), "a");
    assert_eq!(LinkStyle::Html.link("a", None), "a");
  }

  #[test]
  fn conn_lists_every_connection() {
    let conn = Conn {
      person:      member("1", "John", "Irving", Some("http://ji")),
      connections: vec![
        member("2", "Paul", "Auster", None),
        member("3", "Gertrude", "Stein", None),
      ],
    };
    assert_eq!(
      conn.render_with(LinkStyle::Plain),
      "John Irving is now connected to Paul Auster, Gertrude Stein."
    );
    assert_eq!(
      conn.render(),
      "<a href=\"http://ji\">John Irving</a> is now connected to Paul \
       Auster, Gertrude Stein."
    );
  }

  #[test]
  fn shar_mentions_original_sharer() {
    let shar = Shar {
      sharer: member("1", "Ann", "Lee", None),
      share:  Share {
        content_url: Some("http://article".into()),
        content_title: Some("Article".into()),
        author: Some(member("2", "Bo", "Kim", None)),
        ..Default::default()
      },
    };
    assert_eq!(
      shar.render_with(LinkStyle::Markdown),
      "Ann Lee shared [Article](http://article). Originally shared by Bo Kim."
    );
  }

  #[test]
  fn shar_by_the_author_omits_attribution() {
    let ann = member("1", "Ann", "Lee", None);
    let shar = Shar {
      sharer: ann.clone(),
      share:  Share {
        comment: Some("hello".into()),
        author: Some(ann),
        ..Default::default()
      },
    };
    assert_eq!(shar.render_with(LinkStyle::Plain), "Ann Lee shared \"hello\".");
  }

  #[test]
  fn virl_describes_the_action() {
    let virl = Virl {
      person:      member("1", "Ann", "Lee", None),
      action_code: Some("LIKE".into()),
      original:    Some(OriginalUpdate {
        person: Some(member("2", "Bo", "Kim", None)),
        ..Default::default()
      }),
    };
    assert_eq!(
      virl.render_with(LinkStyle::Plain),
      "Ann Lee likes Bo Kim's update."
    );
    assert_eq!(
      Virl::default().render_with(LinkStyle::Plain),
      " reacted to an update."
    );
  }

  #[test]
  fn jgrp_pluralizes() {
    let mut jgrp = Jgrp {
      person: member("1", "Ann", "Lee", None),
      groups: vec![Group {
        name: Some("Rustaceans".into()),
        ..Default::default()
      }],
    };
    assert_eq!(
      jgrp.render_with(LinkStyle::Plain),
      "Ann Lee joined the group Rustaceans."
    );
    jgrp.groups.push(Group {
      name: Some("Ferris Fans".into()),
      ..Default::default()
    });
    assert_eq!(
      jgrp.render_with(LinkStyle::Plain),
      "Ann Lee joined the groups Rustaceans, Ferris Fans."
    );
  }

  #[test]
  fn prof_names_new_position() {
    let prof = Prof {
      person:    member("1", "Ann", "Lee", None),
      positions: vec![Position {
        title: Some("CTO".into()),
        company: Some(Company {
          name: Some("Acme".into()),
          ..Default::default()
        }),
        ..Default::default()
      }],
    };
    assert_eq!(prof.render_with(LinkStyle::Plain), "Ann Lee is now CTO at Acme.");
  }

  fn named(name: &str) -> Person {
    Person {
      name: name.into(),
      ..Default::default()
    }
  }

  fn recommending(people: &[Person]) -> Vec<Recommendation> {
    people
      .iter()
      .map(|p| Recommendation {
        counterpart: Some(p.clone()),
        ..Default::default()
      })
      .collect()
  }

  #[test]
  fn html_escapes_text_and_href() {
    let ncon = Ncon {
      person: member(
        "1",
        "<script>x</script>",
        "",
        Some("http://a/\" onclick=\"evil()"),
      ),
    };
    assert_eq!(
      ncon.render(),
      "<a href=\"http://a/&quot; onclick=&quot;evil()\">&lt;script&gt;x\
       &lt;/script&gt; </a> is now a connection."
    );
    assert_eq!(LinkStyle::Html.link("R&D", None), "R&amp;D");
    assert_eq!(LinkStyle::Plain.link("R&D", None), "R&D");

    let stat = Stat {
      person:         member("1", "Ann", "Lee", None),
      current_status: Some("<b>hiring</b>".into()),
    };
    assert_eq!(stat.render(), "Ann Lee &lt;b&gt;hiring&lt;/b&gt;");
  }

  #[test]
  fn markdown_escapes_link_syntax() {
    assert_eq!(
      LinkStyle::Markdown.link("a [b]", Some("http://x/(y) z")),
      "[a \\[b\\]](http://x/%28y%29%20z)"
    );
  }

  #[test]
  fn conn_without_connections() {
    let conn = Conn {
      person:      member("1", "Ann", "Lee", None),
      connections: Vec::new(),
    };
    assert_eq!(
      conn.render_with(LinkStyle::Plain),
      "Ann Lee has a new connection."
    );
  }

  #[test]
  fn bare_actor_shapes() {
    let ann = member("1", "Ann", "Lee", Some("http://al"));
    assert_eq!(
      Ncon { person: ann.clone() }.render_with(LinkStyle::Markdown),
      "[Ann Lee](http://al) is now a connection."
    );
    assert_eq!(
      Ccem { person: ann.clone() }.render_with(LinkStyle::Plain),
      "Ann Lee has joined LinkedIn."
    );
    assert_eq!(
      Prfx { person: ann.clone() }.render_with(LinkStyle::Plain),
      "Ann Lee has an updated extended profile."
    );
    assert_eq!(
      Prof {
        person:    ann,
        positions: Vec::new(),
      }
      .render_with(LinkStyle::Plain),
      "Ann Lee has an updated profile."
    );
  }

  #[test]
  fn stat_with_and_without_status() {
    let mut stat = Stat {
      person:         member("1", "Ann", "Lee", None),
      current_status: Some("is hiring".into()),
    };
    assert_eq!(stat.render_with(LinkStyle::Plain), "Ann Lee is hiring");
    stat.current_status = None;
    assert_eq!(
      stat.render_with(LinkStyle::Plain),
      "Ann Lee cleared their status."
    );
  }

  #[test]
  fn shar_prefers_the_picture() {
    let mut sharer = member("1", "Ann", "Lee", None);
    sharer.picture_url = Some("http://pic".into());
    let shar = Shar {
      sharer,
      share: Share {
        content_url: Some("http://article".into()),
        content_title: Some("Article".into()),
        ..Default::default()
      },
    };
    assert_eq!(
      shar.render_with(LinkStyle::Markdown),
      "Ann Lee shared [a picture](http://pic)."
    );
  }

  #[test]
  fn shar_attribution_without_ids_compares_names() {
    let shar = Shar {
      sharer: named("Ann Lee"),
      share:  Share {
        content_title: Some("Article".into()),
        author: Some(named("Bo Kim")),
        ..Default::default()
      },
    };
    assert_eq!(
      shar.render_with(LinkStyle::Plain),
      "Ann Lee shared Article. Originally shared by Bo Kim."
    );
  }

  #[test]
  fn qstn_links_the_question() {
    let qstn = Qstn {
      question: Question {
        title: Some("Which crate?".into()),
        web_url: Some("http://q".into()),
        author: Some(member("2", "Bo", "Kim", None)),
        ..Default::default()
      },
    };
    assert_eq!(
      qstn.render_with(LinkStyle::Markdown),
      "Bo Kim asked a question: [Which crate?](http://q)"
    );
    assert_eq!(
      Qstn::default().render_with(LinkStyle::Plain),
      "A member asked a question: (untitled)"
    );
  }

  #[test]
  fn answ_prefers_the_answer_url() {
    let mut answ = Answ {
      question: Question {
        title: Some("Which crate?".into()),
        web_url: Some("http://q".into()),
        ..Default::default()
      },
      answers:  vec![Answer {
        web_url: Some("http://a1".into()),
        author: Some(member("2", "Bo", "Kim", None)),
        ..Default::default()
      }],
    };
    assert_eq!(
      answ.render_with(LinkStyle::Markdown),
      "Bo Kim answered the question: [Which crate?](http://a1)"
    );
    answ.answers[0].web_url = None;
    assert_eq!(
      answ.render_with(LinkStyle::Markdown),
      "Bo Kim answered the question: [Which crate?](http://q)"
    );
  }

  #[test]
  fn application_activity() {
    let apps = Apps {
      person:     member("1", "Ann", "Lee", None),
      activities: vec![
        Activity {
          body: Some("played chess".into()),
          ..Default::default()
        },
        Activity {
          body: Some("won".into()),
          ..Default::default()
        },
      ],
    };
    assert_eq!(
      apps.render_with(LinkStyle::Plain),
      "Ann Lee: played chess; won"
    );
    let appm = Appm {
      person:     member("1", "Ann", "Lee", None),
      activities: Vec::new(),
    };
    assert_eq!(
      appm.render_with(LinkStyle::Plain),
      "Ann Lee has new application activity."
    );
  }

  #[test]
  fn picu_links_the_photo() {
    let mut person = member("1", "Ann", "Lee", None);
    person.picture_url = Some("http://p.jpg".into());
    assert_eq!(
      Picu { person }.render_with(LinkStyle::Markdown),
      "Ann Lee has a new [profile photo](http://p.jpg)."
    );
  }

  #[test]
  fn recommendations_name_counterparts() {
    let ann = member("1", "Ann", "Lee", None);
    let prec = Prec {
      person:          ann.clone(),
      recommendations: recommending(&[member("2", "Bo", "Kim", None)]),
    };
    assert_eq!(
      prec.render_with(LinkStyle::Plain),
      "Ann Lee recommended Bo Kim."
    );
    let svpr = Svpr {
      person:          ann.clone(),
      recommendations: recommending(&[
        member("2", "Bo", "Kim", None),
        member("3", "Cy", "Dee", None),
      ]),
    };
    assert_eq!(
      svpr.render_with(LinkStyle::Plain),
      "Ann Lee was recommended by Bo Kim, Cy Dee."
    );
    let empty = Svpr {
      person:          ann.clone(),
      recommendations: Vec::new(),
    };
    assert_eq!(
      empty.render_with(LinkStyle::Plain),
      "Ann Lee received a recommendation."
    );
    let none_given = Prec {
      person:          ann,
      recommendations: Vec::new(),
    };
    assert_eq!(
      none_given.render_with(LinkStyle::Plain),
      "Ann Lee made a recommendation."
    );
  }

  #[test]
  fn jobp_links_the_title() {
    let jobp = Jobp {
      job: Job {
        title: Some("Rust Engineer".into()),
        company: Some("Acme".into()),
        poster: Some(member("2", "Bo", "Kim", None)),
        url: Some("http://j".into()),
        ..Default::default()
      },
    };
    assert_eq!(
      jobp.render_with(LinkStyle::Markdown),
      "Bo Kim posted a job: [Rust Engineer](http://j) at Acme."
    );
    let bare = Jobp {
      job: Job {
        title: Some("Rust Engineer".into()),
        ..Default::default()
      },
    };
    assert_eq!(
      bare.render_with(LinkStyle::Plain),
      "A member posted a job: Rust Engineer."
    );
  }

  #[test]
  fn unknown_payload_has_placeholder() {
    let payload = Payload::Unknown { tag: "CMPY".into() };
    assert_eq!(payload.render(), "[unsupported update type CMPY]");
  }
}
