//! An owned XML element tree built from `quick-xml` events.
//!
//! The tree keeps element names (prefix stripped), attributes, and text; it
//! drops comments, processing instructions, and whitespace-only text.
//! Adjacent text and CDATA chunks inside one element are merged first and
//! trimmed once the element closes, so whitespace between chunks survives.

use std::slice;

use quick_xml::{
  Reader, Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
  name:       String,
  attributes: Vec<(String, String)>,
  children:   Vec<Node>,
}

// ─── Reading ─────────────────────────────────────────────────────────────────

impl Element {
  /// Parse `xml` and return its root element.
  pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
      match reader.read_event() {
        Ok(Event::Start(ref e)) => stack.push(Element::from_start(e)?),
        Ok(Event::Empty(ref e)) => {
          let element = Element::from_start(e)?;
          attach(&mut stack, &mut root, element);
        }
        Ok(Event::End(_)) => {
          if let Some(mut element) = stack.pop() {
            element.trim_text();
            attach(&mut stack, &mut root, element);
          }
        }
        Ok(Event::Text(ref e)) => {
          let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
          push_text(&mut stack, &text);
        }
        Ok(Event::CData(e)) => {
          let raw = e.into_inner();
          push_text(&mut stack, &String::from_utf8_lossy(&raw));
        }
        Ok(Event::Eof) => break,
        Err(e) => return Err(Error::Xml(e.to_string())),
        _ => {}
      }
    }

    if let Some(open) = stack.last() {
      return Err(Error::Xml(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or(Error::EmptyDocument)
  }

  fn from_start(start: &BytesStart<'_>) -> Result<Element> {
    let qname = start.name();
    let mut element = Element::new(local_name(qname.as_ref()));
    for attr in start.attributes() {
      let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
      let value = attr
        .unescape_value()
        .map_err(|e| Error::Xml(e.to_string()))?;
      element
        .attributes
        .push((local_name(attr.key.as_ref()), value.into_owned()));
    }
    Ok(element)
  }

  /// Trim merged text children, dropping any left empty.
  fn trim_text(&mut self) {
    self.children.retain_mut(|child| match child {
      Node::Text(text) => {
        let trimmed = text.trim();
        if trimmed.len() != text.len() {
          *text = trimmed.to_string();
        }
        !text.is_empty()
      }
      Node::Element(_) => true,
    });
  }
}

/// Strip a `prefix:` if present.
fn local_name(name: &[u8]) -> String {
  let local = match name.iter().rposition(|&b| b == b':') {
    Some(pos) => &name[pos + 1..],
    None => name,
  };
  String::from_utf8_lossy(local).into_owned()
}

/// Hang a finished element under its parent, or make it the root. Content
/// after the first root element is ignored.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
  match stack.last_mut() {
    Some(parent) => parent.children.push(Node::Element(element)),
    None => {
      if root.is_none() {
        *root = Some(element);
      }
    }
  }
}

fn push_text(stack: &mut [Element], text: &str) {
  let Some(parent) = stack.last_mut() else {
    return;
  };
  if text.is_empty() {
    return;
  }
  match parent.children.last_mut() {
    Some(Node::Text(existing)) => existing.push_str(text),
    _ => parent.children.push(Node::Text(text.to_string())),
  }
}

// ─── Building ────────────────────────────────────────────────────────────────

impl Element {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Default::default()
    }
  }

  pub fn with_attr(
    mut self,
    name: impl Into<String>,
    value: impl Into<String>,
  ) -> Self {
    self.attributes.push((name.into(), value.into()));
    self
  }

  pub fn with_child(mut self, child: Element) -> Self {
    self.children.push(Node::Element(child));
    self
  }

  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.children.push(Node::Text(text.into()));
    self
  }
}

// ─── Navigation ──────────────────────────────────────────────────────────────

impl Element {
  pub fn name(&self) -> &str { &self.name }

  pub fn attr(&self, name: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|(k, _)| k == name)
      .map(|(_, v)| v.as_str())
  }

  /// The element's own text: its first text child, if any.
  pub fn text(&self) -> Option<&str> {
    self.children.iter().find_map(|c| match c {
      Node::Text(t) => Some(t.as_str()),
      Node::Element(_) => None,
    })
  }

  /// Direct child elements, in document order.
  pub fn children(&self) -> impl Iterator<Item = &Element> {
    self.children.iter().filter_map(|c| match c {
      Node::Element(e) => Some(e),
      Node::Text(_) => None,
    })
  }

  /// First direct child named `tag`.
  pub fn find(&self, tag: &str) -> Option<&Element> {
    self.children().find(|e| e.name == tag)
  }

  /// Every direct child named `tag`.
  pub fn find_all<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Element> {
    self.children().filter(move |e| e.name == tag)
  }

  /// Every element below this one, pre-order, excluding `self`.
  pub fn descendants(&self) -> Descendants<'_> {
    Descendants {
      stack: vec![self.children.iter()],
    }
  }

  /// First element named `tag` anywhere below this one, in document order.
  pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
    self.descendants().find(|e| e.name == tag)
  }
}

pub struct Descendants<'a> {
  stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
  type Item = &'a Element;

  fn next(&mut self) -> Option<&'a Element> {
    while let Some(top) = self.stack.last_mut() {
      match top.next() {
        Some(Node::Element(element)) => {
          self.stack.push(element.children.iter());
          return Some(element);
        }
        Some(Node::Text(_)) => {}
        None => {
          self.stack.pop();
        }
      }
    }
    None
  }
}

// ─── Writing ─────────────────────────────────────────────────────────────────

impl Element {
  /// Serialize the tree back to XML text.
  pub fn to_xml(&self) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    self.write(&mut writer)?;
    String::from_utf8(writer.into_inner())
      .map_err(|e| Error::Xml(format!("invalid UTF-8: {e}")))
  }

  fn write(&self, w: &mut Writer<Vec<u8>>) -> Result<()> {
    let mut start = BytesStart::new(self.name.as_str());
    for (k, v) in &self.attributes {
      start.push_attribute((k.as_str(), v.as_str()));
    }
    if self.children.is_empty() {
      return write_event(w, Event::Empty(start));
    }
    write_event(w, Event::Start(start))?;
    for child in &self.children {
      match child {
        Node::Element(e) => e.write(w)?,
        Node::Text(t) => write_event(w, Event::Text(BytesText::new(t)))?,
      }
    }
    write_event(w, Event::End(BytesEnd::new(self.name.as_str())))
  }
}

fn write_event(w: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
  w.write_event(event).map_err(|e| Error::Xml(e.to_string()))
}
