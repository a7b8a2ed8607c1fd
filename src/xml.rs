use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::bytes::Regex;
use thiserror::Error;
use tracing::debug;

static ENCODING_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?-u)^<\?xml\s[^>]*?\bencoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("static pattern")
});

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("bad attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("{0}")]
    Structure(String),
}

/// Owned element tree. Only what the hand-history format needs: names,
/// attributes, child elements and the text that precedes the first child.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Text content before the first child element. `None` for an empty element.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a `/`-separated path of child names, first match at each step.
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|step| !step.is_empty())
            .try_fold(self, |el, step| el.child(step))
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Element::text)
    }
}

/// Decode raw file bytes to text. A byte order mark wins, then the
/// `encoding` named in the XML declaration, then UTF-8. Undecodable bytes
/// become U+FFFD.
pub fn decode_document(bytes: &[u8]) -> String {
    let declared = ENCODING_DECL
        .captures(bytes)
        .and_then(|caps| Encoding::for_label(&caps[1]))
        // An ASCII-readable declaration cannot sit in a UTF-16 file.
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = declared.decode(bytes);
    if had_errors {
        debug!(encoding = used.name(), "replaced undecodable bytes");
    }
    text.into_owned()
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn check_name(name: &str, declared: &[String], scopes: &[Vec<String>]) -> Result<(), XmlError> {
    if !name.chars().next().is_some_and(is_name_start) {
        return Err(XmlError::Structure(format!("invalid name <{name}>")));
    }
    let Some((prefix, _)) = name.split_once(':') else {
        return Ok(());
    };
    let bound = prefix == "xml"
        || prefix == "xmlns"
        || declared.iter().chain(scopes.iter().flatten()).any(|p| p == prefix);
    if bound {
        Ok(())
    } else {
        Err(XmlError::Structure(format!("unbound prefix in {name}")))
    }
}

/// Build an element from its start tag. Returns the namespace prefixes the
/// tag declares alongside it; `scopes` holds those of the open ancestors.
fn open_element(
    start: &BytesStart,
    scopes: &[Vec<String>],
) -> Result<(Element, Vec<String>), XmlError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        if attr.value.contains(&b'<') {
            return Err(XmlError::Structure(format!("'<' in attribute value of <{name}>")));
        }
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    let declared: Vec<String> = attributes
        .iter()
        .filter_map(|(k, _)| k.strip_prefix("xmlns:"))
        .map(str::to_string)
        .collect();
    check_name(&name, &declared, scopes)?;
    for (key, _) in &attributes {
        check_name(key, &declared, scopes)?;
    }

    let el = Element {
        name,
        attributes,
        ..Default::default()
    };
    Ok((el, declared))
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(el) => {
            if el.children.is_empty() {
                el.text.get_or_insert_with(String::new).push_str(text);
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::Structure("text outside the document element".to_string())),
    }
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => {
            return Err(XmlError::Structure(
                "junk after the document element".to_string(),
            ))
        }
    }
    Ok(())
}

/// Parse a whole document into its root element.
pub fn parse_document(source: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(source);
    let mut stack: Vec<Element> = Vec::new();
    let mut scopes: Vec<Vec<String>> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::Structure(
                        "junk after the document element".to_string(),
                    ));
                }
                let (el, declared) = open_element(&start, &scopes)?;
                stack.push(el);
                scopes.push(declared);
            }
            Event::Empty(start) => {
                let (el, _) = open_element(&start, &scopes)?;
                close_element(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let Some(el) = stack.pop() else {
                    return Err(XmlError::Structure("unexpected closing tag".to_string()));
                };
                scopes.pop();
                close_element(&mut stack, &mut root, el)?;
            }
            Event::Text(text) => push_text(&mut stack, &text.unescape()?)?,
            Event::CData(data) => {
                let data = data.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&data))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Structure(format!(
            "unexpected end of document, <{}> is not closed",
            open.name
        )));
    }
    root.ok_or_else(|| XmlError::Structure("no document element".to_string()))
}
