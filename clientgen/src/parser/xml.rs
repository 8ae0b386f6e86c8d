use indexmap::IndexMap;
use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::model::{Document, Format};
use crate::parser::Parser;
use crate::{Error, Result};

/// Root tag that marks an error payload.
const ERROR_ROOT: &str = "error";
const RESPONSE_ROOT: &str = "response";

/// Metadata attribute. `type="array"` turns an element into a list of its children.
const TYPE_ATTRIBUTE: &str = "type";
const ARRAY_TYPE: &str = "array";

/// Key that holds the content of a collapsed element.
const VALUE_KEY: &str = "value";

/// Deepest element nesting accepted. Conversion recurses once per level.
const MAX_DEPTH: usize = 128;

/// Schema-less XML parser.
///
/// The document is read into an element tree and then converted with a fixed set of rules:
///
/// - An element with `type="array"` becomes a [Document::List] of its children, tag names of the
///   children are ignored.
/// - An element with child elements becomes a [Document::Map] keyed by child tag name. Repeated
///   tags overwrite each other. Attributes other than `type` are added as [Document::Text]
///   entries.
/// - An element without child elements becomes [Document::Text] of its trimmed content, or a map
///   of its attributes plus `"value"` if it has attributes other than `type`.
/// - Inside a map, a child without child elements (or an array) collapses to
///   `{<attributes including type>, "value": <content>}`.
///
/// The root element's result is wrapped as `{"error": ..}` if the root tag is `error`, otherwise as
/// `{"response": ..}`. Elements nested deeper than 128 levels are rejected as malformed.
#[derive(Debug, Default, Copy, Clone)]
pub struct Xml;

impl Parser for Xml {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn parse(&self, text: &str) -> Result<Document> {
        let root = read_tree(text)?;
        trace!("parsed xml tree: {:#?}", root);
        let key = if root.name == ERROR_ROOT {
            ERROR_ROOT
        } else {
            RESPONSE_ROOT
        };
        Ok(Document::map([(key, body(root))]))
    }
}

#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    /// All character data directly inside this element, concatenated.
    text: String,
}

impl Element {
    fn is_array(&self) -> bool {
        self.attributes
            .iter()
            .any(|(key, value)| key == TYPE_ATTRIBUTE && value == ARRAY_TYPE)
    }

    fn is_compound(&self) -> bool {
        !self.children.is_empty() && !self.is_array()
    }

    fn has_data_attributes(&self) -> bool {
        self.attributes.iter().any(|(key, _)| key != TYPE_ATTRIBUTE)
    }
}

/// Converts an element that is not keyed by its own tag: the document root or an array member.
fn body(element: Element) -> Document {
    if element.is_array() {
        return Document::List(element.children.into_iter().map(body).collect());
    }
    if element.is_compound() {
        let mut map = attribute_map(element.attributes, false);
        for child in element.children {
            let key = child.name.clone();
            map.insert(key, keyed(child));
        }
        return Document::Map(map);
    }
    if element.has_data_attributes() {
        let mut map = attribute_map(element.attributes, false);
        map.insert(VALUE_KEY.to_string(), trimmed(&element.text));
        return Document::Map(map);
    }
    trimmed(&element.text)
}

/// Converts a child element stored under its tag name in the parent's map.
fn keyed(element: Element) -> Document {
    if element.is_compound() {
        return body(element);
    }
    let value = if element.is_array() {
        Document::List(element.children.into_iter().map(body).collect())
    } else {
        trimmed(&element.text)
    };
    let mut map = attribute_map(element.attributes, true);
    map.insert(VALUE_KEY.to_string(), value);
    Document::Map(map)
}

fn attribute_map(
    attributes: Vec<(String, String)>,
    include_type: bool,
) -> IndexMap<String, Document> {
    attributes
        .into_iter()
        .filter(|(key, _)| include_type || key != TYPE_ATTRIBUTE)
        .map(|(key, value)| (key, Document::Text(value)))
        .collect()
}

fn trimmed(text: &str) -> Document {
    Document::Text(text.trim().to_string())
}

fn read_tree(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Element> = vec![];
    let mut root: Option<Element> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                return Err(malformed(format!(
                    "{} (at byte {})",
                    err,
                    reader.buffer_position()
                )))
            }
        };
        match event {
            Event::Start(start) => {
                check_single_root(&root, &open)?;
                check_depth(&open)?;
                open.push(start_element(&start)?);
            }
            Event::Empty(start) => {
                check_single_root(&root, &open)?;
                check_depth(&open)?;
                let element = start_element(&start)?;
                close_element(element, &mut open, &mut root);
            }
            Event::End(_) => {
                // End tag names are checked by the reader itself.
                let element = open
                    .pop()
                    .ok_or_else(|| malformed("unexpected end tag"))?;
                close_element(element, &mut open, &mut root);
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(malformed)?;
                push_text(&text, &mut open)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data).map_err(malformed)?;
                push_text(text, &mut open)?;
            }
            Event::Eof => break,
            // Comments, declarations, processing instructions and doctype carry no data.
            _ => {}
        }
    }

    if let Some(element) = open.last() {
        return Err(malformed(format!("unclosed element <{}>", element.name)));
    }
    root.ok_or_else(|| malformed("no root element"))
}

fn start_element(start: &BytesStart) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(malformed)?
        .to_string();
    let mut attributes = vec![];
    for attribute in start.attributes() {
        let attribute = attribute.map_err(malformed)?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(malformed)?
            .to_string();
        let value = attribute.unescape_value().map_err(malformed)?.into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        ..Default::default()
    })
}

fn close_element(element: Element, open: &mut [Element], root: &mut Option<Element>) {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn check_single_root(root: &Option<Element>, open: &[Element]) -> Result<()> {
    if open.is_empty() && root.is_some() {
        return Err(malformed("more than one root element"));
    }
    Ok(())
}

fn check_depth(open: &[Element]) -> Result<()> {
    if open.len() >= MAX_DEPTH {
        return Err(malformed(format!(
            "elements nested deeper than {} levels",
            MAX_DEPTH
        )));
    }
    Ok(())
}

fn push_text(text: &str, open: &mut [Element]) -> Result<()> {
    match open.last_mut() {
        Some(element) => element.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(malformed("text outside of the root element")),
    }
    Ok(())
}

fn malformed(message: impl ToString) -> Error {
    Error::malformed(Format::Xml, message)
}
