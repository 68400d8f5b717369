//! Response document parsing into an [`XmlElement`] tree.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::namespace::{Namespace, QName};
use super::tree::XmlElement;

/// Parses a fully buffered XML document.
///
/// ## Summary
/// Builds the element tree of the document, resolving namespace prefixes
/// against the declarations in scope. Unknown prefixes resolve to no
/// namespace and keep their prefix. Whitespace-only text between child
/// elements is dropped; leaf text is kept exactly.
///
/// ## Errors
/// Returns an error if the XML is malformed, has no root element, or has
/// more than one root element.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_document(xml: &[u8]) -> ParseResult<XmlElement> {
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    // (prefix, uri); the empty prefix is the default namespace.
    let mut namespaces: Vec<(String, String)> = Vec::new();
    let mut open: Vec<(XmlElement, usize)> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let (element, declared) = open_element(e, &mut namespaces)?;
                open.push((element, declared));
            }
            Ok(Event::Empty(ref e)) => {
                let (element, declared) = open_element(e, &mut namespaces)?;
                namespaces.truncate(namespaces.len() - declared);
                attach(element, &mut open, &mut root).map_err(|e| e.at(reader.buffer_position()))?;
            }
            Ok(Event::End(ref e)) => {
                let Some((mut element, declared)) = open.pop() else {
                    let qname = e.name();
                    let name = std::str::from_utf8(qname.as_ref())?;
                    return Err(ParseError::new(
                        ParseErrorKind::Malformed,
                        format!("</{name}> closes nothing"),
                    )
                    .at(reader.buffer_position()));
                };
                namespaces.truncate(namespaces.len() - declared);
                element.clear_blank_text();
                attach(element, &mut open, &mut root).map_err(|e| e.at(reader.buffer_position()))?;
            }
            Ok(Event::Text(ref e)) => {
                if let Some((element, _)) = open.last_mut() {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    element.push_text(&decoded);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some((element, _)) = open.last_mut() {
                    let text = std::str::from_utf8(e.as_ref())?;
                    element.push_text(text);
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                if let Some((element, _)) = open.last_mut() {
                    let name = reader.decoder().decode(e.as_ref())?;
                    element.push_text(&resolve_reference(&name)?);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::from(e).at(reader.error_position())),
            _ => {}
        }
        buf.clear();
    }

    if let Some((element, _)) = open.last() {
        return Err(ParseError::unclosed_element(&element.qualified_name()));
    }

    root.ok_or_else(ParseError::no_root)
}

/// Builds an element from a start tag, pushing its namespace declarations.
/// Returns the element and how many declarations were pushed.
fn open_element(
    e: &BytesStart<'_>,
    namespaces: &mut Vec<(String, String)>,
) -> ParseResult<(XmlElement, usize)> {
    let mut attributes = Vec::new();
    let mut declared = 0;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(raw)?.into_owned();
        if let Some(prefix) = key.strip_prefix("xmlns:") {
            namespaces.push((prefix.to_owned(), value));
            declared += 1;
        } else if key == "xmlns" {
            namespaces.push((String::new(), value));
            declared += 1;
        } else {
            attributes.push((key.to_owned(), value));
        }
    }

    let name_bytes = e.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;
    let (prefix, local_name) = match name.split_once(':') {
        Some((prefix, local)) => (prefix, local),
        None => ("", name),
    };

    let namespace = namespaces
        .iter()
        .rev()
        .find(|(p, _)| p == prefix)
        .map_or(Namespace::NONE, |(_, uri)| Namespace::from(uri.clone()));

    let mut element = XmlElement::with_name(
        QName::new(namespace, local_name.to_owned()),
        (!prefix.is_empty()).then(|| prefix.to_owned()),
    );
    for (key, value) in attributes {
        element.set_attr(key, value);
    }

    Ok((element, declared))
}

fn attach(
    element: XmlElement,
    open: &mut [(XmlElement, usize)],
    root: &mut Option<XmlElement>,
) -> ParseResult<()> {
    if let Some((parent, _)) = open.last_mut() {
        parent.push_child(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(ParseError::second_root(&element.qualified_name()))
    }
}

/// Resolves a character or predefined entity reference (`name` without `&`/`;`).
fn resolve_reference(name: &str) -> ParseResult<String> {
    if let Some(number) = name.strip_prefix('#') {
        let value = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => number.parse::<u32>(),
        }
        .map_err(|err| {
            tracing::warn!(error = ?err, value = %number, "Invalid numeric character reference");
            ParseError::invalid_reference(name)
        })?;

        return char::from_u32(value)
            .filter(|_| is_valid_xml_char(value))
            .map(String::from)
            .ok_or_else(|| ParseError::invalid_reference(name));
    }

    quick_xml::escape::resolve_predefined_entity(name)
        .map(str::to_owned)
        .ok_or_else(|| ParseError::invalid_reference(name))
}

#[must_use]
fn is_valid_xml_char(value: u32) -> bool {
    matches!(
        value,
        0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x0001_0000..=0x0010_FFFF
    )
}
