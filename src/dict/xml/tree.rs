//! Generic attributed element tree.
//!
//! The dictionary transformers never see XML events. They work on an
//! [`Element`] tree produced by a [`TreeBuilder`], which keeps them independent
//! of the XML engine underneath.

use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// An XML element with its attributes, trimmed text content, and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Concatenated, trimmed character data. `None` when empty.
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the value of the attribute with this exact (qualified) name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(key, _)| key == name)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the first child element with this name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Iterates over the child elements with this name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Total number of elements in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Element::size).sum::<usize>()
    }
}

/// Rewrites the text value of every element as the tree is built.
///
/// Attribute values are never passed through the processor.
pub trait ValueProcessor {
    fn process(&self, value: String) -> String;
}

impl<F> ValueProcessor for F
where
    F: Fn(String) -> String,
{
    fn process(&self, value: String) -> String {
        self(value)
    }
}

/// The document could not be turned into a tree.
#[derive(Debug, Error)]
#[error("{message} (at byte {position})")]
pub struct TreeError {
    pub message: String,
    pub position: usize,
}

/// Turns XML text into an [`Element`] tree rooted at the document element.
pub trait TreeBuilder {
    fn build(
        &self,
        xml: &str,
        processor: Option<&dyn ValueProcessor>,
    ) -> std::result::Result<Element, TreeError>;
}

/// The default [`TreeBuilder`], backed by `quick_xml`.
///
/// The whole document is materialized. Comments, processing instructions, the
/// XML declaration and the DOCTYPE (including its internal subset) are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickXmlTreeBuilder;

impl TreeBuilder for QuickXmlTreeBuilder {
    fn build(
        &self,
        xml: &str,
        processor: Option<&dyn ValueProcessor>,
    ) -> std::result::Result<Element, TreeError> {
        let mut reader = Reader::from_str(xml);
        // Open elements, innermost last. Text is accumulated untrimmed until the element closes.
        let mut stack: Vec<(Element, String)> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let position = reader.buffer_position();
            let event = reader.read_event().map_err(|e| TreeError {
                message: e.to_string(),
                position,
            })?;

            match event {
                Event::Start(ref e) => {
                    let element = start_element(e, position)?;
                    ensure_single_root(&root, &stack, &element.name, position)?;
                    stack.push((element, String::new()));
                }
                Event::Empty(ref e) => {
                    let element = start_element(e, position)?;
                    ensure_single_root(&root, &stack, &element.name, position)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::Text(ref e) => {
                    let text = e.unescape().map_err(|err| TreeError {
                        message: err.to_string(),
                        position,
                    })?;
                    match stack.last_mut() {
                        Some((_, buffer)) => buffer.push_str(&text),
                        None if text.trim().is_empty() => {}
                        None => {
                            return Err(TreeError {
                                message: "text outside of the root element".to_string(),
                                position,
                            })
                        }
                    }
                }
                Event::CData(e) => {
                    let data = e.into_inner();
                    let text = std::str::from_utf8(&data).map_err(|err| TreeError {
                        message: err.to_string(),
                        position,
                    })?;
                    if let Some((_, buffer)) = stack.last_mut() {
                        buffer.push_str(text);
                    }
                }
                Event::End(_) => {
                    // Name matching is enforced by the reader itself.
                    let (mut element, buffer) = stack.pop().ok_or_else(|| TreeError {
                        message: "closing tag without a matching opening tag".to_string(),
                        position,
                    })?;
                    let trimmed = buffer.trim();
                    if !trimmed.is_empty() {
                        let value = trimmed.to_string();
                        element.text = Some(match processor {
                            Some(processor) => processor.process(value),
                            None => value,
                        });
                    }
                    attach(&mut stack, &mut root, element);
                }
                Event::Eof => break,
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }

        if let Some((open, _)) = stack.last() {
            return Err(TreeError {
                message: format!("unexpected end of document inside <{}>", open.name),
                position: reader.buffer_position(),
            });
        }

        let root = root.ok_or_else(|| TreeError {
            message: "no root element found".to_string(),
            position: reader.buffer_position(),
        })?;
        trace!("Built element tree: root=<{}>, {} elements", root.name, root.size());
        Ok(root)
    }
}

fn start_element(e: &BytesStart<'_>, position: usize) -> std::result::Result<Element, TreeError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let attributes = e
        .attributes()
        .map(|attr_result| {
            let attr = attr_result.map_err(|err| TreeError {
                message: format!("Failed to parse attribute of <{}>: {}", name, err),
                position,
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| TreeError {
                    message: format!("Failed to decode attribute {}: {}", key, err),
                    position,
                })?
                .into_owned();
            Ok((key, value))
        })
        .collect::<std::result::Result<Vec<_>, TreeError>>()?;

    Ok(Element {
        name,
        attributes,
        text: None,
        children: Vec::new(),
    })
}

fn ensure_single_root(
    root: &Option<Element>,
    stack: &[(Element, String)],
    name: &str,
    position: usize,
) -> std::result::Result<(), TreeError> {
    if root.is_some() && stack.is_empty() {
        return Err(TreeError {
            message: format!("second root element <{}>", name),
            position,
        });
    }
    Ok(())
}

fn attach(stack: &mut [(Element, String)], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some((parent, _)) => parent.children.push(element),
        None => *root = Some(element),
    }
}
