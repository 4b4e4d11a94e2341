use crate::{XmlError, XmlResult};
use indexmap::IndexMap;

/// Nesting limit applied by [`XmlElement::parse`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// An owned XML element: name, ordered attributes, text and child elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    pub name: String,
    attributes: IndexMap<String, String>,
    /// Concatenated direct text content; `None` when the element has none.
    pub text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Appends `child` and returns a handle to it for further filling.
    pub fn add_child(&mut self, child: XmlElement) -> &mut XmlElement {
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Parses a document and returns its root element.
    pub fn parse(text: &str) -> XmlResult<XmlElement> {
        Self::parse_with_depth(text, DEFAULT_MAX_DEPTH)
    }

    pub fn parse_with_depth(text: &str, max_depth: usize) -> XmlResult<XmlElement> {
        let doc = roxmltree::Document::parse(text)?;
        from_roxml(doc.root_element(), 1, max_depth)
    }
}

fn from_roxml(node: roxmltree::Node, depth: usize, max_depth: usize) -> XmlResult<XmlElement> {
    if depth > max_depth {
        return Err(XmlError::DepthExceeded { limit: max_depth });
    }

    let mut element = XmlElement::new(node.tag_name().name());
    for attr in node.attributes() {
        element.set_attribute(attr.name(), attr.value());
    }

    for kid in node.children() {
        if kid.is_element() {
            element.children.push(from_roxml(kid, depth + 1, max_depth)?);
        } else if kid.is_text() {
            if let Some(t) = kid.text() {
                element.text.get_or_insert_with(String::new).push_str(t);
            }
        }
    }

    Ok(element)
}
