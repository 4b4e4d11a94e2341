use crate::config::DEFAULT_MAX_DEPTH;
use crate::{json, serialized, Resource};
use shape_val::{Node, Record};
use shape_xml::XmlElement;
use strum_macros::Display;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FormatTag {
    Container,
    Record,
    Json,
    Serialized,
    Xml,
    Unknown,
}

/// A detection result together with the payload decoded while probing.
#[derive(Debug, Clone, PartialEq)]
pub enum Detected<'a> {
    Container(&'a Node),
    Record(&'a Record),
    Json(Node),
    Serialized(Node),
    Xml(XmlElement),
    Unknown,
}

impl Detected<'_> {
    pub fn tag(&self) -> FormatTag {
        match self {
            Detected::Container(_) => FormatTag::Container,
            Detected::Record(_) => FormatTag::Record,
            Detected::Json(_) => FormatTag::Json,
            Detected::Serialized(_) => FormatTag::Serialized,
            Detected::Xml(_) => FormatTag::Xml,
            Detected::Unknown => FormatTag::Unknown,
        }
    }
}

/// Classifies resources by speculative decoding.
///
/// Every probe swallows decode errors and reports them as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detector {
    max_depth: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Detector {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn is_container<'a>(&self, input: &'a Resource) -> Option<&'a Node> {
        match input {
            Resource::Container(node) if node.is_composite() => Some(node),
            _ => None,
        }
    }

    pub fn is_record<'a>(&self, input: &'a Resource) -> Option<&'a Record> {
        match input {
            Resource::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Decodes JSON text. A literal `null` document does not count as JSON.
    pub fn is_json(&self, input: &Resource) -> Option<Node> {
        let text = input.text()?;
        match json::decode(text) {
            Ok(node) if node.is_nil() => None,
            Ok(node) => Some(node),
            Err(e) => {
                trace!(error = %e, "json probe failed");
                None
            }
        }
    }

    pub fn is_serialized(&self, input: &Resource) -> Option<Node> {
        let text = input.text()?;
        match serialized::decode_with_depth(text, self.max_depth) {
            Ok(node) => Some(node),
            Err(e) => {
                trace!(error = %e, "serialized probe failed");
                None
            }
        }
    }

    pub fn is_xml(&self, input: &Resource) -> Option<XmlElement> {
        let text = input.text()?;
        match XmlElement::parse_with_depth(text, self.max_depth) {
            Ok(root) => Some(root),
            Err(e) => {
                trace!(error = %e, "xml probe failed");
                None
            }
        }
    }

    /// Probes container, record, JSON, serialized and XML in that order and
    /// returns the first match with its decoded payload.
    pub fn inspect<'a>(&self, input: &'a Resource) -> Detected<'a> {
        if let Some(node) = self.is_container(input) {
            return Detected::Container(node);
        }
        if let Some(record) = self.is_record(input) {
            return Detected::Record(record);
        }
        if let Some(node) = self.is_json(input) {
            return Detected::Json(node);
        }
        if let Some(node) = self.is_serialized(input) {
            return Detected::Serialized(node);
        }
        if let Some(root) = self.is_xml(input) {
            return Detected::Xml(root);
        }
        Detected::Unknown
    }

    pub fn detect(&self, input: &Resource) -> FormatTag {
        self.inspect(input).tag()
    }
}

pub fn detect(input: &Resource) -> FormatTag {
    Detector::default().detect(input)
}

pub fn inspect(input: &Resource) -> Detected<'_> {
    Detector::default().inspect(input)
}
