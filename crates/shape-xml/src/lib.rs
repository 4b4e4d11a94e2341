//! # shape-xml
//!
//! Converts between [`shape_val::Node`] trees and XML documents.
//!
//! - [`build_xml`] writes a node into an [`XmlElement`], reading the
//!   `value`/`attributes` sub-key conventions to decide what becomes an
//!   attribute.
//! - [`xml_to_node`] reads an element back, folding attributes according to an
//!   [`XmlPolicy`].
//!
//! ```rust
//! use shape_val::{obj, Node};
//! use shape_xml::{build_xml, xml_str_to_node, ToXml, XmlElement, XmlPolicy};
//!
//! let node = Node::from(obj! {
//!     "life" => obj! { "value" => 50, "attributes" => obj! { "max" => 150 } },
//! });
//!
//! let mut root = XmlElement::new("root");
//! let xml = build_xml(&mut root, &node).to_xml();
//! assert_eq!(xml, r#"<root><life max="150">50</life></root>"#);
//!
//! assert_eq!(xml_str_to_node(&xml, XmlPolicy::Group).unwrap(), node);
//! ```

mod build;
mod decode;
mod element;
mod error;
mod policy;
mod render;

pub use build::{build_xml, ATTRIBUTES_KEY, LIST_ITEM, VALUE_KEY};
pub use decode::{xml_str_to_node, xml_to_node};
pub use element::{XmlElement, DEFAULT_MAX_DEPTH};
pub use error::{XmlError, XmlResult};
pub use policy::XmlPolicy;
pub use render::{ToXml, XML_DECLARATION};
