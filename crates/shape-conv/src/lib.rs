//! # shape-conv
//!
//! Detects what shape a piece of structured data is in and converts it to any
//! other shape: in-memory containers ([`Node`]) and records ([`Record`]), JSON
//! text, length-prefixed serialization text, and XML documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_conv::{detect, to_json, to_xml, FormatTag, Resource};
//!
//! let input = Resource::from(r#"a:2:{s:4:"name";s:9:"Barbarian";s:4:"life";i:50;}"#);
//! assert_eq!(detect(&input), FormatTag::Serialized);
//! assert_eq!(to_json(&input), r#"{"name":"Barbarian","life":50}"#);
//! assert_eq!(
//!     to_xml(&input),
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root><name>Barbarian</name><life>50</life></root>"
//! );
//! ```
//!
//! ## Detection
//!
//! Detection is speculative decoding: [`Detector::inspect`] tries container,
//! record, JSON, serialized and XML in that order and hands back the payload
//! it decoded, so converters never parse the same input twice.
//!
//! ## See Also
//!
//! - [`Converter`] - conversions with custom [`ConvertOptions`]
//! - [`json`] and [`serialized`] - the text codecs
//! - [`ConvertError`] - errors of the explicit decode entry points

mod builder;
mod config;
mod converter;
mod detect;
mod error;
pub mod json;
mod resource;
pub mod serialized;

pub use builder::{build_node, build_node_from_record, build_record_from_node};
pub use config::{ConvertOptions, DEFAULT_MAX_DEPTH};
pub use converter::{to_json, to_node, to_record, to_serialized, to_xml, Converter};
pub use detect::{detect, inspect, Detected, Detector, FormatTag};
pub use error::{ConvertError, ConvertResult};
pub use resource::Resource;

pub use shape_val::{autobox, obj, record, unbox, Array, Field, Node, Obj, Record, Scalar};
pub use shape_xml::{XmlElement, XmlPolicy};
