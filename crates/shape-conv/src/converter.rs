use crate::builder::{build_node, build_node_from_record, record_from_composite};
use crate::{json, serialized, ConvertOptions, Detected, Detector, Resource};
use shape_val::{Node, Obj, Record, Scalar};
use shape_xml::{build_xml, xml_to_node, ToXml, XmlElement};
use tracing::debug;

/// Produces any target representation from any detectable input.
///
/// Every conversion is infallible: input that cannot be decoded is cast
/// into a container instead of rejected.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
    detector: Detector,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        let detector = Detector::new(options.max_depth);
        Self { options, detector }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Normalizes `input` into a mapping or list.
    ///
    /// A node input is returned as-is unless `recursive` asks for a deep copy
    /// with every scalar leaf boxed.
    pub fn to_node(&self, input: &Resource, recursive: bool) -> Node {
        let detected = self.detector.inspect(input);
        self.node_from(detected, input, recursive)
    }

    pub fn to_record(&self, input: &Resource, recursive: bool) -> Record {
        match self.detector.inspect(input) {
            Detected::Record(record) if !recursive => {
                debug!("record input returned as-is");
                record.clone()
            }
            Detected::Record(record) => {
                debug!("record input mirrored");
                record_from_composite(&build_node_from_record(record))
            }
            detected => record_from_composite(&self.node_from(detected, input, recursive)),
        }
    }

    /// Encodes `input` as compact JSON. JSON text is returned unchanged.
    pub fn to_json(&self, input: &Resource) -> String {
        match self.detector.inspect(input) {
            Detected::Json(_) => {
                debug!("input is already json");
                input.text().unwrap_or_default().to_string()
            }
            detected => json::encode(&self.node_from(detected, input, false)),
        }
    }

    /// Encodes `input` as serialization text, re-encoding even when the
    /// input already is serialized.
    pub fn to_serialized(&self, input: &Resource) -> String {
        serialized::encode(&self.to_node(input, false))
    }

    pub fn to_xml(&self, input: &Resource) -> String {
        self.to_xml_with_root(input, &self.options.root_name)
    }

    /// Renders `input` as an XML document under a root element named
    /// `root_name`. XML text is returned unchanged.
    pub fn to_xml_with_root(&self, input: &Resource, root_name: &str) -> String {
        match self.detector.inspect(input) {
            Detected::Xml(_) => {
                debug!("input is already xml");
                input.text().unwrap_or_default().to_string()
            }
            detected => {
                let data = self.node_from(detected, input, true);
                let mut root = XmlElement::new(root_name);
                build_xml(&mut root, &data).to_document().trim().to_string()
            }
        }
    }

    fn node_from(&self, detected: Detected<'_>, input: &Resource, recursive: bool) -> Node {
        debug!(format = %detected.tag(), recursive, "converting to node");
        match detected {
            Detected::Container(node) if recursive => build_node(node),
            Detected::Container(node) => node.clone(),
            Detected::Record(record) => build_node_from_record(record),
            Detected::Json(node) | Detected::Serialized(node) => into_container(node),
            Detected::Xml(root) => {
                if !root.has_children() && root.text_or_empty().trim().is_empty() {
                    Node::Obj(Obj::new())
                } else {
                    into_container(xml_to_node(&root, self.options.policy))
                }
            }
            Detected::Unknown => best_effort(input),
        }
    }
}

/// Wraps a scalar in a one-item list; nil becomes an empty list.
fn into_container(node: Node) -> Node {
    match node {
        Node::Scalar(Scalar::Nil) => Node::Array(vec![]),
        Node::Scalar(s) => Node::Array(vec![Node::Scalar(s)]),
        composite => composite,
    }
}

fn best_effort(input: &Resource) -> Node {
    debug!(input = input.type_name(), "undetected input cast to a container");
    match input {
        Resource::Container(node) => into_container(node.clone()),
        Resource::Record(record) => build_node_from_record(record),
        Resource::Text(text) => into_container(Node::str(text.as_str())),
        Resource::Scalar(s) => into_container(Node::Scalar(s.clone())),
    }
}

pub fn to_node(input: &Resource, recursive: bool) -> Node {
    Converter::default().to_node(input, recursive)
}

pub fn to_record(input: &Resource, recursive: bool) -> Record {
    Converter::default().to_record(input, recursive)
}

pub fn to_json(input: &Resource) -> String {
    Converter::default().to_json(input)
}

pub fn to_serialized(input: &Resource) -> String {
    Converter::default().to_serialized(input)
}

pub fn to_xml(input: &Resource) -> String {
    Converter::default().to_xml(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_val::{obj, record};
    use shape_xml::XmlPolicy;

    const JSON: &str = r#"{"key":"value","number":1337,"boolean":true,"float":1.5,"array":[1,2,3]}"#;

    fn sample() -> Node {
        Node::from(obj! {
            "key" => "value",
            "number" => 1337,
            "boolean" => true,
            "float" => 1.5,
            "array" => vec![1, 2, 3],
        })
    }

    #[test]
    fn test_node_input_as_is() {
        let input = Resource::from(obj! { "n" => "5" });
        assert_eq!(to_node(&input, false), Node::from(obj! { "n" => "5" }));
        assert_eq!(to_node(&input, true), Node::from(obj! { "n" => 5 }));
    }

    #[test]
    fn test_json_to_node() {
        assert_eq!(to_node(&Resource::from(JSON), false), sample());
    }

    #[test]
    fn test_json_short_circuits() {
        let spaced = "{ \"a\" : 1 }";
        assert_eq!(to_json(&Resource::from(spaced)), spaced);
        assert_eq!(to_json(&Resource::from(sample())), JSON);
    }

    #[test]
    fn test_serialized_is_re_encoded() {
        let text = "a:1:{i:0;s:1:\"5\";}";
        assert_eq!(to_serialized(&Resource::from(text)), text);
        assert_eq!(to_serialized(&Resource::from("N;")), "a:0:{}");
    }

    #[test]
    fn test_xml_short_circuits() {
        let xml = "<root><a>1</a></root>";
        assert_eq!(to_xml(&Resource::from(xml)), xml);
    }

    #[test]
    fn test_to_xml_with_root() {
        let input = Resource::from(obj! { "life" => 50 });
        assert_eq!(
            Converter::default().to_xml_with_root(&input, "unit"),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<unit><life>50</life></unit>"
        );
    }

    #[test]
    fn test_configured_root_and_policy() {
        let converter = Converter::new(
            ConvertOptions::default()
                .with_root_name("unit")
                .with_policy(XmlPolicy::Attribs),
        );
        assert_eq!(
            converter.to_xml(&Resource::from(obj! {})),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<unit/>"
        );
        let node = converter.to_node(&Resource::from(r#"<r><life max="150">50</life></r>"#), false);
        assert_eq!(node, Node::from(obj! { "life" => obj! { "max" => 150 } }));
    }

    #[test]
    fn test_empty_xml_root_is_empty_mapping() {
        assert_eq!(to_node(&Resource::from("<root/>"), false), Node::Obj(Obj::new()));
        assert_eq!(to_node(&Resource::from("<root>\n</root>"), false), Node::Obj(Obj::new()));
        assert_eq!(to_node(&Resource::from("<root>\n  </root>"), false), Node::Obj(Obj::new()));
    }

    #[test]
    fn test_best_effort_cast() {
        assert_eq!(
            to_node(&Resource::from("plain text"), false),
            Node::from(vec!["plain text"])
        );
        assert_eq!(to_node(&Resource::Scalar(Scalar::Int(4)), false), Node::from(vec![4]));
        assert_eq!(to_node(&Resource::Scalar(Scalar::Nil), false), Node::Array(vec![]));
        assert_eq!(to_node(&Resource::from("7"), false), Node::from(vec![7]));
        assert_eq!(to_json(&Resource::from("plain text")), r#"["plain text"]"#);
    }

    #[test]
    fn test_to_record() {
        let source = record! { "n" => "5" };
        let input = Resource::from(source.clone());
        assert_eq!(to_record(&input, false), source);
        assert_eq!(to_record(&input, true), record! { "n" => 5 });
        assert_eq!(
            to_record(&Resource::from("[1,2]"), false),
            record! { "0" => 1, "1" => 2 }
        );
    }

    #[test]
    fn test_options() {
        let converter = Converter::new(ConvertOptions::default().with_max_depth(3));
        assert_eq!(converter.options().max_depth, 3);
        assert_eq!(
            converter.to_serialized(&Resource::from("a:1:{i:0;a:1:{i:0;a:1:{i:0;a:0:{}}}}")),
            "a:1:{i:0;s:36:\"a:1:{i:0;a:1:{i:0;a:1:{i:0;a:0:{}}}}\";}"
        );
    }
}
