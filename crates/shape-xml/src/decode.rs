use crate::build::{ATTRIBUTES_KEY, VALUE_KEY};
use crate::{XmlElement, XmlPolicy, XmlResult};
use indexmap::IndexMap;
use shape_val::{autobox, Node, Obj};

/// Decodes an element into a node, folding attributes according to `policy`.
///
/// A childless element decodes to its boxed text. Otherwise children are
/// grouped by name in first-appearance order; a name seen more than once
/// becomes a list of the per-child values in document order.
pub fn xml_to_node(element: &XmlElement, policy: XmlPolicy) -> Node {
    if !element.has_children() {
        return Node::Scalar(autobox(element.text_or_empty()));
    }

    let mut grouped: IndexMap<&str, Vec<Node>> = IndexMap::new();
    for kid in element.children() {
        grouped
            .entry(kid.name.as_str())
            .or_default()
            .push(decode_child(kid, policy));
    }

    let mut obj = Obj::new();
    for (name, values) in grouped {
        let value = if values.len() > 1 {
            Node::Array(values)
        } else {
            values.into_iter().next().unwrap_or_default()
        };
        obj.set(name, value);
    }
    Node::Obj(obj)
}

/// Parses `text` and decodes its root element.
pub fn xml_str_to_node(text: &str, policy: XmlPolicy) -> XmlResult<Node> {
    let root = XmlElement::parse(text)?;
    Ok(xml_to_node(&root, policy))
}

fn decode_child(kid: &XmlElement, policy: XmlPolicy) -> Node {
    if !kid.has_attributes() {
        return xml_to_node(kid, policy);
    }

    match policy {
        XmlPolicy::None => xml_to_node(kid, policy),
        XmlPolicy::Group => {
            let mut data = Obj::new();
            data.set(VALUE_KEY, xml_to_node(kid, policy));
            data.set(ATTRIBUTES_KEY, boxed_attributes(kid));
            Node::Obj(data)
        }
        XmlPolicy::Merge => {
            let mut data = match xml_to_node(kid, policy) {
                Node::Obj(nested) => nested,
                own => {
                    let mut data = Obj::new();
                    data.set(VALUE_KEY, own);
                    data
                }
            };
            for (name, v) in boxed_attributes(kid) {
                if name == VALUE_KEY && data.has(VALUE_KEY) {
                    continue;
                }
                data.set(name, v);
            }
            Node::Obj(data)
        }
        XmlPolicy::Attribs => Node::Obj(boxed_attributes(kid)),
    }
}

fn boxed_attributes(element: &XmlElement) -> Obj {
    element
        .attributes()
        .map(|(name, value)| (name, Node::Scalar(autobox(value))))
        .collect()
}
