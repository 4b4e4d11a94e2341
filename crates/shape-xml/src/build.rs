use crate::XmlElement;
use shape_val::{unbox, Node, Obj};

/// Reserved key carrying an element's own value in the Group and Merge shapes.
pub const VALUE_KEY: &str = "value";
/// Reserved key carrying the attribute block in the Group shape.
pub const ATTRIBUTES_KEY: &str = "attributes";
/// Element name used for items of a top-level list.
pub const LIST_ITEM: &str = "item";

/// Writes `data` into `into` as child elements, in entry order.
///
/// Each mapping entry is shaped by its value:
///
/// - scalar: a leaf element holding the unboxed text;
/// - list: one sibling element per item, all sharing the key;
/// - mapping with an `attributes` key (Group shape): an element whose text or
///   children come from `value`, with `attributes` written as attributes;
/// - mapping with a `value` key (Merge shape): an element with text `value`,
///   scalar siblings as attributes, composite siblings as children;
/// - any other mapping: an element whose entries all become children.
///
/// A field that is genuinely named `attributes` always selects the Group shape.
///
/// Keys are written as element and attribute names without validation. A key
/// that is not an XML name (`"first name"`, `"1abc"`) yields output that does
/// not parse back.
pub fn build_xml<'a>(into: &'a mut XmlElement, data: &Node) -> &'a mut XmlElement {
    match data {
        Node::Obj(obj) => {
            for (key, value) in obj {
                build_entry(into, key, value);
            }
        }
        Node::Array(items) => {
            for item in items {
                build_entry(into, LIST_ITEM, item);
            }
        }
        Node::Scalar(s) => into.text = Some(unbox(s)),
    }
    into
}

fn build_entry(parent: &mut XmlElement, key: &str, value: &Node) {
    match value {
        Node::Scalar(s) => {
            parent.add_child(XmlElement::with_text(key, unbox(s)));
        }
        Node::Array(items) => {
            if items.is_empty() {
                parent.add_child(XmlElement::new(key));
            }
            for item in items {
                build_entry(parent, key, item);
            }
        }
        Node::Obj(obj) => {
            let child = if let Some(attributes) = present(obj, ATTRIBUTES_KEY) {
                group_element(key, obj, attributes)
            } else if let Some(own) = present(obj, VALUE_KEY) {
                merge_element(key, obj, own)
            } else {
                let mut child = XmlElement::new(key);
                build_xml(&mut child, value);
                child
            };
            parent.add_child(child);
        }
    }
}

fn group_element(key: &str, obj: &Obj, attributes: &Node) -> XmlElement {
    let mut child = XmlElement::new(key);
    match obj.get(VALUE_KEY) {
        Some(Node::Scalar(s)) => child.text = Some(unbox(s)),
        Some(nested) => {
            build_xml(&mut child, nested);
        }
        None => {}
    }

    // only a mapping can name attributes
    if let Node::Obj(attrs) = attributes {
        for (name, v) in attrs {
            child.set_attribute(name.as_str(), attribute_text(v));
        }
    }
    child
}

fn merge_element(key: &str, obj: &Obj, own: &Node) -> XmlElement {
    let mut child = XmlElement::new(key);
    match own {
        Node::Scalar(s) => child.text = Some(unbox(s)),
        nested => {
            build_xml(&mut child, nested);
        }
    }

    for (name, v) in obj.iter().filter(|(name, _)| *name != VALUE_KEY) {
        if v.is_composite() {
            build_entry(&mut child, name, v);
        } else {
            child.set_attribute(name.as_str(), attribute_text(v));
        }
    }
    child
}

fn present<'a>(obj: &'a Obj, key: &str) -> Option<&'a Node> {
    obj.get(key).filter(|n| !n.is_nil())
}

fn attribute_text(value: &Node) -> String {
    match value {
        Node::Scalar(s) => unbox(s),
        composite => composite.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToXml;
    use shape_val::obj;

    fn render(data: Node) -> String {
        let mut root = XmlElement::new("root");
        build_xml(&mut root, &data).to_xml()
    }

    #[test]
    fn test_scalars_become_leaves() {
        let data = obj! { "key" => "value", "number" => 1337, "boolean" => true, "float" => 1.5 };
        assert_eq!(
            render(data.into()),
            "<root><key>value</key><number>1337</number><boolean>true</boolean><float>1.5</float></root>"
        );
    }

    #[test]
    fn test_lists_become_siblings() {
        let data = obj! {
            "array" => vec![1, 2, 3],
            "sword" => vec![
                Node::from(obj! { "value" => "Broadsword", "damage" => 25 }),
                Node::from(obj! { "value" => "Longsword", "damage" => 30 }),
            ],
        };
        assert_eq!(
            render(data.into()),
            concat!(
                "<root><array>1</array><array>2</array><array>3</array>",
                r#"<sword damage="25">Broadsword</sword><sword damage="30">Longsword</sword></root>"#
            )
        );
    }

    #[test]
    fn test_empty_list_writes_empty_element() {
        let data = obj! { "none" => Node::Array(vec![]) };
        assert_eq!(render(data.into()), "<root><none/></root>");
    }

    #[test]
    fn test_group_shape() {
        let data = obj! {
            "life" => obj! { "value" => 50, "attributes" => obj! { "max" => 150 } },
            "armors" => obj! {
                "value" => obj! { "armor" => vec!["Helmet", "Shield"] },
                "attributes" => obj! { "items" => 2 },
            },
        };
        assert_eq!(
            render(data.into()),
            concat!(
                r#"<root><life max="150">50</life>"#,
                r#"<armors items="2"><armor>Helmet</armor><armor>Shield</armor></armors></root>"#
            )
        );
    }

    #[test]
    fn test_merge_shape() {
        let data = obj! {
            "polearm" => obj! { "value" => "Polearm", "damage" => 50, "speed" => "slow" },
        };
        assert_eq!(
            render(data.into()),
            r#"<root><polearm damage="50" speed="slow">Polearm</polearm></root>"#
        );
    }

    #[test]
    fn test_merge_shape_nests_composite_siblings() {
        let data = obj! {
            "scrap" => obj! { "value" => "Scrap", "count" => 25, "tags" => obj! { "tag" => "junk" } },
        };
        assert_eq!(
            render(data.into()),
            r#"<root><scrap count="25">Scrap<tags><tag>junk</tag></tags></scrap></root>"#
        );
    }

    #[test]
    fn test_plain_nesting_never_writes_attributes() {
        let data = obj! {
            "keys" => obj! { "chestKey" => "Chest Key", "bossKey" => "Boss Key" },
        };
        assert_eq!(
            render(data.into()),
            "<root><keys><chestKey>Chest Key</chestKey><bossKey>Boss Key</bossKey></keys></root>"
        );
    }

    #[test]
    fn test_field_named_attributes_selects_group_shape() {
        // a plain record that happens to have an `attributes` field
        let data = obj! {
            "item" => obj! { "attributes" => obj! { "color" => "red" }, "weight" => 3 },
        };
        assert_eq!(render(data.into()), r#"<root><item color="red"/></root>"#);
    }

    #[test]
    fn test_nil_value_is_not_merge_shape() {
        let data = obj! { "x" => obj! { "value" => Node::nil(), "y" => 1 } };
        assert_eq!(render(data.into()), "<root><x><value></value><y>1</y></x></root>");
    }

    #[test]
    fn test_names_are_written_verbatim() {
        let data = obj! { "first name" => "Conan", "1abc" => obj! { "value" => 1, "a b" => 2 } };
        let xml = render(data.into());
        assert_eq!(
            xml,
            r#"<root><first name>Conan</first name><1abc a b="2">1</1abc></root>"#
        );
        assert!(XmlElement::parse(&xml).is_err());
    }

    #[test]
    fn test_top_level_list_and_scalar() {
        assert_eq!(
            render(Node::from(vec![1, 2])),
            "<root><item>1</item><item>2</item></root>"
        );
        assert_eq!(render(Node::str("solo")), "<root>solo</root>");
    }
}
