use crate::{ConvertError, ConvertResult};
use shape_val::{Field, Node, Obj, Record};

/// Mirrors a record into a node tree, boxing every scalar field.
///
/// A record whose field names are exactly `"0".."n-1"` becomes a list.
pub fn build_node_from_record(source: &Record) -> Node {
    if source.is_indexed() {
        return Node::Array(source.iter().map(|(_, field)| field_to_node(field)).collect());
    }
    let obj: Obj = source
        .iter()
        .map(|(name, field)| (name.clone(), field_to_node(field)))
        .collect();
    Node::Obj(obj)
}

fn field_to_node(field: &Field) -> Node {
    match field {
        Field::Scalar(s) => Node::Scalar(s.clone().boxed()),
        Field::Record(r) => build_node_from_record(r),
    }
}

/// Mirrors a mapping or list into a record. Lists become records keyed by
/// index.
pub fn build_record_from_node(source: &Node) -> ConvertResult<Record> {
    match source {
        Node::Scalar(s) => Err(ConvertError::InvalidType {
            expected: "obj or array".to_string(),
            found: s.type_name().to_string(),
        }),
        composite => Ok(record_from_composite(composite)),
    }
}

/// Record mirror for nodes already known to be composite. A scalar yields
/// an empty record.
pub(crate) fn record_from_composite(source: &Node) -> Record {
    let mut record = Record::new();
    match source {
        Node::Obj(obj) => {
            for (key, value) in obj {
                record.set(key.as_str(), node_to_field(value));
            }
        }
        Node::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                record.set(i.to_string(), node_to_field(item));
            }
        }
        Node::Scalar(_) => {}
    }
    record
}

fn node_to_field(node: &Node) -> Field {
    match node {
        Node::Scalar(s) => Field::Scalar(s.clone().boxed()),
        composite => Field::Record(record_from_composite(composite)),
    }
}

/// Deep copy of a node with every scalar leaf boxed.
pub fn build_node(source: &Node) -> Node {
    match source {
        Node::Scalar(s) => Node::Scalar(s.clone().boxed()),
        Node::Obj(obj) => Node::Obj(
            obj.iter()
                .map(|(key, value)| (key.clone(), build_node(value)))
                .collect(),
        ),
        Node::Array(items) => Node::Array(items.iter().map(build_node).collect()),
    }
}
