use shape_val::{Node, Obj, Record, Scalar};

/// Opaque input handed to detection and conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    /// A mapping or list.
    Container(Node),
    Record(Record),
    /// Text of unknown format: JSON, serialized, XML or anything else.
    Text(String),
    Scalar(Scalar),
}

impl Resource {
    /// The text to probe, if this resource carries any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Resource::Text(s) | Resource::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::Container(node) => node.type_name(),
            Resource::Record(_) => "record",
            Resource::Text(_) => "text",
            Resource::Scalar(s) => s.type_name(),
        }
    }
}

impl From<Node> for Resource {
    fn from(node: Node) -> Self {
        match node {
            Node::Scalar(s) => s.into(),
            composite => Resource::Container(composite),
        }
    }
}

impl From<Obj> for Resource {
    fn from(obj: Obj) -> Self {
        Resource::Container(Node::Obj(obj))
    }
}

impl From<Record> for Resource {
    fn from(record: Record) -> Self {
        Resource::Record(record)
    }
}

impl From<Scalar> for Resource {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Str(text) => Resource::Text(text),
            other => Resource::Scalar(other),
        }
    }
}

impl From<String> for Resource {
    fn from(s: String) -> Self {
        Resource::Text(s)
    }
}

impl From<&str> for Resource {
    fn from(s: &str) -> Self {
        Resource::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_val::obj;

    #[test]
    fn test_scalar_nodes_are_not_containers() {
        assert_eq!(Resource::from(Node::int(1)), Resource::Scalar(Scalar::Int(1)));
        assert_eq!(Resource::from(Node::str("<a/>")), Resource::Text("<a/>".to_string()));
        assert!(matches!(
            Resource::from(Node::from(vec![1])),
            Resource::Container(_)
        ));
        assert!(matches!(Resource::from(obj! {}), Resource::Container(_)));
    }

    #[test]
    fn test_text() {
        assert_eq!(Resource::from("abc").text(), Some("abc"));
        assert_eq!(Resource::Scalar(Scalar::str("abc")).text(), Some("abc"));
        assert_eq!(Resource::Scalar(Scalar::Int(1)).text(), None);
        assert_eq!(Resource::Record(Record::new()).text(), None);
    }
}
