use crate::{Obj, Scalar};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

pub type Array = Vec<Node>;

/// The universal in-memory tree every conversion passes through.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Obj(Obj),
    Array(Array),
}

impl Default for Node {
    fn default() -> Self {
        Node::Scalar(Scalar::Nil)
    }
}

impl Node {
    pub fn nil() -> Self {
        Node::Scalar(Scalar::Nil)
    }

    pub fn str(s: impl Into<String>) -> Self {
        Node::Scalar(Scalar::Str(s.into()))
    }

    pub fn int(i: i64) -> Self {
        Node::Scalar(Scalar::Int(i))
    }

    pub fn float(f: f64) -> Self {
        Node::Scalar(Scalar::Float(f))
    }

    pub fn bool(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Nil))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// True for mappings and lists.
    pub fn is_composite(&self) -> bool {
        !self.is_scalar()
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_obj(&self) -> Option<&Obj> {
        match self {
            Node::Obj(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_obj_mut(&mut self) -> Option<&mut Obj> {
        match self {
            Node::Obj(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Node::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Looks up `key` when this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_obj().and_then(|o| o.get(key))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Scalar(s) => s.type_name(),
            Node::Obj(_) => "obj",
            Node::Array(_) => "array",
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(s) => write!(f, "{}", s),
            Node::Obj(o) => write!(f, "{}", o),
            Node::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Scalar(s) => s.serialize(serializer),
            Node::Obj(o) => o.serialize(serializer),
            Node::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Scalar(s)
    }
}

impl From<Obj> for Node {
    fn from(o: Obj) -> Self {
        Node::Obj(o)
    }
}

impl<T> From<Vec<T>> for Node
where
    T: Into<Node>,
{
    fn from(v: Vec<T>) -> Self {
        Node::Array(v.into_iter().map(|v| v.into()).collect())
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::bool(b)
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::int(i as i64)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::int(i)
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::float(f)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::str(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::str(s)
    }
}
