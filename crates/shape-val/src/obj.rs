use crate::Node;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Ordered string-keyed mapping of nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Obj {
    values: IndexMap<String, Node>,
}

impl IntoIterator for Obj {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Obj {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Obj {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Obj {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Obj {
    pub fn new() -> Self {
        Obj {
            values: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.values.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.values.get_mut(key)
    }

    /// Inserts or replaces `key`. A replaced key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.values.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.values.iter()
    }

    pub fn merge(&mut self, other: &Obj) {
        for (key, value) in &other.values {
            self.set(key.clone(), value.clone());
        }
    }
}

impl Display for Obj {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Obj {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (k, v) in &self.values {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Builds an [`Obj`] from `key => value` pairs, keeping their order.
///
/// ```rust
/// use shape_val::{obj, Node};
///
/// let o = obj! { "name" => "Barbarian", "life" => 50 };
/// assert_eq!(o.get("life"), Some(&Node::int(50)));
/// ```
#[macro_export]
macro_rules! obj {
    () => { $crate::Obj::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut o = $crate::Obj::new();
        $( o.set($key, $value); )+
        o
    }};
}
