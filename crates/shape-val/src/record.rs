use crate::Scalar;
use indexmap::IndexMap;

/// A property-bag object: named fields holding scalars or nested records.
///
/// Records have no list field; a list is kept as a nested record whose
/// field names are the indices `"0"`, `"1"`, ...
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Scalar(Scalar),
    Record(Record),
}

impl Record {
    pub fn new() -> Self {
        Record {
            fields: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Field>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Field> {
        self.fields.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// True when the field names are exactly `"0".."n-1"` in order, i.e. the
    /// record stands in for a list. An empty record is not indexed.
    pub fn is_indexed(&self) -> bool {
        !self.fields.is_empty()
            && self
                .fields
                .keys()
                .enumerate()
                .all(|(i, name)| *name == i.to_string())
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Field);
    type IntoIter = indexmap::map::Iter<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl From<Scalar> for Field {
    fn from(s: Scalar) -> Self {
        Field::Scalar(s)
    }
}

impl From<Record> for Field {
    fn from(r: Record) -> Self {
        Field::Record(r)
    }
}

impl From<bool> for Field {
    fn from(b: bool) -> Self {
        Field::Scalar(b.into())
    }
}

impl From<i32> for Field {
    fn from(i: i32) -> Self {
        Field::Scalar(i.into())
    }
}

impl From<i64> for Field {
    fn from(i: i64) -> Self {
        Field::Scalar(i.into())
    }
}

impl From<f64> for Field {
    fn from(f: f64) -> Self {
        Field::Scalar(f.into())
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Scalar(s.into())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Scalar(s.into())
    }
}

/// Builds a [`Record`] from `name => value` pairs.
#[macro_export]
macro_rules! record {
    () => { $crate::Record::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut r = $crate::Record::new();
        $( r.set($key, $value); )+
        r
    }};
}
