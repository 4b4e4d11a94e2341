use shape_xml::XmlPolicy;

pub use shape_xml::DEFAULT_MAX_DEPTH;

/// Settings carried by a [`Converter`](crate::Converter).
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Name of the root element written by `to_xml`.
    pub root_name: String,
    /// Attribute folding used when XML input is decoded.
    pub policy: XmlPolicy,
    /// Nesting limit for the serialized and XML decoders.
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root_name: "root".to_string(),
            policy: XmlPolicy::Group,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConvertOptions {
    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    pub fn with_policy(mut self, policy: XmlPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
