use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum XmlError {
    /// The text is not a well-formed XML document.
    #[error("xml parse error: {0}")]
    Parse(String),

    #[error("xml nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}

impl From<roxmltree::Error> for XmlError {
    fn from(e: roxmltree::Error) -> Self {
        XmlError::Parse(e.to_string())
    }
}

pub type XmlResult<T> = Result<T, XmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            XmlError::Parse("unexpected end of stream".to_string()).to_string(),
            "xml parse error: unexpected end of stream"
        );
        assert_eq!(
            XmlError::DepthExceeded { limit: 4 }.to_string(),
            "xml nesting deeper than 4 levels"
        );
    }
}
