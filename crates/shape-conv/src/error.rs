//! Error types for conversion operations.
//!
//! Only explicit decode entry points and the tree builder's typed mirror
//! return these; detection probes and the canonical converters never fail.

use miette::Diagnostic;
use shape_xml::XmlError;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    /// Malformed text handed to a decoder
    #[error("{format} parse error: {message}")]
    #[diagnostic(code(shape_parse))]
    Parse {
        /// The format being decoded (`json`, `serialized`)
        format: &'static str,
        message: String,
    },

    /// A scalar where a mapping or list is structurally required
    #[error("invalid type: expected {expected}, found {found}")]
    #[diagnostic(
        code(shape_invalid_type),
        help("only mappings and lists can become records")
    )]
    InvalidType { expected: String, found: String },

    #[error("nesting deeper than {limit} levels")]
    #[diagnostic(
        code(shape_depth),
        help("raise the depth limit if the input is trusted")
    )]
    DepthExceeded { limit: usize },

    #[error(transparent)]
    #[diagnostic(code(shape_xml))]
    Xml(#[from] XmlError),

    #[error("IO error: {0}")]
    #[diagnostic(code(shape_io))]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub(crate) fn parse(format: &'static str, message: impl Into<String>) -> Self {
        ConvertError::Parse {
            format,
            message: message.into(),
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
