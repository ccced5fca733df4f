use std::{fmt, io};

use thiserror::Error;

use crate::document::Node;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort an extraction batch.
///
/// Problems with a single node that only cause it to be skipped are not
/// errors; they are [`NodeIssue`]s sent to the diagnostics sink.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid spacing name of node {0}")]
    InvalidSpacingName(NodeRef),

    #[error("Spacing value of node {0} not found")]
    SpacingNotFound(NodeRef),

    #[error("Invalid name validation pattern: {0}")]
    InvalidNamePattern(#[from] regex::Error),

    #[error("Invalid name replace template '{template}': {reason}")]
    InvalidReplaceTemplate { template: String, reason: String },

    #[error("Missing configuration value: {0}")]
    MissingConfiguration(&'static str),

    #[error("No documents to extract tokens from")]
    NoDocuments,

    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Name and id of the node an issue was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub name: String,
    pub id: String,
}

impl From<&Node> for NodeRef {
    fn from(node: &Node) -> Self {
        NodeRef {
            name: node.name.clone(),
            id: node.id.clone(),
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' with id '{}'", self.name, self.id)
    }
}

/// A node that was skipped during extraction, with the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeIssue {
    #[error("Style of node {0} not found")]
    StyleNotFound(NodeRef),

    #[error("Invalid style name of node {0}")]
    InvalidStyleName(NodeRef),

    #[error("Color of node {0} not found")]
    ColorNotFound(NodeRef),

    #[error("Text style of node {0} not found")]
    TextStyleNotFound(NodeRef),

    #[error("Invalid font family of node {0}")]
    InvalidFontFamily(NodeRef),

    #[error("Invalid font weight of node {0}")]
    InvalidFontWeight(NodeRef),

    #[error("Invalid font size of node {0}")]
    InvalidFontSize(NodeRef),

    #[error("Invalid text color of node {0}")]
    InvalidTextColor(NodeRef),

    #[error("Font PostScript name of node {0} not found, using font family")]
    MissingFontName(NodeRef),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSpacingName(NodeRef {
            name: String::new(),
            id: "1:2".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid spacing name of node '' with id '1:2'"
        );

        let err = Error::MissingConfiguration("fileKey");
        assert_eq!(err.to_string(), "Missing configuration value: fileKey");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_node_issue_display() {
        let issue = NodeIssue::ColorNotFound(NodeRef {
            name: "Swatch".to_string(),
            id: "4:5".to_string(),
        });
        assert_eq!(
            issue.to_string(),
            "Color of node 'Swatch' with id '4:5' not found"
        );
    }
}
