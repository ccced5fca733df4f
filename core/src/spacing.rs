use serde::Serialize;

use crate::{
    diagnostics::Diagnostics,
    document::{Document, Node, NodeKind},
    error::NodeRef,
    traversal::NodeFilter,
    Error, Result, Token,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spacing {
    pub name: String,
    pub value: f64,
}

/// Spacing described by a component: its name and its height.
///
/// Unlike the other extractors a malformed component is an error, since
/// spacing components are expected to be purpose-built.
pub fn extract_spacing(node: &Node) -> Result<Option<Spacing>> {
    let NodeKind::Component(info) = &node.kind else {
        return Ok(None);
    };
    if node.name.is_empty() {
        return Err(Error::InvalidSpacingName(NodeRef::from(node)));
    }
    let value = info
        .absolute_bounding_box
        .height
        .ok_or_else(|| Error::SpacingNotFound(NodeRef::from(node)))?;
    Ok(Some(Spacing {
        name: node.name.clone(),
        value,
    }))
}

/// Spacings of a document, sorted by name.
pub fn extract_spacings(document: &Document, filter: &NodeFilter) -> Result<Vec<Spacing>> {
    let mut spacings = document
        .nodes(filter)
        .map(extract_spacing)
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>>>()?;
    spacings.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(spacings)
}

impl Token for Spacing {
    const KIND: &'static str = "spacings";

    fn extract(
        document: &Document,
        filter: &NodeFilter,
        _diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<Self>> {
        extract_spacings(document, filter)
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
