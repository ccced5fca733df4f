use serde::Serialize;

use crate::{
    dedup,
    diagnostics::Diagnostics,
    document::{Document, Node, StyleType, Styles, VectorInfo},
    error::{NodeIssue, NodeRef},
    traversal::NodeFilter,
    Result, Token,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    pub name: String,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// Color of the node's single solid fill, named `name`.
pub(crate) fn fill_color(info: &VectorInfo, name: String) -> Option<Color> {
    let color = info.single_solid_fill()?.color?;
    Some(Color {
        name,
        red: color.r,
        green: color.g,
        blue: color.b,
        alpha: color.a,
    })
}

/// Extracts the color of a shape bound to a fill style. `styles` must only
/// hold fill styles.
pub fn extract_color(
    node: &Node,
    styles: &Styles,
    diagnostics: &dyn Diagnostics,
) -> Option<Color> {
    let info = node.vector_info()?;
    let style_id = info.style_id(StyleType::Fill)?;

    let Some(style) = styles.get(style_id) else {
        diagnostics.error(NodeIssue::StyleNotFound(NodeRef::from(node)).to_string());
        return None;
    };
    let name = match &style.name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => {
            diagnostics.error(NodeIssue::InvalidStyleName(NodeRef::from(node)).to_string());
            return None;
        }
    };
    // Gradients, images and stacked fills are not colors.
    let fill = info.single_solid_fill()?;
    if fill.color.is_none() {
        diagnostics.error(NodeIssue::ColorNotFound(NodeRef::from(node)).to_string());
        return None;
    }
    fill_color(info, name)
}

pub fn extract_colors(
    document: &Document,
    filter: &NodeFilter,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<Color>> {
    let styles: Styles = document
        .styles
        .iter()
        .filter(|(_, style)| style.style_type == StyleType::Fill)
        .map(|(id, style)| (id.clone(), style.clone()))
        .collect();

    Ok(dedup(
        document
            .nodes(filter)
            .filter_map(|node| extract_color(node, &styles, diagnostics)),
    ))
}

impl Token for Color {
    const KIND: &'static str = "colors";

    fn extract(
        document: &Document,
        filter: &NodeFilter,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<Self>> {
        extract_colors(document, filter, diagnostics)
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
