use serde::Serialize;

use crate::{
    color::{fill_color, Color},
    dedup,
    diagnostics::Diagnostics,
    document::{Document, Node, NodeKind, StyleType, Styles},
    error::{NodeIssue, NodeRef},
    traversal::NodeFilter,
    Result, Token,
};

/// Fonts whose identifier contains this, once spaces are removed and it is
/// lowercased, are the platform system font.
const SYSTEM_FONT_NAME: &str = "sfpro";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeightType {
    Thin,
    UltraLight,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}
impl FontWeightType {
    pub fn from_weight(weight: f64) -> Self {
        match weight {
            w if w == 100.0 => FontWeightType::Thin,
            w if w == 200.0 => FontWeightType::UltraLight,
            w if w == 300.0 => FontWeightType::Light,
            w if w == 400.0 => FontWeightType::Regular,
            w if w == 500.0 => FontWeightType::Medium,
            w if w == 600.0 => FontWeightType::Semibold,
            w if w == 700.0 => FontWeightType::Bold,
            w if w == 800.0 => FontWeightType::Heavy,
            w if w == 900.0 => FontWeightType::Black,
            _ => FontWeightType::Regular,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub is_system_font: bool,
    pub name: String,
    pub font_family: String,
    pub font_post_script_name: String,
    pub font_weight: f64,
    pub font_weight_type: FontWeightType,
    pub font_size: f64,
    pub text_color: Color,
    pub paragraph_spacing: Option<f64>,
    pub paragraph_indent: Option<f64>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
}

pub fn is_system_font(font_name: &str) -> bool {
    font_name
        .replace(' ', "")
        .to_lowercase()
        .contains(SYSTEM_FONT_NAME)
}

pub fn extract_text_style(
    node: &Node,
    styles: &Styles,
    diagnostics: &dyn Diagnostics,
) -> Option<TextStyle> {
    let NodeKind::Text { info, style } = &node.kind else {
        return None;
    };
    let style_id = info.style_id(StyleType::Text)?;
    let report = |issue: fn(NodeRef) -> NodeIssue| {
        diagnostics.error(issue(NodeRef::from(node)).to_string());
    };

    let text_style = match styles.get(style_id) {
        Some(text_style) if text_style.style_type == StyleType::Text => text_style,
        _ => {
            report(NodeIssue::StyleNotFound);
            return None;
        }
    };
    let Some(name) = text_style.name.as_ref().filter(|name| !name.is_empty()) else {
        report(NodeIssue::InvalidStyleName);
        return None;
    };
    let Some(style) = style else {
        report(NodeIssue::TextStyleNotFound);
        return None;
    };
    let Some(font_family) = style.font_family.as_ref().filter(|family| !family.is_empty()) else {
        report(NodeIssue::InvalidFontFamily);
        return None;
    };
    let Some(font_weight) = style.font_weight else {
        report(NodeIssue::InvalidFontWeight);
        return None;
    };
    let Some(font_size) = style.font_size else {
        report(NodeIssue::InvalidFontSize);
        return None;
    };

    let color_name = info
        .style_id(StyleType::Fill)
        .and_then(|id| styles.get(id))
        .and_then(|style| style.name.clone())
        .unwrap_or_default();
    let Some(text_color) = fill_color(info, color_name) else {
        report(NodeIssue::InvalidTextColor);
        return None;
    };

    let font_name = match &style.font_post_script_name {
        Some(font_name) => font_name.clone(),
        None => {
            diagnostics.warning(NodeIssue::MissingFontName(NodeRef::from(node)).to_string());
            font_family.clone()
        }
    };

    Some(TextStyle {
        is_system_font: is_system_font(&font_name),
        name: name.clone(),
        font_family: font_family.clone(),
        font_post_script_name: font_name,
        font_weight,
        font_weight_type: FontWeightType::from_weight(font_weight),
        font_size,
        text_color,
        paragraph_spacing: style.paragraph_spacing,
        paragraph_indent: style.paragraph_indent,
        line_height: style.line_height,
        letter_spacing: style.letter_spacing,
    })
}

pub fn extract_text_styles(
    document: &Document,
    filter: &NodeFilter,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<TextStyle>> {
    Ok(dedup(
        document
            .nodes(filter)
            .filter_map(|node| extract_text_style(node, &document.styles, diagnostics)),
    ))
}

impl Token for TextStyle {
    const KIND: &'static str = "text styles";

    fn extract(
        document: &Document,
        filter: &NodeFilter,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<Self>> {
        extract_text_styles(document, filter, diagnostics)
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
