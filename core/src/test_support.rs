//! Builders for small document trees used across the unit tests.

use indexmap::IndexMap;

use crate::document::{
    ComponentInfo, Document, Node, NodeKind, Paint, PaintType, Rectangle, Rgba, Style, StyleType,
    TypeStyle, VectorInfo,
};

pub fn document(children: Vec<Node>, styles: Vec<(String, Style)>) -> Document {
    Document {
        name: Some("Test".to_string()),
        document: container("0:0", children),
        components: IndexMap::new(),
        styles: styles.into_iter().collect(),
    }
}

pub fn container(id: &str, children: Vec<Node>) -> Node {
    Node {
        id: id.to_string(),
        name: String::new(),
        children,
        kind: NodeKind::Container,
    }
}

fn vector_info(style_slots: &[(&str, Option<&str>)], fills: Vec<Paint>) -> VectorInfo {
    VectorInfo {
        styles: style_slots
            .iter()
            .filter_map(|(slot, id)| id.map(|id| (slot.to_string(), id.to_string())))
            .collect(),
        fills: Some(fills),
    }
}

pub fn rectangle(id: &str, name: &str, fill_style: Option<&str>, fills: Vec<Paint>) -> Node {
    Node {
        id: id.to_string(),
        name: name.to_string(),
        children: vec![],
        kind: NodeKind::Vector(vector_info(&[("fill", fill_style)], fills)),
    }
}

pub fn text(
    id: &str,
    name: &str,
    text_style: Option<&str>,
    fill_style: Option<&str>,
    fills: Vec<Paint>,
    style: Option<TypeStyle>,
) -> Node {
    Node {
        id: id.to_string(),
        name: name.to_string(),
        children: vec![],
        kind: NodeKind::Text {
            info: vector_info(&[("text", text_style), ("fill", fill_style)], fills),
            style,
        },
    }
}

pub fn component(id: &str, name: &str, height: Option<f64>) -> Node {
    Node {
        id: id.to_string(),
        name: name.to_string(),
        children: vec![],
        kind: NodeKind::Component(ComponentInfo {
            absolute_bounding_box: Rectangle {
                width: height,
                height,
                ..Rectangle::default()
            },
        }),
    }
}

pub fn solid(r: f64, g: f64, b: f64, a: f64) -> Paint {
    Paint {
        paint_type: PaintType::Solid,
        color: Some(Rgba { r, g, b, a }),
    }
}

pub fn solid_without_color() -> Paint {
    Paint {
        paint_type: PaintType::Solid,
        color: None,
    }
}

pub fn gradient() -> Paint {
    Paint {
        paint_type: PaintType::Other,
        color: None,
    }
}

fn style_record(id: &str, name: &str, style_type: StyleType) -> (String, Style) {
    (
        id.to_string(),
        Style {
            name: Some(name.to_string()),
            style_type,
        },
    )
}

pub fn fill_style(id: &str, name: &str) -> (String, Style) {
    style_record(id, name, StyleType::Fill)
}

pub fn text_style_record(id: &str, name: &str) -> (String, Style) {
    style_record(id, name, StyleType::Text)
}
