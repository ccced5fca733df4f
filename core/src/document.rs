//! The Figma document tree, as returned by the files and nodes endpoints.
//!
//! Only the fields the extractors look at are modelled. Node types are
//! folded into the four kinds the extractors care about; everything else
//! becomes a [`NodeKind::Container`].

use indexmap::IndexMap;
use serde::Deserialize;

use crate::traversal::{NodeFilter, Nodes};

/// Style table of a document, keyed by style id.
pub type Styles = IndexMap<String, Style>;

/// A fetched Figma file (or one entry of a nodes response).
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub name: Option<String>,
    pub document: Node,
    #[serde(default)]
    pub components: IndexMap<String, Component>,
    #[serde(default)]
    pub styles: Styles,
}
impl Document {
    pub fn from_json(data: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
    /// Nodes of this document selected by `filter`, in document order.
    pub fn nodes<'a>(&'a self, filter: &'a NodeFilter) -> Nodes<'a> {
        Nodes::new(&self.document, filter)
    }
}

/// Response of `GET /v1/files/:key/nodes`. Ids that do not exist come back
/// as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct NodesResponse {
    pub name: Option<String>,
    pub nodes: IndexMap<String, Option<Document>>,
}
impl NodesResponse {
    pub fn into_documents(self) -> Vec<Document> {
        self.nodes.into_values().flatten().collect()
    }
}

/// Parses either a file response or a nodes response into documents.
pub fn parse_documents(data: &str) -> crate::Result<Vec<Document>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Payload {
        Nodes(NodesResponse),
        File(Document),
    }
    Ok(match serde_json::from_str(data)? {
        Payload::Nodes(nodes) => nodes.into_documents(),
        Payload::File(document) => vec![document],
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Component {
    pub key: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Style {
    pub name: Option<String>,
    #[serde(rename = "styleType")]
    pub style_type: StyleType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StyleType {
    #[serde(rename = "FILL")]
    Fill,
    #[serde(rename = "TEXT")]
    Text,
    #[serde(other)]
    Other,
}
impl StyleType {
    /// Key of this style type in a node's `styles` map.
    pub fn slot(&self) -> Option<&'static str> {
        match self {
            StyleType::Fill => Some("fill"),
            StyleType::Text => Some("text"),
            StyleType::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub children: Vec<Node>,
    pub kind: NodeKind,
}
impl Node {
    /// Fill and style information, for the kinds that carry it.
    pub fn vector_info(&self) -> Option<&VectorInfo> {
        match &self.kind {
            NodeKind::Vector(info) | NodeKind::Text { info, .. } => Some(info),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Container,
    Vector(VectorInfo),
    Text {
        info: VectorInfo,
        style: Option<TypeStyle>,
    },
    Component(ComponentInfo),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorInfo {
    pub styles: IndexMap<String, String>,
    pub fills: Option<Vec<Paint>>,
}
impl VectorInfo {
    pub fn style_id(&self, style_type: StyleType) -> Option<&str> {
        style_type
            .slot()
            .and_then(|slot| self.styles.get(slot))
            .map(String::as_str)
    }
    /// The node's only fill, if there is exactly one and it is solid.
    pub fn single_solid_fill(&self) -> Option<&Paint> {
        match self.fills.as_deref() {
            Some([fill]) if fill.paint_type == PaintType::Solid => Some(fill),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentInfo {
    pub absolute_bounding_box: Rectangle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Rectangle {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    pub color: Option<Rgba>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PaintType {
    #[serde(rename = "SOLID")]
    Solid,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_post_script_name: Option<String>,
    pub font_weight: Option<f64>,
    pub font_size: Option<f64>,
    pub paragraph_spacing: Option<f64>,
    pub paragraph_indent: Option<f64>,
    #[serde(alias = "lineHeightPx")]
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    children: Vec<Node>,
    #[serde(default)]
    styles: IndexMap<String, String>,
    fills: Option<Vec<Paint>>,
    style: Option<TypeStyle>,
    absolute_bounding_box: Option<Rectangle>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let info = VectorInfo {
            styles: raw.styles,
            fills: raw.fills,
        };
        let kind = match raw.type_.as_str() {
            "VECTOR" | "RECTANGLE" | "ELLIPSE" | "STAR" | "LINE" | "REGULAR_POLYGON"
            | "BOOLEAN_OPERATION" => NodeKind::Vector(info),
            "TEXT" => NodeKind::Text {
                info,
                style: raw.style,
            },
            "COMPONENT" => NodeKind::Component(ComponentInfo {
                absolute_bounding_box: raw.absolute_bounding_box.unwrap_or_default(),
            }),
            _ => NodeKind::Container,
        };
        Node {
            id: raw.id,
            name: raw.name,
            children: raw.children,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = r##"{
        "name": "Tokens",
        "document": {
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [
                {
                    "id": "1:1",
                    "name": "Red",
                    "type": "RECTANGLE",
                    "styles": { "fill": "S:1" },
                    "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0, "a": 1 } }]
                },
                {
                    "id": "1:2",
                    "name": "Title",
                    "type": "TEXT",
                    "styles": { "text": "S:2" },
                    "style": { "fontFamily": "Inter", "fontWeight": 700, "fontSize": 24, "lineHeightPx": 32 }
                },
                {
                    "id": "1:3",
                    "name": "Small",
                    "type": "COMPONENT",
                    "absoluteBoundingBox": { "x": 0, "y": 0, "width": 8, "height": 8 }
                }
            ]
        },
        "components": { "1:3": { "key": "abc", "name": "Small", "description": "" } },
        "styles": {
            "S:1": { "key": "k1", "name": "Primary", "styleType": "FILL" },
            "S:2": { "key": "k2", "name": "Title", "styleType": "TEXT" },
            "S:3": { "key": "k3", "name": "Shadow", "styleType": "EFFECT" }
        }
    }"##;

    #[test]
    fn test_parse_file() {
        let doc = Document::from_json(FILE).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Tokens"));
        assert_eq!(doc.document.kind, NodeKind::Container);
        assert_eq!(doc.document.children.len(), 3);
        assert_eq!(doc.styles["S:3"].style_type, StyleType::Other);
        assert_eq!(doc.components["1:3"].name.as_deref(), Some("Small"));

        let rect = &doc.document.children[0];
        let info = rect.vector_info().unwrap();
        assert_eq!(info.style_id(StyleType::Fill), Some("S:1"));
        assert_eq!(info.style_id(StyleType::Text), None);
        assert!(info.single_solid_fill().is_some());

        match &doc.document.children[1].kind {
            NodeKind::Text { style, .. } => {
                let style = style.as_ref().unwrap();
                assert_eq!(style.font_family.as_deref(), Some("Inter"));
                assert_eq!(style.line_height, Some(32.0));
                assert_eq!(style.font_post_script_name, None);
            }
            other => panic!("expected text node, got {other:?}"),
        }

        match &doc.document.children[2].kind {
            NodeKind::Component(info) => assert_eq!(info.absolute_bounding_box.height, Some(8.0)),
            other => panic!("expected component node, got {other:?}"),
        }
    }

    #[test]
    fn test_single_solid_fill() {
        let solid = Paint {
            paint_type: PaintType::Solid,
            color: None,
        };
        let gradient = Paint {
            paint_type: PaintType::Other,
            color: None,
        };
        let info = |fills: Option<Vec<Paint>>| VectorInfo {
            styles: IndexMap::new(),
            fills,
        };
        assert!(info(Some(vec![solid.clone()])).single_solid_fill().is_some());
        assert!(info(Some(vec![gradient.clone()])).single_solid_fill().is_none());
        assert!(info(Some(vec![solid.clone(), solid])).single_solid_fill().is_none());
        assert!(info(Some(vec![])).single_solid_fill().is_none());
        assert!(info(None).single_solid_fill().is_none());
    }

    #[test]
    fn test_parse_nodes_response() {
        let data = format!(r#"{{ "name": "Tokens", "nodes": {{ "1:1": {FILE}, "9:9": null }} }}"#);
        let docs = parse_documents(&data).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].document.id, "0:0");

        let docs = parse_documents(FILE).unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_component_without_bounding_box() {
        let node: Node =
            serde_json::from_str(r#"{ "id": "2:1", "name": "Gap", "type": "COMPONENT" }"#)
                .unwrap();
        assert_eq!(
            node.kind,
            NodeKind::Component(ComponentInfo::default())
        );
    }
}
