//! Extraction of design tokens (colors, text styles and spacings) from
//! Figma documents.
//!
//! ```no_run
//! use figma_design_tokens_core::{
//!     extract, parse_documents, Color, LogDiagnostics, NameStyle, NamingRule, NodeFilter,
//! };
//!
//! fn main() -> figma_design_tokens_core::Result<()> {
//!     let documents = parse_documents(&std::fs::read_to_string("tokens.json")?)?;
//!     let colors: Vec<Color> = extract(
//!         &documents,
//!         &NodeFilter::default(),
//!         &NamingRule::with_style(NameStyle::CamelCase),
//!         &LogDiagnostics,
//!     )?;
//!     println!("{colors:#?}");
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod spacing;
pub mod text_style;
pub mod traversal;

#[cfg(test)]
mod test_support;

pub use color::{extract_color, extract_colors, Color};
pub use config::{Configuration, StepConfiguration, TemplateType};
pub use diagnostics::{
    CollectingDiagnostics, Diagnostic, Diagnostics, Level, LogDiagnostics, SilentDiagnostics,
};
pub use document::{parse_documents, Document, Node, NodeKind, NodesResponse};
pub use error::{Error, NodeIssue, NodeRef, Result};
pub use naming::{NameStyle, NamingRule};
pub use pipeline::extract;
pub use spacing::{extract_spacing, extract_spacings, Spacing};
pub use text_style::{extract_text_style, extract_text_styles, FontWeightType, TextStyle};
pub use traversal::{extract_nodes, NodeFilter, Nodes};

/// A kind of design token that can be pulled out of a [`Document`].
pub trait Token: Clone + PartialEq + Send {
    /// Plural, human readable name of the kind, used in diagnostics.
    const KIND: &'static str;

    /// Tokens of one document, in the order the kind defines.
    fn extract(
        document: &Document,
        filter: &NodeFilter,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<Self>>;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

/// Drops every item equal to an earlier one, keeping first occurrences in
/// order.
pub(crate) fn dedup<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().fold(Vec::new(), |mut unique, item| {
        if !unique.contains(&item) {
            unique.push(item);
        }
        unique
    })
}

#[test]
fn test_dedup() {
    assert_eq!(dedup([1, 2, 1, 3, 2]), [1, 2, 3]);
    assert_eq!(dedup(Vec::<u8>::new()), Vec::<u8>::new());
}
