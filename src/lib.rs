//! Generates CSS and Rust sources from the design tokens of Figma documents.
//!
//! Extraction lives in [`figma_design_tokens_core`]; this crate renders the
//! extracted tokens and drives the configured generation steps.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use figma_design_tokens_core::{
    extract, Color, Configuration, Diagnostics, Document, Spacing, StepConfiguration,
    TemplateType, TextStyle, Token,
};

pub mod extensions;

pub use extensions::TokenExt;

/// Native template used when a step configures no template path.
pub const DEFAULT_TEMPLATE: &str = "rust";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] figma_design_tokens_core::Error),

    #[error("Unknown native template '{0}', expected 'css', 'json' or 'rust'")]
    UnknownTemplate(String),

    #[error("Custom templates are not supported: {}", .0.display())]
    UnsupportedTemplate(PathBuf),

    #[error("Failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeTemplate {
    Css,
    Json,
    Rust,
}

impl FromStr for NativeTemplate {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "css" => Ok(NativeTemplate::Css),
            "json" => Ok(NativeTemplate::Json),
            "rust" => Ok(NativeTemplate::Rust),
            _ => Err(Error::UnknownTemplate(name.to_string())),
        }
    }
}

/// Renders `tokens` into the contents of a single file.
pub fn render<T: TokenExt + Serialize>(
    tokens: &[T],
    template: &TemplateType,
) -> Result<String> {
    let template = match template {
        TemplateType::Native(name) => name.parse::<NativeTemplate>()?,
        TemplateType::Custom(path) => return Err(Error::UnsupportedTemplate(path.clone())),
    };
    Ok(match template {
        NativeTemplate::Css => format!("{}\n", tokens.iter().map(T::to_css).join("\n")),
        NativeTemplate::Json => format!("{}\n", serde_json::to_string_pretty(tokens)?),
        NativeTemplate::Rust => format!(
            "// Generated by figma-design-tokens. Do not edit.\n\n{}\n",
            tokens.iter().map(T::to_rust).join("\n")
        ),
    })
}

/// Renders `tokens` and writes them to `destination`, creating missing
/// directories.
pub fn render_to_file<T: TokenExt + Serialize>(
    tokens: &[T],
    template: &TemplateType,
    destination: &Path,
) -> Result<()> {
    let contents = render(tokens, template)?;
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, contents)?;
    Ok(())
}

/// Extracts one kind of token as `step` describes and, unless `lint` is
/// set, writes it out.
pub fn generate_step<T: Token + TokenExt + Serialize>(
    documents: &[Document],
    step: &StepConfiguration,
    lint: bool,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<T>> {
    let template = step.template(DEFAULT_TEMPLATE);
    generate_step_with_template(documents, step, &template, lint, diagnostics)
}

/// Like [`generate_step`], rendering with `template` instead of the step's.
pub fn generate_step_with_template<T: Token + TokenExt + Serialize>(
    documents: &[Document],
    step: &StepConfiguration,
    template: &TemplateType,
    lint: bool,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<T>> {
    if let Ok(file_key) = step.file_key() {
        diagnostics.debug(format!("Extracting {} of file {file_key}", T::KIND));
    }
    let tokens: Vec<T> = extract(documents, &step.filter(), &step.naming_rule()?, diagnostics)?;
    if lint {
        return Ok(tokens);
    }
    diagnostics.info(format!("Start {} generation", T::KIND));
    render_to_file(&tokens, template, &step.destination(T::DEFAULT_DESTINATION))?;
    diagnostics.success(format!("Complete {} generation", T::KIND));
    Ok(tokens)
}

/// Runs every step `configuration` declares. Relative paths are resolved
/// against `base_path`, the directory holding the configuration file.
pub fn generate(
    documents: &[Document],
    configuration: &Configuration,
    base_path: &Path,
    lint: bool,
    diagnostics: &dyn Diagnostics,
) -> Result<()> {
    let node_ids = configuration.required_node_ids();
    if !node_ids.is_empty() {
        diagnostics.debug(format!("Configured node ids: {}", node_ids.join(", ")));
    }
    if let Some(step) = configuration.resolve_colors(base_path) {
        generate_step::<Color>(documents, &step, lint, diagnostics)?;
    }
    if let Some(step) = configuration.resolve_text_styles(base_path) {
        generate_step::<TextStyle>(documents, &step, lint, diagnostics)?;
    }
    if let Some(step) = configuration.resolve_spacings(base_path) {
        generate_step::<Spacing>(documents, &step, lint, diagnostics)?;
    }
    Ok(())
}
