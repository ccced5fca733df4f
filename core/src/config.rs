//! `.figmagen.yml` configuration: shared base settings plus one optional
//! section per token kind.

use std::{
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    naming::{NameStyle, NamingRule},
    traversal::NodeFilter,
    Error, Result,
};

pub const DEFAULT_CONFIGURATION_PATH: &str = ".figmagen.yml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseConfiguration {
    pub file_key: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub base: Option<BaseConfiguration>,
    pub colors: Option<StepConfiguration>,
    pub text_styles: Option<StepConfiguration>,
    pub spacings: Option<StepConfiguration>,
}
impl Configuration {
    pub fn from_yaml(data: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(data)?)
    }
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }
    pub fn resolve_colors(&self, base_path: &Path) -> Option<StepConfiguration> {
        self.colors
            .as_ref()
            .map(|step| step.resolve(self.base.as_ref(), base_path))
    }
    pub fn resolve_text_styles(&self, base_path: &Path) -> Option<StepConfiguration> {
        self.text_styles
            .as_ref()
            .map(|step| step.resolve(self.base.as_ref(), base_path))
    }
    pub fn resolve_spacings(&self, base_path: &Path) -> Option<StepConfiguration> {
        self.spacings
            .as_ref()
            .map(|step| step.resolve(self.base.as_ref(), base_path))
    }
    /// Node ids any step includes, in order of first mention. These are the
    /// ids a nodes request has to ask for.
    pub fn required_node_ids(&self) -> Vec<String> {
        [&self.colors, &self.spacings, &self.text_styles]
            .into_iter()
            .flatten()
            .flat_map(|step| step.including_nodes.iter().flatten())
            .unique()
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepConfiguration {
    pub file_key: Option<String>,
    pub access_token: Option<String>,
    pub including_nodes: Option<Vec<String>>,
    pub excluding_nodes: Option<Vec<String>>,
    pub template_path: Option<String>,
    pub destination_path: Option<String>,
    pub name_validate_regexp: Option<String>,
    pub name_replace_regexp: Option<String>,
    pub name_style: Option<NameStyle>,
}
impl StepConfiguration {
    /// Fills in credentials from `base` and makes template and destination
    /// paths relative to `base_path`.
    pub fn resolve(&self, base: Option<&BaseConfiguration>, base_path: &Path) -> Self {
        let relative = |path: &Option<String>| {
            path.as_ref()
                .map(|path| base_path.join(path).to_string_lossy().into_owned())
        };
        StepConfiguration {
            file_key: self
                .file_key
                .clone()
                .or_else(|| base.and_then(|base| base.file_key.clone())),
            access_token: self
                .access_token
                .clone()
                .or_else(|| base.and_then(|base| base.access_token.clone())),
            template_path: relative(&self.template_path),
            destination_path: relative(&self.destination_path),
            ..self.clone()
        }
    }
    pub fn file_key(&self) -> Result<&str> {
        self.file_key
            .as_deref()
            .ok_or(Error::MissingConfiguration("fileKey"))
    }
    pub fn filter(&self) -> NodeFilter {
        NodeFilter::new(self.including_nodes.clone(), self.excluding_nodes.clone())
    }
    /// Naming rule of the step; names are camel cased unless another style
    /// is configured.
    pub fn naming_rule(&self) -> Result<NamingRule> {
        NamingRule::new(
            self.name_validate_regexp.as_deref(),
            self.name_replace_regexp.as_deref(),
            Some(self.name_style.unwrap_or(NameStyle::CamelCase)),
        )
    }
    pub fn template(&self, default_template: &str) -> TemplateType {
        match &self.template_path {
            Some(path) => TemplateType::Custom(PathBuf::from(path)),
            None => TemplateType::Native(default_template.to_string()),
        }
    }
    pub fn destination(&self, default_destination: &str) -> PathBuf {
        PathBuf::from(
            self.destination_path
                .as_deref()
                .unwrap_or(default_destination),
        )
    }
}

/// Where a renderer takes its template from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateType {
    /// A template built into the renderer, by name.
    Native(String),
    /// A template file.
    Custom(PathBuf),
}
