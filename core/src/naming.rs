//! Token name rewriting.
//!
//! A name first goes through the rewrite stage (a configured
//! pattern/template pair, or the default `/` normalization), then optionally
//! through a case conversion.

use itertools::Itertools;
use regex::{Captures, Regex};
use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NameStyle {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
}
impl NameStyle {
    pub fn apply(&self, name: &str) -> String {
        match self {
            NameStyle::CamelCase => to_lower_camel_case(name),
            NameStyle::SnakeCase => to_snake_case(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Group(usize),
}

peg::parser! {
  grammar template_parser() for str {
    rule group() -> Segment = "$" d:['0'..='9'] {?
        d.to_digit(10).map(|d| Segment::Group(d as usize)).ok_or("digit")
    }
    rule literal() -> Segment = v:$((!group() [_])+) { Segment::Literal(v.to_string()) }

    pub(crate) rule template() -> Vec<Segment> = (group() / literal())*
  }
}

/// Replacement text with `$0`..`$9` capture placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReplaceTemplate(Vec<Segment>);
impl ReplaceTemplate {
    fn parse(template: &str) -> Result<Self> {
        template_parser::template(template)
            .map(ReplaceTemplate)
            .map_err(|err| Error::InvalidReplaceTemplate {
                template: template.to_string(),
                reason: err.to_string(),
            })
    }
    fn max_group(&self) -> Option<usize> {
        self.0
            .iter()
            .filter_map(|segment| match segment {
                Segment::Group(index) => Some(*index),
                Segment::Literal(_) => None,
            })
            .max()
    }
    fn expand(&self, captures: &Captures, out: &mut String) {
        for segment in &self.0 {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Group(index) => {
                    if let Some(group) = captures.get(*index) {
                        out.push_str(group.as_str())
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Rewrite {
    pattern: Regex,
    template: ReplaceTemplate,
}
impl Rewrite {
    fn apply(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut last = 0;
        for captures in self.pattern.captures_iter(name) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            out.push_str(&name[last..whole.start()]);
            self.template.expand(&captures, &mut out);
            last = whole.end();
        }
        out.push_str(&name[last..]);
        out
    }
}

/// How raw token names are turned into the names handed to the renderer.
#[derive(Debug, Clone, Default)]
pub struct NamingRule {
    rewrite: Option<Rewrite>,
    style: Option<NameStyle>,
}
impl NamingRule {
    /// A rewrite is only set up when both `validate` and `replace` are given.
    pub fn new(
        validate: Option<&str>,
        replace: Option<&str>,
        style: Option<NameStyle>,
    ) -> Result<Self> {
        let rewrite = match (validate, replace) {
            (Some(validate), Some(replace)) => {
                let pattern = Regex::new(validate)?;
                let template = ReplaceTemplate::parse(replace)?;
                if let Some(index) = template.max_group() {
                    if index >= pattern.captures_len() {
                        return Err(Error::InvalidReplaceTemplate {
                            template: replace.to_string(),
                            reason: format!(
                                "group ${index} does not exist in pattern '{validate}'"
                            ),
                        });
                    }
                }
                Some(Rewrite { pattern, template })
            }
            _ => None,
        };
        Ok(NamingRule { rewrite, style })
    }
    pub fn with_style(style: NameStyle) -> Self {
        NamingRule {
            rewrite: None,
            style: Some(style),
        }
    }
    pub fn style(&self) -> Option<NameStyle> {
        self.style
    }
    pub fn process(&self, name: &str) -> String {
        self.process_with_style(name, self.style)
    }
    pub fn process_with_style(&self, name: &str, style: Option<NameStyle>) -> String {
        let name = match &self.rewrite {
            Some(rewrite) => rewrite.apply(name),
            None => normalize(name),
        };
        match style {
            Some(style) => style.apply(&name),
            None => name,
        }
    }
}

/// Collapses `"a/a"` into `"a"`; otherwise every `/` becomes `_`.
pub fn normalize(name: &str) -> String {
    let parts = name.split('/').filter(|part| !part.is_empty()).collect_vec();
    match parts.as_slice() {
        [first, second] if first == second => first.to_string(),
        _ => name.replace('/', "_"),
    }
}

/// Characters that only ever separate words. Case mappings never produce
/// one, so converted names never gain separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || c.is_ascii_punctuation()
        || ('\u{2010}'..='\u{2027}').contains(&c)
}

fn is_digit(c: char) -> bool {
    c.is_numeric() && !c.is_alphabetic()
}

/// Marks, symbols and other characters that are neither letters, digits
/// nor separators. They stick to the word they follow, which keeps the
/// combining marks some case mappings emit (`'İ'` lowercases to `"i\u{307}"`)
/// inside their word.
fn is_attached(c: char) -> bool {
    !is_separator(c) && !c.is_alphanumeric()
}

fn lowercases_to_itself(c: char) -> bool {
    c.to_lowercase().eq(std::iter::once(c))
}

/// Underscore separated words without any character lowercasing would
/// change.
pub fn is_snake_case(name: &str) -> bool {
    name.chars()
        .all(|c| c == '_' || (!is_separator(c) && lowercases_to_itself(c)))
}

/// Letters only, starting with a lowercase one.
pub fn is_lower_camel_case(name: &str) -> bool {
    match name.chars().next() {
        Some(first) => first.is_lowercase() && name.chars().all(char::is_alphabetic),
        None => false,
    }
}

/// Splits a name into words. A word continues with lowercase letters and
/// attached characters after any word character, and with digits after a
/// digit; separators are dropped.
fn words(name: &str) -> Vec<String> {
    let mut last = ' ';
    let mut words: Vec<String> = Vec::new();
    for c in name.chars() {
        let continues = !is_separator(last)
            && (c.is_lowercase() || is_attached(c) || (is_digit(last) && is_digit(c)));
        if continues {
            if let Some(word) = words.last_mut() {
                word.push(c);
            }
        } else if !is_separator(c) {
            words.push(c.to_string());
        }
        last = c;
    }
    words
}

/// Per character, so the result does not depend on the surrounding word
/// (no final sigma rule).
fn lowercase(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn to_lower_camel_case(name: &str) -> String {
    if is_lower_camel_case(name) {
        return name.to_string();
    }
    words(name)
        .iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { lowercase(word) } else { capitalize(word) })
        .collect()
}

pub fn to_snake_case(name: &str) -> String {
    if is_snake_case(name) {
        return name.to_string();
    }
    words(name).iter().map(|word| lowercase(word)).join("_")
}
