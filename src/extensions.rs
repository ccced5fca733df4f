use convert_case::{Case, Casing};
use csscolorparser::Color as CssColor;
use figma_design_tokens_core::{Color, Spacing, TextStyle};
use itertools::Itertools;
use slug::slugify;

/// Output forms of an extracted token.
pub trait TokenExt {
    /// File written when a step does not configure a destination.
    const DEFAULT_DESTINATION: &'static str;

    fn to_css(&self) -> String;
    fn to_rust(&self) -> String;
}

impl TokenExt for Color {
    const DEFAULT_DESTINATION: &'static str = "Generated/Colors.rs";

    fn to_css(&self) -> String {
        format!(
            ":root {{ --color-{}: {}; }}",
            slugify(&self.name),
            hex(self)
        )
    }
    fn to_rust(&self) -> String {
        format!(
            "/// {}\npub const {}: [f64; 4] = {};",
            hex(self),
            rust_const_name(&self.name),
            rgba(self)
        )
    }
}

impl TokenExt for TextStyle {
    const DEFAULT_DESTINATION: &'static str = "Generated/TextStyles.rs";

    fn to_css(&self) -> String {
        let mut entries = vec![
            format!("font-family: {:?};", self.font_family),
            format!("font-weight: {};", self.font_weight),
            format!("font-size: {}px;", self.font_size),
            format!("color: {};", hex(&self.text_color)),
        ];
        let optional = [
            ("line-height", self.line_height),
            ("letter-spacing", self.letter_spacing),
            ("margin-bottom", self.paragraph_spacing),
            ("text-indent", self.paragraph_indent),
        ];
        entries.extend(optional.iter().filter_map(|(property, value)| {
            value.map(|value| format!("{property}: {value}px;"))
        }));
        format!(
            ".text-{} {{\n{}\n}}",
            slugify(&self.name),
            entries.iter().map(|entry| format!("  {entry}")).join("\n")
        )
    }
    fn to_rust(&self) -> String {
        let consts = [
            format!("pub const FONT_FAMILY: &str = {:?};", self.font_family),
            format!("pub const FONT_NAME: &str = {:?};", self.font_post_script_name),
            format!("pub const IS_SYSTEM_FONT: bool = {};", self.is_system_font),
            format!("pub const FONT_WEIGHT: f64 = {:?};", self.font_weight),
            format!(
                "pub const FONT_WEIGHT_TYPE: &str = {:?};",
                format!("{:?}", self.font_weight_type).to_case(Case::Camel)
            ),
            format!("pub const FONT_SIZE: f64 = {:?};", self.font_size),
            format!("pub const TEXT_COLOR: [f64; 4] = {};", rgba(&self.text_color)),
            format!("pub const PARAGRAPH_SPACING: Option<f64> = {:?};", self.paragraph_spacing),
            format!("pub const PARAGRAPH_INDENT: Option<f64> = {:?};", self.paragraph_indent),
            format!("pub const LINE_HEIGHT: Option<f64> = {:?};", self.line_height),
            format!("pub const LETTER_SPACING: Option<f64> = {:?};", self.letter_spacing),
        ];
        format!(
            "pub mod {} {{\n{}\n}}",
            rust_ident(&self.name, Case::Snake),
            consts.iter().map(|c| format!("    {c}")).join("\n")
        )
    }
}

impl TokenExt for Spacing {
    const DEFAULT_DESTINATION: &'static str = "Generated/Spacings.rs";

    fn to_css(&self) -> String {
        format!(
            ":root {{ --spacing-{}: {}px; }}",
            slugify(&self.name),
            self.value
        )
    }
    fn to_rust(&self) -> String {
        format!(
            "pub const {}: f64 = {:?};",
            rust_const_name(&self.name),
            self.value
        )
    }
}

fn hex(color: &Color) -> String {
    CssColor::new(color.red, color.green, color.blue, color.alpha).to_hex_string()
}

fn rgba(color: &Color) -> String {
    format!(
        "[{:?}, {:?}, {:?}, {:?}]",
        color.red, color.green, color.blue, color.alpha
    )
}

fn rust_const_name(name: &str) -> String {
    rust_ident(name, Case::UpperSnake)
}

/// Turns a token name into a valid Rust identifier in `case`.
pub(crate) fn rust_ident(name: &str, case: Case) -> String {
    let ascii = deunicode::deunicode(name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>();
    let ident = ascii.to_case(case);
    match ident.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => ident,
        _ => format!("_{ident}"),
    }
}
