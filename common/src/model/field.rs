//! Field placements: the typed items a user drops into a zone, and their
//! style overrides.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::i18n::{tr, Lang, Text};

/// Smallest width a resize or width override may produce.
pub const MIN_WIDTH_PX: u32 = 50;
/// Smallest height a resize may produce.
pub const MIN_HEIGHT_PX: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    CompanyName,
    Logo,
    Date,
    PageNumber,
    CustomText,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::CompanyName,
        FieldKind::Logo,
        FieldKind::Date,
        FieldKind::PageNumber,
        FieldKind::CustomText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::CompanyName => "company_name",
            FieldKind::Logo => "logo",
            FieldKind::Date => "date",
            FieldKind::PageNumber => "page_number",
            FieldKind::CustomText => "custom_text",
        }
    }

    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            FieldKind::CompanyName => tr(lang, Text::CompanyName),
            FieldKind::Logo => tr(lang, Text::Logo),
            FieldKind::Date => tr(lang, Text::Date),
            FieldKind::PageNumber => tr(lang, Text::PageNumber),
            FieldKind::CustomText => tr(lang, Text::CustomText),
        }
    }

    /// Font Awesome icon name shown next to the field.
    pub fn icon(self) -> &'static str {
        match self {
            FieldKind::CompanyName => "building",
            FieldKind::Logo => "image",
            FieldKind::Date => "calendar",
            FieldKind::PageNumber => "hashtag",
            FieldKind::CustomText => "text-width",
        }
    }

    /// Zone content stored for kinds whose text is derived at print time.
    pub fn token(self) -> Option<String> {
        match self {
            FieldKind::CustomText => None,
            kind => Some(format!("{{{{{}}}}}", kind.as_str())),
        }
    }

    fn from_token(content: &str) -> Option<FieldKind> {
        let name = content.trim().strip_prefix("{{")?.strip_suffix("}}")?;
        match name.parse() {
            Ok(FieldKind::CustomText) | Err(_) => None,
            Ok(kind) => Some(kind),
        }
    }
}

impl FromStr for FieldKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| ModelError::new("field kind", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 6] = [
        FontSize::XSmall,
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::XLarge,
        FontSize::XXLarge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::XSmall => "xsmall",
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::XLarge => "xlarge",
            FontSize::XXLarge => "xxlarge",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            FontSize::XSmall => "10px",
            FontSize::Small => "12px",
            FontSize::Medium => "14px",
            FontSize::Large => "16px",
            FontSize::XLarge => "18px",
            FontSize::XXLarge => "22px",
        }
    }

    pub fn label(self, lang: Lang) -> &'static str {
        size_label(lang, self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = ModelError;

    /// Accepts a step name (`medium`) or its CSS value (`14px`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FontSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s || size.css() == s)
            .ok_or_else(|| ModelError::new("font size", s))
    }
}

/// Width steps offered for the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
}

impl LogoSize {
    pub const ALL: [LogoSize; 5] = [
        LogoSize::XSmall,
        LogoSize::Small,
        LogoSize::Medium,
        LogoSize::Large,
        LogoSize::XLarge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogoSize::XSmall => "xsmall",
            LogoSize::Small => "small",
            LogoSize::Medium => "medium",
            LogoSize::Large => "large",
            LogoSize::XLarge => "xlarge",
        }
    }

    pub fn px(self) -> u32 {
        match self {
            LogoSize::XSmall => 60,
            LogoSize::Small => 80,
            LogoSize::Medium => 120,
            LogoSize::Large => 160,
            LogoSize::XLarge => 200,
        }
    }

    pub fn from_px(px: u32) -> Option<LogoSize> {
        LogoSize::ALL.into_iter().find(|size| size.px() == px)
    }

    pub fn label(self, lang: Lang) -> &'static str {
        size_label(lang, self.as_str())
    }
}

fn size_label(lang: Lang, step: &str) -> &'static str {
    let text = match step {
        "xsmall" => Text::XSmall,
        "small" => Text::Small,
        "large" => Text::Large,
        "xlarge" => Text::XLarge,
        "xxlarge" => Text::XXLarge,
        _ => Text::Medium,
    };
    tr(lang, text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Right, TextAlign::Center, TextAlign::Left];

    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            TextAlign::Left => tr(lang, Text::Left),
            TextAlign::Center => tr(lang, Text::Center),
            TextAlign::Right => tr(lang, Text::Right),
        }
    }
}

impl FromStr for TextAlign {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            _ => Err(ModelError::new("text alignment", s)),
        }
    }
}

/// Per-field overrides set from the property panel or the resize handle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl FieldStyle {
    /// Inline CSS for the overrides that are set.
    pub fn css(&self) -> String {
        let mut css = String::new();
        if let Some(size) = self.font_size {
            css.push_str(&format!("font-size: {};", size.css()));
        }
        if let Some(align) = self.text_align {
            css.push_str(&format!("text-align: {};", align.as_str()));
        }
        if let Some(color) = &self.color {
            css.push_str(&format!("color: {};", color));
        }
        if let Some(width) = self.width {
            css.push_str(&format!("width: {}px;", width));
        }
        if let Some(height) = self.height {
            css.push_str(&format!("height: {}px;", height));
        }
        css
    }
}

/// Style property names accepted by the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    FontSize,
    TextAlign,
    Color,
    Width,
    Height,
}

impl FromStr for StyleProperty {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fontSize" | "font_size" => Ok(StyleProperty::FontSize),
            "textAlign" | "text_align" => Ok(StyleProperty::TextAlign),
            "color" => Ok(StyleProperty::Color),
            "width" => Ok(StyleProperty::Width),
            "height" => Ok(StyleProperty::Height),
            _ => Err(ModelError::new("style property", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleChange {
    FontSize(FontSize),
    TextAlign(TextAlign),
    Color(String),
    Width(u32),
    Height(u32),
}

impl StyleChange {
    /// Builds a change from a property and the raw value of its control.
    /// Widths accept a logo size step (`large`) or pixels (`160px`).
    pub fn parse(property: StyleProperty, value: &str) -> Result<Self, ModelError> {
        match property {
            StyleProperty::FontSize => Ok(StyleChange::FontSize(value.parse()?)),
            StyleProperty::TextAlign => Ok(StyleChange::TextAlign(value.parse()?)),
            StyleProperty::Color => parse_color(value).map(StyleChange::Color),
            StyleProperty::Width => LogoSize::ALL
                .into_iter()
                .find(|size| size.as_str() == value.trim())
                .map(LogoSize::px)
                .or_else(|| parse_px(value))
                .map(StyleChange::Width)
                .ok_or_else(|| ModelError::new("width", value)),
            StyleProperty::Height => parse_px(value)
                .map(StyleChange::Height)
                .ok_or_else(|| ModelError::new("height", value)),
        }
    }
}

fn parse_px(value: &str) -> Option<u32> {
    let value = value.trim();
    value.strip_suffix("px").unwrap_or(value).trim().parse().ok()
}

fn parse_color(value: &str) -> Result<String, ModelError> {
    let value = value.trim();
    let valid = value
        .strip_prefix('#')
        .filter(|hex| matches!(hex.len(), 3 | 6))
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(value.to_ascii_lowercase())
    } else {
        Err(ModelError::new("color", value))
    }
}

const TOKEN_ESCAPE: char = '\\';

fn looks_like_token(content: &str) -> bool {
    content
        .trim_start()
        .trim_start_matches(TOKEN_ESCAPE)
        .starts_with("{{")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPlacement {
    pub kind: FieldKind,
    /// Text of a `custom_text` field; empty for the other kinds.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub style: FieldStyle,
}

impl FieldPlacement {
    pub fn new(kind: FieldKind, content: Option<&str>) -> Self {
        let content = match kind {
            FieldKind::CustomText => content.unwrap_or_default().to_string(),
            _ => String::new(),
        };
        Self {
            kind,
            content,
            style: FieldStyle::default(),
        }
    }

    /// Text rendered in the preview. `today` is the already formatted date.
    pub fn display_text(&self, lang: Lang, today: &str) -> String {
        match self.kind {
            FieldKind::Date => today.to_string(),
            FieldKind::PageNumber => format!("{} 1", tr(lang, Text::Page)),
            FieldKind::CustomText if !self.content.trim().is_empty() => self.content.clone(),
            kind => kind.label(lang).to_string(),
        }
    }

    /// Value written to the zone's `*_content` form field.
    ///
    /// Custom text starting with `{{` (after any backslashes) gets one extra
    /// leading backslash so it can never be read back as a kind token.
    pub fn wire_content(&self) -> String {
        match self.kind.token() {
            Some(token) => token,
            None if looks_like_token(&self.content) => format!("{}{}", TOKEN_ESCAPE, self.content),
            None => self.content.clone(),
        }
    }

    /// Inverse of [`wire_content`](Self::wire_content). Blank content means an
    /// empty zone; text that is not a kind token is custom text.
    pub fn from_wire_content(content: &str) -> Option<Self> {
        if content.trim().is_empty() {
            return None;
        }
        if let Some(escaped) = content.strip_prefix(TOKEN_ESCAPE) {
            if looks_like_token(escaped) {
                return Some(FieldPlacement::new(FieldKind::CustomText, Some(escaped)));
            }
        }
        Some(match FieldKind::from_token(content) {
            Some(kind) => FieldPlacement::new(kind, None),
            None => FieldPlacement::new(FieldKind::CustomText, Some(content)),
        })
    }

    pub fn apply(&mut self, change: StyleChange) {
        match change {
            StyleChange::FontSize(size) => self.style.font_size = Some(size),
            StyleChange::TextAlign(align) => self.style.text_align = Some(align),
            StyleChange::Color(color) => self.style.color = Some(color),
            StyleChange::Width(width) => self.style.width = Some(width.max(MIN_WIDTH_PX)),
            StyleChange::Height(height) => self.style.height = Some(height.max(MIN_HEIGHT_PX)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_custom_text_keeps_content() {
        assert_eq!(FieldPlacement::new(FieldKind::CustomText, Some("Hi")).content, "Hi");
        assert_eq!(FieldPlacement::new(FieldKind::Date, Some("Hi")).content, "");
    }

    #[test]
    fn display_text_derives_from_kind() {
        let today = "10/18/2026";
        let date = FieldPlacement::new(FieldKind::Date, None);
        let page = FieldPlacement::new(FieldKind::PageNumber, None);
        let empty_text = FieldPlacement::new(FieldKind::CustomText, None);
        let company = FieldPlacement::new(FieldKind::CompanyName, None);
        assert_eq!(date.display_text(Lang::En, today), today);
        assert_eq!(page.display_text(Lang::En, today), "Page 1");
        assert_eq!(page.display_text(Lang::Ar, today), "صفحة 1");
        assert_eq!(empty_text.display_text(Lang::En, today), "Custom Text");
        assert_eq!(company.display_text(Lang::En, today), "Company Name");
    }

    #[test]
    fn wire_content_round_trips_every_kind() {
        for kind in FieldKind::ALL {
            let placement = FieldPlacement::new(kind, Some("Thank you"));
            let restored = FieldPlacement::from_wire_content(&placement.wire_content());
            assert_eq!(restored.as_ref().map(|p| p.kind), Some(kind));
        }
        assert_eq!(FieldKind::Logo.token().as_deref(), Some("{{logo}}"));
    }

    #[test]
    fn plain_wire_content_is_custom_text() {
        let placement = FieldPlacement::from_wire_content("Tax No. 123").unwrap();
        assert_eq!(placement.kind, FieldKind::CustomText);
        assert_eq!(placement.content, "Tax No. 123");
        assert!(FieldPlacement::from_wire_content("   ").is_none());
        let unknown = FieldPlacement::from_wire_content("{{signature}}").unwrap();
        assert_eq!(unknown.kind, FieldKind::CustomText);
    }

    #[test]
    fn custom_text_shaped_like_a_token_stays_custom_text() {
        for text in ["{{date}}", "{{logo}}", " {{page_number}}", "\\{{date}}", "\\\\{{x}}"] {
            let placement = FieldPlacement::new(FieldKind::CustomText, Some(text));
            let wire = placement.wire_content();
            assert!(wire.starts_with('\\'), "{wire}");
            let restored = FieldPlacement::from_wire_content(&wire).unwrap();
            assert_eq!(restored, placement, "{wire}");
        }
    }

    #[test]
    fn backslash_text_without_braces_is_stored_verbatim() {
        let placement = FieldPlacement::new(FieldKind::CustomText, Some("\\n total"));
        assert_eq!(placement.wire_content(), "\\n total");
        assert_eq!(FieldPlacement::from_wire_content("\\n total").unwrap(), placement);
        assert_eq!(
            FieldPlacement::from_wire_content("{{date}}").map(|p| p.kind),
            Some(FieldKind::Date)
        );
    }

    #[test]
    fn style_changes_parse_from_control_values() {
        assert_eq!(
            StyleChange::parse(StyleProperty::FontSize, "16px"),
            Ok(StyleChange::FontSize(FontSize::Large))
        );
        assert_eq!(
            StyleChange::parse(StyleProperty::Width, "large"),
            Ok(StyleChange::Width(160))
        );
        assert_eq!(
            StyleChange::parse(StyleProperty::Width, "75px"),
            Ok(StyleChange::Width(75))
        );
        assert_eq!(
            StyleChange::parse(StyleProperty::Color, "#FF0000"),
            Ok(StyleChange::Color("#ff0000".into()))
        );
        assert!(StyleChange::parse(StyleProperty::Color, "red").is_err());
        assert!(StyleChange::parse(StyleProperty::TextAlign, "justify").is_err());
        assert_eq!("textAlign".parse(), Ok(StyleProperty::TextAlign));
    }

    #[test]
    fn size_overrides_respect_minimums() {
        let mut placement = FieldPlacement::new(FieldKind::Logo, None);
        placement.apply(StyleChange::Width(10));
        placement.apply(StyleChange::Height(5));
        assert_eq!(placement.style.width, Some(MIN_WIDTH_PX));
        assert_eq!(placement.style.height, Some(MIN_HEIGHT_PX));
        assert_eq!(placement.style.css(), "width: 50px;height: 30px;");
    }
}
