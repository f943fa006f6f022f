use crate::i18n::{tr, Lang, Text};
use crate::model::field::{
    FieldKind, FieldPlacement, FontSize, LogoSize, StyleProperty, TextAlign,
};
use crate::model::zone::Zone;

pub const DEFAULT_COLOR: &str = "#000000";

/// Controls shown for the selected field, with their current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPanel {
    pub zone: Zone,
    pub kind: FieldKind,
    pub controls: Vec<PanelControl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelControl {
    Content(String),
    FontSize(FontSize),
    TextAlign(TextAlign),
    Color(String),
    /// `None` once the logo was resized to a width off the preset steps.
    LogoSize(Option<LogoSize>),
    LogoAlign(TextAlign),
}

impl PanelControl {
    /// Style property the control edits; `None` for the text content.
    pub fn property(&self) -> Option<StyleProperty> {
        match self {
            PanelControl::Content(_) => None,
            PanelControl::FontSize(_) => Some(StyleProperty::FontSize),
            PanelControl::TextAlign(_) | PanelControl::LogoAlign(_) => Some(StyleProperty::TextAlign),
            PanelControl::Color(_) => Some(StyleProperty::Color),
            PanelControl::LogoSize(_) => Some(StyleProperty::Width),
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        let text = match self {
            PanelControl::Content(_) => Text::TextLabel,
            PanelControl::FontSize(_) => Text::FontSize,
            PanelControl::TextAlign(_) => Text::TextAlign,
            PanelControl::Color(_) => Text::Color,
            PanelControl::LogoSize(_) => Text::LogoSize,
            PanelControl::LogoAlign(_) => Text::LogoAlign,
        };
        tr(lang, text)
    }
}

impl PropertyPanel {
    pub fn for_placement(zone: Zone, placement: &FieldPlacement) -> Self {
        let style = &placement.style;
        let font_size = PanelControl::FontSize(style.font_size.unwrap_or(FontSize::Medium));
        let align = style.text_align.unwrap_or(TextAlign::Center);
        let controls = match placement.kind {
            FieldKind::CustomText => vec![
                PanelControl::Content(placement.content.clone()),
                font_size,
                PanelControl::TextAlign(align),
                PanelControl::Color(
                    style.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                ),
            ],
            FieldKind::Logo => vec![
                PanelControl::LogoSize(match style.width {
                    Some(px) => LogoSize::from_px(px),
                    None => Some(LogoSize::Medium),
                }),
                PanelControl::LogoAlign(align),
            ],
            _ => vec![font_size, PanelControl::TextAlign(align)],
        };
        Self {
            zone,
            kind: placement.kind,
            controls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_style_control_names_the_property_it_edits() {
        let logo = FieldPlacement::new(FieldKind::Logo, None);
        let panel = PropertyPanel::for_placement(Zone::HEADER_CENTER, &logo);
        let properties: Vec<_> = panel.controls.iter().map(PanelControl::property).collect();
        assert_eq!(
            properties,
            vec![Some(StyleProperty::Width), Some(StyleProperty::TextAlign)]
        );

        let text = FieldPlacement::new(FieldKind::CustomText, Some("Hi"));
        let panel = PropertyPanel::for_placement(Zone::FOOTER_LEFT, &text);
        assert_eq!(panel.controls[0].property(), None);
        assert_eq!(panel.controls[3].property(), Some(StyleProperty::Color));
    }
}
