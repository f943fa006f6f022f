//! Print settings of one document type, in the shape the designer edits
//! ([`DocumentTemplateSettings`]) and the shape the server exchanges
//! ([`SettingsRecord`]).

use serde::{Deserialize, Serialize};

use crate::model::field::{FieldKind, FieldPlacement};
use crate::model::paper::{Orientation, PaperSize, DEFAULT_MARGINS_MM};
use crate::model::zone::{Position, Section, Zone, ZoneSlots};

/// Settings as served by `settings/api/document-settings/{type}/`.
///
/// Every field is optional on the way in: older rows miss orientation and
/// margins, and unconfigured zones come back as `null` or `""`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsRecord {
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub paper_size: Option<String>,
    #[serde(default)]
    pub orientation: Option<String>,
    #[serde(default)]
    pub margins: Option<f64>,
    #[serde(default)]
    pub header_left_content: Option<String>,
    #[serde(default)]
    pub header_center_content: Option<String>,
    #[serde(default)]
    pub header_right_content: Option<String>,
    #[serde(default)]
    pub footer_left_content: Option<String>,
    #[serde(default)]
    pub footer_center_content: Option<String>,
    #[serde(default)]
    pub footer_right_content: Option<String>,
    #[serde(default)]
    pub show_logo: Option<bool>,
    #[serde(default)]
    pub logo_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name_en: Option<String>,
}

impl SettingsRecord {
    pub fn zone_content(&self, zone: Zone) -> Option<&str> {
        let content = match (zone.section, zone.position) {
            (Section::Header, Position::Left) => &self.header_left_content,
            (Section::Header, Position::Center) => &self.header_center_content,
            (Section::Header, Position::Right) => &self.header_right_content,
            (Section::Footer, Position::Left) => &self.footer_left_content,
            (Section::Footer, Position::Center) => &self.footer_center_content,
            (Section::Footer, Position::Right) => &self.footer_right_content,
        };
        content.as_deref()
    }

    fn set_zone_content(&mut self, zone: Zone, content: String) {
        let slot = match (zone.section, zone.position) {
            (Section::Header, Position::Left) => &mut self.header_left_content,
            (Section::Header, Position::Center) => &mut self.header_center_content,
            (Section::Header, Position::Right) => &mut self.header_right_content,
            (Section::Footer, Position::Left) => &mut self.footer_left_content,
            (Section::Footer, Position::Center) => &mut self.footer_center_content,
            (Section::Footer, Position::Right) => &mut self.footer_right_content,
        };
        *slot = Some(content);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTemplateSettings {
    pub document_type: String,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Page margins in millimetres.
    pub margins: u32,
    pub zones: ZoneSlots,
    pub document_name_ar: Option<String>,
    pub document_name_en: Option<String>,
}

impl DocumentTemplateSettings {
    /// Layout used when the server has nothing stored for `document_type`:
    /// A4 portrait with only the logo, centered in the header.
    pub fn default_for(document_type: &str) -> Self {
        let mut zones = ZoneSlots::default();
        zones.insert(Zone::HEADER_CENTER, FieldPlacement::new(FieldKind::Logo, None));
        Self {
            document_type: document_type.to_string(),
            paper_size: PaperSize::default(),
            orientation: Orientation::default(),
            margins: DEFAULT_MARGINS_MM,
            zones,
            document_name_ar: None,
            document_name_en: None,
        }
    }

    /// Builds the editable settings from a server record. Unknown paper
    /// values fall back to the defaults so size and orientation are always set.
    pub fn from_record(document_type: &str, record: &SettingsRecord) -> Self {
        let paper_size = record
            .paper_size
            .as_deref()
            .map(|value| {
                value.parse().unwrap_or_else(|err| {
                    log::warn!("{}; using {}", err, PaperSize::default());
                    PaperSize::default()
                })
            })
            .unwrap_or_default();
        let orientation = record
            .orientation
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        let margins = record
            .margins
            .filter(|m| m.is_finite() && *m >= 0.0)
            .map(|m| m.round() as u32)
            .unwrap_or(DEFAULT_MARGINS_MM);

        let mut zones = ZoneSlots::default();
        for zone in Zone::ALL {
            if let Some(placement) = record.zone_content(zone).and_then(FieldPlacement::from_wire_content) {
                zones.insert(zone, placement);
            }
        }

        // Rows saved before logo tokens existed only carry the flag and a
        // header position.
        if record.show_logo.unwrap_or(false) && zones.find_kind(FieldKind::Logo).is_none() {
            let position = record
                .logo_position
                .as_deref()
                .and_then(|value| value.parse().ok())
                .unwrap_or_default();
            let zone = Zone::new(Section::Header, position);
            if zones.is_empty(zone) {
                zones.insert(zone, FieldPlacement::new(FieldKind::Logo, None));
            }
        }

        Self {
            document_type: document_type.to_string(),
            paper_size,
            orientation,
            margins,
            zones,
            document_name_ar: record.document_name_ar.clone(),
            document_name_en: record.document_name_en.clone(),
        }
    }

    /// Where the logo sits, if one is placed.
    pub fn logo_zone(&self) -> Option<Zone> {
        self.zones.find_kind(FieldKind::Logo)
    }

    pub fn to_record(&self) -> SettingsRecord {
        let logo_zone = self.logo_zone();
        let mut record = SettingsRecord {
            document_type: Some(self.document_type.clone()),
            paper_size: Some(self.paper_size.as_str().to_string()),
            orientation: Some(self.orientation.as_str().to_string()),
            margins: Some(f64::from(self.margins)),
            show_logo: Some(logo_zone.is_some()),
            logo_position: Some(
                logo_zone
                    .map(|zone| zone.position)
                    .unwrap_or_default()
                    .as_str()
                    .to_string(),
            ),
            document_name_ar: self.document_name_ar.clone(),
            document_name_en: self.document_name_en.clone(),
            ..SettingsRecord::default()
        };
        for (zone, placement) in self.zones.iter() {
            record.set_zone_content(zone, placement.map(FieldPlacement::wire_content).unwrap_or_default());
        }
        record
    }
}
