use serde::{Deserialize, Serialize};

use crate::model::field::{FieldKind, FieldStyle};
use crate::model::settings::{DocumentTemplateSettings, SettingsRecord};
use crate::model::zone::{Position, Section};

/// The JSON file offered by the export button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignExport {
    pub document_type: String,
    pub settings: SettingsRecord,
    pub elements: Vec<ExportedElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedElement {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub content: String,
    pub section: Section,
    pub position: Position,
    pub styles: FieldStyle,
}

impl DesignExport {
    pub fn from_settings(settings: &DocumentTemplateSettings) -> Self {
        let elements = settings
            .zones
            .occupied()
            .map(|(zone, placement)| ExportedElement {
                kind: placement.kind,
                content: placement.content.clone(),
                section: zone.section,
                position: zone.position,
                styles: placement.style.clone(),
            })
            .collect();
        Self {
            document_type: settings.document_type.clone(),
            settings: settings.to_record(),
            elements,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}_design.json", self.document_type)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
