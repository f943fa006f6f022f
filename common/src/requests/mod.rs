//! Wire contract with the settings resource.
//!
//! Reads are `GET {prefix}/settings/api/document-settings/{type}/` returning
//! JSON. Writes are form-encoded `POST {prefix}/settings/print-design/`
//! requests discriminated by `action`; the server answers
//! `{ "success": bool, "error"?: string }`.

use serde::Deserialize;

use crate::error::ApiError;
use crate::model::paper::{Orientation, PaperSize, DEFAULT_MARGINS_MM};
use crate::model::settings::{DocumentTemplateSettings, SettingsRecord};
use crate::model::zone::Zone;

pub const SAVE_SETTINGS: &str = "save_settings";
pub const DELETE_SETTINGS: &str = "delete_settings";

pub fn settings_url(lang_prefix: &str, document_type: &str) -> String {
    format!("{}/settings/api/document-settings/{}/", lang_prefix, document_type)
}

pub fn action_url(lang_prefix: &str) -> String {
    format!("{}/settings/print-design/", lang_prefix)
}

/// Ordered `application/x-www-form-urlencoded` fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormBody(Vec<(&'static str, String)>);

impl FormBody {
    pub fn new(action: &str) -> Self {
        let mut body = Self::default();
        body.push("action", action);
        body
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// `save_settings` body for the layout being edited.
pub fn save_settings_form(settings: &DocumentTemplateSettings) -> FormBody {
    let record = settings.to_record();
    let mut body = FormBody::new(SAVE_SETTINGS);
    body.push("document_type", settings.document_type.as_str());
    body.push("paper_size", settings.paper_size.as_str());
    body.push("orientation", settings.orientation.as_str());
    body.push("margins", settings.margins.to_string());
    for zone in Zone::ALL {
        body.push(zone.content_field(), record.zone_content(zone).unwrap_or_default());
    }
    body.push(
        "show_logo",
        if record.show_logo.unwrap_or(false) { "true" } else { "false" },
    );
    body.push("logo_position", record.logo_position.unwrap_or_default());
    body
}

/// Validated input of the create-document dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDocumentForm {
    pub document_type: String,
    pub name_ar: String,
    pub name_en: String,
    pub paper_size: PaperSize,
}

impl CreateDocumentForm {
    /// Checks that every field is filled in. Nothing may be sent otherwise.
    pub fn validate(
        document_type: &str,
        name_ar: &str,
        name_en: &str,
        paper_size: &str,
    ) -> Result<Self, ApiError> {
        let required = |name: &'static str, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(ApiError::Validation(name))
            } else {
                Ok(value.to_string())
            }
        };
        let document_type = required("document_type", document_type)?;
        let name_ar = required("document_name_ar", name_ar)?;
        let name_en = required("document_name_en", name_en)?;
        let paper_size: PaperSize = required("paper_size", paper_size)?
            .parse()
            .map_err(|_| ApiError::Validation("paper_size"))?;
        Ok(Self {
            document_type,
            name_ar,
            name_en,
            paper_size,
        })
    }

    pub fn to_form(&self) -> FormBody {
        let mut body = FormBody::new(SAVE_SETTINGS);
        body.push("document_type", self.document_type.as_str());
        body.push("document_name_ar", self.name_ar.as_str());
        body.push("document_name_en", self.name_en.as_str());
        body.push("paper_size", self.paper_size.as_str());
        body.push("orientation", Orientation::Portrait.as_str());
        body.push("margins", DEFAULT_MARGINS_MM.to_string());
        body
    }
}

pub fn delete_settings_form(document_id: &str) -> FormBody {
    let mut body = FormBody::new(DELETE_SETTINGS);
    body.push("document_id", document_id);
    body
}

#[derive(Debug, Deserialize)]
struct SettingsEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    settings: Option<SettingsRecord>,
}

#[derive(Debug, Deserialize)]
struct ActionResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Decodes a settings read. `Ok(None)` means the server has no settings
/// stored for the document type.
pub fn parse_settings_response(body: &str) -> Result<Option<SettingsRecord>, ApiError> {
    let envelope: SettingsEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(envelope.settings.filter(|_| envelope.success))
}

pub fn parse_action_response(body: &str) -> Result<(), ApiError> {
    let response: ActionResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    if response.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(response.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::{FieldKind, FieldPlacement};

    #[test]
    fn urls_carry_language_prefix() {
        assert_eq!(
            settings_url("/ar", "invoice"),
            "/ar/settings/api/document-settings/invoice/"
        );
        assert_eq!(action_url("/en"), "/en/settings/print-design/");
    }

    #[test]
    fn save_form_lists_all_six_zones() {
        let mut settings = DocumentTemplateSettings::default_for("invoice");
        settings.zones.insert(
            Zone::FOOTER_CENTER,
            FieldPlacement::new(FieldKind::CustomText, Some("Thank you")),
        );
        let form = save_settings_form(&settings);
        assert_eq!(form.get("action"), Some(SAVE_SETTINGS));
        assert_eq!(form.get("document_type"), Some("invoice"));
        assert_eq!(form.get("paper_size"), Some("A4"));
        assert_eq!(form.get("orientation"), Some("portrait"));
        assert_eq!(form.get("margins"), Some("20"));
        assert_eq!(form.get("footer_center_content"), Some("Thank you"));
        assert_eq!(form.get("header_center_content"), Some("{{logo}}"));
        assert_eq!(form.get("header_left_content"), Some(""));
        assert_eq!(form.get("show_logo"), Some("true"));
        assert_eq!(form.get("logo_position"), Some("center"));
        let zone_fields = form.pairs().filter(|(k, _)| k.ends_with("_content")).count();
        assert_eq!(zone_fields, 6);
    }

    #[test]
    fn create_rejects_any_blank_field() {
        assert_eq!(
            CreateDocumentForm::validate("", "فاتورة", "Invoice", "A4"),
            Err(ApiError::Validation("document_type"))
        );
        assert_eq!(
            CreateDocumentForm::validate("invoice", " ", "Invoice", "A4"),
            Err(ApiError::Validation("document_name_ar"))
        );
        assert_eq!(
            CreateDocumentForm::validate("invoice", "فاتورة", "", "A4"),
            Err(ApiError::Validation("document_name_en"))
        );
        assert_eq!(
            CreateDocumentForm::validate("invoice", "فاتورة", "Invoice", ""),
            Err(ApiError::Validation("paper_size"))
        );
    }

    #[test]
    fn create_form_defaults_orientation_and_margins() {
        let form = CreateDocumentForm::validate(" invoice ", "فاتورة", "Invoice", "letter")
            .unwrap()
            .to_form();
        assert_eq!(form.get("document_type"), Some("invoice"));
        assert_eq!(form.get("paper_size"), Some("Letter"));
        assert_eq!(form.get("orientation"), Some("portrait"));
        assert_eq!(form.get("margins"), Some("20"));
    }

    #[test]
    fn settings_response_without_success_is_absent() {
        assert_eq!(parse_settings_response(r#"{"success": false}"#), Ok(None));
        let found = parse_settings_response(r#"{"success": true, "settings": {"paper_size": "A5"}}"#)
            .unwrap()
            .unwrap();
        assert_eq!(found.paper_size.as_deref(), Some("A5"));
        assert!(matches!(
            parse_settings_response("<html>"),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn action_response_maps_business_failure() {
        assert_eq!(parse_action_response(r#"{"success": true}"#), Ok(()));
        assert_eq!(
            parse_action_response(r#"{"success": false, "error": "exists"}"#),
            Err(ApiError::Rejected(Some("exists".into())))
        );
        assert_eq!(
            parse_action_response(r#"{"success": false}"#),
            Err(ApiError::Rejected(None))
        );
    }
}
