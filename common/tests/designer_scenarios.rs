//! End-to-end editing sessions against an in-memory settings resource that
//! speaks the same form/JSON contract as the real endpoint.

use std::collections::HashMap;

use designer_common::designer::{Designer, DragSource, LoadOutcome, PanelControl};
use designer_common::error::ApiError;
use designer_common::i18n::Lang;
use designer_common::model::document::DocumentEntry;
use designer_common::model::field::{FieldKind, FontSize};
use designer_common::model::paper::{Orientation, PaperSize};
use designer_common::model::zone::Zone;
use designer_common::requests::{
    parse_action_response, parse_settings_response, CreateDocumentForm, FormBody, SAVE_SETTINGS,
};
use serde_json::{json, Map, Value};

#[derive(Default)]
struct SettingsServer {
    rows: HashMap<String, Map<String, Value>>,
    posts: usize,
}

impl SettingsServer {
    fn get(&self, document_type: &str) -> String {
        match self.rows.get(document_type) {
            Some(row) => json!({ "success": true, "settings": row }).to_string(),
            None => json!({ "success": false }).to_string(),
        }
    }

    fn post(&mut self, form: &FormBody) -> String {
        self.posts += 1;
        if form.get("action") != Some(SAVE_SETTINGS) {
            return json!({ "success": false, "error": "unsupported" }).to_string();
        }
        let mut row = Map::new();
        for (key, value) in form.pairs().filter(|(key, _)| *key != "action") {
            let value = match key {
                "margins" => json!(value.parse::<u32>().unwrap_or(20)),
                "show_logo" => json!(value == "true"),
                _ => json!(value),
            };
            row.insert(key.to_string(), value);
        }
        let document_type = form.get("document_type").unwrap_or_default().to_string();
        self.rows.insert(document_type, row);
        json!({ "success": true }).to_string()
    }
}

fn select(designer: &mut Designer, server: &SettingsServer, document_type: &str) -> LoadOutcome {
    let ticket = designer.begin_load(document_type);
    let result = parse_settings_response(&server.get(document_type));
    designer.finish_load(ticket, result)
}

fn save(designer: &Designer, server: &mut SettingsServer) -> Result<(), ApiError> {
    let form = designer.save_form().expect("document selected");
    parse_action_response(&server.post(&form))
}

#[test]
fn new_invoice_shows_defaults_and_keeps_footer_text_after_save() {
    let mut server = SettingsServer::default();
    let mut designer = Designer::new(Lang::En, Vec::new());

    assert_eq!(select(&mut designer, &server, "invoice"), LoadOutcome::Defaulted);
    assert_eq!(designer.settings().paper_size, PaperSize::A4);
    assert_eq!(designer.settings().orientation, Orientation::Portrait);
    assert_eq!(designer.zone_text(Zone::HEADER_CENTER, "today"), "Logo");
    for zone in Zone::ALL.into_iter().filter(|zone| *zone != Zone::HEADER_CENTER) {
        assert_eq!(designer.zone_text(zone, "today"), zone.placeholder_label(Lang::En));
    }

    designer
        .place_field(Zone::FOOTER_CENTER, FieldKind::CustomText, Some("Thank you"))
        .unwrap();
    save(&designer, &mut server).unwrap();

    select(&mut designer, &server, "receipt");
    assert!(designer.field(Zone::FOOTER_CENTER).is_none());

    assert_eq!(select(&mut designer, &server, "invoice"), LoadOutcome::Loaded);
    let footer = designer.field(Zone::FOOTER_CENTER).unwrap();
    assert_eq!(footer.kind, FieldKind::CustomText);
    assert_eq!(footer.content, "Thank you");
}

#[test]
fn save_then_load_reproduces_zones_and_paper() {
    let mut server = SettingsServer::default();
    let mut designer = Designer::new(Lang::Ar, Vec::new());
    select(&mut designer, &server, "receipt");

    designer.place_field(Zone::HEADER_LEFT, FieldKind::CompanyName, None).unwrap();
    designer.place_field(Zone::HEADER_RIGHT, FieldKind::Date, None).unwrap();
    designer.place_field(Zone::FOOTER_LEFT, FieldKind::PageNumber, None).unwrap();
    designer
        .place_field(Zone::FOOTER_RIGHT, FieldKind::CustomText, Some("شكراً لكم"))
        .unwrap();
    designer.move_field(Zone::HEADER_CENTER, Zone::FOOTER_CENTER);
    designer.set_paper_size(PaperSize::A5);
    designer.set_paper_orientation(Orientation::Landscape);
    designer.set_margins(12);
    let before = designer.settings().clone();
    save(&designer, &mut server).unwrap();

    select(&mut designer, &server, "receipt");
    let after = designer.settings();
    assert_eq!(after.paper_size, before.paper_size);
    assert_eq!(after.orientation, before.orientation);
    assert_eq!(after.margins, before.margins);
    for zone in Zone::ALL {
        assert_eq!(
            after.zones.get(zone).map(|p| (p.kind, p.content.as_str())),
            before.zones.get(zone).map(|p| (p.kind, p.content.as_str())),
            "zone {zone}"
        );
    }
    assert_eq!(after.logo_zone(), Some(Zone::FOOTER_CENTER));
}

#[test]
fn every_zone_keeps_only_the_latest_field() {
    let server = SettingsServer::default();
    let mut designer = Designer::new(Lang::En, Vec::new());
    select(&mut designer, &server, "invoice");

    for zone in Zone::ALL {
        designer.place_field(zone, FieldKind::Date, None).unwrap();
        let replaced = designer
            .place_field(zone, FieldKind::CustomText, Some("second"))
            .unwrap();
        assert_eq!(replaced.map(|p| p.kind), Some(FieldKind::Date));
        assert_eq!(designer.field(zone).map(|p| p.content.as_str()), Some("second"));
    }
    assert_eq!(designer.settings().zones.occupied().count(), 6);
}

#[test]
fn sequential_drops_into_header_left_keep_the_second_field() {
    let server = SettingsServer::default();
    let mut designer = Designer::new(Lang::En, Vec::new());
    select(&mut designer, &server, "invoice");

    designer
        .apply_drop(DragSource::Palette(FieldKind::CompanyName), Zone::HEADER_LEFT)
        .unwrap();
    designer
        .apply_drop(DragSource::Zone(Zone::HEADER_CENTER), Zone::HEADER_LEFT)
        .unwrap();

    assert_eq!(designer.field(Zone::HEADER_LEFT).map(|p| p.kind), Some(FieldKind::Logo));
    assert!(designer.field(Zone::HEADER_CENTER).is_none());
    assert_eq!(designer.settings().zones.occupied().count(), 1);
}

#[test]
fn deleting_selected_field_restores_label_and_clears_panel() {
    let server = SettingsServer::default();
    let mut designer = Designer::new(Lang::En, Vec::new());
    select(&mut designer, &server, "invoice");

    designer
        .place_field(Zone::FOOTER_RIGHT, FieldKind::CustomText, Some("Signature"))
        .unwrap();
    let panel = designer.select_field(Zone::FOOTER_RIGHT).unwrap();
    assert_eq!(
        panel.controls,
        vec![
            PanelControl::Content("Signature".into()),
            PanelControl::FontSize(FontSize::Medium),
            PanelControl::TextAlign(designer_common::model::field::TextAlign::Center),
            PanelControl::Color("#000000".into()),
        ]
    );

    assert!(designer.delete_field(Zone::FOOTER_RIGHT).is_some());
    assert_eq!(designer.zone_text(Zone::FOOTER_RIGHT, ""), "Right Footer");
    assert!(designer.property_panel().is_none());
    assert_eq!(designer.selected(), None);
}

#[test]
fn property_panel_depends_on_kind() {
    let server = SettingsServer::default();
    let mut designer = Designer::new(Lang::En, Vec::new());
    select(&mut designer, &server, "invoice");

    let logo = designer.select_field(Zone::HEADER_CENTER).unwrap();
    assert_eq!(logo.controls.len(), 2);
    assert!(matches!(logo.controls[0], PanelControl::LogoSize(_)));

    designer.place_field(Zone::FOOTER_LEFT, FieldKind::PageNumber, None).unwrap();
    let page = designer.select_field(Zone::FOOTER_LEFT).unwrap();
    assert!(matches!(
        page.controls.as_slice(),
        [PanelControl::FontSize(_), PanelControl::TextAlign(_)]
    ));
    assert!(designer.select_field(Zone::FOOTER_RIGHT).is_err());
}

#[test]
fn malformed_settings_response_still_defines_paper() {
    let mut designer = Designer::new(Lang::En, Vec::new());
    let ticket = designer.begin_load("invoice");
    let outcome = designer.finish_load(ticket, parse_settings_response("<!DOCTYPE html>"));
    assert!(matches!(outcome, LoadOutcome::Failed(ApiError::Parse(_))));
    assert_eq!(designer.settings().paper_size, PaperSize::A4);
    assert_eq!(designer.settings().orientation, Orientation::Portrait);
}

#[test]
fn incomplete_create_never_reaches_the_server() {
    let mut server = SettingsServer::default();
    let submit = |server: &mut SettingsServer, ty: &str, ar: &str, en: &str| {
        CreateDocumentForm::validate(ty, ar, en, "A4")
            .map(|form| parse_action_response(&server.post(&form.to_form())))
    };

    assert!(submit(&mut server, "", "فاتورة", "Invoice").is_err());
    assert!(submit(&mut server, "invoice", "", "Invoice").is_err());
    assert!(submit(&mut server, "invoice", "فاتورة", "").is_err());
    assert_eq!(server.posts, 0);

    assert_eq!(submit(&mut server, "invoice", "فاتورة", "Invoice"), Ok(Ok(())));
    assert_eq!(server.posts, 1);
}

#[test]
fn deleting_a_document_removes_it_from_the_list() {
    let documents = vec![DocumentEntry {
        id: "3".into(),
        document_type: "invoice".into(),
        name: "Invoice".into(),
    }];
    let server = SettingsServer::default();
    let mut designer = Designer::new(Lang::En, documents);
    select(&mut designer, &server, "invoice");

    designer.remove_document("3");
    assert!(designer.documents().is_empty());
    assert_eq!(designer.active_document(), None);
}

#[test]
fn custom_text_dropped_from_the_palette_survives_reload() {
    let mut server = SettingsServer::default();
    let mut designer = Designer::new(Lang::Ar, Vec::new());
    select(&mut designer, &server, "invoice");

    designer
        .apply_drop(DragSource::Palette(FieldKind::CustomText), Zone::FOOTER_LEFT)
        .unwrap();
    let shown = designer.zone_text(Zone::FOOTER_LEFT, "");
    save(&designer, &mut server).unwrap();

    select(&mut designer, &server, "invoice");
    let footer = designer.field(Zone::FOOTER_LEFT).map(|p| p.kind);
    assert_eq!(footer, Some(FieldKind::CustomText));
    assert_eq!(designer.zone_text(Zone::FOOTER_LEFT, ""), shown);
}

#[test]
fn custom_text_typed_as_a_token_keeps_its_kind() {
    let mut server = SettingsServer::default();
    let mut designer = Designer::new(Lang::En, Vec::new());
    select(&mut designer, &server, "invoice");

    designer
        .place_field(Zone::FOOTER_LEFT, FieldKind::CustomText, Some("{{date}}"))
        .unwrap();
    designer
        .place_field(Zone::FOOTER_RIGHT, FieldKind::CustomText, Some("{{logo}}"))
        .unwrap();
    save(&designer, &mut server).unwrap();

    select(&mut designer, &server, "invoice");
    for (zone, text) in [(Zone::FOOTER_LEFT, "{{date}}"), (Zone::FOOTER_RIGHT, "{{logo}}")] {
        let placement = designer.field(zone).unwrap();
        assert_eq!(placement.kind, FieldKind::CustomText);
        assert_eq!(placement.content, text);
    }
    assert_eq!(designer.settings().logo_zone(), Some(Zone::HEADER_CENTER));
}
