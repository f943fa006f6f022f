//! Reads the designer configuration and document list out of the hosting page.

use designer_common::config::DesignerConfig;
use designer_common::model::document::PageData;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlInputElement};

/// `<script type="application/json">` island rendered by the server page.
const PAGE_DATA_ID: &str = "print-design-documents";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn mount_point(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn load(mount_id: &str) -> DesignerConfig {
    let Some(document) = document() else {
        return DesignerConfig::default();
    };

    let lang = document
        .document_element()
        .and_then(|root| root.get_attribute("lang"));
    let csrf_field = document
        .query_selector("[name=csrfmiddlewaretoken]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());
    let cookies = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|html| html.cookie().ok());
    let log_level = document
        .get_element_by_id(mount_id)
        .and_then(|el| el.get_attribute("data-log-level"));

    DesignerConfig::from_sources(
        lang.as_deref(),
        csrf_field.as_deref(),
        cookies.as_deref(),
        log_level.as_deref(),
    )
}

pub fn load_page_data() -> PageData {
    let Some(raw) = document()
        .and_then(|d| d.get_element_by_id(PAGE_DATA_ID))
        .and_then(|el| el.text_content())
    else {
        log::warn!("#{} not found, starting with an empty document list", PAGE_DATA_ID);
        return PageData::default();
    };

    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::error!("#{} is not valid page data: {}", PAGE_DATA_ID, err);
        PageData::default()
    })
}
