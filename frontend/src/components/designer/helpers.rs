//! Browser-side utilities for the designer component.
//!
//! - **User Feedback**: toast notifications and `confirm()` prompts.
//! - **Dirty Tracking**: MD5 of the layout snapshot and the `window.app_dirty`
//!   flag read by the hosting page before navigating away.
//! - **Files**: offering the exported design as a JSON download.

use designer_common::i18n::Lang;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
    Url,
};
use yew::NodeRef;

use super::state::PrintDesignerComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(25, 135, 84, 0.9)",
            ToastKind::Error => "rgba(220, 53, 69, 0.9)",
        }
    }
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast removes itself after three seconds. `message` is set as text,
/// never as markup, since it can carry server-provided error messages.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", kind.background()).ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Asks the user to confirm a destructive action with `window.confirm`.
///
/// Called from `update.rs` before removing a field (`Msg::DeleteField`) or a
/// whole document type (`Msg::DeleteDocument`). Nothing is changed or sent
/// unless this returns `true`.
///
/// # Arguments
/// * `message` - The localized question shown in the dialog.
///
/// # Returns
/// `true` when the user accepted, `false` when they cancelled or no window is
/// available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Reloads the current page.
///
/// Used after a document type was created (`Msg::CreateFinished`): the
/// document list is rendered by the server, so a reload is the way to show
/// the new entry. Failures are logged and the designer stays usable.
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            log::error!("page reload failed: {:?}", err);
        }
    }
}

/// Today's date formatted for `lang`, shown by date fields.
pub fn today_label(lang: Lang) -> String {
    js_sys::Date::new_0()
        .to_locale_date_string(lang.date_locale(), &JsValue::UNDEFINED)
        .into()
}

/// Hex MD5 digest used for dirty checking.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Publishes whether there are unsaved changes as `window.app_dirty`.
pub fn set_window_dirty_flag(component: &PrintDesignerComponent) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(component.is_dirty()),
        );
    }
}

/// Offers `json` as a file download.
///
/// Builds a `Blob`, points a temporary anchor at its object URL and clicks
/// it, then revokes the URL. Used by `Msg::Export`; no request is made.
///
/// # Arguments
/// * `file_name` - Name suggested to the browser, e.g. `invoice_design.json`.
/// * `json` - The serialized export.
pub fn download_json(file_name: &str, json: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&JsValue::from_str(json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let url = match Blob::new_with_str_sequence_and_options(&parts, &options)
        .and_then(|blob| Url::create_object_url_with_blob(&blob))
    {
        Ok(url) => url,
        Err(err) => {
            log::error!("could not prepare {}: {:?}", file_name, err);
            return;
        }
    };

    match document
        .create_element("a")
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().map_err(JsValue::from))
    {
        Ok(anchor) => {
            anchor.set_href(&url);
            anchor.set_download(file_name);
            anchor.click();
        }
        Err(err) => log::error!("could not create download link: {:?}", err),
    }
    let _ = Url::revoke_object_url(&url);
}

/// Reads the current value of a form control.
///
/// The create-document dialog keeps its inputs uncontrolled; `update.rs`
/// reads them back through the node refs stored on the component when
/// `Msg::CreateDocument` is handled.
///
/// # Arguments
/// * `node_ref` - Reference to an `<input>` or `<select>` element.
///
/// # Returns
/// The element's value, or an empty string when the ref is not mounted or
/// points at another kind of element.
pub fn field_value(node_ref: &NodeRef) -> String {
    if let Some(input) = node_ref.cast::<HtmlInputElement>() {
        return input.value();
    }
    node_ref
        .cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

/// Writes a value into a form control.
///
/// Counterpart of [`field_value`], used by `Msg::OpenCreateDialog` to fill
/// the dialog from a suggestion or clear it.
///
/// # Arguments
/// * `node_ref` - Reference to an `<input>` or `<select>` element.
/// * `value` - The value to set. Unmounted refs are ignored.
pub fn set_field_value(node_ref: &NodeRef, value: &str) {
    if let Some(input) = node_ref.cast::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = node_ref.cast::<HtmlSelectElement>() {
        select.set_value(value);
    }
}
