//! Message handling for the print designer.
//!
//! Edits are applied to the `Designer` model and the component re-renders
//! from it. Requests run in `spawn_local` and report back with a `*Finished`
//! or `SettingsLoaded` message. Settings responses carry the `LoadTicket`
//! they were requested with so that a response for a document the user has
//! already left is dropped.

use designer_common::designer::{LoadOutcome, ResizeGesture};
use designer_common::error::{DesignerError, Operation};
use designer_common::i18n::{tr, tr_named, Lang, Text};
use designer_common::model::paper::PaperSize;
use designer_common::requests::{delete_settings_form, CreateDocumentForm, FormBody};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{
    compute_md5, confirm, download_json, field_value, reload_page, set_field_value,
    set_window_dirty_flag, show_toast, ToastKind,
};
use super::messages::Msg;
use super::state::PrintDesignerComponent;
use crate::api;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

pub fn update(
    component: &mut PrintDesignerComponent,
    ctx: &Context<PrintDesignerComponent>,
    msg: Msg,
) -> bool {
    let lang = component.designer.lang();
    match msg {
        Msg::SelectDocument(document_type) => {
            component.menu_zone = None;
            component.resizing = None;
            let ticket = component.designer.begin_load(&document_type);
            log::debug!("loading settings for {}", document_type);

            let config = component.config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_settings(&config, ticket.document_type()).await;
                link.send_message(Msg::SettingsLoaded { ticket, result });
            });
            true
        }
        Msg::SettingsLoaded { ticket, result } => {
            if component.designer.finish_load(ticket, result) == LoadOutcome::Stale {
                return false;
            }
            component.original_md5 = Some(compute_md5(&component.designer.snapshot()));
            set_window_dirty_flag(component);
            true
        }

        Msg::OpenZoneMenu(zone) => {
            if component.designer.field(zone).is_some() || component.menu_zone == Some(zone) {
                return false;
            }
            component.menu_zone = Some(zone);
            true
        }
        Msg::CloseZoneMenu => component.menu_zone.take().is_some(),
        Msg::PlaceField { zone, kind } => {
            component.menu_zone = None;
            let placed = component.designer.place_field(zone, kind, None).map(|_| ());
            report(lang, placed);
            set_window_dirty_flag(component);
            true
        }

        Msg::DragStart(source) => {
            if component.designer.active_document().is_none() {
                show_toast(tr(lang, Text::SelectDocumentFirst), ToastKind::Error);
                return false;
            }
            component.menu_zone = None;
            component.drag = Some(source);
            false
        }
        Msg::DragOver(zone) => {
            if component.drag.is_none() || component.drag_over == Some(zone) {
                return false;
            }
            component.drag_over = Some(zone);
            true
        }
        Msg::DragLeave(zone) => {
            if component.drag_over != Some(zone) {
                return false;
            }
            component.drag_over = None;
            true
        }
        Msg::Drop(zone) => {
            component.drag_over = None;
            if let Some(source) = component.drag.take() {
                report(lang, component.designer.apply_drop(source, zone));
                set_window_dirty_flag(component);
            }
            true
        }
        Msg::DragEnd => {
            component.drag = None;
            component.drag_over.take().is_some()
        }

        Msg::SelectField(zone) => {
            component.menu_zone = None;
            match component.designer.select_field(zone) {
                Ok(_) => true,
                Err(err) => {
                    log::debug!("nothing to select: {}", err);
                    false
                }
            }
        }
        Msg::Deselect => {
            component.designer.deselect();
            true
        }
        Msg::UpdateStyle { property, value } => {
            if let Err(err) = component.designer.update_selected_style(property, &value) {
                log::warn!("style change ignored: {}", err);
                return false;
            }
            set_window_dirty_flag(component);
            true
        }
        Msg::UpdateContent(value) => {
            if let Err(err) = component.designer.update_selected_content(&value) {
                log::warn!("content change ignored: {}", err);
                return false;
            }
            set_window_dirty_flag(component);
            true
        }
        Msg::DeleteField(zone) => {
            if component.designer.field(zone).is_none()
                || !confirm(tr(lang, Text::ConfirmRemoveElement))
            {
                return false;
            }
            component.designer.delete_field(zone);
            set_window_dirty_flag(component);
            true
        }

        Msg::StartResize {
            zone,
            x,
            y,
            width,
            height,
        } => {
            if component.resizing.is_some() || component.designer.field(zone).is_none() {
                return false;
            }
            component.resizing = Some(ResizeGesture::new(zone, (x, y), (width, height)));
            false
        }
        Msg::ResizeMove { x, y } => {
            let Some(gesture) = component.resizing else {
                return false;
            };
            if let Err(err) = component.designer.resize_field(gesture.zone, gesture.size_at(x, y)) {
                log::debug!("resize stopped: {}", err);
                component.resizing = None;
                return false;
            }
            true
        }
        Msg::EndResize => {
            if component.resizing.take().is_some() {
                set_window_dirty_flag(component);
            }
            false
        }

        Msg::SetPaperSize(size) => {
            component.designer.set_paper_size(size);
            set_window_dirty_flag(component);
            true
        }
        Msg::SetOrientation(orientation) => {
            component.designer.set_paper_orientation(orientation);
            set_window_dirty_flag(component);
            true
        }
        Msg::Save => {
            if component.saving {
                return false;
            }
            let form = match component.designer.save_form() {
                Ok(form) => form,
                Err(DesignerError::NoDocument) => {
                    show_toast(tr(lang, Text::NoDocumentToSave), ToastKind::Error);
                    return false;
                }
                Err(err) => {
                    report(lang, Err(err));
                    return false;
                }
            };
            let Some(document_type) = component.designer.active_document().map(str::to_string)
            else {
                return false;
            };
            component.saving = true;

            let snapshot = component.designer.snapshot();
            let config = component.config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::post_form(&config, &form).await;
                link.send_message(Msg::SaveFinished {
                    document_type,
                    snapshot,
                    result,
                });
            });
            true
        }
        Msg::SaveFinished {
            document_type,
            snapshot,
            result,
        } => {
            component.saving = false;
            match result {
                Ok(()) => {
                    log::info!("saved print design for {}", document_type);
                    if component.designer.active_document() == Some(document_type.as_str()) {
                        component.original_md5 = Some(compute_md5(&snapshot));
                    }
                    show_toast(tr(lang, Text::SaveOk), ToastKind::Success);
                }
                Err(err) => {
                    log::error!("saving {} failed: {}", document_type, err);
                    show_toast(&err.user_message(lang, Operation::Save), ToastKind::Error);
                }
            }
            set_window_dirty_flag(component);
            true
        }
        Msg::Export => {
            match component.designer.export() {
                Ok(export) => match export.to_json() {
                    Ok(json) => download_json(&export.file_name(), &json),
                    Err(err) => log::error!("export failed: {}", err),
                },
                Err(_) => show_toast(tr(lang, Text::NoDocumentToExport), ToastKind::Error),
            }
            false
        }

        Msg::OpenCreateDialog(suggestion) => {
            let (document_type, name_ar, name_en) = suggestion
                .map(|s| (s.document_type, s.name_ar, s.name_en))
                .unwrap_or_default();
            set_field_value(&component.new_type_ref, &document_type);
            set_field_value(&component.new_name_ar_ref, &name_ar);
            set_field_value(&component.new_name_en_ref, &name_en);
            set_field_value(&component.new_paper_ref, PaperSize::default().as_str());
            open_top_sheet(component.create_dialog_ref.clone());
            false
        }
        Msg::CloseCreateDialog => {
            close_top_sheet(component.create_dialog_ref.clone());
            false
        }
        Msg::CreateDocument => {
            let form = match CreateDocumentForm::validate(
                &field_value(&component.new_type_ref),
                &field_value(&component.new_name_ar_ref),
                &field_value(&component.new_name_en_ref),
                &field_value(&component.new_paper_ref),
            ) {
                Ok(form) => form,
                Err(err) => {
                    show_toast(&err.user_message(lang, Operation::Create), ToastKind::Error);
                    return false;
                }
            };
            post(component, ctx, form.to_form(), Msg::CreateFinished);
            false
        }
        Msg::CreateFinished(result) => {
            match result {
                Ok(()) => {
                    close_top_sheet(component.create_dialog_ref.clone());
                    reload_page();
                }
                Err(err) => {
                    log::error!("creating document failed: {}", err);
                    show_toast(&err.user_message(lang, Operation::Create), ToastKind::Error);
                }
            }
            false
        }
        Msg::DeleteDocument { id, name } => {
            if !confirm(&tr_named(lang, Text::ConfirmDelete, &name)) {
                return false;
            }
            let form = delete_settings_form(&id);
            post(component, ctx, form, move |result| Msg::DeleteFinished { id, result });
            false
        }
        Msg::DeleteFinished { id, result } => match result {
            Ok(()) => {
                if let Some(removed) = component.designer.remove_document(&id) {
                    log::info!("deleted document {}", removed.document_type);
                }
                if component.designer.active_document().is_none() {
                    component.original_md5 = None;
                    component.menu_zone = None;
                }
                set_window_dirty_flag(component);
                true
            }
            Err(err) => {
                log::error!("deleting document {} failed: {}", id, err);
                show_toast(&err.user_message(lang, Operation::Delete), ToastKind::Error);
                false
            }
        },
    }
}

/// Posts `form` and hands the outcome to `done`.
fn post<F>(
    component: &PrintDesignerComponent,
    ctx: &Context<PrintDesignerComponent>,
    form: FormBody,
    done: F,
) where
    F: FnOnce(Result<(), designer_common::error::ApiError>) -> Msg + 'static,
{
    let config = component.config.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::post_form(&config, &form).await;
        link.send_message(done(result));
    });
}

/// Toasts designer errors the user can act on and logs the rest.
fn report(lang: Lang, result: Result<(), DesignerError>) {
    if let Err(err) = result {
        match err.user_message(lang) {
            Some(text) => show_toast(text, ToastKind::Error),
            None => log::warn!("{}", err),
        }
    }
}
