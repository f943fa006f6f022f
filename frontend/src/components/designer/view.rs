//! Rendering of the designer: document list, toolbar, element palette and
//! the paper preview with its six zones.

use designer_common::designer::DragSource;
use designer_common::i18n::{tr, Lang, Text};
use designer_common::model::field::{FieldKind, FieldPlacement};
use designer_common::model::paper::{Orientation, PaperSize};
use designer_common::model::zone::{Section, Zone};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlElement, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::create_document::create_document_dialog;
use super::helpers::today_label;
use super::messages::Msg;
use super::properties::properties_panel;
use super::state::PrintDesignerComponent;
use crate::paper_preview::PaperPreview;

type Link = Scope<PrintDesignerComponent>;

pub fn view(component: &PrintDesignerComponent, ctx: &Context<PrintDesignerComponent>) -> Html {
    let link = ctx.link();
    let lang = component.designer.lang();

    html! {
        <div
            class="print-design-root d-flex"
            dir={lang.dir()}
            onmousemove={link.callback(|e: MouseEvent| Msg::ResizeMove { x: e.client_x(), y: e.client_y() })}
            onmouseup={link.callback(|_: MouseEvent| Msg::EndResize)}
            onmouseleave={link.callback(|_: MouseEvent| Msg::EndResize)}
            onclick={link.callback(|_: MouseEvent| Msg::CloseZoneMenu)}
        >
            { document_list(component, link) }
            <div class="designer-main flex-grow-1 p-3">
                { toolbar(component, link) }
                <div class="d-flex gap-3">
                    { palette(lang, link) }
                    <div class="preview-wrapper flex-grow-1">{ preview(component, link) }</div>
                </div>
            </div>
            { properties_panel(component, link) }
            { create_document_dialog(component, link) }
        </div>
    }
}

fn document_list(component: &PrintDesignerComponent, link: &Link) -> Html {
    let designer = &component.designer;
    let lang = designer.lang();

    html! {
        <aside class="document-list border-end p-3">
            <h6>{ tr(lang, Text::Documents) }</h6>
            { for designer.documents().iter().map(|doc| {
                let active = designer.active_document() == Some(doc.document_type.as_str());
                let document_type = doc.document_type.clone();
                let id = doc.id.clone();
                let name = doc.name.clone();
                html! {
                    <div
                        class={classes!("document-list-item", "d-flex", "justify-content-between", active.then_some("active"))}
                        data-document-type={doc.document_type.clone()}
                        onclick={link.callback(move |_: MouseEvent| Msg::SelectDocument(document_type.clone()))}
                    >
                        <span>{ doc.name.clone() }</span>
                        <button
                            class="btn btn-sm btn-outline-danger"
                            title={tr(lang, Text::Delete)}
                            onclick={link.callback(move |e: MouseEvent| {
                                e.stop_propagation();
                                Msg::DeleteDocument { id: id.clone(), name: name.clone() }
                            })}
                        >
                            <i class="fas fa-trash"></i>
                        </button>
                    </div>
                }
            }) }
            <button class="btn btn-primary w-100 mt-3" onclick={link.callback(|_: MouseEvent| Msg::OpenCreateDialog(None))}>
                <i class="fas fa-plus me-2"></i>{ tr(lang, Text::NewDocument) }
            </button>
            <div class="document-suggestions mt-2">
                { for component.suggestions.iter().map(|suggestion| {
                    let label = match lang {
                        Lang::Ar => suggestion.name_ar.clone(),
                        Lang::En => suggestion.name_en.clone(),
                    };
                    let suggestion = suggestion.clone();
                    html! {
                        <button
                            class="btn btn-sm btn-link d-block"
                            onclick={link.callback(move |_: MouseEvent| Msg::OpenCreateDialog(Some(suggestion.clone())))}
                        >
                            { label }
                        </button>
                    }
                }) }
            </div>
        </aside>
    }
}

fn toolbar(component: &PrintDesignerComponent, link: &Link) -> Html {
    let designer = &component.designer;
    let lang = designer.lang();
    let settings = designer.settings();
    let no_document = designer.active_document().is_none();

    html! {
        <div class="designer-toolbar d-flex flex-wrap gap-3 mb-3 align-items-center">
            <div class="btn-group" role="group" aria-label={tr(lang, Text::PaperSize)}>
                { for PaperSize::ALL.into_iter().map(|size| {
                    let class = if settings.paper_size == size { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline-primary" };
                    html! {
                        <button
                            id={format!("{}Btn", size.as_str().to_ascii_lowercase())}
                            class={class}
                            onclick={link.callback(move |_: MouseEvent| Msg::SetPaperSize(size))}
                        >
                            { size.as_str() }
                        </button>
                    }
                }) }
            </div>
            <div class="btn-group" role="group" aria-label={tr(lang, Text::Orientation)}>
                { for Orientation::ALL.into_iter().map(|orientation| {
                    let class = if settings.orientation == orientation { "btn btn-sm btn-success" } else { "btn btn-sm btn-outline-success" };
                    html! {
                        <button
                            id={format!("{}Btn", orientation.as_str())}
                            class={class}
                            onclick={link.callback(move |_: MouseEvent| Msg::SetOrientation(orientation))}
                        >
                            { orientation.label(lang) }
                        </button>
                    }
                }) }
            </div>
            <button
                id="saveDesignBtn"
                class="btn btn-sm btn-primary"
                disabled={no_document || designer.is_loading() || component.saving}
                onclick={link.callback(|_: MouseEvent| Msg::Save)}
            >
                <i class="fas fa-save me-2"></i>{ tr(lang, Text::Save) }
                if component.is_dirty() {
                    <span class="ms-2 badge bg-warning text-dark" title={tr(lang, Text::UnsavedChanges)}>{ "●" }</span>
                }
            </button>
            <button
                id="exportDesignBtn"
                class="btn btn-sm btn-outline-secondary"
                onclick={link.callback(|_: MouseEvent| Msg::Export)}
            >
                <i class="fas fa-download me-2"></i>{ tr(lang, Text::Export) }
            </button>
        </div>
    }
}

fn palette(lang: Lang, link: &Link) -> Html {
    html! {
        <div class="element-palette">
            <h6>{ tr(lang, Text::Elements) }</h6>
            { for FieldKind::ALL.into_iter().map(|kind| html! {
                <div
                    class="palette-item border rounded p-2 mb-2"
                    draggable="true"
                    data-type={kind.as_str()}
                    ondragstart={link.callback(move |e: DragEvent| {
                        if let Some(transfer) = e.data_transfer() {
                            transfer.set_effect_allowed("copy");
                            transfer.set_data("text/plain", kind.as_str()).ok();
                        }
                        Msg::DragStart(DragSource::Palette(kind))
                    })}
                    ondragend={link.callback(|_: DragEvent| Msg::DragEnd)}
                >
                    <i class={format!("fas fa-{} me-2", kind.icon())}></i>{ kind.label(lang) }
                </div>
            }) }
        </div>
    }
}

fn preview(component: &PrintDesignerComponent, link: &Link) -> Html {
    let designer = &component.designer;
    let lang = designer.lang();
    if designer.active_document().is_none() {
        return html! {
            <div id="noDocumentMessage" class="text-muted text-center p-5">
                { tr(lang, Text::NoDocumentSelected) }
            </div>
        };
    }

    let settings = designer.settings();
    let today = today_label(lang);
    let zones = |section: Section| -> Html {
        html! {
            <>
                { for Zone::ALL
                    .into_iter()
                    .filter(|zone| zone.section == section)
                    .map(|zone| zone_view(component, link, zone, &today)) }
            </>
        }
    };

    html! {
        <PaperPreview paper_size={settings.paper_size} orientation={settings.orientation} margins={settings.margins}>
            <div id="headerSection" class="preview-header" style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px;">
                { zones(Section::Header) }
            </div>
            <div id="contentSection" class="preview-content text-muted text-center border border-dashed p-4">
                { tr(lang, Text::DocumentContent) }
            </div>
            <div id="footerSection" class="preview-footer" style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px;">
                { zones(Section::Footer) }
            </div>
        </PaperPreview>
    }
}

fn zone_view(component: &PrintDesignerComponent, link: &Link, zone: Zone, today: &str) -> Html {
    let designer = &component.designer;
    let lang = designer.lang();
    let over = component.drag_over == Some(zone);

    let ondragover = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DragOver(zone)
    });
    let ondragleave = link.callback(move |_: DragEvent| Msg::DragLeave(zone));
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::Drop(zone)
    });
    let onclick = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::OpenZoneMenu(zone)
    });

    html! {
        <div
            id={zone.dom_id()}
            class={classes!("drop-zone", "border", "rounded", "p-2", over.then_some("drag-over"))}
            data-section={zone.section.as_str()}
            data-position={zone.position.as_str()}
            style="position: relative; min-height: 50px;"
            {ondragover}
            {ondragleave}
            {ondrop}
            {onclick}
        >
            { match designer.field(zone) {
                Some(placement) => field_view(component, link, zone, placement, today),
                None => html! { <span class="text-muted">{ zone.placeholder_label(lang) }</span> },
            } }
            if component.menu_zone == Some(zone) {
                { zone_menu(lang, link, zone) }
            }
        </div>
    }
}

fn field_view(
    component: &PrintDesignerComponent,
    link: &Link,
    zone: Zone,
    placement: &FieldPlacement,
    today: &str,
) -> Html {
    let lang = component.designer.lang();
    let selected = component.designer.selected() == Some(zone);

    let ondragstart = link.callback(move |e: DragEvent| {
        if let Some(transfer) = e.data_transfer() {
            transfer.set_effect_allowed("move");
            transfer.set_data("text/plain", zone.dom_id()).ok();
        }
        Msg::DragStart(DragSource::Zone(zone))
    });
    let onresize = link.callback(move |e: MouseEvent| {
        e.prevent_default();
        e.stop_propagation();
        let (width, height) = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            .and_then(|handle| handle.parent_element())
            .and_then(|field| field.dyn_into::<HtmlElement>().ok())
            .map(|field| (field.offset_width().max(0) as u32, field.offset_height().max(0) as u32))
            .unwrap_or_default();
        Msg::StartResize { zone, x: e.client_x(), y: e.client_y(), width, height }
    });

    html! {
        <div
            class={classes!("draggable-element", "position-relative", selected.then_some("selected"))}
            draggable="true"
            data-type={placement.kind.as_str()}
            data-content={placement.content.clone()}
            style={placement.style.css()}
            {ondragstart}
            ondragend={link.callback(|_: DragEvent| Msg::DragEnd)}
            onclick={link.callback(move |e: MouseEvent| {
                e.stop_propagation();
                Msg::SelectField(zone)
            })}
        >
            if placement.kind != FieldKind::CustomText {
                <i class={format!("fas fa-{} me-2", placement.kind.icon())}></i>
            }
            { placement.display_text(lang, today) }
            <div class="element-controls">
                <button
                    class="control-btn bg-warning text-dark"
                    title={tr(lang, Text::Edit)}
                    onclick={link.callback(move |e: MouseEvent| {
                        e.stop_propagation();
                        Msg::SelectField(zone)
                    })}
                >
                    <i class="fas fa-edit"></i>
                </button>
                <button
                    class="control-btn bg-danger text-white"
                    title={tr(lang, Text::Delete)}
                    onclick={link.callback(move |e: MouseEvent| {
                        e.stop_propagation();
                        Msg::DeleteField(zone)
                    })}
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <div class="resize-handle" onmousedown={onresize}></div>
        </div>
    }
}

fn zone_menu(lang: Lang, link: &Link, zone: Zone) -> Html {
    html! {
        <div
            class="element-menu position-absolute bg-white border rounded shadow-lg p-2"
            style="z-index: 1000; top: 100%; left: 0;"
            onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
        >
            { for FieldKind::ALL.into_iter().map(|kind| html! {
                <button
                    class="btn btn-sm btn-outline-primary d-block w-100 mb-1"
                    onclick={link.callback(move |_: MouseEvent| Msg::PlaceField { zone, kind })}
                >
                    <i class={format!("fas fa-{} me-2", kind.icon())}></i>{ kind.label(lang) }
                </button>
            }) }
            <button
                class="btn btn-sm btn-secondary d-block w-100"
                onclick={link.callback(|_: MouseEvent| Msg::CloseZoneMenu)}
            >
                { tr(lang, Text::Cancel) }
            </button>
        </div>
    }
}
