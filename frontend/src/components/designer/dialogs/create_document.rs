//! Top sheet for creating a new document type.
//!
//! The inputs are uncontrolled; `Msg::OpenCreateDialog` fills them (from a
//! suggestion or blank) and `Msg::CreateDocument` reads them back through the
//! node refs kept on the component.

use designer_common::i18n::{tr, Text};
use designer_common::model::paper::PaperSize;
use yew::html::Scope;
use yew::prelude::*;

use super::super::messages::Msg;
use super::super::state::PrintDesignerComponent;
use crate::tops_sheet::top_sheet::TopSheet;

pub fn create_document_dialog(
    component: &PrintDesignerComponent,
    link: &Scope<PrintDesignerComponent>,
) -> Html {
    let lang = component.designer.lang();

    html! {
        <TopSheet node_ref={component.create_dialog_ref.clone()}>
            <div class="p-3">
                <h5 class="mb-3">{ tr(lang, Text::NewDocument) }</h5>
                <div class="mb-3">
                    <label class="form-label" for="newDocumentType">{ tr(lang, Text::DocumentType) }</label>
                    <input id="newDocumentType" class="form-control" type="text" ref={component.new_type_ref.clone()} />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="newDocumentNameAr">{ tr(lang, Text::NameAr) }</label>
                    <input id="newDocumentNameAr" class="form-control" type="text" dir="rtl" ref={component.new_name_ar_ref.clone()} />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="newDocumentNameEn">{ tr(lang, Text::NameEn) }</label>
                    <input id="newDocumentNameEn" class="form-control" type="text" dir="ltr" ref={component.new_name_en_ref.clone()} />
                </div>
                <div class="mb-3">
                    <label class="form-label" for="newPaperSize">{ tr(lang, Text::PaperSize) }</label>
                    <select id="newPaperSize" class="form-select" ref={component.new_paper_ref.clone()}>
                        { for PaperSize::ALL.into_iter().map(|size| html! {
                            <option value={size.as_str()} selected={size == PaperSize::default()}>{ size.as_str() }</option>
                        }) }
                    </select>
                </div>
                <div class="d-flex justify-content-end gap-2">
                    <button class="btn btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::CloseCreateDialog)}>
                        { tr(lang, Text::Cancel) }
                    </button>
                    <button class="btn btn-primary" onclick={link.callback(|_: MouseEvent| Msg::CreateDocument)}>
                        { tr(lang, Text::Create) }
                    </button>
                </div>
            </div>
        </TopSheet>
    }
}
