//! Properties panel for the selected field.
//!
//! Controls come from [`PropertyPanel`], so the set shown depends only on the
//! field kind: content, font size, alignment and colour for custom text; size
//! and alignment for the logo; font size and alignment for the rest.

use designer_common::designer::{PanelControl, PropertyPanel};
use designer_common::i18n::{tr, Lang, Text};
use designer_common::model::field::{FontSize, LogoSize, StyleProperty, TextAlign};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PrintDesignerComponent;

type Link = Scope<PrintDesignerComponent>;

pub fn properties_panel(component: &PrintDesignerComponent, link: &Link) -> Html {
    let lang = component.designer.lang();
    let panel = component.designer.property_panel();

    html! {
        <aside id="propertiesPanel" class={classes!("properties-panel", "border-start", "p-3", panel.is_some().then_some("active"))}>
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h6 class="mb-0">{ tr(lang, Text::Properties) }</h6>
                if panel.is_some() {
                    <button class="btn-close" onclick={link.callback(|_: MouseEvent| Msg::Deselect)}></button>
                }
            </div>
            <div id="elementProperties">
                { match &panel {
                    Some(panel) => panel_controls(lang, link, panel),
                    None => html! { <p class="text-muted">{ tr(lang, Text::SelectField) }</p> },
                } }
            </div>
        </aside>
    }
}

fn panel_controls(lang: Lang, link: &Link, panel: &PropertyPanel) -> Html {
    html! {
        <div key={panel.zone.dom_id()}>
            <p class="small text-muted">{ panel.kind.label(lang) }</p>
            { for panel.controls.iter().map(|control| control_view(lang, link, control)) }
        </div>
    }
}

fn control_view(lang: Lang, link: &Link, control: &PanelControl) -> Html {
    let body = match (control, control.property()) {
        (PanelControl::Content(text), _) => html! {
            <textarea
                class="form-control"
                rows="3"
                value={text.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateContent(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        },
        (PanelControl::FontSize(current), Some(property)) => style_select(
            link,
            property,
            FontSize::ALL
                .into_iter()
                .map(|size| (size.as_str(), size.label(lang), size == *current)),
        ),
        (PanelControl::TextAlign(current) | PanelControl::LogoAlign(current), Some(property)) => {
            style_select(
                link,
                property,
                TextAlign::ALL
                    .into_iter()
                    .map(|align| (align.as_str(), align.label(lang), align == *current)),
            )
        }
        (PanelControl::Color(current), Some(property)) => html! {
            <input
                type="color"
                class="form-control form-control-color"
                value={current.clone()}
                onchange={link.callback(move |e: Event| Msg::UpdateStyle {
                    property,
                    value: e.target_unchecked_into::<HtmlInputElement>().value(),
                })}
            />
        },
        (PanelControl::LogoSize(current), Some(property)) => style_select(
            link,
            property,
            LogoSize::ALL
                .into_iter()
                .map(|size| (size.as_str(), size.label(lang), Some(size) == *current)),
        ),
        (_, None) => Html::default(),
    };

    html! {
        <div class="mb-3">
            <label class="form-label">{ control.label(lang) }</label>
            { body }
        </div>
    }
}

fn style_select(
    link: &Link,
    property: StyleProperty,
    options: impl Iterator<Item = (&'static str, &'static str, bool)>,
) -> Html {
    let onchange = link.callback(move |e: Event| Msg::UpdateStyle {
        property,
        value: e.target_unchecked_into::<HtmlSelectElement>().value(),
    });

    html! {
        <select class="form-select" {onchange}>
            { for options.map(|(value, label, selected)| html! {
                <option value={value} {selected}>{ label }</option>
            }) }
        </select>
    }
}
