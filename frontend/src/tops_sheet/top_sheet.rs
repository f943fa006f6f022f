use uuid::Uuid;
use web_sys::HtmlElement;
use yew::{html, Component, Context, Html, NodeRef, Properties};

const OPEN_CLASS: &str = "show";

/// Panel sliding down from the top of the page, used for dialogs.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

/// Adds the open class on the next tick so the CSS transition runs.
pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
            top_sheet.class_list().add_1(OPEN_CLASS).ok();
        }
    });
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
        top_sheet.class_list().remove_1(OPEN_CLASS).ok();
    }
}
