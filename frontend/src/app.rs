use std::rc::Rc;

use designer_common::config::DesignerConfig;
use designer_common::model::document::PageData;
use yew::{html, Component, Context, Html, Properties};

use crate::components::designer::PrintDesignerComponent;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<DesignerConfig>,
    pub page: Rc<PageData>,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="print-design-app">
                <PrintDesignerComponent config={props.config.clone()} page={props.page.clone()} />
            </div>
        }
    }
}
