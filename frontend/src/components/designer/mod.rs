//! Print layout designer: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view rendering.
//!
//! The component owns a [`designer_common::designer::Designer`] and renders
//! the document list, the element palette, the paper preview with its six
//! header/footer zones and the properties panel from it. Every edit goes
//! through `update::update`, so the preview is always a projection of the
//! model.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod properties;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PrintDesignerProps;
pub use state::PrintDesignerComponent;

impl Component for PrintDesignerComponent {
    type Message = Msg;
    type Properties = PrintDesignerProps;

    fn create(ctx: &Context<Self>) -> Self {
        PrintDesignerComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            match self.designer.documents().first() {
                Some(first) => ctx
                    .link()
                    .send_message(Msg::SelectDocument(first.document_type.clone())),
                None => log::info!("no documents configured yet"),
            }
        }
    }
}
