use designer_common::model::paper::{Orientation, PaperSize};
use yew::{classes, html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PaperPreviewProps {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Page margins in millimetres, rendered as padding.
    pub margins: u32,
    pub children: Children,
}

/// A sheet of paper at its physical size, laid out as header, content and
/// footer rows.
pub struct PaperPreview;

impl Component for PaperPreview {
    type Message = ();
    type Properties = PaperPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PaperPreview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let (width, height) = props.orientation.apply(props.paper_size.dimensions_mm());
        let style = format!(
            "display: grid;
             grid-template-rows: auto 1fr auto;
             gap: 8mm;
             box-sizing: border-box;
             width: {}mm;
             min-height: {}mm;
             margin: auto;
             padding: {}mm;
             background: white;
             box-shadow: 0 0 8px #ccc;",
            width, height, props.margins
        );
        let landscape = (props.orientation == Orientation::Landscape).then_some("landscape");

        html! {
            <div
                id="documentPreview"
                class={classes!("document-preview", props.paper_size.css_class(), landscape)}
                style={style}
            >
                { for props.children.iter() }
            </div>
        }
    }
}
