use std::rc::Rc;

use crate::app::{App, AppProps};

mod api;
mod app;
mod components;
mod config;
mod logger;
mod paper_preview;
mod tops_sheet;

/// Element the designer mounts into; `<body>` when the page has none.
const MOUNT_ID: &str = "print-designer";

fn main() {
    let config = config::load(MOUNT_ID);
    logger::init(config.log_level);
    let page = config::load_page_data();
    log::info!(
        "print designer starting with {} documents ({})",
        page.documents.len(),
        config.lang.code()
    );

    let props = AppProps {
        config: Rc::new(config),
        page: Rc::new(page),
    };
    match config::mount_point(MOUNT_ID) {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
