//! Properties for the `PrintDesignerComponent`.

use std::rc::Rc;

use designer_common::config::DesignerConfig;
use designer_common::model::document::PageData;
use yew::prelude::*;

/// Everything the designer needs from the hosting page.
#[derive(Properties, PartialEq, Clone)]
pub struct PrintDesignerProps {
    /// Language, URL prefix and CSRF token for requests.
    pub config: Rc<DesignerConfig>,

    /// Documents listed on the left and the suggestions offered when creating
    /// a new one. The first document is opened on the first render.
    pub page: Rc<PageData>,
}
