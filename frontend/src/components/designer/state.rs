//! Component state for the print designer.
//!
//! The layout itself lives in [`Designer`]; this struct adds what only the
//! browser session needs: gestures in progress, DOM refs for the create
//! dialog and the hash used for unsaved-changes tracking.

use std::rc::Rc;

use designer_common::config::DesignerConfig;
use designer_common::designer::{Designer, DragSource, ResizeGesture};
use designer_common::model::document::DocumentSuggestion;
use designer_common::model::zone::Zone;
use yew::prelude::*;

use super::helpers::compute_md5;
use super::props::PrintDesignerProps;

pub struct PrintDesignerComponent {
    /// Canonical layout of the active document. The view is rendered from it.
    pub designer: Designer,

    pub config: Rc<DesignerConfig>,

    /// Prefill options for the create dialog.
    pub suggestions: Vec<DocumentSuggestion>,

    /// Source of the drag in progress, set on `dragstart`.
    pub drag: Option<DragSource>,

    /// Zone currently highlighted as a drop target.
    pub drag_over: Option<Zone>,

    pub resizing: Option<ResizeGesture>,

    /// Empty zone whose field menu is open.
    pub menu_zone: Option<Zone>,

    /// A save request is in flight.
    pub saving: bool,

    /// MD5 of the snapshot last loaded or saved for the active document.
    pub original_md5: Option<String>,

    pub create_dialog_ref: NodeRef,
    pub new_type_ref: NodeRef,
    pub new_name_ar_ref: NodeRef,
    pub new_name_en_ref: NodeRef,
    pub new_paper_ref: NodeRef,

    /// Guards the one-time selection of the first document.
    pub loaded: bool,
}

impl PrintDesignerComponent {
    pub fn new(props: &PrintDesignerProps) -> Self {
        Self {
            designer: Designer::new(props.config.lang, props.page.documents.clone()),
            config: props.config.clone(),
            suggestions: props.page.suggestions.clone(),
            drag: None,
            drag_over: None,
            resizing: None,
            menu_zone: None,
            saving: false,
            original_md5: None,
            create_dialog_ref: NodeRef::default(),
            new_type_ref: NodeRef::default(),
            new_name_ar_ref: NodeRef::default(),
            new_name_en_ref: NodeRef::default(),
            new_paper_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// True when the active document differs from what was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        if self.designer.active_document().is_none() || self.designer.is_loading() {
            return false;
        }
        let current = compute_md5(&self.designer.snapshot());
        self.original_md5.as_deref() != Some(current.as_str())
    }
}
