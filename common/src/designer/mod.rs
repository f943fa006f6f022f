//! Editing state of the print layout designer.
//!
//! A [`Designer`] owns everything the page edits: the visible document list,
//! the selected document's [`DocumentTemplateSettings`], and the selected
//! field. The frontend renders it and turns gestures into calls on it; network
//! requests happen outside and feed their results back through
//! [`Designer::finish_load`].
//!
//! Loading is split in two so late responses can be told apart:
//! [`Designer::begin_load`] hands out a [`LoadTicket`] carrying a generation
//! number, and only the ticket of the most recent call is applied.

mod export;
mod gesture;
mod panel;

pub use export::{DesignExport, ExportedElement};
pub use gesture::{DragSource, ResizeGesture};
pub use panel::{PanelControl, PropertyPanel, DEFAULT_COLOR};

use crate::error::{ApiError, DesignerError};
use crate::i18n::Lang;
use crate::model::document::DocumentEntry;
use crate::model::field::{FieldKind, FieldPlacement, StyleChange, StyleProperty};
use crate::model::paper::{Orientation, PaperSize};
use crate::model::settings::{DocumentTemplateSettings, SettingsRecord};
use crate::model::zone::Zone;
use crate::requests::{save_settings_form, FormBody};

/// Identifies one `begin_load` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    document_type: String,
}

impl LoadTicket {
    pub fn document_type(&self) -> &str {
        &self.document_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored settings were applied.
    Loaded,
    /// The server has no settings for the document; defaults were applied.
    Defaulted,
    /// The request failed; defaults were applied.
    Failed(ApiError),
    /// A newer load was started since; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Designer {
    lang: Lang,
    documents: Vec<DocumentEntry>,
    active: Option<String>,
    settings: DocumentTemplateSettings,
    selected: Option<Zone>,
    load_generation: u64,
    loading: bool,
}

impl Designer {
    pub fn new(lang: Lang, documents: Vec<DocumentEntry>) -> Self {
        Self {
            lang,
            documents,
            active: None,
            settings: DocumentTemplateSettings::default_for(""),
            selected: None,
            load_generation: 0,
            loading: false,
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn documents(&self) -> &[DocumentEntry] {
        &self.documents
    }

    /// Document type currently being edited.
    pub fn active_document(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn settings(&self) -> &DocumentTemplateSettings {
        &self.settings
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> Option<Zone> {
        self.selected
    }

    pub fn field(&self, zone: Zone) -> Option<&FieldPlacement> {
        self.settings.zones.get(zone)
    }

    /// Preview text of a zone: its occupant, or the "{position} {section}"
    /// placeholder when empty.
    pub fn zone_text(&self, zone: Zone, today: &str) -> String {
        match self.field(zone) {
            Some(placement) => placement.display_text(self.lang, today),
            None => zone.placeholder_label(self.lang),
        }
    }

    /// First step of selecting a document. The designer switches to the
    /// document right away, showing the default layout until the settings
    /// arrive.
    pub fn begin_load(&mut self, document_type: &str) -> LoadTicket {
        self.load_generation += 1;
        self.active = Some(document_type.to_string());
        self.settings = DocumentTemplateSettings::default_for(document_type);
        self.selected = None;
        self.loading = true;
        LoadTicket {
            generation: self.load_generation,
            document_type: document_type.to_string(),
        }
    }

    /// Applies the result of the request started by `ticket`. Absent
    /// settings and failures both leave the default layout in place.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Option<SettingsRecord>, ApiError>,
    ) -> LoadOutcome {
        if ticket.generation != self.load_generation {
            log::debug!(
                "discarding settings for `{}` (load {} superseded by {})",
                ticket.document_type,
                ticket.generation,
                self.load_generation
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;
        self.selected = None;
        match result {
            Ok(Some(record)) => {
                self.settings = DocumentTemplateSettings::from_record(&ticket.document_type, &record);
                LoadOutcome::Loaded
            }
            Ok(None) => {
                self.settings = DocumentTemplateSettings::default_for(&ticket.document_type);
                LoadOutcome::Defaulted
            }
            Err(err) => {
                log::error!("Error loading document settings for `{}`: {}", ticket.document_type, err);
                self.settings = DocumentTemplateSettings::default_for(&ticket.document_type);
                LoadOutcome::Failed(err)
            }
        }
    }

    fn require_document(&self) -> Result<(), DesignerError> {
        if self.active.is_none() {
            Err(DesignerError::NoDocument)
        } else {
            Ok(())
        }
    }

    /// Puts a new field of `kind` into `zone`, returning the replaced occupant.
    pub fn place_field(
        &mut self,
        zone: Zone,
        kind: FieldKind,
        content: Option<&str>,
    ) -> Result<Option<FieldPlacement>, DesignerError> {
        self.require_document()?;
        if self.selected == Some(zone) {
            self.selected = None;
        }
        let content = content
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| kind.label(self.lang));
        Ok(self.settings.zones.insert(zone, FieldPlacement::new(kind, Some(content))))
    }

    /// Moves the occupant of `source` into `dest`. Returns `false` when there
    /// was nothing to move.
    pub fn move_field(&mut self, source: Zone, dest: Zone) -> bool {
        if source == dest {
            return false;
        }
        let Some(placement) = self.settings.zones.take(source) else {
            return false;
        };
        self.settings.zones.insert(dest, placement);
        if self.selected == Some(source) {
            self.selected = Some(dest);
        } else if self.selected == Some(dest) {
            self.selected = None;
        }
        true
    }

    /// Completes a drag-and-drop onto `dest`.
    pub fn apply_drop(&mut self, source: DragSource, dest: Zone) -> Result<(), DesignerError> {
        match source {
            DragSource::Palette(kind) => self.place_field(dest, kind, None).map(|_| ()),
            DragSource::Zone(zone) => {
                self.require_document()?;
                self.move_field(zone, dest);
                Ok(())
            }
        }
    }

    pub fn select_field(&mut self, zone: Zone) -> Result<PropertyPanel, DesignerError> {
        let placement = self
            .settings
            .zones
            .get(zone)
            .ok_or(DesignerError::EmptyZone(zone.dom_id()))?;
        let panel = PropertyPanel::for_placement(zone, placement);
        self.selected = Some(zone);
        Ok(panel)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Panel for the current selection, if any.
    pub fn property_panel(&self) -> Option<PropertyPanel> {
        let zone = self.selected?;
        self.settings
            .zones
            .get(zone)
            .map(|placement| PropertyPanel::for_placement(zone, placement))
    }

    fn selected_mut(&mut self) -> Result<&mut FieldPlacement, DesignerError> {
        let zone = self.selected.ok_or(DesignerError::NoSelection)?;
        self.settings
            .zones
            .get_mut(zone)
            .ok_or(DesignerError::NoSelection)
    }

    pub fn update_selected_style(
        &mut self,
        property: StyleProperty,
        value: &str,
    ) -> Result<(), DesignerError> {
        let change = StyleChange::parse(property, value)?;
        self.selected_mut()?.apply(change);
        Ok(())
    }

    pub fn update_selected_content(&mut self, value: &str) -> Result<(), DesignerError> {
        let placement = self.selected_mut()?;
        if placement.kind != FieldKind::CustomText {
            return Err(DesignerError::ContentNotEditable(placement.kind));
        }
        placement.content = value.to_string();
        Ok(())
    }

    /// Sets the size of the field in `zone` from a resize gesture.
    pub fn resize_field(&mut self, zone: Zone, (width, height): (u32, u32)) -> Result<(), DesignerError> {
        let placement = self
            .settings
            .zones
            .get_mut(zone)
            .ok_or(DesignerError::EmptyZone(zone.dom_id()))?;
        placement.apply(StyleChange::Width(width));
        placement.apply(StyleChange::Height(height));
        Ok(())
    }

    /// Empties `zone`. Confirmation is the caller's job.
    pub fn delete_field(&mut self, zone: Zone) -> Option<FieldPlacement> {
        let removed = self.settings.zones.take(zone);
        if self.selected == Some(zone) {
            self.selected = None;
        }
        removed
    }

    pub fn set_paper_size(&mut self, size: PaperSize) {
        self.settings.paper_size = size;
    }

    pub fn set_paper_orientation(&mut self, orientation: Orientation) {
        self.settings.orientation = orientation;
    }

    pub fn set_margins(&mut self, margins_mm: u32) {
        self.settings.margins = margins_mm;
    }

    /// Settings as they are stored. Custom text cleared in the panel is
    /// written as its label, since a blank zone reads back as empty.
    fn persisted_settings(&self) -> DocumentTemplateSettings {
        let mut settings = self.settings.clone();
        for zone in Zone::ALL {
            if let Some(placement) = settings.zones.get_mut(zone) {
                if placement.kind == FieldKind::CustomText && placement.content.trim().is_empty() {
                    placement.content = placement.kind.label(self.lang).to_string();
                }
            }
        }
        settings
    }

    /// Body of the `save_settings` request for the active document.
    pub fn save_form(&self) -> Result<FormBody, DesignerError> {
        self.require_document()?;
        if self.loading {
            return Err(DesignerError::LoadInProgress);
        }
        Ok(save_settings_form(&self.persisted_settings()))
    }

    /// Stable text form of what a save would send, for change tracking.
    pub fn snapshot(&self) -> String {
        save_settings_form(&self.persisted_settings())
            .pairs()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn export(&self) -> Result<DesignExport, DesignerError> {
        self.require_document()?;
        Ok(DesignExport::from_settings(&self.persisted_settings()))
    }

    /// Drops a deleted document from the list. When it was being edited the
    /// designer goes back to having no document, and any pending load for it
    /// is invalidated.
    pub fn remove_document(&mut self, id: &str) -> Option<DocumentEntry> {
        let index = self.documents.iter().position(|doc| doc.id == id)?;
        let removed = self.documents.remove(index);
        if self.active.as_deref() == Some(removed.document_type.as_str()) {
            self.load_generation += 1;
            self.active = None;
            self.settings = DocumentTemplateSettings::default_for("");
            self.selected = None;
            self.loading = false;
        }
        Some(removed)
    }
}
