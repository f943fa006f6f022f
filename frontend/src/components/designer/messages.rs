use designer_common::designer::{DragSource, LoadTicket};
use designer_common::error::ApiError;
use designer_common::model::document::DocumentSuggestion;
use designer_common::model::field::{FieldKind, StyleProperty};
use designer_common::model::paper::{Orientation, PaperSize};
use designer_common::model::settings::SettingsRecord;
use designer_common::model::zone::Zone;

pub enum Msg {
    SelectDocument(String),
    SettingsLoaded {
        ticket: LoadTicket,
        result: Result<Option<SettingsRecord>, ApiError>,
    },

    OpenZoneMenu(Zone),
    CloseZoneMenu,
    PlaceField { zone: Zone, kind: FieldKind },

    DragStart(DragSource),
    DragOver(Zone),
    DragLeave(Zone),
    Drop(Zone),
    DragEnd,

    SelectField(Zone),
    Deselect,
    UpdateStyle { property: StyleProperty, value: String },
    UpdateContent(String),
    DeleteField(Zone),

    StartResize {
        zone: Zone,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    ResizeMove { x: i32, y: i32 },
    EndResize,

    SetPaperSize(PaperSize),
    SetOrientation(Orientation),
    Save,
    SaveFinished {
        document_type: String,
        snapshot: String,
        result: Result<(), ApiError>,
    },
    Export,

    OpenCreateDialog(Option<DocumentSuggestion>),
    CloseCreateDialog,
    CreateDocument,
    CreateFinished(Result<(), ApiError>),
    DeleteDocument { id: String, name: String },
    DeleteFinished { id: String, result: Result<(), ApiError> },
}
