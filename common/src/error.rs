use thiserror::Error;

use crate::i18n::{tr, Lang, Text};
use crate::model::field::FieldKind;

/// A string coming from the page or the server did not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ModelError {
    pub kind: &'static str,
    pub value: String,
}

impl ModelError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Failure of a request against the settings resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Parse(String),
    /// The server answered `success: false`, optionally with a message.
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    /// Required input was missing; no request was sent.
    #[error("missing required field `{0}`")]
    Validation(&'static str),
}

/// Which request an [`ApiError`] belongs to, for choosing the message shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Create,
    Delete,
}

impl Operation {
    fn failure_text(self) -> Text {
        match self {
            Operation::Save => Text::SaveErr,
            Operation::Create => Text::ErrCreate,
            Operation::Delete => Text::ErrDelete,
        }
    }
}

impl ApiError {
    /// Text shown to the user after `op` failed with this error.
    pub fn user_message(&self, lang: Lang, op: Operation) -> String {
        let failure = tr(lang, op.failure_text());
        match self {
            ApiError::Transport(_) | ApiError::Parse(_) => failure.to_string(),
            ApiError::Rejected(Some(message)) if !message.trim().is_empty() => {
                format!("{}: {}", failure, message)
            }
            ApiError::Rejected(_) => format!("{}: {}", failure, tr(lang, Text::ErrUnknown)),
            ApiError::Validation(_) => tr(lang, Text::FillRequired).to_string(),
        }
    }
}

/// An editing operation was not applicable to the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignerError {
    #[error("no document is selected")]
    NoDocument,
    #[error("settings for the selected document are still loading")]
    LoadInProgress,
    #[error("no field is selected")]
    NoSelection,
    #[error("zone `{0}` is empty")]
    EmptyZone(&'static str),
    #[error("content of a `{}` field cannot be edited", .0.as_str())]
    ContentNotEditable(FieldKind),
    #[error(transparent)]
    InvalidValue(#[from] ModelError),
}

impl DesignerError {
    pub fn user_message(&self, lang: Lang) -> Option<&'static str> {
        match self {
            DesignerError::NoDocument => Some(tr(lang, Text::SelectDocumentFirst)),
            DesignerError::LoadInProgress => Some(tr(lang, Text::StillLoading)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_uses_server_message_when_present() {
        let err = ApiError::Rejected(Some("duplicate type".into()));
        assert_eq!(
            err.user_message(Lang::En, Operation::Create),
            "An error occurred while creating the document: duplicate type"
        );
    }

    #[test]
    fn rejected_without_message_falls_back_to_unknown() {
        let err = ApiError::Rejected(None);
        assert_eq!(
            err.user_message(Lang::En, Operation::Save),
            "An error occurred while saving the design: Unknown error"
        );
        let blank = ApiError::Rejected(Some("  ".into()));
        assert!(blank.user_message(Lang::En, Operation::Delete).ends_with("Unknown error"));
    }

    #[test]
    fn transport_and_parse_failures_show_generic_text() {
        let transport = ApiError::Transport("offline".into());
        let parse = ApiError::Parse("expected value".into());
        assert_eq!(
            transport.user_message(Lang::En, Operation::Delete),
            "An error occurred while deleting the document"
        );
        assert_eq!(
            parse.user_message(Lang::Ar, Operation::Save),
            "حدث خطأ في حفظ التصميم"
        );
    }

    #[test]
    fn save_during_load_has_a_user_message() {
        assert_eq!(
            DesignerError::LoadInProgress.user_message(Lang::En),
            Some("Document settings are still loading, please try again shortly")
        );
        assert_eq!(DesignerError::NoSelection.user_message(Lang::En), None);
    }
}
