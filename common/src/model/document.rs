use serde::{Deserialize, Deserializer, Serialize};

/// One row of the document list rendered by the server page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Primary key of the stored settings row, sent back on delete.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub document_type: String,
    pub name: String,
}

/// A document type without settings yet, offered as a shortcut in the
/// create dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSuggestion {
    pub document_type: String,
    pub name_ar: String,
    pub name_en: String,
}

/// Contents of the page's `print-design-documents` JSON island.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
    #[serde(default)]
    pub suggestions: Vec<DocumentSuggestion>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_data_accepts_numeric_ids() {
        let json = r#"{
            "documents": [
                {"id": 7, "document_type": "invoice", "name": "Sales invoice"},
                {"id": "8", "document_type": "receipt", "name": "Receipt"}
            ]
        }"#;
        let data: PageData = serde_json::from_str(json).unwrap();
        assert_eq!(data.documents[0].id, "7");
        assert_eq!(data.documents[1].id, "8");
        assert!(data.suggestions.is_empty());
    }
}
