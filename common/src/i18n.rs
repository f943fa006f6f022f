//! Arabic/English strings used by the designer.
//!
//! The page declares its language on the `<html lang>` attribute; every
//! user-facing string goes through [`tr`] so the designer follows it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ar,
    #[default]
    En,
}

impl Lang {
    /// Maps a BCP-47 tag such as `ar-JO` or `en` to a supported language.
    /// Anything that is not Arabic renders in English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("ar") {
            Lang::Ar
        } else {
            Lang::En
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    /// Locale passed to `Date.toLocaleDateString` for the date field.
    pub fn date_locale(self) -> &'static str {
        match self {
            Lang::Ar => "ar-EG",
            Lang::En => "en-US",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::En => "ltr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    CompanyName,
    Logo,
    Date,
    PageNumber,
    CustomText,
    Cancel,
    Header,
    Footer,
    Left,
    Center,
    Right,
    Page,
    ConfirmDelete,
    ErrCreate,
    ErrUnknown,
    ErrDelete,
    TextLabel,
    FontSize,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
    TextAlign,
    Color,
    LogoSize,
    LogoAlign,
    Edit,
    Delete,
    ConfirmRemoveElement,
    NoDocumentToSave,
    SaveOk,
    SaveErr,
    SelectDocumentFirst,
    FillRequired,
    NoDocumentToExport,
    Documents,
    NewDocument,
    DocumentType,
    NameAr,
    NameEn,
    PaperSize,
    Orientation,
    Portrait,
    Landscape,
    Save,
    Export,
    Create,
    Elements,
    Properties,
    NoDocumentSelected,
    UnsavedChanges,
    DocumentContent,
    SelectField,
    StillLoading,
}

/// Looks up `text` in the table for `lang`.
pub fn tr(lang: Lang, text: Text) -> &'static str {
    let (ar, en) = entry(text);
    match lang {
        Lang::Ar => ar,
        Lang::En => en,
    }
}

/// Like [`tr`], substituting `{name}` with `name`.
pub fn tr_named(lang: Lang, text: Text, name: &str) -> String {
    tr(lang, text).replace("{name}", name)
}

fn entry(text: Text) -> (&'static str, &'static str) {
    match text {
        Text::CompanyName => ("اسم الشركة", "Company Name"),
        Text::Logo => ("الشعار", "Logo"),
        Text::Date => ("التاريخ", "Date"),
        Text::PageNumber => ("رقم الصفحة", "Page Number"),
        Text::CustomText => ("نص مخصص", "Custom Text"),
        Text::Cancel => ("إلغاء", "Cancel"),
        Text::Header => ("الرأس", "Header"),
        Text::Footer => ("التذييل", "Footer"),
        Text::Left => ("يسار", "Left"),
        Text::Center => ("وسط", "Center"),
        Text::Right => ("يمين", "Right"),
        Text::Page => ("صفحة", "Page"),
        Text::ConfirmDelete => (
            "هل أنت متأكد من حذف إعدادات طباعة \"{name}\"؟",
            "Are you sure you want to delete print settings for \"{name}\"?",
        ),
        Text::ErrCreate => ("حدث خطأ في إنشاء المستند", "An error occurred while creating the document"),
        Text::ErrUnknown => ("خطأ غير معروف", "Unknown error"),
        Text::ErrDelete => ("حدث خطأ في حذف المستند", "An error occurred while deleting the document"),
        Text::TextLabel => ("النص", "Text"),
        Text::FontSize => ("حجم الخط", "Font size"),
        Text::XSmall => ("صغير جداً", "Extra Small"),
        Text::Small => ("صغير", "Small"),
        Text::Medium => ("متوسط", "Medium"),
        Text::Large => ("كبير", "Large"),
        Text::XLarge => ("كبير جداً", "Extra Large"),
        Text::XXLarge => ("ضخم", "Huge"),
        Text::TextAlign => ("محاذاة النص", "Text alignment"),
        Text::Color => ("لون النص", "Text color"),
        Text::LogoSize => ("حجم الشعار", "Logo size"),
        Text::LogoAlign => ("محاذاة الشعار", "Logo alignment"),
        Text::Edit => ("تعديل", "Edit"),
        Text::Delete => ("حذف", "Delete"),
        Text::ConfirmRemoveElement => (
            "هل أنت متأكد من حذف هذا العنصر؟",
            "Are you sure you want to delete this element?",
        ),
        Text::NoDocumentToSave => ("لا يوجد مستند محدد للحفظ", "No document selected to save"),
        Text::SaveOk => ("تم حفظ التصميم بنجاح", "Design saved successfully"),
        Text::SaveErr => ("حدث خطأ في حفظ التصميم", "An error occurred while saving the design"),
        Text::SelectDocumentFirst => ("يرجى اختيار مستند أولاً", "Please select a document first"),
        Text::FillRequired => ("يرجى ملء جميع الحقول المطلوبة", "Please fill in all required fields"),
        Text::NoDocumentToExport => ("لا يوجد مستند محدد للتصدير", "No document selected to export"),
        Text::Documents => ("المستندات", "Documents"),
        Text::NewDocument => ("مستند جديد", "New document"),
        Text::DocumentType => ("نوع المستند", "Document type"),
        Text::NameAr => ("الاسم بالعربية", "Arabic name"),
        Text::NameEn => ("الاسم بالإنجليزية", "English name"),
        Text::PaperSize => ("حجم الورق", "Paper size"),
        Text::Orientation => ("الاتجاه", "Orientation"),
        Text::Portrait => ("عمودي", "Portrait"),
        Text::Landscape => ("أفقي", "Landscape"),
        Text::Save => ("حفظ", "Save"),
        Text::Export => ("تصدير", "Export"),
        Text::Create => ("إنشاء", "Create"),
        Text::Elements => ("العناصر", "Elements"),
        Text::Properties => ("الخصائص", "Properties"),
        Text::NoDocumentSelected => ("اختر مستنداً لبدء التصميم", "Select a document to start designing"),
        Text::UnsavedChanges => ("تغييرات غير محفوظة", "Unsaved changes"),
        Text::DocumentContent => ("محتوى المستند", "Document content"),
        Text::SelectField => ("اختر عنصراً لتعديل خصائصه", "Select an element to edit its properties"),
        Text::StillLoading => (
            "جاري تحميل إعدادات المستند، يرجى المحاولة بعد قليل",
            "Document settings are still loading, please try again shortly",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_recognises_arabic_variants() {
        assert_eq!(Lang::from_tag("ar"), Lang::Ar);
        assert_eq!(Lang::from_tag("AR-jo"), Lang::Ar);
        assert_eq!(Lang::from_tag("en-US"), Lang::En);
        assert_eq!(Lang::from_tag("fr"), Lang::En);
        assert_eq!(Lang::from_tag(""), Lang::En);
    }

    #[test]
    fn named_confirmation_interpolates_document_name() {
        assert_eq!(
            tr_named(Lang::En, Text::ConfirmDelete, "Invoice"),
            "Are you sure you want to delete print settings for \"Invoice\"?"
        );
        assert!(tr_named(Lang::Ar, Text::ConfirmDelete, "فاتورة").contains("فاتورة"));
    }
}
