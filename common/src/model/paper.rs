use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::i18n::{tr, Lang, Text};

/// Margin applied to new documents, in millimetres.
pub const DEFAULT_MARGINS_MM: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    Letter,
}

impl PaperSize {
    pub const ALL: [PaperSize; 3] = [PaperSize::A4, PaperSize::A5, PaperSize::Letter];

    pub fn as_str(self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
        }
    }

    pub fn css_class(self) -> String {
        format!("paper-{}", self.as_str().to_ascii_lowercase())
    }

    /// Portrait width and height in millimetres.
    pub fn dimensions_mm(self) -> (u32, u32) {
        match self {
            PaperSize::A4 => (210, 297),
            PaperSize::A5 => (148, 210),
            PaperSize::Letter => (216, 279),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaperSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PaperSize::A4),
            // A3 rows were migrated to A5 server side; old exports still carry it.
            "a5" | "a3" => Ok(PaperSize::A5),
            "letter" => Ok(PaperSize::Letter),
            _ => Err(ModelError::new("paper size", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Orientation::Portrait => tr(lang, Text::Portrait),
            Orientation::Landscape => tr(lang, Text::Landscape),
        }
    }

    /// Orients portrait `(width, height)` dimensions.
    pub fn apply(self, (width, height): (u32, u32)) -> (u32, u32) {
        match self {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }
}

impl FromStr for Orientation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(ModelError::new("orientation", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_size_parses_case_insensitively() {
        assert_eq!("a4".parse::<PaperSize>(), Ok(PaperSize::A4));
        assert_eq!("LETTER".parse::<PaperSize>(), Ok(PaperSize::Letter));
        assert_eq!("A3".parse::<PaperSize>(), Ok(PaperSize::A5));
        assert!("B5".parse::<PaperSize>().is_err());
        assert!("".parse::<PaperSize>().is_err());
    }

    #[test]
    fn landscape_swaps_dimensions() {
        let dims = PaperSize::A5.dimensions_mm();
        assert_eq!(Orientation::Landscape.apply(dims), (210, 148));
        assert_eq!(Orientation::Portrait.apply(dims), (148, 210));
    }

    #[test]
    fn css_class_is_lowercase() {
        assert_eq!(PaperSize::Letter.css_class(), "paper-letter");
    }
}
