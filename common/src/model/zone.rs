//! The six header/footer placement slots of a printed page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::i18n::{tr, Lang, Text};
use crate::model::field::{FieldKind, FieldPlacement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Footer,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Footer => "footer",
        }
    }

    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Section::Header => tr(lang, Text::Header),
            Section::Footer => tr(lang, Text::Footer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    #[default]
    Center,
    Right,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Left, Position::Center, Position::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Center => "center",
            Position::Right => "right",
        }
    }

    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Position::Left => tr(lang, Text::Left),
            Position::Center => tr(lang, Text::Center),
            Position::Right => tr(lang, Text::Right),
        }
    }
}

impl FromStr for Position {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Position::Left),
            "center" => Ok(Position::Center),
            "right" => Ok(Position::Right),
            _ => Err(ModelError::new("position", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    pub section: Section,
    pub position: Position,
}

impl Zone {
    pub const HEADER_LEFT: Zone = Zone::new(Section::Header, Position::Left);
    pub const HEADER_CENTER: Zone = Zone::new(Section::Header, Position::Center);
    pub const HEADER_RIGHT: Zone = Zone::new(Section::Header, Position::Right);
    pub const FOOTER_LEFT: Zone = Zone::new(Section::Footer, Position::Left);
    pub const FOOTER_CENTER: Zone = Zone::new(Section::Footer, Position::Center);
    pub const FOOTER_RIGHT: Zone = Zone::new(Section::Footer, Position::Right);

    pub const ALL: [Zone; 6] = [
        Zone::HEADER_LEFT,
        Zone::HEADER_CENTER,
        Zone::HEADER_RIGHT,
        Zone::FOOTER_LEFT,
        Zone::FOOTER_CENTER,
        Zone::FOOTER_RIGHT,
    ];

    pub const fn new(section: Section, position: Position) -> Self {
        Self { section, position }
    }

    fn index(self) -> usize {
        let row = match self.section {
            Section::Header => 0,
            Section::Footer => 3,
        };
        let column = match self.position {
            Position::Left => 0,
            Position::Center => 1,
            Position::Right => 2,
        };
        row + column
    }

    /// Element id of the zone in the preview, e.g. `headerLeft`.
    pub fn dom_id(self) -> &'static str {
        ["headerLeft", "headerCenter", "headerRight", "footerLeft", "footerCenter", "footerRight"]
            [self.index()]
    }

    /// Prefix of the zone's form field, e.g. `header_left`.
    pub fn wire_key(self) -> &'static str {
        [
            "header_left",
            "header_center",
            "header_right",
            "footer_left",
            "footer_center",
            "footer_right",
        ][self.index()]
    }

    /// Name of the form field carrying the zone content.
    pub fn content_field(self) -> &'static str {
        [
            "header_left_content",
            "header_center_content",
            "header_right_content",
            "footer_left_content",
            "footer_center_content",
            "footer_right_content",
        ][self.index()]
    }

    /// Label shown while the zone is empty: "{position} {section}".
    pub fn placeholder_label(self, lang: Lang) -> String {
        format!("{} {}", self.position.label(lang), self.section.label(lang))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl FromStr for Zone {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.dom_id() == s || zone.wire_key() == s)
            .ok_or_else(|| ModelError::new("zone", s))
    }
}

/// Occupants of the six zones. Each zone holds at most one placement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoneSlots([Option<FieldPlacement>; 6]);

impl ZoneSlots {
    pub fn get(&self, zone: Zone) -> Option<&FieldPlacement> {
        self.0[zone.index()].as_ref()
    }

    pub fn get_mut(&mut self, zone: Zone) -> Option<&mut FieldPlacement> {
        self.0[zone.index()].as_mut()
    }

    /// Puts `placement` into `zone`, returning the occupant it replaced.
    pub fn insert(&mut self, zone: Zone, placement: FieldPlacement) -> Option<FieldPlacement> {
        self.0[zone.index()].replace(placement)
    }

    pub fn take(&mut self, zone: Zone) -> Option<FieldPlacement> {
        self.0[zone.index()].take()
    }

    pub fn is_empty(&self, zone: Zone) -> bool {
        self.0[zone.index()].is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Zone, Option<&FieldPlacement>)> + '_ {
        Zone::ALL.into_iter().map(move |zone| (zone, self.get(zone)))
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Zone, &FieldPlacement)> + '_ {
        self.iter()
            .filter_map(|(zone, placement)| placement.map(|p| (zone, p)))
    }

    /// First zone, in page order, holding a field of `kind`.
    pub fn find_kind(&self, kind: FieldKind) -> Option<Zone> {
        self.occupied()
            .find(|(_, placement)| placement.kind == kind)
            .map(|(zone, _)| zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_and_wire_keys_line_up() {
        assert_eq!(Zone::FOOTER_CENTER.dom_id(), "footerCenter");
        assert_eq!(Zone::FOOTER_CENTER.wire_key(), "footer_center");
        assert_eq!(Zone::FOOTER_CENTER.content_field(), "footer_center_content");
        for zone in Zone::ALL {
            assert_eq!(zone.dom_id().parse::<Zone>(), Ok(zone));
            assert_eq!(zone.wire_key().parse::<Zone>(), Ok(zone));
        }
    }

    #[test]
    fn placeholder_label_names_position_then_section() {
        assert_eq!(Zone::HEADER_RIGHT.placeholder_label(Lang::En), "Right Header");
        assert_eq!(Zone::FOOTER_LEFT.placeholder_label(Lang::Ar), "يسار التذييل");
    }

    #[test]
    fn insert_replaces_previous_occupant() {
        let mut slots = ZoneSlots::default();
        assert!(slots.insert(Zone::HEADER_LEFT, FieldPlacement::new(FieldKind::Date, None)).is_none());
        let replaced = slots.insert(Zone::HEADER_LEFT, FieldPlacement::new(FieldKind::Logo, None));
        assert_eq!(replaced.map(|p| p.kind), Some(FieldKind::Date));
        assert_eq!(slots.occupied().count(), 1);
        assert_eq!(slots.find_kind(FieldKind::Logo), Some(Zone::HEADER_LEFT));
    }
}
