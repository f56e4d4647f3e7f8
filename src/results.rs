use crate::filter::{Element, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One character row from the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    /// Site identifier, kept as the raw attribute text
    pub id: String,

    pub name: String,

    pub nickname: String,

    /// Absolute URL of the character's detail page
    pub page_link: String,
}

/// Fields extracted from a character detail page
///
/// Every field defaults to empty when its markup is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub nickname: String,
    pub image: String,
    pub game: String,
    pub description: String,
    pub how_to_obtain: String,

    /// Stat label to displayed value
    pub stats: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// "Basic info" label to value
    pub basic: BTreeMap<String, String>,
}

/// Summary and detail merged into one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    pub name: String,
    pub nickname: String,
    pub page_link: String,
    pub image: String,
    pub game: String,
    pub description: String,
    pub how_to_obtain: String,
    pub stats: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    pub basic: BTreeMap<String, String>,
}

impl CharacterRecord {
    /// Merges a summary with its detail page; detail fields win on collision.
    ///
    /// `None` means the detail page had no detail container, in which case
    /// only the summary contributes.
    pub fn merge(summary: CharacterSummary, detail: Option<CharacterDetail>) -> Self {
        let CharacterSummary {
            id,
            name,
            nickname,
            page_link,
        } = summary;

        match detail {
            Some(detail) => Self {
                id,
                name,
                nickname: detail.nickname,
                page_link,
                image: detail.image,
                game: detail.game,
                description: detail.description,
                how_to_obtain: detail.how_to_obtain,
                stats: detail.stats,
                position: detail.position,
                element: detail.element,
                basic: detail.basic,
            },
            None => Self {
                id,
                name,
                nickname,
                page_link,
                image: String::new(),
                game: String::new(),
                description: String::new(),
                how_to_obtain: String::new(),
                stats: BTreeMap::new(),
                position: None,
                element: None,
                basic: BTreeMap::new(),
            },
        }
    }

    /// Typed view of the numeric stats, if all seven are present
    pub fn parsed_stats(&self) -> Option<Stats> {
        Stats::from_map(&self.stats)
    }

    /// Typed element, if the page showed a known one
    pub fn element_kind(&self) -> Option<Element> {
        self.element.as_deref().and_then(Element::from_name)
    }

    pub fn position_kind(&self) -> Option<Position> {
        self.position.as_deref().and_then(Position::from_name)
    }
}

/// The seven numeric stats shown on a character page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub kick: u8,
    pub control: u8,
    pub technique: u8,
    pub pressure: u8,
    pub physical: u8,
    pub agility: u8,
    pub intelligence: u8,
}

impl Stats {
    /// Reads stats from a label→value map, matching labels case-insensitively
    pub fn from_map(stats: &BTreeMap<String, String>) -> Option<Self> {
        let get = |label: &str| -> Option<u8> {
            stats
                .iter()
                .find(|(key, _)| key.trim().eq_ignore_ascii_case(label))
                .and_then(|(_, value)| value.trim().parse().ok())
        };

        Some(Self {
            kick: get("kick")?,
            control: get("control")?,
            technique: get("technique")?,
            pressure: get("pressure")?,
            physical: get("physical")?,
            agility: get("agility")?,
            intelligence: get("intelligence")?,
        })
    }
}

impl CharacterDetail {
    pub fn parsed_stats(&self) -> Option<Stats> {
        Stats::from_map(&self.stats)
    }
}
