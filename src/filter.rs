use serde::{Deserialize, Serialize};

/// Character element as shown on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Mountain,
    Fire,
    Forest,
    Wind,
}

impl Element {
    pub const ALL: [Element; 4] = [
        Element::Fire,
        Element::Forest,
        Element::Mountain,
        Element::Wind,
    ];

    /// Value expected by the `attr_filter` form field
    pub fn request_value(&self) -> &'static str {
        match self {
            Element::Mountain => "山",
            Element::Fire => "火",
            Element::Forest => "林",
            Element::Wind => "風",
        }
    }

    /// English display name used on the English pages
    pub fn name(&self) -> &'static str {
        match self {
            Element::Mountain => "Mountain",
            Element::Fire => "Fire",
            Element::Forest => "Forest",
            Element::Wind => "Wind",
        }
    }

    /// Reads an extracted display name back into an element
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|element| element.name() == name)
    }
}

/// Field position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    GK,
    DF,
    MF,
    FW,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::FW, Position::MF, Position::DF, Position::GK];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DF => "DF",
            Position::MF => "MF",
            Position::FW => "FW",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|position| position.as_str() == name)
    }
}

/// Game the character appeared in, used by `version_filter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    IE1,
    IE2,
    IE3,
    GO1,
    GO2,
    GO3,
    Ares,
    Orion,
    VictoryRoad,
}

impl Game {
    pub fn request_value(&self) -> &'static str {
        match self {
            Game::IE1 => "IE1",
            Game::IE2 => "IE2",
            Game::IE3 => "IE3",
            Game::GO1 => "GO1",
            Game::GO2 => "GO2",
            Game::GO3 => "GO3",
            Game::Ares => "アレス",
            Game::Orion => "オリオン",
            Game::VictoryRoad => "Vロード",
        }
    }
}

/// Page sizes accepted by the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum PerPage {
    #[default]
    Fifty,
    Hundred,
    HundredFifty,
    TwoHundred,
}

impl PerPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerPage::Fifty => "50",
            PerPage::Hundred => "100",
            PerPage::HundredFifty => "150",
            PerPage::TwoHundred => "200",
        }
    }
}

impl TryFrom<u16> for PerPage {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            50 => Ok(PerPage::Fifty),
            100 => Ok(PerPage::Hundred),
            150 => Ok(PerPage::HundredFifty),
            200 => Ok(PerPage::TwoHundred),
            other => Err(format!(
                "per_page must be one of 50, 100, 150 or 200 (got {})",
                other
            )),
        }
    }
}

impl From<PerPage> for u16 {
    fn from(value: PerPage) -> Self {
        match value {
            PerPage::Fifty => 50,
            PerPage::Hundred => 100,
            PerPage::HundredFifty => 150,
            PerPage::TwoHundred => 200,
        }
    }
}

/// Filter sent to the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFilter {
    /// Opaque `rc` field, always "0" on the site's own form
    #[serde(default = "default_rc")]
    pub rc: String,

    /// Elements to include (each becomes an `attr_filter` field)
    #[serde(default)]
    pub elements: Vec<Element>,

    /// Positions to include (each becomes a `pos_filter` field)
    #[serde(default)]
    pub positions: Vec<Position>,

    /// Games to include (each becomes a `version_filter` field)
    #[serde(default)]
    pub games: Vec<Game>,

    /// Free-text name search, sent even when empty
    #[serde(default)]
    pub name_search: String,

    #[serde(default)]
    pub per_page: PerPage,
}

fn default_rc() -> String {
    "0".to_string()
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            rc: default_rc(),
            elements: vec![Element::Mountain],
            positions: vec![Position::MF],
            games: Vec::new(),
            name_search: String::new(),
            per_page: PerPage::Fifty,
        }
    }
}

impl ListFilter {
    /// Builds the form-encoded payload, repeating multi-valued fields
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("rc", self.rc.clone())];

        for element in &self.elements {
            params.push(("attr_filter", element.request_value().to_string()));
        }
        for position in &self.positions {
            params.push(("pos_filter", position.as_str().to_string()));
        }
        for game in &self.games {
            params.push(("version_filter", game.request_value().to_string()));
        }

        params.push(("name_search", self.name_search.clone()));
        params.push(("per_page", self.per_page.as_str().to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_params() {
        let params = ListFilter::default().form_params();
        let expected: Vec<(&str, String)> = vec![
            ("rc", "0".to_string()),
            ("attr_filter", "山".to_string()),
            ("pos_filter", "MF".to_string()),
            ("name_search", String::new()),
            ("per_page", "50".to_string()),
        ];
        assert_eq!(params, expected);
    }

    #[test]
    fn test_multi_valued_fields_repeat() {
        let filter = ListFilter {
            elements: vec![Element::Fire, Element::Wind],
            positions: vec![],
            games: vec![Game::Ares],
            per_page: PerPage::TwoHundred,
            ..ListFilter::default()
        };
        let params = filter.form_params();

        let attr: Vec<_> = params
            .iter()
            .filter(|(k, _)| *k == "attr_filter")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(attr, vec!["火", "風"]);
        assert!(!params.iter().any(|(k, _)| *k == "pos_filter"));
        assert!(params.contains(&("version_filter", "アレス".to_string())));
        assert!(params.contains(&("per_page", "200".to_string())));
    }

    #[test]
    fn test_per_page_rejects_unknown_sizes() {
        assert_eq!(PerPage::try_from(150), Ok(PerPage::HundredFifty));
        assert!(PerPage::try_from(75).is_err());

        let parsed: Result<ListFilter, _> = serde_json::from_str(r#"{"per_page": 75}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_names_round_trip_from_page_text() {
        assert_eq!(Element::from_name(" Fire "), Some(Element::Fire));
        assert_eq!(Element::from_name("Lightning"), None);
        assert_eq!(Position::from_name("GK"), Some(Position::GK));
        assert_eq!(Position::from_name(""), None);
    }
}
