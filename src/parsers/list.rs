use crate::error::ScrapeError;
use crate::results::CharacterSummary;
use crate::utils::resolve_link;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static RESULT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.charaListResult").unwrap());
static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static TBODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static MARKER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input.my-team-checkbox").unwrap());

/// Extracts character summaries from the listing page
#[derive(Debug, Clone)]
pub struct ListParser {
    base_url: String,
    link_selector: Selector,
}

impl ListParser {
    /// Create a parser resolving links against `base_url`; only name-box
    /// anchors whose href contains `link_fragment` count as detail links.
    pub fn new(base_url: &str, link_fragment: &str) -> Result<Self, ScrapeError> {
        let css = format!(".nameBox a[href*='{}']", link_fragment);
        let link_selector = Selector::parse(&css).map_err(|_| ScrapeError::Selector(css.clone()))?;

        Ok(Self {
            base_url: base_url.to_string(),
            link_selector,
        })
    }

    /// Parses the listing HTML; a page without results yields an empty list.
    pub fn parse(&self, html: &str) -> Vec<CharacterSummary> {
        let doc = Html::parse_document(html);

        let Some(container) = doc.select(&RESULT_SELECTOR).next() else {
            ::log::debug!("No result container in listing page");
            return Vec::new();
        };

        let Some(table) = container.select(&TABLE_SELECTOR).next() else {
            ::log::debug!("No table in result container");
            return Vec::new();
        };

        let summaries: Vec<CharacterSummary> = table
            .select(&TBODY_SELECTOR)
            .filter_map(|group| self.parse_row_group(group))
            .collect();

        ::log::debug!("List parser found {} characters", summaries.len());
        summaries
    }

    fn parse_row_group(&self, group: ElementRef<'_>) -> Option<CharacterSummary> {
        // Header and footer groups have a single row
        if group.select(&ROW_SELECTOR).count() < 2 {
            return None;
        }

        let marker = group.select(&MARKER_SELECTOR).next()?;
        let attr = |name: &str| marker.value().attr(name).unwrap_or_default().to_string();

        let page_link = group
            .select(&self.link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| resolve_link(&self.base_url, href))
            .unwrap_or_else(|| self.base_url.clone());

        Some(CharacterSummary {
            id: attr("data-chara-id"),
            name: attr("data-chara-name"),
            nickname: attr("data-nickname"),
            page_link,
        })
    }
}

impl Default for ListParser {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            link_selector: Selector::parse(".nameBox a[href*='chara_param']").unwrap(),
        }
    }
}

/// Parses a listing page against the live site's root URL
pub fn parse_character_list(html: &str) -> Vec<CharacterSummary> {
    ListParser::default().parse(html)
}
