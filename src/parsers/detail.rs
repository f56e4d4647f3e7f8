use crate::results::CharacterDetail;
use crate::utils::{collapsed_text, stripped_text};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;

macro_rules! selector {
    ($css:expr) => {
        LazyLock::new(|| Selector::parse($css).unwrap())
    };
}

static DETAIL: LazyLock<Selector> = selector!("div.detailBox");
static NICKNAME: LazyLock<Selector> = selector!(".lBox .nickname ruby, .lBox .nickname");
static IMAGE: LazyLock<Selector> = selector!(".lBox img");
static GAME: LazyLock<Selector> = selector!("dl.appearedWorks dd");
static DESCRIPTION: LazyLock<Selector> = selector!("p.description");
static OBTAIN: LazyLock<Selector> = selector!("dl.getTxt");
static STAT_ITEMS: LazyLock<Selector> = selector!("ul.param > li");
static BASIC_ITEMS: LazyLock<Selector> = selector!("ul.basic li");
static DL: LazyLock<Selector> = selector!("dl");
static DL_BOX: LazyLock<Selector> = selector!("dl.box");
static DT: LazyLock<Selector> = selector!("dt");
static DD: LazyLock<Selector> = selector!("dd");
static TD: LazyLock<Selector> = selector!("td");

/// Parses a character detail page.
///
/// Returns `None` when the page has no detail container at all. Otherwise
/// every field is extracted on its own and missing markup leaves the
/// field's default in place.
pub fn parse_character_page(html: &str) -> Option<CharacterDetail> {
    let doc = Html::parse_document(html);

    let Some(detail) = doc.select(&DETAIL).next() else {
        ::log::debug!("No detail container in character page");
        return None;
    };

    let mut out = CharacterDetail {
        nickname: first(detail, &NICKNAME).map(stripped_text).unwrap_or_default(),
        image: first(detail, &IMAGE)
            .and_then(|img| img.value().attr("src"))
            .unwrap_or_default()
            .to_string(),
        game: first(detail, &GAME).map(stripped_text).unwrap_or_default(),
        description: first(detail, &DESCRIPTION)
            .map(collapsed_text)
            .unwrap_or_default(),
        how_to_obtain: first(detail, &OBTAIN).map(collapsed_text).unwrap_or_default(),
        ..CharacterDetail::default()
    };

    for item in detail.select(&STAT_ITEMS) {
        parse_stat_item(item, &mut out);
    }

    out.basic = parse_basic(detail);

    ::log::debug!(
        "Detail parser found {} stats and {} basic entries",
        out.stats.len(),
        out.basic.len()
    );
    Some(out)
}

fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

// The stat row, the position pair and the element pair are checked
// independently; a single item may feed any combination of them.
fn parse_stat_item(item: ElementRef<'_>, out: &mut CharacterDetail) {
    if let (Some(term), Some(cell)) = (first(item, &DT), first(item, &TD)) {
        out.stats.insert(stripped_text(term), stripped_text(cell));
    }

    if let Some(dl) = first(item, &DL) {
        let is_position = first(dl, &DT).is_some_and(|dt| stripped_text(dt) == "Position");
        if is_position {
            if let Some(dd) = first(dl, &DD) {
                out.position = Some(stripped_text(dd));
            }
        }
    }

    if let Some(dd) = first(item, &DL_BOX).and_then(|dl| first(dl, &DD)) {
        out.element = Some(stripped_text(dd));
    }
}

fn parse_basic(detail: ElementRef<'_>) -> BTreeMap<String, String> {
    let mut basic = BTreeMap::new();
    for item in detail.select(&BASIC_ITEMS) {
        if let (Some(term), Some(value)) = (first(item, &DT), first(item, &DD)) {
            basic.insert(stripped_text(term), stripped_text(value));
        }
    }
    basic
}
