use crate::config::{FailurePolicy, ScraperConfig};
use crate::crawlers::{CharacterScraper, PageSource};
use crate::error::ScrapeError;
use crate::parsers::tests::fixtures::{DETAIL_PAGE, LISTING_PAGE, detail_page};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

const FOO_URL: &str = "https://zukan.inazuma.jp/chara_param/42";
const BAR_URL: &str = "https://zukan.inazuma.jp/chara_param/43";

/// In-memory pages, optionally delayed, recording every request
#[derive(Default)]
struct MemorySource {
    pages: HashMap<String, (String, Duration)>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), (html.into(), Duration::ZERO));
        self
    }

    fn with_slow_page(mut self, url: &str, html: impl Into<String>, delay: Duration) -> Self {
        self.pages.insert(url.to_string(), (html.into(), delay));
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageSource for MemorySource {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.requests.lock().unwrap().push(url.to_string());

        let (html, delay) = self.pages.get(url).cloned().ok_or_else(|| ScrapeError::Source {
            url: url.to_string(),
            message: "connection refused".to_string(),
        })?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(html)
    }
}

fn scraper(source: MemorySource) -> CharacterScraper<MemorySource> {
    CharacterScraper::with_source(source, &ScraperConfig::default()).unwrap()
}

#[tokio::test]
async fn test_scrapes_every_listed_character_in_order() {
    let source = MemorySource::default()
        .with_page(FOO_URL, DETAIL_PAGE)
        .with_page(BAR_URL, detail_page("Bar-chan", 64));
    let scraper = scraper(source);

    let records = scraper.scrape_all_characters(LISTING_PAGE).await.unwrap();

    assert_eq!(records.len(), 2);

    assert_eq!(records[0].id, "42");
    assert_eq!(records[0].name, "Foo");
    assert_eq!(records[0].nickname, "Foo-kun");
    assert_eq!(records[0].page_link, FOO_URL);
    assert_eq!(records[0].game, "Inazuma Eleven");
    assert_eq!(records[0].position.as_deref(), Some("FW"));
    assert_eq!(records[0].stats["Kick"], "80");

    assert_eq!(records[1].id, "43");
    assert_eq!(records[1].nickname, "Bar-chan");
    assert_eq!(records[1].stats["Kick"], "64");
    assert_eq!(records[1].position, None);

    assert_eq!(scraper.source().requests(), vec![FOO_URL, BAR_URL]);
}

#[tokio::test]
async fn test_page_without_detail_container_keeps_summary() {
    let source = MemorySource::default()
        .with_page(FOO_URL, "<html><body>Not found</body></html>")
        .with_page(BAR_URL, detail_page("Bar-chan", 64));

    let records = scraper(source)
        .scrape_all_characters(LISTING_PAGE)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].nickname, "F");
    assert!(records[0].stats.is_empty());
}

#[tokio::test]
async fn test_abort_policy_stops_at_first_failure() {
    let source = MemorySource::default().with_page(BAR_URL, detail_page("Bar-chan", 64));
    let scraper = scraper(source);

    let err = scraper
        .scrape_all_characters(LISTING_PAGE)
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Source { ref url, .. } if url == FOO_URL));
    assert_eq!(scraper.source().requests(), vec![FOO_URL]);
}

#[tokio::test]
async fn test_skip_policy_drops_failed_characters() {
    let source = MemorySource::default().with_page(BAR_URL, detail_page("Bar-chan", 64));
    let scraper = scraper(source).with_failure_policy(FailurePolicy::Skip);

    let records = scraper.scrape_all_characters(LISTING_PAGE).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "43");
    assert_eq!(scraper.source().requests().len(), 2);
}

#[tokio::test]
async fn test_concurrent_fetches_keep_listing_order() {
    let source = MemorySource::default()
        .with_slow_page(FOO_URL, detail_page("Foo-kun", 80), Duration::from_millis(100))
        .with_page(BAR_URL, detail_page("Bar-chan", 64));
    let scraper = scraper(source).with_max_concurrency(2);

    let records = scraper.scrape_all_characters(LISTING_PAGE).await.unwrap();

    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["42", "43"]);
    assert_eq!(records[0].nickname, "Foo-kun");
}

#[tokio::test]
async fn test_empty_listing_fetches_nothing() {
    let scraper = scraper(MemorySource::default());

    let records = scraper
        .scrape_all_characters("<html><body></body></html>")
        .await
        .unwrap();

    assert!(records.is_empty());
    assert!(scraper.source().requests().is_empty());
}

#[tokio::test]
async fn test_skip_unnamed_characters() {
    let listing = r#"<div class="charaListResult"><table><tbody>
        <tr><td><input class="my-team-checkbox" data-chara-id="99" data-chara-name="" data-nickname="???"></td></tr>
        <tr><td class="nameBox"><a href="/chara_param/99">???</a></td></tr>
    </tbody></table></div>"#;
    let config = ScraperConfig {
        skip_unnamed: true,
        ..ScraperConfig::default()
    };
    let scraper = CharacterScraper::with_source(MemorySource::default(), &config).unwrap();

    let records = scraper.scrape_all_characters(listing).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].nickname, "???");
    assert!(scraper.source().requests().is_empty());
}

#[tokio::test]
async fn test_config_entry_point_without_detail_fetches() {
    let config = ScraperConfig {
        skip_unnamed: true,
        ..ScraperConfig::new("http://127.0.0.1:9/mock")
    };
    let listing = r#"<div class="charaListResult"><table><tbody>
        <tr><td><input class="my-team-checkbox" data-chara-id="7" data-chara-name="" data-nickname="???"></td></tr>
        <tr><td class="nameBox"><a href="/chara_param/7">???</a></td></tr>
    </tbody></table></div>"#;

    let records = crate::scrape_all_characters(listing, &config).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "7");
    assert_eq!(records[0].page_link, "http://127.0.0.1:9/mock/chara_param/7");

    let records = crate::scrape_all_characters("<html></html>", &config)
        .await
        .unwrap();
    assert!(records.is_empty());
}
