// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{FailurePolicy, ScraperConfig};
pub use crawlers::{CharacterScraper, FetchOutcome, HttpSource, PageSource, send_post_request};
pub use error::ScrapeError;
pub use filter::{Element, Game, ListFilter, PerPage, Position};
pub use parsers::{ListParser, parse_character_list, parse_character_page};
pub use results::{CharacterDetail, CharacterRecord, CharacterSummary, Stats};

/// Root of the character encyclopedia site
pub const DEFAULT_BASE_URL: &str = "https://zukan.inazuma.jp";

/// Scrape every character listed in `main_html` over HTTP
pub async fn scrape_all_characters(
    main_html: &str,
    config: &ScraperConfig,
) -> Result<Vec<CharacterRecord>, ScrapeError> {
    CharacterScraper::from_config(config)?
        .scrape_all_characters(main_html)
        .await
}
