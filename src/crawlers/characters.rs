use crate::config::{FailurePolicy, ScraperConfig};
use crate::crawlers::{HttpSource, PageSource};
use crate::error::ScrapeError;
use crate::parsers::{ListParser, parse_character_page};
use crate::results::{CharacterDetail, CharacterRecord, CharacterSummary};
use futures::stream::{self, StreamExt};
use std::pin::pin;

/// Drives the listing parser and fetches every character's detail page
pub struct CharacterScraper<S> {
    source: S,
    list_parser: ListParser,
    max_concurrency: usize,
    failure_policy: FailurePolicy,
    skip_unnamed: bool,
}

impl CharacterScraper<HttpSource> {
    /// Scraper fetching over HTTP with the given configuration
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Self::with_source(HttpSource::new(), config)
    }
}

impl<S: PageSource> CharacterScraper<S> {
    pub fn with_source(source: S, config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            source,
            list_parser: ListParser::new(&config.base_url, &config.link_fragment)?,
            max_concurrency: config.max_concurrency.max(1),
            failure_policy: config.failure_policy,
            skip_unnamed: config.skip_unnamed,
        })
    }

    /// Set the maximum number of detail pages fetched at once
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scrapes every character on the listing page.
    ///
    /// Records come back in listing order whatever the concurrency. With
    /// [`FailurePolicy::Abort`] the first failed fetch ends the run and is
    /// returned; with [`FailurePolicy::Skip`] that character is dropped.
    pub async fn scrape_all_characters(
        &self,
        main_html: &str,
    ) -> Result<Vec<CharacterRecord>, ScrapeError> {
        let summaries = self.list_parser.parse(main_html);
        let total = summaries.len();
        ::log::info!("Found {} characters on the listing page", total);

        let mut details = pin!(
            stream::iter(summaries)
                .map(move |summary| async move {
                    let detail = self.fetch_detail(&summary).await;
                    (summary, detail)
                })
                .buffered(self.max_concurrency)
        );

        let mut records = Vec::with_capacity(total);
        while let Some((summary, detail)) = details.next().await {
            match detail {
                Ok(detail) => records.push(CharacterRecord::merge(summary, detail)),
                Err(e) => match self.failure_policy {
                    FailurePolicy::Abort => {
                        ::log::error!("Failed to fetch {}: {}", summary.page_link, e);
                        return Err(e);
                    }
                    FailurePolicy::Skip => {
                        ::log::warn!("Skipping {} ({}): {}", summary.name, summary.page_link, e);
                    }
                },
            }
        }

        ::log::info!("Scraped {} of {} characters", records.len(), total);
        Ok(records)
    }

    async fn fetch_detail(
        &self,
        summary: &CharacterSummary,
    ) -> Result<Option<CharacterDetail>, ScrapeError> {
        // Unreleased characters are listed without a name
        if self.skip_unnamed && summary.name.is_empty() {
            ::log::debug!("Not fetching unnamed character {}", summary.id);
            return Ok(None);
        }

        ::log::info!("Fetching: {} → {}", summary.name, summary.page_link);
        let html = self.source.fetch(&summary.page_link).await?;
        Ok(parse_character_page(&html))
    }
}
