use crate::error::ScrapeError;
use std::future::Future;

/// Something that can hand back the HTML of a page by URL
pub trait PageSource {
    /// Fetch the body of `url`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScrapeError>> + Send;
}
