pub mod characters;
pub mod crawler;
pub mod web;

#[cfg(test)]
mod tests;

pub use characters::CharacterScraper;
pub use crawler::PageSource;
pub use web::{FetchOutcome, HttpSource, send_post_request};
