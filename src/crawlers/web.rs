use crate::config::ScraperConfig;
use crate::crawlers::PageSource;
use crate::error::ScrapeError;
use reqwest::Client;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::PathBuf;

/// Files written by a successful listing fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Raw response body
    pub raw_path: PathBuf,
    /// Pretty-printed JSON, only when the body was JSON
    pub json_path: Option<PathBuf>,
}

/// Page source backed by a shared reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;

        // Error pages still get parsed; they just lack the detail container
        let status = response.status();
        if !status.is_success() {
            ::log::warn!("GET {} returned {}", url, status);
        }

        Ok(response.text().await?)
    }
}

/// Sends the listing form and stores the response.
///
/// A non-success status is an error and nothing is written. A body that is
/// not JSON only skips the JSON artifact.
pub async fn send_post_request(config: &ScraperConfig) -> Result<FetchOutcome, ScrapeError> {
    send_post_request_with_client(&Client::new(), config).await
}

/// Same as [`send_post_request`] with a caller-provided client
pub async fn send_post_request_with_client(
    client: &Client,
    config: &ScraperConfig,
) -> Result<FetchOutcome, ScrapeError> {
    let url = config.form_url();
    let params = config.filter.form_params();
    ::log::info!("Sending listing request to {}", url);
    ::log::debug!("Form payload: {:?}", params);

    let response = client.post(&url).form(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url,
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    write_artifacts(config, &body).await
}

/// Writes the raw body and, if it parses, the pretty JSON form
pub async fn write_artifacts(
    config: &ScraperConfig,
    body: &str,
) -> Result<FetchOutcome, ScrapeError> {
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|e| ScrapeError::io(&config.output_dir, e))?;

    let raw_path = config.raw_path();
    tokio::fs::write(&raw_path, body)
        .await
        .map_err(|e| ScrapeError::io(&raw_path, e))?;
    ::log::info!("Raw response saved to {}", raw_path.display());

    let json_path = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let path = config.json_path();
            tokio::fs::write(&path, to_pretty_json(&value)?)
                .await
                .map_err(|e| ScrapeError::io(&path, e))?;
            ::log::info!("Parsed JSON saved to {}", path.display());
            Some(path)
        }
        Err(e) => {
            ::log::info!("Response is not valid JSON ({}), only raw text was saved", e);
            None
        }
    };

    Ok(FetchOutcome {
        raw_path,
        json_path,
    })
}

/// Pretty JSON with a four-space indent
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
