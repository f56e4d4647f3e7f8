use crate::error::ScrapeError;
use crate::filter::ListFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// What the orchestrator does when a character page cannot be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failure and return the error
    #[default]
    Abort,
    /// Log the failure, drop that character and keep going
    Skip,
}

/// Configuration for the listing fetch and the character scrape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Site root, used for the form endpoint and to resolve detail links
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the listing form endpoint
    #[serde(default = "default_form_path")]
    pub form_path: String,

    /// Filter sent with the listing request
    #[serde(default)]
    pub filter: ListFilter,

    /// Fragment a detail link's href must contain
    #[serde(default = "default_link_fragment")]
    pub link_fragment: String,

    /// Directory the fetch artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Raw response artifact name
    #[serde(default = "default_raw_file")]
    pub raw_file: String,

    /// Pretty-printed JSON artifact name
    #[serde(default = "default_json_file")]
    pub json_file: String,

    /// Maximum number of detail pages fetched at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Don't fetch detail pages for characters listed without a name
    #[serde(default)]
    pub skip_unnamed: bool,
}

fn default_base_url() -> String {
    crate::DEFAULT_BASE_URL.to_string()
}

fn default_form_path() -> String {
    "/en/chara_list/process_form".to_string()
}

fn default_link_fragment() -> String {
    "chara_param".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_raw_file() -> String {
    "response.txt".to_string()
}

fn default_json_file() -> String {
    "response.json".to_string()
}

fn default_max_concurrency() -> usize {
    1
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            form_path: default_form_path(),
            filter: ListFilter::default(),
            link_fragment: default_link_fragment(),
            output_dir: default_output_dir(),
            raw_file: default_raw_file(),
            json_file: default_json_file(),
            max_concurrency: default_max_concurrency(),
            failure_policy: FailurePolicy::default(),
            skip_unnamed: false,
        }
    }
}

impl ScraperConfig {
    /// Create a configuration pointing at another site root (e.g. a mock server)
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| ScrapeError::io(path, e))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ScrapeError::io(path, e))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Full URL of the listing form endpoint
    pub fn form_url(&self) -> String {
        format!("{}{}", self.base_url, self.form_path)
    }

    pub fn raw_path(&self) -> PathBuf {
        self.output_dir.join(&self.raw_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }
}
