use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use zukan_scrape::crawlers::web::to_pretty_json;
use zukan_scrape::{FailurePolicy, ScraperConfig, scrape_all_characters, send_post_request};

mod args;
use args::{Args, Command};

const SEPARATOR: &str = "------------";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ScraperConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ScraperConfig::default(),
    };

    let result = match args.command {
        Command::Fetch { output_dir } => fetch(config, output_dir.as_deref()).await,
        Command::Scrape {
            input,
            concurrency,
            skip_failures,
        } => scrape(config, &input, concurrency, skip_failures).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn fetch(mut config: ScraperConfig, output_dir: Option<&Path>) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = output_dir {
        config.output_dir = dir.to_path_buf();
    }

    let outcome = send_post_request(&config).await?;
    println!("Raw response saved to {}", outcome.raw_path.display());
    match outcome.json_path {
        Some(path) => println!("Parsed JSON saved to {}", path.display()),
        None => println!("Response is not valid JSON. Only raw text was saved."),
    }
    Ok(())
}

async fn scrape(
    mut config: ScraperConfig,
    input: &Path,
    concurrency: Option<usize>,
    skip_failures: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(concurrency) = concurrency {
        config.max_concurrency = concurrency;
    }
    if skip_failures {
        config.failure_policy = FailurePolicy::Skip;
    }

    let html = tokio::fs::read_to_string(input)
        .await
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let start_time = std::time::Instant::now();
    let records = scrape_all_characters(&html, &config).await?;

    for record in &records {
        println!("{}", String::from_utf8(to_pretty_json(record)?)?);
        println!("{}", SEPARATOR);
    }

    ::log::info!(
        "Scraped {} characters in {:.2} seconds",
        records.len(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
