use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zukan-scrape")]
#[command(about = "Fetches and scrapes the Inazuma Eleven character encyclopedia")]
#[command(version)]
pub struct Args {
    /// JSON configuration file (defaults target the live site)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send the listing request and save response.txt / response.json
    Fetch {
        /// Directory to write the response files to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Scrape every character listed in a saved listing page
    Scrape {
        /// Saved listing page
        #[arg(short, long, default_value = "response.txt")]
        input: PathBuf,

        /// Number of character pages fetched at once
        #[arg(long)]
        concurrency: Option<usize>,

        /// Drop characters whose page fails to load instead of aborting
        #[arg(long)]
        skip_failures: bool,
    },
}
