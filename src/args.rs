use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "adsift",
    about = "Classify scraped domains into advertisers with active ads, without active ads, and non-advertisers",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the domain list file (one domain per line)
    #[arg(short, long)]
    pub domains: PathBuf,

    /// Path to the scraper log file
    #[arg(short, long)]
    pub log: PathBuf,

    /// Write classified results to a CSV file
    #[arg(short, long)]
    pub csv: Option<PathBuf>,

    /// Redact domain names for privacy
    #[arg(long)]
    pub redact: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
