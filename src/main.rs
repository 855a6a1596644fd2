//! Interactive front end: take a product URL, print what was extracted.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use cigar_scraper::infrastructure::init_logging;
use cigar_scraper::scrape_cigar_url;

#[derive(Parser)]
#[command(
    name = "cigar-scraper",
    about = "Extract cigar attributes from a retailer or review page",
    version
)]
struct Cli {
    /// Product URL to scrape; prompts on stdin when omitted.
    url: Option<String>,

    /// Print the record as JSON instead of key/value lines.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let url = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    match scrape_cigar_url(url.trim()).await {
        Ok(record) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("\nScraped cigar information:");
                for (key, value) in record.fields() {
                    println!("  {key}: {value}");
                }
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "scrape failed");
            println!("Failed to scrape cigar information");
        }
    }

    Ok(())
}

fn prompt_for_url() -> Result<String> {
    print!("Enter a cigar product URL: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut url = String::new();
    io::stdin()
        .read_line(&mut url)
        .context("failed to read URL from stdin")?;
    Ok(url)
}
