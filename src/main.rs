//! Interactive prompt around the search pipeline.
//!
//! Reads one free-text query per line, runs a search for it and prints the
//! top referenced Javascript resources, one per line. EOF ends the loop.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crawler::{Crawler, CrawlerSettings};

const PROMPT: &str = "search: ";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let crawler = Crawler::new(CrawlerSettings::default())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        match crawler.search(line.trim()).await {
            Ok(report) => {
                for resource in report {
                    println!("{resource}");
                }
            }
            // A failed query must not end the session; the next line is
            // still accepted.
            Err(err) => tracing::error!(error = %err, "search failed"),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    Ok(())
}
