//! Command-line front end for cloze-core.
//!
//! ```text
//! cloze-terms [PATH]
//! ```
//!
//! Reads PATH (stdin when absent or `-`), extracts terms with the splitter
//! named by `CLOZE_SPLITTER`, and prints the result as JSON.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use cloze_core::{Extraction, Extractor, ExtractorConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ExtractorConfig::from_env()?;
    tracing::info!("Using {} splitter", config.splitter.as_str());

    let path = std::env::args().nth(1);
    let content = read_input(path.as_deref())?;

    let extraction = extract(&config, &content)?;
    tracing::info!("Extracted {} terms", extraction.terms.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &extraction)?;
    writeln!(out)?;

    Ok(())
}

/// Run extraction over `content` with the configured splitter.
pub fn extract(config: &ExtractorConfig, content: &str) -> anyhow::Result<Extraction> {
    let extractor = Extractor::from_config(config).context("failed to build splitter")?;
    Ok(extractor.extract(content))
}

/// Read the document at `path`, or stdin for `None` and `-`.
pub fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
        Some(path) => read_file(Path::new(path)),
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
