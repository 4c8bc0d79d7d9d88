use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m3u_catalog::{
    catalog::{filter_by_query, row_preview, CatalogLoader, LoadState},
    config::Config,
    models::{Category, Profile},
    sources::RetrieverFactory,
    utils::UrlUtils,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "m3u-catalog")]
#[command(version)]
#[command(about = "Build a profile-scoped catalog from an Extended-M3U playlist")]
#[command(long_about = None)]
struct Cli {
    /// Playlist URL or file path
    source: String,

    /// Catalog profile: live, movies, series or admin
    #[arg(short, long)]
    profile: Option<Profile>,

    /// Only show entries whose name contains this text
    #[arg(short, long)]
    query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Configuration file path (defaults to $CONFIG_FILE, then config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Candidates processed per parsing chunk (0 for a single pass)
    #[arg(long, value_name = "N")]
    chunk_size: Option<usize>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = format!("m3u_catalog={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting M3U Catalog v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match cli.config.as_deref() {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            Config::load_from_file(path)?
        }
        None => Config::load()?,
    };

    if let Some(chunk_size) = cli.chunk_size {
        config.catalog.chunk_size = chunk_size;
    }
    let profile = cli.profile.unwrap_or(config.catalog.default_profile);

    info!(
        "Loading {} for profile '{}'",
        UrlUtils::obfuscate_credentials(&cli.source),
        profile
    );

    let retriever = RetrieverFactory::for_locator(&cli.source, &config.retrieval)?;
    let loader = CatalogLoader::new(retriever, config.catalog.chunk_size);

    let categories = match loader.load(&cli.source, profile).await {
        LoadState::Ready { categories, .. } => categories,
        LoadState::Error { message, detail, .. } => {
            eprintln!("{message}: {detail}");
            bail!("{message}");
        }
        other => bail!("Catalog load ended in unexpected state: {other:?}"),
    };

    let categories = match cli.query.as_deref() {
        Some(query) => filter_by_query(&categories, query),
        None => (*categories).clone(),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
        OutputFormat::Text => print_text(profile, &categories, config.catalog.preview_limit),
    }

    Ok(())
}

fn print_text(profile: Profile, categories: &[Category], preview_limit: usize) {
    if categories.is_empty() {
        println!("No entries for profile '{profile}'");
        return;
    }

    for category in categories {
        println!("{} ({})", category.label, category.len());
        for entry in row_preview(category, preview_limit) {
            println!("  [{}] {}  {}", entry.kind, entry.name, entry.locator);
        }
        if category.len() > preview_limit {
            println!("  ... {} more", category.len() - preview_limit);
        }
    }
}
