use std::path::Path;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use disaster_news::classifier::{DisasterClassifier, Taxonomy};
use disaster_news::cli::{Cli, Commands};
use disaster_news::config::Config;
use disaster_news::extract::HtmlArticleExtractor;
use disaster_news::logging;
use disaster_news::services::{ArticleService, EntrySelector, FeedAggregator, Pipeline};
use disaster_news::sources::RssAtomSource;

/// `{"status": "success", "data": [...]}` wrapper around command results.
#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    status: &'static str,
    data: &'a [T],
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, CLI flags win over the environment
    let mut config = Config::from_env().context("loading configuration")?;
    if let Some(path) = &cli.feeds_file {
        config = config.with_feeds_file(Path::new(path))?;
    }
    if let Some(code) = &cli.language {
        config = config.with_language(code)?;
    }

    logging::init(&config.log_level);

    match cli.command {
        Commands::Run { pretty } => cmd_run(&config, pretty),
        Commands::Select { pretty } => cmd_select(&config, pretty),
        Commands::Classify { text } => cmd_classify(&text),
        Commands::Extract { url, pretty } => cmd_extract(&config, &url, pretty),
        Commands::Sources => cmd_sources(&config),
    }
}

fn build_pipeline(config: &Config) -> anyhow::Result<Pipeline<RssAtomSource, HtmlArticleExtractor>> {
    let source = RssAtomSource::new(config.timeout)?;
    let extractor = HtmlArticleExtractor::new(config.language, config.timeout)?;

    Ok(Pipeline::new(
        FeedAggregator::new(source),
        EntrySelector::new(DisasterClassifier::new(Taxonomy::hindi())),
        ArticleService::new(extractor),
    ))
}

fn cmd_run(config: &Config, pretty: bool) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config)?;
    let results = pipeline.run(&config.feeds);

    print_json(
        &Envelope {
            status: "success",
            data: results.as_slice(),
        },
        pretty,
    )
}

fn cmd_select(config: &Config, pretty: bool) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config)?;
    let selected = pipeline.select(&config.feeds);

    print_json(
        &Envelope {
            status: "success",
            data: selected.as_slice(),
        },
        pretty,
    )
}

fn cmd_classify(text: &str) -> anyhow::Result<()> {
    let classifier = DisasterClassifier::new(Taxonomy::hindi());

    match classifier.classify(text) {
        Some(category) => println!("{}", category),
        None => println!("none"),
    }

    Ok(())
}

fn cmd_extract(config: &Config, url: &str, pretty: bool) -> anyhow::Result<()> {
    let extractor = HtmlArticleExtractor::new(config.language, config.timeout)?;
    let result = ArticleService::new(extractor).extract(url);

    print_json(&result, pretty)
}

fn cmd_sources(config: &Config) -> anyhow::Result<()> {
    if config.feeds.is_empty() {
        println!("No feeds configured.");
        return Ok(());
    }

    println!("Configured feeds ({}):\n", config.feeds.len());
    for feed in &config.feeds {
        println!("  {}", feed);
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);

    Ok(())
}
