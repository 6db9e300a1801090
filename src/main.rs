use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use interlink::config::Config;
use interlink::output::{terminal, truncate_chars};
use interlink::pipeline;
use interlink::pool::{MemoryPoolCache, PoolBuilder, POOL_LIMIT};
use interlink::status;
use interlink::store::models::ContentKind;
use interlink::store::{ContentStore, InMemoryStore, SettingsStore};
use interlink::tokenize::tokenize;

/// Interlink: internal link suggestions for content libraries.
///
/// Scores a pool of published content against a source item by lexical
/// overlap and locates the best anchor phrase for each suggested link,
/// deterministic, local, no AI calls.
#[derive(Parser)]
#[command(name = "interlink", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest internal links for one content item
    Suggest {
        /// The id of the item to analyze
        id: u64,

        /// Emit the suggestion list as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Apply the suggestion at this rank (1-based) and print the
        /// rewritten content
        #[arg(long)]
        apply: Option<usize>,
    },

    /// Run suggestions across every eligible item and summarize
    Audit,

    /// Show the candidate pool
    Pool {
        /// Invalidate the cached pool and rebuild it
        #[arg(long)]
        refresh: bool,
    },

    /// Show library status (item counts, settings summary)
    Status,
}

/// Content kinds eligible as link targets.
const LINKABLE_KINDS: [ContentKind; 2] = [ContentKind::Post, ContentKind::Page];

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("interlink=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Suggest { id, json, apply } => {
            config.require_library()?;
            let store = InMemoryStore::load(&config.library_path)?;
            let settings = store.link_settings()?;
            let cache = MemoryPoolCache::new();
            let builder = PoolBuilder::new(&store, &cache, LINKABLE_KINDS.to_vec());

            let Some(raw) = store.raw_content(id)? else {
                anyhow::bail!("No content item with id {id} in the library");
            };
            let title = store.title(id).unwrap_or_else(|| format!("item {id}"));

            let suggestions = pipeline::run(&builder, &settings, id, &raw)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                let insufficient =
                    suggestions.is_empty() && tokenize(&raw, settings.language).is_empty();
                terminal::display_suggestions(&title, &suggestions, insufficient);
            }

            if let Some(rank) = apply {
                let Some(chosen) = rank.checked_sub(1).and_then(|i| suggestions.get(i)) else {
                    anyhow::bail!("No suggestion at rank {rank}");
                };
                match pipeline::link_phrase(&raw, &chosen.phrase, &chosen.url) {
                    Some(rewritten) => {
                        info!(id, phrase = %chosen.phrase, "Applied link suggestion");
                        println!("{}", "--- rewritten content ---".dimmed());
                        println!("{rewritten}");
                    }
                    None => {
                        println!(
                            "The phrase \"{}\" is no longer linkable in this content.",
                            chosen.phrase
                        );
                    }
                }
            }
        }

        Commands::Audit => {
            config.require_library()?;
            let store = InMemoryStore::load(&config.library_path)?;
            let settings = store.link_settings()?;
            let cache = MemoryPoolCache::new();
            let builder = PoolBuilder::new(&store, &cache, LINKABLE_KINDS.to_vec());

            let items = store.list_eligible(&LINKABLE_KINDS, POOL_LIMIT)?;
            println!("Auditing {} published items...", items.len());

            let pb = ProgressBar::new(items.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Audit [{bar:30}] {pos}/{len} ({eta})")
                    .unwrap(),
            );

            let mut results = Vec::with_capacity(items.len());
            for item in &items {
                let raw = store.raw_content(item.id)?.unwrap_or_default();
                let suggestions = pipeline::run(&builder, &settings, item.id, &raw)?;
                results.push((item, suggestions));
                pb.inc(1);
            }
            pb.finish_and_clear();

            println!("\n{}", "=== Audit summary ===".bold());
            println!();
            for (item, suggestions) in &results {
                let top_phrase = suggestions
                    .first()
                    .map(|s| format!("\"{}\"", s.phrase))
                    .unwrap_or_default();
                println!(
                    "  {:>3}  {:<44} {}",
                    suggestions.len(),
                    truncate_chars(&item.title, 42),
                    top_phrase.dimmed(),
                );
            }

            let unlinked = results.iter().filter(|(_, s)| s.is_empty()).count();
            println!();
            println!(
                "  {} items analyzed, {} with suggestions, {} without",
                results.len(),
                results.len() - unlinked,
                unlinked,
            );
        }

        Commands::Pool { refresh } => {
            config.require_library()?;
            let store = InMemoryStore::load(&config.library_path)?;
            let settings = store.link_settings()?;
            let cache = MemoryPoolCache::new();
            let builder = PoolBuilder::new(&store, &cache, LINKABLE_KINDS.to_vec());

            if refresh {
                builder.invalidate();
            }

            // id 0 never exists, so nothing is excluded here
            let pool = builder.pool(0, settings.language)?;
            println!(
                "Candidate pool: {} candidates ({})",
                pool.len(),
                settings.language.as_str(),
            );
            for candidate in pool.iter().take(15) {
                println!(
                    "  #{:<5} {:<44} {} title / {} tag / {} category tokens",
                    candidate.id,
                    truncate_chars(&candidate.title, 42),
                    candidate.title_tokens.len(),
                    candidate.tag_tokens.len(),
                    candidate.category_tokens.len(),
                );
            }
            if pool.len() > 15 {
                println!("  ... and {} more", pool.len() - 15);
            }
        }

        Commands::Status => {
            config.require_library()?;
            let store = InMemoryStore::load(&config.library_path)?;
            status::show(&store, &config.library_path)?;
        }
    }

    Ok(())
}
