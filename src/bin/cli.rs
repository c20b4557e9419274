//! Pantip scraper CLI
//!
//! Fetches topics, comments and search results and prints them as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pantip_scraper::{
    PantipClient,
    error::{AppError, Result},
    models::{Config, SearchQuery},
    utils::log::level_filter,
};

/// pantip - Pantip forum scraper
#[derive(Parser, Debug)]
#[command(name = "pantip", version, about = "Pantip forum scraper")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "pantip.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the opening post of a topic
    Topic {
        topic_id: String,

        /// Run the cleaning passes over the text
        #[arg(long)]
        clean: bool,
    },

    /// Print comments of a topic
    Comments {
        topic_id: String,

        /// Page to fetch
        #[arg(long, default_value_t = 1, conflicts_with = "all")]
        page: u32,

        /// Fetch every page
        #[arg(long)]
        all: bool,
    },

    /// Search topics
    Search {
        keyword: String,

        /// Room to search within (repeatable)
        #[arg(long = "room")]
        rooms: Vec<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Sort by time instead of relevance
        #[arg(long)]
        sort_by_time: bool,
    },

    /// Print the number of topics matching a keyword
    Count {
        keyword: String,

        #[arg(long = "room")]
        rooms: Vec<String>,
    },

    /// Print topic ids on a page of search results
    Ids {
        keyword: String,

        #[arg(long = "room")]
        rooms: Vec<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

/// Initialize logging from the configured level or the verbosity flag.
fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        level_filter(&config.logging.level)
    };
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .format_timestamp_secs()
        .init();
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config);
    init_logging(&config, cli.verbose);

    let client = PantipClient::new(&config)?;

    match cli.command {
        Command::Topic { topic_id, clean } => {
            let text = if clean {
                client.get_clean_topic_detail(&topic_id, true, None).await
            } else {
                client.get_topic_detail(&topic_id).await
            };
            if text.is_empty() {
                return Err(AppError::scrape(
                    format!("topic {topic_id}"),
                    "no content retrieved",
                ));
            }
            println!("{text}");
        }

        Command::Comments {
            topic_id,
            page,
            all,
        } => {
            if all {
                let comments = client.get_all_comments(&topic_id).await;
                log::info!("Fetched {} comments for topic {}", comments.len(), topic_id);
                print_json(&comments)?;
            } else {
                let result = client.get_topic_comments(&topic_id, page).await;
                if let Some(error) = result.error {
                    return Err(AppError::scrape(format!("topic {topic_id}"), error));
                }
                print_json(&result)?;
            }
        }

        Command::Search {
            keyword,
            rooms,
            page,
            sort_by_time,
        } => {
            let query = SearchQuery::new(keyword)
                .rooms(rooms)
                .page(page)
                .sort_by_time(sort_by_time);
            let result = client.search(&query).await;
            if let Some(error) = result.error {
                return Err(AppError::scrape(format!("search '{}'", query.keyword), error));
            }
            print_json(&result)?;
        }

        Command::Count { keyword, rooms } => {
            let total = client.count_search_results(&keyword, &rooms).await;
            println!("{total}");
        }

        Command::Ids {
            keyword,
            rooms,
            page,
        } => {
            let query = SearchQuery::new(keyword).rooms(rooms).page(page);
            print_json(&client.get_search_topic_ids(&query).await)?;
        }
    }

    Ok(())
}
