mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use episodes_lib::episodes_api::Client;
use episodes_lib::{
    CacheService, CharacterDetailLoader, EpisodeListViewModel, ListConfig, SqliteStore,
};

use crate::output::OutputFormat;

/// The list state machine as the CLI wires it: live API, SQLite-backed cache.
pub type ViewModel = EpisodeListViewModel<Client, CacheService<SqliteStore>>;

#[derive(Parser)]
#[command(name = "episodes")]
#[command(about = "Browse Rick and Morty episodes with a local cache")]
struct Cli {
    /// Output format: table, json, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// SQLite cache path (defaults to $EPISODES_DB, then episodes.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List episodes, from cache when possible
    List(commands::list::ListArgs),
    /// Show a single episode
    Show(commands::show::ShowArgs),
    /// Show a character, from cache when possible
    Character(commands::character::CharacterArgs),
    /// Search episodes by name or code (bypasses the cache)
    Search(commands::search::SearchArgs),
    /// Refresh the cached first page without a UI
    Sync,
    /// Drop the cached episode list
    ClearCache,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("episodes=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let db_path = cli
        .db
        .or_else(|| std::env::var("EPISODES_DB").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("episodes.db"));

    let client = match std::env::var("EPISODES_API_URL") {
        Ok(url) => Client::with_base_url(&url),
        Err(_) => Client::new(),
    };
    let cache = CacheService::open(&db_path)?;

    match &cli.command {
        Commands::List(args) => {
            commands::list::run(args, &view_model(client, cache), &format).await?
        }
        Commands::Show(args) => {
            commands::show::run(args, &view_model(client, cache), &format).await?
        }
        Commands::Character(args) => {
            let loader = CharacterDetailLoader::new(client, cache);
            commands::character::run(args, &loader, &format).await?
        }
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Sync => commands::sync::run(&view_model(client, cache)).await?,
        Commands::ClearCache => commands::cache::clear(&cache),
    }

    Ok(())
}

fn view_model(client: Client, cache: CacheService<SqliteStore>) -> ViewModel {
    ViewModel::with_config(client, cache, ListConfig::from_env())
}
