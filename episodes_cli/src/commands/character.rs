//! The `character` subcommand: character details, cached after first load.

use anyhow::{bail, Result};
use clap::Args;
use episodes_lib::episodes_api::Client;
use episodes_lib::{validation, CacheService, CharacterDetailLoader, CharacterState, SqliteStore};

use crate::output::{print_character_detail, print_json, OutputFormat};

/// Arguments for the `character` subcommand.
#[derive(Args)]
pub struct CharacterArgs {
    /// Character ID, as listed by `show`
    pub id: i64,

    /// Ignore any cached copy and fetch from the network
    #[arg(long)]
    pub refresh: bool,
}

pub async fn run(
    args: &CharacterArgs,
    loader: &CharacterDetailLoader<Client, CacheService<SqliteStore>>,
    format: &OutputFormat,
) -> Result<()> {
    let id = validation::validate_character_id(args.id)?;

    let cached = if args.refresh {
        None
    } else {
        loader.cached_character(id)
    };
    let character = match cached {
        Some(character) => character,
        None => {
            loader.load_character(id).await;
            match loader.state() {
                CharacterState::Success(character) => character,
                CharacterState::Failure(message) => bail!("{}", message),
                other => bail!("Character load ended in unexpected state {:?}", other),
            }
        }
    };

    match format {
        OutputFormat::Table | OutputFormat::Markdown => print_character_detail(&character),
        OutputFormat::Json => print_json(&character),
    }

    Ok(())
}
