//! The `show` subcommand.

use anyhow::Result;
use clap::Args;
use episodes_lib::{validation, EpisodeCaching, EpisodeFetching};

use crate::output::{print_episode_detail, print_json, OutputFormat};
use crate::ViewModel;

/// Arguments for the `show` subcommand.
#[derive(Args)]
pub struct ShowArgs {
    /// Episode ID
    pub id: i64,
}

pub async fn run(args: &ShowArgs, vm: &ViewModel, format: &OutputFormat) -> Result<()> {
    let id = validation::validate_episode_id(args.id)?;

    let cached = vm
        .cache()
        .load_episodes()
        .and_then(|episodes| episodes.into_iter().find(|e| e.id == id));
    let episode = match cached {
        Some(episode) => episode,
        None => vm.fetcher().fetch_episode(id).await?,
    };

    match format {
        OutputFormat::Table | OutputFormat::Markdown => {
            print_episode_detail(&episode);
            eprintln!("Run `episodes character <id>` for any of the character ids above");
        }
        OutputFormat::Json => print_json(&episode),
    }

    Ok(())
}
