//! The `search` subcommand: server-side filters over the episode endpoint.

use anyhow::Result;
use clap::Args;
use episodes_lib::episodes_api::Client;
use episodes_lib::search_episodes;

use crate::output::{print_episodes_markdown, print_episodes_table, print_json, OutputFormat};

/// Arguments for the `search` subcommand.
#[derive(Args)]
pub struct SearchArgs {
    /// Match episodes whose name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Episode code or season prefix, e.g. S01E04 or S02
    #[arg(long)]
    pub episode: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = search_episodes(
        client,
        args.name.as_deref(),
        args.episode.as_deref(),
        args.page,
    )
    .await?;

    eprintln!(
        "Page {} of {} ({} total matches)",
        args.page, resp.info.pages, resp.info.count
    );

    match format {
        OutputFormat::Table => print_episodes_table(&resp.results),
        OutputFormat::Json => print_json(&resp.results),
        OutputFormat::Markdown => print_episodes_markdown(&resp.results),
    }

    Ok(())
}
