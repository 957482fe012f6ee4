//! The `list` subcommand: first page plus optional pagination.

use anyhow::{bail, Result};
use clap::Args;
use episodes_lib::validation;

use crate::output::{print_episodes_markdown, print_episodes_table, print_json, OutputFormat};
use crate::ViewModel;

/// Arguments for the `list` subcommand.
#[derive(Args)]
pub struct ListArgs {
    /// Skip the cache and fetch page 1 from the network
    #[arg(long)]
    pub refresh: bool,

    /// Number of pages to load (1-50). Only network page counts allow
    /// paging, so pair this with --refresh when the cache is warm.
    #[arg(long, default_value = "1")]
    pub pages: u32,
}

pub async fn run(args: &ListArgs, vm: &ViewModel, format: &OutputFormat) -> Result<()> {
    let pages = validation::validate_pages(args.pages)?;

    vm.fetch(args.refresh).await;
    if let Some(message) = vm.state().failure_message() {
        bail!("{}", message);
    }

    for _ in 1..pages {
        let Some(tail) = vm.episodes().last().cloned() else {
            break;
        };
        let before = vm.cursor();
        vm.load_more_if_needed(&tail).await;
        if vm.cursor() == before {
            break;
        }
    }

    let snapshot = vm.snapshot();
    eprintln!(
        "{} episodes (page {} of {})",
        snapshot.episodes.len(),
        snapshot.cursor.current_page,
        snapshot.cursor.total_pages
    );

    match format {
        OutputFormat::Table => print_episodes_table(&snapshot.episodes),
        OutputFormat::Json => print_json(&snapshot.episodes),
        OutputFormat::Markdown => print_episodes_markdown(&snapshot.episodes),
    }

    Ok(())
}
