//! The `sync` subcommand: a headless background refresh of page 1.

use anyhow::{bail, Result};

use crate::ViewModel;

pub async fn run(vm: &ViewModel) -> Result<()> {
    if !vm.perform_background_refresh().await {
        bail!("Background refresh failed");
    }
    let cursor = vm.cursor();
    eprintln!(
        "Cached {} episodes ({} pages available)",
        vm.episodes().len(),
        cursor.total_pages
    );
    Ok(())
}
