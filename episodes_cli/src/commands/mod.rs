//! CLI subcommand implementations.

pub mod cache;
pub mod character;
pub mod list;
pub mod search;
pub mod show;
pub mod sync;
