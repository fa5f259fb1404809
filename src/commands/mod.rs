//! CLI subcommand implementations

pub mod clean;
pub mod export;
pub mod list;
pub mod query;
