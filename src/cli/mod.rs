pub mod export;
pub mod import;
pub mod init;
pub mod migrate;
pub mod serve;

use crate::services::SqlitePostStore;
use crate::{Config, Database};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogcraft")]
#[command(version)]
#[command(about = "A small blogging backend with slug-based URLs", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "blogcraft.toml", env = "BLOGCRAFT_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new site directory with a default config
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Run the JSON API server
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Apply database migrations
    Migrate,
    /// Write every post to a JSON file
    Export {
        #[arg(short, long, default_value = "posts.json")]
        output: PathBuf,
    },
    /// Save posts from a JSON array of drafts
    Import {
        file: PathBuf,
        /// Update posts whose slug already exists instead of adding a numbered copy
        #[arg(long)]
        overwrite: bool,
    },
    /// Print the slug generated for a title
    Slug { title: String },
}

/// Opens the configured database, migrated, behind the SQLite post store.
pub fn open_store(config: &Config) -> Result<SqlitePostStore> {
    let db = Database::open_with_pool_size(&config.database.path, config.database.pool_size)?;
    db.migrate()?;
    Ok(SqlitePostStore::new(db, config.slug.max_attempts))
}
