use crate::cli::open_store;
use crate::services::PostStore;
use crate::Config;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub async fn run(config_path: &Path, output: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let store = open_store(&config)?;

    let posts = store.load_all()?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, serde_json::to_string_pretty(&posts)?)?;

    tracing::info!("Exported {} posts to {}", posts.len(), output.display());
    Ok(())
}
