use crate::Config;
use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "BlogCraft".to_string());

    let config_path = path.join("blogcraft.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("data"))?;

    let config = Config::new_site(&site_name);
    std::fs::write(&config_path, toml::to_string_pretty(&config)?)?;

    tracing::info!("Created new BlogCraft site at {:?}", path);
    tracing::info!("Run 'blogcraft serve' to start the server");

    Ok(())
}
