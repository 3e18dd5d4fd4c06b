use crate::cli::open_store;
use crate::{web, Config};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub async fn run(config_path: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = Config::load(config_path)?;
    let store = open_store(&config)?;

    if config.content.seed_samples {
        store.seed_samples()?;
    }

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server at http://{}", addr);

    web::serve(config, Arc::new(store), &addr).await?;

    Ok(())
}
