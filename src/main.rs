use blogcraft::cli::{Cli, Commands};
use blogcraft::services::slug::generate_slug;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogcraft=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, name }) => {
            blogcraft::cli::init::run(path, name).await?;
        }
        Some(Commands::Serve { host, port }) => {
            blogcraft::cli::serve::run(&cli.config, host, port).await?;
        }
        Some(Commands::Migrate) => {
            blogcraft::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Export { output }) => {
            blogcraft::cli::export::run(&cli.config, &output).await?;
        }
        Some(Commands::Import { file, overwrite }) => {
            blogcraft::cli::import::run(&cli.config, &file, overwrite).await?;
        }
        Some(Commands::Slug { title }) => {
            println!("{}", generate_slug(&title));
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
