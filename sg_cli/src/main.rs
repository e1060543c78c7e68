use crate::cli::{Cli, Commands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
mod cli;
mod client;
mod commands;
mod error;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cli_client = CliClient::new(&cli.url)?;

    match cli.command {
        Commands::Ping => commands::ping::handle(&cli_client).await?,
        Commands::Text {
            topic,
            tone,
            platform,
            length,
            keywords,
        } => {
            let request = sg_core::server::payload::generate_text_request::GenerateTextRequest {
                topic,
                tone,
                platform,
                length,
                keywords,
            };
            commands::text::handle(&cli_client, &request).await?
        }
        Commands::Image { prompt, out } => {
            commands::image::handle(&cli_client, prompt, &out).await?
        }
        Commands::Video { out } => commands::video::handle(&cli_client, &out).await?,
    }

    Ok(())
}
