use crate::config::GatewayConfig;
use sg_core::logger::init_tracing;
use tracing::error;

mod application;
mod config;
mod error;
mod interfaces;
mod providers;
mod server;
mod utils;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = GatewayConfig::from_env()?;
    server::http_server::http_server_backend(config)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Application error: {e}");
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
