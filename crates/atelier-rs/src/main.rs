//! Atelier service binary.

use anyhow::Result;
use atelier_rs_config::AtelierConfig;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "atelier", about = "Memory-augmented outfit recommendation service")]
struct Args {
    /// Bind address override (falls back to ATELIER_BIND_ADDR).
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    atelier_rs::init_logging();
    let args = Args::parse();

    let mut config = AtelierConfig::from_env()?;
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    info!(
        "starting atelier (completions_enabled={}, memory_base={})",
        config.completions_enabled(),
        config.memory.base_url
    );
    atelier_rs_server::serve(config).await
}
