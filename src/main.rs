mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use shopcart::config::Config;
use shopcart::logging::init_tracing;
use shopcart::viewmodel::CartViewModel;

#[derive(Parser, Debug)]
#[command(name = "shopcart", version, about = "Drive a shopping-cart view-model from the terminal")]
struct Cli {
    /// Config file (default: <config dir>/shopcart/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the simulated data-source latency.
    #[arg(long, global = true, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Make every data-source call fail with this message.
    #[arg(long, global = true, value_name = "MESSAGE")]
    fail: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Load the cart once and print each snapshot as JSON.
    Demo,
    /// Read cart commands from stdin and print each snapshot as JSON.
    Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let source = Arc::new(config.source.build());
    let view_model = CartViewModel::with_config(source, &config);

    match cli.command {
        Command::Demo => commands::run_demo(view_model, &mut std::io::stdout()).await,
        Command::Run => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let out = Arc::new(parking_lot::Mutex::new(std::io::stdout()));
            commands::run_repl(view_model, input, out).await
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    if let Some(latency_ms) = cli.latency_ms {
        config.source.latency_ms = latency_ms;
    }
    if let Some(message) = &cli.fail {
        config.source.fail_with = Some(message.clone());
    }
    Ok(config)
}
