// src/main.rs
// appium-gestures - Appium gesture documentation and code generation over MCP

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use gestures::config::{self, EnvConfig, FileConfig, HttpSettings};
use tracing::{Level, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Global ~/.appium-gestures/.env first, then project .env overrides
    config::load_dotenv();

    let cli = Cli::parse();
    let env_config = EnvConfig::load();
    let file_config = FileConfig::load();

    // Stdio serve keeps stderr quiet; everything else logs at info
    let default_level = match &cli.command {
        None | Some(Commands::Serve { http: false, .. }) => Level::WARN,
        _ => Level::INFO,
    };
    let level = config::resolve_log_level(&env_config, &file_config, default_level);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let validation = env_config.validate();
    for msg in &validation.warnings {
        warn!("{}", msg);
    }
    if !validation.is_valid() {
        anyhow::bail!("Invalid configuration\n{}", validation.report());
    }

    match cli.command {
        None | Some(Commands::Serve { http: false, .. }) => {
            cli::run_mcp_server().await?;
        }
        Some(Commands::Serve {
            http: true,
            port,
            bind,
        }) => {
            let settings = HttpSettings::resolve(bind.as_deref(), port, &env_config, &file_config);
            cli::run_http_server(settings).await?;
        }
        Some(Commands::Tool { name, args }) => {
            if !cli::run_tool(&name, &args)? {
                std::process::exit(1);
            }
        }
        Some(Commands::Doc { name }) => {
            cli::run_doc(&name);
        }
        Some(Commands::List) => {
            cli::run_list();
        }
    }

    Ok(())
}
