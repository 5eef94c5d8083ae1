//! minhas-financas main entry point

use clap::Parser;
use financas_api::{start_server, AppState};
use financas_config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(name = "minhas-financas")]
#[command(version = "0.1.0")]
#[command(about = "HTTP service for personal finance entries", long_about = None)]
struct Args {
    /// Configuration file path [default: config.yaml, built-in defaults if absent]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

/// Load the configuration. An explicit path must exist; without one the
/// default path is tried and the bundled defaults fill in when it is absent.
///
/// The returned flag is `true` when the bundled defaults were used.
fn load_config(explicit: Option<&Path>) -> Result<(Config, bool), ConfigError> {
    match explicit {
        Some(path) => Ok((Config::load(path)?, false)),
        None => load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
    }
}

fn load_or_default(path: &Path) -> Result<(Config, bool), ConfigError> {
    match Config::load(path) {
        Ok(config) => Ok((config, false)),
        Err(ConfigError::FileNotFound { .. }) => {
            Ok((Config::from_yaml(Config::generate_default())?, true))
        }
        Err(err) => Err(err),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, built_in) = load_config(args.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    if built_in {
        log::warn!(
            "Config file {} not found, using built-in defaults",
            path.display()
        );
    } else {
        log::info!("Config loaded from {}", path.display());
    }
    log::info!("{} user(s) available", config.users.len());

    start_server(AppState::in_memory(config)).await
}
