use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use favprimes::config::Config;
use favprimes::logging::init_tracing;
use favprimes::lookup::{PrimeLookup, WolframAlphaClient};
use favprimes::prime::{is_prime, ordinal};
use favprimes::state::{AppState, Store};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "favprimes",
    version,
    about = "Counter with prime checks, favorite primes and an activity feed"
)]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the lookup endpoint
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Override the lookup app id
    #[arg(long, global = true, value_name = "ID")]
    app_id: Option<String>,

    /// Write logs to this file (also: FAVPRIMES_LOG)
    #[arg(long, global = true, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Initial counter value for the TUI
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    count: i64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether N is prime
    IsPrime {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Ask the lookup service for the Nth prime
    NthPrime {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Print why the lookup produced no answer
        #[arg(long)]
        verbose: bool,
    },
    /// Print the config file path in use
    ConfigPath,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.log.as_deref());
    let command = cli.command.take();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    match command {
        Some(Command::IsPrime { n }) => {
            if is_prime(n) {
                println!("{} is prime", n);
            } else {
                println!("{} is not prime", n);
            }
            Ok(())
        }
        Some(Command::ConfigPath) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(Command::NthPrime { n, verbose }) => {
            let config = load_config(&cli, &config_path)?;
            let client = WolframAlphaClient::new(&config.lookup)
                .context("Failed to create lookup client")?;
            let runtime = build_runtime()?;
            match runtime.block_on(client.nth_prime(n)) {
                Ok(Some(prime)) => println!("The {} prime is {}", ordinal(n), prime),
                Ok(None) => println!("No answer for the {} prime", ordinal(n)),
                Err(err) => {
                    tracing::warn!(n, error = %err, "Nth prime lookup failed");
                    println!("No answer for the {} prime", ordinal(n));
                    if verbose {
                        eprintln!("{}", err);
                    }
                }
            }
            Ok(())
        }
        None => {
            let config = load_config(&cli, &config_path)?;
            let client = WolframAlphaClient::new(&config.lookup)
                .context("Failed to create lookup client")?;
            let runtime = build_runtime()?;
            let store = Store::new(AppState::with_count(cli.count));
            let lookup: Arc<dyn PrimeLookup> = Arc::new(client);
            favprimes::ui::run(
                store,
                lookup,
                runtime.handle().clone(),
                Duration::from_millis(config.ui.tick_rate_ms),
            )
            .context("Terminal UI failed")?;
            // Lookups still in flight are abandoned.
            runtime.shutdown_background();
            Ok(())
        }
    }
}

fn load_config(cli: &Cli, path: &std::path::Path) -> Result<Config> {
    let mut config = Config::load_from(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if let Some(endpoint) = &cli.endpoint {
        config.lookup.endpoint = endpoint.clone();
    }
    if let Some(app_id) = &cli.app_id {
        config.lookup.app_id = app_id.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_count() {
        let cli = Cli::try_parse_from(["favprimes", "--count", "-3"]).unwrap();
        assert_eq!(cli.count, -3);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_nth_prime_subcommand() {
        let cli = Cli::try_parse_from(["favprimes", "nth-prime", "5", "--verbose"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::NthPrime { n: 5, verbose: true })
        ));
    }
}
