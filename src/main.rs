//! routerlab - An interactive branch-office router CLI simulator.

use routerlab::cli::Cli;
use routerlab::config::Config;
use routerlab::error::Result;
use routerlab::{batch, logging, server, tui};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // The interactive console owns the terminal, so it logs to a file.
    let interactive = !cli.headless && cli.batch.is_none() && !cli.is_server();
    if interactive {
        logging::init_file_logging();
    } else {
        logging::init_stderr_logging();
    }

    match run(&cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            eprintln!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<i32> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;
    cli.apply_overrides(&mut config);

    if cli.headless {
        return tui::headless::run_headless(cli, &config).await;
    }

    if let Some(ref path) = cli.batch {
        batch::run(path, &config)?;
    } else if cli.is_server() {
        server::run(&config).await?;
    } else {
        tui::run(&config)?;
    }

    Ok(0)
}
