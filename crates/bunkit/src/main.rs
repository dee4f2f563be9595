//! bunkit CLI - interactive companion for the bun package manager

use anyhow::Result;
use bunkit_core::Config;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod output;
mod prompt;

use cli::{Cli, Commands};
use commands::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_mode(cli.json);

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bunkit={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cwd = match cli.cwd {
        Some(path) => path.canonicalize()?,
        None => std::env::current_dir()?,
    };
    let config = Config::discover(&cwd)?;
    let ctx = Context { config, cwd };

    let result = match cli.command {
        Commands::Init => commands::init::execute(&ctx).await,
        Commands::Install => commands::install::execute(&ctx).await,
        Commands::Add { package } => commands::add::execute(&ctx, package, false).await,
        Commands::AddDev { package } => commands::add::execute(&ctx, package, true).await,
        Commands::Remove { package } => commands::uninstall::execute(&ctx, package).await,
        Commands::List => commands::list::execute(&ctx).await,
        Commands::Run { script } => commands::run::execute(&ctx, script).await,
        Commands::Test => commands::test::execute(&ctx).await,
        Commands::Clean { yes } => commands::clean::execute(&ctx, yes).await,
        Commands::Manifest => commands::manifest::execute(&ctx).await,
        Commands::Scripts => commands::scripts::execute(&ctx).await,
    };

    match result {
        Ok(0) => Ok(()),
        // Child exit codes pass through untouched
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let cancelled = e
                .downcast_ref::<bunkit_core::Error>()
                .is_some_and(|err| err.is_cancellation());
            if cancelled {
                eprintln!("Cancelled");
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    }
}
