//! CLI entry point.
//!
//! Command dispatch only - all infrastructure wiring happens in the axum
//! adapter's bootstrap (the composition root).

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use micdrop_core::Settings;

#[derive(Parser)]
#[command(name = "micdrop", version, about = "Turn-based rap battle demo server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (the default).
    Serve {
        /// Override the configured HTTP port.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run health checks against the configured collaborators.
    Check,
    /// Initialize the win/loss store and seed the default roster.
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::from_env();

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => {
            if let Some(port) = port {
                settings.http_port = Some(port);
            }
            micdrop_axum::start_server(settings).await
        }
        Commands::Check => {
            let ctx = micdrop_axum::bootstrap(settings).await?;
            let mut failures = 0;
            for result in ctx.diagnostics.run_all().await {
                let status = if result.success { "ok" } else { "FAIL" };
                if !result.success {
                    failures += 1;
                }
                println!("{:<14} {:>4}  {}", result.check_name, status, result.message);
            }
            if failures > 0 {
                anyhow::bail!("{failures} check(s) failed");
            }
            Ok(())
        }
        Commands::Seed => {
            // Bootstrap already seeds an empty store; report what's there.
            let ctx = micdrop_axum::bootstrap(settings).await?;
            let rappers = ctx.rappers.list().await?;
            println!("{} rappers in the store:", rappers.len());
            for rapper in rappers {
                println!(
                    "  {} ({}W/{}L, {} debates)",
                    rapper.name, rapper.wins, rapper.losses, rapper.total_debates
                );
            }
            Ok(())
        }
    }
}
