//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Voyago travel booking API
#[derive(Parser, Debug)]
#[command(name = "voyago")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Load an admin account and sample listings
    Seed(SeedArgs),
}

/// Arguments for the serve command
///
/// Unset values fall back to `SERVER_HOST` / `SERVER_PORT` from the config.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Add sample listings without clearing the catalog first
    #[arg(long)]
    pub keep_existing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_flag() {
        let cli = Cli::parse_from(["voyago", "seed", "--keep-existing"]);
        assert!(matches!(cli.command, Commands::Seed(SeedArgs { keep_existing: true })));
    }

    #[test]
    fn test_serve_port_is_optional() {
        let cli = Cli::parse_from(["voyago", "-v", "serve"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve(args) => assert!(args.port.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
