//! Command-line interface.

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Expense tracker account API
#[derive(Parser, Debug)]
#[command(name = "expense-tracker", author, version, about)]
pub struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API
    Serve(ServeArgs),

    /// Inspect or change the database schema
    Migrate(MigrateArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,

    /// Start without applying pending migrations
    #[arg(long, env = "SKIP_MIGRATIONS")]
    pub skip_migrations: bool,
}

#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum MigrateAction {
    /// Apply pending migrations
    Up,
    /// Revert applied migrations, newest first
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// List migrations and whether each is applied
    Status,
    /// Drop every table and migrate from scratch
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["expense-tracker", "serve", "--port", "8080"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 8080);
                assert!(!args.skip_migrations);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate_down_default_steps() {
        let cli = Cli::parse_from(["expense-tracker", "-v", "migrate", "down"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Migrate(args) => assert_eq!(args.action, MigrateAction::Down { steps: 1 }),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate_down_steps() {
        let cli = Cli::parse_from(["expense-tracker", "migrate", "down", "--steps", "3"]);
        match cli.command {
            Commands::Migrate(args) => assert_eq!(args.action, MigrateAction::Down { steps: 3 }),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
