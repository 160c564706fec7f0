// ABOUTME: CLI argument parsing and command routing for tradein
//
// Provides command-line interface for:
// - Running the mock trade-in API (serve)
// - Scripted access to the API (phones, quote)
// - Launching TUI (tui, default)

pub mod phones;
pub mod quote;
pub mod serve;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Phone trade-in storefront - browse listings and get a price estimate
#[derive(Parser)]
#[command(name = "tradein")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Override the API base URL from config
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Run the mock trade-in API server
    Serve(ServeArgs),

    /// List the phones in the catalog
    Phones,

    /// Request a price estimate
    Quote(QuoteArgs),
}

/// Arguments for the serve command
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to bind (defaults to server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to server.port)
    #[arg(long, short)]
    pub port: Option<u16>,
}

/// Arguments for the quote command
#[derive(clap::Args)]
pub struct QuoteArgs {
    /// Phone brand, e.g. Samsung
    #[arg(long)]
    pub brand: String,

    /// Phone series, e.g. "Galaxy S22"
    #[arg(long)]
    pub series: String,

    /// Storage/RAM variant, e.g. 128GB/6GB
    #[arg(long)]
    pub variant: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["tradein"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_quote_args_and_global_format() {
        let cli = Cli::try_parse_from([
            "tradein",
            "quote",
            "--brand",
            "Samsung",
            "--series",
            "Galaxy S22",
            "--variant",
            "128GB/6GB",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let Some(Commands::Quote(args)) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.series, "Galaxy S22");
    }

    #[test]
    fn test_quote_requires_all_fields() {
        assert!(Cli::try_parse_from(["tradein", "quote", "--brand", "Apple"]).is_err());
    }

    #[test]
    fn test_global_config_path() {
        let cli = Cli::try_parse_from(["tradein", "phones", "--config", "/tmp/tradein.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tradein.toml")));
        assert!(matches!(cli.command, Some(Commands::Phones)));
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["tradein", "serve", "--port", "8080"]).unwrap();
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.host, None);
    }
}
