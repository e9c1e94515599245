//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wordbender - an LLM-powered targeted wordlist generator.
#[derive(Debug, Parser)]
#[command(name = "wordbender")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a wordlist from seed words
    Generate(GenerateArgs),

    /// Generate wordlists from a file of seed words
    Batch(BatchArgs),

    /// Configure settings and API keys
    Config(ConfigArgs),
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Wordlist kind (password, subdomain, directory, cloud-resource)
    pub kind: String,

    /// Seed words (repeat for multiple)
    #[arg(short = 's', long = "seed", required = true)]
    pub seeds: Vec<String>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target wordlist length
    #[arg(short, long, default_value = "100")]
    pub length: usize,

    /// LLM provider to use
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Specific model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Append to the output file instead of overwriting
    #[arg(short, long)]
    pub append: bool,

    /// Additional instructions for the model
    #[arg(long)]
    pub instructions: Option<String>,

    /// Print the prompt and exit without calling the provider
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Input file with one seed word per line
    pub input_file: PathBuf,

    /// Wordlist kind (password, subdomain, directory, cloud-resource)
    pub kind: String,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target length per seed set
    #[arg(short, long, default_value = "100")]
    pub length: usize,

    /// LLM provider to use
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Specific model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Seeds per seed set
    #[arg(short = 'b', long, default_value = "5")]
    pub batch_size: usize,

    /// Abort on the first failed seed set
    #[arg(long)]
    pub stop_on_error: bool,

    /// Append to the output file instead of overwriting
    #[arg(short, long)]
    pub append: bool,

    /// Additional instructions for the model
    #[arg(long)]
    pub instructions: Option<String>,

    /// Print the prompts and exit without calling the provider
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Interactive setup wizard for API keys
    #[arg(long)]
    pub setup: bool,

    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Provider to store a key for
    #[arg(long)]
    pub provider: Option<String>,

    /// API key for the provider
    #[arg(long)]
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_command_parsing() {
        let cli = Cli::parse_from([
            "wordbender",
            "generate",
            "subdomain",
            "-s",
            "acme",
            "-s",
            "fintech",
            "-l",
            "50",
        ]);
        match cli.command {
            Some(Command::Generate(args)) => {
                assert_eq!(args.kind, "subdomain");
                assert_eq!(args.seeds, vec!["acme", "fintech"]);
                assert_eq!(args.length, 50);
                assert!(!args.append);
                assert!(!args.dry_run);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_requires_seeds() {
        let result = Cli::try_parse_from(["wordbender", "generate", "password"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_batch_command_parsing() {
        let cli = Cli::parse_from([
            "wordbender",
            "batch",
            "seeds.txt",
            "password",
            "-b",
            "3",
            "--stop-on-error",
        ]);
        match cli.command {
            Some(Command::Batch(args)) => {
                assert_eq!(args.input_file, PathBuf::from("seeds.txt"));
                assert_eq!(args.kind, "password");
                assert_eq!(args.batch_size, 3);
                assert!(args.stop_on_error);
                assert_eq!(args.length, 100);
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_config_command_parsing() {
        let cli = Cli::parse_from([
            "wordbender",
            "config",
            "--provider",
            "anthropic",
            "--key",
            "sk-test",
        ]);
        match cli.command {
            Some(Command::Config(args)) => {
                assert_eq!(args.provider.as_deref(), Some("anthropic"));
                assert_eq!(args.key.as_deref(), Some("sk-test"));
                assert!(!args.setup);
            }
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_no_command_is_interactive() {
        let cli = Cli::parse_from(["wordbender"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_dry_run_flag() {
        let cli = Cli::parse_from([
            "wordbender", "generate", "password", "-s", "john", "--dry-run",
        ]);
        match cli.command {
            Some(Command::Generate(args)) => assert!(args.dry_run),
            _ => panic!("Expected Generate command"),
        }
    }
}
