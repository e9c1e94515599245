//! Wordbender CLI - command-line interface for the wordlist generator.

use clap::Parser;
use wordbender_cli::{commands, session, Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> wordbender_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load().unwrap_or_else(|_| Config::default());
    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Some(Command::Generate(args)) => {
            commands::execute_generate(args, &config, &formatter).await
        }
        Some(Command::Batch(args)) => commands::execute_batch(args, &config, &formatter).await,
        Some(Command::Config(args)) => commands::execute_config(args, &mut config, &formatter),
        None => session::run_session(&config, &formatter).await,
    }
}

/// Log to stderr so stdout stays clean for wordlist/prompt output.
fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
