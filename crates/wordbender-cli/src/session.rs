//! Interactive session mode.
//!
//! Running `wordbender` with no subcommand walks through kind selection, seed
//! entry, and generation with readline prompts, then saves the result to the
//! kind's default output file.

use crate::commands::resolve_client;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::writer::save_words;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use wordbender_domain::GenerationRequest;
use wordbender_gen::{Generator, ProfileRegistry};
use wordbender_llm::ProviderId;

const BANNER: &str = "Wordbender - LLM-powered targeted wordlist generator";

/// Run the interactive session loop.
pub async fn run_session(config: &Config, formatter: &Formatter) -> Result<()> {
    eprintln!("{}", formatter.heading(BANNER));
    eprintln!();

    if !ProviderId::all().iter().any(|p| config.has_api_key(*p)) {
        eprintln!(
            "{}",
            formatter.error("No provider API keys configured. Run 'wordbender config --setup' first.")
        );
        return Ok(());
    }

    let mut editor = DefaultEditor::new()?;
    let history_path = history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    let registry = ProfileRegistry::with_builtins();

    loop {
        match run_one_generation(config, formatter, &mut editor, &registry).await {
            Ok(()) => {}
            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
        }

        match editor.readline("\nGenerate another wordlist? [y/N]: ") {
            Ok(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            Ok(_) => break,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &history_path {
        let _ = editor.save_history(path);
    }
    eprintln!("{}", formatter.info("Goodbye!"));
    Ok(())
}

async fn run_one_generation(
    config: &Config,
    formatter: &Formatter,
    editor: &mut DefaultEditor,
    registry: &ProfileRegistry,
) -> Result<()> {
    // Kind selection
    let kinds = registry.names();
    eprintln!("{}", formatter.heading("Wordlist kinds:"));
    for (index, name) in kinds.iter().enumerate() {
        let marker = if *name == config.settings.default_kind {
            " (default)"
        } else {
            ""
        };
        eprintln!("  {}. {}{}", index + 1, name, marker);
    }

    let choice = editor.readline("Kind (number or name, Enter for default): ")?;
    let choice = choice.trim();
    let kind = if choice.is_empty() {
        config.settings.default_kind.clone()
    } else if let Ok(number) = choice.parse::<usize>() {
        kinds
            .get(number.saturating_sub(1))
            .cloned()
            .unwrap_or_else(|| choice.to_string())
    } else {
        choice.to_string()
    };
    let profile = registry.resolve(&kind)?;

    // Seeds, with the profile's guidance on what works
    eprintln!();
    eprintln!("{}", formatter.info(profile.seed_hints()));
    let seeds_line = editor.readline("Seed words (space-separated): ")?;
    let seeds: Vec<String> = seeds_line.split_whitespace().map(String::from).collect();

    // Length
    let length_input = editor.readline(&format!(
        "Wordlist length [{}]: ",
        config.settings.default_length
    ))?;
    let length = length_input
        .trim()
        .parse::<usize>()
        .unwrap_or(config.settings.default_length);

    // Provider
    let provider_input = editor.readline(&format!(
        "Provider [{}]: ",
        config.settings.default_provider
    ))?;
    let provider_input = provider_input.trim();
    let provider_arg = if provider_input.is_empty() {
        None
    } else {
        Some(provider_input)
    };

    let request = GenerationRequest::new(profile.name(), seeds, length)
        .map_err(|e| crate::error::CliError::InvalidInput(e.to_string()))?;

    let generator = Generator::new(profile.clone());
    let (provider, client) = resolve_client(config, provider_arg, None)?;

    eprintln!();
    eprintln!(
        "{}",
        formatter.heading(&format!(
            "Generating {} wordlist via {}...",
            profile.name(),
            provider.display_name()
        ))
    );

    let result = generator.generate(client.as_ref(), &request).await?;

    let path: PathBuf = config.output_path(profile.default_filename());
    save_words(&result.words, &path, config.settings.append_by_default)?;

    if result.is_short() {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Produced {} of {} requested words",
                result.count(),
                result.requested
            ))
        );
    }
    eprintln!(
        "{}",
        formatter.success(&format!(
            "Generated {} unique words -> {}",
            result.count(),
            path.display()
        ))
    );
    eprintln!();
    eprintln!("{}", formatter.info(profile.usage_notes()));
    Ok(())
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".wordbender").join("history.txt"))
}
