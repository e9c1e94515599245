//! The generate command: one seed set, one wordlist.

use crate::cli::GenerateArgs;
use crate::commands::resolve_client;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::writer::save_words;
use wordbender_domain::GenerationRequest;
use wordbender_gen::{Generator, ProfileRegistry};

/// Run a single generation request and save the result.
pub async fn execute_generate(
    args: GenerateArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let registry = ProfileRegistry::with_builtins();
    let profile = registry.resolve(&args.kind)?;
    let generator = Generator::new(profile.clone());

    let mut request = GenerationRequest::new(profile.name(), args.seeds, args.length)
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if let Some(instructions) = args.instructions {
        request = request.with_instructions(instructions);
    }

    if args.dry_run {
        println!("{}", generator.preview(&request));
        return Ok(());
    }

    let (provider, client) = resolve_client(config, args.provider.as_deref(), args.model)?;

    eprintln!(
        "{}",
        formatter.heading(&format!("Generating {} wordlist...", profile.name()))
    );
    eprintln!("Seeds: {}", request.seeds().join(", "));
    eprintln!(
        "Provider: {} ({})",
        provider.display_name(),
        client.identity().model
    );

    let result = generator.generate(client.as_ref(), &request).await?;

    let append = args.append || config.settings.append_by_default;
    let path = args
        .output
        .unwrap_or_else(|| config.output_path(profile.default_filename()));
    save_words(&result.words, &path, append)?;

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
        formatter.success(&format!("Generated {} unique words", result.count()))
    );
    eprintln!(
        "{}",
        formatter.success(&format!("Saved to: {}", path.display()))
    );
    eprintln!();
    eprintln!("{}", formatter.info(profile.usage_notes()));

    Ok(())
}
