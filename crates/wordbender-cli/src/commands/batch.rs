//! The batch command: many seed sets from a file, one merged wordlist.

use crate::cli::BatchArgs;
use crate::commands::resolve_client;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::writer::FileSink;
use std::fs;
use std::path::{Path, PathBuf};
use wordbender_batch::{chunk_seeds, BatchOptions, Orchestrator};
use wordbender_domain::GenerationRequest;
use wordbender_gen::{Generator, ProfileRegistry};

/// Run generation across every seed set in the input file.
pub async fn execute_batch(args: BatchArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let registry = ProfileRegistry::with_builtins();
    let profile = registry.resolve(&args.kind)?;
    let generator = Generator::new(profile.clone());

    let seeds = load_seed_lines(&args.input_file)?;
    let seed_sets = chunk_seeds(&seeds, args.batch_size);
    eprintln!(
        "{}",
        formatter.heading(&format!(
            "Found {} seed words ({} seed sets)",
            seeds.len(),
            seed_sets.len()
        ))
    );

    if args.dry_run {
        for (index, set) in seed_sets.iter().enumerate() {
            let mut request = GenerationRequest::new(profile.name(), set.clone(), args.length)
                .map_err(|e| CliError::InvalidInput(e.to_string()))?;
            if let Some(instructions) = &args.instructions {
                request = request.with_instructions(instructions.clone());
            }
            println!("--- Seed set {}/{} ---", index + 1, seed_sets.len());
            println!("{}", generator.preview(&request));
        }
        return Ok(());
    }

    let (provider, client) = resolve_client(config, args.provider.as_deref(), args.model)?;
    eprintln!(
        "Provider: {} ({})",
        provider.display_name(),
        client.identity().model
    );

    let append = args.append || config.settings.append_by_default;
    let path = args
        .output
        .unwrap_or_else(|| batch_output_path(config, profile.name()));
    let mut sink = FileSink::create(&path, append)?;

    let orchestrator = Orchestrator::new(BatchOptions {
        chunk_size: args.batch_size,
        stop_on_error: args.stop_on_error,
    });
    let report = orchestrator
        .run(
            &generator,
            client.as_ref(),
            seed_sets,
            args.length,
            args.instructions.as_deref(),
            &mut sink,
        )
        .await?;

    for entry in &report.entries {
        if let Err(message) = &entry.outcome {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "Seed set [{}] failed: {}",
                    entry.seeds.join(", "),
                    message
                ))
            );
        }
    }

    eprintln!(
        "{}",
        formatter.success(&format!(
            "Batch complete: {} succeeded, {} failed, {} words",
            report.succeeded(),
            report.failed(),
            report.total_words()
        ))
    );
    eprintln!(
        "{}",
        formatter.success(&format!("Saved to: {}", path.display()))
    );

    Ok(())
}

fn batch_output_path(config: &Config, kind: &str) -> PathBuf {
    config.output_path(&format!("{}_batch_wordlist.txt", kind))
}

/// Read seed words from a file, one per line, skipping blanks.
fn load_seed_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", path.display(), e)))?;
    let seeds: Vec<String> = contents
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    if seeds.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No seed words found in {}",
            path.display()
        )));
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_seed_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seeds.txt");
        fs::write(&path, "acme\n\n  corp  \ninitech\n").unwrap();

        let seeds = load_seed_lines(&path).unwrap();
        assert_eq!(seeds, vec!["acme", "corp", "initech"]);
    }

    #[test]
    fn test_load_seed_lines_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seeds.txt");
        fs::write(&path, "\n \n").unwrap();

        assert!(matches!(
            load_seed_lines(&path),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_seed_lines_missing_file() {
        let result = load_seed_lines(Path::new("/nonexistent/seeds.txt"));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_batch_output_path_uses_kind() {
        let config = Config::default();
        assert_eq!(
            batch_output_path(&config, "subdomain"),
            PathBuf::from("subdomain_batch_wordlist.txt")
        );
    }
}
