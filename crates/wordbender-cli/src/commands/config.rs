//! The config command: setup wizard, inspection, and key storage.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::DefaultEditor;
use wordbender_llm::ProviderId;

/// Manage settings and API keys.
pub fn execute_config(args: ConfigArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    if args.setup {
        run_setup_wizard(config, formatter)
    } else if args.show {
        show_configuration(config, formatter);
        Ok(())
    } else if let (Some(provider), Some(key)) = (&args.provider, &args.key) {
        set_provider_key(config, provider, key, formatter)
    } else {
        eprintln!("Use --setup for interactive setup or --show to view configuration");
        Ok(())
    }
}

fn show_configuration(config: &Config, formatter: &Formatter) {
    let rows: Vec<(ProviderId, bool)> = ProviderId::all()
        .into_iter()
        .map(|p| (p, config.has_api_key(p)))
        .collect();

    eprintln!("{}", formatter.heading("Providers"));
    eprintln!("{}", formatter.provider_table(&rows));
    eprintln!();
    eprintln!("{}", formatter.heading("Settings"));
    eprintln!("  default provider: {}", config.settings.default_provider);
    eprintln!("  default kind:     {}", config.settings.default_kind);
    eprintln!("  default length:   {}", config.settings.default_length);
    eprintln!(
        "  output directory: {}",
        config
            .settings
            .output_directory
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "current directory".to_string())
    );
    eprintln!("  append by default: {}", config.settings.append_by_default);
}

fn set_provider_key(
    config: &mut Config,
    provider: &str,
    key: &str,
    formatter: &Formatter,
) -> Result<()> {
    let provider = ProviderId::parse(provider).ok_or_else(|| {
        CliError::Config(format!(
            "Unknown provider '{}', known providers: {}",
            provider,
            ProviderId::all()
                .map(|p| p.as_str())
                .join(", ")
        ))
    })?;

    config.set_api_key(provider, key);
    config.save()?;
    eprintln!(
        "{}",
        formatter.success(&format!(
            "Stored API key for {} in {}",
            provider.display_name(),
            Config::path()?.display()
        ))
    );
    Ok(())
}

fn run_setup_wizard(config: &mut Config, formatter: &Formatter) -> Result<()> {
    eprintln!("{}", formatter.heading("Wordbender Setup Wizard"));
    eprintln!(
        "{}",
        formatter.warning("Keys are stored in plain text; prefer environment variables on shared machines")
    );
    eprintln!();

    let mut editor = DefaultEditor::new()?;

    for provider in ProviderId::all() {
        if config.has_api_key(provider) {
            eprintln!(
                "{}",
                formatter.success(&format!("{} already configured", provider.display_name()))
            );
            continue;
        }

        let input = editor.readline(&format!(
            "Enter {} (or press Enter to skip): ",
            provider.env_var()
        ))?;
        let key = input.trim();
        if key.is_empty() {
            continue;
        }
        config.set_api_key(provider, key);

        if provider == ProviderId::Custom && config.settings.custom_api_url.is_none() {
            let url = editor.readline("Enter the custom endpoint base URL: ")?;
            let url = url.trim();
            if !url.is_empty() {
                config.settings.custom_api_url = Some(url.to_string());
            }
        }
    }

    let default = editor.readline(&format!(
        "Default provider [{}]: ",
        config.settings.default_provider
    ))?;
    let default = default.trim();
    if !default.is_empty() {
        if ProviderId::parse(default).is_none() {
            return Err(CliError::Config(format!("Unknown provider '{}'", default)));
        }
        config.settings.default_provider = default.to_lowercase();
    }

    config.save()?;
    eprintln!();
    eprintln!(
        "{}",
        formatter.success(&format!("Configuration saved to {}", Config::path()?.display()))
    );
    Ok(())
}
