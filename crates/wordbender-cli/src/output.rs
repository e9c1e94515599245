//! Output formatting for the CLI.

use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use wordbender_llm::ProviderId;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        if self.color_enabled {
            format!("{} {}", "✓".green(), message.green())
        } else {
            format!("✓ {}", message)
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        if self.color_enabled {
            format!("{} {}", "✗".red(), message.red())
        } else {
            format!("✗ {}", message)
        }
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        if self.color_enabled {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    /// Format an informational message.
    pub fn info(&self, message: &str) -> String {
        if self.color_enabled {
            message.cyan().to_string()
        } else {
            message.to_string()
        }
    }

    /// Format a section heading.
    pub fn heading(&self, message: &str) -> String {
        if self.color_enabled {
            message.bold().to_string()
        } else {
            message.to_string()
        }
    }

    /// Render the provider configuration table.
    ///
    /// `configured` maps each provider to whether a usable API key exists.
    pub fn provider_table(&self, configured: &[(ProviderId, bool)]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Provider", "Env var", "Default model", "Key"]);

        for (provider, has_key) in configured {
            builder.push_record([
                provider.display_name(),
                provider.env_var(),
                provider.default_model(),
                if *has_key { "configured" } else { "missing" },
            ]);
        }

        builder
            .build()
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatting_without_color() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("saved"), "✓ saved");
        assert_eq!(formatter.error("failed"), "✗ failed");
        assert_eq!(formatter.warning("short"), "short");
        assert_eq!(formatter.info("note"), "note");
    }

    #[test]
    fn test_provider_table_contains_rows() {
        let formatter = Formatter::new(false);
        let rows = vec![
            (ProviderId::Anthropic, true),
            (ProviderId::OpenRouter, false),
        ];
        let table = formatter.provider_table(&rows);

        assert!(table.contains("Anthropic"));
        assert!(table.contains("ANTHROPIC_API_KEY"));
        assert!(table.contains("configured"));
        assert!(table.contains("missing"));
    }
}
