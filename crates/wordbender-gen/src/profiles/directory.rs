//! Directory/file path profile

use crate::profile::WordlistProfile;
use crate::prompt::PromptTemplate;
use wordbender_domain::{validate, WordlistKind};

const TEMPLATE: PromptTemplate = PromptTemplate {
    role: "You are an expert in generating directory/file paths for web fuzzing tools.",
    item_description: "directory and file paths for web bruteforcing",
    focus_areas: &[
        "Common directory patterns (admin, backup, config, logs, temp)",
        "Framework-specific paths (wp-admin, wp-content for WordPress)",
        "File extensions (.bak, .old, .config, .log, .zip)",
        "Environment indicators (dev, test, staging, prod)",
        "API endpoints (api/v1, rest, graphql)",
        "Hidden files and directories (.git, .env, .htaccess)",
        "Backup patterns (backup.zip, site.tar.gz, dump.sql)",
        "Technology-specific paths based on seed context",
    ],
    output_rules: &[
        "NO leading slashes (correct: admin, api/v1 - NOT: /admin, /api/v1)",
        "Include both single-level and multi-level paths",
        "Mix directories and files with extensions",
        "Use only letters, numbers, hyphens, underscores, dots, tildes, forward slashes",
        "One path per line, no explanations",
        "No duplicates",
    ],
};

const SEED_HINTS: &str = "\
For effective directory/file wordlists, provide information about the target:
  - Technology: framework names (WordPress, Django, Laravel, Spring)
  - Company: name, abbreviations, product names, project codenames
  - Platform: server type (Apache, Nginx, IIS), language (PHP, Python, Java)
  - Purpose: application type (ecommerce, blog, API, admin panel)
  - Known paths: any discovered directories or naming patterns

Example: wordpress acmecorp blog php apache ecommerce payment";

const USAGE_NOTES: &str = "\
Next steps:
  1. Use with content discovery tools:
     gobuster dir -u https://target.com -w directory_wordlist.txt
     ffuf -u https://target.com/FUZZ -w directory_wordlist.txt
     feroxbuster -u https://target.com -w directory_wordlist.txt
  2. Try extensions relevant to the detected stack (-x php,bak,old).
  3. Recurse into discovered directories for deeper coverage.";

/// Directory and file paths for web content discovery
pub struct DirectoryProfile;

impl WordlistProfile for DirectoryProfile {
    fn name(&self) -> &str {
        WordlistKind::Directory.as_str()
    }

    fn default_filename(&self) -> &str {
        WordlistKind::Directory.default_filename()
    }

    fn is_valid(&self, word: &str) -> bool {
        validate::directory_path(word)
    }

    fn prompt(&self, seeds: &[String], target_length: usize) -> String {
        TEMPLATE.render(seeds, target_length)
    }

    fn seed_hints(&self) -> &str {
        SEED_HINTS
    }

    fn usage_notes(&self) -> &str {
        USAGE_NOTES
    }
}
