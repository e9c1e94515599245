//! Cloud resource name profile

use crate::profile::WordlistProfile;
use crate::prompt::PromptTemplate;
use wordbender_domain::{validate, WordlistKind};

const TEMPLATE: PromptTemplate = PromptTemplate {
    role: "You are an expert in cloud infrastructure penetration testing who understands \
how real companies name their cloud resources in practice.",
    item_description:
        "realistic cloud resource names that a company might actually use (buckets, \
storage accounts, container registries)",
    focus_areas: &[
        "Company abbreviations and variations (e.g. tesla -> tsl, tsla)",
        "Realistic project codenames and internal references",
        "Common cloud naming patterns that real engineers use",
        "Department abbreviations (eng, mktg, ops, fin)",
        "Internal tool names and platform references",
        "Data classification terms (public, internal, confidential)",
        "Time-based names (quarterly-reports, daily-exports, snapshot-archive)",
        "Purpose-specific names (customer-uploads, firmware-releases)",
    ],
    output_rules: &[
        "Output ONLY resource names, one per line",
        "Lowercase alphanumeric with hyphens or underscores",
        "Separators not at start or end, never doubled",
        "Length: 3-63 characters per name",
        "No explanations, no duplicates",
        "Avoid overly generic combinations - names should sound like a real company's infrastructure",
    ],
};

const SEED_HINTS: &str = "\
For effective cloud resource wordlists, provide diverse context:
  - Company: name, stock ticker, common abbreviations
  - Industry: automotive, finance, healthcare, retail, ...
  - Products: main products, services, or platforms
  - Technology: cloud provider (AWS/Azure/GCP), tech stack
  - Projects: known project names or internal initiatives
  - Geography: headquarters, major offices, target markets

Example: tesla automotive aws s3 autopilot california energy";

const USAGE_NOTES: &str = "\
Next steps:
  1. Use with cloud enumeration tools:
     cloud_enum -k cloud_resource_wordlist.txt
     s3scanner scan --buckets-file cloud_resource_wordlist.txt
  2. Check multiple providers - naming carries over between AWS, Azure, GCP.
  3. Probe discovered resources for public listing and write access only
     where testing is authorized.";

/// Cloud resource names for bucket/storage enumeration
pub struct CloudResourceProfile;

impl WordlistProfile for CloudResourceProfile {
    fn name(&self) -> &str {
        WordlistKind::CloudResource.as_str()
    }

    fn default_filename(&self) -> &str {
        WordlistKind::CloudResource.default_filename()
    }

    fn is_valid(&self, word: &str) -> bool {
        validate::cloud_resource_name(word)
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
