//! Subdomain label profile

use crate::profile::WordlistProfile;
use crate::prompt::PromptTemplate;
use wordbender_domain::{validate, WordlistKind};

const TEMPLATE: PromptTemplate = PromptTemplate {
    role: "You are an expert in generating subdomain wordlists for penetration testing.",
    item_description: "potential subdomains",
    focus_areas: &[
        "Common subdomain patterns (api, dev, staging, prod, test)",
        "Department names (hr, finance, it, sales)",
        "Geographic indicators (us-east, eu-west, asia)",
        "Service indicators (mail, ftp, vpn, portal)",
        "Version indicators (v1, v2, new, old, legacy)",
        "Environment indicators (uat, qa, demo)",
        "Combinations with seed words",
        "Industry-specific subdomains based on the seed context",
    ],
    output_rules: &[
        "Output ONLY valid subdomain labels",
        "Lowercase alphanumeric characters and hyphens only",
        "Hyphens not at start or end, never doubled",
        "Length: 1-63 characters per label",
        "One subdomain per line, no explanations",
        "No duplicates",
    ],
};

const SEED_HINTS: &str = "\
For effective subdomain wordlists, provide information about the organization:
  - Company: name, abbreviations, stock ticker, brand names
  - Industry: sector keywords, industry-specific terms
  - Technology: known tech stack, platforms, services used
  - Geographic: office locations, regions served, country codes
  - Products: product names, service names, project codenames
  - Structure: department names, team names, business units

Example: acmecorp acme fintech aws cloud newyork payment gateway";

const USAGE_NOTES: &str = "\
Next steps:
  1. Use with subdomain enumeration tools:
     gobuster dns -d target.com -w subdomain_wordlist.txt
     ffuf -u https://FUZZ.target.com -w subdomain_wordlist.txt
  2. Combine with passive DNS data and certificate transparency logs.
  3. Verify discovered subdomains: check for wildcard DNS, probe for live
     hosts, screenshot interesting services.";

/// DNS labels for subdomain enumeration
pub struct SubdomainProfile;

impl WordlistProfile for SubdomainProfile {
    fn name(&self) -> &str {
        WordlistKind::Subdomain.as_str()
    }

    fn default_filename(&self) -> &str {
        WordlistKind::Subdomain.default_filename()
    }

    fn is_valid(&self, word: &str) -> bool {
        validate::subdomain_label(word)
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
