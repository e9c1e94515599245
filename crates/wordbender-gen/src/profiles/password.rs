//! Password base-word profile

use crate::profile::WordlistProfile;
use crate::prompt::PromptTemplate;
use wordbender_domain::{validate, WordlistKind};

const TEMPLATE: PromptTemplate = PromptTemplate {
    role: "You are an expert in generating base wordlists for password cracking.",
    item_description: "base words that could be used with mutation rules in tools like Hashcat",
    focus_areas: &[
        "Words semantically related to the seeds (synonyms, associated concepts)",
        "Common variations in spelling (color/colour, center/centre)",
        "Related proper nouns (brands, locations, cultural references)",
        "Compound words using the seeds",
        "Industry or context-specific terminology",
        "Pop culture references related to the seeds",
    ],
    output_rules: &[
        "Output ONLY alphanumeric base words, one per line",
        "No special characters or numbers-only mutations (Hashcat handles those)",
        "Length: 3-30 characters per word",
        "No duplicates",
        "No explanations, categories, or additional text",
    ],
};

const SEED_HINTS: &str = "\
For effective password wordlists, provide diverse information about the target:
  - Personal info: first name, last name, nicknames, usernames
  - Important dates: birthdays, anniversaries
  - Family & pets: spouse name, children's names, pet names
  - Locations: cities lived in, favorite vacation spots, birthplace
  - Interests: hobbies, favorite sports teams, bands, movies
  - Work: company name, job title, department, projects

Example: john smith may31989 fluffy chicago bears accounting";

const USAGE_NOTES: &str = "\
Next steps:
  1. Feed this wordlist into a password mutation tool like Hashcat:
     hashcat -a 0 -m <hash_type> <hash_file> password_base_wordlist.txt -r rules/best64.rule
  2. Common rule files to try: best64.rule, d3ad0ne.rule, dive.rule
  3. Combine with masks for hybrid attacks:
     hashcat -a 6 -m <hash_type> <hash_file> password_base_wordlist.txt ?d?d?d?d

The generated words are base words - Hashcat creates the variations with
numbers, special characters, and capitalization.";

/// Base words for password cracking: alphanumeric, mutation-friendly
pub struct PasswordProfile;

impl WordlistProfile for PasswordProfile {
    fn name(&self) -> &str {
        WordlistKind::Password.as_str()
    }

    fn default_filename(&self) -> &str {
        WordlistKind::Password.default_filename()
    }

    fn is_valid(&self, word: &str) -> bool {
        validate::password_word(word)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_identity() {
        let profile = PasswordProfile;
        assert_eq!(profile.name(), "password");
        assert_eq!(profile.default_filename(), "password_base_wordlist.txt");
    }

    #[test]
    fn test_validation_delegates() {
        let profile = PasswordProfile;
        assert!(profile.is_valid("abcd1234"));
        assert!(!profile.is_valid("ab"));
        assert!(!profile.is_valid("p@ss"));
    }

    #[test]
    fn test_prompt_states_count_and_rules() {
        let profile = PasswordProfile;
        let seeds = vec!["john".to_string(), "chicago".to_string()];
        let prompt = profile.prompt(&seeds, 50);

        assert!(prompt.contains("john, chicago"));
        assert!(prompt.contains("Generate exactly 50"));
        assert!(prompt.contains("3-30 characters"));
        assert!(prompt.contains("alphanumeric"));
    }
}
