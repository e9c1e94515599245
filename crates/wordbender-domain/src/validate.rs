//! Per-kind word validators
//!
//! Pure predicates over candidate words. The model's output is advisory; these
//! functions are the ground truth for what may enter a wordlist. A rejected
//! word is silently dropped by callers, never an error.

use crate::kind::WordlistKind;

/// Length bounds for password base words
pub const PASSWORD_MIN_LEN: usize = 3;
/// Maximum length for password base words
pub const PASSWORD_MAX_LEN: usize = 30;

/// Maximum length of a DNS label
pub const DNS_LABEL_MAX_LEN: usize = 63;

/// Maximum length of a directory/file path entry
pub const PATH_MAX_LEN: usize = 255;

/// Length bounds for cloud resource names
pub const CLOUD_MIN_LEN: usize = 3;
/// Maximum length for cloud resource names (S3 bucket limit)
pub const CLOUD_MAX_LEN: usize = 63;

/// Validate a password base word: ASCII alphanumeric, length 3..=30
///
/// Mutation engines add digits, symbols, and casing later, so the base word
/// carries letters and digits only.
pub fn password_word(word: &str) -> bool {
    if word.len() < PASSWORD_MIN_LEN || word.len() > PASSWORD_MAX_LEN {
        return false;
    }
    word.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validate a subdomain label: lowercase alphanumeric and hyphens,
/// no hyphen at start or end, no consecutive hyphens, length 1..=63
pub fn subdomain_label(word: &str) -> bool {
    if word.is_empty() || word.len() > DNS_LABEL_MAX_LEN {
        return false;
    }
    if word.starts_with('-') || word.ends_with('-') {
        return false;
    }
    if word.contains("--") {
        return false;
    }
    word.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Validate a directory/file path entry: alphanumerics plus `-_.~/`,
/// no `..`, no leading or trailing slash, not the bare `.`, length 1..=255
pub fn directory_path(word: &str) -> bool {
    if word.is_empty() || word.len() > PATH_MAX_LEN {
        return false;
    }
    // Path traversal sequences never belong in a fuzzing wordlist entry
    if word.contains("..") {
        return false;
    }
    if word == "." {
        return false;
    }
    if word.starts_with('/') || word.ends_with('/') {
        return false;
    }
    word.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '/'))
}

/// Validate a cloud resource name: lowercase alphanumeric plus hyphens and
/// underscores, separators not at start/end and never doubled, length 3..=63
pub fn cloud_resource_name(word: &str) -> bool {
    if word.len() < CLOUD_MIN_LEN || word.len() > CLOUD_MAX_LEN {
        return false;
    }
    let first = word.chars().next();
    let last = word.chars().last();
    let is_sep = |c: Option<char>| matches!(c, Some('-') | Some('_'));
    if is_sep(first) || is_sep(last) {
        return false;
    }
    if word.contains("--") || word.contains("__") || word.contains("-_") || word.contains("_-") {
        return false;
    }
    word.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Get the validator function for a built-in kind
pub fn for_kind(kind: WordlistKind) -> fn(&str) -> bool {
    match kind {
        WordlistKind::Password => password_word,
        WordlistKind::Subdomain => subdomain_label,
        WordlistKind::Directory => directory_path,
        WordlistKind::CloudResource => cloud_resource_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_accepts_alphanumeric() {
        assert!(password_word("abcd1234"));
        assert!(password_word("validword"));
        assert!(password_word("abc"));
        assert!(password_word(&"a".repeat(30)));
    }

    #[test]
    fn test_password_rejects_length_and_charset() {
        assert!(!password_word("ab"));
        assert!(!password_word(&"a".repeat(31)));
        assert!(!password_word("pass-word"));
        assert!(!password_word("pass word"));
        assert!(!password_word("p@ssword"));
        assert!(!password_word(""));
    }

    #[test]
    fn test_subdomain_accepts_labels() {
        assert!(subdomain_label("api"));
        assert!(subdomain_label("acme-api"));
        assert!(subdomain_label("dev2"));
        assert!(subdomain_label("a"));
        assert!(subdomain_label(&"a".repeat(63)));
    }

    #[test]
    fn test_subdomain_rejects_bad_labels() {
        assert!(!subdomain_label(""));
        assert!(!subdomain_label("-badstart"));
        assert!(!subdomain_label("badend-"));
        assert!(!subdomain_label("api--test"));
        assert!(!subdomain_label("Staging"));
        assert!(!subdomain_label("staging_db"));
        assert!(!subdomain_label(&"a".repeat(64)));
    }

    #[test]
    fn test_directory_accepts_paths() {
        assert!(directory_path("admin"));
        assert!(directory_path("api/v1/users"));
        assert!(directory_path("backup.zip"));
        assert!(directory_path(".git/config"));
        assert!(directory_path(".env"));
        assert!(directory_path("~admin"));
        assert!(directory_path("wp-content/uploads"));
    }

    #[test]
    fn test_directory_rejects_bad_paths() {
        assert!(!directory_path(""));
        assert!(!directory_path("."));
        assert!(!directory_path("/admin"));
        assert!(!directory_path("admin/"));
        assert!(!directory_path("../../etc/passwd"));
        assert!(!directory_path("admin?test=1"));
        assert!(!directory_path("admin panel"));
        assert!(!directory_path(&"a".repeat(256)));
    }

    #[test]
    fn test_cloud_accepts_names() {
        assert!(cloud_resource_name("acme-data"));
        assert!(cloud_resource_name("tsl_backups"));
        assert!(cloud_resource_name("fleet-data-2024"));
        assert!(cloud_resource_name("abc"));
        assert!(cloud_resource_name(&"a".repeat(63)));
    }

    #[test]
    fn test_cloud_rejects_bad_names() {
        assert!(!cloud_resource_name("ab"));
        assert!(!cloud_resource_name("-acme"));
        assert!(!cloud_resource_name("acme_"));
        assert!(!cloud_resource_name("acme--data"));
        assert!(!cloud_resource_name("acme__data"));
        assert!(!cloud_resource_name("acme-_data"));
        assert!(!cloud_resource_name("acme_-data"));
        assert!(!cloud_resource_name("Acme-data"));
        assert!(!cloud_resource_name(&"a".repeat(64)));
    }

    // Pinned scenario: subdomain candidates from a raw completion
    #[test]
    fn test_subdomain_scenario() {
        assert!(subdomain_label("acme-api"));
        assert!(!subdomain_label("Staging_DB"));
        assert!(subdomain_label("acme-dev"));
        assert!(!subdomain_label("api--test"));
        assert!(!subdomain_label("-badstart"));
    }

    #[test]
    fn test_for_kind_dispatch() {
        assert!(for_kind(WordlistKind::Password)("abcd1234"));
        assert!(!for_kind(WordlistKind::Subdomain)("UPPER"));
        assert!(for_kind(WordlistKind::Directory)("api/v1"));
        assert!(for_kind(WordlistKind::CloudResource)("acme-data"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: validators are deterministic - re-running yields the
        /// same verdict for any input
        #[test]
        fn test_validators_deterministic(word in ".*") {
            prop_assert_eq!(password_word(&word), password_word(&word));
            prop_assert_eq!(subdomain_label(&word), subdomain_label(&word));
            prop_assert_eq!(directory_path(&word), directory_path(&word));
            prop_assert_eq!(cloud_resource_name(&word), cloud_resource_name(&word));
        }

        /// Property: well-formed labels are accepted
        #[test]
        fn test_subdomain_well_formed(word in "[a-z0-9](-?[a-z0-9]){0,30}") {
            prop_assert!(subdomain_label(&word));
        }

        /// Property: anything with an invalid character is rejected
        #[test]
        fn test_password_invalid_char_rejected(
            prefix in "[a-z]{1,10}",
            bad in "[^a-zA-Z0-9]",
            suffix in "[a-z]{1,10}",
        ) {
            let word = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(!password_word(&word));
        }

        /// Property: accepted subdomain labels respect DNS limits
        #[test]
        fn test_subdomain_accepted_within_limits(word in ".{0,80}") {
            if subdomain_label(&word) {
                prop_assert!(!word.is_empty());
                prop_assert!(word.len() <= DNS_LABEL_MAX_LEN);
                prop_assert!(!word.starts_with('-'));
                prop_assert!(!word.ends_with('-'));
            }
        }
    }
}
