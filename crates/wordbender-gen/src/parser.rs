//! Parse raw completion text into candidate words
//!
//! Models are asked for one word per line with no extra text, but the parser
//! assumes nothing: it strips list decoration, skips code fences, and drops
//! lines that read as prose or metadata rather than candidates. Parsing is a
//! pure function of the input text, so repeat runs are identical.

/// Split a raw completion into trimmed candidate words
pub fn parse_completion(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .map(clean_token)
        .filter(|token| !token.is_empty())
        .filter(|token| !looks_like_prose(token))
        .collect()
}

/// Strip list markers, numbering, and surrounding quote punctuation
fn clean_token(line: &str) -> String {
    let mut token = line.trim();

    for marker in ["- ", "* ", "• "] {
        if let Some(rest) = token.strip_prefix(marker) {
            token = rest.trim_start();
            break;
        }
    }

    // "12. word" / "12) word" numbering
    let digits = token.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &token[digits..];
        if let Some(stripped) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            token = stripped.trim_start();
        }
    }

    token
        .trim_matches(|c| matches!(c, '"' | '\'' | '`' | ','))
        .trim()
        .to_string()
}

/// Lines that look like explanations or headers rather than candidates
fn looks_like_prose(token: &str) -> bool {
    if token.contains(':')
        || token.contains('(')
        || token.contains(')')
        || token.contains('[')
        || token.contains(']')
        || token.contains("->")
    {
        return true;
    }
    // Multi-word text without a hyphen is prose; hyphenated phrases may be
    // salvageable candidates and are left for the validator to judge
    token.contains(' ') && !token.contains('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        let raw = "alpha\nbeta\ngamma\n";
        assert_eq!(parse_completion(raw), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let raw = "alpha\n\n   \nbeta\n";
        assert_eq!(parse_completion(raw), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_bullets_and_numbering_stripped() {
        let raw = "- alpha\n* beta\n• gamma\n1. delta\n2) epsilon\n";
        assert_eq!(
            parse_completion(raw),
            vec!["alpha", "beta", "gamma", "delta", "epsilon"]
        );
    }

    #[test]
    fn test_quotes_stripped() {
        let raw = "\"alpha\",\n'beta'\n`gamma`\n";
        assert_eq!(parse_completion(raw), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_code_fences_skipped() {
        let raw = "```\nalpha\n```\n";
        assert_eq!(parse_completion(raw), vec!["alpha"]);

        let raw = "```text\nbeta\n```";
        assert_eq!(parse_completion(raw), vec!["beta"]);
    }

    #[test]
    fn test_prose_lines_dropped() {
        let raw = "Here are your words:\nalpha\nNote (important)\n[category]\nsee -> below\nbeta\n";
        assert_eq!(parse_completion(raw), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_multiword_without_hyphen_dropped() {
        let raw = "two words\nhyphen-ated words\nsingle\n";
        // The hyphenated phrase survives parsing for the validator to reject
        assert_eq!(parse_completion(raw), vec!["hyphen-ated words", "single"]);
    }

    #[test]
    fn test_leading_dot_preserved() {
        let raw = ".env\n.git/config\n";
        assert_eq!(parse_completion(raw), vec![".env", ".git/config"]);
    }

    #[test]
    fn test_numbering_without_space_untouched() {
        // Bare numbers and digit-led words are candidates, not numbering
        let raw = "2024\n1password\n";
        assert_eq!(parse_completion(raw), vec!["2024", "1password"]);
    }

    #[test]
    fn test_parsing_is_idempotent_input() {
        let raw = "- alpha\nbeta\n\nHeader:\ngamma\n";
        let first = parse_completion(raw);
        let second = parse_completion(raw);
        assert_eq!(first, second);
    }
}
