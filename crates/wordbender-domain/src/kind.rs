//! Wordlist kind module - the built-in output formats

/// Built-in wordlist kind
///
/// Each kind targets a different enumeration tool family and carries its own
/// validation rules and default output filename:
/// - Password: base words for mutation engines (hashcat, john)
/// - Subdomain: DNS labels for subdomain brute-forcers
/// - Directory: path segments for web content discovery
/// - CloudResource: bucket/resource names for cloud enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordlistKind {
    /// Base words for password cracking
    Password,

    /// DNS labels for subdomain enumeration
    Subdomain,

    /// Directory and file paths for web fuzzing
    Directory,

    /// Cloud resource names (buckets, storage accounts)
    CloudResource,
}

impl WordlistKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            WordlistKind::Password => "password",
            WordlistKind::Subdomain => "subdomain",
            WordlistKind::Directory => "directory",
            WordlistKind::CloudResource => "cloud-resource",
        }
    }

    /// Parse a kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "password" => Some(WordlistKind::Password),
            "subdomain" => Some(WordlistKind::Subdomain),
            "directory" => Some(WordlistKind::Directory),
            "cloud-resource" => Some(WordlistKind::CloudResource),
            _ => None,
        }
    }

    /// Default output filename for wordlists of this kind
    pub fn default_filename(&self) -> &'static str {
        match self {
            WordlistKind::Password => "password_base_wordlist.txt",
            WordlistKind::Subdomain => "subdomain_wordlist.txt",
            WordlistKind::Directory => "directory_wordlist.txt",
            WordlistKind::CloudResource => "cloud_resource_wordlist.txt",
        }
    }

    /// All built-in kinds, in display order
    pub fn all() -> [WordlistKind; 4] {
        [
            WordlistKind::Password,
            WordlistKind::Subdomain,
            WordlistKind::Directory,
            WordlistKind::CloudResource,
        ]
    }
}

impl std::fmt::Display for WordlistKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WordlistKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid wordlist kind: {}", s))
    }
}
