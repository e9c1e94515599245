//! Profile registry - resolve kind names to wordlist profiles
//!
//! Populated with the built-in kinds at process start. Resolving an unknown
//! name fails with the known names listed - never a silent default.

use crate::error::GenError;
use crate::profile::WordlistProfile;
use crate::profiles::{CloudResourceProfile, DirectoryProfile, PasswordProfile, SubdomainProfile};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry mapping kind names to wordlist profiles
pub struct ProfileRegistry {
    profiles: BTreeMap<String, Arc<dyn WordlistProfile>>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Create a registry with the built-in profiles registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PasswordProfile));
        registry.register(Arc::new(SubdomainProfile));
        registry.register(Arc::new(DirectoryProfile));
        registry.register(Arc::new(CloudResourceProfile));
        registry
    }

    /// Register a profile under its own name
    pub fn register(&mut self, profile: Arc<dyn WordlistProfile>) {
        self.profiles.insert(profile.name().to_string(), profile);
    }

    /// All registered kind names, sorted
    pub fn names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    /// Resolve a kind name to its profile
    pub fn resolve(&self, kind: &str) -> Result<Arc<dyn WordlistProfile>, GenError> {
        self.profiles
            .get(kind)
            .cloned()
            .ok_or_else(|| GenError::UnknownKind {
                requested: kind.to_string(),
                known: self.names(),
            })
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
