//! Built-in wordlist profiles

pub mod cloud;
pub mod directory;
pub mod password;
pub mod subdomain;

pub use cloud::CloudResourceProfile;
pub use directory::DirectoryProfile;
pub use password::PasswordProfile;
pub use subdomain::SubdomainProfile;
