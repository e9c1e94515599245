//! Wordbender Domain Layer
//!
//! This crate contains the core domain model for Wordbender. It has ZERO
//! external dependencies and defines the fundamental concepts that all other
//! layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Wordlist kind**: a named output format (password, subdomain, directory,
//!   cloud-resource) with its own validation rules
//! - **Validators**: pure per-kind predicates over candidate words - the
//!   ground truth for what may appear in a generated wordlist
//! - **Generation request/result**: one seed set in, one validated and
//!   size-bounded word sequence out
//! - **Batch report**: per-seed-set outcomes for a batch run, in input order
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure business logic only
//! - Provider clients, prompt construction, and orchestration live in other
//!   crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod kind;
pub mod request;
pub mod result;
pub mod validate;

// Re-exports for convenience
pub use batch::{BatchEntry, BatchReport};
pub use kind::WordlistKind;
pub use request::{GenerationRequest, RequestError};
pub use result::GenerationResult;
