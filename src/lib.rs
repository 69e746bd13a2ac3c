//! # Groundwork - Minimal Package Scaffold
//!
//! Groundwork is a base package skeleton: it provides a serializable
//! configuration contract, example implementations of that contract, and an
//! immutable settings value resolved from the environment.
//!
//! ## Core Concepts
//!
//! - **Configurable**: a trait any domain object can implement to export
//!   itself as a flat configuration mapping and as JSON
//! - **Serializer**: an ordered chain of value transformers consulted for
//!   values the default JSON encoding cannot handle
//! - **Settings**: package settings resolved once into an immutable value,
//!   never a process-wide mutable namespace
//!
//! ## Modules
//!
//! - [`interface`] - The configuration contract and example implementations
//! - [`value`] - Configuration value model and mapping type
//! - [`settings`] - Immutable package settings
//! - [`errors`] - Package error types
//!
//! ## Example
//!
//! ```
//! use groundwork::interface::{Configurable, SimpleCase};
//!
//! let case = SimpleCase::new("Hello World!");
//! assert_eq!(case.to_json().unwrap(), r#"{"value":"Hello World!"}"#);
//!
//! // Round-trip: an instance rebuilt from its own mapping is equal.
//! let rebuilt = SimpleCase::from_dict(case.to_dict()).unwrap();
//! assert_eq!(rebuilt, case);
//! ```

pub mod errors;
pub mod interface;
pub mod settings;
pub mod value;
