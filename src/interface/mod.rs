//! Interfaces define a standardized way for object creation and manipulation.
//!
//! Interfaces enforce consistency among objects by specifying a clear and
//! strict API: a type that implements [`Configurable`] can export itself as
//! a flat configuration mapping, be rebuilt from that mapping, and render
//! the mapping as JSON.
//!
//! Implement [`Configurable`] (or wrap one of the types in [`examples`])
//! when adding new objects to the package.

pub mod examples;
pub mod generic;

pub use examples::*;
pub use generic::*;
