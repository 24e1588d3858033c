//! Configuration loading and resolution.
//!
//! Sources are layered with the `config` crate and then narrowed into a
//! [`ResolvedConfig`]. `load` is the entry point.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
