//! Node configuration module.
//!
//! This module handles translation of in-memory node configuration
//! into the command-line flags and runtime metadata used to launch
//! and supervise avalanchego node processes.

pub mod flags;
pub mod args;
pub mod metadata;

// Re-export commonly used items for convenience
pub use flags::Flags;
pub use args::flags_to_args;
pub use metadata::Metadata;
