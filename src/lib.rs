//! # Avalaunch - Configuration utility for launching Avalanche node processes
//!
//! This library translates an in-memory node configuration record into
//! the command-line flags and runtime metadata needed to launch and
//! supervise avalanchego node processes.
//!
//! ## Overview
//!
//! A supervising controller holds a typed [`node::Flags`] record for
//! each node it manages. Before spawning a node it calls
//! [`node::flags_to_args`] to obtain the exact argument vector for the
//! binary plus a [`node::Metadata`] summary of the resolved settings
//! (ports, directories, TLS state) it needs for health polling and log
//! tailing, without ever re-parsing the argument list.
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - `node`: flag definitions, the flag-to-argument translation, and
//!   the runtime metadata record
//! - `config_loader`: node flags file loading (YAML)
//!
//! ## Example Usage
//!
//! ```rust
//! use avalaunch::node::{flags_to_args, Flags};
//!
//! let flags = Flags::local_network();
//! let (args, metadata) = flags_to_args(&flags, "/data/node1", false, "/opt/avalaunch");
//!
//! assert!(args.contains(&"--db-dir=/data/node1/db".to_string()));
//! assert_eq!(metadata.http_port, "9650");
//! ```
//!
//! ## Error Handling
//!
//! The translation itself cannot fail; it formats values as-is and
//! leaves semantic validation to the node binary's own argument
//! parser. File loading returns typed [`config_loader::ConfigError`]
//! values, and the binary entry point reports errors via `color_eyre`.

pub mod node;
pub mod config_loader;
