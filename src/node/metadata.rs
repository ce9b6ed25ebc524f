//! Node runtime metadata.
//!
//! This file contains the `Metadata` record handed to the supervising
//! controller alongside the launch arguments, so it can poll health
//! endpoints, tail logs, and pick TLS settings without re-parsing the
//! argument list.

use serde::{Deserialize, Serialize};

/// Resolved runtime-relevant settings for a launched node.
///
/// Values here reflect the resolved state (post path joining), not
/// the argument list: a setting that was elided from the arguments
/// for being empty is still reported here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Network-facing address the node advertises.
    pub server_host: String,
    /// Staking port, as the base-10 string passed on the command line.
    pub staking_port: String,
    /// HTTP API port, as the base-10 string passed on the command line.
    pub http_port: String,
    pub http_tls: bool,
    /// Resolved database directory.
    pub db_dir: String,
    /// Resolved data directory.
    pub data_dir: String,
    /// Resolved log directory.
    pub logs_dir: String,
    pub log_level: String,
    pub p2p_tls_enabled: bool,
    pub staking_enabled: bool,
    /// Resolved staking certificate path.
    pub staker_cert_path: String,
    /// Resolved staking key path.
    pub staker_key_path: String,
}
