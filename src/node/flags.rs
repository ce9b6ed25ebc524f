//! Node flag definitions.
//!
//! This file contains the `Flags` record mirroring the command-line
//! surface of the avalanchego binary. Field names and the flag-name
//! strings derived from them are a contract with that binary and must
//! not be renamed.

use serde::{Deserialize, Serialize};

/// Full set of launch-time settings for a single node process.
///
/// Every field maps to exactly one avalanchego command-line flag.
/// Fields absent from a configuration file deserialize to their
/// zero value (empty string, 0, false) rather than being an error;
/// empty-valued flags are later elided from the argument list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    // Consensus-wide toggles
    pub assertions_enabled: bool,
    pub tx_fee: u64,

    // Network identity
    pub public_ip: String,
    pub network_id: String,

    // Throughput server
    pub xput_server_port: u16,
    pub xput_server_enabled: bool,

    pub signature_verification_enabled: bool,

    // API surface toggles
    pub api_admin_enabled: bool,
    pub api_ipcs_enabled: bool,
    pub api_keystore_enabled: bool,
    pub api_metrics_enabled: bool,
    pub api_info_enabled: bool,
    pub api_auth_required: bool,
    pub api_auth_password: String,

    // HTTP / TLS
    pub http_host: String,
    pub http_port: u16,
    pub http_tls_enabled: bool,
    pub http_tls_cert_file: String,
    pub http_tls_key_file: String,

    // Bootstrapping
    pub bootstrap_ips: String,
    pub bootstrap_ids: String,

    // Storage paths
    pub db_enabled: bool,
    pub db_dir: String,
    pub data_dir: String,
    pub plugin_dir: String,

    // Logging
    pub log_level: String,
    pub log_dir: String,
    pub log_display_level: String,

    // Snow consensus tuning
    pub snow_avalanche_batch_size: i32,
    pub snow_avalanche_num_parents: i32,
    pub snow_sample_size: i32,
    pub snow_quorum_size: i32,
    pub snow_virtuous_commit_threshold: i32,
    pub snow_rogue_commit_threshold: i32,

    // Staking / P2P TLS
    pub p2p_tls_enabled: bool,
    pub staking_enabled: bool,
    pub staking_port: u16,
    pub staking_tls_key_file: String,
    pub staking_tls_cert_file: String,
    pub min_stake_duration: String,
    pub whitelisted_subnets: String,

    pub config_file: String,

    // Resource limits
    pub conn_meter_max_conns: i32,
    pub conn_meter_reset_duration: String,
    pub fd_limit: i32,

    // IPC
    pub ipcs_chain_ids: String,
    pub ipcs_path: String,
}

impl Flags {
    /// Stock settings for a throwaway local network node.
    ///
    /// These match the defaults the original shell tool ships for
    /// single-machine test networks; callers normally load a YAML
    /// file instead and only fall back to these when none is given.
    pub fn local_network() -> Self {
        Self {
            assertions_enabled: true,
            tx_fee: 1_000_000,
            public_ip: "127.0.0.1".to_string(),
            network_id: "local".to_string(),
            xput_server_port: 9652,
            xput_server_enabled: false,
            signature_verification_enabled: true,
            api_admin_enabled: true,
            api_ipcs_enabled: true,
            api_keystore_enabled: true,
            api_metrics_enabled: true,
            api_info_enabled: true,
            api_auth_required: false,
            api_auth_password: String::new(),
            http_host: String::new(),
            http_port: 9650,
            http_tls_enabled: false,
            http_tls_cert_file: String::new(),
            http_tls_key_file: String::new(),
            bootstrap_ips: String::new(),
            bootstrap_ids: String::new(),
            db_enabled: true,
            db_dir: "db".to_string(),
            data_dir: "data".to_string(),
            plugin_dir: String::new(),
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_display_level: String::new(),
            snow_avalanche_batch_size: 30,
            snow_avalanche_num_parents: 5,
            snow_sample_size: 2,
            snow_quorum_size: 2,
            snow_virtuous_commit_threshold: 5,
            snow_rogue_commit_threshold: 10,
            p2p_tls_enabled: true,
            staking_enabled: false,
            staking_port: 9651,
            staking_tls_key_file: String::new(),
            staking_tls_cert_file: String::new(),
            min_stake_duration: "5m".to_string(),
            whitelisted_subnets: String::new(),
            config_file: String::new(),
            conn_meter_max_conns: 5,
            conn_meter_reset_duration: String::new(),
            fd_limit: 32768,
            ipcs_chain_ids: String::new(),
            ipcs_path: String::new(),
        }
    }
}
