//! Flag translation.
//!
//! This file contains the translation from a `Flags` record into the
//! argument vector handed to a node process launcher, plus the
//! `Metadata` summary the supervising controller keeps for itself.

use std::fmt;

use super::flags::Flags;
use super::metadata::Metadata;

/// A single flag value, tagged with how it renders on the command line.
///
/// Booleans render as lowercase `true`/`false`, integers as base-10
/// digits, and strings verbatim with no escaping or quoting; the
/// consuming binary's flag parser accepts raw values.
enum FlagValue {
    Bool(bool),
    Uint(u64),
    Int(i64),
    Text(String),
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Uint(n) => write!(f, "{}", n),
            FlagValue::Int(n) => write!(f, "{}", n),
            FlagValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Convert a `Flags` record into launch arguments and runtime metadata.
///
/// Storage paths resolve against `basedir` unless `sep_base` is set,
/// in which case the configured paths are used verbatim and an extra
/// `--data-dir=<basedir>` argument is appended so the node still
/// learns the base directory. `work_dir` is the translating process's
/// current working directory, passed in by the caller so this stays a
/// pure function; it anchors relative certificate/key paths.
///
/// The translation cannot fail: values are formatted as-is, and any
/// semantically invalid setting is left for the node binary's own
/// argument parser to reject.
///
/// Arguments whose value is empty are removed from the returned list;
/// metadata always carries the resolved values, elided or not.
pub fn flags_to_args(
    flags: &Flags,
    basedir: &str,
    sep_base: bool,
    work_dir: &str,
) -> (Vec<String>, Metadata) {
    // Port targets
    let http_port_string = flags.http_port.to_string();
    let staking_port_string = flags.staking_port.to_string();

    // Paths/directories
    let db_path = resolve_dir(basedir, &flags.db_dir, sep_base);
    let data_path = resolve_dir(basedir, &flags.data_dir, sep_base);
    let log_path = resolve_dir(basedir, &flags.log_dir, sep_base);

    let http_cert_file = resolve_key_path(&flags.http_tls_cert_file, work_dir, sep_base);
    let http_key_file = resolve_key_path(&flags.http_tls_key_file, work_dir, sep_base);
    let staker_cert_file = resolve_key_path(&flags.staking_tls_cert_file, work_dir, sep_base);
    let staker_key_file = resolve_key_path(&flags.staking_tls_key_file, work_dir, sep_base);

    use FlagValue::{Bool, Int, Text, Uint};

    // One row per flag, iterated once below. Flag names are part of
    // the node binary's command-line contract; do not rename them.
    let table: Vec<(&str, FlagValue)> = vec![
        ("assertions-enabled", Bool(flags.assertions_enabled)),
        ("tx-fee", Uint(flags.tx_fee)),
        ("public-ip", Text(flags.public_ip.clone())),
        ("network-id", Text(flags.network_id.clone())),
        ("xput-server-port", Uint(u64::from(flags.xput_server_port))),
        ("xput-server-enabled", Bool(flags.xput_server_enabled)),
        (
            "signature-verification-enabled",
            Bool(flags.signature_verification_enabled),
        ),
        ("api-admin-enabled", Bool(flags.api_admin_enabled)),
        ("api-ipcs-enabled", Bool(flags.api_ipcs_enabled)),
        ("api-keystore-enabled", Bool(flags.api_keystore_enabled)),
        ("api-metrics-enabled", Bool(flags.api_metrics_enabled)),
        ("http-host", Text(flags.http_host.clone())),
        ("http-port", Text(http_port_string.clone())),
        ("http-tls-enabled", Bool(flags.http_tls_enabled)),
        ("http-tls-cert-file", Text(http_cert_file)),
        ("http-tls-key-file", Text(http_key_file)),
        ("bootstrap-ips", Text(flags.bootstrap_ips.clone())),
        ("bootstrap-ids", Text(flags.bootstrap_ids.clone())),
        ("db-enabled", Bool(flags.db_enabled)),
        ("db-dir", Text(db_path.clone())),
        ("plugin-dir", Text(flags.plugin_dir.clone())),
        ("log-level", Text(flags.log_level.clone())),
        ("log-dir", Text(log_path.clone())),
        ("log-display-level", Text(flags.log_display_level.clone())),
        (
            "snow-avalanche-batch-size",
            Int(i64::from(flags.snow_avalanche_batch_size)),
        ),
        (
            "snow-avalanche-num-parents",
            Int(i64::from(flags.snow_avalanche_num_parents)),
        ),
        ("snow-sample-size", Int(i64::from(flags.snow_sample_size))),
        ("snow-quorum-size", Int(i64::from(flags.snow_quorum_size))),
        (
            "snow-virtuous-commit-threshold",
            Int(i64::from(flags.snow_virtuous_commit_threshold)),
        ),
        (
            "snow-rogue-commit-threshold",
            Int(i64::from(flags.snow_rogue_commit_threshold)),
        ),
        ("p2p-tls-enabled", Bool(flags.p2p_tls_enabled)),
        ("staking-enabled", Bool(flags.staking_enabled)),
        ("staking-port", Text(staking_port_string.clone())),
        ("staking-tls-key-file", Text(staker_key_file.clone())),
        ("staking-tls-cert-file", Text(staker_cert_file.clone())),
        ("api-auth-required", Bool(flags.api_auth_required)),
        ("api-auth-password", Text(flags.api_auth_password.clone())),
        ("min-stake-duration", Text(flags.min_stake_duration.clone())),
        ("whitelisted-subnets", Text(flags.whitelisted_subnets.clone())),
        ("config-file", Text(flags.config_file.clone())),
        ("api-info-enabled", Bool(flags.api_info_enabled)),
        ("conn-meter-max-conns", Int(i64::from(flags.conn_meter_max_conns))),
        (
            "conn-meter-reset-duration",
            Text(flags.conn_meter_reset_duration.clone()),
        ),
        ("ipcs-chain-ids", Text(flags.ipcs_chain_ids.clone())),
        ("ipcs-path", Text(flags.ipcs_path.clone())),
        ("fd-limit", Int(i64::from(flags.fd_limit))),
    ];

    let mut args: Vec<String> = table
        .iter()
        .map(|(name, value)| format!("--{}={}", name, value))
        .collect();

    // In separate-base mode the per-category paths are caller-supplied,
    // so the base directory is passed to the node through its own flag.
    if sep_base {
        args.push(format!("--data-dir={}", basedir));
    }

    let args = remove_empty_flags(&args);

    let metadata = Metadata {
        server_host: flags.public_ip.clone(),
        staking_port: staking_port_string,
        http_port: http_port_string,
        http_tls: flags.http_tls_enabled,
        db_dir: db_path,
        data_dir: data_path,
        logs_dir: log_path,
        log_level: flags.log_level.clone(),
        p2p_tls_enabled: flags.p2p_tls_enabled,
        staking_enabled: flags.staking_enabled,
        staker_cert_path: staker_cert_file,
        staker_key_path: staker_key_file,
    };

    (args, metadata)
}

/// Resolve a storage subpath against the base directory.
///
/// In separate-base mode the configured path is taken verbatim; the
/// caller is responsible for having supplied an absolute or
/// already-correct path.
fn resolve_dir(basedir: &str, subpath: &str, sep_base: bool) -> String {
    if sep_base {
        subpath.to_string()
    } else {
        format!("{}/{}", basedir, subpath)
    }
}

/// Resolve a certificate or key path.
///
/// A non-empty path that doesn't begin with "/" is treated as relative
/// to the launcher's working directory, unless separate-base mode has
/// put the caller in charge of paths. Already-rooted paths pass
/// through unchanged, so resolution is idempotent.
fn resolve_key_path(configured: &str, work_dir: &str, sep_base: bool) -> String {
    if !configured.is_empty() && !configured.starts_with('/') && !sep_base {
        format!("{}/{}", work_dir, configured)
    } else {
        configured.to_string()
    }
}

/// Drop every argument whose value is empty.
///
/// Each entry is trimmed and entries of the form `--flag=` are
/// removed, preserving the relative order of the rest. Note this also
/// drops intentionally-empty string flags (e.g. an empty API auth
/// password); the node binary's own defaults then apply, which is the
/// behavior downstream tooling relies on.
fn remove_empty_flags(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| arg.trim())
        .filter(|arg| !arg.ends_with('='))
        .map(str::to_string)
        .collect()
}
