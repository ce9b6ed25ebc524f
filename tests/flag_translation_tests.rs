mod flag_translation_tests {
    use std::io::Write;
    use tempfile::NamedTempFile;

    use avalaunch::config_loader::load_flags;
    use avalaunch::node::{flags_to_args, Flags, Metadata};

    const WORK_DIR: &str = "/opt/avalaunch";

    fn write_flags_file(yaml: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();
        temp_file
    }

    /// Full pipeline: YAML flags file through to launch arguments and
    /// metadata, with paths joined under a common base directory.
    #[test]
    fn test_file_to_args_joined_base() {
        let temp_file = write_flags_file(
            r#"
assertions_enabled: true
tx_fee: 1000000
public_ip: "10.0.0.5"
network_id: "local"
http_host: "0.0.0.0"
http_port: 9650
staking_enabled: true
staking_port: 9651
p2p_tls_enabled: true
db_enabled: true
db_dir: "db"
data_dir: "data"
log_dir: "logs"
log_level: "debug"
snow_sample_size: 2
snow_quorum_size: 2
"#,
        );

        let flags = load_flags(temp_file.path()).unwrap();
        let (args, metadata) = flags_to_args(&flags, "/data/node1", false, WORK_DIR);

        assert!(args.contains(&"--public-ip=10.0.0.5".to_string()));
        assert!(args.contains(&"--network-id=local".to_string()));
        assert!(args.contains(&"--db-dir=/data/node1/db".to_string()));
        assert!(args.contains(&"--log-dir=/data/node1/logs".to_string()));
        assert!(args.contains(&"--snow-sample-size=2".to_string()));
        assert!(args.contains(&"--staking-enabled=true".to_string()));
        assert!(!args.iter().any(|a| a.starts_with("--data-dir=")));

        assert_eq!(metadata.server_host, "10.0.0.5");
        assert_eq!(metadata.http_port, "9650");
        assert_eq!(metadata.staking_port, "9651");
        assert_eq!(metadata.db_dir, "/data/node1/db");
        assert_eq!(metadata.data_dir, "/data/node1/data");
        assert_eq!(metadata.logs_dir, "/data/node1/logs");
        assert_eq!(metadata.log_level, "debug");
        assert!(metadata.staking_enabled);
        assert!(metadata.p2p_tls_enabled);
    }

    /// Separate-base mode: configured paths are verbatim and the base
    /// directory travels through its own flag instead.
    #[test]
    fn test_file_to_args_separate_base() {
        let temp_file = write_flags_file(
            r#"
public_ip: "10.0.0.5"
network_id: "local"
http_port: 9650
staking_port: 9651
db_dir: "/custom/db"
data_dir: "/custom/data"
log_dir: "/custom/logs"
log_level: "info"
staking_tls_key_file: "/etc/staking/staker.key"
staking_tls_cert_file: "/etc/staking/staker.crt"
"#,
        );

        let flags = load_flags(temp_file.path()).unwrap();
        let (args, metadata) = flags_to_args(&flags, "/data/node1", true, WORK_DIR);

        let data_dir_args: Vec<_> = args
            .iter()
            .filter(|a| a.starts_with("--data-dir="))
            .collect();
        assert_eq!(data_dir_args, vec!["--data-dir=/data/node1"]);

        assert!(args.contains(&"--db-dir=/custom/db".to_string()));
        assert_eq!(metadata.db_dir, "/custom/db");
        assert_eq!(metadata.data_dir, "/custom/data");
        assert_eq!(metadata.logs_dir, "/custom/logs");
        assert_eq!(metadata.staker_key_path, "/etc/staking/staker.key");
        assert_eq!(metadata.staker_cert_path, "/etc/staking/staker.crt");
    }

    /// A sparse flags file produces a short argument list: every
    /// empty-valued flag is elided, but metadata still reports the
    /// resolved (empty or joined) values.
    #[test]
    fn test_sparse_file_elides_empty_flags() {
        let temp_file = write_flags_file("network_id: \"local\"\n");

        let flags = load_flags(temp_file.path()).unwrap();
        let (args, metadata) = flags_to_args(&flags, "/data/node1", false, WORK_DIR);

        for arg in &args {
            assert!(!arg.trim().ends_with('='), "empty flag survived: {}", arg);
        }
        assert!(args.contains(&"--network-id=local".to_string()));
        assert!(!args.iter().any(|a| a.starts_with("--public-ip=")));
        assert!(!args.iter().any(|a| a.starts_with("--http-tls-cert-file=")));

        assert_eq!(metadata.server_host, "");
        assert_eq!(metadata.log_level, "");
        assert_eq!(metadata.db_dir, "/data/node1/");
    }

    /// Relative certificate/key paths anchor to the launcher's working
    /// directory outside separate-base mode.
    #[test]
    fn test_relative_staking_key_resolution() {
        let temp_file = write_flags_file(
            r#"
network_id: "local"
staking_enabled: true
staking_tls_key_file: "keys/staker.key"
staking_tls_cert_file: "keys/staker.crt"
"#,
        );

        let flags = load_flags(temp_file.path()).unwrap();
        let (args, metadata) = flags_to_args(&flags, "/data/node1", false, WORK_DIR);

        assert!(args.contains(&"--staking-tls-key-file=/opt/avalaunch/keys/staker.key".to_string()));
        assert!(args.contains(&"--staking-tls-cert-file=/opt/avalaunch/keys/staker.crt".to_string()));
        assert_eq!(metadata.staker_key_path, "/opt/avalaunch/keys/staker.key");
        assert_eq!(metadata.staker_cert_path, "/opt/avalaunch/keys/staker.crt");
    }

    /// The metadata record round-trips through JSON, which is how a
    /// supervising controller persists it between runs.
    #[test]
    fn test_metadata_json_round_trip() {
        let flags = Flags::local_network();
        let (_, metadata) = flags_to_args(&flags, "/data/node1", false, WORK_DIR);

        let json = serde_json::to_string_pretty(&metadata).unwrap();
        assert!(json.contains("\"http_port\": \"9650\""));
        assert!(json.contains("\"staking_port\": \"9651\""));

        let restored: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, metadata);
    }

    /// Same input, same output: the argument list is reproducible.
    #[test]
    fn test_translation_is_reproducible() {
        let temp_file = write_flags_file(
            r#"
public_ip: "10.0.0.5"
network_id: "local"
http_port: 9650
"#,
        );

        let flags = load_flags(temp_file.path()).unwrap();
        let (first, first_meta) = flags_to_args(&flags, "/data/node1", false, WORK_DIR);
        let (second, second_meta) = flags_to_args(&flags, "/data/node1", false, WORK_DIR);

        assert_eq!(first, second);
        assert_eq!(first_meta, second_meta);
    }
}
