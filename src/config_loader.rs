use crate::node::Flags;
use log::info;
use std::fs::File;
use std::path::Path;

/// Errors raised while loading a node flags file.
///
/// Only structural failures are reported here; the values themselves
/// are never validated, since the node binary's own argument parser is
/// the authority on what is acceptable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read flags file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse flags file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load a node `Flags` record from a YAML file.
///
/// Fields absent from the file take their zero value (empty string,
/// 0, false); the translator later elides empty-valued flags from the
/// argument list.
pub fn load_flags(path: &Path) -> Result<Flags, ConfigError> {
    info!("Loading node flags from: {:?}", path);

    let file = File::open(path)?;
    let flags: Flags = serde_yaml::from_reader(file)?;

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_flags_file() {
        let yaml = r#"
public_ip: "10.0.0.5"
network_id: "local"
http_port: 9650
staking_port: 9651
staking_enabled: true
db_dir: "db"
log_dir: "logs"
log_level: "debug"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let flags = load_flags(temp_file.path()).unwrap();
        assert_eq!(flags.public_ip, "10.0.0.5");
        assert_eq!(flags.http_port, 9650);
        assert!(flags.staking_enabled);
        assert_eq!(flags.log_level, "debug");

        // Unnamed fields fall back to zero values, not errors.
        assert_eq!(flags.bootstrap_ips, "");
        assert_eq!(flags.tx_fee, 0);
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "http_port: [not a port").unwrap();

        let err = load_flags(temp_file.path());
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_flags(Path::new("/nonexistent/flags.yaml"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }
}
