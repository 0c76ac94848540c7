use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::EmailConfig;

/// Get the email config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("tally").join("email.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the email config from a specific path.
/// If the file doesn't exist, returns defaults.
/// If the file is corrupted, backs it up as .bak and returns defaults.
pub fn read_config_from(path: &Path) -> EmailConfig {
    if !path.exists() {
        return EmailConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<EmailConfig>(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                let bak = path.with_extension("toml.bak");
                let _ = fs::copy(path, &bak);
                eprintln!(
                    "warning: could not parse {} (backed up as {}): {}",
                    path.display(),
                    bak.display(),
                    e
                );
                EmailConfig::default()
            }
        },
        Err(_) => EmailConfig::default(),
    }
}

/// Read the email config from the default location.
pub fn read_config() -> EmailConfig {
    read_config_from(&config_path())
}

/// Write the email config to a specific path.
pub fn write_config_to(path: &Path, cfg: &EmailConfig) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content =
        toml::to_string_pretty(cfg).map_err(|e| std::io::Error::other(e.to_string()))?;
    fs::write(path, content)
}

/// Write the email config to the default location.
pub fn write_config(cfg: &EmailConfig) -> Result<(), std::io::Error> {
    write_config_to(&config_path(), cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tally").join("email.toml");
        (tmp, path)
    }

    #[test]
    fn test_missing_config_is_default() {
        let (_tmp, path) = temp_config();
        assert_eq!(read_config_from(&path), EmailConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let (_tmp, path) = temp_config();
        let cfg = EmailConfig {
            api_key: "SG.secret".into(),
            from_email: "bot@example.com".into(),
            from_name: "Tally".into(),
            to_email: "me@example.com".into(),
            to_name: "Me".into(),
        };
        write_config_to(&path, &cfg).unwrap();
        assert_eq!(read_config_from(&path), cfg);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let (_tmp, path) = temp_config();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "api_key = \"SG.key\"\n").unwrap();
        let cfg = read_config_from(&path);
        assert_eq!(cfg.api_key, "SG.key");
        assert_eq!(cfg.from_email, "");
        assert!(!cfg.is_configured());
    }

    #[test]
    fn test_corrupted_config_backup() {
        let (_tmp, path) = temp_config();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not valid toml [[[").unwrap();
        let cfg = read_config_from(&path);
        assert_eq!(cfg, EmailConfig::default());
        let bak = path.with_extension("toml.bak");
        assert!(bak.exists());
    }
}
