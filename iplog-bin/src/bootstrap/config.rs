use std::path::{Path, PathBuf};

use anyhow::Result;

use iplog_etc::{Config, ENV_DNS};

const CONFIG_DIR: &str = "iplog";
const CONFIG_FILE: &str = "config.yaml";

/// The configuration file used when none is given on the command line.
pub(crate) fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|it| it.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration from the given file, or the default file when it
/// exists, or fall back to the built-in defaults. The nameservers can be
/// overridden by the environment.
pub(crate) fn load(path: Option<&Path>) -> Result<Config> {
    let mut c = match path {
        Some(path) => read(path)?,
        None => match default_path() {
            Some(path) if path.is_file() => read(&path)?,
            _ => {
                debug!("no config file found, use default config");
                Config::default()
            }
        },
    };

    if let Ok(s) = std::env::var(ENV_DNS) {
        c.apply_dns_env(&s);
    }

    Ok(c)
}

fn read(path: &Path) -> Result<Config> {
    let b = std::fs::read(path)
        .map_err(|e| anyhow!("cannot read config '{}': {}", path.display(), e))?;
    let c = Config::from_yaml(&b[..])
        .map_err(|e| anyhow!("invalid config '{}': {}", path.display(), e))?;
    info!("load config from '{}' ok", path.display());
    Ok(c)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load() -> Result<()> {
        let mut f = tempfile::NamedTempFile::new()?;
        writeln!(f, "database: history.db")?;
        writeln!(f, "validation:")?;
        writeln!(f, "  min_length: 7")?;

        let c = load(Some(f.path()))?;
        assert_eq!(PathBuf::from("history.db"), c.database);
        assert_eq!(7, c.validation.min_length);

        Ok(())
    }

    #[test]
    fn test_load_missing_or_broken() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(load(Some(&dir.path().join("absent.yaml"))).is_err());

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "validation: [1, 2")?;
        assert!(load(Some(&broken)).is_err());

        Ok(())
    }
}
