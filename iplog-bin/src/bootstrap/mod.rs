use std::sync::Arc;

use iplog_core::resolver::{self, Resolver};
use iplog_core::{Pipeline, RecordStore, SqliteStore, Validator};
use iplog_etc::Config;

pub(crate) use config::load as load_config;

mod config;

/// Everything a command needs, built once at startup.
pub(crate) struct Bootstrap {
    pub(crate) store: Arc<dyn RecordStore>,
    pub(crate) pipeline: Pipeline,
}

impl Bootstrap {
    pub(crate) fn new(
        store: Arc<dyn RecordStore>,
        resolver: Arc<dyn Resolver>,
        validator: Validator,
    ) -> Self {
        let pipeline = Pipeline::new(validator, resolver, Clone::clone(&store));
        Self { store, pipeline }
    }
}

impl TryFrom<&Config> for Bootstrap {
    type Error = anyhow::Error;

    fn try_from(c: &Config) -> std::result::Result<Self, Self::Error> {
        let store = SqliteStore::open(&c.database)
            .map_err(|e| anyhow!("cannot open database '{}': {}", c.database.display(), e))?;
        let store: Arc<dyn RecordStore> = Arc::new(store);
        let resolver = resolver::from_config(&c.resolver)?;
        let validator = Validator::from(&c.validation);

        Ok(Bootstrap::new(store, resolver, validator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut c = Config {
            database: dir.path().join("ip_addresses.db"),
            ..Default::default()
        };
        c.resolver
            .overrides
            .insert("example.com".to_string(), vec!["93.184.216.34".to_string()]);

        let bt = Bootstrap::try_from(&c)?;
        assert!(c.database.exists());

        bt.pipeline.run("https://example.com/").await?;
        assert_eq!(1, bt.store.list_all()?.len());

        Ok(())
    }

    #[test]
    fn test_bootstrap_invalid_database() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let c = Config {
            database: dir.path().join("absent").join("ip_addresses.db"),
            ..Default::default()
        };
        assert!(Bootstrap::try_from(&c).is_err());

        Ok(())
    }
}
