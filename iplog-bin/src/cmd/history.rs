use anyhow::Result;
use async_trait::async_trait;

use iplog_core::history;

use crate::bootstrap::Bootstrap;
use crate::console::{render_table, Console};

/// Print every stored record, as a table or as JSON.
pub(crate) struct CommandHistory {
    json: bool,
}

impl CommandHistory {
    pub(crate) fn new(json: bool) -> Self {
        Self { json }
    }
}

#[async_trait]
impl super::Executable for CommandHistory {
    async fn execute(&self, bt: &Bootstrap, console: &mut Console) -> Result<()> {
        let records = match history::list(bt.store.as_ref()) {
            Ok(records) => records,
            Err(e) => {
                error!("failed to list records: {}", e);
                console.error(&format!("Error reading the database: {}", e))?;
                return Ok(());
            }
        };

        if self.json {
            console.println(&serde_json::to_string_pretty(&records)?)?;
            return Ok(());
        }

        if records.is_empty() {
            console.println("No IP addresses in the database.")?;
            return Ok(());
        }

        console.println("\n")?;
        console.banner()?;
        console.println(&render_table(&records[..]))?;
        console.banner()?;
        console.println("")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use iplog_core::ResolvedRecord;

    use crate::cmd::testing;
    use crate::cmd::Executable;
    use crate::console;

    use super::*;

    #[tokio::test]
    async fn test_history_empty() -> Result<()> {
        let (bt, _) = testing::bootstrap()?;
        let (mut c, out) = console::testing::console("");

        CommandHistory::new(false).execute(&bt, &mut c).await?;
        assert_eq!("No IP addresses in the database.\n", out.content());

        Ok(())
    }

    #[tokio::test]
    async fn test_history_table() -> Result<()> {
        let (bt, store) = testing::bootstrap()?;
        let id = store.insert("example.com", "93.184.216.34")?;
        let (mut c, out) = console::testing::console("");

        CommandHistory::new(false).execute(&bt, &mut c).await?;

        let out = out.content();
        assert!(out.contains("│ Hostname    │ IP Address    │"));
        assert!(out.contains(&format!("│ {} │ example.com │ 93.184.216.34 │", id)));

        Ok(())
    }

    #[tokio::test]
    async fn test_history_json() -> Result<()> {
        let (bt, store) = testing::bootstrap()?;
        store.insert("example.com", "93.184.216.34")?;
        store.insert("example.net", "93.184.216.35")?;
        let (mut c, out) = console::testing::console("");

        CommandHistory::new(true).execute(&bt, &mut c).await?;

        let records: Vec<ResolvedRecord> = serde_json::from_str(&out.content())?;
        assert_eq!(2, records.len());
        assert_eq!("example.net", records[1].hostname);

        Ok(())
    }
}
