use anyhow::Result;
use async_trait::async_trait;

use iplog_core::{history, IplogError};

use crate::bootstrap::Bootstrap;
use crate::console::Console;

const PROMPT: &str = "Enter the ID of the record you want to delete";

/// Ask for a record id and delete that record.
pub(crate) struct CommandDelete;

#[async_trait]
impl super::Executable for CommandDelete {
    async fn execute(&self, bt: &Bootstrap, console: &mut Console) -> Result<()> {
        let raw = match console.prompt(PROMPT, None)? {
            Some(raw) => raw,
            None => return Ok(()),
        };

        match history::delete_record(bt.store.as_ref(), &raw) {
            Ok(record) => {
                console.success(&format!("Record with ID {} deleted successfully.", record.id))?;
            }
            Err(IplogError::InvalidIdentifier(_)) => {
                console.warning("Invalid ID. Please enter a valid numeric ID.")?;
            }
            Err(IplogError::RecordNotFound(id)) => {
                console.warning(&format!("No record found with ID {}.", id))?;
            }
            Err(e) => {
                error!("failed to delete record '{}': {}", raw.trim(), e);
                console.error(&format!("Error deleting the record: {}", e))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cmd::testing;
    use crate::cmd::Executable;
    use crate::console;

    use super::*;

    #[tokio::test]
    async fn test_delete() -> Result<()> {
        let (bt, store) = testing::bootstrap()?;
        let id = store.insert("example.com", "93.184.216.34")?;
        let (mut c, out) = console::testing::console(&format!("{}\n", id));

        CommandDelete.execute(&bt, &mut c).await?;

        assert!(out
            .content()
            .contains(&format!("Record with ID {} deleted successfully.", id)));
        assert!(store.list_all()?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_invalid_id() -> Result<()> {
        let (bt, store) = testing::bootstrap()?;
        store.insert("example.com", "93.184.216.34")?;

        let (mut c, out) = console::testing::console("xyz\n");
        CommandDelete.execute(&bt, &mut c).await?;
        assert!(out
            .content()
            .contains("Invalid ID. Please enter a valid numeric ID."));

        let (mut c, out) = console::testing::console("404\n");
        CommandDelete.execute(&bt, &mut c).await?;
        assert!(out.content().contains("No record found with ID 404."));

        assert_eq!(1, store.list_all()?.len());

        Ok(())
    }
}
