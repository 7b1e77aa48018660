use anyhow::Result;
use async_trait::async_trait;

use iplog_core::history;

use crate::bootstrap::Bootstrap;
use crate::console::Console;

pub(crate) struct CommandClear;

#[async_trait]
impl super::Executable for CommandClear {
    async fn execute(&self, bt: &Bootstrap, console: &mut Console) -> Result<()> {
        match history::clear(bt.store.as_ref()) {
            Ok(n) => {
                info!("{} record(s) cleared", n);
                console.success("Database cleared successfully.")?;
            }
            Err(e) => {
                console.error(&format!("Error clearing the database: {}", e))?;
            }
        }
        Ok(())
    }
}
