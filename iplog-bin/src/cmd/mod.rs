use anyhow::Result;

pub(crate) use clear::CommandClear;
pub(crate) use delete::CommandDelete;
pub(crate) use history::CommandHistory;
pub(crate) use menu::CommandMenu;
pub(crate) use resolve::CommandResolve;

use crate::bootstrap::Bootstrap;
use crate::console::Console;

mod clear;
mod delete;
mod history;
mod menu;
mod resolve;

/// A command only fails when the console itself is broken; every failure of
/// the operation is reported to the user and the command still succeeds.
#[async_trait::async_trait]
pub(crate) trait Executable: 'static + Send + Sync {
    async fn execute(&self, bt: &Bootstrap, console: &mut Console) -> Result<()>;
}
