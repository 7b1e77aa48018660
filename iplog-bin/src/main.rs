#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

use std::path::PathBuf;

use clap::Parser;

use crate::bootstrap::Bootstrap;
use crate::cmd::{
    CommandClear, CommandDelete, CommandHistory, CommandMenu, CommandResolve, Executable,
};
use crate::console::Console;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod bootstrap;
mod cmd;
mod console;

#[derive(Parser)]
#[command(name = "iplog")]
#[command(version)]
#[command(about = "Resolve hostnames and keep a local history of their IP addresses.", long_about = None)]
struct Cli {
    /// Resolve and store IP address for a URL
    #[arg(long)]
    resolve: bool,

    /// Display the database history
    #[arg(long)]
    history: bool,

    /// Delete a record
    #[arg(long)]
    delete: bool,

    /// Clear the database
    #[arg(long)]
    clear: bool,

    /// Print the history as JSON
    #[arg(long, requires = "history")]
    json: bool,

    /// Configuration file in YAML
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Database file, overrides the configured one
    #[arg(long, value_name = "FILE")]
    database: Option<PathBuf>,
}

impl Cli {
    /// The first flag given wins; without any flag the menu is shown.
    fn executable(&self) -> Box<dyn Executable> {
        if self.resolve {
            Box::new(CommandResolve)
        } else if self.history {
            Box::new(CommandHistory::new(self.json))
        } else if self.delete {
            Box::new(CommandDelete)
        } else if self.clear {
            Box::new(CommandClear)
        } else {
            Box::new(CommandMenu)
        }
    }
}

fn init() {
    pretty_env_logger::try_init_timed().ok();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();

    let cli = Cli::parse();

    let mut c = bootstrap::load_config(cli.config.as_deref())?;
    if let Some(database) = &cli.database {
        c.database = Clone::clone(database);
    }

    let bt = Bootstrap::try_from(&c)?;

    let mut console = Console::stdio();
    if let Err(e) = cli.executable().execute(&bt, &mut console).await {
        error!("failed to execute command: {}", e);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        <Cli as CommandFactory>::command().debug_assert();

        let cli = Cli::parse_from(["iplog", "--history", "--json", "--database", "x.db"]);
        assert!(cli.history && cli.json);
        assert_eq!(Some(PathBuf::from("x.db")), cli.database);

        assert!(Cli::try_parse_from(["iplog", "--json"]).is_err());

        let cli = Cli::parse_from(["iplog", "--clear", "--resolve"]);
        assert!(cli.resolve && cli.clear);
    }
}
