use anyhow::Result;
use async_trait::async_trait;

use iplog_core::Outcome;

use crate::bootstrap::Bootstrap;
use crate::console::{Color, Console};

const PROMPT: &str = "Please enter a website address (URL) or type 'back' to quit";

/// Keep resolving hostnames until the user types 'back'.
pub(crate) struct CommandResolve;

#[async_trait]
impl super::Executable for CommandResolve {
    async fn execute(&self, bt: &Bootstrap, console: &mut Console) -> Result<()> {
        loop {
            let input = match console.prompt(PROMPT, Some(Color::Blue))? {
                Some(input) => input,
                None => {
                    // input closed, behave as if 'back' was entered
                    console.warning("Operation aborted by the user.")?;
                    return Ok(());
                }
            };

            let outcome = match bt.pipeline.run(&input).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("failed to store resolved record: {}", e);
                    console.error(&format!("Error: Unable to store the record: {}", e))?;
                    continue;
                }
            };

            match outcome {
                Outcome::Aborted => {
                    console.warning("Operation aborted by the user.")?;
                    return Ok(());
                }
                Outcome::Rejected {
                    candidate,
                    rejection,
                } => {
                    console.error(&format!(
                        "Invalid input '{}': {}. Please enter a valid hostname or URL.",
                        candidate, rejection
                    ))?;
                }
                Outcome::Failed { hostname, .. } => {
                    console.error(&format!("Error: Unable to resolve hostname {}.", hostname))?;
                }
                Outcome::Completed(record) => {
                    console.println("\n")?;
                    console.banner()?;
                    console.success(&format!("Hostname: {}", record.hostname))?;
                    console.println(&format!("IP: {}", record.ip_address))?;
                    console.banner()?;
                    console.println("\n")?;
                }
            }
        }
    }
}
