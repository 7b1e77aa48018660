use anyhow::Result;
use async_trait::async_trait;

use crate::bootstrap::Bootstrap;
use crate::console::{Color, Console};

use super::{CommandDelete, CommandHistory, CommandResolve, Executable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Resolve,
    History,
    Delete,
    Exit,
}

const MENU: &[(&str, MenuAction)] = &[
    ("Resolve and Store IP Address", MenuAction::Resolve),
    ("Display IP History", MenuAction::History),
    ("Delete a record", MenuAction::Delete),
    ("Exit", MenuAction::Exit),
];

/// Pick an entry either by its number or by its label.
fn choose(input: &str) -> Option<MenuAction> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| MENU.get(i)).map(|(_, a)| *a);
    }
    MENU.iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(input))
        .map(|(_, a)| *a)
}

/// The interactive menu, shown again after every action until 'Exit'.
pub(crate) struct CommandMenu;

#[async_trait]
impl super::Executable for CommandMenu {
    async fn execute(&self, bt: &Bootstrap, console: &mut Console) -> Result<()> {
        loop {
            let title = console.paint(Color::Blue, "Select an option");
            console.println(&title)?;
            for (i, (label, _)) in MENU.iter().enumerate() {
                console.println(&format!("  {}) {}", i + 1, label))?;
            }

            let question = format!("Enter your choice (1-{})", MENU.len());
            let action = match console.prompt(&question, None)? {
                Some(input) => match choose(&input) {
                    Some(action) => action,
                    None => {
                        console.warning(&format!(
                            "Invalid choice. Please enter 1-{}.",
                            MENU.len()
                        ))?;
                        continue;
                    }
                },
                None => MenuAction::Exit,
            };

            debug!("menu action: {:?}", action);

            match action {
                MenuAction::Resolve => CommandResolve.execute(bt, console).await?,
                MenuAction::History => CommandHistory::new(false).execute(bt, console).await?,
                MenuAction::Delete => {
                    CommandHistory::new(false).execute(bt, console).await?;
                    CommandDelete.execute(bt, console).await?;
                }
                MenuAction::Exit => {
                    console.warning("Operation aborted by the user.")?;
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cmd::testing;
    use crate::console;

    use super::*;

    #[test]
    fn test_choose() {
        assert_eq!(Some(MenuAction::Resolve), choose("1"));
        assert_eq!(Some(MenuAction::Exit), choose(" 4 "));
        assert_eq!(Some(MenuAction::History), choose("display ip history"));
        assert_eq!(None, choose("0"));
        assert_eq!(None, choose("5"));
        assert_eq!(None, choose("quit"));
    }

    #[tokio::test]
    async fn test_menu() -> Result<()> {
        let (bt, store) = testing::bootstrap()?;
        let (mut c, out) = console::testing::console("1\nexample.com\nback\n2\n9\n3\n404\n4\n");

        CommandMenu.execute(&bt, &mut c).await?;

        let out = out.content();
        assert!(out.contains("  1) Resolve and Store IP Address\n"));
        assert!(out.contains("Hostname: example.com"));
        assert!(out.contains("│ example.com │ 93.184.216.34 │"));
        assert!(out.contains("Invalid choice. Please enter 1-4."));
        assert!(out.contains("No record found with ID 404."));
        assert!(out.ends_with("Operation aborted by the user.\n"));

        assert_eq!(1, store.list_all()?.len());

        Ok(())
    }

    #[tokio::test]
    async fn test_menu_eof() -> Result<()> {
        let (bt, _) = testing::bootstrap()?;
        let (mut c, out) = console::testing::console("");

        CommandMenu.execute(&bt, &mut c).await?;
        assert!(out.content().ends_with("Operation aborted by the user.\n"));

        Ok(())
    }
}
