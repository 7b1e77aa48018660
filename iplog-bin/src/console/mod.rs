use std::io::{self, BufRead, IsTerminal, Write};

pub(crate) use table::render_table;

mod table;

const BANNER_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Color {
    fn code(&self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Red => "\x1b[31m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Terminal input and output of the commands.
pub(crate) struct Console {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
    colored: bool,
}

impl Console {
    pub(crate) fn new(
        input: Box<dyn BufRead + Send>,
        output: Box<dyn Write + Send>,
        colored: bool,
    ) -> Self {
        Self {
            input,
            output,
            colored,
        }
    }

    /// Colors are used only on a terminal, and never when `NO_COLOR` is set.
    pub(crate) fn stdio() -> Self {
        let colored = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(
            Box::new(io::BufReader::new(io::stdin())),
            Box::new(io::stdout()),
            colored,
        )
    }

    pub(crate) fn paint(&self, color: Color, s: &str) -> String {
        if self.colored {
            format!("{}{}{}", color.code(), s, RESET)
        } else {
            s.to_string()
        }
    }

    pub(crate) fn println(&mut self, s: &str) -> io::Result<()> {
        writeln!(self.output, "{}", s)
    }

    pub(crate) fn success(&mut self, s: &str) -> io::Result<()> {
        let s = self.paint(Color::Green, s);
        self.println(&s)
    }

    pub(crate) fn warning(&mut self, s: &str) -> io::Result<()> {
        let s = self.paint(Color::Yellow, s);
        self.println(&s)
    }

    pub(crate) fn error(&mut self, s: &str) -> io::Result<()> {
        let s = self.paint(Color::Red, s);
        self.println(&s)
    }

    pub(crate) fn banner(&mut self) -> io::Result<()> {
        self.println(&"*".repeat(BANNER_WIDTH))
    }

    /// Print the question and read one line. Returns `None` once the input is exhausted.
    /// Bytes which are not valid UTF-8 are replaced rather than failing the read.
    pub(crate) fn prompt(
        &mut self,
        question: &str,
        color: Option<Color>,
    ) -> io::Result<Option<String>> {
        let question = match color {
            Some(color) => self.paint(color, question),
            None => question.to_string(),
        };
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;

        let mut buf = vec![];
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt() -> io::Result<()> {
        let (mut c, out) = testing::console("example.com\r\nback\n");

        assert_eq!(Some("example.com".to_string()), c.prompt("Host", None)?);
        assert_eq!(Some("back".to_string()), c.prompt("Host", Some(Color::Blue))?);
        assert_eq!(None, c.prompt("Host", None)?);
        assert_eq!("Host: Host: Host: \n", out.content());

        Ok(())
    }

    #[test]
    fn test_prompt_invalid_utf8() -> io::Result<()> {
        let (mut c, _) = testing::console(b"\xff\xfe\nexample.com\n");

        assert_eq!(Some("\u{FFFD}\u{FFFD}".to_string()), c.prompt("Host", None)?);
        assert_eq!(Some("example.com".to_string()), c.prompt("Host", None)?);
        assert_eq!(None, c.prompt("Host", None)?);

        Ok(())
    }

    #[test]
    fn test_paint() {
        let (c, _) = testing::console("");
        assert_eq!("ok", c.paint(Color::Green, "ok"));

        let c = Console::new(Box::new(io::empty()), Box::new(io::sink()), true);
        assert_eq!("\x1b[31mfailed\x1b[0m", c.paint(Color::Red, "failed"));
    }
}
