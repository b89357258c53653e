use std::io::{self, Write};

use console::{style, Term};

use super::{Line, LineClass};

/// Writes rendered lines to stdout, styled when the terminal supports it.
pub struct Terminal {
    term: Term,
}

impl Terminal {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Redraws the whole screen, then prints the prompt.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        for line in lines {
            self.term.write_line(&styled(line))?;
        }
        self.prompt()
    }

    pub fn print(&mut self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            self.term.write_line(&styled(line))?;
        }
        self.prompt()
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.term, "{} ", style(">").cyan().bold())?;
        self.term.flush()
    }
}

fn styled(line: &Line) -> String {
    let text = line.text.as_str();
    match line.class {
        LineClass::Brand => style(text).magenta().bold().to_string(),
        LineClass::Heading => style(text).bold().underlined().to_string(),
        LineClass::Text | LineClass::Paragraph => text.to_string(),
        LineClass::Hint => style(text).dim().to_string(),
        LineClass::Status => style(text).cyan().to_string(),
        LineClass::Error => style(text).red().bold().to_string(),
        LineClass::Title => style(text).bold().to_string(),
        LineClass::Link => style(text).blue().underlined().to_string(),
        LineClass::Tabs => style(text).yellow().to_string(),
        LineClass::Code => style(text).cyan().to_string(),
        LineClass::Placeholder => style(text).italic().dim().to_string(),
    }
}
