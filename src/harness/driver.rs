use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::error::{DemoError, Result};

use super::{Harness, command_for_key};

/// Owns a `Harness` and manages raw mode + alternate screen transitions while
/// feeding it key presses.
pub struct CliDriver {
    harness: Harness,
}

impl CliDriver {
    pub fn new(harness: Harness) -> Self {
        Self { harness }
    }

    pub fn run(mut self) -> Result<Harness> {
        let mut stdout = io::stdout();
        self.enter(&mut stdout)?;
        let result = self.run_inner(&mut stdout);
        self.exit(&mut stdout);
        result.map(|_| self.harness)
    }

    fn run_inner(&mut self, stdout: &mut impl Write) -> Result<()> {
        self.harness.controller_mut().on_mounted();
        let mut notice: Option<String> = None;
        self.redraw(stdout, notice.as_deref())?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(command) = command_for_key(&key, self.harness.controller().config()) else {
                continue;
            };

            let outcome = self.harness.apply(command)?;
            if outcome.quit {
                break;
            }
            notice = match outcome.report {
                Some(report) => Some(report.notification()?),
                None => None,
            };
            self.redraw(stdout, notice.as_deref())?;
        }

        self.harness.controller().emit_metrics();
        Ok(())
    }

    fn redraw(&self, stdout: &mut impl Write, notice: Option<&str>) -> Result<()> {
        execute!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        self.harness.write_panel(stdout, "\r\n")?;
        if let Some(text) = notice {
            write!(stdout, "\r\n{text}\r\n")?;
            stdout.flush()?;
        }
        Ok(())
    }

    fn enter(&self, stdout: &mut impl Write) -> Result<()> {
        terminal::enable_raw_mode().map_err(|err| DemoError::Terminal(err.to_string()))?;
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(())
    }

    fn exit(&self, stdout: &mut impl Write) {
        execute!(stdout, Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}
