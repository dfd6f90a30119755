//! Terminal dev harness for the showcase controller.
//!
//! Keys map to [`HarnessCommand`]s which [`Harness`] applies to its controller,
//! simulating the width measurer (number keys pick a breakpoint) and the grid
//! engine (a drop of the configured dropping item). After each command the
//! harness can print a boxed status panel.

pub mod driver;

use std::io::Write;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::{Value, json};

use crate::Result;
use crate::config::DemoConfig;
use crate::controller::{DemoState, DropReport, LayoutDemoController};
use crate::layout::{BreakpointName, Layout, LayoutItem};
use crate::logging::{HARNESS_TARGET, LogLevel, Logger, event_with_fields, json_str};
use crate::projection::status_lines;
use crate::width::{display_width, pad_to_width};

const KEY_HINTS: &str = "1-9 breakpoint · c compaction · n new layout · d drop · m mount · q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessCommand {
    Mount,
    Breakpoint(BreakpointName),
    CycleCompaction,
    NewLayout,
    Drop,
    Quit,
}

impl HarnessCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::Breakpoint(_) => "breakpoint",
            Self::CycleCompaction => "cycle_compaction",
            Self::NewLayout => "new_layout",
            Self::Drop => "drop",
            Self::Quit => "quit",
        }
    }
}

/// Map a key press to a command. Digits pick the n-th configured breakpoint.
pub fn command_for_key(key: &KeyEvent, config: &DemoConfig) -> Option<HarnessCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(HarnessCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(HarnessCommand::Quit),
        KeyCode::Char('m') => Some(HarnessCommand::Mount),
        KeyCode::Char('c') => Some(HarnessCommand::CycleCompaction),
        KeyCode::Char('n') => Some(HarnessCommand::NewLayout),
        KeyCode::Char('d') => Some(HarnessCommand::Drop),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit.to_digit(10)? as usize - 1;
            config
                .breakpoint_names()
                .nth(index)
                .map(|name| HarnessCommand::Breakpoint(name.to_string()))
        }
        _ => None,
    }
}

/// Result of applying one command.
#[derive(Debug, Clone)]
pub struct HarnessOutcome {
    pub snapshot: Arc<DemoState>,
    pub report: Option<DropReport>,
    pub quit: bool,
}

pub struct Harness {
    controller: LayoutDemoController,
    logger: Option<Logger>,
}

impl Harness {
    pub fn new(controller: LayoutDemoController) -> Self {
        Self {
            controller,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn controller(&self) -> &LayoutDemoController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LayoutDemoController {
        &mut self.controller
    }

    pub fn apply(&mut self, command: HarnessCommand) -> Result<HarnessOutcome> {
        self.log(LogLevel::Debug, "command", [json_str("command", command.name())]);

        let mut report = None;
        let snapshot = match &command {
            HarnessCommand::Mount => self.controller.on_mounted(),
            HarnessCommand::Breakpoint(name) => self.controller.on_breakpoint_change(name)?,
            HarnessCommand::CycleCompaction => self.controller.cycle_compaction_mode(),
            HarnessCommand::NewLayout => self.controller.regenerate_inner_layout(),
            HarnessCommand::Drop => {
                report = Some(self.simulate_drop());
                self.controller.snapshot()
            }
            HarnessCommand::Quit => self.controller.snapshot(),
        };

        Ok(HarnessOutcome {
            snapshot,
            report,
            quit: command == HarnessCommand::Quit,
        })
    }

    /// Replay `commands`, writing the status panel after each one.
    pub fn run_scripted<I>(&mut self, writer: &mut impl Write, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = HarnessCommand>,
    {
        self.write_panel(writer, "\n")?;
        for command in commands {
            let outcome = self.apply(command)?;
            if let Some(report) = outcome.report.as_ref() {
                writeln!(writer, "{}", report.notification()?)?;
            }
            if outcome.quit {
                break;
            }
            self.write_panel(writer, "\n")?;
        }
        self.log(LogLevel::Info, "script_finished", std::iter::empty());
        self.controller.emit_metrics();
        Ok(())
    }

    /// Boxed status lines followed by the key hints.
    pub fn status_panel(&self) -> Vec<String> {
        let mut lines = status_lines(self.controller.state(), self.controller.config());
        lines.push(KEY_HINTS.to_string());

        let width = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);
        let border = "─".repeat(width + 2);
        let mut panel = Vec::with_capacity(lines.len() + 2);
        panel.push(format!("┌{border}┐"));
        for line in &lines {
            panel.push(format!("│ {} │", pad_to_width(line, width)));
        }
        panel.push(format!("└{border}┘"));
        panel
    }

    pub fn write_panel(&self, writer: &mut impl Write, line_end: &str) -> Result<()> {
        for line in self.status_panel() {
            write!(writer, "{line}{line_end}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Drop the configured dropping item below the current inner layout and
    /// relay the resulting layout the way the engine would.
    fn simulate_drop(&mut self) -> DropReport {
        let state = self.controller.snapshot();
        let config = self.controller.config();
        let breakpoint = state.current_breakpoint.clone();
        let mut layout: Layout = state
            .inner_layout(&breakpoint)
            .or_else(|| state.inner_layout(&config.default_breakpoint))
            .cloned()
            .unwrap_or_default();

        let bottom = layout
            .iter()
            .map(|item| item.y.saturating_add(item.h))
            .max()
            .unwrap_or(0);
        let dropped = LayoutItem {
            y: bottom,
            ..config.dropping_item.clone()
        };
        layout.push(dropped.clone());

        let mut all = state.inner_layouts.clone();
        all.insert(breakpoint, layout.clone());

        let event: Value = json!({ "source": "harness", "key": "d" });
        let report = self.controller.on_item_dropped(&layout, Some(&dropped), event);
        self.controller.notify_layout_changed(&layout, &all);
        report
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.logger.as_ref() {
            let event = event_with_fields(level, HARNESS_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}
