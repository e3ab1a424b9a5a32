//! Output sink for display units.
//!
//! All terminal output goes through a [`Console`], which owns the writer, the
//! colour switch and the animation pacing. Tests use `Console<Vec<u8>>`.

use super::DisplayUnit;
use super::progress::{ProgressPlan, bar_width_for};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use std::io::{self, IsTerminal, Stdout, Write};
use std::ops::{Deref, DerefMut};
use std::thread;
use std::time::Duration;

const FALLBACK_COLUMNS: usize = 80;

pub struct Console<W: Write> {
    out: W,
    pub step_delay: Duration,
    pub color: bool,
    /// Redraw progress frames in place with ANSI cursor movement.
    pub interactive: bool,
    pub columns: usize,
}

impl Console<Stdout> {
    /// Console on stdout; interactive and coloured only when stdout is a terminal.
    pub fn stdout(cfg: &Config) -> Self {
        let out = io::stdout();
        let tty = out.is_terminal();
        let columns = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(FALLBACK_COLUMNS);
        Self {
            out,
            step_delay: cfg.step_delay,
            color: cfg.color && tty,
            interactive: tty,
            columns,
        }
    }
}

impl<W: Write> Console<W> {
    /// Non-interactive, uncoloured console without delay.
    pub fn plain(out: W) -> Self {
        Self {
            out,
            step_delay: Duration::ZERO,
            color: false,
            interactive: false,
            columns: FALLBACK_COLUMNS,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn style_title(&self, s: &str) -> String {
        if self.color {
            s.bold().italic().to_string()
        } else {
            s.to_string()
        }
    }

    fn style_header(&self, s: &str) -> String {
        if self.color {
            s.white().on_black().bold().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn print(&mut self, unit: &DisplayUnit) -> Result<()> {
        match unit {
            DisplayUnit::Table(table) => {
                let lines = table.render_with(|s| self.style_title(s), |s| self.style_header(s));
                writeln!(self.out)?;
                for line in lines {
                    writeln!(self.out, "{line}")?;
                }
            }
            DisplayUnit::Text(text) => {
                let text = if self.color {
                    text.dimmed().to_string()
                } else {
                    text.clone()
                };
                writeln!(self.out, "{text}")?;
            }
            DisplayUnit::Progress(plan) => {
                self.play(plan)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn print_all(&mut self, units: &[DisplayUnit]) -> Result<()> {
        for unit in units {
            self.print(unit)?;
        }
        Ok(())
    }

    /// Step through the plan, advancing every bar by one day's delta per step.
    ///
    /// Blocks for `steps * step_delay`. Returns the number of steps taken, which is
    /// `n - 1` for `n` days and zero when there are fewer than two days. An empty
    /// plan writes nothing.
    pub fn play(&mut self, plan: &ProgressPlan) -> Result<usize> {
        if plan.dates.is_empty() {
            return Ok(0);
        }
        let width = bar_width_for(self.columns);
        let height = plan.frame_height();
        let interactive = self.interactive;
        let delay = self.step_delay;

        let mut out = CursorGuard::hide(&mut self.out, interactive)?;
        write_frame(&mut *out, interactive, plan, 0, width)?;

        let mut taken = 0;
        for step in 1..=plan.steps() {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            if interactive {
                write!(out, "\x1b[{height}A")?;
                write_frame(&mut *out, interactive, plan, step, width)?;
            }
            taken += 1;
        }

        if !interactive && taken > 0 {
            write_frame(&mut *out, interactive, plan, taken, width)?;
        }
        Ok(taken)
    }
}

fn write_frame<W: Write>(
    out: &mut W,
    interactive: bool,
    plan: &ProgressPlan,
    step: usize,
    width: usize,
) -> io::Result<()> {
    for line in plan.frame(step, width) {
        if interactive {
            write!(out, "\x1b[2K")?;
        }
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Hides the cursor on construction (when `active`) and shows it again on Drop.
struct CursorGuard<'a, W: Write> {
    out: &'a mut W,
    active: bool,
}

impl<'a, W: Write> CursorGuard<'a, W> {
    fn hide(out: &'a mut W, active: bool) -> io::Result<Self> {
        if active {
            write!(out, "\x1b[?25l")?;
        }
        Ok(Self { out, active })
    }
}

impl<W: Write> Deref for CursorGuard<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.out
    }
}

impl<W: Write> DerefMut for CursorGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        self.out
    }
}

impl<W: Write> Drop for CursorGuard<'_, W> {
    fn drop(&mut self) {
        if self.active {
            let _ = write!(self.out, "\x1b[?25h");
            let _ = self.out.flush();
        }
    }
}
