use std::io::{Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::ClearType;

use crate::error::Result;

/// Where frames and status lines go.
pub trait Screen {
    fn setup(&mut self) -> Result<()> {
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        Ok(())
    }

    /// Clears whatever was shown before and draws `frame`, leaving the
    /// cursor on the line below it.
    fn draw_frame(&mut self, frame: &str) -> Result<()>;

    fn show_status(&mut self, message: &str) -> Result<()>;
}

pub struct TermManager {
    stdout: Stdout,
    raw: bool,
}

impl TermManager {
    /// `raw` is needed for keypress input; line input keeps the terminal
    /// in cooked mode so the player can see what they type.
    pub fn new(raw: bool) -> Self {
        TermManager { stdout: stdout(), raw }
    }

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        if option {
            terminal::enable_raw_mode()?;
        } else {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        if option {
            execute!(self.stdout, cursor::Show)?;
        } else {
            execute!(self.stdout, cursor::Hide)?;
        }
        Ok(())
    }
}

impl Screen for TermManager {
    fn setup(&mut self) -> Result<()> {
        if self.raw {
            self.set_raw_mode(true)?;
            self.set_cursor_visibility(false)?;
        }
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if self.raw {
            self.set_raw_mode(false)?;
            self.set_cursor_visibility(true)?;
        }
        Ok(())
    }

    fn draw_frame(&mut self, frame: &str) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        // Explicit positioning, since raw mode doesn't return the carriage on \n
        let mut y = 0;
        for line in frame.lines() {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print(line))?;
            y += 1;
        }
        queue!(self.stdout, cursor::MoveTo(0, y))?;

        self.stdout.flush()?;
        Ok(())
    }

    fn show_status(&mut self, message: &str) -> Result<()> {
        queue!(self.stdout, style::Print(message), style::Print("\r\n"))?;
        self.stdout.flush()?;
        Ok(())
    }
}
