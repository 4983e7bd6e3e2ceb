use std::io::BufRead;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;

use crate::error::Result;
use crate::snake::Direction::{self, *};

pub const HELP_MESSAGE: &str = "Unknown command. Use: up, down, left, right, or exit.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
    Interrupt,
    /// Unrecognised line input, trimmed.
    Invalid(String),
}

/// Blocking source of player commands, one per call.
pub trait InputSource {
    fn next_command(&mut self) -> Result<Command>;
}

/// Raw keypresses from the terminal. Needs raw mode to be enabled.
pub struct KeyInput;

impl InputSource for KeyInput {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            if let Event::Key(ev) = event::read()? {
                if ev.kind == KeyEventKind::Release {
                    continue;
                }
                match parse_key(&ev) {
                    Some(cmd) => return Ok(cmd),
                    None => trace!("Ignoring key {:?}", ev.code),
                }
            }
        }
    }
}

/// Newline-terminated text commands. End of input counts as quitting.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_command(&mut self) -> Result<Command> {
        // Bytes that aren't UTF-8 end up as an invalid command, not an error
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Command::Quit);
        }
        Ok(parse_line(&String::from_utf8_lossy(&buf)))
    }
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();

    match trimmed.to_lowercase().as_str() {
        "up" => Command::Move(Up),
        "down" => Command::Move(Down),
        "left" => Command::Move(Left),
        "right" => Command::Move(Right),
        "exit" | "quit" | "q" => Command::Quit,
        _ => Command::Invalid(trimmed.to_string()),
    }
}

/// `None` for keys the game doesn't care about.
pub fn parse_key(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Interrupt);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Move(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Move(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Move(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Move(Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_line_directions() {
        assert_eq!(parse_line("up\n"), Command::Move(Up));
        assert_eq!(parse_line("  DOWN "), Command::Move(Down));
        assert_eq!(parse_line("Left\r\n"), Command::Move(Left));
        assert_eq!(parse_line("right"), Command::Move(Right));
    }

    #[test]
    fn test_parse_line_quit_synonyms() {
        for word in ["exit", "EXIT", "quit", " q "] {
            assert_eq!(parse_line(word), Command::Quit);
        }
    }

    #[test]
    fn test_parse_line_invalid() {
        assert_eq!(parse_line(" jump \n"), Command::Invalid("jump".into()));
        assert_eq!(parse_line("\n"), Command::Invalid(String::new()));
    }

    #[test]
    fn test_line_input_sequence_and_eof() {
        let mut input = LineInput::new(Cursor::new("right\njump\nexit\n"));
        assert_eq!(input.next_command().unwrap(), Command::Move(Right));
        assert_eq!(input.next_command().unwrap(), Command::Invalid("jump".into()));
        assert_eq!(input.next_command().unwrap(), Command::Quit);
        assert_eq!(input.next_command().unwrap(), Command::Quit);
    }

    #[test]
    fn test_line_input_non_utf8_is_invalid() {
        let mut input = LineInput::new(Cursor::new(b"\xffjump\nright\n".to_vec()));
        assert_eq!(input.next_command().unwrap(), Command::Invalid("\u{FFFD}jump".into()));
        assert_eq!(input.next_command().unwrap(), Command::Move(Right));
        assert_eq!(input.next_command().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key(&key(KeyCode::Up, KeyModifiers::NONE)), Some(Command::Move(Up)));
        assert_eq!(parse_key(&key(KeyCode::Char('a'), KeyModifiers::NONE)), Some(Command::Move(Left)));
        assert_eq!(parse_key(&key(KeyCode::Esc, KeyModifiers::NONE)), Some(Command::Quit));
        assert_eq!(parse_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(Command::Quit));
        assert_eq!(parse_key(&key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(parse_key(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert_eq!(parse_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Command::Interrupt));
        assert_eq!(parse_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }
}
