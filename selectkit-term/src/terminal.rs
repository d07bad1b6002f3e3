//! Raw-mode crossterm terminal.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, execute, queue, terminal};
use selectkit::Key;

use crate::render::Frame;

/// Owns the terminal while the picker runs. Dropping it restores the
/// terminal.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Show)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Block until the next key press.
    pub fn read_key(&self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in frame.lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            if line.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if line.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            if line.reversed {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset)
            )?;
        }

        let (x, y) = frame.cursor;
        queue!(self.stdout, cursor::MoveTo(x, y))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Engine key for a crossterm key code.
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::Esc), Key::Escape);
        assert_eq!(map_key(KeyCode::Char('q')), Key::Char('q'));
        assert_eq!(map_key(KeyCode::F(5)), Key::Other);
    }
}
