use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyEventKind},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::event::{Key, Modifiers};
use crate::render::Line;

/// Raw-mode alternate-screen terminal that draws rendered lines.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input, then drain whatever else is pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Redraw the whole screen. Highlighted lines are drawn in reverse video.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (width, height) = self.size()?;
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in lines.iter().take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            if line.highlighted {
                queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(self.stdout, Print(line.to_width(width as usize)))?;
            if line.highlighted {
                queue!(self.stdout, SetAttribute(Attribute::NoReverse))?;
            }
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Extract a key press from a raw terminal event.
/// Release and repeat events are ignored.
pub fn key_press(raw: &CrosstermEvent) -> Option<(Key, Modifiers)> {
    match raw {
        CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            Some((key_event.code.into(), key_event.modifiers.into()))
        }
        _ => None,
    }
}
