use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::Heading;

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Turn(Heading),
    Pause,
    Confirm,
    /// Any other key; only meaningful on the start screen.
    Other,
    Quit,
}

/// Translates terminal key events into [`GameInput`]s.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    poll_timeout: Duration,
}

impl InputHandler {
    #[must_use]
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// Waits up to the poll timeout for one key press.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(map_key(key))),
            _ => Ok(None),
        }
    }
}

/// Maps one key press to a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameInput::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Turn(Heading::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Turn(Heading::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Turn(Heading::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Turn(Heading::Right),
        KeyCode::Char('p' | 'P' | ' ') => GameInput::Pause,
        KeyCode::Enter => GameInput::Confirm,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}
