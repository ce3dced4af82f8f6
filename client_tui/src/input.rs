//! Keyboard input handling

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use game_core::{ControlEvent, FrontendError, InputSource, PaddleInput, ReplayChoice};

/// Without release events a key counts as held this long after its last press/repeat
const HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Movement direction bound to a key
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

/// Control event bound to a key press
pub fn control_for(key: &KeyEvent) -> Option<ControlEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(ControlEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ControlEvent::Quit)
        }
        KeyCode::Char(' ') => Some(ControlEvent::TogglePause),
        KeyCode::Char(digit) => ReplayChoice::from_digit(digit).map(ControlEvent::Choose),
        _ => None,
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct KeyHold {
    down: bool,
    last_press: Option<Instant>,
}

impl KeyHold {
    fn press(&mut self, now: Instant) {
        self.down = true;
        self.last_press = Some(now);
    }

    fn release(&mut self) {
        self.down = false;
        self.last_press = None;
    }

    fn is_held(&self, release_events: bool, now: Instant) -> bool {
        if release_events {
            self.down
        } else {
            self.last_press
                .is_some_and(|at| now.duration_since(at) <= HOLD_WINDOW)
        }
    }
}

/// Crossterm-backed input source
#[derive(Debug)]
pub struct TerminalInput {
    up: KeyHold,
    down: KeyHold,
    release_events: bool,
    pushed_flags: bool,
}

impl TerminalInput {
    /// Ask the terminal for key release events when it supports them
    pub fn new() -> io::Result<Self> {
        let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if release_events {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        tracing::debug!(release_events, "terminal input ready");
        Ok(Self {
            up: KeyHold::default(),
            down: KeyHold::default(),
            release_events,
            pushed_flags: release_events,
        })
    }

    fn hold_for(&mut self, direction: Direction) -> &mut KeyHold {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, events: &mut Vec<ControlEvent>) {
        let now = Instant::now();
        if let Some(direction) = direction_for(key.code) {
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => self.hold_for(direction).press(now),
                KeyEventKind::Release => self.hold_for(direction).release(),
            }
            return;
        }

        if key.kind == KeyEventKind::Press {
            if let Some(event) = control_for(&key) {
                events.push(event);
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self, timeout: Duration) -> Result<Vec<ControlEvent>, FrontendError> {
        let mut events = Vec::new();
        let mut wait = timeout;
        // Wait once, then drain whatever else is queued
        while event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, &mut events);
            }
            wait = Duration::ZERO;
        }
        Ok(events)
    }

    fn held_keys(&self) -> PaddleInput {
        let now = Instant::now();
        PaddleInput {
            up: self.up.is_held(self.release_events, now),
            down: self.down.is_held(self.release_events, now),
        }
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        if self.pushed_flags {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
    }
}
