use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

/// Without release reporting, a fresh press is held at least this long, which
/// covers the usual auto-repeat delay before the first repeat arrives
const PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// Once the key is repeating, it counts as released after this long without a
/// repeat
const REPEAT_TIMEOUT: Duration = Duration::from_millis(150);

/// Raw input as the match loop sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

/// Source of pending input events
pub trait EventSource {
    /// Drain every pending event, waiting at most `timeout` for the first one
    fn poll_events(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>>;
}

/// Character keys are matched case-insensitively, so they are stored lower-case
pub fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Key kept down by the emulated hold
#[derive(Clone, Copy, Debug)]
struct HeldKey {
    code: KeyCode,
    since: Instant,
    repeating: bool,
}

impl HeldKey {
    fn expired(&self) -> bool {
        let timeout = if self.repeating {
            REPEAT_TIMEOUT
        } else {
            PRESS_TIMEOUT
        };
        self.since.elapsed() >= timeout
    }
}

/// Crossterm-backed event source
pub struct TerminalEvents {
    reports_releases: bool,
    held: Option<HeldKey>,
}

impl TerminalEvents {
    /// `reports_releases` is true when the terminal accepted the keyboard
    /// enhancement flags and sends Release events of its own
    pub fn new(reports_releases: bool) -> Self {
        Self {
            reports_releases,
            held: None,
        }
    }

    fn translate(&mut self, key: KeyEvent, events: &mut Vec<InputEvent>) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            events.push(InputEvent::Quit);
            return;
        }

        let code = normalize_key(key.code);

        if self.reports_releases {
            match key.kind {
                KeyEventKind::Press => events.push(InputEvent::KeyDown(code)),
                KeyEventKind::Release => events.push(InputEvent::KeyUp(code)),
                KeyEventKind::Repeat => {}
            }
            return;
        }

        // Emulated hold: repeats of the held key only refresh its timer
        let repeating = match self.held {
            Some(held) if held.code == code => true,
            Some(held) => {
                events.push(InputEvent::KeyUp(held.code));
                events.push(InputEvent::KeyDown(code));
                false
            }
            None => {
                events.push(InputEvent::KeyDown(code));
                false
            }
        };
        self.held = Some(HeldKey {
            code,
            since: Instant::now(),
            repeating,
        });
    }

    fn expire_held_key(&mut self, events: &mut Vec<InputEvent>) {
        if let Some(held) = self.held {
            if held.expired() {
                events.push(InputEvent::KeyUp(held.code));
                self.held = None;
            }
        }
    }
}

impl EventSource for TerminalEvents {
    fn poll_events(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let mut wait = timeout;

        while event::poll(wait)? {
            wait = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                self.translate(key, &mut events);
            }
        }

        if !self.reports_releases {
            self.expire_held_key(&mut events);
        }

        Ok(events)
    }
}
