//! Input handling.
//!
//! Key press / release events toggle the vehicle's held controls. Auto-repeat
//! events from a held key are dropped entirely: they neither re-press nor
//! release anything.

use std::fmt;

use anyhow::bail;
use drive_shared::{controls::Control, vehicle::VehicleState};
use tracing::debug;

/// A key, named the way browser keyboard events name them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowRight,
    ArrowLeft,
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowRight" => Key::ArrowRight,
            "ArrowLeft" => Key::ArrowLeft,
            other => Key::Other(other.to_string()),
        }
    }

    /// The control this key drives, if any.
    pub fn control(&self) -> Option<Control> {
        match self {
            Key::ArrowUp => Some(Control::Accelerate),
            Key::ArrowDown => Some(Control::Brake),
            Key::ArrowRight => Some(Control::TurnRight),
            Key::ArrowLeft => Some(Control::TurnLeft),
            Key::Other(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => f.write_str("ArrowUp"),
            Key::ArrowDown => f.write_str("ArrowDown"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::Other(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// One key event from the key source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key: Key,
    /// Generated by holding the key down.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            kind: KeyEventKind::Down,
            key,
            repeat: false,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            kind: KeyEventKind::Up,
            key,
            repeat: false,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// Presses the control mapped to `key`. Returns whether the event was used.
pub fn on_key_down(state: &mut VehicleState, key: &Key, repeat: bool) -> bool {
    match mapped(key, repeat) {
        Some(control) => {
            state.controls.press(control);
            debug!(%key, ?control, "Control pressed");
            true
        }
        None => false,
    }
}

/// Releases the control mapped to `key`. Returns whether the event was used.
pub fn on_key_up(state: &mut VehicleState, key: &Key, repeat: bool) -> bool {
    match mapped(key, repeat) {
        Some(control) => {
            state.controls.release(control);
            debug!(%key, ?control, "Control released");
            true
        }
        None => false,
    }
}

/// Dispatches an event by kind.
pub fn apply(state: &mut VehicleState, event: &KeyEvent) -> bool {
    match event.kind {
        KeyEventKind::Down => on_key_down(state, &event.key, event.repeat),
        KeyEventKind::Up => on_key_up(state, &event.key, event.repeat),
    }
}

fn mapped(key: &Key, repeat: bool) -> Option<Control> {
    if repeat {
        return None;
    }
    key.control()
}

/// Parses one line of the text key source: `down|up <Key> [repeat]`.
///
/// Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<KeyEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let kind = match tokens[0] {
        "down" => KeyEventKind::Down,
        "up" => KeyEventKind::Up,
        other => bail!("unknown key action '{other}', expected 'down' or 'up'"),
    };
    let Some(name) = tokens.get(1) else {
        bail!("missing key name in '{line}'");
    };
    let repeat = match tokens.get(2) {
        None => false,
        Some(&"repeat") => true,
        Some(other) => bail!("unexpected token '{other}' in '{line}'"),
    };

    Ok(Some(KeyEvent {
        kind,
        key: Key::from_name(name),
        repeat,
    }))
}
