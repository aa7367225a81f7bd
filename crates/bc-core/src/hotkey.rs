//! Keyboard chord model.
//!
//! Chords are written the way the editor configuration spells them
//! (`"mod+c"`, `"mod+j"`), where `mod` is the platform primary modifier:
//! Command on macOS, Control everywhere else.

use std::str::FromStr;

use thiserror::Error;

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// The platform primary modifier, alone.
    pub fn primary() -> Self {
        let mut mods = Self::default();
        if cfg!(target_os = "macos") {
            mods.meta = true;
        } else {
            mods.ctrl = true;
        }
        mods
    }
}

/// A keyboard event as observed by the selection key handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value, e.g. "c", "x", "j". Matched case-insensitively.
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// Key pressed together with the platform primary modifier.
    pub fn with_primary(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::primary())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HotkeyParseError {
    #[error("empty hotkey")]
    Empty,

    #[error("hotkey `{0}` names no key")]
    MissingKey(String),

    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
}

/// A single keyboard chord, e.g. `mod+c`.
///
/// Matching is exact: every modifier the chord names must be held, and no
/// other modifier may be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    mod_key: bool,
    ctrl: bool,
    meta: bool,
    alt: bool,
    shift: bool,
    key: String,
}

impl Hotkey {
    /// Chord of the platform primary modifier plus one key (`mod+<key>`).
    pub fn primary(key: impl Into<String>) -> Self {
        Self {
            mod_key: true,
            ctrl: false,
            meta: false,
            alt: false,
            shift: false,
            key: key.into(),
        }
    }

    fn expected_modifiers(&self) -> Modifiers {
        let mut mods = Modifiers {
            ctrl: self.ctrl,
            meta: self.meta,
            alt: self.alt,
            shift: self.shift,
        };
        if self.mod_key {
            if cfg!(target_os = "macos") {
                mods.meta = true;
            } else {
                mods.ctrl = true;
            }
        }
        mods
    }

    /// Whether the event is exactly this chord.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.key.eq_ignore_ascii_case(&self.key) && event.modifiers == self.expected_modifiers()
    }
}

impl FromStr for Hotkey {
    type Err = HotkeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HotkeyParseError::Empty);
        }

        let mut hotkey = Hotkey {
            mod_key: false,
            ctrl: false,
            meta: false,
            alt: false,
            shift: false,
            key: String::new(),
        };

        let tokens: Vec<&str> = s.split('+').collect();
        let (key, modifiers) = tokens
            .split_last()
            .ok_or_else(|| HotkeyParseError::MissingKey(s.to_string()))?;

        for token in modifiers {
            match token.to_ascii_lowercase().as_str() {
                "mod" => hotkey.mod_key = true,
                "ctrl" | "control" => hotkey.ctrl = true,
                "meta" | "cmd" | "super" => hotkey.meta = true,
                "alt" | "option" => hotkey.alt = true,
                "shift" => hotkey.shift = true,
                other => return Err(HotkeyParseError::UnknownModifier(other.to_string())),
            }
        }

        if key.is_empty() || matches!(key.to_ascii_lowercase().as_str(), "mod" | "ctrl" | "meta") {
            return Err(HotkeyParseError::MissingKey(s.to_string()));
        }
        hotkey.key = key.to_string();

        Ok(hotkey)
    }
}
