use flowkeys_common::InputError;

use super::types::{KeyBind, Modifier};

/// Parses a chord string like `"Mod+S"`, `"mod+shift+f"`, or `"Space"`
/// into a [`KeyBind`].
///
/// Tokens are `+`-separated and case-insensitive. Every token but the last
/// must be a modifier:
/// - `"Mod"` / `"Cmd"` / `"Command"` -> `Super` on macOS, `Ctrl` elsewhere
/// - `"Ctrl"` / `"Control"` -> `Ctrl`
/// - `"Alt"` / `"Option"` / `"Opt"` -> `Alt`
/// - `"Super"` / `"Win"` / `"Meta"` -> `Super`
/// - `"Shift"` -> `Shift`
///
/// The last token is always the key, even if it spells a modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, InputError> {
    if s.trim().is_empty() {
        return Err(InputError::InvalidChord("empty chord string".into()));
    }

    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let (last, prefix) = tokens
        .split_last()
        .ok_or_else(|| InputError::InvalidChord("empty chord string".into()))?;
    if last.is_empty() {
        return Err(InputError::InvalidChord(format!(
            "chord '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in prefix {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            InputError::InvalidChord(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    let key = normalize_key_name(last);
    if modifiers.contains(&Modifier::Shift) && is_shiftable_symbol(&key) {
        // The platform reports the shifted character ("!" for Shift+1),
        // so the chord could never match a live key press.
        return Err(InputError::InvalidChord(format!(
            "chord '{s}' shifts '{key}'; bind the shifted character instead"
        )));
    }

    Ok(KeyBind { modifiers, key })
}

/// Single non-letter characters, whose key value already reflects Shift.
pub(crate) fn is_shiftable_symbol(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_alphabetic())
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "mod" | "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "backslash" => "\\".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "up" | "arrowup" => "Up".into(),
        "down" | "arrowdown" => "Down".into(),
        "left" | "arrowleft" => "Left".into(),
        "right" | "arrowright" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => {
                        let upper: String = c.to_uppercase().collect();
                        format!("{upper}{}", chars.as_str())
                    }
                    None => lower,
                }
            }
        }
    }
}
