//! DOM key name normalization.
//!
//! Converts `KeyboardEvent.key` values to the normalized key names produced
//! by [`parse_keybind`](super::parse_keybind), so live events and configured
//! chords compare equal.

/// Convert a DOM `KeyboardEvent.key` value to the normalized key name.
///
/// The DOM reports `" "` for space, `"ArrowUp"` for the arrows, and the
/// shifted character for letters (`"S"` with Shift held, `"s"` without).
pub fn normalize_dom_key(key: &str) -> String {
    match key {
        " " | "Spacebar" => "Space".to_string(),
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        "Esc" => "Escape".to_string(),
        "Del" => "Delete".to_string(),
        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                // F1..F12, Enter, Tab, Home, ... already match
                key.to_string()
            }
        }
    }
}
