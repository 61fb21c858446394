use flowkeys_common::Command;

use super::types::{KeyBind, Modifier};

/// How chords are rendered in toolbar tooltips and menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Glyphs run together, e.g. `⌘⇧F`.
    Symbols,
    /// Names joined with `+`, e.g. `Ctrl+Shift+F`.
    Text,
}

impl DisplayStyle {
    /// Glyphs on macOS, names everywhere else.
    pub fn native() -> Self {
        if cfg!(target_os = "macos") {
            DisplayStyle::Symbols
        } else {
            DisplayStyle::Text
        }
    }
}

/// Render a chord in the platform's native style.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    keybind_to_display_with(kb, DisplayStyle::native())
}

/// Render a chord in the given style.
///
/// Modifiers come out in the fixed order Ctrl, Alt, Shift, Super whatever
/// order the chord was written in, so `Shift+Mod+F` and `Mod+Shift+F`
/// render alike.
pub fn keybind_to_display_with(kb: &KeyBind, style: DisplayStyle) -> String {
    let mut modifiers = kb.modifiers.clone();
    modifiers.sort_by_key(|m| modifier_rank(*m));
    modifiers.dedup();

    let mut parts: Vec<&str> = modifiers
        .iter()
        .map(|m| modifier_label(*m, style))
        .collect();
    parts.push(key_label(&kb.key, style));

    match style {
        DisplayStyle::Symbols => parts.concat(),
        DisplayStyle::Text => parts.join("+"),
    }
}

/// Tooltip text for a toolbar button, e.g. `Freeze Path (Ctrl+Shift+F)`.
pub fn command_tooltip(command: Command, kb: &KeyBind, style: DisplayStyle) -> String {
    format!("{} ({})", command.label(), keybind_to_display_with(kb, style))
}

fn modifier_rank(modifier: Modifier) -> u8 {
    match modifier {
        Modifier::Ctrl => 0,
        Modifier::Alt => 1,
        Modifier::Shift => 2,
        Modifier::Super => 3,
    }
}

fn modifier_label(modifier: Modifier, style: DisplayStyle) -> &'static str {
    match (style, modifier) {
        (DisplayStyle::Symbols, Modifier::Ctrl) => "\u{2303}",  // ⌃
        (DisplayStyle::Symbols, Modifier::Alt) => "\u{2325}",   // ⌥
        (DisplayStyle::Symbols, Modifier::Shift) => "\u{21E7}", // ⇧
        (DisplayStyle::Symbols, Modifier::Super) => "\u{2318}", // ⌘
        (DisplayStyle::Text, Modifier::Ctrl) => "Ctrl",
        (DisplayStyle::Text, Modifier::Alt) => "Alt",
        (DisplayStyle::Text, Modifier::Shift) => "Shift",
        (DisplayStyle::Text, Modifier::Super) => super_key_name(),
    }
}

fn super_key_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "Cmd"
    } else if cfg!(target_os = "windows") {
        "Win"
    } else {
        "Super"
    }
}

fn key_label(key: &str, style: DisplayStyle) -> &str {
    if style == DisplayStyle::Text {
        return key;
    }
    match key {
        "Enter" => "\u{21A9}",     // ↩
        "Backspace" => "\u{232B}", // ⌫
        "Delete" => "\u{2326}",    // ⌦
        "Escape" => "\u{238B}",    // ⎋
        "Tab" => "\u{21E5}",       // ⇥
        "Space" => "\u{2423}",     // ␣
        "Up" => "\u{2191}",        // ↑
        "Down" => "\u{2193}",      // ↓
        "Left" => "\u{2190}",      // ←
        "Right" => "\u{2192}",     // →
        other => other,
    }
}
