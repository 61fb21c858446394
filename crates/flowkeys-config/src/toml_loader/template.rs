//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Flowkeys Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[shortcuts]
# Modifiers: Mod (Cmd on macOS, Ctrl elsewhere), Ctrl, Alt, Shift, Super
# Shifted digits and symbols are written as the symbol: "Mod+!", not "Mod+Shift+1".
# freeze_path = "Mod+Shift+F"
# freeze = "Mod+F"
# download = "Mod+J"
# docs = "Mod+Shift+D"
# save = "Mod+S"
# advanced = "Mod+Shift+A"
# code = "Space"
# share = "Mod+Shift+S"
# group = "Mod+G"
# minimize = "Mod+Shift+Q"

[exemption]
# Elements carrying this class (or inside one that does) keep their
# native key handling; most shortcuts do not fire there.
# marker_class = "noflow"
"##
    .to_string()
}
