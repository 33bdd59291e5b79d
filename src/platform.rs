//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier accepted alongside Ctrl for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the review step
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Next/previous step shortcut display
pub const NEXT_SHORTCUT: &str = "Ctrl+N";
pub const PREV_SHORTCUT: &str = "Ctrl+P";

/// Clear form shortcut display
/// - macOS: "Cmd+R"
/// - Linux/Windows: "Ctrl+R"
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// True when `modifiers` carry Ctrl or the platform command key.
///
/// Ctrl+Alt is AltGr on Windows layouts and stays text input.
pub fn is_command(modifiers: KeyModifiers) -> bool {
    if COMMAND_MODIFIER != KeyModifiers::CONTROL && modifiers.contains(COMMAND_MODIFIER) {
        return true;
    }
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}
