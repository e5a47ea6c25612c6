//! Keyboard Actions and Shortcuts
//!
//! Defines the actions handled inside an open select popover and the
//! gallery's application-level shortcuts.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Key context set on every select popover
pub const SELECT_KEY_CONTEXT: &str = "Select";

/// List navigation inside an open popover
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum SelectAction {
    /// Move the highlight up
    Up,
    /// Move the highlight down
    Down,
    /// Toggle or choose the highlighted option
    Confirm,
    /// Close the popover
    Cancel,
}

/// Gallery actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum GalleryAction {
    /// Quit the application
    Quit,
    /// Switch between light and dark themes
    ToggleTheme,
    /// Switch between English and Chinese
    ToggleLocale,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⇧ for shift
/// - Others: Ctrl+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    keystroke
        .split('-')
        .map(|part| match part {
            "secondary" | "cmd" => {
                if cfg!(target_os = "macos") {
                    "⌘".to_string()
                } else {
                    "Ctrl".to_string()
                }
            }
            "shift" => {
                if cfg!(target_os = "macos") {
                    "⇧".to_string()
                } else {
                    "Shift".to_string()
                }
            }
            "enter" => "Enter".to_string(),
            "escape" => "Esc".to_string(),
            "up" => "↑".to_string(),
            "down" => "↓".to_string(),
            c => c.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Key bindings for select popovers
pub fn select_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", SelectAction::Up, Some(SELECT_KEY_CONTEXT)),
        KeyBinding::new("down", SelectAction::Down, Some(SELECT_KEY_CONTEXT)),
        KeyBinding::new("enter", SelectAction::Confirm, Some(SELECT_KEY_CONTEXT)),
        KeyBinding::new("escape", SelectAction::Cancel, Some(SELECT_KEY_CONTEXT)),
    ]
}

/// Global gallery key bindings
pub fn gallery_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("secondary-q", GalleryAction::Quit, None),
        KeyBinding::new("secondary-shift-t", GalleryAction::ToggleTheme, None),
        KeyBinding::new("secondary-shift-l", GalleryAction::ToggleLocale, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_plain_keys() {
        assert_eq!(humanize_keystroke("enter"), "Enter");
        assert_eq!(humanize_keystroke("escape"), "Esc");
        assert_eq!(humanize_keystroke("down"), "↓");
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_humanize_modifiers() {
        assert_eq!(humanize_keystroke("secondary-shift-t"), "Ctrl+Shift+T");
    }
}
