//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut
/// Ctrl+S on every platform; most terminals never forward Cmd on macOS
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Language switch shortcut display
/// - macOS: "Fn+F1/F2" (laptop keyboards map F-keys to media keys)
/// - Linux/Windows: "F1/F2"
#[cfg(target_os = "macos")]
pub const LANGUAGE_SHORTCUT: &str = "Fn+F1/F2";

#[cfg(not(target_os = "macos"))]
pub const LANGUAGE_SHORTCUT: &str = "F1/F2";
