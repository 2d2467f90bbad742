//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Extra modifier accepted for the send shortcut, on top of Ctrl
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SEND_SHORTCUT: &str = "Ctrl+S";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Esc";
