/// Keyboard key identifier.
///
/// Only keys the engine reacts to are named; everything else maps to
/// `Key::Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Any other key, carrying the platform key code.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The user asked to close the window.
    QuitRequested,

    Key {
        key: Key,
        state: KeyState,
        /// OS key-repeat.
        repeat: bool,
    },

    /// Any platform event the engine does not interpret.
    Other,
}

impl InputEvent {
    /// Convenience constructor for a fresh key press.
    pub const fn key_pressed(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    /// Whether this event ends the draw loop: a close request or Escape pressed.
    pub fn requests_quit(&self) -> bool {
        matches!(
            self,
            InputEvent::QuitRequested
                | InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_quits() {
        assert!(InputEvent::QuitRequested.requests_quit());
    }

    #[test]
    fn escape_press_quits_even_on_repeat() {
        assert!(InputEvent::key_pressed(Key::Escape).requests_quit());
        let repeat = InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, repeat: true };
        assert!(repeat.requests_quit());
    }

    #[test]
    fn other_input_is_ignored() {
        let release = InputEvent::Key { key: Key::Escape, state: KeyState::Released, repeat: false };
        assert!(!release.requests_quit());
        assert!(!InputEvent::key_pressed(Key::Unknown(44)).requests_quit());
        assert!(!InputEvent::key_pressed(Key::Unknown(42)).requests_quit());
        assert!(!InputEvent::Other.requests_quit());
    }
}
