//! Keyboard state tracking.

use hashbrown::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::modifiers::Modifiers;

/// Raw keyboard state: the set of held keys plus the modifier flags.
///
/// This is the device-facing side of the input layer; it knows nothing about
/// actions or bindings.
#[derive(Debug, Default)]
pub struct KeyboardState {
    down: HashSet<KeyCode>,
    modifiers: Modifiers,
}

impl KeyboardState {
    /// Create a new keyboard state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event.
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        match event.state {
            ElementState::Pressed => {
                self.down.insert(key_code);
            }
            ElementState::Released => {
                self.down.remove(&key_code);
            }
        }
    }

    /// Mark a key as held. For hosts that do not deliver winit events.
    pub fn press(&mut self, key: KeyCode) {
        self.down.insert(key);
    }

    /// Mark a key as released.
    pub fn release(&mut self, key: KeyCode) {
        self.down.remove(&key);
    }

    /// Update modifier key state.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Returns `true` if the key is currently held.
    #[must_use]
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Get the current modifier key state.
    #[must_use]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Clear all key and modifier state, e.g. on focus loss.
    pub fn clear(&mut self) {
        self.down.clear();
        self.modifiers = Modifiers::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut keyboard = KeyboardState::new();
        assert!(!keyboard.is_down(KeyCode::KeyE));

        keyboard.press(KeyCode::KeyE);
        assert!(keyboard.is_down(KeyCode::KeyE));

        // Repeated presses are idempotent
        keyboard.press(KeyCode::KeyE);
        assert!(keyboard.is_down(KeyCode::KeyE));

        keyboard.release(KeyCode::KeyE);
        assert!(!keyboard.is_down(KeyCode::KeyE));
    }

    #[test]
    fn modifiers() {
        let mut keyboard = KeyboardState::new();
        keyboard.set_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
        assert!(keyboard.modifiers().shift());
        assert!(keyboard.modifiers().ctrl());
        assert!(!keyboard.modifiers().alt());
    }

    #[test]
    fn clear_drops_keys_and_modifiers() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(KeyCode::KeyW);
        keyboard.set_modifiers(Modifiers::SHIFT);

        keyboard.clear();
        assert!(!keyboard.is_down(KeyCode::KeyW));
        assert_eq!(keyboard.modifiers(), Modifiers::empty());
    }
}
