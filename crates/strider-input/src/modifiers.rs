//! Modifier key flags.

use bitflags::bitflags;
use winit::keyboard::ModifiersState;

bitflags! {
    /// Held modifier keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key is pressed.
        const SHIFT = 0b001;
        /// Control key is pressed.
        const CTRL  = 0b010;
        /// Alt key is pressed.
        const ALT   = 0b100;
    }
}

impl Modifiers {
    /// Resolve a modifier control path to its flag.
    ///
    /// Side-agnostic and side-specific paths map to the same flag. Returns
    /// `None` for paths that are not modifier keys, including the any-key
    /// wildcard.
    #[must_use]
    pub fn from_control_path(path: &str) -> Option<Self> {
        match path {
            "<Keyboard>/shift" | "<Keyboard>/leftShift" | "<Keyboard>/rightShift" => {
                Some(Self::SHIFT)
            }
            "<Keyboard>/ctrl" | "<Keyboard>/leftCtrl" | "<Keyboard>/rightCtrl" => Some(Self::CTRL),
            "<Keyboard>/alt" | "<Keyboard>/leftAlt" | "<Keyboard>/rightAlt" => Some(Self::ALT),
            _ => None,
        }
    }

    /// Returns `true` if the Shift key is pressed.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` if the Control key is pressed.
    #[inline]
    #[must_use]
    pub const fn ctrl(self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Returns `true` if the Alt key is pressed.
    #[inline]
    #[must_use]
    pub const fn alt(self) -> bool {
        self.contains(Self::ALT)
    }
}

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        let mut modifiers = Self::empty();
        if state.shift_key() {
            modifiers |= Self::SHIFT;
        }
        if state.control_key() {
            modifiers |= Self::CTRL;
        }
        if state.alt_key() {
            modifiers |= Self::ALT;
        }
        modifiers
    }
}
