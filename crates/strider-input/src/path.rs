//! Keyboard control path resolution.
//!
//! Binding descriptions refer to physical controls by path, e.g.
//! `<Keyboard>/e`. Concrete key paths resolve here; modifier paths are
//! handled by [`Modifiers::from_control_path`](crate::Modifiers::from_control_path).

use winit::keyboard::KeyCode;

/// Resolve a concrete key path to a key code.
///
/// Covers the controls the stock layouts use: letters, digits, space, enter,
/// escape, tab and the arrow keys. Returns `None` for anything else,
/// including the any-key wildcard.
#[must_use]
pub fn key_code_for_path(path: &str) -> Option<KeyCode> {
    let control = path.strip_prefix("<Keyboard>/")?;
    let code = match control {
        "a" => KeyCode::KeyA,
        "b" => KeyCode::KeyB,
        "c" => KeyCode::KeyC,
        "d" => KeyCode::KeyD,
        "e" => KeyCode::KeyE,
        "f" => KeyCode::KeyF,
        "g" => KeyCode::KeyG,
        "h" => KeyCode::KeyH,
        "i" => KeyCode::KeyI,
        "j" => KeyCode::KeyJ,
        "k" => KeyCode::KeyK,
        "l" => KeyCode::KeyL,
        "m" => KeyCode::KeyM,
        "n" => KeyCode::KeyN,
        "o" => KeyCode::KeyO,
        "p" => KeyCode::KeyP,
        "q" => KeyCode::KeyQ,
        "r" => KeyCode::KeyR,
        "s" => KeyCode::KeyS,
        "t" => KeyCode::KeyT,
        "u" => KeyCode::KeyU,
        "v" => KeyCode::KeyV,
        "w" => KeyCode::KeyW,
        "x" => KeyCode::KeyX,
        "y" => KeyCode::KeyY,
        "z" => KeyCode::KeyZ,
        "0" => KeyCode::Digit0,
        "1" => KeyCode::Digit1,
        "2" => KeyCode::Digit2,
        "3" => KeyCode::Digit3,
        "4" => KeyCode::Digit4,
        "5" => KeyCode::Digit5,
        "6" => KeyCode::Digit6,
        "7" => KeyCode::Digit7,
        "8" => KeyCode::Digit8,
        "9" => KeyCode::Digit9,
        "space" => KeyCode::Space,
        "enter" => KeyCode::Enter,
        "escape" => KeyCode::Escape,
        "tab" => KeyCode::Tab,
        "upArrow" => KeyCode::ArrowUp,
        "downArrow" => KeyCode::ArrowDown,
        "leftArrow" => KeyCode::ArrowLeft,
        "rightArrow" => KeyCode::ArrowRight,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::ANY_KEY_PATH;

    #[test]
    fn resolves_common_controls() {
        assert_eq!(key_code_for_path("<Keyboard>/e"), Some(KeyCode::KeyE));
        assert_eq!(key_code_for_path("<Keyboard>/space"), Some(KeyCode::Space));
        assert_eq!(key_code_for_path("<Keyboard>/7"), Some(KeyCode::Digit7));
        assert_eq!(
            key_code_for_path("<Keyboard>/upArrow"),
            Some(KeyCode::ArrowUp)
        );
    }

    #[test]
    fn rejects_wildcard_and_foreign_paths() {
        assert_eq!(key_code_for_path(ANY_KEY_PATH), None);
        assert_eq!(key_code_for_path("<Gamepad>/buttonSouth"), None);
        assert_eq!(key_code_for_path("e"), None);
    }
}
