//! Character-controller input facade.
//!
//! Owns the raw keyboard state, the compiled use bindings and the
//! disambiguator, and exposes the values gameplay code reads every frame:
//! movement and look vectors, jump/sprint flags and the three
//! collision-resolved use actions.

use glam::Vec2;
use winit::event::WindowEvent;

use strider_core::{BindingEntry, BindingSet, Result, ANY_KEY_PATH};

use crate::disambiguator::{UseDisambiguator, UseSlot};
use crate::keyboard::KeyboardState;
use crate::modifiers::Modifiers;
use crate::poller::BindingPoller;

/// Cursor behavior requested by the input layer.
///
/// The host applies this to its window; the input layer only tracks intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Normal cursor behavior.
    Normal,
    /// Cursor is locked and hidden (for camera-look controls).
    Locked,
}

/// Per-frame character input values plus the use-action machinery.
///
/// Movement, look, jump and sprint are plain passthrough storage: the last
/// write wins and reads return it unchanged. The use actions go through the
/// [`UseDisambiguator`], so reading them yields the collision-resolved value.
#[derive(Debug)]
pub struct CharacterInputs {
    keyboard: KeyboardState,
    poller: BindingPoller,
    uses: UseDisambiguator,
    use1_slot: UseSlot,
    use2_slot: UseSlot,
    use3_slot: UseSlot,

    movement: Vec2,
    look: Vec2,
    jump: bool,
    sprint: bool,

    /// Treat movement input as analog rather than digital.
    pub analog_movement: bool,
    /// Whether the cursor should be captured by the window.
    pub cursor_locked: bool,
    /// Whether cursor motion feeds the look vector.
    pub cursor_input_for_look: bool,
}

impl CharacterInputs {
    /// Build the input layer from a binding description.
    ///
    /// Registers the three use actions and compiles their bindings. A
    /// missing, duplicated or unresolvable binding is a configuration error
    /// and nothing is constructed.
    pub fn new(bindings: &BindingSet) -> Result<Self> {
        let mut uses = UseDisambiguator::new();
        let mut poller = BindingPoller::new();
        let use1_slot = track(&mut uses, &mut poller, bindings, "Use1")?;
        let use2_slot = track(&mut uses, &mut poller, bindings, "Use2")?;
        let use3_slot = track(&mut uses, &mut poller, bindings, "Use3")?;

        Ok(Self {
            keyboard: KeyboardState::new(),
            poller,
            uses,
            use1_slot,
            use2_slot,
            use3_slot,
            movement: Vec2::ZERO,
            look: Vec2::ZERO,
            jump: false,
            sprint: false,
            analog_movement: false,
            cursor_locked: true,
            cursor_input_for_look: true,
        })
    }

    /// The stock layout: one key, three use actions told apart by held
    /// modifiers. Use1 fires bare, Use2 with shift, Use3 with shift+ctrl.
    #[must_use]
    pub fn default_bindings() -> BindingSet {
        BindingSet::builder()
            .action(
                "Use1",
                [
                    BindingEntry::new("modifier1", ANY_KEY_PATH),
                    BindingEntry::new("modifier2", ANY_KEY_PATH),
                    BindingEntry::new("button", "<Keyboard>/e"),
                ],
            )
            .action(
                "Use2",
                [
                    BindingEntry::new("modifier1", "<Keyboard>/shift"),
                    BindingEntry::new("modifier2", ANY_KEY_PATH),
                    BindingEntry::new("button", "<Keyboard>/e"),
                ],
            )
            .action(
                "Use3",
                [
                    BindingEntry::new("modifier1", "<Keyboard>/shift"),
                    BindingEntry::new("modifier2", "<Keyboard>/ctrl"),
                    BindingEntry::new("button", "<Keyboard>/e"),
                ],
            )
            .build()
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_key_event(event);
                true
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.keyboard
                    .set_modifiers(Modifiers::from(modifiers.state()));
                true
            }
            WindowEvent::Focused(focused) => {
                self.handle_focus(*focused);
                true
            }
            _ => false,
        }
    }

    /// Focus change handling.
    ///
    /// On focus loss the held-key state is dropped, since releases are not
    /// delivered while unfocused. On focus gain the host should re-apply
    /// [`CharacterInputs::cursor_mode`] to its window.
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused {
            self.keyboard.clear();
        }
    }

    /// Re-evaluate the use bindings against current keyboard state.
    ///
    /// Call once per update cycle, after event processing and before reading
    /// the use actions: all assertions for the cycle land before any query,
    /// so collision resolution sees a consistent snapshot of simultaneous
    /// presses.
    pub fn sync(&mut self) {
        self.poller.synchronize(&self.keyboard, &mut self.uses);
    }

    // ===== Passthrough setters =====

    /// Set the movement vector. Last write wins.
    pub fn move_input(&mut self, direction: Vec2) {
        self.movement = direction;
    }

    /// Set the look vector. Ignored while cursor input is not routed to look.
    pub fn look_input(&mut self, direction: Vec2) {
        if self.cursor_input_for_look {
            self.look = direction;
        }
    }

    /// Set the jump flag.
    pub fn jump_input(&mut self, pressed: bool) {
        self.jump = pressed;
    }

    /// Set the sprint flag.
    pub fn sprint_input(&mut self, pressed: bool) {
        self.sprint = pressed;
    }

    // ===== Raw use-action assertion =====
    //
    // Entry points for hosts with their own device layer. `sync` overwrites
    // these from the keyboard; drive one of the two, not both.

    /// Assert or deassert the bare use action.
    pub fn set_use1(&mut self, raised: bool) {
        self.uses.set_asserted(self.use1_slot, raised);
    }

    /// Assert or deassert the one-modifier use action.
    pub fn set_use2(&mut self, raised: bool) {
        self.uses.set_asserted(self.use2_slot, raised);
    }

    /// Assert or deassert the two-modifier use action.
    pub fn set_use3(&mut self, raised: bool) {
        self.uses.set_asserted(self.use3_slot, raised);
    }

    // ===== Queries =====

    /// Current movement vector.
    #[must_use]
    pub const fn movement(&self) -> Vec2 {
        self.movement
    }

    /// Current look vector.
    #[must_use]
    pub const fn look(&self) -> Vec2 {
        self.look
    }

    /// Current jump flag.
    #[must_use]
    pub const fn jump(&self) -> bool {
        self.jump
    }

    /// Current sprint flag.
    #[must_use]
    pub const fn sprint(&self) -> bool {
        self.sprint
    }

    /// Effective state of the bare use action.
    #[must_use]
    pub fn use1(&self) -> bool {
        self.uses.is_effective(self.use1_slot)
    }

    /// Effective state of the one-modifier use action.
    #[must_use]
    pub fn use2(&self) -> bool {
        self.uses.is_effective(self.use2_slot)
    }

    /// Effective state of the two-modifier use action.
    #[must_use]
    pub fn use3(&self) -> bool {
        self.uses.is_effective(self.use3_slot)
    }

    /// Cursor behavior the host should apply to its window.
    #[must_use]
    pub const fn cursor_mode(&self) -> CursorMode {
        if self.cursor_locked {
            CursorMode::Locked
        } else {
            CursorMode::Normal
        }
    }

    /// The raw keyboard state.
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Mutable keyboard access for hosts that feed key state directly.
    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }
}

fn track(
    uses: &mut UseDisambiguator,
    poller: &mut BindingPoller,
    bindings: &BindingSet,
    action: &str,
) -> Result<UseSlot> {
    let slot = uses.register(bindings, action)?;
    poller.add(bindings, action, slot)?;
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn stock_inputs() -> CharacterInputs {
        CharacterInputs::new(&CharacterInputs::default_bindings()).unwrap()
    }

    #[test]
    fn bare_press_fires_use1_only() {
        let mut input = stock_inputs();
        input.keyboard_mut().press(KeyCode::KeyE);
        input.sync();

        assert!(input.use1());
        assert!(!input.use2());
        assert!(!input.use3());
    }

    #[test]
    fn shift_press_fires_use2_only() {
        let mut input = stock_inputs();
        input.keyboard_mut().press(KeyCode::KeyE);
        input.keyboard_mut().set_modifiers(Modifiers::SHIFT);
        input.sync();

        assert!(!input.use1());
        assert!(input.use2());
        assert!(!input.use3());
    }

    #[test]
    fn shift_ctrl_press_fires_use3_only() {
        let mut input = stock_inputs();
        input.keyboard_mut().press(KeyCode::KeyE);
        input
            .keyboard_mut()
            .set_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
        input.sync();

        assert!(!input.use1());
        assert!(!input.use2());
        assert!(input.use3());
    }

    #[test]
    fn dropping_ctrl_hands_over_to_use2() {
        let mut input = stock_inputs();
        input.keyboard_mut().press(KeyCode::KeyE);
        input
            .keyboard_mut()
            .set_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
        input.sync();
        assert!(input.use3());

        input.keyboard_mut().set_modifiers(Modifiers::SHIFT);
        input.sync();
        assert!(!input.use1());
        assert!(input.use2());
        assert!(!input.use3());
    }

    #[test]
    fn direct_assertions_bypass_the_keyboard() {
        let mut input = stock_inputs();
        input.set_use1(true);
        input.set_use3(true);

        assert!(!input.use1());
        assert!(input.use3());

        input.set_use3(false);
        assert!(input.use1());
    }

    #[test]
    fn passthrough_values_last_write_wins() {
        let mut input = stock_inputs();

        input.move_input(Vec2::new(1.0, 0.0));
        input.move_input(Vec2::new(0.0, -1.0));
        assert_eq!(input.movement(), Vec2::new(0.0, -1.0));

        input.jump_input(true);
        assert!(input.jump());
        input.jump_input(false);
        assert!(!input.jump());

        input.sprint_input(true);
        assert!(input.sprint());
    }

    #[test]
    fn look_gated_by_cursor_setting() {
        let mut input = stock_inputs();

        input.look_input(Vec2::new(3.0, 4.0));
        assert_eq!(input.look(), Vec2::new(3.0, 4.0));

        input.cursor_input_for_look = false;
        input.look_input(Vec2::new(-1.0, -1.0));
        assert_eq!(input.look(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn cursor_mode_follows_lock_setting() {
        let mut input = stock_inputs();
        assert_eq!(input.cursor_mode(), CursorMode::Locked);

        input.cursor_locked = false;
        assert_eq!(input.cursor_mode(), CursorMode::Normal);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut input = stock_inputs();
        input.keyboard_mut().press(KeyCode::KeyE);
        input.sync();
        assert!(input.use1());

        input.handle_focus(false);
        input.sync();
        assert!(!input.use1());
    }

    #[test]
    fn missing_use_action_fails_construction() {
        let bindings = BindingSet::builder()
            .action(
                "Use1",
                [BindingEntry::new("button", "<Keyboard>/e")],
            )
            .build();
        assert!(CharacterInputs::new(&bindings).is_err());
    }
}
