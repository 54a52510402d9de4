//! Input handling for the Strider character controller.
//!
//! Maps raw key and modifier state onto a small set of mutually exclusive
//! "use" actions. The actions share one physical key and are told apart only
//! by the modifiers held with it, so a single press can raise several of
//! them at once; the binding that requires the most concrete modifiers wins.
//!
//! # Core Types
//!
//! - [`CharacterInputs`]: facade owning keyboard state, bindings and the
//!   per-frame values gameplay reads
//! - [`UseDisambiguator`]: collision resolution across raised use actions
//! - [`BindingProfile`]: per-action modifier census
//! - [`BindingPoller`]: compiles bindings and mirrors the keyboard into
//!   assertions
//! - [`KeyboardState`]: raw held-key and modifier tracking
//!
//! # Usage
//!
//! ```ignore
//! use strider_input::CharacterInputs;
//!
//! let mut input = CharacterInputs::new(&CharacterInputs::default_bindings())?;
//!
//! // In the event handler
//! fn on_event(input: &mut CharacterInputs, event: &WindowEvent) -> bool {
//!     input.process_window_event(event)
//! }
//!
//! // In the update loop
//! fn update(input: &mut CharacterInputs) {
//!     input.sync();
//!     if input.use3() {
//!         // shift+ctrl use fired; use1 and use2 stay quiet this frame
//!     }
//! }
//! ```
//!
//! # Update Cycle
//!
//! Everything runs on one logical thread. Feed events, call
//! [`CharacterInputs::sync`] once, then query: all assertions for the cycle
//! are applied before any effective-state read, so resolution always sees a
//! consistent snapshot of simultaneous presses. A multi-threaded host must
//! put the whole value behind a single lock.

mod character;
mod disambiguator;
mod keyboard;
mod modifiers;
mod path;
mod poller;
mod profile;

pub use character::{CharacterInputs, CursorMode};
pub use disambiguator::{UseDisambiguator, UseSlot};
pub use keyboard::KeyboardState;
pub use modifiers::Modifiers;
pub use path::key_code_for_path;
pub use poller::BindingPoller;
pub use profile::BindingProfile;

// Re-export the binding description and error types
pub use strider_core::{
    ActionBinding, BindingEntry, BindingSet, Error, Result, ANY_KEY_PATH, MODIFIER_PREFIX,
};

// Re-export winit types commonly used with input
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
