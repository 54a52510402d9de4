//! Raw-state to assertion bridge.
//!
//! Compiles use bindings down to a key plus required modifier flags once at
//! startup, then mirrors the keyboard into the disambiguator every update
//! cycle.

use tracing::debug;
use winit::keyboard::KeyCode;

use strider_core::{BindingSet, Error, Result};

use crate::disambiguator::{UseDisambiguator, UseSlot};
use crate::keyboard::KeyboardState;
use crate::modifiers::Modifiers;
use crate::path::key_code_for_path;

/// One use binding compiled to its physical requirements.
#[derive(Debug, Clone)]
struct CompiledUseBinding {
    slot: UseSlot,
    key: KeyCode,
    required: Modifiers,
}

/// Evaluates compiled use bindings against raw keyboard state.
#[derive(Debug, Default)]
pub struct BindingPoller {
    compiled: Vec<CompiledUseBinding>,
}

impl BindingPoller {
    /// Create an empty poller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile an action's binding and track it under `slot`.
    ///
    /// The binding must carry a non-modifier control entry that resolves to
    /// a key, and every concrete modifier entry must name a modifier key.
    /// Wildcard modifier slots compile to no requirement: holding the bound
    /// key already satisfies "any key".
    pub fn add(&mut self, set: &BindingSet, action: &str, slot: UseSlot) -> Result<()> {
        let binding = set.action(action)?;

        let control = binding
            .control_entry()
            .ok_or_else(|| Error::MissingControl(action.to_string()))?;
        let key = key_code_for_path(&control.path)
            .ok_or_else(|| Error::UnknownControlPath(control.path.clone()))?;

        let mut required = Modifiers::empty();
        for entry in binding.concrete_modifiers() {
            let flag = Modifiers::from_control_path(&entry.path)
                .ok_or_else(|| Error::UnknownControlPath(entry.path.clone()))?;
            required |= flag;
        }

        debug!(action, ?key, ?required, "compiled use binding");
        self.compiled.push(CompiledUseBinding {
            slot,
            key,
            required,
        });
        Ok(())
    }

    /// Number of tracked bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// Returns `true` if no bindings are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Mirror raw keyboard state into the disambiguator.
    ///
    /// A binding is satisfied while its key is held and all its required
    /// modifiers are down. Every tracked flag is written before returning,
    /// so queries issued afterwards observe one consistent snapshot of the
    /// cycle.
    pub fn synchronize(&self, keyboard: &KeyboardState, uses: &mut UseDisambiguator) {
        for compiled in &self.compiled {
            let satisfied = keyboard.is_down(compiled.key)
                && keyboard.modifiers().contains(compiled.required);
            uses.set_asserted(compiled.slot, satisfied);
        }
    }
}
