//! Modifier-priority disambiguation across simultaneously raised actions.
//!
//! Several use actions can share one physical key and differ only in the
//! modifiers held with it. Pressing the key with modifiers down then raises
//! more than one action at once: the bare binding's key requirement is
//! satisfied, and so is the modified one. The disambiguator breaks the tie
//! in favor of specificity: an action is effective only while no other
//! raised action requires strictly more concrete modifiers.

use strider_core::{BindingSet, Result};

use crate::profile::BindingProfile;

/// Stable handle to a registered action.
///
/// Only obtainable from [`UseDisambiguator::register`], so a slot always
/// addresses a live profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UseSlot(usize);

/// A fixed set of binding profiles with collision-resolved queries.
///
/// Profiles are registered once at startup; afterwards the only mutation is
/// the per-action asserted flag. Queries recompute the effective value from
/// the full set every time, so they always observe the latest assertions.
#[derive(Debug, Default)]
pub struct UseDisambiguator {
    profiles: Vec<BindingProfile>,
}

impl UseDisambiguator {
    /// Create an empty disambiguator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action, building its profile from the set.
    ///
    /// The set must contain the action exactly once. The returned slot is
    /// the only way to address the action afterwards.
    pub fn register(&mut self, set: &BindingSet, action: &str) -> Result<UseSlot> {
        let profile = BindingProfile::from_set(set, action)?;
        self.profiles.push(profile);
        Ok(UseSlot(self.profiles.len() - 1))
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if no actions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Record whether the action's raw trigger condition holds.
    ///
    /// Touches exactly one profile. The effective value is derived on every
    /// query, never cached here.
    pub fn set_asserted(&mut self, slot: UseSlot, asserted: bool) {
        self.profiles[slot.0].set_asserted(asserted);
    }

    /// The raw, not collision-resolved, flag.
    #[must_use]
    pub fn is_asserted(&self, slot: UseSlot) -> bool {
        self.profiles[slot.0].asserted()
    }

    /// Number of concrete modifier requirements of the slot's binding.
    #[must_use]
    pub fn modifier_count(&self, slot: UseSlot) -> usize {
        self.profiles[slot.0].modifier_count()
    }

    /// Collision-resolved state of the action.
    ///
    /// `true` while the action is raised and no other raised action requires
    /// strictly more concrete modifiers. Equal counts do not suppress each
    /// other: two raised actions with the same count are both effective.
    /// Layouts are expected to make equal-count bindings physically
    /// exclusive; if they are not, both fire.
    #[must_use]
    pub fn is_effective(&self, slot: UseSlot) -> bool {
        let profile = &self.profiles[slot.0];
        if !profile.asserted() {
            return false;
        }
        self.profiles
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != slot.0)
            .all(|(_, other)| {
                !other.asserted() || other.modifier_count() <= profile.modifier_count()
            })
    }
}
