//! Binding profiles: the per-action record the disambiguator consults.

use tracing::debug;

use strider_core::binding::ActionBinding;
use strider_core::{BindingSet, Result};

/// Modifier census of one action's binding, plus the action's live
/// raw-trigger flag.
///
/// The census is taken once at construction and never changes; only the
/// `asserted` flag mutates afterwards, written by whatever layer watches the
/// device and read back during disambiguation.
#[derive(Debug, Clone)]
pub struct BindingProfile {
    name: String,
    modifier_count: usize,
    asserted: bool,
}

impl BindingProfile {
    /// Build a profile from a binding.
    ///
    /// Counts the binding's concrete modifier requirements; wildcard
    /// (any-key) modifier slots place no real requirement and are not
    /// counted.
    #[must_use]
    pub fn from_binding(binding: &ActionBinding) -> Self {
        let modifier_count = binding.concrete_modifiers().count();
        debug!(action = %binding.name, modifier_count, "built binding profile");
        Self {
            name: binding.name.clone(),
            modifier_count,
            asserted: false,
        }
    }

    /// Look the action up in a set and build its profile.
    ///
    /// The set must contain the action exactly once.
    pub fn from_set(set: &BindingSet, action: &str) -> Result<Self> {
        Ok(Self::from_binding(set.action(action)?))
    }

    /// The profiled action's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of concrete modifier requirements. Fixed at construction.
    #[must_use]
    pub const fn modifier_count(&self) -> usize {
        self.modifier_count
    }

    /// Whether the action's raw trigger condition currently holds.
    #[must_use]
    pub const fn asserted(&self) -> bool {
        self.asserted
    }

    pub(crate) fn set_asserted(&mut self, asserted: bool) {
        self.asserted = asserted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::{BindingEntry, Error, ANY_KEY_PATH};

    fn set_with(entries: Vec<BindingEntry>) -> BindingSet {
        BindingSet::builder().action("Use", entries).build()
    }

    #[test]
    fn counts_concrete_modifiers_only() {
        let set = set_with(vec![
            BindingEntry::new("modifier1", "<Keyboard>/shift"),
            BindingEntry::new("modifier2", "<Keyboard>/ctrl"),
            BindingEntry::new("button", "<Keyboard>/e"),
        ]);
        let profile = BindingProfile::from_set(&set, "Use").unwrap();
        assert_eq!(profile.modifier_count(), 2);
        assert!(!profile.asserted());
    }

    #[test]
    fn wildcard_modifier_excluded() {
        let set = set_with(vec![
            BindingEntry::new("modifier1", "<Keyboard>/shift"),
            BindingEntry::new("modifier2", ANY_KEY_PATH),
            BindingEntry::new("button", "<Keyboard>/e"),
        ]);
        let profile = BindingProfile::from_set(&set, "Use").unwrap();
        assert_eq!(profile.modifier_count(), 1);
    }

    #[test]
    fn non_modifier_entries_not_counted() {
        let set = set_with(vec![BindingEntry::new("button", "<Keyboard>/e")]);
        let profile = BindingProfile::from_set(&set, "Use").unwrap();
        assert_eq!(profile.modifier_count(), 0);
    }

    #[test]
    fn missing_action_fails() {
        let set = set_with(vec![BindingEntry::new("button", "<Keyboard>/e")]);
        let err = BindingProfile::from_set(&set, "Other").unwrap_err();
        assert!(matches!(err, Error::ActionNotFound(_)));
    }

    #[test]
    fn duplicated_action_fails() {
        let mut set = set_with(vec![BindingEntry::new("button", "<Keyboard>/e")]);
        set.push(strider_core::ActionBinding::new(
            "Use",
            [BindingEntry::new("button", "<Keyboard>/q")],
        ));
        let err = BindingProfile::from_set(&set, "Use").unwrap_err();
        assert!(matches!(err, Error::AmbiguousAction { .. }));
    }
}
