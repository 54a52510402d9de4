//! Declarative binding descriptions.
//!
//! A [`BindingSet`] is the plain-data form of an input layout: an ordered
//! list of named actions, each with an ordered list of requirement entries.
//! The input layer consumes it once at startup and never mutates it.
//!
//! Modifier requirements follow a naming convention: any entry whose name
//! starts with [`MODIFIER_PREFIX`] is a modifier slot. A modifier slot bound
//! to [`ANY_KEY_PATH`] is a wildcard and places no real requirement on the
//! binding.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Control path matched by any key on the keyboard.
pub const ANY_KEY_PATH: &str = "<Keyboard>/anyKey";

/// Entries whose name starts with this prefix are modifier requirements.
pub const MODIFIER_PREFIX: &str = "modifier";

/// One requirement of an action's binding: a named part and the control path
/// it must match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    /// Part name. Modifier parts follow the [`MODIFIER_PREFIX`] convention.
    pub name: String,
    /// Control path, e.g. `<Keyboard>/e`.
    pub path: String,
}

impl BindingEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Returns `true` if this entry is a modifier requirement.
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        self.name.starts_with(MODIFIER_PREFIX)
    }

    /// Returns `true` if this entry matches any key rather than one control.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.path == ANY_KEY_PATH
    }
}

/// A named action and its binding entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBinding {
    /// Action name, unique within a well-formed set.
    pub name: String,
    /// Requirement entries, in declaration order.
    pub entries: Vec<BindingEntry>,
}

impl ActionBinding {
    /// Create an action binding from its entries.
    pub fn new(name: impl Into<String>, entries: impl IntoIterator<Item = BindingEntry>) -> Self {
        Self {
            name: name.into(),
            entries: entries.into_iter().collect(),
        }
    }

    /// The entry holding the key or button itself, if any.
    #[must_use]
    pub fn control_entry(&self) -> Option<&BindingEntry> {
        self.entries.iter().find(|entry| !entry.is_modifier())
    }

    /// Modifier entries that name a concrete key (wildcards excluded).
    pub fn concrete_modifiers(&self) -> impl Iterator<Item = &BindingEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_modifier() && !entry.is_wildcard())
    }
}

/// An ordered set of action bindings.
///
/// Built once, via [`BindingSet::builder`] or deserialization, then handed to
/// the input layer by reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingSet {
    actions: Vec<ActionBinding>,
}

impl BindingSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with a builder pattern.
    #[must_use]
    pub fn builder() -> BindingSetBuilder {
        BindingSetBuilder::new()
    }

    /// Append an action binding.
    pub fn push(&mut self, action: ActionBinding) {
        self.actions.push(action);
    }

    /// All actions, in declaration order.
    #[must_use]
    pub fn actions(&self) -> &[ActionBinding] {
        &self.actions
    }

    /// Look up an action by name, requiring exactly one match.
    ///
    /// Zero or multiple matches mean the description is malformed and the
    /// input layer must not start from it.
    pub fn action(&self, name: &str) -> Result<&ActionBinding> {
        let mut matches = self.actions.iter().filter(|action| action.name == name);
        let Some(first) = matches.next() else {
            return Err(Error::ActionNotFound(name.to_string()));
        };
        let extra = matches.count();
        if extra > 0 {
            return Err(Error::AmbiguousAction {
                name: name.to_string(),
                count: extra + 1,
            });
        }
        Ok(first)
    }
}

/// Builder for creating a binding set with a fluent API.
#[derive(Debug, Default)]
pub struct BindingSetBuilder {
    set: BindingSet,
}

impl BindingSetBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action with the given entries.
    #[must_use]
    pub fn action(
        mut self,
        name: impl Into<String>,
        entries: impl IntoIterator<Item = BindingEntry>,
    ) -> Self {
        self.set.push(ActionBinding::new(name, entries));
        self
    }

    /// Build the binding set.
    #[must_use]
    pub fn build(self) -> BindingSet {
        self.set
    }
}
