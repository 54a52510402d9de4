//! Core types for the Strider character controller.
//!
//! This crate provides the foundational pieces shared by the input layer:
//! - The declarative binding description ([`BindingSet`], [`ActionBinding`],
//!   [`BindingEntry`])
//! - Common error types

pub mod binding;
pub mod error;

pub use binding::{
    ActionBinding, BindingEntry, BindingSet, BindingSetBuilder, ANY_KEY_PATH, MODIFIER_PREFIX,
};
pub use error::{Error, Result};
