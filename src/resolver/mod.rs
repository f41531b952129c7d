//! Dependency resolution for registry components
//!
//! This module handles:
//! - Expanding requested names into their `registryDependencies` closure
//! - Ordering the closure so dependencies precede dependents
//! - Circular dependency detection (returned as data, not raised)
//! - Reporting references to components the registry does not publish
//!
//! Resolution is a pure function over the dependency graph. It runs to
//! completion before anything touches the filesystem.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{GraftError, Result};
use crate::registry::Catalog;

pub mod sort;

pub use sort::resolve;

/// Read access to `name -> registryDependencies`
pub trait DependencyGraph {
    /// Dependencies of `name`, or `None` if the graph has no such node
    fn dependencies_of(&self, name: &str) -> Option<&[String]>;
}

impl DependencyGraph for Catalog {
    fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|item| item.registry_dependencies.as_slice())
    }
}

impl DependencyGraph for HashMap<String, Vec<String>> {
    fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

/// A name that was requested or referenced but is absent from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedDependency {
    pub name: String,
    /// Component whose `registryDependencies` mention `name`; `None` when the
    /// user requested it directly
    pub required_by: Option<String>,
}

/// Successful resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSet {
    /// Installable names, dependencies strictly before dependents
    pub order: Vec<String>,
    /// Names that could not be resolved, in discovery order
    pub unresolved: Vec<UnresolvedDependency>,
}

impl ResolvedSet {
    /// Requested names missing from the catalog
    pub fn missing_requested(&self) -> impl Iterator<Item = &str> {
        self.unresolved
            .iter()
            .filter(|u| u.required_by.is_none())
            .map(|u| u.name.as_str())
    }

    /// Transitive references to components the catalog does not publish
    pub fn missing_transitive(&self) -> impl Iterator<Item = &UnresolvedDependency> {
        self.unresolved.iter().filter(|u| u.required_by.is_some())
    }
}

/// Outcome of [`resolve`]: exactly one of an order or a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Ordered(ResolvedSet),
    /// Names along the back-edge, first and last entries are the same name
    Cycle(Vec<String>),
}

impl Resolution {
    /// Convert a cycle into [`GraftError::CircularDependency`]
    pub fn into_result(self) -> Result<ResolvedSet> {
        match self {
            Resolution::Ordered(set) => Ok(set),
            Resolution::Cycle(chain) => Err(GraftError::CircularDependency { chain }),
        }
    }
}
