//! The single active-filter slot read by the pump each tick.

use crate::filter::library::Filter;
use crate::filter::mode::{FilterMode, parse_mode};

/// Holds the active filter for a running session.
///
/// Selection replaces the active filter with a single assignment, so a tick that reads
/// [`FilterRegistry::active`] sees either the previous or the new filter, never a partial
/// update. The registry is an owned object passed by reference into the frame loop; there is no
/// process-wide state.
#[derive(Clone, Debug)]
pub struct FilterRegistry {
    mode: FilterMode,
    active: Filter,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterRegistry {
    /// Create a registry with the identity filter active.
    pub fn new() -> Self {
        Self {
            mode: FilterMode::Identity,
            active: Filter::Identity,
        }
    }

    /// Construct and install the filter for `mode`.
    ///
    /// Re-selecting the current mode rebuilds an identical filter; the observable output is
    /// unchanged.
    pub fn select(&mut self, mode: FilterMode) {
        self.mode = mode;
        self.active = mode.build();
        tracing::debug!(key = mode.key(), "filter selected");
    }

    /// Select by wire key.
    ///
    /// Unknown keys keep the previously active filter and return `false`; the miss is logged at
    /// warn level but never surfaces as an error.
    pub fn select_key(&mut self, key: &str) -> bool {
        match parse_mode(key) {
            Some(mode) => {
                self.select(mode);
                true
            }
            None => {
                tracing::warn!(key, "unrecognized filter mode key; keeping active filter");
                false
            }
        }
    }

    /// The currently active filter, read once per frame tick.
    pub fn active(&self) -> &Filter {
        &self.active
    }

    /// The mode that built the active filter.
    pub fn mode(&self) -> FilterMode {
        self.mode
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/registry.rs"]
mod tests;
