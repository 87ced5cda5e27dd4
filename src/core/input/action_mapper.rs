//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps held keys to game actions based on configured bindings.
//
// Architecture:
//   KeyCode → HashMap → Action   (many keys may share one action)
//
// A key maps to at most one action; binding it again replaces the old
// action.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{action::Action, event::KeyCode};

//=== ActionMapper ========================================================

/// Maps keys to actions via a plain key lookup.
pub struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a new mapper with no bindings.
    pub fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding of that key.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        if let Some(previous) = self.key_bindings.insert(key, action) {
            if previous != action {
                debug!(target: "core::input", "Rebound {:?}: {:?} -> {:?}", key, previous, action);
            }
        }
    }

    /// Removes the binding for a key. Returns the action it was bound to.
    pub fn unbind_key(&mut self, key: KeyCode) -> Option<A> {
        self.key_bindings.remove(&key)
    }

    /// Removes every key bound to `action`.
    pub fn unbind_action(&mut self, action: A) {
        self.key_bindings.retain(|_, bound| *bound != action);
    }

    /// Removes all bindings.
    pub fn clear(&mut self) {
        self.key_bindings.clear();
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the action bound to `key`, if any.
    pub fn map_key(&self, key: KeyCode) -> Option<A> {
        self.key_bindings.get(&key).copied()
    }

    /// Returns every key bound to `action`.
    pub fn keys_for(&self, action: A) -> Vec<KeyCode> {
        self.key_bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect()
    }

    /// Maps a set of held keys to the actions they trigger.
    ///
    /// Unbound keys are skipped. An action held through two keys appears
    /// twice; callers that need a set collect into one.
    pub fn map_keys<'a, I>(&'a self, keys: I) -> impl Iterator<Item = A> + 'a
    where
        I: IntoIterator<Item = &'a KeyCode>,
        I::IntoIter: 'a,
    {
        keys.into_iter().filter_map(move |key| self.map_key(*key))
    }

    /// Iterates over all (key, action) bindings in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = (KeyCode, A)> + '_ {
        self.key_bindings.iter().map(|(key, action)| (*key, *action))
    }

    pub fn len(&self) -> usize {
        self.key_bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_bindings.is_empty()
    }
}

impl<A: Action> Default for ActionMapper<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
