//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level keyboard state with per-tick deltas.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys held) → query
//
// Tick lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-tick deltas (keys pressed/released).
pub struct StateTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    keys_down: HashSet<KeyCode>,

    //--- Tick Deltas (reset each tick via clear()) -----------------------
    keys_pressed_this_tick: HashSet<KeyCode>,
    keys_released_this_tick: HashSet<KeyCode>,
}

impl StateTracker {
    /// Creates a new state tracker with nothing held.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_pressed_this_tick: HashSet::new(),
            keys_released_this_tick: HashSet::new(),
        }
    }

    //--- Tick Processing --------------------------------------------------

    /// Clears tick-specific deltas (pressed/released flags).
    pub(super) fn clear(&mut self) {
        self.keys_pressed_this_tick.clear();
        self.keys_released_this_tick.clear();
    }

    /// Processes input events in order, updating internal state.
    pub(super) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------
    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_tick.insert(*key);
                }
            }

            InputEvent::KeyUp { key } => {
                // Only mark as released if it was actually down
                if self.keys_down.remove(key) {
                    self.keys_released_this_tick.insert(*key);
                }
            }

            InputEvent::FocusLost => {
                self.keys_released_this_tick.extend(self.keys_down.drain());
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this tick.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_tick.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this tick.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_tick.contains(&key)
    }

    /// Returns an iterator over all keys currently held.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut held: Vec<_> = self.keys_down.iter().map(|k| format!("{:?}", k)).collect();
        held.sort();

        f.debug_struct("StateTracker").field("held", &held).finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
