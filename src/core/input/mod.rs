//=========================================================================
// Input System
//
// Turns the keyboard events of one tick into the immutable ControlFlags
// snapshot the match consumes.
//
// Responsibilities:
// - Digest batches of platform input events into held-key state
// - Map held keys to match controls through configurable bindings
// - Publish one ControlFlags value per tick
//
// Notes:
// Owned and updated by the CoreSystemsOrchestrator on the logic thread.
// A control stays active for as long as any key bound to it is held.
//
//=========================================================================

//=== Submodules ==========================================================

mod action;
mod action_mapper;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::Action;
pub use action_mapper::ActionMapper;
pub use event::{InputEvent, KeyCode};
pub use state_tracker::StateTracker;

//=== External Crates =====================================================

use log::debug;

//=== Internal Imports ====================================================

use crate::core::sim::{Control, ControlFlags};

//=== Default Bindings ====================================================

/// Keyboard layout of the match: WASD or arrows to move, number row for
/// sprint and the three kicks.
pub const DEFAULT_BINDINGS: [(KeyCode, Control); 12] = [
    (KeyCode::KeyW, Control::MoveUp),
    (KeyCode::ArrowUp, Control::MoveUp),
    (KeyCode::KeyS, Control::MoveDown),
    (KeyCode::ArrowDown, Control::MoveDown),
    (KeyCode::KeyA, Control::MoveLeft),
    (KeyCode::ArrowLeft, Control::MoveLeft),
    (KeyCode::KeyD, Control::MoveRight),
    (KeyCode::ArrowRight, Control::MoveRight),
    (KeyCode::Digit1, Control::Sprint),
    (KeyCode::Digit2, Control::Pass),
    (KeyCode::Digit3, Control::Shoot),
    (KeyCode::Digit4, Control::Lob),
];

//=== InputSystem =========================================================

/// Held-key tracking plus key → control mapping.
pub struct InputSystem {
    state: StateTracker,
    mapper: ActionMapper<Control>,
    controls: ControlFlags,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with [`DEFAULT_BINDINGS`].
    pub fn new() -> Self {
        let mut system = Self::unbound();
        for (key, control) in DEFAULT_BINDINGS {
            system.bind_key(key, control);
        }
        system
    }

    /// Creates an input system with no bindings at all.
    pub fn unbound() -> Self {
        Self {
            state: StateTracker::new(),
            mapper: ActionMapper::new(),
            controls: ControlFlags::NONE,
        }
    }

    //--- Binding API ------------------------------------------------------

    pub fn bind_key(&mut self, key: KeyCode, control: Control) {
        self.mapper.bind_key(key, control);
    }

    pub fn unbind_key(&mut self, key: KeyCode) -> Option<Control> {
        self.mapper.unbind_key(key)
    }

    pub fn mapper(&self) -> &ActionMapper<Control> {
        &self.mapper
    }

    //--- process_frame() --------------------------------------------------
    //
    // Consumes all input batches received during the current tick, in
    // arrival order, and rebuilds the control snapshot from the keys
    // held at the end of the tick.
    //
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) -> ControlFlags {
        self.state.clear();
        for batch in batches {
            self.state.process_events(batch);
        }

        let controls = ControlFlags::from_controls(self.mapper.map_keys(self.state.keys_down()));

        if controls != self.controls {
            debug!(target: "core::input", "Controls changed: {:?}", controls);
        }

        self.controls = controls;
        controls
    }

    //--- Query Methods ----------------------------------------------------

    /// Control snapshot produced by the last `process_frame`.
    pub fn controls(&self) -> ControlFlags {
        self.controls
    }

    /// Raw held-key state.
    pub fn state(&self) -> &StateTracker {
        &self.state
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
