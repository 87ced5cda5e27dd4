//=========================================================================
// Controls
//=========================================================================
//
// The gameplay commands a keyboard can drive and the per-tick snapshot of
// which of them are active.
//
// Architecture:
//   held keys → ActionMapper → Control → ControlFlags (immutable per tick)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::Action;

//=== Control =============================================================

/// A gameplay command bound to one or more keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Sprint,
    Pass,
    Shoot,
    Lob,
}

impl Action for Control {}

impl Control {
    /// Every control, in a stable order.
    pub const ALL: [Control; 8] = [
        Control::MoveUp,
        Control::MoveDown,
        Control::MoveLeft,
        Control::MoveRight,
        Control::Sprint,
        Control::Pass,
        Control::Shoot,
        Control::Lob,
    ];
}

//=== ControlFlags ========================================================

/// Snapshot of the controls held during one tick.
///
/// Built by the input system once per tick and handed to
/// [`MatchState::update`](super::MatchState::update) by value. Absent
/// controls are simply `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub pass: bool,
    pub shoot: bool,
    pub lob: bool,
}

impl ControlFlags {
    /// No controls held.
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
        sprint: false,
        pass: false,
        shoot: false,
        lob: false,
    };

    /// Builds a snapshot from a list of active controls.
    pub fn from_controls<I>(controls: I) -> Self
    where
        I: IntoIterator<Item = Control>,
    {
        let mut flags = Self::NONE;
        for control in controls {
            flags.set(control, true);
        }
        flags
    }

    /// Returns a copy with `control` switched on.
    pub fn with(mut self, control: Control) -> Self {
        self.set(control, true);
        self
    }

    pub fn set(&mut self, control: Control, active: bool) {
        match control {
            Control::MoveUp => self.up = active,
            Control::MoveDown => self.down = active,
            Control::MoveLeft => self.left = active,
            Control::MoveRight => self.right = active,
            Control::Sprint => self.sprint = active,
            Control::Pass => self.pass = active,
            Control::Shoot => self.shoot = active,
            Control::Lob => self.lob = active,
        }
    }

    pub fn is_active(&self, control: Control) -> bool {
        match control {
            Control::MoveUp => self.up,
            Control::MoveDown => self.down,
            Control::MoveLeft => self.left,
            Control::MoveRight => self.right,
            Control::Sprint => self.sprint,
            Control::Pass => self.pass,
            Control::Shoot => self.shoot,
            Control::Lob => self.lob,
        }
    }

    /// Returns `true` if no control is held.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(ControlFlags::default(), ControlFlags::NONE);
        assert!(ControlFlags::default().is_empty());
    }

    #[test]
    fn set_and_query_every_control() {
        for control in Control::ALL {
            let flags = ControlFlags::NONE.with(control);
            assert!(flags.is_active(control), "{:?} should be active", control);

            let others = Control::ALL.iter().filter(|c| **c != control);
            for other in others {
                assert!(!flags.is_active(*other), "{:?} leaked into {:?}", control, other);
            }
        }
    }

    #[test]
    fn from_controls_collects_all() {
        let flags = ControlFlags::from_controls([Control::MoveRight, Control::Sprint]);
        assert!(flags.right);
        assert!(flags.sprint);
        assert!(!flags.left);
        assert!(!flags.is_empty());
    }

    #[test]
    fn set_false_clears() {
        let mut flags = ControlFlags::NONE.with(Control::Shoot);
        flags.set(Control::Shoot, false);
        assert!(flags.is_empty());
    }
}
