//=========================================================================
// Action Trait
//=========================================================================
//
// Game-defined commands routed by the input layer.
//
// Actions are opaque to the mapper: it stores and returns them, the game
// interprets them. The match uses `Control` as its action type.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and deduplication
/// - `Debug`: Logging support
/// - `Send + 'static`: Moved into the logic thread with the mapper
///
/// # Example
///
/// ```
/// use cube_football::core::input::Action;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Confirm, Back }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Kick,
        Run,
    }

    impl Action for TestAction {}

    #[test]
    fn action_is_hashable() {
        let mut set = HashSet::new();
        set.insert(TestAction::Kick);
        set.insert(TestAction::Kick);
        set.insert(TestAction::Run);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&TestAction::Kick));
    }

    #[test]
    fn action_is_send_and_static() {
        fn assert_action<T: Action>() {}
        assert_action::<TestAction>();
        assert_action::<crate::core::sim::Control>();
    }

    #[test]
    fn action_debug_format() {
        let debug_str = format!("{:?}", TestAction::Run);
        assert!(debug_str.contains("Run"));
    }
}
