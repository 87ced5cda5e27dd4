//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cube_football::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{ConfigError, Engine, EngineBuilder, EngineConfig};

// Match simulation
pub use crate::core::sim::{
    Agent, Ball, Control, ControlFlags, MatchState, PitchLayout, Possession, Release,
    ReleaseKind, Role, Vec2,
};

// Input
pub use crate::core::input::{Action, InputEvent, InputSystem, KeyCode};

// Output
pub use crate::core::output::{ChannelSink, EntityId, FrameSink, FrameSnapshot, LogSink};
