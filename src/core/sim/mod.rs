//=========================================================================
// Match Simulation
//=========================================================================
//
// Headless game state: no rendering, no platform, no threads.
//
// Architecture:
//   ControlFlags (per tick) → MatchState::update() → positions
//
//=========================================================================

//=== Module Declarations =================================================

mod controls;
mod match_state;
mod pitch;
mod types;

//=== Public API ==========================================================

pub use controls::{Control, ControlFlags};
pub use match_state::*;
pub use pitch::{BoxSize, PitchLayout};
pub use types::{Agent, Ball, Possession, Role, Vec2};
