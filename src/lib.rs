//=========================================================================
// Cube Football - Library Root
//
// A two-cube football match: one keyboard-driven Player, one scripted
// Opponent, one Ball, stepped at a fixed tick rate.
//
// Responsibilities:
// - Expose the headless match simulation (`core::sim`) for embedding
//   and testing
// - Expose the engine facade (`EngineBuilder`, `Engine`) that runs the
//   match in a window
// - Keep the Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use cube_football::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the simulation, input mapping, frame output and the
// logic-thread orchestrator. The simulation is usable on its own:
// `MatchState::update` needs nothing but a `ControlFlags` value.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the OS-specific logic (window, Winit integration,
// event loop) and is not part of the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{
    ConfigError, Engine, EngineBuilder, EngineConfig, DEFAULT_CHANNEL_CAPACITY, DEFAULT_TPS,
    DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_TITLE, SEED_ENV, TPS_ENV,
};
