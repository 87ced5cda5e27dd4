//=========================================================================
// Output
//=========================================================================
//
// Per-tick frames and the sinks that consume them.
//
// Architecture:
//   MatchState → FrameSnapshot → [FrameSink] (log, channel → platform)
//
//=========================================================================

//=== Module Declarations =================================================

mod frame;
mod sink;

//=== Public API ==========================================================

pub use frame::{EntityId, FrameSnapshot};
pub use sink::{ChannelSink, FrameSink, LogSink};
