//=========================================================================
// Frame Sinks
//=========================================================================
//
// Consumers of per-tick frames.
//
// The orchestrator presents every frame to every registered sink, on the
// logic thread, right after the match update. Sinks must never block the
// tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{info, trace, warn};

//=== Internal Dependencies ===============================================

use super::frame::FrameSnapshot;
use crate::core::sim::Possession;

//=== FrameSink ===========================================================

/// Receives one frame per tick.
pub trait FrameSink: Send {
    fn present(&mut self, frame: &FrameSnapshot);
}

//=== LogSink =============================================================

/// Writes frames to the log: every frame at trace, possession changes at
/// info.
#[derive(Debug, Default)]
pub struct LogSink {
    last_possession: Possession,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &FrameSnapshot) {
        trace!(
            target: "output",
            "tick {}: player {:?} opponent {:?} ball {:?}",
            frame.tick,
            frame.player,
            frame.opponent,
            frame.ball
        );

        if frame.possession != self.last_possession {
            info!(
                target: "output",
                "tick {}: ball {} -> {}",
                frame.tick,
                self.last_possession,
                frame.possession
            );
            self.last_possession = frame.possession;
        }
    }
}

//=== ChannelSink =========================================================

/// Forwards frames over a bounded channel without blocking.
///
/// A full channel drops the frame; the consumer only ever needs the
/// latest one. Once the receiver is gone the sink goes quiet.
pub struct ChannelSink {
    sender: Sender<FrameSnapshot>,
    disconnected: bool,
    dropped: u64,
}

impl ChannelSink {
    pub fn new(sender: Sender<FrameSnapshot>) -> Self {
        Self {
            sender,
            disconnected: false,
            dropped: 0,
        }
    }

    /// Frames dropped because the channel was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

impl FrameSink for ChannelSink {
    fn present(&mut self, frame: &FrameSnapshot) {
        if self.disconnected {
            return;
        }

        match self.sender.try_send(*frame) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => self.dropped += 1,
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "output", "Frame receiver disconnected; dropping further frames");
                self.disconnected = true;
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
