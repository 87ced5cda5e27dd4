//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the match running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Receive platform events via the bridge channel
// - Turn held keys into one ControlFlags snapshot per tick
// - Advance the MatchState and present the resulting frame to every sink
// - Maintain deterministic pacing using a fixed tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer. It owns
// each subsystem directly and updates them at a fixed rate in a
// background thread. Communication with the platform occurs only through
// crossbeam channels; no mutable state is shared.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod input;
pub mod output;
pub mod platform_bridge;
pub mod sim;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Modules ====================================================

use input::InputSystem;
use output::{FrameSink, FrameSnapshot};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use sim::MatchState;

//=== CoreSystemsOrchestrator =============================================
//
// Owns the event collector, the input system, the match and the frame
// sinks. One call to `run_tick` is one simulation step.
//
pub(crate) struct CoreSystemsOrchestrator {
    event_collector: EventCollector,
    input_system: InputSystem,
    state: MatchState,
    sinks: Vec<Box<dyn FrameSink>>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Wires all core systems but does not yet start the logic thread.
    //
    pub(crate) fn new(
        receiver: Receiver<PlatformEvent>,
        state: MatchState,
        sinks: Vec<Box<dyn FrameSink>>,
    ) -> Self {
        Self {
            event_collector: EventCollector::new(receiver),
            input_system: InputSystem::new(),
            state,
            sinks,
        }
    }

    //--- run_tick() -------------------------------------------------------
    //
    // Performs exactly one tick:
    //  1. Collects platform events
    //  2. Digests them into a control snapshot
    //  3. Advances the match
    //  4. Presents the new frame to every sink
    //
    pub(crate) fn run_tick(&mut self) -> TickControl {
        if self.event_collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        let controls = self.input_system.process_frame(self.event_collector.batches());
        self.state.update(controls);

        let frame = FrameSnapshot::from_state(&self.state);
        for sink in &mut self.sinks {
            sink.present(&frame);
        }

        TickControl::Continue
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread that calls `run_tick` once per
    // `frame_duration`, sleeping the remainder of each frame, and exits
    // cleanly when a shutdown signal is received.
    //
    pub(crate) fn spawn_core_thread(mut self, frame_duration: Duration) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            info!(target: "core", "Core thread started, tick period {:?}", frame_duration);

            loop {
                let frame_start = Instant::now();

                if self.run_tick() == TickControl::Exit {
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            info!(target: "core", "Core thread exiting after {} ticks", self.state().tick());
        })
    }

    //--- Accessors --------------------------------------------------------

    pub(crate) fn state(&self) -> &MatchState {
        &self.state
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
