//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's core thread via
// crossbeam channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   └─ Converts Winit      │    │  ↓               │
//  │   ↓                      │    │  MatchState      │
//  │  InputBuffer             │    │  ↓               │
//  │   ↓                      │    │  FrameSinks      │
//  │  RedrawRequested         │    └──────────────────┘
//  │   ↓ (flush)              │         ↑       │
//  │  Event Channel ──────────┼─────────┘       │
//  │  Frame Channel ←─────────┼─────────────────┘
//  │   ↓                      │   FrameSnapshot
//  │  Window title            │
//  └──────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Latest frame drawn (older frames skipped)
//    → Core ticks at fixed TPS (independent of refresh rate)
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: Batches all input atomically,
//   ensuring deterministic order even with high event rates
// - **Focus loss releases keys**: KeyUp events go to whichever window
//   has focus, so losing focus is forwarded as FocusLost
// - **Graceful channel disconnect**: If the core thread dies, platform
//   logs a warning but keeps running to allow window closure
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::output::FrameSnapshot;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window manager, input event aggregator and frame presenter.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). Input goes
/// to the core thread over `event_sender`; frames come back over
/// `frame_receiver` and are drawn into the window title.
///
/// The window is created lazily in `resumed()`.
pub(crate) struct Platform {
    window: Option<Window>,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
    frame_receiver: Receiver<FrameSnapshot>,
    latest_frame: Option<FrameSnapshot>,
    title: String,
    size: (u32, u32),
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        frame_receiver: Receiver<FrameSnapshot>,
        title: String,
        size: (u32, u32),
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            frame_receiver,
            latest_frame: None,
            title,
            size,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created (no
    /// display, wrong thread) or fails while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core thread as one batch.
    ///
    /// A disconnected channel (core thread gone) only logs a warning so
    /// the user can still close the window.
    fn flush_input_buffer(&mut self) {
        let count = self.buffer.len();

        if let Some(events) = self.buffer.drain() {
            trace!(target: "platform::input", "Flushing {} events", count);

            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    count
                );
            }
        }
    }

    /// Keeps only the newest frame from the core thread. Returns `true`
    /// if a new frame arrived.
    fn receive_frames(&mut self) -> bool {
        match self.frame_receiver.try_iter().last() {
            Some(frame) => {
                self.latest_frame = Some(frame);
                true
            }
            None => false,
        }
    }

    fn notify_closed(&self) {
        if self.event_sender.send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Core thread already gone");
        }
    }
}

//=== Title Rendering =====================================================

/// Renders a frame as a window title.
fn frame_title(base: &str, frame: &FrameSnapshot) -> String {
    format!(
        "{} | tick {} | ball {} at ({:.1}, {:.1}) | player ({:.1}, {:.1}) \
         | opponent ({:.1}, {:.1})",
        base,
        frame.tick,
        frame.possession,
        frame.ball[0],
        frame.ball[2],
        frame.player[0],
        frame.player[2],
        frame.opponent[0],
        frame.opponent[2],
    )
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on startup (or the first resume on mobile).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.0, self.size.1));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.notify_closed();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.notify_closed();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::Focused(focused) => {
                if let Some(event) = self.input_processor.process_focus(*focused) {
                    debug!(target: "platform::input", "Focus lost, releasing held keys");
                    self.buffer.push(event);
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, then draw the newest frame
                self.flush_input_buffer();
                let new_frame = self.receive_frames();

                if let Some(window) = &self.window {
                    if let (true, Some(frame)) = (new_frame, &self.latest_frame) {
                        window.set_title(&frame_title(&self.title, frame));
                    }
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
