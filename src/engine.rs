//=========================================================================
// Cube Football Engine
//
// Main entry point: wires the match, the frame sinks, the logic thread
// and the platform window together.
//
// Architecture:
// ```text
//     EngineConfig ──with_config()──┐
//                                   ↓
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_seed()                blocks until exit
//         ├─ with_window_*()
//         └─ with_sink()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::output::{ChannelSink, FrameSink, LogSink};
use crate::core::sim::MatchState;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== Defaults ============================================================

pub const DEFAULT_TPS: f64 = 60.0;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 128;
pub const DEFAULT_WINDOW_TITLE: &str = "Cube Football";
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (800, 600);

/// Frames queued for the window before new ones are dropped.
const FRAME_CHANNEL_CAPACITY: usize = 8;

/// Environment variable overriding the tick rate.
pub const TPS_ENV: &str = "CUBE_FOOTBALL_TPS";

/// Environment variable fixing the shot deflection seed.
pub const SEED_ENV: &str = "CUBE_FOOTBALL_SEED";

//=== ConfigError =========================================================

/// Invalid configuration values read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Tick rate does not give a finite non-zero tick period.
    InvalidTps { value: String },

    /// Seed is not an unsigned 64-bit integer.
    InvalidSeed { value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTps { value } => {
                write!(f, "{} must be a positive number, got {:?}", TPS_ENV, value)
            }
            Self::InvalidSeed { value } => {
                write!(f, "{} must be an unsigned integer, got {:?}", SEED_ENV, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//=== EngineConfig ========================================================

/// Runtime settings.
///
/// `seed: None` draws the deflection seed from OS entropy, so every match
/// plays differently.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub tps: f64,
    pub channel_capacity: usize,
    pub seed: Option<u64>,
    pub window_title: String,
    pub window_size: (u32, u32),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tps: DEFAULT_TPS,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed: None,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `CUBE_FOOTBALL_TPS` and `CUBE_FOOTBALL_SEED`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(TPS_ENV) {
            config.tps = parse_tps(&raw)?;
        }

        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed { value: raw.clone() })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}

fn parse_tps(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(tps) if tick_period(tps).is_some() => Ok(tps),
        _ => Err(ConfigError::InvalidTps { value: raw.to_string() }),
    }
}

/// Time between two ticks at `tps`, if that is a representable non-zero
/// duration. Rejects zero, negative, NaN, infinite and vanishingly small
/// rates.
pub(crate) fn tick_period(tps: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(1.0 / tps)
        .ok()
        .filter(|period| !period.is_zero())
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (match updates per second)
/// - **Channel capacity**: 128 input batches
/// - **Seed**: none (OS entropy)
/// - **Window**: "Cube Football", 800x600
/// - **Sinks**: a [`LogSink`]
///
/// # Examples
///
/// ```no_run
/// use cube_football::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_seed(42)
///     .build()
///     .run();
/// ```
pub struct EngineBuilder {
    config: EngineConfig,
    sinks: Vec<Box<dyn FrameSink>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            sinks: Vec::new(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not positive and finite, or is so small that
    /// the tick period overflows.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(
            tick_period(tps).is_some(),
            "TPS must be positive and finite, got {}",
            tps
        );
        self.config.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    /// Fixes the shot deflection seed for a reproducible match.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.config.window_title = title.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window_size = (width, height);
        self
    }

    /// Adds a frame sink next to the built-in log and window sinks.
    pub fn with_sink(mut self, sink: impl FrameSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Replaces every setting at once (sinks are kept).
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`with_tps`](Self::with_tps)
    /// and [`with_channel_capacity`](Self::with_channel_capacity).
    pub fn with_config(self, config: EngineConfig) -> Self {
        let EngineConfig {
            tps,
            channel_capacity,
            seed,
            window_title,
            window_size,
        } = config;

        let mut builder = self
            .with_tps(tps)
            .with_channel_capacity(channel_capacity)
            .with_window_title(window_title)
            .with_window_size(window_size.0, window_size.1);
        builder.config.seed = seed;
        builder
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, seed: {:?})",
            self.config.tps, self.config.channel_capacity, self.config.seed
        );

        let mut sinks: Vec<Box<dyn FrameSink>> = Vec::with_capacity(self.sinks.len() + 2);
        sinks.push(Box::new(LogSink::new()));
        sinks.extend(self.sinks);

        Engine {
            config: self.config,
            sinks,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Cube Football runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → MatchState → FrameSinks
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, Title
///
/// Communication: crossbeam channels (PlatformEvent ↓, FrameSnapshot ↑)
/// ```
pub struct Engine {
    config: EngineConfig,
    sinks: Vec<Box<dyn FrameSink>>,
}

impl Engine {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    //--- Execution --------------------------------------------------------

    /// Starts the match and blocks until the window is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event and frame channels
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: core receives `WindowClosed` and exits; the
    ///    logic thread is joined
    ///
    /// Platform failures and a panicking logic thread are logged, never
    /// propagated.
    pub fn run(self) {
        let Engine { config, mut sinks } = self;
        info!("Starting engine runtime (TPS: {})", config.tps);

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx) = bounded(config.channel_capacity);
        let (frame_tx, frame_rx) = bounded(FRAME_CHANNEL_CAPACITY);
        sinks.push(Box::new(ChannelSink::new(frame_tx)));

        //--- 2. Spawn the core logic thread -------------------------------
        let state = match config.seed {
            Some(seed) => {
                info!("Match seed: {}", seed);
                MatchState::new(seed)
            }
            None => MatchState::from_entropy(),
        };

        let Some(period) = tick_period(config.tps) else {
            error!("Unusable tick rate: {}", config.tps);
            return;
        };

        let orchestrator = CoreSystemsOrchestrator::new(event_rx, state, sinks);
        let core_handle = orchestrator.spawn_core_thread(period);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(event_tx, frame_rx, config.window_title, config.window_size);

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
