// Viewport
pub const MAX_LOG_LINES: usize = 60;
pub const PREFILL_LINES: usize = 25;

// Streaming phase
pub const BOOT_STREAM_MS: u64 = 6500;
pub const PANEL_STREAM_MS: u64 = 1000;
pub const BATCH_MIN: usize = 1;
pub const BATCH_MAX: usize = 6;
pub const INTERVAL_MIN_MS: u64 = 30;
pub const INTERVAL_MAX_MS: u64 = 89; // inclusive
pub const SHORT_SNIPPET_CHANCE: f64 = 0.25;

// Intro / finalization / unlock pauses
pub const INTRO_PAUSE_MS: u64 = 150;
pub const FINALIZE_FIRST_PAUSE_MS: u64 = 250;
pub const FINALIZE_SECOND_PAUSE_MS: u64 = 350;
pub const FINALIZE_THIRD_PAUSE_MS: u64 = 300;
pub const UNLOCK_DELAY_MS: u64 = 400;
pub const PANEL_REVEAL_DELAY_MS: u64 = 200;

// Step phase
pub const STEP_BATCH_MAX: usize = 3;
pub const STEP_DURATION_HINT_MS: u64 = 180;

// Progress bar
pub const BAR_WIDTH: usize = 24;
pub const BAR_TICK_COUNT: u32 = 20;
pub const BAR_CHAOS_PROBABILITY: f64 = 0.35;
pub const BAR_STEP_JITTER_MIN: f64 = 0.5;
pub const BAR_STEP_JITTER_MAX: f64 = 1.5;
pub const BAR_FILLED_GLYPH: char = '█';
pub const BAR_EMPTY_GLYPH: char = '░';

// Placeholders
pub const EMPTY_POOL_PLACEHOLDER: &str = "> Executing module...";
pub const DEFAULT_CATEGORY: &str = "default";

// Event loop
pub const INPUT_POLL_MS: u64 = 50;
