//! Text progress bar with a jittery tick animation.
//!
//! `render` is a pure function of the fraction. `animate` drives a
//! [`BarState`] from 0 to 1 over roughly the requested duration, calling back
//! with the freshly rendered bar on every tick. A configurable chaos
//! probability skips the animation and jumps straight to 100%.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::constants::{
    BAR_CHAOS_PROBABILITY, BAR_EMPTY_GLYPH, BAR_FILLED_GLYPH, BAR_STEP_JITTER_MAX,
    BAR_STEP_JITTER_MIN, BAR_TICK_COUNT, BAR_WIDTH,
};
use crate::error::Result;

/// Absorbs float error so 0.29 floors to 29%, not 28%.
const FLOOR_EPSILON: f64 = 1e-9;

/// Bar appearance and pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    pub width: usize,
    /// Number of ticks an average animation takes.
    pub tick_count: u32,
    /// Chance of skipping straight to 100%.
    pub chaos_probability: f64,
    pub filled_glyph: char,
    pub empty_glyph: char,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self {
            width: BAR_WIDTH,
            tick_count: BAR_TICK_COUNT,
            chaos_probability: BAR_CHAOS_PROBABILITY,
            filled_glyph: BAR_FILLED_GLYPH,
            empty_glyph: BAR_EMPTY_GLYPH,
        }
    }
}

/// Completion of a running animation. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BarState {
    fraction: f64,
}

impl BarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Adds `step` (negative steps are ignored) and clamps at 1.0.
    pub fn advance(&mut self, step: f64) {
        if step.is_finite() && step > 0.0 {
            self.fraction = (self.fraction + step).min(1.0);
        }
    }

    pub fn complete(&mut self) {
        self.fraction = 1.0;
    }

    pub fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarOutcome {
    /// Ticks slept through; zero when the bar jumped to 100%.
    pub ticks: u32,
    pub shortcut: bool,
}

#[derive(Debug, Clone)]
pub struct ProgressBar {
    settings: BarSettings,
}

impl ProgressBar {
    pub fn new(settings: BarSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BarSettings {
        &self.settings
    }

    /// Number of filled segments for `fraction`; exactly `width` at 1.0.
    pub fn filled_segments(&self, fraction: f64) -> usize {
        let fraction = clamp_fraction(fraction);
        ((fraction * self.settings.width as f64 + FLOOR_EPSILON).floor() as usize)
            .min(self.settings.width)
    }

    /// `[█████░░░░░]  50%` style rendering.
    pub fn render(&self, fraction: f64) -> String {
        let fraction = clamp_fraction(fraction);
        let filled = self.filled_segments(fraction);
        let empty = self.settings.width - filled;
        let percent = (fraction * 100.0 + FLOOR_EPSILON).floor() as u32;

        let mut bar = String::with_capacity(self.settings.width * 3 + 8);
        bar.push('[');
        bar.extend(std::iter::repeat(self.settings.filled_glyph).take(filled));
        bar.extend(std::iter::repeat(self.settings.empty_glyph).take(empty));
        bar.push_str(&format!("] {percent:>3}%"));
        bar
    }

    /// Animates 0 → 100% over about `duration_ms`.
    ///
    /// The tick interval is `duration_ms / tick_count`; each tick adds a step
    /// of `1 / tick_count` scaled by a random jitter, so the mean completion
    /// time lands near `duration_ms`. `on_tick` receives every rendered frame,
    /// including the initial 0% and the final 100%.
    pub async fn animate<C, R, F>(
        &self,
        duration_ms: u64,
        clock: &mut C,
        rng: &mut R,
        mut on_tick: F,
    ) -> Result<BarOutcome>
    where
        C: Clock,
        R: Rng + ?Sized,
        F: FnMut(&BarState, String) -> Result<()>,
    {
        let mut state = BarState::new();

        let roll: f64 = rng.gen();
        if roll < self.settings.chaos_probability || duration_ms == 0 {
            state.complete();
            on_tick(&state, self.render(state.fraction()))?;
            return Ok(BarOutcome {
                ticks: 0,
                shortcut: duration_ms > 0,
            });
        }

        let tick_count = self.settings.tick_count.max(1);
        let tick_ms = duration_ms / u64::from(tick_count);
        let mean_step = 1.0 / f64::from(tick_count);

        on_tick(&state, self.render(state.fraction()))?;

        let mut ticks = 0;
        while !state.is_complete() {
            clock.sleep(tick_ms).await;
            let jitter = rng.gen_range(BAR_STEP_JITTER_MIN..BAR_STEP_JITTER_MAX);
            state.advance(mean_step * jitter);
            ticks += 1;
            on_tick(&state, self.render(state.fraction()))?;
        }

        Ok(BarOutcome {
            ticks,
            shortcut: false,
        })
    }
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ascii_bar(width: usize, chaos: f64) -> ProgressBar {
        ProgressBar::new(BarSettings {
            width,
            tick_count: 10,
            chaos_probability: chaos,
            filled_glyph: '#',
            empty_glyph: '.',
        })
    }

    #[test]
    fn test_render_empty_half_full() {
        let bar = ascii_bar(10, 0.0);
        assert_eq!(bar.render(0.0), "[..........]   0%");
        assert_eq!(bar.render(0.5), "[#####.....]  50%");
        assert_eq!(bar.render(1.0), "[##########] 100%");
    }

    #[test]
    fn test_render_floors_partial_segments() {
        let bar = ascii_bar(10, 0.0);
        assert_eq!(bar.filled_segments(0.19), 1);
        assert_eq!(bar.render(0.19), "[#.........]  19%");
    }

    #[test]
    fn test_render_does_not_lose_a_point_to_rounding() {
        let bar = ascii_bar(100, 0.0);
        assert_eq!(bar.filled_segments(0.29), 29);
        assert!(bar.render(0.29).ends_with(" 29%"));
        assert!(bar.render(0.57).ends_with(" 57%"));
        assert!(bar.render(0.58).ends_with(" 58%"));
    }

    #[test]
    fn test_render_clamps_out_of_range() {
        let bar = ascii_bar(4, 0.0);
        assert_eq!(bar.render(-1.0), bar.render(0.0));
        assert_eq!(bar.render(7.0), bar.render(1.0));
        assert_eq!(bar.render(f64::NAN), bar.render(0.0));
    }

    #[test]
    fn test_bar_state_is_monotonic_and_clamped() {
        let mut state = BarState::new();
        state.advance(0.6);
        state.advance(-0.3);
        assert_eq!(state.fraction(), 0.6);
        state.advance(0.6);
        assert_eq!(state.fraction(), 1.0);
        assert!(state.is_complete());
    }

    #[tokio::test]
    async fn test_animate_reaches_full() {
        let bar = ascii_bar(10, 0.0);
        let mut clock = ManualClock::new();
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut frames = Vec::new();

        let outcome = bar
            .animate(500, &mut clock, &mut rng, |_, frame| {
                frames.push(frame);
                Ok(())
            })
            .await
            .unwrap();

        assert!(!outcome.shortcut);
        assert!(outcome.ticks >= 7 && outcome.ticks <= 20);
        assert_eq!(frames.first().map(String::as_str), Some("[..........]   0%"));
        assert_eq!(frames.last().map(String::as_str), Some("[##########] 100%"));
        assert!(clock.sleeps().iter().all(|&ms| ms == 50));
    }

    #[tokio::test]
    async fn test_animate_fraction_never_decreases() {
        let bar = ascii_bar(20, 0.0);
        let mut clock = ManualClock::new();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut seen = Vec::new();

        bar.animate(1000, &mut clock, &mut rng, |state, _| {
            seen.push(state.fraction());
            Ok(())
        })
        .await
        .unwrap();

        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seen.last().copied(), Some(1.0));
    }

    #[tokio::test]
    async fn test_chaos_shortcut_skips_animation() {
        let bar = ascii_bar(10, 1.0);
        let mut clock = ManualClock::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut frames = Vec::new();

        let outcome = bar
            .animate(5000, &mut clock, &mut rng, |_, frame| {
                frames.push(frame);
                Ok(())
            })
            .await
            .unwrap();

        assert!(outcome.shortcut);
        assert_eq!(outcome.ticks, 0);
        assert!(clock.sleeps().is_empty());
        assert_eq!(frames, vec!["[##########] 100%".to_string()]);
    }

    #[tokio::test]
    async fn test_zero_duration_completes_instantly() {
        let bar = ascii_bar(10, 0.0);
        let mut clock = ManualClock::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = bar
            .animate(0, &mut clock, &mut rng, |_, _| Ok(()))
            .await
            .unwrap();

        assert_eq!(outcome.ticks, 0);
        assert!(!outcome.shortcut);
        assert_eq!(clock.now_ms(), 0);
    }
}
