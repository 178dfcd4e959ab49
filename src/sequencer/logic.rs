//! Boot and loader runs.
//!
//! A run walks `Intro → Streaming → Steps → Finalizing → Unlocked → Hidden`
//! (the loader skips Steps and Unlocked). Each phase is straight-line async
//! code that suspends only through [`Clock::sleep`].

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::types::{Phase, Presenter, RunReport, Screen};
use crate::clock::Clock;
use crate::config::{BootConfig, StepOrder};
use crate::content::{
    category_slug, display_label, BootStep, ContentStore, LineSource, RandomPick,
    SequentialCycle, SnippetMixer,
};
use crate::constants::EMPTY_POOL_PLACEHOLDER;
use crate::error::Result;
use crate::line_buffer::LineBuffer;
use crate::panels::PanelBoard;
use crate::progress_bar::ProgressBar;

const FINALIZE_HEADER: &str = "Finalizing boot sequence...";
const FINALIZE_BODY: [&str; 3] = [
    "Mapping kernels into memory space...",
    "Synchronizing skill modules across sessions...",
    "Validating process table and active context...",
];
const FINALIZE_STABLE: &str = "System state stabilized.";
const UNLOCK_LINES: [&str; 2] = ["> System unlocked.", "> Awaiting command..."];
const STEP_DONE_MARKER: &str = "[ OK ]";

/// Mutable state owned by one sequencer for the length of a run.
#[derive(Debug)]
struct RunContext<C, R, P> {
    log: LineBuffer,
    panels: PanelBoard,
    status: Option<String>,
    phase: Phase,
    history: Vec<Phase>,
    report: RunReport,
    clock: C,
    rng: R,
    presenter: P,
}

impl<C, R, P> RunContext<C, R, P>
where
    C: Clock,
    R: Rng,
    P: Presenter,
{
    fn begin(&mut self) {
        self.history.clear();
        self.report = RunReport::default();
        self.status = None;
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = self.phase.label(), to = phase.label(), "phase transition");
        self.phase = phase;
        self.history.push(phase);
    }

    fn emit(&mut self, text: impl Into<String>) {
        self.log.append(text);
        self.report.lines_emitted += 1;
    }

    fn present(&mut self, content: &ContentStore) -> Result<()> {
        self.presenter.present(&Screen {
            phase: self.phase,
            log: &self.log,
            status: self.status.as_deref(),
            panels: &self.panels,
            content,
        })
    }

    async fn pause(&mut self, ms: u64) {
        if ms > 0 {
            self.clock.sleep(ms).await;
        }
    }

    /// Clears the log and brings the viewport up over the main surface.
    fn open_viewport(&mut self) {
        self.panels.hide_main_surface();
        self.panels.show_log_viewport();
        self.log.clear();
    }

    fn close_viewport(&mut self) {
        self.panels.hide_log_viewport();
        self.panels.reveal_main_surface();
    }

    /// Chaotic scroll: random bursts of lines at random short intervals
    /// until `duration_ms` of clock time has passed.
    async fn stream<S: LineSource>(
        &mut self,
        config: &BootConfig,
        duration_ms: u64,
        source: &mut S,
    ) -> Result<()> {
        let mut mixer = SnippetMixer::new(&config.short_snippets, config.short_chance);
        let batch_min = config.batch_min.max(1);
        let batch_max = config.batch_max.max(batch_min);
        let start = self.clock.now_ms();

        while self.clock.now_ms().saturating_sub(start) < duration_ms {
            let batch = self.rng.gen_range(batch_min..=batch_max);
            for _ in 0..batch {
                let line = mixer.next_line(&mut self.rng, source);
                self.emit(line.text);
            }
            self.present(&config.content)?;

            let interval = self.rng.gen_range(
                config.interval_min_ms..=config.interval_max_ms.max(config.interval_min_ms),
            );
            // Virtual clocks only move when slept on.
            self.clock.sleep(interval.max(1)).await;
        }
        Ok(())
    }

    /// Boot steps in batches of 1..=batch_max, one bar per batch.
    async fn run_steps(&mut self, config: &BootConfig, bar: &ProgressBar) -> Result<()> {
        let mut order: Vec<&BootStep> = config.boot_steps.iter().collect();
        if config.steps.order == StepOrder::Shuffled {
            order.shuffle(&mut self.rng);
        }

        let content = &config.content;
        let mut index = 0;
        while index < order.len() {
            let size = self
                .rng
                .gen_range(1..=config.steps.batch_max.max(1))
                .min(order.len() - index);
            let batch = &order[index..index + size];
            index += size;

            for step in batch {
                self.emit(format!("> {}", step.label));
            }
            self.present(content)?;

            let duration = batch.iter().map(|s| s.duration_hint_ms).max().unwrap_or(0);
            let outcome = {
                let status = &mut self.status;
                let presenter = &mut self.presenter;
                let (phase, log, panels) = (self.phase, &self.log, &self.panels);
                bar.animate(duration, &mut self.clock, &mut self.rng, |_, frame| {
                    *status = Some(frame);
                    presenter.present(&Screen {
                        phase,
                        log,
                        status: status.as_deref(),
                        panels,
                        content,
                    })
                })
                .await?
            };

            if outcome.shortcut {
                self.report.bars_shortcut += 1;
            } else {
                self.report.bars_animated += 1;
            }

            if let Some(frame) = self.status.take() {
                self.emit(format!("  {frame}"));
            }
            for step in batch {
                self.emit(format!("{STEP_DONE_MARKER} {}", step.label));
            }
            self.present(content)?;
        }
        Ok(())
    }
}

/// Drives the boot and per-category loader animations.
///
/// Runs take `&mut self`, so a second trigger cannot start while one is in
/// flight.
#[derive(Debug)]
pub struct Sequencer<C, R, P> {
    config: BootConfig,
    bar: ProgressBar,
    ctx: RunContext<C, R, P>,
}

impl<C, R, P> Sequencer<C, R, P>
where
    C: Clock,
    R: Rng,
    P: Presenter,
{
    pub fn new(config: BootConfig, clock: C, rng: R, presenter: P) -> Self {
        let bar = ProgressBar::new(config.bar.clone());
        let ctx = RunContext {
            log: LineBuffer::new(config.max_lines),
            panels: PanelBoard::new(&config.content),
            status: None,
            phase: Phase::Idle,
            history: Vec::new(),
            report: RunReport::default(),
            clock,
            rng,
            presenter,
        };
        Self { config, bar, ctx }
    }

    pub fn config(&self) -> &BootConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.ctx.phase
    }

    /// Phases entered during the most recent run, in order.
    pub fn phase_history(&self) -> &[Phase] {
        &self.ctx.history
    }

    pub fn log(&self) -> &LineBuffer {
        &self.ctx.log
    }

    pub fn panels(&self) -> &PanelBoard {
        &self.ctx.panels
    }

    pub fn clock(&self) -> &C {
        &self.ctx.clock
    }

    pub fn presenter(&self) -> &P {
        &self.ctx.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.ctx.presenter
    }

    pub fn into_presenter(self) -> P {
        self.ctx.presenter
    }

    /// Draws the current state without changing it.
    pub fn redraw(&mut self) -> Result<()> {
        self.ctx.present(&self.config.content)
    }

    /// Expands one log detail on the logs panel; unknown roles hide all
    /// details and return `false`.
    pub fn toggle_log_detail(&mut self, role: &str) -> Result<bool> {
        let shown = self.ctx.panels.show_log_detail(role);
        self.redraw()?;
        Ok(shown)
    }

    /// Full boot: banner, pre-fill, chaotic stream, step bars, finalization,
    /// unlock, then hand the screen to the main surface.
    pub async fn run_boot(&mut self) -> Result<RunReport> {
        let config = &self.config;
        let ctx = &mut self.ctx;
        let content = &config.content;

        info!(
            stream_ms = config.boot_stream_ms,
            steps = config.boot_steps.len(),
            "boot sequence starting"
        );
        ctx.begin();

        ctx.enter(Phase::Intro);
        ctx.open_viewport();
        for line in &config.banner {
            ctx.emit(line.clone());
        }
        let mut source = RandomPick::new(&config.boot_steps, EMPTY_POOL_PLACEHOLDER);
        for _ in 0..config.prefill_lines {
            let line = source.next_line(&mut ctx.rng);
            ctx.emit(line);
        }
        ctx.present(content)?;
        ctx.pause(config.intro_pause_ms).await;

        ctx.enter(Phase::Streaming);
        ctx.stream(config, config.boot_stream_ms, &mut source).await?;

        if config.steps.enabled && !config.boot_steps.is_empty() {
            ctx.enter(Phase::Steps);
            ctx.run_steps(config, &self.bar).await?;
        }

        ctx.enter(Phase::Finalizing);
        let [first, second, third] = config.finalize_pauses_ms;
        ctx.emit("");
        ctx.emit(FINALIZE_HEADER);
        ctx.present(content)?;
        ctx.pause(first).await;
        for line in FINALIZE_BODY {
            ctx.emit(line);
        }
        ctx.present(content)?;
        ctx.pause(second).await;
        ctx.emit(FINALIZE_STABLE);
        ctx.emit("");
        ctx.present(content)?;
        ctx.pause(third).await;

        ctx.enter(Phase::Unlocked);
        for line in UNLOCK_LINES {
            ctx.emit(line);
        }
        ctx.emit("");
        ctx.present(content)?;
        ctx.pause(config.unlock_delay_ms).await;

        ctx.close_viewport();
        ctx.enter(Phase::Hidden);
        ctx.present(content)?;

        info!(lines = ctx.report.lines_emitted, "boot sequence complete");
        Ok(ctx.report.clone())
    }

    /// Short loader for one content category, then reveal its panel.
    ///
    /// `label` is normalized ("Contact Me" → `contact_me`). Lines come from
    /// the category's pool, or the default pool when it is missing or empty.
    /// A category with no panel is a no-op: nothing runs and the current
    /// screen is left as it was.
    pub async fn run_panel_loader(&mut self, label: &str) -> Result<RunReport> {
        let config = &self.config;
        let ctx = &mut self.ctx;
        let content = &config.content;

        let slug = category_slug(label);
        if !ctx.panels.has_panel(&slug) {
            debug!(category = %slug, "no panel bound to category, skipping loader");
            return Ok(RunReport::default());
        }
        let nice = display_label(label);
        info!(category = %slug, "panel loader starting");
        ctx.begin();

        ctx.enter(Phase::Intro);
        ctx.open_viewport();
        ctx.emit(format!("> Processing command: {nice}"));
        ctx.emit("");
        ctx.present(content)?;
        ctx.pause(config.intro_pause_ms).await;

        ctx.enter(Phase::Streaming);
        let lines = config.pools.lines_for(&slug);
        let mut source = SequentialCycle::new(lines, format!("> Executing panel: {nice}"));
        ctx.stream(config, config.panel_stream_ms, &mut source).await?;

        ctx.enter(Phase::Finalizing);
        if ctx.panels.show_panel(&slug) {
            ctx.report.panel_shown = Some(slug.clone());
        }
        ctx.present(content)?;
        ctx.pause(config.panel_reveal_delay_ms).await;

        ctx.close_viewport();
        ctx.enter(Phase::Hidden);
        ctx.present(content)?;

        info!(category = %slug, shown = ctx.report.panel_shown.is_some(), "panel loader complete");
        Ok(ctx.report.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiet_config() -> BootConfig {
        let mut config = BootConfig::default().fast();
        config.short_chance = 0.0;
        config
    }

    fn sequencer(config: BootConfig) -> Sequencer<ManualClock, StdRng, ()> {
        Sequencer::new(config, ManualClock::new(), StdRng::seed_from_u64(42), ())
    }

    #[tokio::test]
    async fn test_boot_walks_every_phase() {
        let mut seq = sequencer(quiet_config());
        assert_eq!(seq.phase(), Phase::Idle);

        seq.run_boot().await.unwrap();

        assert_eq!(
            seq.phase_history(),
            &[
                Phase::Intro,
                Phase::Streaming,
                Phase::Steps,
                Phase::Finalizing,
                Phase::Unlocked,
                Phase::Hidden,
            ]
        );
        assert_eq!(seq.phase(), Phase::Hidden);
    }

    #[tokio::test]
    async fn test_boot_without_steps_skips_step_phase() {
        let mut config = quiet_config();
        config.steps.enabled = false;
        let mut seq = sequencer(config);

        seq.run_boot().await.unwrap();

        assert!(!seq.phase_history().contains(&Phase::Steps));
    }

    #[tokio::test]
    async fn test_boot_finishes_with_unlock_lines() {
        let mut seq = sequencer(quiet_config());
        seq.run_boot().await.unwrap();

        let tail: Vec<&str> = seq.log().tail(3).map(|l| l.text.as_str()).collect();
        assert_eq!(tail, vec!["> System unlocked.", "> Awaiting command...", ""]);
        assert!(!seq.panels().is_log_visible());
        assert!(seq.panels().is_main_visible());
    }

    #[tokio::test]
    async fn test_boot_uses_configured_pauses() {
        let mut config = quiet_config();
        config.steps.enabled = false;
        config.intro_pause_ms = 5;
        config.finalize_pauses_ms = [250, 350, 300];
        config.unlock_delay_ms = 400;
        let mut seq = sequencer(config);

        seq.run_boot().await.unwrap();

        assert_eq!(seq.clock().sleeps(), &[5, 250, 350, 300, 400]);
    }

    #[tokio::test]
    async fn test_stream_sleeps_within_interval_range() {
        let mut config = quiet_config();
        config.steps.enabled = false;
        config.boot_stream_ms = 2000;
        config.interval_min_ms = 30;
        config.interval_max_ms = 89;
        let mut seq = sequencer(config);

        seq.run_boot().await.unwrap();

        let sleeps = seq.clock().sleeps();
        assert!(sleeps.len() > 10);
        assert!(sleeps.iter().all(|&ms| (30..=89).contains(&ms)));
        assert!(seq.clock().total_slept() >= 2000);
    }

    #[tokio::test]
    async fn test_step_phase_marks_every_step_done() {
        let mut config = quiet_config();
        config.max_lines = 1000;
        let steps = config.boot_steps.clone();
        let mut seq = sequencer(config);

        seq.run_boot().await.unwrap();

        for step in &steps {
            let marker = format!("{STEP_DONE_MARKER} {}", step.label);
            assert!(
                seq.log().iter().any(|l| l.text == marker),
                "missing marker for {}",
                step.label
            );
        }
    }

    #[tokio::test]
    async fn test_loader_reveals_matching_panel() {
        let mut seq = sequencer(quiet_config());
        let report = seq.run_panel_loader("Summary").await.unwrap();

        assert_eq!(report.panel_shown.as_deref(), Some("summary"));
        assert_eq!(seq.panels().active_panel(), Some("summary"));
        assert_eq!(
            seq.phase_history(),
            &[Phase::Intro, Phase::Streaming, Phase::Finalizing, Phase::Hidden]
        );
    }

    #[tokio::test]
    async fn test_loader_unknown_category_does_nothing() {
        let mut seq = sequencer(quiet_config());
        let report = seq.run_panel_loader("Nowhere").await.unwrap();

        assert_eq!(report, RunReport::default());
        assert_eq!(seq.phase(), Phase::Idle);
        assert!(seq.phase_history().is_empty());
        assert!(seq.log().is_empty());
        assert_eq!(seq.panels().active_panel(), None);
    }

    #[tokio::test]
    async fn test_loader_clears_previous_log() {
        let mut seq = sequencer(quiet_config());
        seq.run_boot().await.unwrap();
        seq.run_panel_loader("contact").await.unwrap();

        assert_eq!(
            seq.log().iter().next().map(|l| l.text.as_str()),
            Some("> Processing command: Contact")
        );
    }

    #[test]
    fn test_toggle_log_detail() {
        let mut seq = sequencer(quiet_config());
        assert!(seq.toggle_log_detail("desktop").unwrap());
        assert_eq!(seq.panels().active_detail(), Some("desktop"));
        assert!(!seq.toggle_log_detail("ghost").unwrap());
        assert_eq!(seq.panels().active_detail(), None);
    }
}
