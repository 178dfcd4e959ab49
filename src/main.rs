mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use bootseq::build_info;
use bootseq::constants::INPUT_POLL_MS;
use bootseq::headless::HeadlessPresenter;
use bootseq::input::{map_key, Command};
use bootseq::{BootConfig, Result, Sequencer, TokioClock};
use crossterm::event::{self, Event};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::Backend;
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use ui::TuiPresenter;

#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    fast: bool,
    headless: bool,
    category: Option<String>,
    log_file: Option<PathBuf>,
}

fn main() {
    let args = parse_args();

    if let Err(e) = init_tracing(args.log_file.as_deref(), args.headless) {
        eprintln!("Could not open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("bootseq: {}", e);
        std::process::exit(1);
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                cli.config_path = Some(PathBuf::from(required_value(&args, i)));
            }
            "--seed" => {
                i += 1;
                let value = required_value(&args, i);
                cli.seed = Some(value.parse().unwrap_or_else(|_| {
                    eprintln!("--seed requires a number, got '{}'", value);
                    std::process::exit(1);
                }));
            }
            "--category" => {
                i += 1;
                cli.category = Some(required_value(&args, i).to_string());
            }
            "--log-file" => {
                i += 1;
                cli.log_file = Some(PathBuf::from(required_value(&args, i)));
            }
            "--fast" => cli.fast = true,
            "--headless" => cli.headless = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'bootseq --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// The value slot at `i`, which follows its flag at `i - 1`.
fn required_value(args: &[String], i: usize) -> &str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("{} requires a value", args[i - 1]);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        "bootseq - fake terminal boot sequence\n\
         \n\
         Usage: bootseq [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --config PATH     Load settings from a JSON file\n\
         \x20 --seed N          Seed the RNG for a repeatable run\n\
         \x20 --fast            Skip every delay\n\
         \x20 --headless        Print the log to stdout instead of drawing a TUI\n\
         \x20 --category NAME   With --headless, run one panel loader instead of the boot\n\
         \x20 --log-file PATH   Write logs to PATH (filter with BOOTSEQ_LOG)\n\
         \x20 --version, -v     Show version information\n\
         \x20 --help, -h        Show this help"
    );
}

/// The TUI owns the terminal, so it only logs when given a file.
fn init_tracing(log_file: Option<&Path>, headless: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_env("BOOTSEQ_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        None if headless => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
        None => {}
    }
    Ok(())
}

fn run(args: CliArgs) -> Result<()> {
    let mut config = BootConfig::resolve(args.config_path.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.fast {
        config = config.fast();
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    if args.headless {
        run_headless(config, rng, &runtime, args.category.as_deref())
    } else {
        if args.category.is_some() {
            warn!("--category only applies with --headless, ignoring");
        }
        run_tui(config, rng, &runtime)
    }
}

fn run_headless(
    config: BootConfig,
    rng: StdRng,
    runtime: &Runtime,
    category: Option<&str>,
) -> Result<()> {
    let content = config.content.clone();
    let presenter = HeadlessPresenter::new(io::stdout());
    let mut sequencer = Sequencer::new(config, TokioClock::new(), rng, presenter);

    match category {
        Some(label) => {
            let report = runtime.block_on(sequencer.run_panel_loader(label))?;
            match report.panel_shown {
                Some(key) => sequencer.presenter_mut().print_panel(&content, &key)?,
                None => warn!(category = label, "no panel bound to category"),
            }
        }
        None => {
            runtime.block_on(sequencer.run_boot())?;
        }
    }
    Ok(())
}

fn run_tui(config: BootConfig, rng: StdRng, runtime: &Runtime) -> Result<()> {
    let terminal = ui::setup_terminal()?;
    let mut sequencer = Sequencer::new(config, TokioClock::new(), rng, TuiPresenter::new(terminal));

    let result = event_loop(&mut sequencer, runtime);

    let terminal = sequencer.into_presenter().into_terminal();
    ui::restore_terminal(terminal)?;
    result
}

fn event_loop<B: Backend>(
    sequencer: &mut Sequencer<TokioClock, StdRng, TuiPresenter<B>>,
    runtime: &Runtime,
) -> Result<()> {
    sequencer.redraw()?;

    loop {
        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(_, _) => {
                sequencer.redraw()?;
                continue;
            }
            _ => continue,
        };

        let logs_open = sequencer.panels().active_panel() == Some("logs");
        match map_key(key, sequencer.phase(), logs_open) {
            Some(Command::Quit) => break,
            Some(Command::Boot) => {
                runtime.block_on(sequencer.run_boot())?;
                drain_pending_input()?;
            }
            Some(Command::RunCategory(index)) => {
                let Some(label) = sequencer
                    .config()
                    .content
                    .panel_at(index)
                    .map(|p| p.title.clone())
                else {
                    debug!(index, "no command bound to key");
                    continue;
                };
                runtime.block_on(sequencer.run_panel_loader(&label))?;
                drain_pending_input()?;
            }
            Some(Command::ToggleDetail(index)) => {
                let role = sequencer
                    .config()
                    .content
                    .log_detail_at(index)
                    .map(|d| d.role.clone());
                if let Some(role) = role {
                    sequencer.toggle_log_detail(&role)?;
                }
            }
            None => {}
        }
    }

    info!("exiting");
    Ok(())
}

/// Keys pressed while a run owned the screen are dropped, not replayed.
fn drain_pending_input() -> Result<()> {
    let mut dropped = 0;
    while event::poll(Duration::ZERO)? {
        event::read()?;
        dropped += 1;
    }
    if dropped > 0 {
        debug!(dropped, "discarded input received during run");
    }
    Ok(())
}
