//! Headless autoplay session: argument parsing, logging setup and the run loop.
//!
//! The binary has no renderer and no keyboard. A random input source stands
//! in for the player, and gravity comes either from a real [`Ticker`] thread
//! (`--interval-ms > 0`) or is interleaved synchronously with the inputs.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{GameSnapshot, RandomSource};
use crate::engine::{run_queue, Driver, Event, RunSummary, StopReason, Ticker};
use crate::types::{GameAction, GRAVITY_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Seed for pieces and inputs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Stop after this many events even if the game is still running.
    pub max_events: u64,
    /// Gravity period. 0 runs without sleeping.
    pub interval_ms: u64,
    /// Random inputs delivered between two gravity ticks.
    pub actions_per_tick: u32,
    /// Print the final snapshot as JSON instead of text.
    pub json: bool,
    pub log_level: LevelFilter,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_events: 100_000,
            interval_ms: 0,
            actions_per_tick: 2,
            json: false,
            log_level: LevelFilter::Warn,
        }
    }
}

pub const USAGE: &str = "usage: blockfall [--seed N] [--max-events N] [--interval-ms N] \
[--actions-per-tick N] [--json] [--log-level LEVEL]
  --interval-ms 0 runs as fast as possible; the real game uses 500";

/// Parse command line arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_sim_args(args: &[String]) -> Result<Option<SimConfig>> {
    let mut config = SimConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--json" => config.json = true,
            "--seed" => {
                config.seed = Some(parse_value(args, &mut i, "--seed")?);
            }
            "--max-events" => {
                config.max_events = parse_value(args, &mut i, "--max-events")?;
            }
            "--interval-ms" => {
                config.interval_ms = parse_value(args, &mut i, "--interval-ms")?;
            }
            "--actions-per-tick" => {
                config.actions_per_tick = parse_value(args, &mut i, "--actions-per-tick")?;
            }
            "--log-level" => {
                config.log_level = parse_value(args, &mut i, "--log-level")?;
            }
            other => {
                return Err(anyhow!("blockfall: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let v = args
        .get(*i)
        .ok_or_else(|| anyhow!("blockfall: missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("blockfall: invalid {} value: {}", flag, v))
}

/// Route `log` records to stderr through log4rs.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    use log4rs::append::console::{ConsoleAppender, Target};
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;
    use log4rs::filter::threshold::ThresholdFilter;

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {l} {t} {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Random stand-in for a player: every action equally likely.
#[derive(Debug, Clone)]
pub struct Autoplayer<R> {
    rng: R,
}

impl<R: Rng> Autoplayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_action(&mut self) -> GameAction {
        GameAction::ALL[self.rng.random_range(0..GameAction::ALL.len())]
    }
}

/// Play one session and return its summary and final snapshot.
pub fn run_sim(config: &SimConfig) -> Result<(RunSummary, GameSnapshot)> {
    log::info!(
        "starting session: seed {}, interval {}ms, {} action(s) per tick",
        config.seed.map_or_else(|| "os".to_string(), |s| s.to_string()),
        config.interval_ms,
        config.actions_per_tick
    );

    let (source, player_rng) = match config.seed {
        Some(seed) => (
            RandomSource::seeded(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (RandomSource::from_os_rng(), StdRng::from_os_rng()),
    };
    let mut driver = Driver::new(source);
    let player = Autoplayer::new(player_rng);

    let summary = if config.interval_ms == 0 {
        run_unpaced(&mut driver, player, config)
    } else {
        run_paced(&mut driver, player, config)?
    };

    Ok((summary, driver.into_state().snapshot()))
}

fn run_unpaced<R: Rng>(
    driver: &mut Driver<RandomSource<StdRng>>,
    mut player: Autoplayer<R>,
    config: &SimConfig,
) -> RunSummary {
    let mut events: u64 = 0;
    let per_round = u64::from(config.actions_per_tick) + 1;

    let reason = loop {
        if driver.game_over() {
            break StopReason::GameOver;
        }
        if events >= config.max_events {
            break StopReason::EventLimit;
        }

        let event = if events % per_round == per_round - 1 {
            Event::GravityTick
        } else {
            Event::Action(player.next_action())
        };
        driver.dispatch(event);
        events += 1;
    };

    let state = driver.state();
    RunSummary {
        reason,
        events,
        score: state.score(),
        lines: state.lines(),
    }
}

fn run_paced<R: Rng + Send + 'static>(
    driver: &mut Driver<RandomSource<StdRng>>,
    mut player: Autoplayer<R>,
    config: &SimConfig,
) -> Result<RunSummary> {
    let interval = Duration::from_millis(config.interval_ms);
    let (tx, rx) = mpsc::channel();

    let ticker = Ticker::spawn(interval, tx.clone());

    let actions_per_tick = config.actions_per_tick;
    let input_gap = interval / actions_per_tick.saturating_add(1);
    let input = thread::Builder::new()
        .name("autoplayer".into())
        .spawn(move || {
            if actions_per_tick == 0 || input_gap.is_zero() {
                return;
            }
            loop {
                thread::sleep(input_gap);
                if tx.send(Event::Action(player.next_action())).is_err() {
                    break;
                }
            }
        })
        .map_err(|e| anyhow!("blockfall: spawn input thread failed: {}", e))?;

    let summary = run_queue(driver, &rx, Some(config.max_events), |snap| {
        log::trace!("score {} lines {}", snap.score, snap.lines);
    });

    drop(rx);
    let ticks = ticker.stop();
    input
        .join()
        .map_err(|_| anyhow!("blockfall: input thread panicked"))?;
    log::debug!("ticker delivered {} ticks", ticks);

    Ok(summary)
}

/// One-line description of a finished session
pub fn describe(summary: &RunSummary) -> String {
    let reason = match summary.reason {
        StopReason::GameOver => "game over",
        StopReason::Disconnected => "input closed",
        StopReason::EventLimit => "event limit reached",
    };
    format!(
        "{}: score {}, lines {}, events {} (gravity every {}ms in real play)",
        reason, summary.score, summary.lines, summary.events, GRAVITY_INTERVAL_MS
    )
}
