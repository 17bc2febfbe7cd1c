//! Foreground run loop.
//!
//! Owns the tick source: a tokio interval firing every `--tick-secs`
//! seconds, each fire advancing the clock by one simulated minute. The
//! loop is the single owner of the clock; ticks, stdin commands, and
//! Ctrl-C are serialized through one `select!`, so no locking exists.

use std::io::Write as _;
use std::time::Duration;

use clap::Args;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use focusloop_core::{
    dispatch, Config, CoreError, DesktopNotifier, IntervalClock, Intervals, Notifier, NullNotifier,
};

#[derive(Args)]
pub struct RunArgs {
    /// Work interval length in minutes (overrides config)
    #[arg(long)]
    work: Option<u32>,
    /// Short break length in minutes (overrides config)
    #[arg(long)]
    short_break: Option<u32>,
    /// Long break length in minutes (overrides config)
    #[arg(long)]
    long_break: Option<u32>,
    /// Work sets before the long break (overrides config)
    #[arg(long)]
    sets: Option<u32>,
    /// Seconds between ticks; each tick counts down one minute
    #[arg(long, default_value_t = 60)]
    tick_secs: u64,
    /// Disable desktop notifications
    #[arg(long)]
    no_notify: bool,
}

impl RunArgs {
    fn intervals(&self, config: &Config) -> Intervals {
        Intervals {
            work_minutes: self.work.unwrap_or(config.intervals.work_minutes),
            short_break_minutes: self
                .short_break
                .unwrap_or(config.intervals.short_break_minutes),
            long_break_minutes: self
                .long_break
                .unwrap_or(config.intervals.long_break_minutes),
            sets_until_long_break: self.sets.unwrap_or(config.intervals.sets_until_long_break),
        }
    }
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let intervals = args.intervals(&config);
    let notifier: Box<dyn Notifier> = if args.no_notify || !config.notifications.enabled {
        Box::new(NullNotifier)
    } else {
        Box::new(DesktopNotifier)
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run_loop(intervals, args.tick_secs.max(1), notifier.as_ref()));
    // the stdin reader may still be parked in a blocking read; don't wait on it
    runtime.shutdown_background();
    result?;
    Ok(())
}

async fn run_loop(
    intervals: Intervals,
    tick_secs: u64,
    notifier: &dyn Notifier,
) -> Result<(), CoreError> {
    let mut clock = IntervalClock::new(intervals);

    let mut ticker = tokio::time::interval(Duration::from_secs(tick_secs));
    // at-most-one-in-flight: a stalled host must not burst-deliver ticks
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // the registration fire renders the initial display without decrementing;
    // the first countdown decrement lands one full period after start
    ticker.tick().await;

    let event = clock.start()?;
    dispatch(&event, notifier);
    info!("clock started: {}", clock.display());
    render(&clock);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(event) = clock.tick() {
                    dispatch(&event, notifier);
                }
                render(&clock);
            }
            line = lines.next_line() => {
                match line? {
                    None => break, // stdin closed
                    Some(cmd) => match cmd.trim() {
                        "" => {}
                        "start" => {
                            let event = clock.start()?;
                            ticker.reset();
                            dispatch(&event, notifier);
                            render(&clock);
                        }
                        "rewind" | "r" => {
                            let event = clock.rewind()?;
                            dispatch(&event, notifier);
                            render(&clock);
                        }
                        "pause" | "p" => {
                            clock.toggle_pause()?;
                            render(&clock);
                        }
                        "status" | "s" => {
                            let snap = clock.snapshot()?;
                            println!();
                            println!("{}", serde_json::to_string_pretty(&snap)?);
                            dispatch(&snap, notifier);
                            render(&clock);
                        }
                        "stop" | "q" => break,
                        other => warn!("unknown command: {other}"),
                    },
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    clock.stop()?;
    // clear the status surface on the way out
    print!("\r{:<20}\r", "");
    let _ = std::io::stdout().flush();
    info!("clock stopped");
    Ok(())
}

/// Redraw the status-surface line in place.
fn render(clock: &IntervalClock) {
    let display = if clock.is_paused() {
        format!("{} (paused)", clock.display())
    } else {
        clock.display()
    };
    print!("\r{display:<20}");
    let _ = std::io::stdout().flush();
}
