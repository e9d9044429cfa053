//! Timer commands: live countdown, state snapshot, mode table.

use std::io::{self, Write};
use std::time::Duration;

use clap::Subcommand;
use studysmart_core::{
    format_mm_ss, Config, Event, Notifier, NotifyError, NullNotifier, TimerEngine, TimerMode,
};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the countdown in the terminal
    Run {
        /// Stop after this many completed focus cycles
        #[arg(long, default_value = "1")]
        cycles: u64,
        /// Starting mode: focus, short-break or long-break
        #[arg(long)]
        mode: Option<String>,
    },
    /// Print the initial timer state as JSON
    Status,
    /// List the mode table
    Modes,
}

/// Terminal notification collaborator: rings the bell and prints a
/// banner. Failures are swallowed by the caller.
struct BellNotifier {
    sound: bool,
}

impl Notifier for BellNotifier {
    fn notify(&self, ended_label: &str) -> Result<(), NotifyError> {
        let mut out = io::stdout();
        if self.sound {
            write!(out, "\x07")?;
        }
        writeln!(out, "StudySmart Timer: Your {ended_label} has ended!")?;
        out.flush()?;
        Ok(())
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let durations = config.mode_durations()?;

    match action {
        TimerAction::Run { cycles, mode } => {
            let mut engine = TimerEngine::with_durations(durations);
            if let Some(mode) = mode {
                let mode: TimerMode = mode.parse()?;
                engine.switch_mode(mode);
            }
            let bell = BellNotifier {
                sound: config.notifications.sound,
            };
            let notifier: &dyn Notifier = if config.notifications.enabled {
                &bell
            } else {
                &NullNotifier
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(countdown(&mut engine, cycles.max(1), notifier))?;
        }
        TimerAction::Status => {
            let engine = TimerEngine::with_durations(durations);
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Modes => {
            for mode in TimerMode::ALL {
                println!(
                    "{:<13} {:>6}  {}",
                    mode.label(),
                    format_mm_ss(durations.for_mode(mode)),
                    mode.color()
                );
            }
        }
    }

    Ok(())
}

/// Drive the engine with a one-second interval until `target_cycles`
/// focus cycles have completed.
///
/// The engine never resumes by itself after a completion; this driver
/// restarts it for the next interval.
async fn countdown(
    engine: &mut TimerEngine,
    target_cycles: u64,
    notifier: &dyn Notifier,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Starting {} ({}). Press Ctrl-C to quit.",
        engine.mode().label(),
        format_mm_ss(engine.remaining_secs())
    );

    loop {
        engine.start();
        render(engine)?;

        let finished = {
            // The interval lives only while the engine runs; leaving
            // this scope drops and cancels it.
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            // First tick of a fresh interval fires immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match engine.tick() {
                    Some(event) => break event,
                    None => render(engine)?,
                }
            }
        };

        if let Event::TimerFinished {
            ended_mode,
            ended_label,
            next_mode,
            completed_focus_cycles,
            ..
        } = finished
        {
            println!();
            // Fire-and-forget: a failed bell never stops the timer.
            if let Err(e) = notifier.notify(&ended_label) {
                if std::env::var("STUDYSMART_DEBUG_NOTIFY").is_ok() {
                    eprintln!("notification error: {e}");
                }
            }
            if ended_mode == TimerMode::Focus && completed_focus_cycles >= target_cycles {
                println!("Done: {completed_focus_cycles} focus cycle(s) completed.");
                return Ok(());
            }
            println!(
                "Next: {} ({})",
                next_mode.label(),
                format_mm_ss(engine.remaining_secs())
            );
        }
    }
}

fn render(engine: &TimerEngine) -> io::Result<()> {
    let mut out = io::stdout();
    write!(
        out,
        "\r[{}] {}  {:>3.0}%",
        engine.mode().label(),
        format_mm_ss(engine.remaining_secs()),
        engine.progress() * 100.0
    )?;
    out.flush()
}
