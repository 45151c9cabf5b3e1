use clap::Parser;
use flume::{Receiver, Sender, TryRecvError};
use gui::core::gui::TimerPanel;
use helpers::logging::init_logging;
use laptimer::core::command::{parse_console_line, TimerCommand};
use laptimer::core::race_timer::RaceTimer;
use laptimer::interfaces::gui_interface::TimerSnapshot;
use laptimer::post::race_summary::RaceSummary;
use laptimer::pre::read_timer_pars::TimerPars;
use laptimer::pre::timer_opts::TimerOpts;
use std::io::BufRead;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, PartialEq)]
enum SessionState {
    Continue,
    InputClosed,
    Quit,
}

/// spawn_console_reader reads commands from stdin in a separate thread and sends them to the
/// timer loop. The thread ends when stdin is closed or the receiver is gone.
fn spawn_console_reader(tx: Sender<TimerCommand>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    log::warn!("Failed to read console input: {}", err);
                    break;
                }
            };

            match parse_console_line(&line) {
                Ok(Some(command)) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => log::warn!("{}", err),
            }
        }
    })
}

/// drain_commands applies all commands received since the previous loop iteration.
fn drain_commands(timer: &mut RaceTimer, rx: &Receiver<TimerCommand>) -> SessionState {
    loop {
        match rx.try_recv() {
            Ok(TimerCommand::Quit) => return SessionState::Quit,
            Ok(TimerCommand::Status) => {
                log::info!("{}", TimerSnapshot::from_timer(timer).status_line())
            }
            Ok(command) => {
                if timer.apply(&command) {
                    log::info!("{}", TimerSnapshot::from_timer(timer).status_line());
                }
            }
            Err(TryRecvError::Empty) => return SessionState::Continue,
            Err(TryRecvError::Disconnected) => return SessionState::InputClosed,
        }
    }
}

/// run_console runs the timer loop in the console. It ends on quit, or once the input is closed
/// and the timer does not run anymore. Returns the final timer for post-processing.
fn run_console(timer_pars: &TimerPars, poll_interval_ms: u64) -> anyhow::Result<RaceTimer> {
    let mut timer = RaceTimer::new(timer_pars.race_duration_s)?;

    let (tx, rx) = flume::unbounded();
    let _ = spawn_console_reader(tx);

    println!("Commands: start, stop, reset, pit (or 1p), duration <s>, laps <n>, status, quit");

    let t_origin = Instant::now();
    let mut input_closed = false;

    loop {
        if !input_closed {
            match drain_commands(&mut timer, &rx) {
                SessionState::Quit => break,
                SessionState::InputClosed => {
                    log::debug!("Console input closed");
                    input_closed = true;
                }
                SessionState::Continue => {}
            }
        }

        if timer.tick(t_origin.elapsed().as_millis() as u64) {
            log::info!("{}", TimerSnapshot::from_timer(&timer).status_line());
        }

        if input_closed && !timer.is_running() {
            break;
        }

        thread::sleep(Duration::from_millis(poll_interval_ms));
    }

    Ok(timer)
}

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get timer options from the command line arguments
    let timer_opts: TimerOpts = TimerOpts::parse();

    init_logging(timer_opts.debug)
        .map_err(|err| anyhow::anyhow!("Failed to set up logging: {}", err))?;

    // get timer parameters
    let timer_pars = TimerPars::resolve(&timer_opts)?;

    log::info!("Race duration is {}s", timer_pars.race_duration_s);

    // EXECUTION -----------------------------------------------------------------------------------
    if !timer_opts.gui {
        log::info!("Running timer in the console...");
        let timer = run_console(&timer_pars, timer_opts.poll_interval_ms)?;

        let summary = RaceSummary::from_timer(&timer);
        summary.print_summary();

        if let Some(summary_path) = &timer_opts.summary_path {
            match summary.write_summary_to_file(summary_path) {
                Ok(path) => log::info!("Summary written to {}", path),
                Err(err) => log::warn!("Could not write summary: {}", err),
            }
        }
    } else {
        log::info!("Starting GUI...");

        // the GUI owns the timer and must run in the main thread
        let gui = TimerPanel::new(&timer_pars)?;
        let native_options = eframe::NativeOptions {
            initial_window_size: Some(eframe::egui::Vec2::new(
                timer_pars.window_width,
                timer_pars.window_height,
            )),
            ..eframe::NativeOptions::default()
        };
        eframe::run_native(Box::new(gui), native_options);
    }

    Ok(())
}
