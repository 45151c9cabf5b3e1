use crate::core::command::TimerCommand;
use crate::core::tick::TickScheduler;
use helpers::general::{
    check_race_duration, parse_laps_completed, parse_race_duration, InputValueError,
};

/// Race duration used if nothing else is configured: a 4 hour endurance race.
pub const DEFAULT_RACE_DURATION_S: u64 = 4 * 60 * 60;

/// Pit stop count shown before the first pit stop is recorded. Recording the first pit stop
/// (usually before the start to arm pit tracking) brings the count to 0.
pub const PIT_COUNT_UNARMED: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerState {
    Stopped,
    Running,
    Finished, // stopped after the full race duration has run
}

/// RaceTimer tracks the elapsed time of a race against its configured duration together with the
/// operator-entered lap count and the pit stops. It knows nothing about rendering or input
/// devices, the UI forwards commands and calls `tick` once per loop iteration.
///
/// * `race_duration_s` - (s) Configured race duration, always > 0
/// * `elapsed_s` - (s) Accumulated running time
/// * `running` - Whether elapsed time advances
/// * `laps_completed` - Operator-entered number of laps, may be fractional
/// * `pit_stop_count` - Number of recorded pit stops minus one (see PIT_COUNT_UNARMED)
/// * `last_pit_time_s` - (s) Elapsed time at the last recorded pit stop
#[derive(Debug, Clone)]
pub struct RaceTimer {
    race_duration_s: u64,
    elapsed_s: u64,
    running: bool,
    laps_completed: f64,
    pit_stop_count: i32,
    last_pit_time_s: Option<u64>,
    scheduler: TickScheduler,
}

impl Default for RaceTimer {
    fn default() -> Self {
        RaceTimer {
            race_duration_s: DEFAULT_RACE_DURATION_S,
            elapsed_s: 0,
            running: false,
            laps_completed: 0.0,
            pit_stop_count: PIT_COUNT_UNARMED,
            last_pit_time_s: None,
            scheduler: TickScheduler::new(),
        }
    }
}

impl RaceTimer {
    /// new creates a stopped timer. The race duration must be positive and fit into an i64.
    pub fn new(race_duration_s: u64) -> Result<RaceTimer, InputValueError> {
        let race_duration_s = check_race_duration(race_duration_s)?;

        Ok(RaceTimer {
            race_duration_s,
            ..Default::default()
        })
    }

    // ---------------------------------------------------------------------------------------------
    // COMMANDS ------------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// set_duration replaces the race duration by the value in the inserted free text. Malformed
    /// or non-positive input is ignored and the previous duration is kept.
    pub fn set_duration(&mut self, text: &str) -> bool {
        match parse_race_duration(text) {
            Ok(race_duration_s) => {
                self.race_duration_s = race_duration_s;
                log::info!("Race duration set to {}s", race_duration_s);
                true
            }
            Err(err) => {
                log::debug!("Ignoring race duration input: {}", err);
                false
            }
        }
    }

    /// start lets the elapsed time advance. Starting a timer that already ran the full race
    /// duration does nothing.
    pub fn start(&mut self) -> bool {
        if self.running || self.elapsed_s >= self.race_duration_s {
            return false;
        }
        self.running = true;
        log::info!("Timer started at {}", format_duration(self.elapsed_s as i64));
        true
    }

    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        log::info!("Timer stopped at {}", format_duration(self.elapsed_s as i64));
        true
    }

    /// reset returns the timer to a clean slate. The configured race duration is kept.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_s = 0;
        self.laps_completed = 0.0;
        self.pit_stop_count = PIT_COUNT_UNARMED;
        self.last_pit_time_s = None;
        log::info!("Timer reset");
    }

    /// set_laps_completed replaces the lap count by the value in the inserted free text. Malformed
    /// or negative input is ignored.
    pub fn set_laps_completed(&mut self, text: &str) -> bool {
        match parse_laps_completed(text) {
            Ok(laps_completed) => {
                self.laps_completed = laps_completed;
                log::debug!("Laps completed set to {:.2}", laps_completed);
                true
            }
            Err(err) => {
                log::debug!("Ignoring laps input: {}", err);
                false
            }
        }
    }

    /// record_pit counts a pit stop at the current elapsed time. Works whether or not the timer is
    /// running.
    pub fn record_pit(&mut self) {
        self.pit_stop_count = self.pit_stop_count.saturating_add(1);
        self.last_pit_time_s = Some(self.elapsed_s);
        log::info!(
            "Pit stop {} recorded at {}",
            self.pit_stop_count,
            format_duration(self.elapsed_s as i64)
        );
    }

    /// tick advances the elapsed time by one second if the timer is running and a full real-time
    /// second has passed since the previous counted second. `now_ms` must come from a monotonic
    /// clock. The timer stops itself in the step that reaches the race duration. Returns true if
    /// the elapsed time was advanced.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.running {
            // time spent stopped must not be counted after the next start
            self.scheduler.resync(now_ms);
            return false;
        }

        // the duration may have been shortened below the elapsed time while running
        if self.elapsed_s >= self.race_duration_s {
            self.running = false;
            log::info!("Race duration reached, timer stopped");
            return false;
        }

        if !self.scheduler.poll(now_ms) {
            return false;
        }

        self.elapsed_s += 1;

        if self.elapsed_s >= self.race_duration_s {
            self.running = false;
            log::info!(
                "Race duration of {} reached, timer stopped",
                format_duration(self.race_duration_s as i64)
            );
        }
        true
    }

    /// apply executes a timer command and returns true if the timer state changed. Console-only
    /// commands (status, quit) leave the timer untouched.
    pub fn apply(&mut self, command: &TimerCommand) -> bool {
        match command {
            TimerCommand::Start => self.start(),
            TimerCommand::Stop => self.stop(),
            TimerCommand::Reset => {
                self.reset();
                true
            }
            TimerCommand::RecordPit => {
                self.record_pit();
                true
            }
            TimerCommand::SetDuration(text) => self.set_duration(text),
            TimerCommand::SetLaps(text) => self.set_laps_completed(text),
            TimerCommand::Status | TimerCommand::Quit => false,
        }
    }

    // ---------------------------------------------------------------------------------------------
    // QUERIES -------------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    pub fn race_duration_s(&self) -> u64 {
        self.race_duration_s
    }

    pub fn elapsed_s(&self) -> u64 {
        self.elapsed_s
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn laps_completed(&self) -> f64 {
        self.laps_completed
    }

    pub fn pit_stop_count(&self) -> i32 {
        self.pit_stop_count
    }

    pub fn last_pit_time_s(&self) -> Option<u64> {
        self.last_pit_time_s
    }

    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running
        } else if self.elapsed_s >= self.race_duration_s {
            TimerState::Finished
        } else {
            TimerState::Stopped
        }
    }

    /// remaining_s returns the race duration minus the elapsed time. The value is not clamped.
    pub fn remaining_s(&self) -> i64 {
        self.race_duration_s as i64 - self.elapsed_s as i64
    }

    /// average_lap_time_s returns the average lap time so far, which is only available once time
    /// has elapsed and laps were entered.
    pub fn average_lap_time_s(&self) -> Option<f64> {
        if self.elapsed_s > 0 && self.laps_completed > 0.0 {
            Some(self.elapsed_s as f64 / self.laps_completed)
        } else {
            None
        }
    }

    /// projected_final_laps extrapolates the number of laps at the end of the race from the
    /// current average lap time.
    pub fn projected_final_laps(&self) -> Option<f64> {
        self.average_lap_time_s()
            .map(|avg_laptime| self.laps_completed + self.remaining_s() as f64 / avg_laptime)
    }

    /// time_since_last_pit_s is only available after the first pit stop was recorded.
    pub fn time_since_last_pit_s(&self) -> Option<u64> {
        self.last_pit_time_s
            .map(|last_pit_time_s| self.elapsed_s - last_pit_time_s)
    }
}

/// format_duration formats seconds as "HH:MM:SS". Hours get more digits if required, negative
/// values are prefixed with a minus sign.
pub fn format_duration(total_s: i64) -> String {
    let sign = if total_s < 0 { "-" } else { "" };
    let abs_s = total_s.unsigned_abs();
    let h = abs_s / 3600;
    let m = (abs_s % 3600) / 60;
    let s = abs_s % 60;
    format!("{}{:02}:{:02}:{:02}", sign, h, m, s)
}
