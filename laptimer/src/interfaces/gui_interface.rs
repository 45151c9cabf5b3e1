use crate::core::race_timer::{format_duration, RaceTimer, TimerState};

/// Text shown for derived values that cannot be calculated yet.
pub const NOT_AVAILABLE: &str = "N/A";

/// Text shown instead of the time since the last pit stop as long as no pit stop was recorded.
pub const PIT_PROMPT: &str = "Type '1p' into the text box every time you make a pit stop. \nDo it \
                              once now, before you press start";

/// TimerSnapshot contains everything a renderer shows for the current frame, already formatted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerSnapshot {
    pub running: bool,
    pub finished: bool,

    pub elapsed: String,
    pub remaining: String,
    pub race_duration: String,

    pub avg_laptime: String,
    pub projected_laps: String,

    // rendered as-is, including the -1 shown before the first pit stop
    pub pit_stop_count: i32,
    pub since_last_pit: Option<String>,

    // texts used to refill the input fields while they are not edited
    pub duration_input: String,
    pub laps_input: String,
}

impl TimerSnapshot {
    pub fn from_timer(timer: &RaceTimer) -> TimerSnapshot {
        TimerSnapshot {
            running: timer.is_running(),
            finished: matches!(timer.state(), TimerState::Finished),
            elapsed: format_duration(timer.elapsed_s() as i64),
            remaining: format_duration(timer.remaining_s()),
            race_duration: format_duration(timer.race_duration_s() as i64),
            avg_laptime: timer
                .average_lap_time_s()
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |t| format!("{:.2} seconds", t)),
            projected_laps: timer
                .projected_final_laps()
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |laps| format!("{:.2}", laps)),
            pit_stop_count: timer.pit_stop_count(),
            since_last_pit: timer
                .time_since_last_pit_s()
                .map(|t| format_duration(t as i64)),
            duration_input: timer.race_duration_s().to_string(),
            laps_input: format!("{:.2}", timer.laps_completed()),
        }
    }

    /// since_last_pit_text returns the time since the last pit stop or the prompt to record one.
    pub fn since_last_pit_text(&self) -> &str {
        self.since_last_pit.as_deref().unwrap_or(PIT_PROMPT)
    }

    /// status_line condenses the snapshot into a single line for console output.
    pub fn status_line(&self) -> String {
        let state = if self.running {
            "running"
        } else if self.finished {
            "finished"
        } else {
            "stopped"
        };

        format!(
            "[{}] elapsed {} | remaining {} | avg lap {} | projected laps {} | pit stops {} | \
             since pit {}",
            state,
            self.elapsed,
            self.remaining,
            self.avg_laptime,
            self.projected_laps,
            self.pit_stop_count,
            self.since_last_pit.as_deref().unwrap_or(NOT_AVAILABLE),
        )
    }
}
