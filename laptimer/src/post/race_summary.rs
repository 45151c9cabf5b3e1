use crate::core::race_timer::{format_duration, RaceTimer};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::io::Write as IoWrite;
use std::path::Path;

/// RaceSummary contains the final timer values that are reported when a session ends.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RaceSummary {
    pub race_duration_s: u64,
    pub elapsed_s: u64,
    pub laps_completed: f64,
    pub pit_stop_count: i32,
    pub avg_laptime_s: Option<f64>,
    pub projected_laps: Option<f64>,
}

impl RaceSummary {
    pub fn from_timer(timer: &RaceTimer) -> RaceSummary {
        RaceSummary {
            race_duration_s: timer.race_duration_s(),
            elapsed_s: timer.elapsed_s(),
            laps_completed: timer.laps_completed(),
            pit_stop_count: timer.pit_stop_count(),
            avg_laptime_s: timer.average_lap_time_s(),
            projected_laps: timer.projected_final_laps(),
        }
    }

    /// summary_text returns the report lines shared by console output and file output.
    pub fn summary_text(&self) -> String {
        let mut content = String::new();
        let fmt_opt = |val: Option<f64>, unit: &str| match val {
            Some(val) => format!("{:.2}{}", val, unit),
            None => String::from("N/A"),
        };

        // writing into a String cannot fail
        let _ = writeln!(
            &mut content,
            "RESULT: Elapsed time {} of {}",
            format_duration(self.elapsed_s as i64),
            format_duration(self.race_duration_s as i64)
        );
        let _ = writeln!(&mut content, "RESULT: Laps completed {:.2}", self.laps_completed);
        let _ = writeln!(
            &mut content,
            "RESULT: Average lap time {}",
            fmt_opt(self.avg_laptime_s, "s")
        );
        let _ = writeln!(
            &mut content,
            "RESULT: Projected laps at end {}",
            fmt_opt(self.projected_laps, "")
        );
        let _ = writeln!(&mut content, "RESULT: Pit stops {}", self.pit_stop_count);
        content
    }

    /// print_summary prints the summary to the console output.
    pub fn print_summary(&self) {
        print!("{}", self.summary_text());
    }

    /// write_summary_to_file writes the summary to the given text file. Returns the path to the
    /// written file.
    pub fn write_summary_to_file(&self, path: &Path) -> anyhow::Result<String> {
        if let Some(out_dir) = path.parent() {
            if !out_dir.as_os_str().is_empty() {
                std::fs::create_dir_all(out_dir)?;
            }
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)?;
        file.write_all(self.summary_text().as_bytes())?;
        file.flush()?;

        Ok(path.to_string_lossy().into_owned())
    }
}
