use crate::core::race_timer::DEFAULT_RACE_DURATION_S;
use crate::pre::timer_opts::TimerOpts;
use anyhow::Context;
use helpers::general::check_race_duration;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// * `race_duration_s` - (s) Race duration the timer starts with
/// * `window_width` - (px) Initial width of the overlay window
/// * `window_height` - (px) Initial height of the overlay window
/// * `text_color` - CSS color of the overlay text, e.g. #ffffff
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimerPars {
    pub race_duration_s: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub text_color: String,
}

impl Default for TimerPars {
    fn default() -> Self {
        TimerPars {
            race_duration_s: DEFAULT_RACE_DURATION_S,
            window_width: 800.0,
            window_height: 600.0,
            text_color: String::from("#ffffff"),
        }
    }
}

impl TimerPars {
    /// resolve merges the parameter file (if given) with the command line options. A race duration
    /// from the command line takes precedence over the file.
    pub fn resolve(timer_opts: &TimerOpts) -> anyhow::Result<TimerPars> {
        let mut timer_pars = if let Some(parfile_path) = &timer_opts.parfile_path {
            log::info!("Reading timer parameters from {:?}", parfile_path);
            read_timer_pars(parfile_path)?
        } else {
            TimerPars::default()
        };

        if let Some(race_duration_s) = timer_opts.race_duration {
            timer_pars.race_duration_s = race_duration_s;
        }

        if let Err(err) = check_race_duration(timer_pars.race_duration_s) {
            anyhow::bail!("Invalid race duration: {}!", err);
        }

        Ok(timer_pars)
    }
}

/// read_timer_pars reads the JSON file and decodes the JSON string into the timer parameters
/// struct. Missing entries are filled with their defaults.
pub fn read_timer_pars(filepath: &Path) -> anyhow::Result<TimerPars> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.display()
        ))?;
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn write_parfile(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "laptimer_{}_{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_full_parfile() {
        let path = write_parfile(
            "full",
            r##"{"race_duration_s": 3600, "window_width": 400.0, "window_height": 300.0,
                "text_color": "#00ff00"}"##,
        );
        let pars = read_timer_pars(&path).unwrap();
        assert_eq!(pars.race_duration_s, 3600);
        assert_eq!(pars.window_width, 400.0);
        assert_eq!(pars.text_color, "#00ff00");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_partial_parfile() {
        let path = write_parfile("partial", r#"{"race_duration_s": 1800}"#);
        let pars = read_timer_pars(&path).unwrap();
        assert_eq!(pars.race_duration_s, 1800);
        assert_eq!(pars.window_height, 600.0);
        assert_eq!(pars.text_color, "#ffffff");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_invalid_parfile() {
        let path = write_parfile("invalid", "{ race_duration_s: ");
        let err = read_timer_pars(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse parameter file"));
        std::fs::remove_file(path).unwrap();

        assert!(read_timer_pars(Path::new("/nonexistent/laptimer.json")).is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let path = write_parfile("resolve", r#"{"race_duration_s": 1800}"#);
        let path_str = path.to_str().unwrap().to_owned();

        let opts = TimerOpts::try_parse_from(&["lap-timer", "-p", path_str.as_str()]).unwrap();
        assert_eq!(TimerPars::resolve(&opts).unwrap().race_duration_s, 1800);

        let opts =
            TimerOpts::try_parse_from(&["lap-timer", "-p", path_str.as_str(), "-r", "90"])
                .unwrap();
        assert_eq!(TimerPars::resolve(&opts).unwrap().race_duration_s, 90);

        let opts = TimerOpts::try_parse_from(&["lap-timer"]).unwrap();
        assert_eq!(TimerPars::resolve(&opts).unwrap(), TimerPars::default());

        let opts = TimerOpts::try_parse_from(&["lap-timer", "-r", "0"]).unwrap();
        assert!(TimerPars::resolve(&opts).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_resolve_rejects_duration_beyond_i64() {
        let opts =
            TimerOpts::try_parse_from(&["lap-timer", "-r", "18446744073709551615"]).unwrap();
        let err = TimerPars::resolve(&opts).unwrap_err();
        assert!(err.to_string().starts_with("Invalid race duration"));

        let path = write_parfile("too_long", r#"{"race_duration_s": 9223372036854775808}"#);
        let path_str = path.to_str().unwrap().to_owned();
        let opts = TimerOpts::try_parse_from(&["lap-timer", "-p", path_str.as_str()]).unwrap();
        assert!(TimerPars::resolve(&opts).is_err());
        std::fs::remove_file(path).unwrap();

        let opts =
            TimerOpts::try_parse_from(&["lap-timer", "-r", "9223372036854775807"]).unwrap();
        assert_eq!(
            TimerPars::resolve(&opts).unwrap().race_duration_s,
            9223372036854775807
        );
    }
}
