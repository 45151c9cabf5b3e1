use crate::interfaces::timer_interface::TimerInterface;
use eframe::{egui, epi};
use laptimer::core::command::{parse_pit_token, TimerCommand};
use laptimer::core::race_timer::RaceTimer;
use laptimer::interfaces::gui_interface::TimerSnapshot;
use laptimer::pre::read_timer_pars::TimerPars;

/// InputField is a single line text field that only hands over its content when the operator
/// presses enter. While not being edited it shows the current value of the timer.
#[derive(Debug, Default)]
pub struct InputField {
    pub text: String,
}

impl InputField {
    /// show draws the field and returns the entered text on enter. `refill` replaces the content
    /// whenever the field does not have the keyboard focus.
    pub fn show(&mut self, ui: &mut egui::Ui, label: &str, refill: Option<&str>) -> Option<String> {
        let mut submitted = None;

        ui.horizontal(|ui| {
            let response = ui.text_edit_singleline(&mut self.text);

            if response.lost_focus() && ui.input().key_pressed(egui::Key::Enter) {
                submitted = Some(self.text.to_owned());
            } else if !response.has_focus() {
                if let Some(refill) = refill {
                    if self.text != refill {
                        self.text = refill.to_owned();
                    }
                }
            }

            ui.label(label);
        });

        submitted
    }
}

#[derive(Debug)]
pub struct TimerPanel {
    pub timer_interface: TimerInterface,
    pub duration_field: InputField,
    pub laps_field: InputField,
    pub command_field: InputField,
    pub text_color: egui::Color32,
}

impl TimerPanel {
    pub fn new(timer_pars: &TimerPars) -> anyhow::Result<TimerPanel> {
        let timer = RaceTimer::new(timer_pars.race_duration_s)?;
        let snapshot = TimerSnapshot::from_timer(&timer);

        Ok(TimerPanel {
            timer_interface: TimerInterface::new(timer),
            duration_field: InputField {
                text: snapshot.duration_input,
            },
            laps_field: InputField {
                text: snapshot.laps_input,
            },
            command_field: InputField::default(),
            text_color: parse_text_color(&timer_pars.text_color),
        })
    }

    /// submit_duration hands the entered duration text to the timer.
    pub fn submit_duration(&mut self, text: String) {
        self.timer_interface.apply(&TimerCommand::SetDuration(text));
    }

    /// submit_laps hands the entered lap count text to the timer.
    pub fn submit_laps(&mut self, text: String) {
        self.timer_interface.apply(&TimerCommand::SetLaps(text));
    }

    /// submit_command records a pit stop if the pit token was entered. The command field is
    /// cleared in any case.
    pub fn submit_command(&mut self, text: &str) {
        match parse_pit_token(text) {
            Some(command) => {
                self.timer_interface.apply(&command);
            }
            None => log::debug!("Ignoring command input {:?}", text),
        }
        self.command_field.text.clear();
    }

    /// toggle_running starts a stopped timer and stops a running one.
    pub fn toggle_running(&mut self) {
        if self.timer_interface.timer.is_running() {
            self.timer_interface.apply(&TimerCommand::Stop);
        } else {
            self.timer_interface.apply(&TimerCommand::Start);
        }
    }

    pub fn set_ui_content(&mut self, ui: &mut egui::Ui) {
        let snapshot = self.timer_interface.snapshot();
        let color = self.text_color;

        // RACE DURATION ---------------------------------------------------------------------------
        if let Some(text) =
            self.duration_field
                .show(ui, "Race Duration (seconds)", Some(snapshot.duration_input.as_str()))
        {
            self.submit_duration(text);
        }

        ui.separator();

        // TIMER CONTROLS --------------------------------------------------------------------------
        ui.horizontal(|ui| {
            let toggle_text = if snapshot.running {
                "Stop Timer"
            } else {
                "Start Timer"
            };
            if ui.button(toggle_text).clicked() {
                self.toggle_running();
            }
            if ui.button("Reset Timer").clicked() {
                self.timer_interface.apply(&TimerCommand::Reset);
            }
        });

        ui.separator();

        // the buttons above may have changed the timer
        let snapshot = self.timer_interface.snapshot();

        ui.colored_label(color, format!("Elapsed Time: {}", snapshot.elapsed));
        ui.colored_label(color, format!("Time Remaining: {}", snapshot.remaining));
        ui.colored_label(color, format!("Race Duration: {}", snapshot.race_duration));

        ui.separator();

        // LAPS AND PACE ---------------------------------------------------------------------------
        if let Some(text) = self
            .laps_field
            .show(ui, "Laps Completed", Some(snapshot.laps_input.as_str()))
        {
            self.submit_laps(text);
        }

        let snapshot = self.timer_interface.snapshot();
        ui.colored_label(color, format!("Average Lap Time: {}", snapshot.avg_laptime));
        ui.colored_label(
            color,
            format!("Projected Laps at End: {}", snapshot.projected_laps),
        );

        ui.separator();

        // PIT STOPS -------------------------------------------------------------------------------
        if let Some(text) = self.command_field.show(ui, "Command Input", None) {
            self.submit_command(&text);
        }

        let snapshot = self.timer_interface.snapshot();
        for line in pit_lines(&snapshot) {
            ui.colored_label(color, line);
        }
    }
}

/// pit_lines returns the pit stop count and either the time since the last pit stop or the
/// prompt to record one.
pub fn pit_lines(snapshot: &TimerSnapshot) -> Vec<String> {
    let since_last_pit = match &snapshot.since_last_pit {
        Some(since_last_pit) => format!("Time Since Last Pit: {}", since_last_pit),
        None => snapshot.since_last_pit_text().to_owned(),
    };
    vec![
        format!("Pit Stops: {}", snapshot.pit_stop_count),
        since_last_pit,
    ]
}

/// parse_text_color converts a CSS color string into an egui color. Invalid strings fall back to
/// white.
pub fn parse_text_color(text_color: &str) -> egui::Color32 {
    match text_color.parse::<css_color_parser::Color>() {
        Ok(color) => egui::Color32::from_rgb(color.r, color.g, color.b),
        Err(err) => {
            log::warn!("Could not parse text color {:?} ({}), using white", text_color, err);
            egui::Color32::WHITE
        }
    }
}

impl epi::App for TimerPanel {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::CtxRef, _frame: &mut epi::Frame) {
        // advance the timer clock
        self.timer_interface.update();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Lap Timer");
            self.set_ui_content(ui);
        });

        // request repaint of the UI such that the clock keeps ticking without input events
        ctx.request_repaint();
    }

    fn name(&self) -> &str {
        "Lap Timer"
    }
}
