use laptimer::core::command::TimerCommand;
use laptimer::core::race_timer::RaceTimer;
use laptimer::interfaces::gui_interface::TimerSnapshot;
use std::time::Instant;

/// TimerInterface owns the race timer shown by the GUI together with the monotonic clock origin
/// its ticks are measured from.
#[derive(Debug)]
pub struct TimerInterface {
    pub timer: RaceTimer,
    t_origin: Instant,
}

impl TimerInterface {
    pub fn new(timer: RaceTimer) -> TimerInterface {
        TimerInterface {
            timer,
            t_origin: Instant::now(),
        }
    }

    /// now_ms returns the milliseconds passed since the interface was created.
    pub fn now_ms(&self) -> u64 {
        self.t_origin.elapsed().as_millis() as u64
    }

    /// update advances the timer clock, it must be called once per frame.
    pub fn update(&mut self) {
        let now_ms = self.now_ms();
        self.timer.tick(now_ms);
    }

    pub fn apply(&mut self, command: &TimerCommand) -> bool {
        self.timer.apply(command)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from_timer(&self.timer)
    }
}
