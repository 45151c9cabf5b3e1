/// Length of one counted timer second in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// TickScheduler decides when a full real-time second has passed. The anchor is moved forward by
/// exactly one interval per counted second, such that any excess time carries over to the next
/// second and the count never drifts against the wall clock.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    anchor_ms: Option<u64>,
}

impl TickScheduler {
    pub fn new() -> TickScheduler {
        TickScheduler { anchor_ms: None }
    }

    /// resync moves the anchor to the current time, dropping any accumulated remainder.
    pub fn resync(&mut self, now_ms: u64) {
        self.anchor_ms = Some(now_ms);
    }

    /// poll returns true if at least one full interval has passed since the anchor. At most one
    /// second is counted per call, a stalled caller catches up over the following calls.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let anchor_ms = match self.anchor_ms {
            Some(anchor_ms) => anchor_ms,
            None => {
                self.anchor_ms = Some(now_ms);
                return false;
            }
        };

        // a clock stepping backwards yields zero here
        if now_ms.saturating_sub(anchor_ms) >= TICK_INTERVAL_MS {
            self.anchor_ms = Some(anchor_ms + TICK_INTERVAL_MS);
            true
        } else {
            false
        }
    }

    pub fn anchor_ms(&self) -> Option<u64> {
        self.anchor_ms
    }
}
