use chrono::{DateTime, Utc};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static PROCESS_CLOCK: OnceLock<ProcessClock> = OnceLock::new();

/// # Process Clock
///
/// Records when the process started, both as a monotonic [`Instant`] used to
/// measure uptime and as a wall-clock [`DateTime<Utc>`] that request
/// timestamps can be compared against.
///
/// The process-wide clock is written once by [`init`] and only read afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
    started_at: DateTime<Utc>,
}

impl ProcessClock {
    pub fn starting_now() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Builds a clock that started `elapsed` ago.
    ///
    /// Falls back to the current instant when `elapsed` reaches further back
    /// than the platform's monotonic clock can represent.
    pub fn started_ago(elapsed: Duration) -> Self {
        let now = Instant::now();
        let started = now.checked_sub(elapsed).unwrap_or(now);
        let started_at = chrono::Duration::from_std(now - started)
            .ok()
            .and_then(|offset| Utc::now().checked_sub_signed(offset))
            .unwrap_or_else(Utc::now);

        Self {
            started,
            started_at,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Uptime in fractional seconds.
    pub fn uptime_secs(&self) -> f64 {
        self.uptime().as_secs_f64()
    }
}

/// Records the process start.
///
/// Called once from `main` before the server binds. Later calls return the
/// clock recorded by the first one.
pub fn init() -> &'static ProcessClock {
    PROCESS_CLOCK.get_or_init(ProcessClock::starting_now)
}

/// Returns the process-wide clock, recording it on first use if [`init`] was
/// never called.
pub fn process() -> &'static ProcessClock {
    init()
}
