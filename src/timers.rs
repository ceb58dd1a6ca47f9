use chrono::{DateTime, Duration, NaiveTime, TimeZone};

/// A fire-once timer driven by the event loop tick.
///
/// Arming replaces any pending deadline; once fired it stays disarmed until
/// armed again.
#[derive(Debug, Clone)]
pub struct OneShot<Tz: TimeZone> {
    deadline: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Default for OneShot<Tz> {
    fn default() -> Self {
        Self { deadline: None }
    }
}

impl<Tz: TimeZone> OneShot<Tz> {
    pub fn armed_at(deadline: DateTime<Tz>) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn arm(&mut self, deadline: DateTime<Tz>) {
        self.deadline = Some(deadline);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<&DateTime<Tz>> {
        self.deadline.as_ref()
    }

    /// Returns true exactly once, on the first call at or after the deadline
    pub fn fire_if_due(&mut self, now: &DateTime<Tz>) -> bool {
        match &self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Start of the next local day after `now`.
///
/// When midnight does not exist locally (DST gap) the first valid wall-clock
/// time after it is used.
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let Some(tomorrow) = now.date_naive().succ_opt() else {
        return now.clone() + Duration::days(1);
    };

    let mut candidate = tomorrow.and_time(NaiveTime::MIN);
    for _ in 0..(24 * 4) {
        if let Some(at) = tz.from_local_datetime(&candidate).earliest() {
            return at;
        }
        candidate += Duration::minutes(15);
    }
    now.clone() + Duration::days(1)
}
