use chrono::{DateTime, Duration, Utc};

/// Trailing debounce over an explicit clock.
///
/// Only the most recent value survives; every [`Debounce::push`] restarts the
/// delay.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(T, DateTime<Utc>)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::milliseconds(i64::try_from(millis).unwrap_or(i64::MAX)))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Deadlines past the end of the calendar saturate to `MAX_UTC`.
    pub fn push(&mut self, value: T, now: DateTime<Utc>) {
        let deadline = now
            .checked_add_signed(self.delay)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.pending = Some((value, deadline));
    }

    /// Takes the pending value once its deadline has passed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending value fires, zero when already due.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        self.pending.as_ref().map(|(_, deadline)| {
            deadline
                .signed_duration_since(now)
                .to_std()
                .unwrap_or_default()
        })
    }
}
