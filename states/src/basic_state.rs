use chrono::{DateTime, Duration, Utc};

/// Clock state read by anything time-dependent.
///
/// A live clock follows wall time on every [`Time::tick`]; a fixed clock only
/// moves through [`Time::advance`], which keeps tests deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
    fixed: bool,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            virt: Utc::now(),
            fixed: false,
        }
    }
}

impl Time {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            virt: at,
            fixed: true,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn tick(&mut self) {
        if !self.fixed {
            self.virt = Utc::now();
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
