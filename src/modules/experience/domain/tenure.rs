use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

use crate::shared::clock::Clock;

/// Fixed average month length. Not calendar-exact.
pub const AVERAGE_MONTH_DAYS: f64 = 30.44;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenureError {
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Whole elapsed months between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    months: u32,
}

impl Tenure {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self, TenureError> {
        let days = (end - start).num_days();
        if days < 0 {
            return Err(TenureError::InvalidRange { start, end });
        }

        let months = (days as f64 / AVERAGE_MONTH_DAYS).floor() as u32;
        Ok(Self { months })
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn years(&self) -> u32 {
        self.months / 12
    }

    pub fn remainder_months(&self) -> u32 {
        self.months % 12
    }
}

/// `"{y}y {m}m"`, `"{y}y"` or `"{months}m"`.
impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.years(), self.remainder_months()) {
            (0, _) => write!(f, "{}m", self.months),
            (years, 0) => write!(f, "{}y", years),
            (years, months) => write!(f, "{}y {}m", years, months),
        }
    }
}

/// Resolves open-ended ranges against the injected clock.
#[derive(Clone)]
pub struct TenureCalculator {
    clock: Arc<dyn Clock>,
}

impl TenureCalculator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn tenure(&self, start: NaiveDate, end: Option<NaiveDate>) -> Result<Tenure, TenureError> {
        let end = end.unwrap_or_else(|| self.clock.today());
        Tenure::between(start, end)
    }

    pub fn duration(&self, start: NaiveDate, end: Option<NaiveDate>) -> Result<String, TenureError> {
        self.tenure(start, end).map(|t| t.to_string())
    }
}
