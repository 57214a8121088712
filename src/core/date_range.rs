use std::fmt::{Debug, Display, Formatter};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Calendar date range of a stay.
///
/// The guest occupies the room through the night before the check-out,
/// so adjacent stays do not overlap.
#[must_use]
#[derive(Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive.
    #[serde(rename = "checkInDate")]
    pub start: NaiveDate,

    /// Exclusive.
    #[serde(rename = "checkOutDate")]
    pub end: NaiveDate,
}

impl Debug for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

impl DateRange {
    /// Build the range without checking that it covers at least one night.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn try_new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        ensure!(
            check_in < check_out,
            "check-out date {check_out} must be after check-in date {check_in}"
        );
        Ok(Self::new(check_in, check_out))
    }

    /// Range of `n_days` days starting on `start`.
    pub fn try_starting_on(start: NaiveDate, n_days: u64) -> Result<Self> {
        let end = start
            .checked_add_days(Days::new(n_days))
            .with_context(|| format!("{n_days} days after {start} is out of range"))?;
        Self::try_new(start, end)
    }

    /// Zero-night and inverted ranges are invalid stays.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.start < self.end
    }

    #[must_use]
    pub fn nights(self) -> u64 {
        u64::try_from((self.end - self.start).num_days()).unwrap_or_default()
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.start <= date) && (date < self.end)
    }

    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        (self.start < other.end) && (other.start < self.end)
    }

    /// Every occupied day: from the check-in up to, but excluding, the check-out.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while(move |day| *day < self.end)
    }
}
