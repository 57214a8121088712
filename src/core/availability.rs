use bon::Builder;
use chrono::NaiveDate;

use crate::core::date_range::DateRange;

/// Stay that a guest is still picking: either endpoint may be unset.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ProposedRange {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl ProposedRange {
    pub const fn new(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        Self { check_in, check_out }
    }

    /// Complete range, if both endpoints are set.
    pub fn as_range(self) -> Option<DateRange> {
        Some(DateRange::new(self.check_in?, self.check_out?))
    }
}

impl From<DateRange> for ProposedRange {
    fn from(range: DateRange) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}

/// Check whether the night starting on `date` is already reserved.
#[must_use]
pub fn is_date_booked(date: NaiveDate, booked_ranges: &[DateRange]) -> bool {
    booked_ranges.iter().any(|booked| booked.contains(date))
}

/// Check whether the proposed stay shares at least one night with any booking.
///
/// An incomplete proposal has nothing to check yet and never conflicts.
#[must_use]
#[allow(dead_code)]
pub fn has_conflict(proposed: impl Into<ProposedRange>, booked_ranges: &[DateRange]) -> bool {
    conflicts(proposed, booked_ranges).next().is_some()
}

/// Bookings that overlap the proposed stay.
///
/// A booked range without nights cannot block anything and is ignored.
pub fn conflicts(
    proposed: impl Into<ProposedRange>,
    booked_ranges: &[DateRange],
) -> impl Iterator<Item = &DateRange> {
    let proposed = proposed.into().as_range().filter(|range| range.is_valid());
    booked_ranges
        .iter()
        .filter(|booked| booked.is_valid())
        .filter(move |booked| proposed.is_some_and(|proposed| proposed.overlaps(**booked)))
}

/// Outcome of checking one room against a complete stay.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct RoomVerdict {
    #[builder(into)]
    pub room_id: String,

    pub is_free: bool,

    /// Bookings that block the stay.
    #[builder(default)]
    pub conflicts: Vec<DateRange>,
}

impl RoomVerdict {
    pub fn evaluate(
        room_id: impl Into<String>,
        stay: DateRange,
        booked_ranges: &[DateRange],
    ) -> Self {
        let conflicts: Vec<_> = conflicts(stay, booked_ranges).copied().collect();
        Self::builder().room_id(room_id).is_free(conflicts.is_empty()).conflicts(conflicts).build()
    }
}

/// Booking flag of every day in the window, as a date picker would render it.
pub fn booked_days(
    window: DateRange,
    booked_ranges: &[DateRange],
) -> impl Iterator<Item = (NaiveDate, bool)> {
    window.days().map(|day| (day, is_date_booked(day, booked_ranges)))
}
