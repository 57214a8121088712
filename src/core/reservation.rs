use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::{core::date_range::DateRange, prelude::*};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, derive_more::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Awaiting payment.
    #[display("Pending")]
    Pending,

    #[display("Confirmed")]
    Confirmed,

    #[display("Checked in")]
    CheckedIn,

    #[display("Checked out")]
    CheckedOut,

    #[display("Cancelled")]
    Cancelled,
}

impl ReservationStatus {
    /// Whether the reservation blocks the room for its dates.
    #[must_use]
    pub const fn occupies_room(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::CheckedIn)
    }
}

#[must_use]
#[derive(Clone, Debug, Deserialize)]
pub struct Room {
    pub id: String,
}

/// Reservation as the booking backend returns it.
#[must_use]
#[derive(Clone, Debug, Deserialize)]
pub struct Reservation {
    pub id: String,

    pub room: Room,

    #[serde(rename = "checkInDate")]
    pub check_in: NaiveDate,

    #[serde(rename = "checkOutDate")]
    pub check_out: NaiveDate,

    pub status: ReservationStatus,

    /// Payment deadline of a pending hold, in the hotel's local time.
    #[serde(rename = "expiresAt", default)]
    pub expires_at: Option<NaiveDateTime>,
}

impl Reservation {
    pub const fn date_range(&self) -> DateRange {
        DateRange::new(self.check_in, self.check_out)
    }

    /// Whether the reservation blocks the room at the moment `now`.
    ///
    /// An unpaid hold stops blocking once its deadline passes, even before the backend cancels it.
    #[must_use]
    pub fn occupies_room_at(&self, now: NaiveDateTime) -> bool {
        match self.status {
            ReservationStatus::Pending => self.expires_at.is_none_or(|expires_at| now < expires_at),
            status => status.occupies_room(),
        }
    }
}

/// Collect the ranges during which the room is occupied, as seen at `now`.
pub fn booked_ranges<'a>(
    reservations: impl IntoIterator<Item = &'a Reservation>,
    room_id: &str,
    now: NaiveDateTime,
) -> Vec<DateRange> {
    reservations
        .into_iter()
        .filter(|reservation| reservation.room.id == room_id)
        .filter(|reservation| {
            let occupies_room = reservation.occupies_room_at(now);
            if !occupies_room {
                debug!(
                    id = %reservation.id,
                    status = %reservation.status,
                    expires_at = ?reservation.expires_at,
                    "not occupying the room",
                );
            }
            occupies_room
        })
        .filter_map(|reservation| {
            let range = reservation.date_range();
            if range.is_valid() {
                Some(range)
            } else {
                warn!(id = %reservation.id, ?range, "skipping the reservation with an invalid range");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // language=JSON
    const RESERVATIONS: &str = r#"
        [
            {
                "id": "r-1",
                "room": {"id": "room-101", "roomNumber": "101", "type": "DELUXE"},
                "checkInDate": "2024-06-12",
                "checkOutDate": "2024-06-15",
                "numberOfGuests": 2,
                "totalAmount": 450.0,
                "status": "CONFIRMED"
            },
            {
                "id": "r-2",
                "room": {"id": "room-101"},
                "checkInDate": "2024-06-01",
                "checkOutDate": "2024-06-04",
                "status": "CANCELLED"
            },
            {
                "id": "r-3",
                "room": {"id": "room-101"},
                "checkInDate": "2024-06-20",
                "checkOutDate": "2024-06-22",
                "status": "PENDING"
            },
            {
                "id": "r-4",
                "room": {"id": "room-202"},
                "checkInDate": "2024-06-12",
                "checkOutDate": "2024-06-15",
                "status": "CHECKED_IN"
            },
            {
                "id": "r-5",
                "room": {"id": "room-101"},
                "checkInDate": "2024-05-01",
                "checkOutDate": "2024-05-03",
                "status": "CHECKED_OUT"
            }
        ]
    "#;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2024, 6, 9).and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_deserialize_reservations_ok() -> Result {
        let reservations = serde_json::from_str::<Vec<Reservation>>(RESERVATIONS)?;
        assert_eq!(reservations.len(), 5);
        assert_eq!(reservations[0].room.id, "room-101");
        assert_eq!(reservations[3].status, ReservationStatus::CheckedIn);
        Ok(())
    }

    #[test]
    fn test_booked_ranges_keeps_occupying_reservations_of_the_room() -> Result {
        let reservations = serde_json::from_str::<Vec<Reservation>>(RESERVATIONS)?;
        let ranges = booked_ranges(&reservations, "room-101", now());
        assert_eq!(
            ranges,
            [
                DateRange::new(date(2024, 6, 12), date(2024, 6, 15)),
                DateRange::new(date(2024, 6, 20), date(2024, 6, 22)),
            ],
        );
        Ok(())
    }

    #[test]
    fn test_booked_ranges_skips_invalid_range() -> Result {
        // language=JSON
        const BODY: &str = r#"
            [{
                "id": "broken",
                "room": {"id": "room-101"},
                "checkInDate": "2024-06-15",
                "checkOutDate": "2024-06-15",
                "status": "CONFIRMED"
            }]
        "#;
        let reservations = serde_json::from_str::<Vec<Reservation>>(BODY)?;
        assert!(booked_ranges(&reservations, "room-101", now()).is_empty());
        Ok(())
    }

    #[test]
    fn test_pending_hold_blocks_until_it_expires() -> Result {
        // language=JSON
        const BODY: &str = r#"
            [
                {
                    "id": "expired",
                    "room": {"id": "room-101"},
                    "checkInDate": "2024-06-10",
                    "checkOutDate": "2024-06-12",
                    "status": "PENDING",
                    "expiresAt": "2024-06-09T11:45:00"
                },
                {
                    "id": "live",
                    "room": {"id": "room-101"},
                    "checkInDate": "2024-06-20",
                    "checkOutDate": "2024-06-22",
                    "status": "PENDING",
                    "expiresAt": "2024-06-09T12:15:00.250"
                }
            ]
        "#;
        let reservations = serde_json::from_str::<Vec<Reservation>>(BODY)?;
        assert!(!reservations[0].occupies_room_at(now()));
        assert!(reservations[1].occupies_room_at(now()));
        assert_eq!(
            booked_ranges(&reservations, "room-101", now()),
            [DateRange::new(date(2024, 6, 20), date(2024, 6, 22))],
        );
        Ok(())
    }

    #[test]
    fn test_expiry_only_applies_to_pending() -> Result {
        // language=JSON
        const BODY: &str = r#"
            {
                "id": "paid",
                "room": {"id": "room-101"},
                "checkInDate": "2024-06-10",
                "checkOutDate": "2024-06-12",
                "status": "CONFIRMED",
                "expiresAt": "2024-06-01T00:00:00"
            }
        "#;
        let reservation = serde_json::from_str::<Reservation>(BODY)?;
        assert!(reservation.occupies_room_at(now()));
        Ok(())
    }

    #[test]
    fn test_unknown_status_fails() {
        // language=JSON
        const BODY: &str = r#"
            {
                "id": "r-1",
                "room": {"id": "room-101"},
                "checkInDate": "2024-06-12",
                "checkOutDate": "2024-06-15",
                "status": "ON_HOLD"
            }
        "#;
        assert!(serde_json::from_str::<Reservation>(BODY).is_err());
    }
}
