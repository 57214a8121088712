pub mod backend;
pub mod file;

use async_trait::async_trait;

use crate::{
    core::{date_range::DateRange, reservation::Reservation},
    prelude::*,
};

/// Read-only query of the reservations known to the booking system.
#[async_trait]
pub trait ReservationSource: Sync {
    /// Reservations that touch the window, in any status.
    ///
    /// A source may return more than asked: callers filter by room and dates themselves.
    async fn get_reservations(&self, window: DateRange) -> Result<Vec<Reservation>>;
}
