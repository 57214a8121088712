use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Parser;
use itertools::Itertools;

use crate::{
    cli::source::SourceArgs,
    core::{
        availability::{ProposedRange, RoomVerdict},
        date_range::DateRange,
        occupancy::AvailabilityStatus,
        reservation::{Reservation, booked_ranges},
    },
    prelude::*,
    tables::build_verdicts_table,
};

#[derive(Parser)]
pub struct CheckArgs {
    /// Rooms of the same type to try, comma-separated.
    #[clap(
        long = "room-ids",
        alias = "room-id",
        env = "ROOMCHECK_ROOM_IDS",
        value_delimiter = ',',
        num_args = 1..,
        required = true
    )]
    room_ids: Vec<String>,

    /// Check-in date, for example: `2024-06-10`.
    #[clap(long = "check-in", env = "ROOMCHECK_CHECK_IN")]
    check_in: Option<NaiveDate>,

    /// Check-out date, exclusive.
    #[clap(long = "check-out", env = "ROOMCHECK_CHECK_OUT")]
    check_out: Option<NaiveDate>,

    #[clap(flatten)]
    source: SourceArgs,
}

impl CheckArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let Some(stay) = ProposedRange::new(self.check_in, self.check_out).as_range() else {
            warn!("both check-in and check-out dates are needed, nothing to check");
            return Ok(());
        };
        let stay = DateRange::try_new(stay.start, stay.end)?;
        info!(?stay, nights = stay.nights(), "checking…");

        let reservations = self.source.source()?.get_reservations(stay).await?;
        let verdicts =
            evaluate_rooms(&self.room_ids, stay, &reservations, Local::now().naive_local());

        let n_occupied = verdicts.iter().filter(|verdict| !verdict.is_free).count();
        let status = AvailabilityStatus::from_counts(
            u32::try_from(verdicts.len())?,
            u32::try_from(n_occupied)?,
        );
        println!("{}", build_verdicts_table(&verdicts, status));
        info!(n_available = status.n_available(), "{status}");
        ensure!(status.is_available(), "the stay {stay} cannot be booked: {status}");
        Ok(())
    }
}

/// Verdict for every distinct room, in the order the rooms were given.
fn evaluate_rooms(
    room_ids: &[String],
    stay: DateRange,
    reservations: &[Reservation],
    now: NaiveDateTime,
) -> Vec<RoomVerdict> {
    room_ids
        .iter()
        .unique()
        .map(|room_id| {
            RoomVerdict::evaluate(room_id, stay, &booked_ranges(reservations, room_id, now))
        })
        .collect_vec()
}
