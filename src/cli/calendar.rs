use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{
    cli::source::SourceArgs,
    core::{availability::booked_days, date_range::DateRange, reservation::booked_ranges},
    prelude::*,
    tables::build_calendar_table,
};

#[derive(Parser)]
pub struct CalendarArgs {
    #[clap(long = "room-id", env = "ROOMCHECK_ROOM_ID")]
    room_id: String,

    /// First day to show, today by default.
    #[clap(long)]
    since: Option<NaiveDate>,

    /// Number of days to show.
    #[clap(
        long = "days",
        default_value = "30",
        env = "ROOMCHECK_CALENDAR_DAYS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    n_days: u64,

    #[clap(flatten)]
    source: SourceArgs,
}

impl CalendarArgs {
    #[instrument(skip_all, fields(room_id = %self.room_id))]
    pub async fn run(self) -> Result {
        let now = Local::now().naive_local();
        let since = self.since.unwrap_or_else(|| now.date());
        let window = DateRange::try_starting_on(since, self.n_days)?;
        let reservations = self.source.source()?.get_reservations(window).await?;
        let booked = booked_ranges(&reservations, &self.room_id, now);
        info!(n_bookings = booked.len(), "fetched the room bookings");
        println!("{}", build_calendar_table(booked_days(window, &booked)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_days_rejected() {
        let result = CalendarArgs::try_parse_from([
            "calendar",
            "--room-id",
            "room-101",
            "--bookings-file",
            "reservations.json",
            "--days",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_days_default_ok() -> Result {
        let args = CalendarArgs::try_parse_from([
            "calendar",
            "--room-id",
            "room-101",
            "--bookings-file",
            "reservations.json",
        ])?;
        assert_eq!(args.n_days, 30);
        Ok(())
    }
}
