use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

use crate::{
    api::{ReservationSource, backend, file},
    prelude::*,
};

#[derive(Parser)]
pub struct SourceArgs {
    /// Booking backend API base URL. For example: `http://localhost:8080/api`.
    #[clap(
        long = "api-base-url",
        env = "ROOMCHECK_API_BASE_URL",
        required_unless_present = "bookings_file"
    )]
    api_base_url: Option<Url>,

    /// Bearer token for the booking backend.
    #[clap(long = "access-token", env = "ROOMCHECK_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Read the reservations from a JSON export instead of calling the backend.
    #[clap(long = "bookings-file", env = "ROOMCHECK_BOOKINGS_FILE", conflicts_with = "api_base_url")]
    bookings_file: Option<PathBuf>,

    /// Longest stay to expect, in nights. The backend query reaches this far beyond the window
    /// to catch reservations that started before it or end after it.
    #[clap(
        long = "max-stay-nights",
        default_value = "30",
        env = "ROOMCHECK_MAX_STAY_NIGHTS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_stay_nights: u64,
}

impl SourceArgs {
    pub fn source(&self) -> Result<Box<dyn ReservationSource>> {
        if let Some(path) = &self.bookings_file {
            return Ok(Box::new(file::Source::new(path)));
        }
        let base_url = self
            .api_base_url
            .clone()
            .context("either the API base URL or the bookings file must be set")?;
        Ok(Box::new(backend::Api::try_new(
            base_url,
            self.access_token.as_deref(),
            self.max_stay_nights,
        )?))
    }
}
