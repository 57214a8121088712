//! Reservations exported from the booking backend as a JSON array.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    api::ReservationSource,
    core::{date_range::DateRange, reservation::Reservation},
    prelude::*,
};

pub struct Source {
    path: PathBuf,
}

impl Source {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReservationSource for Source {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn get_reservations(&self, window: DateRange) -> Result<Vec<Reservation>> {
        let contents = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        let mut reservations: Vec<Reservation> = serde_json::from_slice(&contents)
            .with_context(|| format!("failed to parse `{}`", self.path.display()))?;
        reservations.retain(|reservation| reservation.date_range().overlaps(window));
        info!(n_reservations = reservations.len(), "loaded");
        Ok(reservations)
    }
}
