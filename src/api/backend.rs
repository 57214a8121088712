//! Booking backend REST client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Days;
use reqwest::{
    Client,
    Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{
    api::ReservationSource,
    core::{date_range::DateRange, reservation::Reservation},
    prelude::*,
};

pub struct Api {
    client: Client,
    base_url: Url,

    /// The backend only matches reservations lying within the queried range or starting in it,
    /// so the query reaches this far beyond the window on both sides.
    max_stay_nights: u64,
}

impl Api {
    pub fn try_new(
        base_url: Url,
        access_token: Option<&str>,
        max_stay_nights: u64,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(access_token) = access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {access_token}"))
                .context("the access token is not a valid header value")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let client =
            Client::builder().timeout(Duration::from_secs(10)).default_headers(headers).build()?;
        Ok(Self { client, base_url, max_stay_nights })
    }

    /// Query range that catches every reservation of at most `max_stay_nights` overlapping the window.
    fn query_range(&self, window: DateRange) -> Result<DateRange> {
        let n_nights = self.max_stay_nights;
        let start = window
            .start
            .checked_sub_days(Days::new(n_nights))
            .with_context(|| format!("{n_nights} days before {} is out of range", window.start))?;
        let end = window
            .end
            .checked_add_days(Days::new(n_nights))
            .with_context(|| format!("{n_nights} days after {} is out of range", window.end))?;
        Ok(DateRange::new(start, end))
    }

    fn date_range_url(&self, window: DateRange) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("invalid base URL: `{}`", self.base_url))?
            .pop_if_empty()
            .push("reservations")
            .push("date-range");
        url.query_pairs_mut()
            .append_pair("startDate", &window.start.to_string())
            .append_pair("endDate", &window.end.to_string());
        Ok(url)
    }
}

#[async_trait]
impl ReservationSource for Api {
    #[instrument(skip_all, fields(window = ?window))]
    async fn get_reservations(&self, window: DateRange) -> Result<Vec<Reservation>> {
        let url = self.date_range_url(self.query_range(window)?)?;
        info!(%url, "fetching reservations…");
        let mut reservations: Vec<Reservation> = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to call the booking backend")?
            .error_for_status()
            .context("the booking backend rejected the request")?
            .json()
            .await
            .context("failed to deserialize the reservations")?;
        let n_fetched = reservations.len();
        reservations.retain(|reservation| reservation.date_range().overlaps(window));
        info!(n_fetched, n_reservations = reservations.len(), "fetched");
        Ok(reservations)
    }
}
