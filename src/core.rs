pub mod availability;
pub mod date_range;
pub mod occupancy;
pub mod reservation;
