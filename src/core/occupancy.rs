use std::fmt::{Display, Formatter};

use comfy_table::Color;

/// How many rooms of a type are still free for the requested dates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AvailabilityStatus {
    Available { n_available: u32 },

    /// Fewer than three rooms left.
    Limited { n_available: u32 },

    FullyBooked,
}

impl AvailabilityStatus {
    const LIMITED_THRESHOLD: u32 = 3;

    pub const fn from_counts(n_total: u32, n_occupied: u32) -> Self {
        match n_total.saturating_sub(n_occupied) {
            0 => Self::FullyBooked,
            n_available if n_available < Self::LIMITED_THRESHOLD => {
                Self::Limited { n_available }
            }
            n_available => Self::Available { n_available },
        }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::FullyBooked)
    }

    #[must_use]
    pub const fn n_available(self) -> u32 {
        match self {
            Self::Available { n_available } | Self::Limited { n_available } => n_available,
            Self::FullyBooked => 0,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Available { .. } => Color::Green,
            Self::Limited { .. } => Color::DarkYellow,
            Self::FullyBooked => Color::Red,
        }
    }
}

impl Display for AvailabilityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available { .. } => write!(f, "Available"),
            Self::Limited { n_available: 1 } => write!(f, "Last room available!"),
            Self::Limited { n_available } => write!(f, "Only {n_available} rooms left"),
            Self::FullyBooked => write!(f, "Fully booked"),
        }
    }
}
