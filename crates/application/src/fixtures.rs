//! Payload fixtures.
//!
//! Randomized names and prices keep concurrent runs against a shared
//! instance from tripping over each other's bookings.

use booker_domain::{BookingDates, BookingPayload, PartialBookingPayload};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Emma", "Olivia", "Liam", "Noah", "Ava",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
];

/// Additional needs sent with every generated booking.
pub const DEFAULT_ADDITIONAL_NEEDS: &str = "Breakfast";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Stay dates used by the standard fixtures: 2010-11-11 to 2010-12-11.
#[must_use]
pub fn default_dates() -> BookingDates {
    BookingDates::new(date(2010, 11, 11), date(2010, 12, 11))
}

/// The fixed "Jim Brown" booking.
#[must_use]
pub fn fixed_booking() -> BookingPayload {
    BookingPayload::new("Jim", "Brown", 111, true, default_dates())
        .with_additional_needs(DEFAULT_ADDITIONAL_NEEDS)
}

/// Generates booking payloads with randomized fields.
#[derive(Debug, Clone)]
pub struct PayloadFactory {
    rng: StdRng,
}

impl PayloadFactory {
    /// Creates a factory seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible factory.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A booking with random name and 3-digit price, deposit paid,
    /// the default stay dates, and breakfast.
    pub fn booking(&mut self) -> BookingPayload {
        BookingPayload::new(
            self.first_name(),
            self.last_name(),
            self.total_price(),
            true,
            default_dates(),
        )
        .with_additional_needs(DEFAULT_ADDITIONAL_NEEDS)
    }

    /// Like [`Self::booking`], but checking in 1 to 365 days after `from`
    /// and staying 1 to 14 nights.
    pub fn booking_with_random_stay(&mut self, from: NaiveDate) -> BookingPayload {
        let checkin = from
            .checked_add_days(Days::new(self.rng.random_range(1..=365)))
            .unwrap_or(from);
        let checkout = checkin
            .checked_add_days(Days::new(self.rng.random_range(1..=14)))
            .unwrap_or(checkin);

        let mut booking = self.booking();
        booking.bookingdates = BookingDates::new(checkin, checkout);
        booking
    }

    /// A partial update carrying only a new random name.
    pub fn partial_booking(&mut self) -> PartialBookingPayload {
        PartialBookingPayload::new()
            .with_firstname(self.first_name())
            .with_lastname(self.last_name())
    }

    /// A random first name.
    pub fn first_name(&mut self) -> String {
        FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())].to_string()
    }

    /// A random last name.
    pub fn last_name(&mut self) -> String {
        LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())].to_string()
    }

    /// A random 3-digit price.
    pub fn total_price(&mut self) -> u32 {
        self.rng.random_range(100..=999)
    }
}

impl Default for PayloadFactory {
    fn default() -> Self {
        Self::new()
    }
}
