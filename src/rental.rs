//! A single rental: one movie kept for a number of days.

use crate::amount::Amount;
use crate::error::{RentalError, Result};
use crate::movie::Movie;
use std::sync::Arc;

/// Pairs a movie with the number of days it was rented.
///
/// Performs no pricing itself; it only fixes `days_rented` for the movie.
#[derive(Debug, Clone)]
pub struct Rental {
    movie: Arc<Movie>,
    days_rented: u32,
}

impl Rental {
    /// Creates a rental. The `u32` rules out negative durations.
    pub fn new(movie: Arc<Movie>, days_rented: u32) -> Self {
        Rental { movie, days_rented }
    }

    /// Creates a rental from an untyped day count.
    ///
    /// Returns [`RentalError::InvalidDaysRented`] for negative values rather
    /// than clamping them, since clamping would change the amount billed.
    pub fn try_new(movie: Arc<Movie>, days_rented: i64) -> Result<Self> {
        let days = u32::try_from(days_rented)
            .map_err(|_| RentalError::InvalidDaysRented { days: days_rented })?;
        Ok(Rental::new(movie, days))
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn days_rented(&self) -> u32 {
        self.days_rented
    }

    /// Amount owed for this rental.
    pub fn charge(&self) -> Amount {
        self.movie.charge(self.days_rented)
    }

    /// Frequent renter points earned by this rental.
    pub fn frequent_renter_points(&self) -> u32 {
        self.movie.frequent_renter_points(self.days_rented)
    }
}
