//! Movie model.

use crate::amount::Amount;
use crate::category::{MovieCategory, PricingPolicy};

/// A film available for rent.
///
/// Immutable once built. A single movie is usually shared by many rentals
/// through an `Arc<Movie>`.
#[derive(Debug, Clone)]
pub struct Movie {
    /// Display title, printed verbatim on statements. Expected to be non-empty.
    title: String,

    /// Pricing category, fixed at construction.
    category: MovieCategory,
}

impl Movie {
    /// Creates a movie with the given title and category.
    pub fn new(title: impl Into<String>, category: MovieCategory) -> Self {
        Movie {
            title: title.into(),
            category,
        }
    }

    /// Returns the stored title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the pricing category.
    pub fn category(&self) -> &MovieCategory {
        &self.category
    }

    /// Charge for renting this movie for `days_rented` days.
    pub fn charge(&self, days_rented: u32) -> Amount {
        self.category.charge(days_rented)
    }

    /// Frequent renter points for renting this movie for `days_rented` days.
    pub fn frequent_renter_points(&self, days_rented: u32) -> u32 {
        self.category.points(days_rented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_stored_verbatim() {
        let movie = Movie::new("  RRRrrrr!!! ", MovieCategory::Regular);
        assert_eq!(movie.title(), "  RRRrrrr!!! ");
        assert_eq!(movie.category().name(), "regular");
    }

    #[test]
    fn test_pricing_delegates_to_category() {
        let movie = Movie::new("Interstellar", MovieCategory::NewRelease);
        for days in [0, 1, 2, 7] {
            assert_eq!(movie.charge(days), MovieCategory::NewRelease.charge(days));
            assert_eq!(
                movie.frequent_renter_points(days),
                MovieCategory::NewRelease.points(days)
            );
        }
    }

    #[test]
    fn test_same_days_different_categories() {
        let regular = Movie::new("A", MovieCategory::Regular);
        let childrens = Movie::new("B", MovieCategory::Childrens);

        assert_eq!(regular.charge(4).to_string(), "5.0");
        assert_eq!(childrens.charge(4).to_string(), "3.0");
    }
}
