//! Movie categories and their pricing rules.
//!
//! Every category answers the same two questions for a rental duration:
//! how much to charge and how many frequent renter points to award.
//! Callers only ever go through [`PricingPolicy`], so a new category is
//! added by implementing the trait and wrapping it in
//! [`MovieCategory::Custom`].

use crate::amount::Amount;
use crate::error::RentalError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Pricing rules for one movie category.
///
/// Both functions must be pure and defined for every `days_rented`.
pub trait PricingPolicy: fmt::Debug + Send + Sync {
    /// Human-readable category name.
    fn name(&self) -> &str;

    /// Amount charged for renting a movie of this category for `days_rented` days.
    fn charge(&self, days_rented: u32) -> Amount;

    /// Frequent renter points awarded for the rental.
    fn points(&self, _days_rented: u32) -> u32 {
        1
    }
}

/// 2.0 for up to two days, then 1.5 per extra day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Regular;

impl Regular {
    const BASE_TENTHS: i64 = 20;
    const INCLUDED_DAYS: u32 = 2;
    const EXTRA_DAY_TENTHS: i64 = 15;
}

impl PricingPolicy for Regular {
    fn name(&self) -> &str {
        "regular"
    }

    fn charge(&self, days_rented: u32) -> Amount {
        let mut amount = Amount::from_tenths(Self::BASE_TENTHS);
        if days_rented > Self::INCLUDED_DAYS {
            let extra_days = days_rented - Self::INCLUDED_DAYS;
            amount += Amount::from_tenths(Self::EXTRA_DAY_TENTHS) * extra_days;
        }
        amount
    }
}

/// 3.0 per day; a bonus point for rentals longer than one day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewRelease;

impl NewRelease {
    const DAY_TENTHS: i64 = 30;
}

impl PricingPolicy for NewRelease {
    fn name(&self) -> &str {
        "new_release"
    }

    fn charge(&self, days_rented: u32) -> Amount {
        Amount::from_tenths(Self::DAY_TENTHS) * days_rented
    }

    fn points(&self, days_rented: u32) -> u32 {
        if days_rented > 1 {
            2
        } else {
            1
        }
    }
}

/// 1.5 for up to three days, then 1.5 per extra day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Childrens;

impl Childrens {
    const BASE_TENTHS: i64 = 15;
    const INCLUDED_DAYS: u32 = 3;
    const EXTRA_DAY_TENTHS: i64 = 15;
}

impl PricingPolicy for Childrens {
    fn name(&self) -> &str {
        "childrens"
    }

    fn charge(&self, days_rented: u32) -> Amount {
        let mut amount = Amount::from_tenths(Self::BASE_TENTHS);
        if days_rented > Self::INCLUDED_DAYS {
            let extra_days = days_rented - Self::INCLUDED_DAYS;
            amount += Amount::from_tenths(Self::EXTRA_DAY_TENTHS) * extra_days;
        }
        amount
    }
}

/// The category a movie is filed under.
///
/// Chosen once when the [`Movie`](crate::Movie) is built; pricing then
/// dispatches straight to the matching policy.
#[derive(Debug, Clone)]
pub enum MovieCategory {
    /// Catalogue titles.
    Regular,

    /// Recently released titles.
    NewRelease,

    /// Children's titles.
    Childrens,

    /// Any additional category supplied by the caller.
    Custom(Arc<dyn PricingPolicy>),
}

impl MovieCategory {
    /// Wraps a caller-defined policy as a category.
    pub fn custom<P: PricingPolicy + 'static>(policy: P) -> Self {
        MovieCategory::Custom(Arc::new(policy))
    }

    fn policy(&self) -> &dyn PricingPolicy {
        match self {
            MovieCategory::Regular => &Regular,
            MovieCategory::NewRelease => &NewRelease,
            MovieCategory::Childrens => &Childrens,
            MovieCategory::Custom(policy) => policy.as_ref(),
        }
    }
}

impl PricingPolicy for MovieCategory {
    fn name(&self) -> &str {
        self.policy().name()
    }

    fn charge(&self, days_rented: u32) -> Amount {
        self.policy().charge(days_rented)
    }

    fn points(&self, days_rented: u32) -> u32 {
        self.policy().points(days_rented)
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MovieCategory {
    type Err = RentalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(MovieCategory::Regular),
            "new_release" | "new-release" | "newrelease" => Ok(MovieCategory::NewRelease),
            "childrens" | "children" => Ok(MovieCategory::Childrens),
            _ => Err(RentalError::UnknownCategory(s.trim().to_string())),
        }
    }
}
