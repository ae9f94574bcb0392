//! # Rental Statement
//!
//! Billing for a video rental store: prices each rental by movie category,
//! awards frequent renter points and renders a customer statement.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Amounts use `rust_decimal`, never `f64`
//! - **Pricing lives in categories**: `Statement` never branches on category
//! - **Open for new categories**: implement `PricingPolicy`, wrap it in `MovieCategory::Custom`
//! - **Deterministic output**: Rentals are listed in insertion order
//!
//! ## Example
//!
//! ```
//! use rental_statement::{Movie, MovieCategory, Rental, Statement};
//! use std::sync::Arc;
//!
//! let interstellar = Arc::new(Movie::new("Interstellar", MovieCategory::NewRelease));
//! let mut statement = Statement::new("Me");
//! statement.add_rental(Rental::new(interstellar, 3));
//!
//! assert_eq!(
//!     statement.generate(),
//!     "Rental Record for Me\n\tInterstellar\t9.0\nAmount owed is 9.0\nYou earned 2 frequent renter points"
//! );
//! ```

pub mod amount;
pub mod category;
pub mod error;
pub mod loader;
pub mod movie;
pub mod rental;
pub mod statement;

pub use amount::Amount;
pub use category::{Childrens, MovieCategory, NewRelease, PricingPolicy, Regular};
pub use error::{RentalError, Result};
pub use loader::{RentalLoader, RentalRecord};
pub use movie::Movie;
pub use rental::Rental;
pub use statement::Statement;
