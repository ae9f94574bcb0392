//! CSV rental input.
//!
//! Reads rows of `title,category,days` into a [`Statement`]. Each distinct
//! title becomes one shared [`Movie`]. Unlike a best-effort import, a bad row
//! aborts the load: dropping a rental would silently change the amount owed.

use crate::category::{MovieCategory, PricingPolicy};
use crate::error::{RentalError, Result};
use crate::movie::Movie;
use crate::rental::Rental;
use crate::statement::Statement;
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

/// Raw rental row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct RentalRecord {
    /// Movie title, kept verbatim after CSV trimming
    pub title: String,

    /// Category name: regular, new_release, childrens
    pub category: String,

    /// Days rented; signed so that negative input can be reported
    pub days: i64,
}

/// Builds statements from CSV input, sharing one `Movie` per title.
#[derive(Debug, Default)]
pub struct RentalLoader {
    catalog: HashMap<String, Arc<Movie>>,
}

impl RentalLoader {
    /// Creates a loader with an empty movie catalog.
    pub fn new() -> Self {
        RentalLoader {
            catalog: HashMap::new(),
        }
    }

    /// Reads all rentals from `reader` into a new statement for `customer`.
    ///
    /// Rentals keep file order. The catalog persists across calls, so a title
    /// seen in an earlier load must keep its category.
    pub fn load_csv<R: Read>(&mut self, reader: R, customer: &str) -> Result<Statement> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut statement = Statement::new(customer);

        for (row_idx, result) in csv_reader.deserialize::<RentalRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row

            let record = result.map_err(|e| RentalError::InvalidRecord {
                row,
                message: e.to_string(),
            })?;

            let rental = self
                .parse_record(record)
                .map_err(|e| RentalError::InvalidRecord {
                    row,
                    message: e.to_string(),
                })?;

            debug!(
                "Row {}: {} ({}) for {} days",
                row,
                rental.movie().title(),
                rental.movie().category(),
                rental.days_rented()
            );
            statement.add_rental(rental);
        }

        Ok(statement)
    }

    /// Returns the shared movie for `title`, if one has been loaded.
    pub fn movie(&self, title: &str) -> Option<&Arc<Movie>> {
        self.catalog.get(title)
    }

    fn parse_record(&mut self, record: RentalRecord) -> Result<Rental> {
        let category: MovieCategory = record.category.parse()?;
        let movie = self.intern_movie(record.title, category)?;
        Rental::try_new(movie, record.days)
    }

    /// Looks up or registers a movie, refusing a title with two categories.
    fn intern_movie(&mut self, title: String, category: MovieCategory) -> Result<Arc<Movie>> {
        if let Some(existing) = self.catalog.get(&title) {
            if existing.category().name() != category.name() {
                return Err(RentalError::ConflictingCategory {
                    title,
                    existing: existing.category().to_string(),
                    requested: category.to_string(),
                });
            }
            return Ok(Arc::clone(existing));
        }

        let movie = Arc::new(Movie::new(title.clone(), category));
        self.catalog.insert(title, Arc::clone(&movie));
        Ok(movie)
    }
}
