//! Customer statement generation.
//!
//! A statement collects one customer's rentals and renders them as a plain
//! text report: a header, one line per rental in insertion order, then the
//! amount owed and the frequent renter points earned. Pricing knowledge stays
//! in the categories; the statement only sums what each rental reports.

use crate::amount::Amount;
use crate::error::Result;
use crate::rental::Rental;
use log::debug;
use std::fmt;
use std::io;

/// The rental record for one customer.
///
/// Totals are recomputed from scratch on every [`Statement::generate`] call,
/// so generating twice without adding rentals yields identical output.
#[derive(Debug, Clone)]
pub struct Statement {
    /// Customer name shown in the header.
    customer_name: String,

    /// Rentals in the order they were added.
    rentals: Vec<Rental>,

    /// Amount owed as of the last generation.
    total_amount: Amount,

    /// Points earned as of the last generation.
    total_points: u32,
}

impl Statement {
    /// Creates an empty statement for a customer.
    pub fn new(customer_name: impl Into<String>) -> Self {
        Statement {
            customer_name: customer_name.into(),
            rentals: Vec::new(),
            total_amount: Amount::ZERO,
            total_points: 0,
        }
    }

    /// Appends a rental. No validation, no limit.
    pub fn add_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// Returns the customer name.
    pub fn name(&self) -> &str {
        &self.customer_name
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// Amount owed, as computed by the most recent [`Statement::generate`].
    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }

    /// Points earned, as computed by the most recent [`Statement::generate`].
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    /// Renders the statement.
    ///
    /// The report has no trailing newline:
    ///
    /// ```text
    /// Rental Record for <name>
    /// \t<title>\t<amount>
    /// Amount owed is <total>
    /// You earned <points> frequent renter points
    /// ```
    pub fn generate(&mut self) -> String {
        let mut report = String::new();
        // Formatting into a String cannot fail.
        let _ = self.render(&mut report);
        report
    }

    /// Generates the statement and writes it, followed by a newline.
    pub fn write_to<W: io::Write>(&mut self, mut writer: W) -> Result<()> {
        let report = self.generate();
        writeln!(writer, "{}", report)?;
        writer.flush()?;
        Ok(())
    }

    /// Recomputes the totals and writes the report into `out`.
    fn render<W: fmt::Write>(&mut self, out: &mut W) -> fmt::Result {
        self.clear_totals();

        writeln!(out, "Rental Record for {}", self.customer_name)?;

        for rental in &self.rentals {
            let amount = rental.charge();
            let points = rental.frequent_renter_points();

            debug!(
                "Statement for {}: {} x{} days -> {} ({} points)",
                self.customer_name,
                rental.movie().title(),
                rental.days_rented(),
                amount,
                points
            );

            self.total_amount += amount;
            self.total_points += points;
            writeln!(out, "\t{}\t{}", rental.movie().title(), amount)?;
        }

        writeln!(out, "Amount owed is {}", self.total_amount)?;
        write!(
            out,
            "You earned {} frequent renter points",
            self.total_points
        )?;

        debug!(
            "Generated statement for {}: {} rentals, owed {}, {} points",
            self.customer_name,
            self.rentals.len(),
            self.total_amount,
            self.total_points
        );

        Ok(())
    }

    fn clear_totals(&mut self) {
        self.total_amount = Amount::ZERO;
        self.total_points = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::MovieCategory;
    use crate::movie::Movie;
    use std::sync::Arc;

    fn rental(title: &str, category: MovieCategory, days: u32) -> Rental {
        Rental::new(Arc::new(Movie::new(title, category)), days)
    }

    #[test]
    fn test_empty_statement() {
        let mut statement = Statement::new("Me");
        assert_eq!(
            statement.generate(),
            "Rental Record for Me\nAmount owed is 0.0\nYou earned 0 frequent renter points"
        );
        assert_eq!(statement.total_amount(), Amount::ZERO);
        assert_eq!(statement.total_points(), 0);
    }

    #[test]
    fn test_totals_follow_last_generation() {
        let mut statement = Statement::new("Me");
        statement.add_rental(rental("Interstellar", MovieCategory::NewRelease, 3));
        statement.generate();
        assert_eq!(statement.total_amount().to_string(), "9.0");
        assert_eq!(statement.total_points(), 2);

        statement.add_rental(rental("Zootopie", MovieCategory::Childrens, 1));
        statement.generate();
        assert_eq!(statement.total_amount().to_string(), "10.5");
        assert_eq!(statement.total_points(), 3);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let mut statement = Statement::new("Me");
        statement.add_rental(rental("RRRrrrr!!!", MovieCategory::Regular, 10));
        statement.add_rental(rental("Interstellar", MovieCategory::NewRelease, 2));

        let first = statement.generate();
        let second = statement.generate();
        assert_eq!(first, second);
        assert_eq!(statement.total_amount().to_string(), "20.0");
        assert_eq!(statement.total_points(), 3);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut statement = Statement::new("Me");
        statement.add_rental(rental("B", MovieCategory::Regular, 1));
        statement.add_rental(rental("A", MovieCategory::Regular, 1));

        let report = statement.generate();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "\tB\t2.0");
        assert_eq!(lines[2], "\tA\t2.0");
        assert_eq!(statement.rentals().len(), 2);
    }

    #[test]
    fn test_render_writes_into_existing_buffer() {
        let mut statement = Statement::new("Me");
        statement.add_rental(rental("Interstellar", MovieCategory::NewRelease, 2));

        let mut buffer = String::from("== ");
        statement.render(&mut buffer).unwrap();
        assert_eq!(
            buffer,
            "== Rental Record for Me\n\tInterstellar\t6.0\nAmount owed is 6.0\nYou earned 2 frequent renter points"
        );
        assert_eq!(statement.generate(), buffer["== ".len()..]);
    }

    #[test]
    fn test_write_to_appends_newline() {
        let mut statement = Statement::new("Me");
        statement.add_rental(rental("Zootopie", MovieCategory::Childrens, 6));

        let mut output = Vec::new();
        statement.write_to(&mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "Rental Record for Me\n\tZootopie\t6.0\nAmount owed is 6.0\nYou earned 1 frequent renter points\n"
        );
    }
}
