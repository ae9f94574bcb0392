//! Rental Statement CLI
//!
//! Reads one customer's rentals from CSV (`title,category,days`) and prints
//! their statement.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- "Jane Doe" rentals.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace per-rental pricing

use rental_statement::{RentalError, RentalLoader, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(RentalError::MissingArgument);
    }

    let customer = &args[1];
    let input_path = &args[2];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut loader = RentalLoader::new();
    let mut statement = loader.load_csv(reader, customer)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    statement.write_to(handle)?;

    Ok(())
}
