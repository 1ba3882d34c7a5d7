//! Example: Increment version strings
//!
//! Run with: cargo run --example increment

use version_updater::incrementer::increment;

fn main() {
    for input in ["1.0.5", "release-42", "v1.00", "no-digits"] {
        match increment(input) {
            Some(next) => println!("{input} -> {next}"),
            None => println!("{input} -> (not incrementable)"),
        }
    }
}
