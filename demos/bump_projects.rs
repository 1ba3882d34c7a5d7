//! Example: Dry-run a batch update over the crates in the current directory
//!
//! Run with: cargo run --example bump_projects

use anyhow::Result;
use version_updater::incrementer;
use version_updater::projects::{ProjectKind, cargo_toml::CargoToml};

fn main() -> Result<()> {
    let mut pairs = vec![];
    for project in CargoToml::discover("./")? {
        let version = CargoToml::read_version(&project.manifest)?;
        pairs.push((project.name, version));
    }

    let summary = incrementer::update_batch(
        pairs
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str())),
    );

    println!("{}", summary.headline());
    for line in &summary.lines {
        println!("{line}");
    }

    Ok(())
}
