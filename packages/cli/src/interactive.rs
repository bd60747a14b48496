//! Interactive district picker.
//!
//! Stands in for clicking a district on the dashboard map: lists the
//! districts of the loaded dataset with `dialoguer` and prints the report
//! for the one selected.

use dialoguer::{Confirm, Select};
use waste_map_analytics::DistrictReportBuilder;
use waste_map_district::RawDataset;

use crate::render::{render_error, render_report};

/// Prompts for districts until the user declines to continue.
///
/// # Errors
///
/// Returns an error if the terminal prompt fails.
pub fn run(
    dataset: &RawDataset,
    builder: &DistrictReportBuilder<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let names = dataset.names();
    if names.is_empty() {
        println!("The dataset contains no districts");
        return Ok(());
    }

    loop {
        let idx = Select::new()
            .with_prompt("Select a district")
            .items(&names)
            .default(0)
            .interact()?;

        match builder.build(names[idx]) {
            Ok(report) => print!("{}", render_report(&report)),
            Err(e) => println!("{}", render_error(&e)),
        }

        if !Confirm::new()
            .with_prompt("Show another district?")
            .default(true)
            .interact()?
        {
            return Ok(());
        }
    }
}
