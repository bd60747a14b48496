#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for district waste reports.
//!
//! Loads the district table, then either prints the report for one
//! district, lists districts, sizes a fleet for an arbitrary requirement,
//! or (with no subcommand) lets the user pick a district interactively.

mod config;
mod interactive;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use waste_map_analytics::{DistrictReportBuilder, ReportError};
use waste_map_district::RawDataset;
use waste_map_fleet::Optimizer;
use waste_map_fleet_models::FleetCatalog;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "waste_map", about = "District solid-waste reports and fleet planning")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "WASTE_MAP_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Path to the district CSV (overrides `data.path` in the config)
    #[arg(long, env = "WASTE_MAP_DATA", global = true)]
    data: Option<PathBuf>,
    /// Maximum number of search nodes explored when sizing a fleet
    #[arg(long, global = true)]
    node_budget: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the report for one district
    Report {
        /// District name (case-insensitive). Prompts if omitted.
        district: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the districts in the dataset
    Districts,
    /// Size the cheapest fleet covering a daily tonnage
    Plan {
        /// Required capacity in tonnes/day
        capacity_tpd: f64,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the vehicle catalog
    Catalog,
}

/// Exit code for any other failure.
const EXIT_FAILURE: u8 = 1;
/// Exit code for a district with no data.
const EXIT_NOT_FOUND: u8 = 2;
/// Exit code for a requirement no fleet can cover.
const EXIT_INFEASIBLE: u8 = 3;

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<u8, Box<dyn std::error::Error>> {
    let config = Config::load(cli.config.as_deref())?;
    let catalog = config.catalog()?;
    let optimizer = cli.node_budget.map_or_else(Optimizer::new, |budget| {
        Optimizer::new().with_node_budget(budget)
    });

    match cli.command {
        Some(Commands::Catalog) => print!("{}", render::render_catalog(&catalog)),
        Some(Commands::Plan { capacity_tpd, json }) => {
            return plan(&optimizer, capacity_tpd, &catalog, json);
        }
        Some(Commands::Districts) => {
            let dataset = load_dataset(cli.data, &config)?;
            for name in dataset.names() {
                println!("{name}");
            }
        }
        Some(Commands::Report {
            district: Some(district),
            json,
        }) => {
            let dataset = load_dataset(cli.data, &config)?;
            let builder = DistrictReportBuilder::new(&dataset, &catalog).with_optimizer(optimizer);
            let report = match builder.build(&district) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("{}", render::render_error(&e));
                    return Ok(exit_code_for(&e));
                }
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::render_report(&report));
            }
        }
        Some(Commands::Report { district: None, .. }) | None => {
            let dataset = load_dataset(cli.data, &config)?;
            let builder = DistrictReportBuilder::new(&dataset, &catalog).with_optimizer(optimizer);
            interactive::run(&dataset, &builder)?;
        }
    }

    Ok(0)
}

/// Sizes and prints a fleet for `capacity_tpd`, returning the exit code.
fn plan(
    optimizer: &Optimizer,
    capacity_tpd: f64,
    catalog: &FleetCatalog,
    json: bool,
) -> Result<u8, Box<dyn std::error::Error>> {
    let plan = optimizer.optimize(capacity_tpd, &catalog.vehicles)?;
    if !plan.feasible {
        eprintln!("Vehicle planning failed: no fleet covers {capacity_tpd:.2} TPD");
        return Ok(EXIT_INFEASIBLE);
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::render_plan(&plan));
    }
    Ok(0)
}

fn load_dataset(
    data: Option<PathBuf>,
    config: &Config,
) -> Result<RawDataset, Box<dyn std::error::Error>> {
    let Some(path) = data.or_else(|| config.data.path.clone()) else {
        return Err("No district data: pass --data or set data.path in the config".into());
    };
    let dataset = RawDataset::from_csv_path(&path, &config.csv_options()?)?;
    log::info!("Loaded {} districts from {}", dataset.len(), path.display());
    Ok(dataset)
}

const fn exit_code_for(err: &ReportError) -> u8 {
    match err {
        ReportError::NotFound { .. } => EXIT_NOT_FOUND,
        ReportError::Infeasible { .. } => EXIT_INFEASIBLE,
        ReportError::Fleet(_) | ReportError::District(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use waste_map_fleet::FleetError;
    use waste_map_fleet_models::VehicleType;

    use super::*;

    #[test]
    fn report_errors_map_to_distinct_exit_codes() {
        let not_found = ReportError::NotFound {
            district: "Gwalior".to_owned(),
        };
        let infeasible = ReportError::Infeasible {
            district: "Gwalior".to_owned(),
            required_tpd: 12.0,
        };
        let fleet = ReportError::Fleet(FleetError::InvalidRequirement { value: f64::NAN });

        assert_eq!(exit_code_for(&not_found), 2);
        assert_eq!(exit_code_for(&infeasible), 3);
        assert_eq!(exit_code_for(&fleet), 1);
    }

    #[test]
    fn plan_exit_codes() {
        let catalog = waste_map_fleet::default_catalog();
        assert_eq!(plan(&Optimizer::new(), 43.6, &catalog, false).unwrap(), 0);
        assert_eq!(plan(&Optimizer::new(), 0.0, &catalog, true).unwrap(), 0);

        let starved = Optimizer::new().with_node_budget(1);
        assert_eq!(
            plan(&starved, 43.6, &catalog, false).unwrap(),
            EXIT_INFEASIBLE
        );

        let idle = FleetCatalog {
            vehicles: vec![VehicleType::new("parked", "Parked cart", 0.0, 100.0)],
        };
        assert_eq!(
            plan(&Optimizer::new(), 5.0, &idle, false).unwrap(),
            EXIT_INFEASIBLE
        );
    }

    #[test]
    fn invalid_requirement_is_an_error() {
        let catalog = waste_map_fleet::default_catalog();
        assert!(plan(&Optimizer::new(), f64::NAN, &catalog, false).is_err());
    }
}
