// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: generate the parametric brownstone model and print a summary.
//!
//! Usage:
//!   brownstone [options]
//!
//! Options:
//!   --params <file.json>   parameter file (JSON, fields in feet)
//!   --only <category>      restrict the summary to one element category
//!   --warn-degenerate      log skipped zero-length wall requests
//!   --json                 emit the summary as JSON
//!
//! Log verbosity follows RUST_LOG (e.g. RUST_LOG=debug).

use std::env;
use std::fs;
use std::process;

use brownstone_generator::{generate, BuildingReport, DegeneratePolicy, GenerateOptions};
use brownstone_model::{BuildingParameters, CategoryFamily, UuidIdSource};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut params_path: Option<String> = None;
    let mut only: Option<CategoryFamily> = None;
    let mut options = GenerateOptions::default();
    let mut as_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--params" => {
                i += 1;
                params_path = Some(args[i].clone());
            }
            "--only" => {
                i += 1;
                match CategoryFamily::from_name(&args[i]) {
                    Ok(family) => only = Some(family),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--warn-degenerate" => {
                options.degenerate_walls = DegeneratePolicy::Warn;
            }
            "--json" => {
                as_json = true;
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let params = match params_path {
        Some(path) => match load_params(&path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error reading {path}: {e}");
                process::exit(1);
            }
        },
        None => BuildingParameters::default(),
    };

    let mut ids = UuidIdSource;
    let model = match generate(&params, &mut ids, options) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Generation failed: {e}");
            process::exit(1);
        }
    };

    let report = BuildingReport::from_model(&model);

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                process::exit(1);
            }
        }
        return;
    }

    print_report(&report, only);
}

fn load_params(path: &str) -> Result<BuildingParameters, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let params: BuildingParameters = serde_json::from_str(&content)?;
    Ok(params)
}

fn print_report(report: &BuildingReport, only: Option<CategoryFamily>) {
    println!("{} / {}", report.project, report.building);
    println!(
        "  {} elements, bounds {:.2} x {:.2} x {:.2} m",
        report.element_count,
        report.bounds.max[0] - report.bounds.min[0],
        report.bounds.max[1] - report.bounds.min[1],
        report.bounds.max[2] - report.bounds.min[2],
    );

    for storey in &report.storeys {
        println!("  {} ({:+.3} m)", storey.name, storey.elevation);
        for entry in &storey.by_category {
            if only.map_or(true, |f| f == entry.category) {
                println!("    {:>4}  {}", entry.count, entry.category);
            }
        }
    }

    if let Some(family) = only {
        println!("  total {}: {}", family, report.count_of(family));
    }
}

fn print_usage() {
    println!("Usage: brownstone [options]");
    println!();
    println!("Options:");
    println!("  --params <file.json>   parameter file (JSON, fields in feet)");
    println!("  --only <category>      restrict the summary to one element category");
    println!("  --warn-degenerate      log skipped zero-length wall requests");
    println!("  --json                 emit the summary as JSON");
}
