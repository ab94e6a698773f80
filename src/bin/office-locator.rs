// src/bin/office-locator.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use office_locator::{
    Environment, OfficeHome, OfficeLocator,
    cli::Cli,
    models::ProbePlan,
};
use serde::Serialize;
use std::path::PathBuf;

/// Exit code when no installation is configured or found.
const EXIT_NOT_FOUND: i32 = 2;

/// JSON shape of a resolution result.
#[derive(Serialize)]
struct LocateReport<'a> {
    family: office_locator::OsFamily,
    config: PathBuf,
    #[serde(flatten)]
    home: &'a OfficeHome,
}

/// The main entry point of `office-locator`.
/// It sets up logging, parses arguments, runs the locator and reports the result.
fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run_cli(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_NOT_FOUND),
        Err(e) => {
            eprintln!("\n{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Runs the requested action. Returns whether an install home was resolved.
fn run_cli(cli: Cli) -> Result<bool> {
    log::debug!("CLI args parsed: {:?}", cli);

    let mut locator = OfficeLocator::new(Environment::from_process());
    if let Some(family) = cli.os {
        locator = locator.os_family(family);
    }
    if let Some(config) = cli.config {
        locator = locator.config_path(config);
    }
    if let Some(dev) = cli.dev_path {
        locator = locator.development_candidate(dev);
    }

    if cli.plan {
        print_plan(&locator.plan(), cli.json)?;
        return Ok(true);
    }

    let home = if cli.no_config {
        locator.discover()
    } else {
        locator.locate()
    };

    if cli.json {
        let report = LocateReport {
            family: locator.family(),
            config: locator.effective_config_path(),
            home: &home,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &home {
            OfficeHome::Configured(path) => {
                println!("{}", path.display());
                eprintln!("{}", "(from office.home)".dimmed());
            }
            OfficeHome::Discovered(path) => println!("{}", path.display()),
            OfficeHome::NotFound => eprintln!(
                "{}: no office installation found for {}. Set 'office.home' in {}.",
                "Warning".yellow().bold(),
                locator.family(),
                locator.effective_config_path().display()
            ),
        }
    }

    Ok(home.path().is_some())
}

fn print_plan(plan: &ProbePlan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    println!("{} {}", "Probe plan for".bold(), plan.family.to_string().cyan());
    for (i, pass) in plan.passes.iter().enumerate() {
        println!(
            "\n{} {}",
            format!("Pass {}:", i + 1).green().bold(),
            pass.executable.display()
        );
        for candidate in &pass.candidates {
            println!("  {}", candidate.display());
        }
    }
    Ok(())
}
