//! # section_cli
//!
//! Command-line front end for `section_core`. Reads a JSON section
//! definition and prints section properties, shear cuts or shear stress as
//! JSON.
//!
//! ```text
//! section_cli properties beam.json
//! section_cli shear beam.json --force 80000 --at 0 --at 100
//! section_cli cut beam.json --at -50 --units in
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use section_core::section::{Section, SectionDefinition, SectionProperties};
use section_core::shear::{ShearCut, ShearCutResult, ShearStressSample, TransverseShear};
use section_core::{CutConfig, SectionError};

#[derive(Parser)]
#[command(name = "section_cli")]
#[command(about = "Cross-section properties and transverse shear stress")]
struct Cmd {
    /// Length unit label echoed in the output (values are not converted)
    #[arg(long, global = true, default_value = "mm")]
    units: String,

    /// Log cut retries and fragment assembly
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print area, centroid, inertia and derived properties
    Properties {
        /// JSON section definition
        file: PathBuf,
    },
    /// Print shear stress at the given heights, or a profile over the depth
    Shear {
        file: PathBuf,
        /// Shear force V
        #[arg(long, allow_negative_numbers = true)]
        force: f64,
        /// Height above the centroid; repeat for several heights
        #[arg(long, allow_negative_numbers = true)]
        at: Vec<f64>,
        /// Profile samples when no --at is given
        #[arg(long, default_value_t = 21)]
        samples: usize,
    },
    /// Print the fragment and width of a horizontal cut
    Cut {
        file: PathBuf,
        /// Height above the centroid
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
    },
}

impl Action {
    fn file(&self) -> &Path {
        match self {
            Action::Properties { file }
            | Action::Shear { file, .. }
            | Action::Cut { file, .. } => file,
        }
    }
}

#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    units: &'a str,
    section: &'a str,
    #[serde(flatten)]
    body: T,
}

#[derive(Serialize)]
struct ShearReport {
    force: f64,
    i_xx: f64,
    tau_max: f64,
    samples: Vec<ShearStressSample>,
}

#[derive(Serialize)]
struct CutReport {
    area: f64,
    first_moment: f64,
    #[serde(flatten)]
    cut: ShearCutResult,
}

fn main() -> ExitCode {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::WARN };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cmd) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {err:#}");
    if let Some(section_err) = err.downcast_ref::<SectionError>() {
        if let Ok(json) = serde_json::to_string_pretty(section_err) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{json}");
        }
    }
}

fn run(cmd: &Cmd) -> Result<String> {
    let definition = load_definition(cmd.action.file())?;
    tracing::debug!(shape = definition.shape_type(), "loaded section definition");
    let section = definition
        .build()
        .with_context(|| format!("building {} section", definition.shape_type()))?;
    execute(&cmd.action, &section, &cmd.units)
}

fn load_definition(path: &Path) -> Result<SectionDefinition> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading section definition {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing section definition {}", path.display()))
}

fn execute(action: &Action, section: &Section, units: &str) -> Result<String> {
    let kind = section.kind();
    let json = match action {
        Action::Properties { .. } => to_json(units, kind, section.summary())?,
        Action::Shear {
            force, at, samples, ..
        } => match section {
            Section::Polygon(p) => {
                to_json(units, kind, shear_report(p.clone(), *force, at, *samples)?)?
            }
            Section::Hollow(h) => {
                to_json(units, kind, shear_report(h.clone(), *force, at, *samples)?)?
            }
            other => bail!("{} sections do not support the shear cut", other.kind()),
        },
        Action::Cut { at, .. } => {
            let config = CutConfig::default();
            let cut = match section {
                Section::Polygon(p) => p.cut_at_height(*at, &config)?,
                Section::Hollow(h) => h.cut_at_height(*at, &config)?,
                other => bail!("{} sections do not support the shear cut", other.kind()),
            };
            let report = CutReport {
                area: cut.area(),
                first_moment: cut.first_moment(),
                cut,
            };
            to_json(units, kind, report)?
        }
    };
    Ok(json)
}

fn shear_report<S: ShearCut>(
    shape: S,
    force: f64,
    at: &[f64],
    samples: usize,
) -> Result<ShearReport> {
    let i_xx = shape.i_xx();
    let shear = TransverseShear::new(force, shape)?;
    let samples = if at.is_empty() {
        shear.profile(samples)?
    } else {
        at.iter()
            .map(|&y| {
                Ok(ShearStressSample {
                    y,
                    q: shear.shear_flow(y)?,
                    tau: shear.tau(y)?,
                })
            })
            .collect::<Result<Vec<_>, SectionError>>()?
    };
    Ok(ShearReport {
        force,
        i_xx,
        tau_max: shear.tau_max()?,
        samples,
    })
}

fn to_json<T: Serialize>(units: &str, section: &str, body: T) -> Result<String> {
    let report = Report { units, section, body };
    Ok(serde_json::to_string_pretty(&report)?)
}
