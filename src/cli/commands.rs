//! Command implementations for the METAR tool
//!
//! Retrieves each requested station's report, prints the raw line and, on
//! request, the decoded block and station position.

use crate::cli::args::Args;
use crate::decoder::MetarDecoder;
use crate::envelope::StationObservation;
use crate::fetch::MetarClient;
use crate::render::{LocationView, ReportView};
use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use tracing::{debug, error, info};

/// Width of the observation timestamp column printed by `-t`
const DATETIME_COLUMN: usize = 21;

/// Outcome counts for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Stations named on the command line
    pub stations_requested: usize,
    /// Reports printed
    pub reports_printed: usize,
    /// Stations the server had no single report for
    pub not_found: usize,
    /// Stations whose retrieval failed
    pub failed: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_decoder={}", log_level)));

    // A second initialisation (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Main command runner
pub async fn run(args: Args) -> Result<RunSummary> {
    setup_logging(&args);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(text) = &args.raw {
        print_decoded(&mut out, &args, text)?;
        out.flush()?;
        return Ok(RunSummary {
            reports_printed: 1,
            ..RunSummary::default()
        });
    }

    let config = args.build_config().context("Invalid configuration")?;
    info!("Using METAR server {}", config.metar_url);
    let client = MetarClient::new(config).context("Failed to create HTTP client")?;

    let mut summary = RunSummary {
        stations_requested: args.stations.len(),
        ..RunSummary::default()
    };

    for station in &args.stations {
        match client.fetch_observation(station).await {
            Ok(observation) => {
                print_observation(&mut out, &args, &observation)?;
                summary.reports_printed += 1;
            }
            Err(err) if err.is_not_found() => {
                debug!("{}", err);
                print_not_found(&mut out, &args, station)?;
                summary.not_found += 1;
            }
            Err(err) => {
                error!("Retrieval for {} failed: {}", station, err);
                eprintln!(
                    "{} {} getting data for station {}",
                    "ERROR:".red().bold(),
                    err,
                    station
                );
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Line printed for a station without a report
pub fn print_not_found(out: &mut impl Write, args: &Args, station: &str) -> io::Result<()> {
    if args.datetime {
        write!(out, "{:width$}", "", width = DATETIME_COLUMN)?;
    }
    writeln!(out, "{} is not a valid ICAO airport identifier.", station)
}

/// Raw line, then the decoded and location blocks the flags ask for
pub fn print_observation(
    out: &mut impl Write,
    args: &Args,
    observation: &StationObservation,
) -> Result<()> {
    if args.datetime {
        write!(out, "{} ", observation.observation_time_display())?;
    }
    write!(out, "{}", observation.raw_text)?;
    if args.category {
        write!(out, " {}", observation.flight_category)?;
    }
    writeln!(out)?;

    if args.wants_decoded() {
        print_decoded(out, args, &observation.raw_text)?;
    }

    if args.location {
        write!(out, "{}", LocationView(observation))?;
    }
    Ok(())
}

fn print_decoded(out: &mut impl Write, args: &Args, text: &str) -> Result<()> {
    let result = MetarDecoder::new().decode_with_stats(text);
    if !result.stats.unmatched.is_empty() {
        debug!("Unrecognized groups: {}", result.stats.unmatched.join(" "));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&result.report)
            .context("Failed to serialize decoded report")?;
        writeln!(out, "{}", json)?;
    } else {
        write!(out, "{}", ReportView(&result.report))?;
        writeln!(out)?;
    }
    Ok(())
}
