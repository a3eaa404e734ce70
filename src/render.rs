//! Human-readable rendering of decoded reports.
//!
//! Produces the labelled, column-aligned block printed by `metar -d`.
//! Groups missing from the report render as zero or empty values.

use crate::envelope::StationObservation;
use crate::models::{WeatherReport, Wind, WindDirection};
use std::fmt;

/// Indent of continuation lines, aligned under the first value
const CONTINUATION: &str = "                ";

/// Display adapter for a decoded report
pub struct ReportView<'a>(pub &'a WeatherReport);

/// Display adapter for a station's position
pub struct LocationView<'a>(pub &'a StationObservation);

pub fn render_report(report: &WeatherReport) -> String {
    ReportView(report).to_string()
}

pub fn render_location(observation: &StationObservation) -> String {
    LocationView(observation).to_string()
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(
            f,
            "Station       : {}",
            report.station.as_deref().unwrap_or_default()
        )?;

        let observed = report.observed.unwrap_or_default();
        writeln!(f, "Day           : {}", observed.day)?;
        writeln!(
            f,
            "Time          : {:02}:{:02} UTC",
            observed.hour(),
            observed.minute()
        )?;

        let calm = Wind::default();
        let wind = report.wind.as_ref().unwrap_or(&calm);
        match wind.direction {
            WindDirection::Variable => writeln!(f, "Wind direction: Variable")?,
            WindDirection::Degrees(degrees) => writeln!(
                f,
                "Wind direction: {} ({})",
                degrees,
                wind.direction.compass_point().unwrap_or_default()
            )?,
        }
        writeln!(f, "Wind speed    : {} {}", wind.speed, wind.unit)?;
        writeln!(f, "Wind gust     : {} {}", wind.gust, wind.unit)?;

        match report.visibility {
            Some(visibility) => {
                writeln!(f, "Visibility    : {} {}", visibility.value, visibility.unit)?
            }
            None => writeln!(f, "Visibility    : 0 ")?,
        }

        let temperatures = report.temperatures.unwrap_or_default();
        writeln!(f, "Temperature   : {} C", temperatures.temperature)?;
        writeln!(f, "Dewpoint      : {} C", temperatures.dewpoint)?;

        match report.pressure {
            Some(pressure) => writeln!(
                f,
                "Pressure      : {:.*} {}",
                pressure.decimals as usize,
                pressure.scaled(),
                pressure.unit
            )?,
            None => writeln!(f, "Pressure      : 0 ")?,
        }

        write!(f, "Clouds        : ")?;
        if report.clouds.is_empty() {
            writeln!(f)?;
        }
        for (index, layer) in report.clouds.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", CONTINUATION)?;
            }
            match layer.altitude.filter(|_| layer.shows_altitude()) {
                Some(altitude) => writeln!(
                    f,
                    "{} at {}00 ft{}",
                    layer.cover, altitude, layer.modifier
                )?,
                None => writeln!(f, "{}{}", layer.cover, layer.modifier)?,
            }
        }

        write!(f, "Phenomena     : ")?;
        if report.phenomena.is_empty() {
            writeln!(f)?;
        }
        for (index, phenomenon) in report.phenomena.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", CONTINUATION)?;
            }
            writeln!(f, "{}", phenomenon)?;
        }

        if report.maintenance_required {
            writeln!(f, "WARNING: Maintenance is needed on this station.")?;
        }

        Ok(())
    }
}

impl fmt::Display for LocationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let observation = self.0;
        writeln!(
            f,
            "Lat, Lon      : {:.3}, {:.3}",
            observation.latitude, observation.longitude
        )?;
        writeln!(
            f,
            "Elevation     : {:.1} Meters, {:.1} Feet",
            observation.elevation_m,
            observation.elevation_ft()
        )
    }
}
