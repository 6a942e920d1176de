//! The vehicle handling table.

use std::path::Path;
use std::str::FromStr;

use glam::Vec3;
use log::debug;

use gta_utils::Diagnostics;
use gta_utils::section::{Line, SectionScanner};
use gta_utils::text::split_tokens;

use crate::error::{DatError, Result};
use crate::types::VehicleHandlingRecord;

const SECTIONS: &[&str] = &["handling"];

const COMMENT_MARKERS: &[char] = &['#', ';', '%'];

/// Minimum column count before any field of a handling line is trusted.
const MIN_TOKENS: usize = 30;

/// A best-effort parse result for the handling table.
#[derive(Debug, Clone)]
pub struct ParsedHandling {
    /// The recovered records, in file order.
    pub records: Vec<VehicleHandlingRecord>,
    /// Lines that were dropped, one entry each.
    pub diagnostics: Diagnostics,
}

/// Parse a vehicle handling table.
///
/// Records live between a `handling` keyword and `end`; malformed lines
/// degrade to diagnostics.
pub fn parse_handling(bytes: &[u8]) -> Result<ParsedHandling> {
    let input = String::from_utf8_lossy(bytes);
    let mut scanner = SectionScanner::new(SECTIONS, COMMENT_MARKERS);
    let mut records = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for (number, raw) in input.lines().enumerate() {
        if let Line::Record("handling", line) = scanner.advance(raw) {
            match parse_handling_line(&line) {
                Ok(record) => records.push(record),
                Err(e) => diagnostics.warn(format!("line {}: {e}", number + 1)),
            }
        }
    }

    Ok(ParsedHandling {
        records,
        diagnostics,
    })
}

/// Parse a handling file from disk.
pub fn parse_handling_file<P: AsRef<Path>>(path: P) -> Result<ParsedHandling> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let parsed = parse_handling(&bytes)?;
    debug!(
        "parsed {} with {} handling records",
        path.display(),
        parsed.records.len()
    );
    Ok(parsed)
}

/// Parse a single cleaned handling line.
///
/// A full row has over thirty columns; at least [`MIN_TOKENS`] are required
/// before anything is read. The identifier and the first eighteen tuning
/// columns are taken from the line; the trailing columns keep the defaults
/// of [`VehicleHandlingRecord::default`].
pub fn parse_handling_line(line: &str) -> Result<VehicleHandlingRecord> {
    let tokens = split_tokens(line);
    if tokens.len() < MIN_TOKENS {
        return Err(DatError::MalformedRecord(format!(
            "expected at least {MIN_TOKENS} fields, got {}",
            tokens.len()
        )));
    }

    let abs: u32 = parse_field(&tokens[17], "abs")?;

    Ok(VehicleHandlingRecord {
        identifier: tokens[0].clone(),
        mass: parse_field(&tokens[1], "mass")?,
        drag_mult: parse_field(&tokens[2], "dragMult")?,
        center_of_mass: Vec3::new(
            parse_field(&tokens[3], "comX")?,
            parse_field(&tokens[4], "comY")?,
            parse_field(&tokens[5], "comZ")?,
        ),
        percent_submerged: parse_field(&tokens[6], "percentSubmerged")?,
        traction_mult: parse_field(&tokens[7], "tractionMult")?,
        traction_loss: parse_field(&tokens[8], "tractionLoss")?,
        traction_bias: parse_field(&tokens[9], "tractionBias")?,
        transmission_data: parse_field(&tokens[10], "transmissionData")?,
        engine_acceleration: parse_field(&tokens[11], "engineAcceleration")?,
        engine_inertia: parse_field(&tokens[12], "engineInertia")?,
        drive_type: parse_field(&tokens[13], "driveType")?,
        engine_type: parse_field(&tokens[14], "engineType")?,
        brake_deceleration: parse_field(&tokens[15], "brakeDeceleration")?,
        brake_bias: parse_field(&tokens[16], "brakeBias")?,
        abs: abs != 0,
        steering_lock: parse_field(&tokens[18], "steeringLock")?,
        ..VehicleHandlingRecord::default()
    })
}

fn parse_field<T: FromStr>(token: &str, field: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| DatError::MalformedRecord(format!("field {field}: bad value {token:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A 30-column line in the shape the shipped tables use.
    fn full_line() -> String {
        let mut tokens = vec![
            "LANDSTAL".to_string(),
            "1700.0".to_string(),  // mass
            "2.0".to_string(),     // drag
            "0.0".to_string(),     // com x
            "0.0".to_string(),     // com y
            "-0.3".to_string(),    // com z
            "85".to_string(),      // percent submerged
            "1.0".to_string(),     // traction mult
            "0.85".to_string(),    // traction loss
            "0.5".to_string(),     // traction bias
            "5".to_string(),       // transmission data
            "160.0".to_string(),   // engine acceleration
            "10.0".to_string(),    // engine inertia
            "4".to_string(),       // drive type
            "0".to_string(),       // engine type
            "6.0".to_string(),     // brake deceleration
            "0.45".to_string(),    // brake bias
            "1".to_string(),       // abs
            "30.0".to_string(),    // steering lock
        ];
        while tokens.len() < 30 {
            tokens.push("0".to_string());
        }
        tokens.join(" ")
    }

    #[test]
    fn handling_line_full() {
        let record = parse_handling_line(&full_line()).unwrap();
        assert_eq!(record.identifier, "LANDSTAL");
        assert_eq!(record.mass, 1700.0);
        assert_eq!(record.center_of_mass, Vec3::new(0.0, 0.0, -0.3));
        assert_eq!(record.percent_submerged, 85);
        assert_eq!(record.transmission_data, 5);
        assert_eq!(record.drive_type, 4);
        assert!(record.abs);
        assert_eq!(record.steering_lock, 30.0);
        // Trailing columns keep their defaults.
        assert_eq!(record.suspension_force_level, 1.0);
        assert_eq!(record.suspension_lower_limit, -0.15);
        assert_eq!(record.monetary_value, 10_000);
        assert_eq!(record.rear_lights, 1);
    }

    #[test]
    fn twenty_nine_columns_rejected() {
        let line = full_line();
        let short = line.rsplit_once(' ').unwrap().0;
        assert!(matches!(
            parse_handling_line(short),
            Err(DatError::MalformedRecord(_))
        ));
    }

    #[test]
    fn abs_zero_is_false() {
        let line = full_line().replace(" 1 30.0", " 0 30.0");
        let record = parse_handling_line(&line).unwrap();
        assert!(!record.abs);
    }

    #[test]
    fn section_grammar_applied() {
        let input = format!("; header\nhandling\n{}\nend\n", full_line());
        let parsed = parse_handling(input.as_bytes()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn malformed_line_dropped_with_diagnostic() {
        let input = format!("handling\nBADROW 1 2\n{}\nend\n", full_line());
        let parsed = parse_handling(input.as_bytes()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.diagnostics.len(), 1);
    }
}
