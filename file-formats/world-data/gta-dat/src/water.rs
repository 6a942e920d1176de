//! The water plane table.

use std::path::Path;

use glam::Vec3;
use log::{debug, trace};

use gta_utils::Diagnostics;
use gta_utils::text::{split_tokens, strip_comment};

use crate::error::{DatError, Result};
use crate::types::WaterPlane;

const COMMENT_MARKERS: &[char] = &['#', ';'];

/// A best-effort parse result for the water table.
#[derive(Debug, Clone)]
pub struct ParsedWater {
    /// The recovered planes, in file order.
    pub planes: Vec<WaterPlane>,
    /// Lines that were dropped, one entry each.
    pub diagnostics: Diagnostics,
}

/// Parse a water plane table.
///
/// Header words such as `processed` are skipped silently; lines that start
/// numeric but fail to parse degrade to diagnostics.
pub fn parse_water_planes(bytes: &[u8]) -> Result<ParsedWater> {
    let input = String::from_utf8_lossy(bytes);
    let mut planes = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for (number, raw) in input.lines().enumerate() {
        let line = strip_comment(raw, COMMENT_MARKERS);
        if line.is_empty() {
            continue;
        }
        // The shipped files open with a bare marker word.
        if line
            .split_whitespace()
            .next()
            .is_some_and(|t| t.parse::<f32>().is_err())
        {
            trace!("skipping non-record line {:?}", line);
            continue;
        }
        match parse_water_line(line) {
            Ok(plane) => planes.push(plane),
            Err(e) => diagnostics.warn(format!("line {}: {e}", number + 1)),
        }
    }

    Ok(ParsedWater {
        planes,
        diagnostics,
    })
}

/// Parse a water file from disk.
pub fn parse_water_planes_file<P: AsRef<Path>>(path: P) -> Result<ParsedWater> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let parsed = parse_water_planes(&bytes)?;
    debug!(
        "parsed {} with {} water planes",
        path.display(),
        parsed.planes.len()
    );
    Ok(parsed)
}

/// Parse a single cleaned water plane line.
///
/// Layout: four corner triples, the water level, and an optional surface
/// type. At least thirteen fields are required; the type defaults to 0.
pub fn parse_water_line(line: &str) -> Result<WaterPlane> {
    let tokens = split_tokens(line);
    if tokens.len() < 13 {
        return Err(DatError::MalformedRecord(format!(
            "expected at least 13 fields, got {}",
            tokens.len()
        )));
    }

    let corner = |base: usize| -> Result<Vec3> {
        Ok(Vec3::new(
            parse_f32(&tokens[base])?,
            parse_f32(&tokens[base + 1])?,
            parse_f32(&tokens[base + 2])?,
        ))
    };

    Ok(WaterPlane {
        corner1: corner(0)?,
        corner2: corner(3)?,
        corner3: corner(6)?,
        corner4: corner(9)?,
        level: parse_f32(&tokens[12])?,
        surface_type: tokens.get(13).and_then(|t| t.parse().ok()).unwrap_or(0),
    })
}

fn parse_f32(token: &str) -> Result<f32> {
    token
        .parse()
        .map_err(|_| DatError::MalformedRecord(format!("bad value {token:?}")))
}
