use std::path::Path;
use std::str::FromStr;

use glam::{Quat, Vec3};
use log::{debug, trace};

use gta_utils::Diagnostics;
use gta_utils::section::{Line, SectionScanner};
use gta_utils::sniff::{DataEncoding, sniff_bytes};
use gta_utils::text::split_tokens;

use crate::error::{IplError, Result};
use crate::types::PlacementInstance;

/// Section keywords of the text placement grammar. Only `inst` records are
/// materialized; the rest are lexed and discarded.
const SECTIONS: &[&str] = &[
    "inst", "zone", "cull", "pick", "path", "occl", "mult", "grge", "enex", "cars", "jump",
    "tcyc", "auzo",
];

const COMMENT_MARKERS: &[char] = &['#'];

/// Signature opening the binary placement variant.
const BINARY_MAGIC: [u8; 4] = *b"IPLB";

/// Binary record: position xyz, rotation xyzw, model id, interior, lod.
const BINARY_RECORD_LEN: usize = 7 * 4 + 3 * 4;

/// A best-effort parse result: the instances that could be recovered plus
/// the non-fatal problems encountered on the way.
#[derive(Debug, Clone)]
pub struct ParsedPlacements {
    /// The recovered instances, in file order.
    pub instances: Vec<PlacementInstance>,
    /// Lines or records that were dropped, one entry each.
    pub diagnostics: Diagnostics,
}

/// Parse a placement list, sniffing the text and binary variants apart.
///
/// Malformed text lines and truncated binary tails degrade to diagnostics;
/// the recovered instances are still returned.
pub fn parse_placements(bytes: &[u8]) -> Result<ParsedPlacements> {
    match sniff_bytes(bytes, &[BINARY_MAGIC]) {
        DataEncoding::Binary => parse_binary(bytes),
        DataEncoding::Text => parse_text(&String::from_utf8_lossy(bytes)),
    }
}

/// Parse a placement file from disk.
pub fn parse_placements_file<P: AsRef<Path>>(path: P) -> Result<ParsedPlacements> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let parsed = parse_placements(&bytes)?;
    debug!(
        "parsed {} with {} instances",
        path.display(),
        parsed.instances.len()
    );
    Ok(parsed)
}

fn parse_text(input: &str) -> Result<ParsedPlacements> {
    let mut scanner = SectionScanner::new(SECTIONS, COMMENT_MARKERS);
    let mut instances = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for (number, raw) in input.lines().enumerate() {
        match scanner.advance(raw) {
            Line::Record("inst", line) => match parse_inst_line(&line) {
                Ok(instance) => instances.push(instance),
                Err(e) => diagnostics.warn(format!("line {}: {e}", number + 1)),
            },
            Line::Record(section, _) => trace!("discarding {section} record"),
            _ => {}
        }
    }

    Ok(ParsedPlacements {
        instances,
        diagnostics,
    })
}

/// Parse a single cleaned `inst` line.
///
/// Layout: `id, modelName, interior, posX..Z, rotX..Z, rotW[, lod]`. At
/// least ten fields are required; the trailing LOD index defaults to 0.
pub fn parse_inst_line(line: &str) -> Result<PlacementInstance> {
    let tokens = split_tokens(line);
    if tokens.len() < 10 {
        return Err(IplError::MalformedRecord(format!(
            "expected at least 10 fields, got {}",
            tokens.len()
        )));
    }

    let id = parse_field(&tokens[0], "id")?;
    let interior = parse_field(&tokens[2], "interior")?;
    let position = Vec3::new(
        parse_field(&tokens[3], "posX")?,
        parse_field(&tokens[4], "posY")?,
        parse_field(&tokens[5], "posZ")?,
    );
    let rotation = Quat::from_xyzw(
        parse_field(&tokens[6], "rotX")?,
        parse_field(&tokens[7], "rotY")?,
        parse_field(&tokens[8], "rotZ")?,
        parse_field(&tokens[9], "rotW")?,
    );
    let lod = tokens.get(10).and_then(|t| t.parse().ok()).unwrap_or(0);

    Ok(PlacementInstance {
        id,
        model_name: tokens[1].clone(),
        interior,
        position,
        rotation,
        lod,
    })
}

fn parse_field<T: FromStr>(token: &str, field: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| IplError::MalformedRecord(format!("field {field}: bad value {token:?}")))
}

fn parse_binary(bytes: &[u8]) -> Result<ParsedPlacements> {
    let mut instances = Vec::new();
    let mut diagnostics = Diagnostics::new();

    let Some(count_bytes) = bytes.get(4..8) else {
        diagnostics.warn("binary placement header truncated".to_string());
        return Ok(ParsedPlacements {
            instances,
            diagnostics,
        });
    };
    let declared = u32::from_le_bytes([
        count_bytes[0],
        count_bytes[1],
        count_bytes[2],
        count_bytes[3],
    ]) as usize;
    debug!("binary placement list declares {declared} instances");

    for record in bytes[8..].chunks_exact(BINARY_RECORD_LEN).take(declared) {
        instances.push(decode_binary_record(record));
    }
    if instances.len() < declared {
        diagnostics.warn(format!(
            "binary placement list truncated: {} of {declared} records present",
            instances.len()
        ));
    }

    Ok(ParsedPlacements {
        instances,
        diagnostics,
    })
}

fn decode_binary_record(record: &[u8]) -> PlacementInstance {
    let f32_at = |i: usize| {
        f32::from_le_bytes([
            record[i * 4],
            record[i * 4 + 1],
            record[i * 4 + 2],
            record[i * 4 + 3],
        ])
    };
    let u32_at = |i: usize| {
        u32::from_le_bytes([
            record[i * 4],
            record[i * 4 + 1],
            record[i * 4 + 2],
            record[i * 4 + 3],
        ])
    };

    let position = Vec3::new(f32_at(0), f32_at(1), f32_at(2));
    let rotation = Quat::from_xyzw(f32_at(3), f32_at(4), f32_at(5), f32_at(6));
    let model_id = u32_at(7);

    PlacementInstance {
        id: model_id,
        model_name: format!("Model_{model_id}"),
        interior: u32_at(8),
        position,
        rotation,
        lod: u32_at(9),
    }
}
