use std::path::Path;
use std::str::FromStr;

use log::{debug, trace};

use gta_utils::Diagnostics;
use gta_utils::section::{Line, SectionScanner};
use gta_utils::text::split_tokens;

use crate::error::{IdeError, Result};
use crate::types::{ObjectDefinition, ObjectFlags};

/// Section keywords of the definition grammar. Only `objs` records are
/// materialized; the rest are lexed and discarded.
const SECTIONS: &[&str] = &[
    "objs", "tobj", "weap", "hier", "cars", "peds", "path", "txdp", "anim",
];

const COMMENT_MARKERS: &[char] = &['#', '%'];

/// A best-effort parse result: the definitions that could be recovered
/// plus the non-fatal problems encountered on the way.
#[derive(Debug, Clone)]
pub struct ParsedDefinitions {
    /// The recovered definitions, in file order.
    pub definitions: Vec<ObjectDefinition>,
    /// Lines that were dropped, one entry each.
    pub diagnostics: Diagnostics,
}

/// Parse an object definition table.
///
/// Malformed lines degrade to diagnostics; the recovered definitions are
/// still returned.
pub fn parse_object_definitions(bytes: &[u8]) -> Result<ParsedDefinitions> {
    let input = String::from_utf8_lossy(bytes);
    let mut scanner = SectionScanner::new(SECTIONS, COMMENT_MARKERS);
    let mut definitions = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for (number, raw) in input.lines().enumerate() {
        match scanner.advance(raw) {
            Line::Record("objs", line) => match parse_objs_line(&line) {
                Ok(definition) => definitions.push(definition),
                Err(e) => diagnostics.warn(format!("line {}: {e}", number + 1)),
            },
            Line::Record(section, _) => trace!("discarding {section} record"),
            _ => {}
        }
    }

    Ok(ParsedDefinitions {
        definitions,
        diagnostics,
    })
}

/// Parse a definition file from disk.
pub fn parse_object_definitions_file<P: AsRef<Path>>(path: P) -> Result<ParsedDefinitions> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let parsed = parse_object_definitions(&bytes)?;
    debug!(
        "parsed {} with {} definitions",
        path.display(),
        parsed.definitions.len()
    );
    Ok(parsed)
}

/// Parse a single cleaned `objs` line.
///
/// Layout: `id, modelName, txdName, meshCount, drawDist[, flags]`. At least
/// five fields are required. Flags parse as decimal with a hexadecimal
/// fallback (some tables write `0x...`), defaulting to empty.
pub fn parse_objs_line(line: &str) -> Result<ObjectDefinition> {
    let tokens = split_tokens(line);
    if tokens.len() < 5 {
        return Err(IdeError::MalformedRecord(format!(
            "expected at least 5 fields, got {}",
            tokens.len()
        )));
    }

    let flags = tokens
        .get(5)
        .map(|t| parse_flags(t))
        .unwrap_or_default();

    Ok(ObjectDefinition {
        id: parse_field(&tokens[0], "id")?,
        model_name: tokens[1].clone(),
        texture_name: tokens[2].clone(),
        mesh_count: parse_field(&tokens[3], "meshCount")?,
        draw_distance: parse_field(&tokens[4], "drawDist")?,
        flags,
    })
}

fn parse_flags(token: &str) -> ObjectFlags {
    let value = token
        .parse()
        .or_else(|_| u32::from_str_radix(token.trim_start_matches("0x"), 16))
        .unwrap_or(0);
    ObjectFlags::from_bits_retain(value)
}

fn parse_field<T: FromStr>(token: &str, field: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| IdeError::MalformedRecord(format!("field {field}: bad value {token:?}")))
}
