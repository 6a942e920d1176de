//! The path node table, text and binary variants.

use std::path::Path;
use std::str::FromStr;

use glam::Vec3;
use log::debug;

use gta_utils::Diagnostics;
use gta_utils::sniff::{DataEncoding, sniff_bytes};
use gta_utils::text::{split_tokens, strip_comment};

use crate::error::{DatError, Result};
use crate::types::PathNode;

const COMMENT_MARKERS: &[char] = &['#', ';'];

/// Binary header: total, vehicle, ped, and car node counts.
const BINARY_HEADER_LEN: usize = 16;

/// Binary record: address, reserved, position, link/area/node ids, width,
/// type, flags.
const BINARY_RECORD_LEN: usize = 28;

/// A best-effort parse result for the path table.
#[derive(Debug, Clone)]
pub struct ParsedPaths {
    /// The recovered nodes, in file order.
    pub nodes: Vec<PathNode>,
    /// Lines or records that were dropped, one entry each.
    pub diagnostics: Diagnostics,
}

/// Parse a path node table, sniffing the text and binary variants apart.
pub fn parse_path_nodes(bytes: &[u8]) -> Result<ParsedPaths> {
    match sniff_bytes(bytes, &[]) {
        DataEncoding::Binary => parse_binary(bytes),
        DataEncoding::Text => parse_text(&String::from_utf8_lossy(bytes)),
    }
}

/// Parse a path node file from disk.
pub fn parse_path_nodes_file<P: AsRef<Path>>(path: P) -> Result<ParsedPaths> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let parsed = parse_path_nodes(&bytes)?;
    debug!("parsed {} with {} nodes", path.display(), parsed.nodes.len());
    Ok(parsed)
}

fn parse_text(input: &str) -> Result<ParsedPaths> {
    let mut nodes = Vec::new();
    let mut diagnostics = Diagnostics::new();

    for (number, raw) in input.lines().enumerate() {
        let line = strip_comment(raw, COMMENT_MARKERS);
        if line.is_empty() {
            continue;
        }
        match parse_path_line(line) {
            Ok(node) => nodes.push(node),
            Err(e) => diagnostics.warn(format!("line {}: {e}", number + 1)),
        }
    }

    Ok(ParsedPaths { nodes, diagnostics })
}

/// Parse a single cleaned path node line.
///
/// Layout: `id, posX..Z, dirX..Z, width[, nodeType][, nextNode][, crossRoad]`.
/// At least eight fields are required; the optional trailing numerics
/// default when absent or unparseable (width 1.0, the rest 0).
pub fn parse_path_line(line: &str) -> Result<PathNode> {
    let tokens = split_tokens(line);
    if tokens.len() < 8 {
        return Err(DatError::MalformedRecord(format!(
            "expected at least 8 fields, got {}",
            tokens.len()
        )));
    }

    let id = parse_field(&tokens[0], "id")?;
    let position = Vec3::new(
        parse_field(&tokens[1], "posX")?,
        parse_field(&tokens[2], "posY")?,
        parse_field(&tokens[3], "posZ")?,
    );
    let direction = Vec3::new(
        parse_field(&tokens[4], "dirX")?,
        parse_field(&tokens[5], "dirY")?,
        parse_field(&tokens[6], "dirZ")?,
    );

    Ok(PathNode {
        id,
        position,
        direction,
        width: tokens[7].parse().unwrap_or(1.0),
        node_type: tokens.get(8).and_then(|t| t.parse().ok()).unwrap_or(0),
        next_node: tokens.get(9).and_then(|t| t.parse().ok()).unwrap_or(0),
        cross_road: tokens.get(10).and_then(|t| t.parse().ok()).unwrap_or(0),
        name: format!("PathNode_{id}"),
    })
}

fn parse_field<T: FromStr>(token: &str, field: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| DatError::MalformedRecord(format!("field {field}: bad value {token:?}")))
}

fn parse_binary(bytes: &[u8]) -> Result<ParsedPaths> {
    let mut nodes = Vec::new();
    let mut diagnostics = Diagnostics::new();

    let Some(header) = bytes.get(..BINARY_HEADER_LEN) else {
        diagnostics.warn("binary path header truncated".to_string());
        return Ok(ParsedPaths { nodes, diagnostics });
    };
    let declared = u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;
    debug!("binary path table declares {declared} nodes");

    for record in bytes[BINARY_HEADER_LEN..]
        .chunks_exact(BINARY_RECORD_LEN)
        .take(declared)
    {
        nodes.push(decode_binary_record(record));
    }
    if nodes.len() < declared {
        diagnostics.warn(format!(
            "binary path table truncated: {} of {declared} records present",
            nodes.len()
        ));
    }

    Ok(ParsedPaths { nodes, diagnostics })
}

fn decode_binary_record(record: &[u8]) -> PathNode {
    let u16_at = |o: usize| u16::from_le_bytes([record[o], record[o + 1]]);
    let f32_at =
        |o: usize| f32::from_le_bytes([record[o], record[o + 1], record[o + 2], record[o + 3]]);

    let position = Vec3::new(f32_at(4), f32_at(8), f32_at(12));
    let link_id = u16_at(16);
    let node_id = u16_at(20);
    let path_width = record[22];
    let node_type = record[23];

    PathNode {
        id: u32::from(node_id),
        position,
        // The binary form carries no direction vector.
        direction: Vec3::ZERO,
        width: f32::from(path_width) / 255.0 * 10.0,
        node_type: u32::from(node_type),
        next_node: u32::from(link_id),
        cross_road: 0,
        name: format!("PathNode_{node_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path_line_full() {
        let node = parse_path_line("12 100.0 200.0 10.0 0.0 1.0 0.0 5.5 2 13 1").unwrap();
        assert_eq!(node.id, 12);
        assert_eq!(node.position, Vec3::new(100.0, 200.0, 10.0));
        assert_eq!(node.direction, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(node.width, 5.5);
        assert_eq!(node.node_type, 2);
        assert_eq!(node.next_node, 13);
        assert_eq!(node.cross_road, 1);
        assert_eq!(node.name, "PathNode_12");
    }

    #[test]
    fn path_line_optionals_default() {
        let node = parse_path_line("3 1 2 3 0 0 0 junk").unwrap();
        assert_eq!(node.width, 1.0);
        assert_eq!(node.node_type, 0);
        assert_eq!(node.next_node, 0);
        assert_eq!(node.cross_road, 0);
    }

    #[test]
    fn path_line_too_few_fields() {
        assert!(matches!(
            parse_path_line("3 1 2 3"),
            Err(DatError::MalformedRecord(_))
        ));
    }

    #[test]
    fn binary_record_width_rescaled() {
        let mut record = vec![0u8; BINARY_RECORD_LEN];
        record[4..8].copy_from_slice(&1.5f32.to_le_bytes());
        record[8..12].copy_from_slice(&2.5f32.to_le_bytes());
        record[12..16].copy_from_slice(&3.5f32.to_le_bytes());
        record[16..18].copy_from_slice(&7u16.to_le_bytes()); // link id
        record[20..22].copy_from_slice(&42u16.to_le_bytes()); // node id
        record[22] = 255; // path width

        let node = decode_binary_record(&record);
        assert_eq!(node.id, 42);
        assert_eq!(node.position, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(node.width, 10.0);
        assert_eq!(node.next_node, 7);
        assert_eq!(node.cross_road, 0);
    }
}
