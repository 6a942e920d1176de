//! End-to-end tests over text and binary placement inputs.

use glam::{Quat, Vec3};
use gta_ipl::parse_placements;

fn binary_record(
    position: [f32; 3],
    rotation: [f32; 4],
    model_id: u32,
    interior: u32,
    lod: u32,
) -> Vec<u8> {
    let mut bytes = Vec::new();
    for c in position {
        bytes.extend_from_slice(&c.to_le_bytes());
    }
    for c in rotation {
        bytes.extend_from_slice(&c.to_le_bytes());
    }
    bytes.extend_from_slice(&model_id.to_le_bytes());
    bytes.extend_from_slice(&interior.to_le_bytes());
    bytes.extend_from_slice(&lod.to_le_bytes());
    bytes
}

fn binary_list(records: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = b"IPLB".to_vec();
    bytes.extend_from_slice(&(records.len() as u32).to_le_bytes());
    for record in records {
        bytes.extend_from_slice(record);
    }
    bytes
}

#[test_log::test]
fn text_inst_section_materialized() {
    let input = "\
# industrial north-east
inst
1 infernus 0 10.0 20.0 5.0 0.0 0.0 0.0 1.0 0
2, lamppost, 0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 1.0
end
zone
INDNE 1 0 0 0 100 100 100
end
";
    let parsed = parse_placements(input.as_bytes()).expect("parse should succeed");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.instances.len(), 2);

    let first = &parsed.instances[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.model_name, "infernus");
    assert_eq!(first.interior, 0);
    assert_eq!(first.position, Vec3::new(10.0, 20.0, 5.0));
    assert_eq!(first.rotation, Quat::from_xyzw(0.0, 0.0, 0.0, 1.0));
    assert_eq!(first.lod, 0);

    // Second line omits the trailing LOD index.
    assert_eq!(parsed.instances[1].lod, 0);
}

#[test_log::test]
fn malformed_line_dropped_with_diagnostic() {
    let input = "inst\n1 infernus 0 10.0\n2 lamppost 0 1 2 3 0 0 0 1\nend\n";
    let parsed = parse_placements(input.as_bytes()).expect("parse should succeed");
    assert_eq!(parsed.instances.len(), 1);
    assert_eq!(parsed.instances[0].id, 2);
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test_log::test]
fn unknown_sections_discarded() {
    let input = "grge\n1 2 3 4\nend\ninst\n5 shed 0 0 0 0 0 0 0 1\nend\n";
    let parsed = parse_placements(input.as_bytes()).expect("parse should succeed");
    assert_eq!(parsed.instances.len(), 1);
    assert_eq!(parsed.instances[0].model_name, "shed");
}

#[test_log::test]
fn iplb_signature_selects_binary() {
    let bytes = binary_list(&[binary_record(
        [100.0, -50.0, 12.5],
        [0.0, 0.0, 0.0, 1.0],
        1234,
        3,
        2,
    )]);
    let parsed = parse_placements(&bytes).expect("parse should succeed");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.instances.len(), 1);

    let instance = &parsed.instances[0];
    assert_eq!(instance.id, 1234);
    assert_eq!(instance.model_name, "Model_1234");
    assert_eq!(instance.interior, 3);
    assert_eq!(instance.position, Vec3::new(100.0, -50.0, 12.5));
    assert_eq!(instance.lod, 2);
}

#[test_log::test]
fn truncated_binary_tail_degrades() {
    let mut bytes = binary_list(&[
        binary_record([0.0; 3], [0.0, 0.0, 0.0, 1.0], 1, 0, 0),
        binary_record([1.0; 3], [0.0, 0.0, 0.0, 1.0], 2, 0, 0),
    ]);
    bytes.truncate(bytes.len() - 10);

    let parsed = parse_placements(&bytes).expect("parse should succeed");
    assert_eq!(parsed.instances.len(), 1);
    assert_eq!(parsed.instances[0].id, 1);
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test_log::test]
fn binary_header_alone_yields_diagnostic() {
    let parsed = parse_placements(b"IPL").expect("parse should succeed");
    // Three bytes of ASCII sniff as text and hold no sections.
    assert!(parsed.instances.is_empty());

    let parsed = parse_placements(&[0xFFu8, 0x01]).expect("parse should succeed");
    assert!(parsed.instances.is_empty());
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test_log::test]
fn empty_input_is_empty_text() {
    let parsed = parse_placements(&[]).expect("parse should succeed");
    assert!(parsed.instances.is_empty());
    assert!(parsed.diagnostics.is_empty());
}
