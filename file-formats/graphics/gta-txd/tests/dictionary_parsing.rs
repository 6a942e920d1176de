//! End-to-end tests over synthetic TEXDICTIONARY byte buffers.

use gta_txd::{parse_texture_dictionary, platform};

const DATA: u32 = 0x01;
const TEXNATIVE: u32 = 0x15;
const TEXDICTIONARY: u32 = 0x16;
const CLUMP: u32 = 0x10;

fn chunk(kind: u32, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(12 + payload.len());
    bytes.extend_from_slice(&kind.to_le_bytes());
    bytes.extend_from_slice(&((payload.len() + 12) as u32).to_le_bytes());
    bytes.extend_from_slice(&0x1803FFFFu32.to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

struct TextureSpec {
    platform_id: u32,
    name: &'static str,
    raster_format: u32,
    width: u16,
    height: u16,
    depth: u8,
    compression: u8,
    payload: Vec<u8>,
}

impl TextureSpec {
    fn encode(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&self.platform_id.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes()); // filter flags
        data.extend_from_slice(&1u32.to_le_bytes()); // u addressing
        data.extend_from_slice(&1u32.to_le_bytes()); // v addressing

        let mut name = [0u8; 32];
        name[..self.name.len()].copy_from_slice(self.name.as_bytes());
        data.extend_from_slice(&name);
        data.extend_from_slice(&[0u8; 32]); // mask name

        data.extend_from_slice(&self.raster_format.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes()); // d3d format
        data.extend_from_slice(&self.width.to_le_bytes());
        data.extend_from_slice(&self.height.to_le_bytes());
        data.push(self.depth);
        data.push(1); // mipmap count
        data.push(4); // raster type
        data.push(self.compression);
        data.extend_from_slice(&self.payload);

        chunk(TEXNATIVE, &chunk(DATA, &data))
    }
}

fn dictionary(textures: &[TextureSpec]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&(textures.len() as u16).to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes()); // device id

    let mut payload = chunk(DATA, &data);
    for texture in textures {
        payload.extend_from_slice(&texture.encode());
    }
    chunk(TEXDICTIONARY, &payload)
}

/// One DXT1 block: white/black endpoints, all selectors on entry 0.
fn dxt1_white_block() -> Vec<u8> {
    let mut block = Vec::new();
    block.extend_from_slice(&0xFFFFu16.to_le_bytes());
    block.extend_from_slice(&0x0000u16.to_le_bytes());
    block.extend_from_slice(&0u32.to_le_bytes());
    block
}

#[test_log::test]
fn dxt1_texture_decodes_to_rgba() {
    let texture = TextureSpec {
        platform_id: platform::PC,
        name: "wall_256",
        raster_format: 0x0200, // 565
        width: 4,
        height: 4,
        depth: 16,
        compression: 1,
        payload: dxt1_white_block(),
    };
    let parsed = parse_texture_dictionary(&dictionary(&[texture])).expect("parse should succeed");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.textures.len(), 1);

    let texture = &parsed.textures[0];
    assert_eq!(texture.name, "wall_256");
    assert_eq!((texture.width, texture.height), (4, 4));
    assert_eq!(texture.pixels.len(), 4 * 4 * 4);
    assert!(!texture.has_alpha);
    for pixel in texture.pixels.chunks(4) {
        assert_eq!(pixel, [0xF8, 0xFC, 0xF8, 0xFF]);
    }
}

#[test_log::test]
fn dxt1_hidden_color_yields_transparency() {
    // c0 <= c1 and selectors all pick entry 3.
    let mut block = Vec::new();
    block.extend_from_slice(&0x0000u16.to_le_bytes());
    block.extend_from_slice(&0xFFFFu16.to_le_bytes());
    block.extend_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
    let texture = TextureSpec {
        platform_id: platform::PC,
        name: "fence",
        raster_format: 0x0100, // 1555
        width: 4,
        height: 4,
        depth: 16,
        compression: 1,
        payload: block,
    };
    let parsed = parse_texture_dictionary(&dictionary(&[texture])).expect("parse should succeed");
    let texture = &parsed.textures[0];
    assert!(texture.has_alpha);
    for pixel in texture.pixels.chunks(4) {
        assert_eq!(pixel[3], 0);
    }
}

#[test_log::test]
fn parse_is_deterministic() {
    let bytes = dictionary(&[TextureSpec {
        platform_id: platform::PC,
        name: "road",
        raster_format: 0x0200,
        width: 8,
        height: 8,
        depth: 16,
        compression: 1,
        payload: [dxt1_white_block(), dxt1_white_block(), dxt1_white_block(), dxt1_white_block()]
            .concat(),
    }]);
    let a = parse_texture_dictionary(&bytes).expect("parse should succeed");
    let b = parse_texture_dictionary(&bytes).expect("parse should succeed");
    assert_eq!(a.textures[0].pixels, b.textures[0].pixels);
}

#[test_log::test]
fn unsupported_platform_skipped_with_diagnostic() {
    let bad = TextureSpec {
        platform_id: 6,
        name: "gamecube",
        raster_format: 0x0200,
        width: 4,
        height: 4,
        depth: 16,
        compression: 1,
        payload: dxt1_white_block(),
    };
    let good = TextureSpec {
        platform_id: platform::PS2,
        name: "kept",
        raster_format: 0x0200,
        width: 4,
        height: 4,
        depth: 16,
        compression: 1,
        payload: dxt1_white_block(),
    };
    let parsed =
        parse_texture_dictionary(&dictionary(&[bad, good])).expect("parse should succeed");
    assert_eq!(parsed.textures.len(), 1);
    assert_eq!(parsed.textures[0].name, "kept");
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test_log::test]
fn truncated_payload_skipped_with_diagnostic() {
    let texture = TextureSpec {
        platform_id: platform::PC,
        name: "short",
        raster_format: 0x0200,
        width: 16,
        height: 16,
        depth: 16,
        compression: 1,
        payload: dxt1_white_block(), // one block where sixteen are needed
    };
    let parsed = parse_texture_dictionary(&dictionary(&[texture])).expect("parse should succeed");
    assert!(parsed.textures.is_empty());
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test_log::test]
fn uncompressed_8888_is_bgra_in_file() {
    let texture = TextureSpec {
        platform_id: platform::PC,
        name: "icon",
        raster_format: 0x0500, // 8888
        width: 1,
        height: 1,
        depth: 32,
        compression: 0,
        payload: vec![0x10, 0x20, 0x30, 0x40],
    };
    let parsed = parse_texture_dictionary(&dictionary(&[texture])).expect("parse should succeed");
    let texture = &parsed.textures[0];
    assert!(texture.has_alpha);
    assert_eq!(texture.pixels, [0x30, 0x20, 0x10, 0x40]);
}

#[test_log::test]
fn unknown_uncompressed_layout_degrades_to_white() {
    let texture = TextureSpec {
        platform_id: platform::PC,
        name: "weird",
        raster_format: 0x0400, // LUM8
        width: 2,
        height: 1,
        depth: 8,
        compression: 0,
        payload: vec![0x12, 0x34],
    };
    let parsed = parse_texture_dictionary(&dictionary(&[texture])).expect("parse should succeed");
    assert_eq!(parsed.textures.len(), 1);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.textures[0].pixels, [255, 255, 255, 255, 255, 255, 255, 255]);
}

#[test_log::test]
fn wrong_root_chunk_rejected() {
    let bytes = chunk(CLUMP, &chunk(DATA, &0u32.to_le_bytes()));
    assert!(parse_texture_dictionary(&bytes).is_err());
}

#[test_log::test]
fn empty_dictionary_parses() {
    let parsed = parse_texture_dictionary(&dictionary(&[])).expect("parse should succeed");
    assert!(parsed.textures.is_empty());
    assert!(parsed.diagnostics.is_empty());
}
