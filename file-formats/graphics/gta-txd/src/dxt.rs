//! Block decompression for the DXT1/DXT3/DXT5 codecs, plus raw raster
//! conversion for the uncompressed layouts.
//!
//! All functions here are pure: the same input bytes always produce the
//! same pixel buffer. Each compressed block covers a 4x4 texel tile; images
//! whose dimensions are not multiples of four keep full blocks in the file
//! and the decoder clips the overhang. Undersized payloads are treated as
//! zero-padded, matching how the game engines tolerate short tail mips.
//!
//! DXT1 carries the format's hidden-color convention: when the first packed
//! color endpoint is numerically less than or equal to the second, palette
//! entry 3 is fully transparent regardless of its RGB bits.

use crate::types::RasterFormat;

/// Width and height of one compressed block, in texels.
pub const BLOCK_DIM: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ColorMode {
    /// DXT1: `c0 <= c1` selects the 3-color-plus-transparent palette.
    OneBitAlpha,
    /// DXT3/DXT5: always the 4-color opaque palette; alpha is separate.
    Opaque,
}

fn expand_565(packed: u16) -> [u8; 3] {
    // 5-bit and 6-bit channels widen by plain shifts.
    let r = (((packed >> 11) & 0x1F) << 3) as u8;
    let g = (((packed >> 5) & 0x3F) << 2) as u8;
    let b = ((packed & 0x1F) << 3) as u8;
    [r, g, b]
}

fn interpolate(a: u8, b: u8, wa: u16, wb: u16, div: u16) -> u8 {
    ((wa * a as u16 + wb * b as u16) / div) as u8
}

fn color_palette(c0: u16, c1: u16, mode: ColorMode) -> [[u8; 4]; 4] {
    let [r0, g0, b0] = expand_565(c0);
    let [r1, g1, b1] = expand_565(c1);

    let mut palette = [
        [r0, g0, b0, 255],
        [r1, g1, b1, 255],
        [0, 0, 0, 255],
        [0, 0, 0, 255],
    ];

    if c0 > c1 || mode == ColorMode::Opaque {
        palette[2] = [
            interpolate(r0, r1, 2, 1, 3),
            interpolate(g0, g1, 2, 1, 3),
            interpolate(b0, b1, 2, 1, 3),
            255,
        ];
        palette[3] = [
            interpolate(r0, r1, 1, 2, 3),
            interpolate(g0, g1, 1, 2, 3),
            interpolate(b0, b1, 1, 2, 3),
            255,
        ];
    } else {
        palette[2] = [
            interpolate(r0, r1, 1, 1, 2),
            interpolate(g0, g1, 1, 1, 2),
            interpolate(b0, b1, 1, 1, 2),
            255,
        ];
        // Hidden color: entry 3 is transparent no matter its RGB bits.
        palette[3] = [0, 0, 0, 0];
    }

    palette
}

/// Decode the 8-byte color half of a block into 16 RGBA pixels, row-major.
fn decode_color_block(block: &[u8; 8], mode: ColorMode) -> [[u8; 4]; 16] {
    let c0 = u16::from_le_bytes([block[0], block[1]]);
    let c1 = u16::from_le_bytes([block[2], block[3]]);
    let palette = color_palette(c0, c1, mode);
    let selectors = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

    let mut pixels = [[0u8; 4]; 16];
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let index = (selectors >> (2 * i)) & 0x3;
        *pixel = palette[index as usize];
    }
    pixels
}

/// DXT5 alpha interpolation table per the published codec.
fn alpha_table(a0: u8, a1: u8) -> [u8; 8] {
    let mut table = [0u8; 8];
    table[0] = a0;
    table[1] = a1;
    if a0 > a1 {
        for (i, slot) in table.iter_mut().enumerate().skip(2) {
            *slot = interpolate(a0, a1, (8 - i) as u16, (i - 1) as u16, 7);
        }
    } else {
        for (i, slot) in table.iter_mut().enumerate().take(6).skip(2) {
            *slot = interpolate(a0, a1, (6 - i) as u16, (i - 1) as u16, 5);
        }
        table[6] = 0;
        table[7] = 255;
    }
    table
}

/// Walk the block grid, decoding each block and clipping the 4x4 tile to
/// the image bounds. Blocks past the end of `data` decode as zeros.
fn decode_blocks<const N: usize>(
    data: &[u8],
    width: usize,
    height: usize,
    decode: impl Fn(&[u8; N]) -> [[u8; 4]; 16],
) -> Vec<u8> {
    let blocks_wide = width.div_ceil(BLOCK_DIM);
    let blocks_high = height.div_ceil(BLOCK_DIM);
    let mut out = vec![0u8; width * height * 4];

    for by in 0..blocks_high {
        for bx in 0..blocks_wide {
            let offset = (by * blocks_wide + bx) * N;
            let mut block = [0u8; N];
            if let Some(bytes) = data.get(offset..offset + N) {
                block.copy_from_slice(bytes);
            } else if let Some(tail) = data.get(offset..) {
                block[..tail.len()].copy_from_slice(tail);
            }
            let pixels = decode(&block);

            for py in 0..BLOCK_DIM {
                let y = by * BLOCK_DIM + py;
                if y >= height {
                    break;
                }
                for px in 0..BLOCK_DIM {
                    let x = bx * BLOCK_DIM + px;
                    if x >= width {
                        continue;
                    }
                    let dst = (y * width + x) * 4;
                    out[dst..dst + 4].copy_from_slice(&pixels[py * BLOCK_DIM + px]);
                }
            }
        }
    }
    out
}

/// Decode a DXT1 payload into an RGBA8 buffer of `width * height` pixels.
pub fn decode_dxt1(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    decode_blocks::<8>(data, width as usize, height as usize, |block| {
        decode_color_block(block, ColorMode::OneBitAlpha)
    })
}

/// Decode a DXT3 payload: 8 bytes of explicit 4-bit alpha, then the color
/// block. Alpha values widen by x17 (0x0 -> 0, 0xF -> 255).
pub fn decode_dxt3(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    decode_blocks::<16>(data, width as usize, height as usize, |block| {
        let alpha_bits = u64::from_le_bytes([
            block[0], block[1], block[2], block[3], block[4], block[5], block[6], block[7],
        ]);
        let mut color: [u8; 8] = [0; 8];
        color.copy_from_slice(&block[8..16]);
        let mut pixels = decode_color_block(&color, ColorMode::Opaque);
        for (i, pixel) in pixels.iter_mut().enumerate() {
            pixel[3] = (((alpha_bits >> (4 * i)) & 0xF) * 17) as u8;
        }
        pixels
    })
}

/// Decode a DXT5 payload: two alpha endpoints, a 48-bit field of 3-bit
/// selectors into the interpolated alpha table, then the color block.
pub fn decode_dxt5(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    decode_blocks::<16>(data, width as usize, height as usize, |block| {
        let table = alpha_table(block[0], block[1]);
        let mut selector_bytes = [0u8; 8];
        selector_bytes[..6].copy_from_slice(&block[2..8]);
        let selectors = u64::from_le_bytes(selector_bytes);

        let mut color: [u8; 8] = [0; 8];
        color.copy_from_slice(&block[8..16]);
        let mut pixels = decode_color_block(&color, ColorMode::Opaque);
        for (i, pixel) in pixels.iter_mut().enumerate() {
            let sel = ((selectors >> (3 * i)) & 0x7) as usize;
            pixel[3] = table[sel];
        }
        pixels
    })
}

/// Convert an uncompressed raster payload into an RGBA8 buffer.
///
/// Layouts: 8888 is 4-byte `(B, G, R, A)` groups, 888 is 3-byte BGR with
/// implied full alpha, 565 is 16-bit little-endian. Pixels past the end of
/// `data` come out opaque black; layouts outside this set come out opaque
/// white (the caller reports them).
pub fn decode_raster(data: &[u8], width: u32, height: u32, format: RasterFormat) -> Vec<u8> {
    let pixel_count = width as usize * height as usize;
    let mut out = vec![0u8; pixel_count * 4];

    for i in 0..pixel_count {
        let dst = i * 4;
        let pixel: [u8; 4] = match format {
            RasterFormat::C8888 => match data.get(i * 4..i * 4 + 4) {
                Some(p) => [p[2], p[1], p[0], p[3]],
                None => [0, 0, 0, 255],
            },
            RasterFormat::C888 => match data.get(i * 3..i * 3 + 3) {
                Some(p) => [p[2], p[1], p[0], 255],
                None => [0, 0, 0, 255],
            },
            RasterFormat::C565 => match data.get(i * 2..i * 2 + 2) {
                Some(p) => {
                    let [r, g, b] = expand_565(u16::from_le_bytes([p[0], p[1]]));
                    [r, g, b, 255]
                }
                None => [0, 0, 0, 255],
            },
            _ => [255, 255, 255, 255],
        };
        out[dst..dst + 4].copy_from_slice(&pixel);
    }
    out
}
