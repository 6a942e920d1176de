//! Binary-versus-text classification of a byte source.
//!
//! Several of the GTA table formats exist in both a plain-text and a binary
//! form in the wild (placement lists, path tables). Before dispatching to a
//! decoder we peek at a small prefix of the stream: any byte with the high
//! bit set, or a recognized magic signature, marks the source as binary.
//! The check is a heuristic; a text file with extended-ASCII bytes in a
//! comment would be misclassified, but it matches the files the games
//! actually shipped.

use std::io::{Read, Seek, SeekFrom};

/// Maximum number of prefix bytes inspected.
pub const SNIFF_LEN: usize = 16;

/// Result of sniffing a byte source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataEncoding {
    /// The source looks like a binary record stream.
    Binary,
    /// The source looks like a line-oriented text table.
    Text,
}

/// Classify an in-memory byte slice.
///
/// `magics` lists 4-byte signatures that force a [`DataEncoding::Binary`]
/// classification even when the prefix is pure ASCII (the binary placement
/// format opens with the printable signature `IPLB`).
pub fn sniff_bytes(data: &[u8], magics: &[[u8; 4]]) -> DataEncoding {
    let prefix = &data[..data.len().min(SNIFF_LEN)];

    if prefix.len() >= 4 {
        let head: [u8; 4] = [prefix[0], prefix[1], prefix[2], prefix[3]];
        if magics.contains(&head) {
            return DataEncoding::Binary;
        }
    }

    if prefix.iter().any(|&b| b > 0x7F) {
        return DataEncoding::Binary;
    }

    DataEncoding::Text
}

/// Classify a seekable reader without consuming it.
///
/// The prefix is read and the stream position explicitly restored, so the
/// sniff composes with whichever decode path is chosen afterwards.
pub fn sniff_reader<R: Read + Seek>(
    reader: &mut R,
    magics: &[[u8; 4]],
) -> std::io::Result<DataEncoding> {
    let origin = reader.stream_position()?;

    let mut prefix = [0u8; SNIFF_LEN];
    let mut filled = 0;
    while filled < SNIFF_LEN {
        let n = reader.read(&mut prefix[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    reader.seek(SeekFrom::Start(origin))?;
    Ok(sniff_bytes(&prefix[..filled], magics))
}
