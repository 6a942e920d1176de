use std::path::Path;

use glam::{Vec2, Vec3};
use log::{debug, trace};

use gta_rw::{ByteCursor, ChunkHeader, ChunkKind, Diagnostics, RwError};

use crate::error::Result;
use crate::types::{BoundingBox, GeometryFlags, Material, Mesh, Model, Vertex};

/// A best-effort parse result: the model that could be recovered plus the
/// non-fatal problems encountered on the way.
#[derive(Debug, Clone)]
pub struct ParsedModel {
    /// The recovered model.
    pub model: Model,
    /// Sub-trees that were dropped, one entry each.
    pub diagnostics: Diagnostics,
}

/// Parse a DFF model from an in-memory byte buffer.
///
/// The root chunk must be CLUMP; anything else fails with
/// [`RwError::UnexpectedRootChunk`]. Malformed geometry or material
/// sub-trees below the root are skipped and reported in the returned
/// diagnostics.
pub fn parse_model(bytes: &[u8]) -> Result<ParsedModel> {
    let mut cursor = ByteCursor::new(bytes);
    let root = ChunkHeader::read(&mut cursor)?;
    if root.kind != ChunkKind::CLUMP {
        return Err(RwError::UnexpectedRootChunk {
            expected: ChunkKind::CLUMP,
            found: root.kind,
        }
        .into());
    }

    let mut diagnostics = Diagnostics::new();
    let mut payload = root.payload(&mut cursor);
    let model = parse_clump(&mut payload, &mut diagnostics)?;
    Ok(ParsedModel { model, diagnostics })
}

/// Parse a DFF model file, naming the model after the file stem.
pub fn parse_model_file<P: AsRef<Path>>(path: P) -> Result<ParsedModel> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let mut parsed = parse_model(&bytes)?;
    parsed.model.name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(
        "parsed {} with {} meshes",
        path.display(),
        parsed.model.meshes.len()
    );
    Ok(parsed)
}

/// Read the mandatory leading DATA sub-chunk of a container and return its
/// bounded payload.
fn expect_data<'a>(cursor: &mut ByteCursor<'a>, parent: ChunkKind) -> Result<ByteCursor<'a>> {
    let header = ChunkHeader::read(cursor)?;
    if header.kind != ChunkKind::DATA {
        return Err(RwError::ExpectedDataChunk { parent }.into());
    }
    Ok(header.payload(cursor))
}

fn parse_clump(cursor: &mut ByteCursor<'_>, diagnostics: &mut Diagnostics) -> Result<Model> {
    let mut data = expect_data(cursor, ChunkKind::CLUMP)?;
    // Atomic count is informational only; atomics themselves are skipped.
    let atomic_count = data.read_u32_le()?;
    debug!("clump declares {atomic_count} atomics");

    let mut model = Model::default();
    while cursor.remaining() >= ChunkHeader::SIZE {
        let header = ChunkHeader::read(cursor)?;
        match header.kind {
            ChunkKind::GEOMETRYLIST => {
                let mut payload = header.payload(cursor);
                if let Err(e) = parse_geometry_list(&mut payload, &mut model.meshes, diagnostics) {
                    diagnostics.warn(format!("dropped malformed geometry list: {e}"));
                }
            }
            ChunkKind::FRAMELIST | ChunkKind::ATOMIC => {
                // Hierarchy is not modeled.
                trace!("skipping {} chunk", header.kind);
                header.skip(cursor);
            }
            kind => {
                trace!("skipping unknown chunk {kind} in clump");
                header.skip(cursor);
            }
        }
    }

    model.bounding_box = model
        .meshes
        .iter()
        .map(|mesh| mesh.bounding_box)
        .reduce(|a, b| a.union(&b))
        .unwrap_or_default();
    Ok(model)
}

fn parse_geometry_list(
    cursor: &mut ByteCursor<'_>,
    meshes: &mut Vec<Mesh>,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    let mut data = expect_data(cursor, ChunkKind::GEOMETRYLIST)?;
    let geometry_count = data.read_u32_le()?;
    debug!("geometry list declares {geometry_count} geometries");

    while cursor.remaining() >= ChunkHeader::SIZE {
        let header = ChunkHeader::read(cursor)?;
        let mut payload = header.payload(cursor);
        if header.kind != ChunkKind::GEOMETRY {
            trace!("skipping {} chunk in geometry list", header.kind);
            continue;
        }
        let name = format!("Mesh_{}", meshes.len());
        match parse_geometry(&mut payload, name, diagnostics) {
            Ok(mesh) => meshes.push(mesh),
            Err(e) => diagnostics.warn(format!("dropped malformed geometry {}: {e}", meshes.len())),
        }
    }
    Ok(())
}

fn parse_geometry(
    cursor: &mut ByteCursor<'_>,
    name: String,
    diagnostics: &mut Diagnostics,
) -> Result<Mesh> {
    let mut data = expect_data(cursor, ChunkKind::GEOMETRY)?;

    let flags = GeometryFlags::from_bits_retain(data.read_u32_le()?);
    let triangle_count = data.read_u32_le()? as usize;
    let vertex_count = data.read_u32_le()? as usize;
    let _morph_target_count = data.read_u32_le()?;
    trace!("geometry {name}: flags {flags:?}, {triangle_count} triangles, {vertex_count} vertices");

    // Validate the declared counts against the bounded payload before
    // allocating anything, so hostile counts fail as Truncated.
    let mut per_vertex = 0usize;
    if flags.contains(GeometryFlags::POSITIONS) {
        per_vertex += 12;
    }
    if flags.contains(GeometryFlags::NORMALS) {
        per_vertex += 12;
    }
    if flags.contains(GeometryFlags::PRELIT) {
        per_vertex += 4;
    }
    if flags.contains(GeometryFlags::TEXTURED) {
        per_vertex += 8;
    }
    let needed = per_vertex
        .saturating_mul(vertex_count)
        .saturating_add(TRIANGLE_RECORD_SIZE.saturating_mul(triangle_count));
    if needed > data.remaining() {
        return Err(RwError::Truncated {
            needed,
            remaining: data.remaining(),
        }
        .into());
    }

    let mut vertices = vec![Vertex::default(); vertex_count];

    // Field arrays are tightly packed one after another, not interleaved.
    if flags.contains(GeometryFlags::POSITIONS) {
        for vertex in &mut vertices {
            vertex.position = read_vec3(&mut data)?;
        }
    }
    if flags.contains(GeometryFlags::NORMALS) {
        for vertex in &mut vertices {
            vertex.normal = read_vec3(&mut data)?;
        }
    }
    if flags.contains(GeometryFlags::PRELIT) {
        for vertex in &mut vertices {
            vertex.color = data.read_u32_le()?;
        }
    }
    if flags.contains(GeometryFlags::TEXTURED) {
        for vertex in &mut vertices {
            vertex.uv = Vec2::new(data.read_f32_le()?, data.read_f32_le()?);
        }
    }

    let mut indices = Vec::with_capacity(triangle_count * 3);
    for _ in 0..triangle_count {
        let v1 = data.read_u16_le()? as u32;
        let v2 = data.read_u16_le()? as u32;
        let _material_id = data.read_u32_le()?;
        let v3 = data.read_u32_le()?;
        indices.extend_from_slice(&[v1, v2, v3]);
    }

    // Child chunks after DATA: the material list, anything else skipped.
    let mut materials = Vec::new();
    while cursor.remaining() >= ChunkHeader::SIZE {
        let header = ChunkHeader::read(cursor)?;
        let mut payload = header.payload(cursor);
        match header.kind {
            ChunkKind::MATERIALLIST => {
                if let Err(e) = parse_material_list(&mut payload, &mut materials, diagnostics) {
                    diagnostics.warn(format!("dropped malformed material list in {name}: {e}"));
                }
            }
            kind => trace!("skipping {kind} chunk in geometry"),
        }
    }

    if materials.len() > 1 {
        // Only the first material is kept per geometry.
        debug!(
            "geometry {name}: discarding {} extra materials",
            materials.len() - 1
        );
    }

    let bounding_box = BoundingBox::from_points(vertices.iter().map(|v| v.position));
    Ok(Mesh {
        name,
        vertices,
        indices,
        material: materials.into_iter().next().unwrap_or_default(),
        bounding_box,
    })
}

/// Bytes per triangle record: two u16 vertex indices, a u32 material id
/// (unused beyond this layer), and a u32 third vertex index.
const TRIANGLE_RECORD_SIZE: usize = 12;

fn parse_material_list(
    cursor: &mut ByteCursor<'_>,
    materials: &mut Vec<Material>,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    let mut data = expect_data(cursor, ChunkKind::MATERIALLIST)?;
    let material_count = data.read_u32_le()? as usize;
    // Material index table, unused here.
    for _ in 0..material_count {
        if data.read_i32_le().is_err() {
            break;
        }
    }

    while cursor.remaining() >= ChunkHeader::SIZE {
        let header = ChunkHeader::read(cursor)?;
        let mut payload = header.payload(cursor);
        if header.kind != ChunkKind::MATERIAL {
            trace!("skipping {} chunk in material list", header.kind);
            continue;
        }
        let name = format!("Material_{}", materials.len());
        match parse_material(&mut payload, name) {
            Ok(material) => materials.push(material),
            Err(e) => diagnostics.warn(format!(
                "dropped malformed material {}: {e}",
                materials.len()
            )),
        }
    }
    Ok(())
}

fn parse_material(cursor: &mut ByteCursor<'_>, name: String) -> Result<Material> {
    let mut data = expect_data(cursor, ChunkKind::MATERIAL)?;
    let _flags = data.read_u32_le()?;
    let r = data.read_f32_le()?;
    let g = data.read_f32_le()?;
    let b = data.read_f32_le()?;
    let _a = data.read_f32_le()?;
    let _unused = data.read_u32_le()?;
    let _textured = data.read_u32_le()?;

    let mut material = Material {
        name,
        diffuse: Vec3::new(r, g, b),
        ..Material::default()
    };

    while cursor.remaining() >= ChunkHeader::SIZE {
        let header = ChunkHeader::read(cursor)?;
        let mut payload = header.payload(cursor);
        match header.kind {
            ChunkKind::TEXTURE => material.texture_name = parse_texture_ref(&mut payload)?,
            kind => trace!("skipping {kind} chunk in material"),
        }
    }
    Ok(material)
}

/// A TEXTURE chunk holds a DATA record (filter flags) followed by STRING
/// children; the first string is the texture name.
fn parse_texture_ref(cursor: &mut ByteCursor<'_>) -> Result<String> {
    while cursor.remaining() >= ChunkHeader::SIZE {
        let header = ChunkHeader::read(cursor)?;
        if header.kind == ChunkKind::STRING {
            return Ok(read_string(&header, cursor));
        }
        header.skip(cursor);
    }
    Ok(String::new())
}

/// Read a STRING chunk payload: fixed-size, null-padded ASCII.
fn read_string(header: &ChunkHeader, cursor: &mut ByteCursor<'_>) -> String {
    let payload = header.payload(cursor);
    let bytes = payload.peek(payload.len());
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

fn read_vec3(cursor: &mut ByteCursor<'_>) -> Result<Vec3> {
    Ok(Vec3::new(
        cursor.read_f32_le()?,
        cursor.read_f32_le()?,
        cursor.read_f32_le()?,
    ))
}
