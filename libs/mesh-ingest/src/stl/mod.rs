//! # STL Loader
//!
//! Reads binary and ASCII stereolithography files.
//!
//! ## Format Detection
//!
//! A file is binary when its length is exactly `84 + 50 * n` for the face
//! count `n` stored at byte 80. Otherwise it is binary when the 80-byte
//! header holds a control character other than tab, LF or CR. Files shorter
//! than 84 bytes are always ASCII. The `solid` keyword is not trusted, many
//! binary exporters write it into the header.
//!
//! ## Binary Layout
//!
//! ```text
//! [80 bytes header][u32 face count]
//! per face: [3 x f32 normal][3 x 3 x f32 vertices][u16 attribute]
//! ```
//!
//! All values are little-endian. Normals are ignored.
//!
//! ## ASCII Layout
//!
//! Lines are trimmed and matched case-insensitively. `facet` starts a new
//! face, `vertex x y z` records up to three vertices, `endfacet` emits the
//! face when it holds exactly three.

#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use config::constants::MAX_TRIANGLES;
use glam::DVec3;
use voxel_core::{Mesh, Triangle};

use crate::error::{IngestError, IngestResult};
use crate::loader::MeshLoader;

/// Size of the binary header preceding the face count.
pub const HEADER_SIZE: usize = 80;

/// Size of one binary face record.
pub const FACE_SIZE: usize = 50;

const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Loader for `.stl` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct StlLoader;

impl StlLoader {
    /// Creates the loader.
    pub fn new() -> Self {
        Self
    }
}

impl MeshLoader for StlLoader {
    fn supported_extensions(&self) -> &[&'static str] {
        &[".stl"]
    }

    fn load_triangles(&self, path: &Path) -> IngestResult<Mesh> {
        let bytes = fs::read(path).map_err(|e| IngestError::from_io(path, e))?;

        let parsed = if is_binary(&bytes) {
            log::debug!("reading {} as binary STL", path.display());
            parse_binary(&bytes)
        } else {
            log::debug!("reading {} as ASCII STL", path.display());
            parse_ascii(&bytes)
        };
        let mesh = parsed.map_err(|message| IngestError::corrupt(path, message))?;

        log::info!(
            "loaded {} triangles from {}",
            mesh.triangle_count(),
            path.display()
        );
        Ok(mesh)
    }
}

/// Decides whether `bytes` hold a binary STL.
pub fn is_binary(bytes: &[u8]) -> bool {
    if bytes.len() < PREAMBLE_SIZE {
        return false;
    }

    let expected = PREAMBLE_SIZE as u64 + u64::from(face_count(bytes)) * FACE_SIZE as u64;
    if bytes.len() as u64 == expected {
        return true;
    }

    bytes[..HEADER_SIZE]
        .iter()
        .any(|&b| b < 32 && !matches!(b, b'\t' | b'\n' | b'\r'))
}

fn face_count(bytes: &[u8]) -> u32 {
    let mut count = [0u8; 4];
    count.copy_from_slice(&bytes[HEADER_SIZE..PREAMBLE_SIZE]);
    u32::from_le_bytes(count)
}

/// Parses a binary STL.
///
/// Returns a description of the problem when the data is truncated or
/// announces an implausible face count.
pub fn parse_binary(bytes: &[u8]) -> Result<Mesh, String> {
    if bytes.len() < PREAMBLE_SIZE {
        return Err(format!(
            "binary STL header needs {PREAMBLE_SIZE} bytes, got {}",
            bytes.len()
        ));
    }

    let count = face_count(bytes) as usize;
    if count > MAX_TRIANGLES {
        return Err(format!(
            "face count {count} exceeds the limit of {MAX_TRIANGLES}"
        ));
    }

    let body = &bytes[PREAMBLE_SIZE..];
    let available = body.len() / FACE_SIZE;
    if available < count {
        return Err(format!(
            "expected {count} faces but data ends after {available}"
        ));
    }

    let triangles = body
        .chunks_exact(FACE_SIZE)
        .take(count)
        .map(|face| {
            Triangle::new(
                read_vertex(&face[12..24]),
                read_vertex(&face[24..36]),
                read_vertex(&face[36..48]),
            )
        })
        .collect();
    Ok(triangles)
}

fn read_vertex(buf: &[u8]) -> DVec3 {
    let component = |i: usize| {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&buf[i * 4..i * 4 + 4]);
        f64::from(f32::from_le_bytes(raw))
    };
    DVec3::new(component(0), component(1), component(2))
}

/// Parses an ASCII STL.
///
/// Faces with fewer than three vertices are dropped; a vertex line whose
/// coordinates are not numbers is an error.
pub fn parse_ascii(bytes: &[u8]) -> Result<Mesh, String> {
    let text = String::from_utf8_lossy(bytes);
    let mut triangles = Vec::new();
    let mut vertices = [DVec3::ZERO; 3];
    let mut vertex_count = 0;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim().to_lowercase();

        if line.starts_with("facet") {
            vertex_count = 0;
        } else if line.starts_with("vertex") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 4 && vertex_count < 3 {
                vertices[vertex_count] = parse_vertex(&parts[1..4])
                    .map_err(|e| format!("line {}: {e}", index + 1))?;
                vertex_count += 1;
            }
        } else if line.starts_with("endfacet") && vertex_count == 3 {
            triangles.push(Triangle::new(vertices[0], vertices[1], vertices[2]));
        }

        if triangles.len() > MAX_TRIANGLES {
            return Err(format!("more than {MAX_TRIANGLES} faces"));
        }
    }

    Ok(Mesh::from_triangles(triangles))
}

fn parse_vertex(parts: &[&str]) -> Result<DVec3, String> {
    let mut coords = [0.0f64; 3];
    for (coord, part) in coords.iter_mut().zip(parts) {
        let value: f32 = part
            .parse()
            .map_err(|_| format!("invalid vertex coordinate '{part}'"))?;
        *coord = f64::from(value);
    }
    Ok(DVec3::from(coords))
}
