//! # STL Loader Tests

use super::*;
use std::io::Write;

/// Encodes triangles as a binary STL with the given header text.
fn binary_stl(header: &[u8], triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut bytes = vec![b' '; HEADER_SIZE];
    bytes[..header.len()].copy_from_slice(header);
    bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for triangle in triangles {
        bytes.extend_from_slice(&[0u8; 12]);
        for vertex in triangle {
            for c in vertex {
                bytes.extend_from_slice(&c.to_le_bytes());
            }
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());
    }
    bytes
}

const UNIT: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

const ASCII_UNIT: &str = "solid unit
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid unit
";

#[test]
fn test_binary_detected_by_exact_length() {
    // Header starts with "solid", like many exporters write
    let bytes = binary_stl(b"solid exported", &[UNIT, UNIT]);
    assert_eq!(bytes.len(), 84 + 2 * 50);
    assert!(is_binary(&bytes));
}

#[test]
fn test_binary_detected_by_control_chars() {
    let mut bytes = binary_stl(b"\x00\x01header", &[UNIT]);
    // Trailing garbage breaks the length rule
    bytes.extend_from_slice(b"xx");
    assert!(is_binary(&bytes));
}

#[test]
fn test_ascii_detected() {
    assert!(!is_binary(ASCII_UNIT.as_bytes()));
    assert!(!is_binary(b"solid x\nendsolid x\n"));
}

#[test]
fn test_short_file_is_ascii() {
    assert!(!is_binary(&[0u8; 40]));
}

#[test]
fn test_parse_binary_vertices() {
    let bytes = binary_stl(b"", &[UNIT, [[2.5, -1.0, 3.0], [4.0, 4.0, 4.0], [0.5, 0.25, -8.0]]]);
    let mesh = parse_binary(&bytes).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.triangles()[0].v1, DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(mesh.triangles()[1].v0, DVec3::new(2.5, -1.0, 3.0));
    assert_eq!(mesh.triangles()[1].v2, DVec3::new(0.5, 0.25, -8.0));
}

#[test]
fn test_parse_binary_truncated() {
    let mut bytes = binary_stl(b"\x01", &[UNIT, UNIT]);
    bytes.truncate(84 + 60);
    let err = parse_binary(&bytes).unwrap_err();
    assert!(err.contains("expected 2 faces"), "{err}");
}

#[test]
fn test_parse_binary_rejects_huge_count() {
    let mut bytes = binary_stl(b"\x01", &[]);
    bytes[80..84].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(parse_binary(&bytes).unwrap_err().contains("exceeds"));
}

#[test]
fn test_parse_ascii_unit() {
    let mesh = parse_ascii(ASCII_UNIT.as_bytes()).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.triangles()[0].v2, DVec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_parse_ascii_is_case_insensitive() {
    let text = "SOLID x\nFACET NORMAL 0 0 1\nOUTER LOOP\n\tVERTEX 1 2 3\n VERTEX 4 5 6\nVertex 7 8 9\nENDLOOP\nENDFACET\nENDSOLID\n";
    let mesh = parse_ascii(text.as_bytes()).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.triangles()[0].v2, DVec3::new(7.0, 8.0, 9.0));
}

#[test]
fn test_parse_ascii_drops_incomplete_facets() {
    let text = "solid x
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 0 0
endloop
endfacet
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 2 0 0
vertex 0 2 0
vertex 9 9 9
endloop
endfacet
endsolid x
";
    let mesh = parse_ascii(text.as_bytes()).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
    // Extra vertices past the third are ignored
    assert_eq!(mesh.triangles()[0].v2, DVec3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_parse_ascii_bad_coordinate() {
    let text = ASCII_UNIT.replace("vertex 1 0 0", "vertex 1 zero 0");
    let err = parse_ascii(text.as_bytes()).unwrap_err();
    assert!(err.contains("line 5"), "{err}");
    assert!(err.contains("'zero'"), "{err}");
}

#[test]
fn test_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let ascii = dir.path().join("unit.stl");
    fs::write(&ascii, ASCII_UNIT).unwrap();
    let binary = dir.path().join("unit_bin.stl");
    let mut file = fs::File::create(&binary).unwrap();
    file.write_all(&binary_stl(b"solid binary", &[UNIT])).unwrap();
    drop(file);

    let loader = StlLoader::new();
    let from_ascii = loader.load_triangles(&ascii).unwrap();
    let from_binary = loader.load_triangles(&binary).unwrap();
    assert_eq!(from_ascii, from_binary);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = StlLoader::new()
        .load_triangles(&dir.path().join("nope.stl"))
        .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn test_load_corrupt_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.stl");
    let mut bytes = binary_stl(b"\x02", &[UNIT, UNIT, UNIT]);
    bytes.truncate(84 + 75);
    fs::write(&path, bytes).unwrap();

    match StlLoader::new().load_triangles(&path) {
        Err(IngestError::Corrupt { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected corrupt error, got {other:?}"),
    }
}
