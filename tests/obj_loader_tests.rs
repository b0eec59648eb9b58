use std::path::{Path, PathBuf};

use glam::Vec3;
use objview::{geometry, load, ObjError};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn triangles(positions: &[f32]) -> Vec<[Vec3; 3]> {
    positions
        .chunks_exact(9)
        .map(|t| {
            [
                Vec3::from_slice(&t[0..3]),
                Vec3::from_slice(&t[3..6]),
                Vec3::from_slice(&t[6..9]),
            ]
        })
        .collect()
}

#[cfg(test)]
mod obj_loader_tests {
    use super::*;

    #[test]
    fn test_triangle_file_lengths_and_values() {
        let mesh = load::parse(fixture("triangle.obj")).unwrap();

        assert_eq!(mesh.positions.len(), 9);
        assert_eq!(mesh.uvs.len(), 6);
        assert_eq!(mesh.normals.len(), 9);
        assert_eq!(
            mesh.positions,
            vec![-0.8, -0.8, 0.0, 0.8, -0.8, 0.0, 0.0, 0.8, 0.0]
        );
        assert_eq!(mesh.uvs, vec![0.0, 0.0, 1.0, 0.0, 0.5, 1.0]);
        assert_eq!(mesh.normals, [0.0, 0.0, 1.0].repeat(3));
    }

    #[test]
    fn test_face_order_is_kept_and_winding_preserved() {
        let mesh = load::parse(fixture("quad.obj")).unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        // first corner of both faces is declaration #2
        assert_eq!(&mesh.positions[0..3], &[-1.0, -1.0, 0.0]);
        assert_eq!(&mesh.positions[9..12], &[-1.0, -1.0, 0.0]);
        assert_eq!(&mesh.uvs[4..6], &[1.0, 1.0]);

        for tri in triangles(&mesh.positions) {
            assert!(geometry::winding(&tri) > 0.0);
        }
    }

    #[test]
    fn test_bounds_of_loaded_mesh() {
        let mesh = load::parse(fixture("quad.obj")).unwrap();
        let (min, max) = geometry::bounds(&mesh.positions).unwrap();
        assert_eq!(min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_polygon_faces_are_rejected() {
        let err = load::parse(fixture("quad_faces.obj")).unwrap_err();
        match err {
            ObjError::MalformedFace { line, text } => {
                assert_eq!(line, 7);
                assert_eq!(text, "f 2/1/1 3/1/1 1/1/1 4/1/1");
            }
            other => panic!("expected MalformedFace, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load::parse(fixture("does_not_exist.obj")).unwrap_err();
        assert!(matches!(err, ObjError::Io(_)));
    }

    #[test]
    fn test_reader_and_file_agree() {
        let text = std::fs::read_to_string(fixture("quad.obj")).unwrap();
        assert_eq!(
            load::parse_reader(text.as_bytes()).unwrap(),
            load::parse(fixture("quad.obj")).unwrap()
        );
    }
}
