use std::path::Path;

use objview::{config::AppConfig, load};

#[cfg(test)]
mod asset_tests {
    use super::*;

    #[test]
    fn test_shipped_config_loads_the_cube_grid() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let config = AppConfig::load(&root.join("objview.toml")).unwrap();

        assert_eq!(config.meshes.len(), 1);
        assert_eq!(config.instances()[0].len(), 9);

        let mesh = load::parse(root.join(&config.meshes[0].obj)).unwrap();
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.uvs.len(), 2 * mesh.vertex_count());
        assert_eq!(mesh.normals.len(), 3 * mesh.vertex_count());
    }

    #[test]
    fn test_cube_faces_point_outwards() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let mesh = load::parse(root.join("assets/cube.obj")).unwrap();

        for (tri, normals) in mesh.positions.chunks_exact(9).zip(mesh.normals.chunks_exact(9)) {
            let a = glam::Vec3::from_slice(&tri[0..3]);
            let b = glam::Vec3::from_slice(&tri[3..6]);
            let c = glam::Vec3::from_slice(&tri[6..9]);
            let face_normal = (b - a).cross(c - a);
            assert!(face_normal.dot(glam::Vec3::from_slice(&normals[0..3])) > 0.0);
        }
    }
}
