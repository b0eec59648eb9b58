use glam::{Mat4, Vec3};

/// One placement of a mesh in the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub offset: Vec3,
    pub rotation_degrees: f32,
    pub scale: f32,
}

impl Instance {
    /// translate, then turn about +Y, then scale uniformly
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset)
            * Mat4::from_rotation_y(self.rotation_degrees.to_radians())
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Lays instances out row by row on the xz plane, rows running away from the
/// camera along -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub spacing: f32,
    pub origin: Vec3,
}

impl GridLayout {
    #[allow(clippy::cast_precision_loss)]
    pub fn placement(&self, index: usize) -> Vec3 {
        let columns = self.columns.max(1);
        let (row, col) = (index / columns, index % columns);
        self.origin + Vec3::new(col as f32 * self.spacing, 0.0, -(row as f32) * self.spacing)
    }

    pub fn placements(&self, count: usize) -> Vec<Vec3> {
        (0..count).map(|i| self.placement(i)).collect()
    }
}
