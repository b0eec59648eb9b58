use glium::{
    implement_vertex,
    index::{NoIndices, PrimitiveType},
    vertex::BufferCreationError,
    Display, VertexBuffer,
};
use glutin::surface::WindowSurface;

use crate::load::MeshData;

#[derive(Copy, Clone, Debug, Default)]
pub struct Position {
    pub position: [f32; 3],
}
implement_vertex!(Position, position);

#[derive(Copy, Clone, Debug, Default)]
pub struct TexCoord {
    pub tex_coords: [f32; 2],
}
implement_vertex!(TexCoord, tex_coords);

#[derive(Copy, Clone, Debug, Default)]
pub struct Normal {
    pub normal: [f32; 3],
}
implement_vertex!(Normal, normal);

/// One vertex buffer per attribute stream; drawn as an unindexed triangle list.
pub struct GpuMesh {
    pub positions: VertexBuffer<Position>,
    pub uvs: VertexBuffer<TexCoord>,
    pub normals: VertexBuffer<Normal>,
    vertex_count: usize,
}

impl GpuMesh {
    pub fn upload(
        display: &Display<WindowSurface>,
        mesh: &MeshData,
    ) -> Result<Self, BufferCreationError> {
        Ok(Self {
            positions: VertexBuffer::new(display, &positions(mesh))?,
            uvs: VertexBuffer::new(display, &tex_coords(mesh))?,
            normals: VertexBuffer::new(display, &normals(mesh))?,
            vertex_count: mesh.vertex_count(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn indices(&self) -> NoIndices {
        NoIndices(PrimitiveType::TrianglesList)
    }
}

fn positions(mesh: &MeshData) -> Vec<Position> {
    mesh.positions
        .chunks_exact(MeshData::POSITION_STRIDE)
        .map(|c| Position {
            position: [c[0], c[1], c[2]],
        })
        .collect()
}

fn tex_coords(mesh: &MeshData) -> Vec<TexCoord> {
    mesh.uvs
        .chunks_exact(MeshData::UV_STRIDE)
        .map(|c| TexCoord {
            tex_coords: [c[0], c[1]],
        })
        .collect()
}

fn normals(mesh: &MeshData) -> Vec<Normal> {
    mesh.normals
        .chunks_exact(MeshData::NORMAL_STRIDE)
        .map(|c| Normal {
            normal: [c[0], c[1], c[2]],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_split_by_stride() {
        let mesh = MeshData {
            positions: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            uvs: vec![0.1, 0.2, 0.3, 0.4],
            normals: vec![0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        };
        let p = positions(&mesh);
        let t = tex_coords(&mesh);
        let n = normals(&mesh);
        assert_eq!(p.len(), 2);
        assert_eq!(t.len(), 2);
        assert_eq!(n.len(), 2);
        assert_eq!(p[1].position, [4.0, 5.0, 6.0]);
        assert_eq!(t[1].tex_coords, [0.3, 0.4]);
        assert_eq!(n[0].normal, [0.0, 1.0, 0.0]);
    }
}
