use glam::Mat4;
use glium::{
    draw_parameters::BackfaceCullingMode,
    uniform,
    uniforms::{MagnifySamplerFilter, MinifySamplerFilter, SamplerWrapFunction},
    DrawError, DrawParameters, Frame, Program, Surface,
};

use crate::{
    buffer::GpuMesh,
    camera::FreeLookCamera,
    config::{CameraConfig, WindowConfig},
    scene::Instance,
};

/// Perspective settings; the aspect ratio comes from the frame each draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Projection {
    #[allow(clippy::cast_precision_loss)]
    pub fn matrix(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width as f32 / height.max(1) as f32;
        Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), aspect, self.z_near, self.z_far)
    }
}

impl From<&CameraConfig> for Projection {
    fn from(camera: &CameraConfig) -> Self {
        Self {
            fov_degrees: camera.fov_degrees,
            z_near: camera.z_near,
            z_far: camera.z_far,
        }
    }
}

/// A mesh uploaded once, drawn at every one of its instances.
pub struct Drawable {
    pub mesh: GpuMesh,
    pub texture: glium::texture::SrgbTexture2d,
    pub instances: Vec<Instance>,
}

pub struct Renderer {
    params: DrawParameters<'static>,
    program: Program,
    projection: Projection,
    clear_color: (f32, f32, f32, f32),
}

impl Renderer {
    pub fn new(program: Program, window: &WindowConfig, camera: &CameraConfig) -> Self {
        let [r, g, b, a] = window.clear_color;
        Self {
            params: DrawParameters {
                depth: glium::Depth {
                    test: glium::DepthTest::IfLess,
                    write: true,
                    ..Default::default()
                },
                backface_culling: BackfaceCullingMode::CullClockwise,
                polygon_mode: glium::PolygonMode::Fill,
                ..Default::default()
            },
            program,
            projection: Projection::from(camera),
            clear_color: (r, g, b, a),
        }
    }

    /// Clears `target` and draws every instance of every drawable as seen from `camera`.
    pub fn draw_frame(
        &self,
        target: &mut Frame,
        camera: &FreeLookCamera,
        drawables: &[Drawable],
    ) -> Result<(), DrawError> {
        target.clear_color_and_depth(self.clear_color, 1.0);

        let (width, height) = target.get_dimensions();
        let view = camera.view_matrix().to_cols_array_2d();
        let projection = self.projection.matrix(width, height).to_cols_array_2d();

        for drawable in drawables.iter().filter(|d| d.mesh.vertex_count() > 0) {
            let indices = drawable.mesh.indices();
            let vertices = (
                &drawable.mesh.positions,
                &drawable.mesh.uvs,
                &drawable.mesh.normals,
            );
            for instance in &drawable.instances {
                let uniforms = uniform! {
                    u_model: instance.model_matrix().to_cols_array_2d(),
                    u_view: view,
                    u_projection: projection,
                    u_texture: drawable
                        .texture
                        .sampled()
                        .wrap_function(SamplerWrapFunction::Repeat)
                        .minify_filter(MinifySamplerFilter::LinearMipmapLinear)
                        .magnify_filter(MagnifySamplerFilter::Linear),
                };
                target.draw(vertices, &indices, &self.program, &uniforms, &self.params)?;
            }
        }
        Ok(())
    }
}
