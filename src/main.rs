#![warn(clippy::pedantic)]
use std::{path::PathBuf, process::ExitCode};

use glium::Display;
use glutin::surface::WindowSurface;
use log::{debug, error, info, warn};
use objview::{
    buffer::GpuMesh,
    camera::FreeLookCamera,
    config::{AppConfig, MeshConfig},
    error::AppError,
    frame::{Drawable, Renderer},
    geometry, load,
    input::{Controls, FrameClock, InputAction},
    scene::Instance,
    shader,
    texture::TextureData,
};
use winit::window::CursorGrabMode;

/// Everything the render loop owns.
struct Viewer {
    camera: FreeLookCamera,
    controls: Controls,
    clock: FrameClock,
    renderer: Renderer,
    drawables: Vec<Drawable>,
    speed: f32,
}

impl Viewer {
    fn redraw(&mut self, display: &Display<WindowSurface>) -> Result<(), AppError> {
        let dt = self.clock.tick();
        self.controls.apply(&mut self.camera, self.speed * dt);

        let mut target = display.draw();
        // the frame has to be finished even when a draw call failed
        let drawn = self
            .renderer
            .draw_frame(&mut target, &self.camera, &self.drawables);
        let finished = target.finish();
        drawn.map_err(|e| AppError::Draw(e.to_string()))?;
        finished.map_err(|e| AppError::Draw(e.to_string()))
    }
}

fn load_drawable(
    display: &Display<WindowSurface>,
    mesh: &MeshConfig,
    instances: Vec<Instance>,
) -> Result<Drawable, AppError> {
    let data = load::parse(&mesh.obj)?;
    if let Some((min, max)) = geometry::bounds(&data.positions) {
        debug!("{} spans {min} .. {max}", mesh.obj.display());
    }

    let texture = match &mesh.texture {
        Some(path) => TextureData::load(path)?,
        None => TextureData::white(),
    };

    let drawable = Drawable {
        mesh: GpuMesh::upload(display, &data).map_err(|e| AppError::Upload(e.to_string()))?,
        texture: texture
            .upload(display)
            .map_err(|e| AppError::Upload(e.to_string()))?,
        instances,
    };
    info!(
        "loaded {} ({} triangles, {}x{} texture, {} instances)",
        mesh.obj.display(),
        data.triangle_count(),
        texture.width,
        texture.height,
        drawable.instances.len()
    );
    Ok(drawable)
}

/// A mesh that fails to load is reported and left out; the rest still render.
fn load_drawables(display: &Display<WindowSurface>, config: &AppConfig) -> Vec<Drawable> {
    config
        .meshes
        .iter()
        .zip(config.instances())
        .filter_map(|(mesh, instances)| match load_drawable(display, mesh, instances) {
            Ok(drawable) => Some(drawable),
            Err(e) => {
                error!("skipping {}: {e}", mesh.obj.display());
                None
            }
        })
        .collect()
}

fn run() -> Result<(), AppError> {
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("objview.toml"), PathBuf::from);
    let config = AppConfig::load_or_default(&config_path)?;

    let event_loop = winit::event_loop::EventLoopBuilder::new()
        .build()
        .map_err(|e| AppError::Initialization(e.to_string()))?;
    let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
        .with_title(&config.window.title)
        .with_inner_size(config.window.width, config.window.height)
        .build(&event_loop);

    // keep the pointer inside the window so look updates keep arriving
    window.set_cursor_visible(false);
    if let Err(e) = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
    {
        warn!("cursor grab unavailable: {e}");
    }

    let program = shader::load_program(&display, &config.shaders.vertex, &config.shaders.fragment)?;
    let drawables = load_drawables(&display, &config);
    if drawables.is_empty() {
        warn!("no meshes loaded, only the background will be drawn");
    }

    let mut viewer = Viewer {
        camera: FreeLookCamera::new(config.window.width, config.window.height),
        controls: Controls::default(),
        clock: FrameClock::new(),
        renderer: Renderer::new(program, &config.window, &config.camera),
        drawables,
        speed: config.camera.speed,
    };

    // rendering loop
    event_loop
        .run(move |event, window_target| {
            match event {
                winit::event::Event::WindowEvent { event, .. } => match event {
                    winit::event::WindowEvent::CloseRequested => window_target.exit(),

                    winit::event::WindowEvent::RedrawRequested => {
                        if let Err(e) = viewer.redraw(&display) {
                            error!("{e}");
                            window_target.exit();
                        }
                    }
                    winit::event::WindowEvent::Resized(window_size) => {
                        display.resize(window_size.into());
                    }
                    winit::event::WindowEvent::KeyboardInput { event, .. } => {
                        if viewer.controls.process_input(&event) == InputAction::Exit {
                            window_target.exit();
                        }
                    }
                    #[allow(clippy::cast_possible_truncation)]
                    winit::event::WindowEvent::CursorMoved { position, .. } => {
                        viewer
                            .camera
                            .look_update(position.x as f32, position.y as f32);
                    }
                    _ => (),
                },
                // ensures continuous rendering
                winit::event::Event::AboutToWait => {
                    window.request_redraw();
                }
                _ => (),
            };
        })
        .map_err(|e| AppError::Initialization(e.to_string()))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
