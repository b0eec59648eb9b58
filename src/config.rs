//! Startup configuration: window, camera, shader and asset settings, read
//! from a TOML file. Every section falls back to its defaults, so a file only
//! needs the keys it changes.

use std::path::{Path, PathBuf};

use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    scene::{GridLayout, Instance},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub shaders: ShaderPaths,
    pub grid: GridConfig,
    pub meshes: Vec<MeshConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            shaders: ShaderPaths::default(),
            grid: GridConfig::default(),
            meshes: vec![MeshConfig::default()],
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`AppConfig::load`], but a missing file means built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("{} not found, using default config", path.display());
            Ok(Self::default())
        }
    }

    /// Instances for each entry of `meshes`, in order. Grid slots are handed
    /// out across all meshes, so a mesh that later fails to load leaves a gap
    /// instead of shifting the others.
    pub fn instances(&self) -> Vec<Vec<Instance>> {
        let grid = GridLayout::from(&self.grid);
        let mut slot = 0;
        self.meshes
            .iter()
            .map(|mesh| {
                let start = slot;
                slot += mesh.instances;
                (start..slot)
                    .map(|i| Instance {
                        offset: grid.placement(i),
                        rotation_degrees: mesh.rotation_degrees,
                        scale: mesh.scale,
                    })
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub clear_color: [f32; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "CL-3".to_owned(),
            clear_color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// world units per second
    pub speed: f32,
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            fov_degrees: 45.0,
            z_near: 0.1,
            z_far: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("shaders/vert.glsl"),
            fragment: PathBuf::from("shaders/frag.glsl"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub spacing: f32,
    pub origin: [f32; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            spacing: 1.0,
            origin: [0.0; 3],
        }
    }
}

impl From<&GridConfig> for GridLayout {
    fn from(grid: &GridConfig) -> Self {
        Self {
            columns: grid.columns,
            spacing: grid.spacing,
            origin: Vec3::from(grid.origin),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeshConfig {
    pub obj: PathBuf,
    /// drawn untextured (white) when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
    #[serde(default = "default_instances")]
    pub instances: usize,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub rotation_degrees: f32,
}

fn default_instances() -> usize {
    1
}

fn default_scale() -> f32 {
    0.05
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            obj: PathBuf::from("Models/BenchTextured.obj"),
            texture: Some(PathBuf::from("Models/textures/combinedBenchTexture.png")),
            instances: default_instances(),
            scale: default_scale(),
            rotation_degrees: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert_eq!(AppConfig::from_toml_str(&toml_str).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            title = "bench grid"

            [camera]
            speed = 2.0

            [[meshes]]
            obj = "Models/cube.obj"
            instances = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "bench grid");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.camera.speed, 2.0);
        assert_eq!(config.camera.fov_degrees, 45.0);
        assert_eq!(config.shaders, ShaderPaths::default());
        assert_eq!(config.meshes.len(), 1);
        assert_eq!(config.meshes[0].instances, 4);
        assert_eq!(config.meshes[0].scale, 0.05);
        assert_eq!(config.meshes[0].texture, None);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        assert!(matches!(
            AppConfig::from_toml_str("[window]\nwidth = \"wide\""),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn grid_slots_continue_across_meshes() {
        let config = AppConfig::from_toml_str(
            r#"
            [grid]
            columns = 2
            spacing = 3.0

            [[meshes]]
            obj = "a.obj"
            instances = 3

            [[meshes]]
            obj = "b.obj"
            instances = 1
            rotation_degrees = 45.0
            "#,
        )
        .unwrap();

        let instances = config.instances();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].len(), 3);
        assert_eq!(instances[0][2].offset, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(instances[1][0].offset, Vec3::new(3.0, 0.0, -3.0));
        assert_eq!(instances[1][0].rotation_degrees, 45.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
