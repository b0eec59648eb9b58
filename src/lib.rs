#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
//! Free-look OBJ viewer: a pitch-clamped fly camera, a Wavefront OBJ subset
//! loader producing unindexed triangle streams, and the glium plumbing that
//! uploads and draws them.

pub mod buffer;
pub mod camera;
pub mod config;
pub mod conversion;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod load;
pub mod scene;
pub mod shader;
pub mod texture;

pub use camera::FreeLookCamera;
pub use error::{AppError, ObjError};
pub use load::MeshData;
