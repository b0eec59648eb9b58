use std::path::Path;

use glium::{program::ProgramCreationError, Display, Program};
use glutin::surface::WindowSurface;
use log::info;

use crate::error::ShaderError;

impl From<ProgramCreationError> for ShaderError {
    fn from(e: ProgramCreationError) -> Self {
        match e {
            ProgramCreationError::CompilationError(log, stage) => Self::Compile {
                stage: format!("{stage:?}").to_lowercase(),
                log,
            },
            ProgramCreationError::LinkingError(log) => Self::Link(log),
            other => Self::Other(other.to_string()),
        }
    }
}

/// Read a GLSL file as-is
pub fn load_source(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Compile and link a vertex/fragment pair. The driver's log comes back in the error.
pub fn build_program(
    display: &Display<WindowSurface>,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<Program, ShaderError> {
    Ok(Program::from_source(display, vertex_src, fragment_src, None)?)
}

pub fn load_program(
    display: &Display<WindowSurface>,
    vertex_path: &Path,
    fragment_path: &Path,
) -> Result<Program, ShaderError> {
    let vertex_src = load_source(vertex_path)?;
    let fragment_src = load_source(fragment_path)?;
    let program = build_program(display, &vertex_src, &fragment_src)?;
    info!(
        "built shader program from {} and {}",
        vertex_path.display(),
        fragment_path.display()
    );
    Ok(program)
}
