//! Error types for asset loading and viewer startup.

use std::{fmt, io, path::PathBuf};

/// Vertex attribute a face index points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Position => "position",
            Self::TexCoord => "texture coordinate",
            Self::Normal => "normal",
        })
    }
}

/// Failure to read a Wavefront OBJ file. Any of these aborts the whole parse.
#[derive(Debug)]
pub enum ObjError {
    Io(io::Error),
    /// `f` line that is not exactly three `a/b/c` corners
    MalformedFace { line: usize, text: String },
    /// `v`, `vt` or `vn` line with missing or unparsable components
    MalformedRecord { line: usize, kind: &'static str },
    /// 1-based face index that is zero or past the end of its source array
    IndexOutOfRange {
        attribute: Attribute,
        index: u32,
        len: usize,
    },
}

impl fmt::Display for ObjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedFace { line, text } => {
                write!(f, "line {line}: malformed face `{text}`, expected `f a/b/c a/b/c a/b/c`")
            }
            Self::MalformedRecord { line, kind } => {
                write!(f, "line {line}: malformed `{kind}` record")
            }
            Self::IndexOutOfRange {
                attribute,
                index,
                len,
            } => write!(f, "{attribute} index {index} out of range (1..={len})"),
        }
    }
}

impl std::error::Error for ObjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ObjError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[derive(Debug)]
pub enum TextureError {
    Io(io::Error),
    Decode(image::ImageError),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for TextureError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e)
    }
}

/// Shader build failure, carrying the driver's log where there is one.
#[derive(Debug)]
pub enum ShaderError {
    Io { path: PathBuf, source: io::Error },
    Compile { stage: String, log: String },
    Link(String),
    Other(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read shader {}: {source}", path.display())
            }
            Self::Compile { stage, log } => write!(f, "{stage} shader failed to compile:\n{log}"),
            Self::Link(log) => write!(f, "program failed to link:\n{log}"),
            Self::Other(msg) => write!(f, "shader error: {msg}"),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors surfaced by the viewer binary.
#[derive(Debug)]
pub enum AppError {
    /// window, context or event loop could not be created
    Initialization(String),
    Config(String),
    Io(io::Error),
    Obj(ObjError),
    Texture(TextureError),
    Shader(ShaderError),
    Upload(String),
    Draw(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization(msg) => write!(f, "initialization failed: {msg}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Obj(e) => write!(f, "OBJ error: {e}"),
            Self::Texture(e) => write!(f, "texture error: {e}"),
            Self::Shader(e) => write!(f, "{e}"),
            Self::Upload(msg) => write!(f, "GPU upload failed: {msg}"),
            Self::Draw(msg) => write!(f, "draw failed: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Obj(e) => Some(e),
            Self::Texture(e) => Some(e),
            Self::Shader(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ObjError> for AppError {
    fn from(e: ObjError) -> Self {
        Self::Obj(e)
    }
}

impl From<TextureError> for AppError {
    fn from(e: TextureError) -> Self {
        Self::Texture(e)
    }
}

impl From<ShaderError> for AppError {
    fn from(e: ShaderError) -> Self {
        Self::Shader(e)
    }
}
