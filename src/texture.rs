use std::path::Path;

use glium::{
    texture::{MipmapsOption, RawImage2d, SrgbTexture2d, TextureCreationError},
    Display,
};
use glutin::surface::WindowSurface;

use crate::error::TextureError;

/// Decoded RGB8 pixels, bottom row first (the way OpenGL and OBJ uvs expect them).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl TextureData {
    pub fn load(path: &Path) -> Result<Self, TextureError> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, TextureError> {
        let image = image::load_from_memory(bytes)?.flipv().to_rgb8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            bytes: image.into_raw(),
        })
    }

    /// 1x1 white, for meshes without a texture
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            bytes: vec![255; 3],
        }
    }

    pub fn upload(
        &self,
        display: &Display<WindowSurface>,
    ) -> Result<SrgbTexture2d, TextureCreationError> {
        let raw = RawImage2d::from_raw_rgb(self.bytes.clone(), (self.width, self.height));
        SrgbTexture2d::with_mipmaps(display, raw, MipmapsOption::AutoGeneratedMipmaps)
    }
}
