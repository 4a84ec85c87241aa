/// Render target view description

use crate::graphics_device::TextureFormat;

/// Which part of the resource a render target view addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTargetViewDimension {
    /// Single-sample, non-array 2D texture
    Texture2D {
        /// Mip level to render into
        mip_slice: u32,
    },
}

/// Descriptor for creating a render target view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTargetViewDesc {
    /// View format, must match the underlying buffer
    pub format: TextureFormat,
    pub dimension: RenderTargetViewDimension,
}

impl RenderTargetViewDesc {
    /// View over mip 0 of a plain 2D texture
    pub fn texture_2d(format: TextureFormat) -> Self {
        Self {
            format,
            dimension: RenderTargetViewDimension::Texture2D { mip_slice: 0 },
        }
    }
}
