/// GraphicsDriver trait - the platform calls needed to bring a device up

use crate::error::Result;
use crate::graphics_device::{
    DeviceCreationFlags, FeatureLevel, RenderTargetViewDesc, SwapChainDesc, Viewport,
};

/// Parameters for logical device creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDesc<'a> {
    /// Creation flags (debug layer, ...)
    pub flags: DeviceCreationFlags,
    /// Acceptable feature levels, most capable first
    pub feature_levels: &'a [FeatureLevel],
}

/// Platform graphics driver
///
/// Each creation call returns an owned handle that releases its platform
/// object when dropped. Implemented by `D3d11Driver` for Direct3D 11 and by
/// the mock driver used in tests.
pub trait GraphicsDriver {
    /// Adapter enumeration / swap chain factory
    type Factory;
    /// Logical GPU device
    type Device;
    /// Immediate command-submission context
    type DeviceContext;
    /// Presentation surface bound to a window
    type SwapChain;
    /// 2D texture (swap chain back buffer)
    type Texture;
    /// Writable color view over a texture
    type RenderTargetView;

    /// Create the adapter enumeration factory
    fn create_factory(&self) -> Result<Self::Factory>;

    /// Create the logical device and its immediate context
    ///
    /// The driver picks the first entry of `desc.feature_levels` the hardware supports
    /// and returns it alongside the device and context.
    fn create_device(
        &self,
        desc: &DeviceDesc<'_>,
    ) -> Result<(Self::Device, Self::DeviceContext, FeatureLevel)>;

    /// Create a swap chain presenting into `desc.output_window`
    fn create_swap_chain(
        &self,
        factory: &Self::Factory,
        device: &Self::Device,
        desc: &SwapChainDesc,
    ) -> Result<Self::SwapChain>;

    /// Get back buffer `index` of a swap chain
    fn back_buffer(&self, swap_chain: &Self::SwapChain, index: u32) -> Result<Self::Texture>;

    /// Create a render target view over a texture
    fn create_render_target_view(
        &self,
        device: &Self::Device,
        texture: &Self::Texture,
        desc: &RenderTargetViewDesc,
    ) -> Result<Self::RenderTargetView>;

    /// Bind a single render target as output, without depth/stencil
    fn set_render_target(&self, context: &Self::DeviceContext, view: &Self::RenderTargetView);

    /// Set the single active viewport
    fn set_viewport(&self, context: &Self::DeviceContext, viewport: &Viewport);
}
