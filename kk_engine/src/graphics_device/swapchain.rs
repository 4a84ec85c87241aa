/// Swap chain description - how the presentation surface is laid out

use bitflags::bitflags;
use raw_window_handle::RawWindowHandle;
use crate::graphics_device::TextureFormat;

/// Number of buffers in the presentation surface
pub const SWAP_CHAIN_BUFFER_COUNT: u32 = 2;

/// Format of the presentation buffers
pub const SWAP_CHAIN_FORMAT: TextureFormat = TextureFormat::R8G8B8A8_UNORM;

/// Refresh rate as a rational number (0/1 lets the driver decide)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshRate {
    pub numerator: u32,
    pub denominator: u32,
}

impl RefreshRate {
    /// Let the driver pick the refresh rate
    pub const DRIVER_DEFAULT: RefreshRate = RefreshRate { numerator: 0, denominator: 1 };
}

/// Order in which scanlines are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanlineOrdering {
    /// Driver default
    Unspecified,
    Progressive,
    UpperFieldFirst,
    LowerFieldFirst,
}

/// How the image is stretched to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Driver default
    Unspecified,
    Centered,
    Stretched,
}

/// Multisampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDesc {
    /// Samples per pixel (1 = no MSAA)
    pub count: u32,
    pub quality: u32,
}

impl SampleDesc {
    /// One sample per pixel
    pub const SINGLE: SampleDesc = SampleDesc { count: 1, quality: 0 };
}

/// Presentation model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapEffect {
    Discard,
    Sequential,
    FlipSequential,
    /// Flip model, back buffer content discarded after present.
    /// Needs at least two buffers.
    FlipDiscard,
}

impl SwapEffect {
    /// Flip-model effects require `buffer_count >= 2`
    pub fn is_flip_model(self) -> bool {
        matches!(self, SwapEffect::FlipSequential | SwapEffect::FlipDiscard)
    }
}

bitflags! {
    /// How swap chain buffers may be used
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferUsage: u32 {
        const SHADER_INPUT = 1 << 0;
        const RENDER_TARGET_OUTPUT = 1 << 1;
    }
}

bitflags! {
    /// Swap chain behavior flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SwapChainFlags: u32 {
        /// Allow switching the display mode when going fullscreen
        const ALLOW_MODE_SWITCH = 1 << 0;
    }
}

/// Full description of a swap chain
#[derive(Debug, Clone, PartialEq)]
pub struct SwapChainDesc {
    /// Buffer width in pixels
    pub width: u32,
    /// Buffer height in pixels
    pub height: u32,
    pub format: TextureFormat,
    pub refresh_rate: RefreshRate,
    pub scanline_ordering: ScanlineOrdering,
    pub scaling: Scaling,
    pub sample_desc: SampleDesc,
    pub usage: BufferUsage,
    pub buffer_count: u32,
    /// Window the swap chain presents into
    pub output_window: RawWindowHandle,
    /// Windowed (true) or exclusive fullscreen (false)
    pub windowed: bool,
    pub swap_effect: SwapEffect,
    pub flags: SwapChainFlags,
}

impl SwapChainDesc {
    /// Windowed, double-buffered flip-discard swap chain in `R8G8B8A8_UNORM`
    ///
    /// Refresh rate, scanline ordering and scaling are left to the driver.
    /// `width` and `height` are passed through unchecked.
    pub fn double_buffered(output_window: RawWindowHandle, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: SWAP_CHAIN_FORMAT,
            refresh_rate: RefreshRate::DRIVER_DEFAULT,
            scanline_ordering: ScanlineOrdering::Unspecified,
            scaling: Scaling::Unspecified,
            sample_desc: SampleDesc::SINGLE,
            usage: BufferUsage::RENDER_TARGET_OUTPUT,
            buffer_count: SWAP_CHAIN_BUFFER_COUNT,
            output_window,
            windowed: true,
            swap_effect: SwapEffect::FlipDiscard,
            flags: SwapChainFlags::ALLOW_MODE_SWITCH,
        }
    }
}
