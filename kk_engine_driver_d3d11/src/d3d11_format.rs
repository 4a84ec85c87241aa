/// Conversions from engine descriptors to Direct3D 11 / DXGI structures

use kk_engine::kk::graphics::{
    BufferUsage, DeviceCreationFlags, FeatureLevel, RenderTargetViewDesc,
    RenderTargetViewDimension, Scaling, ScanlineOrdering, SwapChainFlags, SwapEffect,
    TextureFormat, Viewport,
};
use windows::Win32::Graphics::Direct3D::{
    D3D_FEATURE_LEVEL, D3D_FEATURE_LEVEL_10_0, D3D_FEATURE_LEVEL_10_1, D3D_FEATURE_LEVEL_11_0,
    D3D_FEATURE_LEVEL_11_1, D3D_FEATURE_LEVEL_9_1, D3D_FEATURE_LEVEL_9_2, D3D_FEATURE_LEVEL_9_3,
};
use windows::Win32::Graphics::Direct3D11::{
    D3D11_CREATE_DEVICE_DEBUG, D3D11_CREATE_DEVICE_FLAG, D3D11_RENDER_TARGET_VIEW_DESC,
    D3D11_RENDER_TARGET_VIEW_DESC_0, D3D11_RTV_DIMENSION_TEXTURE2D, D3D11_TEX2D_RTV,
    D3D11_VIEWPORT,
};
use windows::Win32::Graphics::Dxgi::Common::{
    DXGI_FORMAT, DXGI_FORMAT_B8G8R8A8_UNORM, DXGI_FORMAT_B8G8R8A8_UNORM_SRGB,
    DXGI_FORMAT_R8G8B8A8_UNORM, DXGI_FORMAT_R8G8B8A8_UNORM_SRGB, DXGI_MODE_SCALING,
    DXGI_MODE_SCALING_CENTERED, DXGI_MODE_SCALING_STRETCHED, DXGI_MODE_SCALING_UNSPECIFIED,
    DXGI_MODE_SCANLINE_ORDER, DXGI_MODE_SCANLINE_ORDER_LOWER_FIELD_FIRST,
    DXGI_MODE_SCANLINE_ORDER_PROGRESSIVE, DXGI_MODE_SCANLINE_ORDER_UNSPECIFIED,
    DXGI_MODE_SCANLINE_ORDER_UPPER_FIELD_FIRST,
};
use windows::Win32::Graphics::Dxgi::{
    DXGI_SWAP_CHAIN_FLAG_ALLOW_MODE_SWITCH, DXGI_SWAP_EFFECT, DXGI_SWAP_EFFECT_DISCARD,
    DXGI_SWAP_EFFECT_FLIP_DISCARD, DXGI_SWAP_EFFECT_FLIP_SEQUENTIAL, DXGI_SWAP_EFFECT_SEQUENTIAL,
    DXGI_USAGE, DXGI_USAGE_RENDER_TARGET_OUTPUT, DXGI_USAGE_SHADER_INPUT,
};

pub(crate) fn texture_format_to_dxgi(format: TextureFormat) -> DXGI_FORMAT {
    match format {
        TextureFormat::R8G8B8A8_UNORM => DXGI_FORMAT_R8G8B8A8_UNORM,
        TextureFormat::R8G8B8A8_SRGB => DXGI_FORMAT_R8G8B8A8_UNORM_SRGB,
        TextureFormat::B8G8R8A8_UNORM => DXGI_FORMAT_B8G8R8A8_UNORM,
        TextureFormat::B8G8R8A8_SRGB => DXGI_FORMAT_B8G8R8A8_UNORM_SRGB,
    }
}

pub(crate) fn feature_level_to_d3d(level: FeatureLevel) -> D3D_FEATURE_LEVEL {
    match level {
        FeatureLevel::Level9_1 => D3D_FEATURE_LEVEL_9_1,
        FeatureLevel::Level9_2 => D3D_FEATURE_LEVEL_9_2,
        FeatureLevel::Level9_3 => D3D_FEATURE_LEVEL_9_3,
        FeatureLevel::Level10_0 => D3D_FEATURE_LEVEL_10_0,
        FeatureLevel::Level10_1 => D3D_FEATURE_LEVEL_10_1,
        FeatureLevel::Level11_0 => D3D_FEATURE_LEVEL_11_0,
        FeatureLevel::Level11_1 => D3D_FEATURE_LEVEL_11_1,
    }
}

/// `None` for levels outside the 9_1..=11_1 range
pub(crate) fn feature_level_from_d3d(level: D3D_FEATURE_LEVEL) -> Option<FeatureLevel> {
    match level {
        D3D_FEATURE_LEVEL_9_1 => Some(FeatureLevel::Level9_1),
        D3D_FEATURE_LEVEL_9_2 => Some(FeatureLevel::Level9_2),
        D3D_FEATURE_LEVEL_9_3 => Some(FeatureLevel::Level9_3),
        D3D_FEATURE_LEVEL_10_0 => Some(FeatureLevel::Level10_0),
        D3D_FEATURE_LEVEL_10_1 => Some(FeatureLevel::Level10_1),
        D3D_FEATURE_LEVEL_11_0 => Some(FeatureLevel::Level11_0),
        D3D_FEATURE_LEVEL_11_1 => Some(FeatureLevel::Level11_1),
        _ => None,
    }
}

pub(crate) fn device_flags_to_d3d11(flags: DeviceCreationFlags) -> D3D11_CREATE_DEVICE_FLAG {
    let mut d3d_flags = D3D11_CREATE_DEVICE_FLAG::default();
    if flags.contains(DeviceCreationFlags::DEBUG) {
        d3d_flags |= D3D11_CREATE_DEVICE_DEBUG;
    }
    d3d_flags
}

pub(crate) fn scanline_ordering_to_dxgi(ordering: ScanlineOrdering) -> DXGI_MODE_SCANLINE_ORDER {
    match ordering {
        ScanlineOrdering::Unspecified => DXGI_MODE_SCANLINE_ORDER_UNSPECIFIED,
        ScanlineOrdering::Progressive => DXGI_MODE_SCANLINE_ORDER_PROGRESSIVE,
        ScanlineOrdering::UpperFieldFirst => DXGI_MODE_SCANLINE_ORDER_UPPER_FIELD_FIRST,
        ScanlineOrdering::LowerFieldFirst => DXGI_MODE_SCANLINE_ORDER_LOWER_FIELD_FIRST,
    }
}

pub(crate) fn scaling_to_dxgi(scaling: Scaling) -> DXGI_MODE_SCALING {
    match scaling {
        Scaling::Unspecified => DXGI_MODE_SCALING_UNSPECIFIED,
        Scaling::Centered => DXGI_MODE_SCALING_CENTERED,
        Scaling::Stretched => DXGI_MODE_SCALING_STRETCHED,
    }
}

pub(crate) fn swap_effect_to_dxgi(effect: SwapEffect) -> DXGI_SWAP_EFFECT {
    match effect {
        SwapEffect::Discard => DXGI_SWAP_EFFECT_DISCARD,
        SwapEffect::Sequential => DXGI_SWAP_EFFECT_SEQUENTIAL,
        SwapEffect::FlipSequential => DXGI_SWAP_EFFECT_FLIP_SEQUENTIAL,
        SwapEffect::FlipDiscard => DXGI_SWAP_EFFECT_FLIP_DISCARD,
    }
}

pub(crate) fn buffer_usage_to_dxgi(usage: BufferUsage) -> DXGI_USAGE {
    let mut dxgi_usage = DXGI_USAGE(0);
    if usage.contains(BufferUsage::SHADER_INPUT) {
        dxgi_usage |= DXGI_USAGE_SHADER_INPUT;
    }
    if usage.contains(BufferUsage::RENDER_TARGET_OUTPUT) {
        dxgi_usage |= DXGI_USAGE_RENDER_TARGET_OUTPUT;
    }
    dxgi_usage
}

/// `DXGI_SWAP_CHAIN_DESC::Flags` is a plain `u32`
pub(crate) fn swap_chain_flags_to_dxgi(flags: SwapChainFlags) -> u32 {
    let mut dxgi_flags = 0u32;
    if flags.contains(SwapChainFlags::ALLOW_MODE_SWITCH) {
        dxgi_flags |= DXGI_SWAP_CHAIN_FLAG_ALLOW_MODE_SWITCH.0 as u32;
    }
    dxgi_flags
}

pub(crate) fn render_target_view_desc_to_d3d11(
    desc: &RenderTargetViewDesc,
) -> D3D11_RENDER_TARGET_VIEW_DESC {
    match desc.dimension {
        RenderTargetViewDimension::Texture2D { mip_slice } => D3D11_RENDER_TARGET_VIEW_DESC {
            Format: texture_format_to_dxgi(desc.format),
            ViewDimension: D3D11_RTV_DIMENSION_TEXTURE2D,
            Anonymous: D3D11_RENDER_TARGET_VIEW_DESC_0 {
                Texture2D: D3D11_TEX2D_RTV { MipSlice: mip_slice },
            },
        },
    }
}

pub(crate) fn viewport_to_d3d11(viewport: &Viewport) -> D3D11_VIEWPORT {
    D3D11_VIEWPORT {
        TopLeftX: viewport.x,
        TopLeftY: viewport.y,
        Width: viewport.width,
        Height: viewport.height,
        MinDepth: viewport.min_depth,
        MaxDepth: viewport.max_depth,
    }
}

#[cfg(test)]
#[path = "d3d11_format_tests.rs"]
mod tests;
