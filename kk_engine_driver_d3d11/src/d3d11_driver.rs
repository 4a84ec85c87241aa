/// Direct3D 11 implementation of `GraphicsDriver`
///
/// Every handle is a COM interface pointer; dropping it calls `Release`.

use std::ffi::c_void;

use kk_engine::kk::graphics::{
    DeviceDesc, FeatureLevel, Graphics, GraphicsDriver, RenderTargetViewDesc, SwapChainDesc,
    Viewport,
};
use kk_engine::kk::{Error, Result};
use kk_engine::{engine_debug, engine_err, engine_trace, engine_warn};
use raw_window_handle::RawWindowHandle;
use windows::Win32::Foundation::{E_OUTOFMEMORY, HMODULE, HWND};
use windows::Win32::Graphics::Direct3D::{D3D_DRIVER_TYPE_HARDWARE, D3D_FEATURE_LEVEL};
use windows::Win32::Graphics::Direct3D11::{
    D3D11CreateDevice, ID3D11DepthStencilView, ID3D11Device, ID3D11DeviceContext,
    ID3D11RenderTargetView, ID3D11Texture2D, D3D11_SDK_VERSION,
};
use windows::Win32::Graphics::Dxgi::Common::{DXGI_MODE_DESC, DXGI_RATIONAL, DXGI_SAMPLE_DESC};
use windows::Win32::Graphics::Dxgi::{
    CreateDXGIFactory1, IDXGIAdapter, IDXGIFactory1, IDXGISwapChain, DXGI_SWAP_CHAIN_DESC,
};

use crate::d3d11_format::{
    buffer_usage_to_dxgi, device_flags_to_d3d11, feature_level_from_d3d, feature_level_to_d3d,
    render_target_view_desc_to_d3d11, scaling_to_dxgi, scanline_ordering_to_dxgi,
    swap_chain_flags_to_dxgi, swap_effect_to_dxgi, texture_format_to_dxgi, viewport_to_d3d11,
};

const SOURCE: &str = "kk::d3d11";

/// `Graphics` running on the hardware Direct3D 11 driver
pub type D3d11Graphics = Graphics<D3d11Driver>;

/// Hardware Direct3D 11 driver
///
/// Stateless: all created objects are returned to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct D3d11Driver;

impl D3d11Driver {
    pub fn new() -> Self {
        Self
    }
}

impl GraphicsDriver for D3d11Driver {
    type Factory = IDXGIFactory1;
    type Device = ID3D11Device;
    type DeviceContext = ID3D11DeviceContext;
    type SwapChain = IDXGISwapChain;
    type Texture = ID3D11Texture2D;
    type RenderTargetView = ID3D11RenderTargetView;

    fn create_factory(&self) -> Result<IDXGIFactory1> {
        let factory: IDXGIFactory1 =
            unsafe { CreateDXGIFactory1() }.map_err(|e| platform_error("CreateDXGIFactory1", e))?;

        log_adapters(&factory);

        Ok(factory)
    }

    fn create_device(
        &self,
        desc: &DeviceDesc<'_>,
    ) -> Result<(ID3D11Device, ID3D11DeviceContext, FeatureLevel)> {
        let levels: Vec<D3D_FEATURE_LEVEL> = desc
            .feature_levels
            .iter()
            .map(|level| feature_level_to_d3d(*level))
            .collect();

        let mut device: Option<ID3D11Device> = None;
        let mut context: Option<ID3D11DeviceContext> = None;
        let mut chosen = D3D_FEATURE_LEVEL::default();

        unsafe {
            D3D11CreateDevice(
                None::<&IDXGIAdapter>,
                D3D_DRIVER_TYPE_HARDWARE,
                HMODULE::default(),
                device_flags_to_d3d11(desc.flags),
                Some(&levels),
                D3D11_SDK_VERSION,
                Some(&mut device),
                Some(&mut chosen),
                Some(&mut context),
            )
        }
        .map_err(|e| platform_error("D3D11CreateDevice", e))?;

        let device = device.ok_or_else(|| engine_err!(SOURCE, "D3D11CreateDevice returned no device"))?;
        let context = context
            .ok_or_else(|| engine_err!(SOURCE, "D3D11CreateDevice returned no immediate context"))?;
        let level = feature_level_from_d3d(chosen).ok_or_else(|| {
            engine_err!(SOURCE, "D3D11CreateDevice returned unknown feature level 0x{:x}", chosen.0)
        })?;

        engine_trace!(SOURCE, "D3D11 device created (flags {:?})", desc.flags);

        Ok((device, context, level))
    }

    fn create_swap_chain(
        &self,
        factory: &IDXGIFactory1,
        device: &ID3D11Device,
        desc: &SwapChainDesc,
    ) -> Result<IDXGISwapChain> {
        let hwnd = match desc.output_window {
            RawWindowHandle::Win32(handle) => HWND(handle.hwnd.get() as *mut c_void),
            other => {
                return Err(Error::InvalidResource(format!(
                    "DXGI swap chains need a Win32 window handle, got {:?}",
                    other
                )))
            }
        };

        let dxgi_desc = DXGI_SWAP_CHAIN_DESC {
            BufferDesc: DXGI_MODE_DESC {
                Width: desc.width,
                Height: desc.height,
                RefreshRate: DXGI_RATIONAL {
                    Numerator: desc.refresh_rate.numerator,
                    Denominator: desc.refresh_rate.denominator,
                },
                Format: texture_format_to_dxgi(desc.format),
                ScanlineOrdering: scanline_ordering_to_dxgi(desc.scanline_ordering),
                Scaling: scaling_to_dxgi(desc.scaling),
            },
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: desc.sample_desc.count,
                Quality: desc.sample_desc.quality,
            },
            BufferUsage: buffer_usage_to_dxgi(desc.usage),
            BufferCount: desc.buffer_count,
            OutputWindow: hwnd,
            Windowed: desc.windowed.into(),
            SwapEffect: swap_effect_to_dxgi(desc.swap_effect),
            Flags: swap_chain_flags_to_dxgi(desc.flags),
        };

        let mut swap_chain: Option<IDXGISwapChain> = None;
        unsafe { factory.CreateSwapChain(device, &dxgi_desc, &mut swap_chain) }
            .ok()
            .map_err(|e| platform_error("CreateSwapChain", e))?;

        swap_chain.ok_or_else(|| engine_err!(SOURCE, "CreateSwapChain returned no swap chain"))
    }

    fn back_buffer(&self, swap_chain: &IDXGISwapChain, index: u32) -> Result<ID3D11Texture2D> {
        unsafe { swap_chain.GetBuffer::<ID3D11Texture2D>(index) }
            .map_err(|e| platform_error("IDXGISwapChain::GetBuffer", e))
    }

    fn create_render_target_view(
        &self,
        device: &ID3D11Device,
        texture: &ID3D11Texture2D,
        desc: &RenderTargetViewDesc,
    ) -> Result<ID3D11RenderTargetView> {
        let d3d_desc = render_target_view_desc_to_d3d11(desc);

        let mut view: Option<ID3D11RenderTargetView> = None;
        unsafe { device.CreateRenderTargetView(texture, Some(&d3d_desc), Some(&mut view)) }
            .map_err(|e| platform_error("CreateRenderTargetView", e))?;

        view.ok_or_else(|| engine_err!(SOURCE, "CreateRenderTargetView returned no view"))
    }

    fn set_render_target(&self, context: &ID3D11DeviceContext, view: &ID3D11RenderTargetView) {
        unsafe {
            context.OMSetRenderTargets(Some(&[Some(view.clone())]), None::<&ID3D11DepthStencilView>);
        }
    }

    fn set_viewport(&self, context: &ID3D11DeviceContext, viewport: &Viewport) {
        unsafe {
            context.RSSetViewports(Some(&[viewport_to_d3d11(viewport)]));
        }
    }
}

/// Log every adapter the factory can see, at debug severity
fn log_adapters(factory: &IDXGIFactory1) {
    let mut index = 0;
    // EnumAdapters1 fails with DXGI_ERROR_NOT_FOUND past the last adapter
    while let Ok(adapter) = unsafe { factory.EnumAdapters1(index) } {
        match unsafe { adapter.GetDesc1() } {
            Ok(desc) => {
                let name = String::from_utf16_lossy(&desc.Description);
                engine_debug!(
                    SOURCE,
                    "Adapter {}: {} ({} MB dedicated video memory)",
                    index,
                    name.trim_end_matches('\0'),
                    desc.DedicatedVideoMemory / (1024 * 1024)
                );
            }
            Err(e) => engine_warn!(SOURCE, "Adapter {}: GetDesc1 failed: {}", index, e),
        }
        index += 1;
    }

    if index == 0 {
        engine_warn!(SOURCE, "No DXGI adapter found");
    }
}

/// Map a platform failure onto the engine error taxonomy
fn platform_error(call: &str, error: windows::core::Error) -> Error {
    if error.code() == E_OUTOFMEMORY {
        Error::OutOfMemory
    } else {
        Error::BackendError(format!("{} failed: {}", call, error))
    }
}
