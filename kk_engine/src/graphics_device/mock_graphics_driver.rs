/// Mock graphics driver for unit tests (no GPU required)
///
/// Records every driver call and every handle release so tests can check
/// ordering, descriptors and rollback.

use std::num::NonZeroIsize;
use std::sync::{Arc, Mutex};
use raw_window_handle::{
    HandleError, HasWindowHandle, RawWindowHandle, Win32WindowHandle, WindowHandle,
};

use crate::error::{Error, Result};
use crate::graphics_device::{
    DeviceCreationFlags, DeviceDesc, FeatureLevel, GraphicsDriver, RenderTargetViewDesc,
    SwapChainDesc, Viewport,
};

// ============================================================================
// Recorded events
// ============================================================================

/// Driver calls that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockStep {
    CreateFactory,
    CreateDevice,
    CreateSwapChain,
    GetBackBuffer,
    CreateRenderTargetView,
}

/// One recorded driver call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    CreateFactory,
    CreateDevice {
        flags: DeviceCreationFlags,
        feature_levels: Vec<FeatureLevel>,
    },
    CreateSwapChain(SwapChainDesc),
    GetBackBuffer(u32),
    CreateRenderTargetView(RenderTargetViewDesc),
    SetRenderTarget,
    SetViewport(Viewport),
}

impl MockCall {
    /// Short name, for order assertions
    pub fn name(&self) -> &'static str {
        match self {
            MockCall::CreateFactory => "create_factory",
            MockCall::CreateDevice { .. } => "create_device",
            MockCall::CreateSwapChain(_) => "create_swap_chain",
            MockCall::GetBackBuffer(_) => "back_buffer",
            MockCall::CreateRenderTargetView(_) => "create_render_target_view",
            MockCall::SetRenderTarget => "set_render_target",
            MockCall::SetViewport(_) => "set_viewport",
        }
    }
}

/// Kind of object behind a mock handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockResource {
    Factory,
    Device,
    DeviceContext,
    SwapChain,
    BackBuffer,
    RenderTargetView,
}

#[derive(Debug, Default)]
struct MockLog {
    calls: Vec<MockCall>,
    released: Vec<MockResource>,
}

// ============================================================================
// Mock handle
// ============================================================================

/// Handle returned by the mock driver; records its release on drop
#[derive(Debug)]
pub struct MockHandle {
    pub kind: MockResource,
    log: Arc<Mutex<MockLog>>,
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        if let Ok(mut log) = self.log.lock() {
            log.released.push(self.kind);
        }
    }
}

// ============================================================================
// Mock driver
// ============================================================================

/// Driver that succeeds (or fails at one chosen step) without touching a GPU
///
/// Clones share the same call log, so a test can keep one clone after handing
/// the other to `Graphics`.
#[derive(Debug, Clone)]
pub struct MockGraphicsDriver {
    log: Arc<Mutex<MockLog>>,
    fail_at: Option<MockStep>,
    max_feature_level: FeatureLevel,
}

impl MockGraphicsDriver {
    /// Healthy driver supporting every feature level
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(MockLog::default())),
            fail_at: None,
            max_feature_level: FeatureLevel::Level11_1,
        }
    }

    /// Driver whose `step` call returns an error
    pub fn failing_at(step: MockStep) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::new()
        }
    }

    /// Limit the highest feature level the fake hardware supports
    pub fn with_max_feature_level(mut self, level: FeatureLevel) -> Self {
        self.max_feature_level = level;
        self
    }

    /// Recorded calls, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.log.lock().unwrap().calls.clone()
    }

    /// Recorded call names, in order
    pub fn call_names(&self) -> Vec<&'static str> {
        self.log.lock().unwrap().calls.iter().map(MockCall::name).collect()
    }

    /// Released handles, in release order
    pub fn released(&self) -> Vec<MockResource> {
        self.log.lock().unwrap().released.clone()
    }

    fn record(&self, call: MockCall) {
        self.log.lock().unwrap().calls.push(call);
    }

    fn handle(&self, kind: MockResource) -> MockHandle {
        MockHandle {
            kind,
            log: Arc::clone(&self.log),
        }
    }

    fn check(&self, step: MockStep) -> Result<()> {
        if self.fail_at == Some(step) {
            return Err(Error::BackendError(format!("mock failure at {:?}", step)));
        }
        Ok(())
    }
}

impl GraphicsDriver for MockGraphicsDriver {
    type Factory = MockHandle;
    type Device = MockHandle;
    type DeviceContext = MockHandle;
    type SwapChain = MockHandle;
    type Texture = MockHandle;
    type RenderTargetView = MockHandle;

    fn create_factory(&self) -> Result<MockHandle> {
        self.record(MockCall::CreateFactory);
        self.check(MockStep::CreateFactory)?;
        Ok(self.handle(MockResource::Factory))
    }

    fn create_device(&self, desc: &DeviceDesc<'_>) -> Result<(MockHandle, MockHandle, FeatureLevel)> {
        self.record(MockCall::CreateDevice {
            flags: desc.flags,
            feature_levels: desc.feature_levels.to_vec(),
        });
        self.check(MockStep::CreateDevice)?;

        let level = desc
            .feature_levels
            .iter()
            .copied()
            .find(|level| *level <= self.max_feature_level)
            .ok_or_else(|| Error::BackendError("no supported feature level".to_string()))?;

        Ok((
            self.handle(MockResource::Device),
            self.handle(MockResource::DeviceContext),
            level,
        ))
    }

    fn create_swap_chain(
        &self,
        factory: &MockHandle,
        device: &MockHandle,
        desc: &SwapChainDesc,
    ) -> Result<MockHandle> {
        assert_eq!(factory.kind, MockResource::Factory);
        assert_eq!(device.kind, MockResource::Device);
        self.record(MockCall::CreateSwapChain(desc.clone()));
        self.check(MockStep::CreateSwapChain)?;
        Ok(self.handle(MockResource::SwapChain))
    }

    fn back_buffer(&self, swap_chain: &MockHandle, index: u32) -> Result<MockHandle> {
        assert_eq!(swap_chain.kind, MockResource::SwapChain);
        self.record(MockCall::GetBackBuffer(index));
        self.check(MockStep::GetBackBuffer)?;
        Ok(self.handle(MockResource::BackBuffer))
    }

    fn create_render_target_view(
        &self,
        device: &MockHandle,
        texture: &MockHandle,
        desc: &RenderTargetViewDesc,
    ) -> Result<MockHandle> {
        assert_eq!(device.kind, MockResource::Device);
        assert_eq!(texture.kind, MockResource::BackBuffer);
        self.record(MockCall::CreateRenderTargetView(*desc));
        self.check(MockStep::CreateRenderTargetView)?;
        Ok(self.handle(MockResource::RenderTargetView))
    }

    fn set_render_target(&self, context: &MockHandle, view: &MockHandle) {
        assert_eq!(context.kind, MockResource::DeviceContext);
        assert_eq!(view.kind, MockResource::RenderTargetView);
        self.record(MockCall::SetRenderTarget);
    }

    fn set_viewport(&self, context: &MockHandle, viewport: &Viewport) {
        assert_eq!(context.kind, MockResource::DeviceContext);
        self.record(MockCall::SetViewport(*viewport));
    }
}

// ============================================================================
// Mock window
// ============================================================================

/// Window exposing a fixed Win32 handle
pub struct MockWindow {
    raw: Option<RawWindowHandle>,
}

impl MockWindow {
    /// Window with HWND `hwnd` (must be non-zero)
    pub fn new(hwnd: isize) -> Self {
        let hwnd = NonZeroIsize::new(hwnd).expect("mock HWND must be non-zero");
        Self {
            raw: Some(RawWindowHandle::Win32(Win32WindowHandle::new(hwnd))),
        }
    }

    /// Window whose handle is not available
    pub fn unavailable() -> Self {
        Self { raw: None }
    }

    /// The raw handle handed to the driver
    pub fn raw(&self) -> RawWindowHandle {
        self.raw.expect("mock window has no handle")
    }
}

impl HasWindowHandle for MockWindow {
    fn window_handle(&self) -> std::result::Result<WindowHandle<'_>, HandleError> {
        match self.raw {
            // SAFETY: the mock HWND is never dereferenced
            Some(raw) => Ok(unsafe { WindowHandle::borrow_raw(raw) }),
            None => Err(HandleError::Unavailable),
        }
    }
}
