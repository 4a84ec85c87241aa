/// Graphics - brings up a device, swap chain and default render target for a window

use raw_window_handle::{HasWindowHandle, RawWindowHandle};

use crate::error::{Error, Result};
use crate::graphics_device::{
    DeviceCreationFlags, DeviceDesc, GraphicsDriver, RenderTargetViewDesc, SwapChainDesc,
    Viewport, PREFERRED_FEATURE_LEVELS,
};
use crate::{engine_debug, engine_error, engine_info, engine_trace};

const SOURCE: &str = "kk::Graphics";

/// Setup progress of a `Graphics` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsStatus {
    /// `setup` has not been called yet
    Uninitialized,
    /// Device, swap chain and render target are live
    Ready,
    /// `setup` failed; nothing is held and setup cannot be retried
    Failed,
}

/// Resources owned by a successfully set up `Graphics`
///
/// Dropping this releases the render target view, swap chain, context and device.
pub struct DeviceResources<D: GraphicsDriver> {
    back_buffer_view: D::RenderTargetView,
    swap_chain: D::SwapChain,
    context: D::DeviceContext,
    device: D::Device,
}

impl<D: GraphicsDriver> DeviceResources<D> {
    /// Logical device (resource creation)
    pub fn device(&self) -> &D::Device {
        &self.device
    }

    /// Immediate context (command submission)
    pub fn context(&self) -> &D::DeviceContext {
        &self.context
    }

    /// Presentation surface
    pub fn swap_chain(&self) -> &D::SwapChain {
        &self.swap_chain
    }

    /// Render target view over back buffer 0, bound as the active output
    pub fn back_buffer_view(&self) -> &D::RenderTargetView {
        &self.back_buffer_view
    }
}

enum State<D: GraphicsDriver> {
    Uninitialized,
    Ready(DeviceResources<D>),
    Failed,
}

/// Device initializer
///
/// Owned by the application and set up once, from the thread that owns the
/// window, before anything else touches the device.
///
/// # Example
///
/// ```ignore
/// use kk_engine::kk::graphics::Graphics;
/// use kk_engine_driver_d3d11::kk::D3d11Driver;
///
/// let mut graphics = Graphics::new(D3d11Driver::new());
/// graphics.setup(&window, 1280, 720)?;
/// let context = graphics.resources().unwrap().context();
/// ```
pub struct Graphics<D: GraphicsDriver> {
    driver: D,
    state: State<D>,
}

impl<D: GraphicsDriver> Graphics<D> {
    /// Create an uninitialized `Graphics` on top of `driver`
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            state: State::Uninitialized,
        }
    }

    /// Create the device, swap chain and default render target for `window`
    ///
    /// Steps, each depending on the previous one:
    /// 1. adapter factory
    /// 2. device + immediate context (highest feature level available)
    /// 3. double-buffered flip-discard swap chain bound to `window`
    /// 4. back buffer 0
    /// 5. render target view over the back buffer
    /// 6. bind the view (no depth/stencil) and a full-surface viewport
    ///
    /// The first failing step aborts setup. Whatever earlier steps created is
    /// released before returning, and the status becomes `Failed`.
    ///
    /// # Arguments
    ///
    /// * `window` - Window to present into
    /// * `width` - Surface width in pixels (not validated)
    /// * `height` - Surface height in pixels (not validated)
    ///
    /// # Errors
    ///
    /// - `Error::InvalidState` if `setup` already ran, successfully or not.
    ///   No driver call is made in that case.
    /// - `Error::InvalidResource` if the window handle is unavailable.
    /// - `Error::InitializationFailed` naming the step that failed.
    pub fn setup<W: HasWindowHandle + ?Sized>(
        &mut self,
        window: &W,
        width: u32,
        height: u32,
    ) -> Result<()> {
        match self.state {
            State::Uninitialized => {}
            State::Ready(_) => {
                engine_error!(SOURCE, "setup() called on a device that is already set up");
                return Err(Error::InvalidState("Graphics is already set up".to_string()));
            }
            State::Failed => {
                engine_error!(SOURCE, "setup() called after a failed setup");
                return Err(Error::InvalidState("A previous setup failed".to_string()));
            }
        }

        let result = Self::window_handle(window)
            .and_then(|handle| self.create_resources(handle, width, height));

        match result {
            Ok(resources) => {
                self.state = State::Ready(resources);
                engine_info!(SOURCE, "Device ready ({}x{})", width, height);
                Ok(())
            }
            Err(e) => {
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    /// Current setup status
    pub fn status(&self) -> GraphicsStatus {
        match self.state {
            State::Uninitialized => GraphicsStatus::Uninitialized,
            State::Ready(_) => GraphicsStatus::Ready,
            State::Failed => GraphicsStatus::Failed,
        }
    }

    /// Whether `setup` succeeded
    pub fn is_ready(&self) -> bool {
        self.status() == GraphicsStatus::Ready
    }

    /// Device resources, once set up
    pub fn resources(&self) -> Option<&DeviceResources<D>> {
        match &self.state {
            State::Ready(resources) => Some(resources),
            _ => None,
        }
    }

    /// Underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    fn window_handle<W: HasWindowHandle + ?Sized>(window: &W) -> Result<RawWindowHandle> {
        window
            .window_handle()
            .map(|handle| handle.as_raw())
            .map_err(|e| {
                engine_error!(SOURCE, "Failed to get the window handle: {}", e);
                Error::InvalidResource(format!("Window handle unavailable: {}", e))
            })
    }

    fn create_resources(
        &self,
        window: RawWindowHandle,
        width: u32,
        height: u32,
    ) -> Result<DeviceResources<D>> {
        let factory = self
            .driver
            .create_factory()
            .map_err(|e| step_failed("create DXGI factory", e))?;

        let device_desc = DeviceDesc {
            flags: DeviceCreationFlags::for_build(),
            feature_levels: &PREFERRED_FEATURE_LEVELS,
        };
        let (device, context, feature_level) = self
            .driver
            .create_device(&device_desc)
            .map_err(|e| step_failed("create D3D11 device", e))?;
        engine_debug!(SOURCE, "Negotiated feature level {}", feature_level);

        let swap_chain_desc = SwapChainDesc::double_buffered(window, width, height);
        debug_assert!(
            !swap_chain_desc.swap_effect.is_flip_model() || swap_chain_desc.buffer_count >= 2
        );
        let swap_chain = self
            .driver
            .create_swap_chain(&factory, &device, &swap_chain_desc)
            .map_err(|e| step_failed("create swap chain", e))?;
        drop(factory);

        let back_buffer = self
            .driver
            .back_buffer(&swap_chain, 0)
            .map_err(|e| step_failed("acquire the back buffer", e))?;

        let view_desc = RenderTargetViewDesc::texture_2d(swap_chain_desc.format);
        let back_buffer_view = self
            .driver
            .create_render_target_view(&device, &back_buffer, &view_desc)
            .map_err(|e| step_failed("create render target view", e))?;
        // The view keeps the surface alive
        drop(back_buffer);

        self.driver.set_render_target(&context, &back_buffer_view);
        self.driver.set_viewport(&context, &Viewport::full_surface(width, height));
        engine_trace!(SOURCE, "Render target and viewport bound");

        Ok(DeviceResources {
            back_buffer_view,
            swap_chain,
            context,
            device,
        })
    }
}

fn step_failed(step: &str, cause: Error) -> Error {
    engine_error!(SOURCE, "Failed to {}: {}", step, cause);
    Error::InitializationFailed(format!("Failed to {}: {}", step, cause))
}
