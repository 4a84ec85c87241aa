/*!
# KK Engine - Direct3D 11 Driver

Direct3D 11 implementation of the kk_engine `GraphicsDriver` trait, using the
`windows` crate for the DXGI and D3D11 bindings.

The driver only exists on Windows. On other targets this crate exposes the
platform-independent log formatting and nothing else.

## Example

```ignore
use kk_engine::kk::Engine;
use kk_engine_driver_d3d11::kk::{D3d11Graphics, D3d11Driver, DebugOutputLogger};

Engine::set_logger(DebugOutputLogger);
let mut graphics = D3d11Graphics::new(D3d11Driver::new());
graphics.setup(&window, 1280, 720)?;
```
*/

#[cfg(windows)]
mod d3d11_driver;
#[cfg(windows)]
mod d3d11_format;
mod debug_output;

// Main kk namespace module
pub mod kk {
    #[cfg(windows)]
    pub use crate::d3d11_driver::{D3d11Driver, D3d11Graphics};

    #[cfg(windows)]
    pub use crate::debug_output::DebugOutputLogger;
    pub use crate::debug_output::format_debug_line;
}
