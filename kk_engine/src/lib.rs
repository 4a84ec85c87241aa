/*!
# KK Engine

Core types for bringing up a hardware-accelerated rendering device.

This crate is platform-agnostic: the platform graphics API sits behind the
`GraphicsDriver` trait, and driver crates (Direct3D 11, ...) provide the
concrete implementation.

## Architecture

- **GraphicsDriver**: the platform calls needed for setup (factory, device, swap chain, ...)
- **Graphics**: device initializer running the setup sequence over a driver
- **Engine**: process-wide logging facade used by the `engine_*!` macros

## Example

```ignore
use kk_engine::kk::graphics::Graphics;
use kk_engine_driver_d3d11::kk::D3d11Driver;

let mut graphics = Graphics::new(D3d11Driver::new());
graphics.setup(&window, 1280, 720)?;
```
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;

// Main kk namespace module
pub mod kk {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Driver seam
    pub use crate::graphics_device::GraphicsDriver;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Graphics sub-module with device setup types
    pub mod graphics {
        pub use crate::graphics_device::*;
    }
}



#[cfg(test)]
mod engine_tests;
