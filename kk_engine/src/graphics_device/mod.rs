/// Graphics device module - driver seam, descriptors and the device initializer

// Module declarations
pub mod graphics_driver;
pub mod feature_level;
pub mod texture;
pub mod swapchain;
pub mod render_target;
pub mod viewport;
pub mod graphics;

// Re-export everything from graphics_driver.rs
pub use graphics_driver::*;

// Re-export from other modules
pub use feature_level::*;
pub use texture::*;
pub use swapchain::*;
pub use render_target::*;
pub use viewport::*;
pub use graphics::*;

// Mock graphics driver for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_driver;
