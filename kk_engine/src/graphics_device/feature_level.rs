/// Feature levels and device creation flags

use std::fmt;
use bitflags::bitflags;

/// Capability tier negotiated between the application and the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureLevel {
    Level9_1,
    Level9_2,
    Level9_3,
    Level10_0,
    Level10_1,
    Level11_0,
    Level11_1,
}

/// Every supported feature level, most capable first
pub const PREFERRED_FEATURE_LEVELS: [FeatureLevel; 7] = [
    FeatureLevel::Level11_1,
    FeatureLevel::Level11_0,
    FeatureLevel::Level10_1,
    FeatureLevel::Level10_0,
    FeatureLevel::Level9_3,
    FeatureLevel::Level9_2,
    FeatureLevel::Level9_1,
];

impl fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeatureLevel::Level9_1 => "9_1",
            FeatureLevel::Level9_2 => "9_2",
            FeatureLevel::Level9_3 => "9_3",
            FeatureLevel::Level10_0 => "10_0",
            FeatureLevel::Level10_1 => "10_1",
            FeatureLevel::Level11_0 => "11_0",
            FeatureLevel::Level11_1 => "11_1",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Logical device creation flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeviceCreationFlags: u32 {
        /// Enable the driver debug layer
        const DEBUG = 1 << 0;
    }
}

impl DeviceCreationFlags {
    /// Flags fixed at compile time
    ///
    /// The debug layer is requested in debug builds, or in any build with the
    /// `debug-layer` feature. There is no runtime switch.
    pub fn for_build() -> Self {
        if cfg!(any(debug_assertions, feature = "debug-layer")) {
            Self::DEBUG
        } else {
            Self::empty()
        }
    }
}
