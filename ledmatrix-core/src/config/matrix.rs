//! Matrix geometry configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magic number to identify stored matrix configuration
pub const CONFIG_MAGIC: u32 = 0x4C45_444D; // "LEDM"

/// Current stored configuration version
pub const CONFIG_VERSION: u8 = 1;

/// Largest encoded configuration in bytes
pub const MAX_ENCODED_LEN: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width must be at least one pixel
    ZeroWidth,
    /// Height must be at least one pixel
    ZeroHeight,
    /// Output buffer too small for encoding
    Serialize,
    /// Stored bytes are not a valid configuration
    Deserialize,
    /// Stored magic number does not match
    BadMagic,
    /// Stored data was written by an unknown version
    UnsupportedVersion,
}

/// Canvas geometry
///
/// Fixed when a [`crate::LedMatrix`] is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    width: u8,
    height: u8,
}

impl MatrixConfig {
    /// Create a configuration, rejecting empty axes
    pub const fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(Self { width, height })
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Number of pixels on the canvas
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether width and height are equal
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether `(x, y)` addresses a pixel on the canvas
    pub const fn contains(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height
    }
}

/// On-flash layout with a header for validation
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct StoredConfig {
    magic: u32,
    version: u8,
    width: u8,
    height: u8,
}

#[cfg(feature = "serde")]
impl MatrixConfig {
    /// Encode into `buf` as postcard, returning the used part
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        let stored = StoredConfig {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            width: self.width,
            height: self.height,
        };
        postcard::to_slice(&stored, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode and validate a configuration written by [`Self::to_slice`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let stored: StoredConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if stored.magic != CONFIG_MAGIC {
            warn!("config magic mismatch: {=u32:x}", stored.magic);
            return Err(ConfigError::BadMagic);
        }
        if stored.version != CONFIG_VERSION {
            warn!("unsupported config version {}", stored.version);
            return Err(ConfigError::UnsupportedVersion);
        }

        debug!("loaded {}x{} matrix config", stored.width, stored.height);
        Self::new(stored.width, stored.height)
    }
}
