// Configuration management
//
// User-configurable settings, persisted as TOML next to the binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Directory screenshots are written to
    pub screenshot_directory: PathBuf,

    /// When set, ROM misbehavior (illegal opcodes) fails the frame loop
    /// instead of degrading to a logged NOP
    pub strict_mode: bool,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Window scale factor (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target frame rate (60 for NTSC)
    pub fps: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            scale: 3,
            vsync: true,
            fps: 60,
        }
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig::default(),
            screenshot_directory: PathBuf::from("screenshots"),
            strict_mode: false,
        }
    }
}

impl EmulatorConfig {
    /// Load configuration from a TOML file, falling back to defaults
    ///
    /// A missing or malformed file yields the default configuration; the
    /// malformed case is logged so a typo does not silently reset settings.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!(
                        "failed to parse config {}: {}; using defaults",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save configuration as TOML
    ///
    /// # Errors
    /// Returns the underlying I/O error on write failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(path, contents)
    }
}
