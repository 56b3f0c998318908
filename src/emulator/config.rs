// Configuration management
//
// Handles emulator configuration and settings persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Default configuration file path
const CONFIG_FILE: &str = "emulator_config.toml";

/// Emulator configuration
///
/// Stores all user-configurable settings for the emulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Hotkeys
    pub hotkeys: HotkeyConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Window scale (1-4)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target FPS (usually 60 for NTSC)
    pub fps: u32,

    /// Enable fullscreen
    pub fullscreen: bool,
}

/// Hotkey configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Reset (default: F8)
    pub reset: String,

    /// Fast forward (default: Tab)
    pub fast_forward: String,

    /// Pause (default: P)
    pub pause: String,
}

/// Speed mode for emulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedMode {
    /// Normal speed (1x)
    Normal,

    /// Fast forward 2x
    FastForward2x,

    /// Fast forward 4x
    FastForward4x,

    /// Slow motion (0.5x)
    SlowMotion,

    /// Paused (0x)
    Paused,
}

impl SpeedMode {
    /// Get the speed multiplier
    ///
    /// # Returns
    ///
    /// The speed multiplier (1.0 = normal speed)
    pub fn multiplier(self) -> f32 {
        match self {
            SpeedMode::Normal => 1.0,
            SpeedMode::FastForward2x => 2.0,
            SpeedMode::FastForward4x => 4.0,
            SpeedMode::SlowMotion => 0.5,
            SpeedMode::Paused => 0.0,
        }
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
                fps: 60,
                fullscreen: false,
            },
            hotkeys: HotkeyConfig {
                reset: "F8".to_string(),
                fast_forward: "Tab".to_string(),
                pause: "P".to_string(),
            },
        }
    }
}

impl EmulatorConfig {
    /// Load configuration from file or create default
    ///
    /// If the configuration file doesn't exist, creates a default configuration
    /// and saves it to the file.
    ///
    /// # Returns
    ///
    /// The loaded or default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::EmulatorConfig;
    ///
    /// let config = EmulatorConfig::load_or_default();
    /// ```
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            // Try to save the default config, but don't fail if we can't
            let _ = config.save();
            config
        })
    }

    /// Load configuration from file
    ///
    /// # Returns
    ///
    /// Result containing the configuration or an error
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    ///
    /// # Returns
    ///
    /// Result indicating success or error
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_rs::emulator::EmulatorConfig;
    ///
    /// let config = EmulatorConfig::default();
    /// config.save().expect("Failed to save configuration");
    /// ```
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
