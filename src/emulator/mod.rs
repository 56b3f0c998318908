// Emulator module - Main emulator coordinator
//
// This module provides the main emulator interface that coordinates the CPU,
// PPU, and Bus, and implements quality-of-life features like speed control
// and configuration management.

mod config;

pub use config::{EmulatorConfig, SpeedMode};

use crate::bus::Bus;
use crate::cartridge::{mappers::create_mapper, Cartridge};
use crate::cpu::Cpu;
use crate::ppu::Frame;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Main emulator structure
///
/// Coordinates all NES components and provides high-level functionality
/// for running games, saving/loading states, and managing configuration.
pub struct Emulator {
    /// CPU (6502 processor)
    cpu: Cpu,

    /// Bus (connects CPU, PPU, and cartridge mapper)
    bus: Bus,

    /// Configuration
    config: EmulatorConfig,

    /// Currently loaded ROM path
    rom_path: Option<PathBuf>,

    /// Paused state
    paused: bool,

    /// Speed mode
    speed_mode: SpeedMode,

    /// Frame timing for speed control
    #[allow(dead_code)]
    last_frame_time: Option<Instant>,
}

impl Emulator {
    /// Create a new emulator instance
    ///
    /// Initializes all components to their power-on state.
    ///
    /// # Returns
    ///
    /// A new emulator instance
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// ```
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
            speed_mode: SpeedMode::Normal,
            last_frame_time: None,
        }
    }

    /// Load a ROM file
    ///
    /// Parses the iNES file, constructs its mapper, and wires it into the
    /// bus (and, through the bus, the PPU), then resets the CPU.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ROM file (.nes)
    ///
    /// # Returns
    ///
    /// Result indicating success or error
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.load_rom("game.nes").expect("Failed to load ROM");
    /// ```
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        info!("loaded {} ({} PRG banks)", path.display(), cartridge.prg_rom.len() / 0x4000);

        let mapper = create_mapper(cartridge)?;
        self.bus.load_mapper(mapper);
        self.rom_path = Some(path.to_path_buf());

        self.reset();

        Ok(())
    }

    /// Reset the emulator
    ///
    /// Resets all components to their power-on state, as if pressing the reset button.
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.reset();
    /// ```
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.paused = false;
    }

    /// Run CPU instructions until the PPU completes a frame snapshot.
    ///
    /// Does nothing (and returns `None`) while paused.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.load_rom("game.nes").expect("Failed to load ROM");
    /// if let Some(frame) = emulator.run_frame() {
    ///     println!("{} background tiles", frame.background_tiles.len());
    /// }
    /// ```
    pub fn run_frame(&mut self) -> Option<Frame> {
        if self.paused {
            return None;
        }
        loop {
            let dma_cycles = self.bus.take_dma_cycles();
            if dma_cycles > 0 {
                if let Some(frame) = self.bus.tick(dma_cycles) {
                    return Some(frame);
                }
                continue;
            }
            let cpu_cycles = self.cpu.step(&mut self.bus);
            if let Some(frame) = self.bus.tick(cpu_cycles as u32) {
                return Some(frame);
            }
        }
    }

    /// Set speed mode
    ///
    /// Controls emulation speed (normal, fast forward, slow motion).
    ///
    /// # Arguments
    ///
    /// * `mode` - The speed mode to set
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::{Emulator, SpeedMode};
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.set_speed_mode(SpeedMode::FastForward2x);
    /// ```
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.speed_mode = mode;
    }

    /// Get current speed mode
    ///
    /// # Returns
    ///
    /// The current speed mode
    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    /// Pause the emulator
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.pause();
    /// ```
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the emulator
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.resume();
    /// ```
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.toggle_pause();
    /// ```
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Check if emulator is paused
    ///
    /// # Returns
    ///
    /// true if paused, false otherwise
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get reference to CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Get mutable reference to CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Get reference to Bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get mutable reference to Bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Get reference to configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Get mutable reference to configuration
    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    /// Get the currently loaded ROM path
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
