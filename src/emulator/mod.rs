// Emulator module - Main emulator coordinator
//
// Ties the CPU to the bus (which owns the PPU, RAM, controllers and the
// cartridge mapper) and drives them in the fixed 3:1 dot ratio, one frame
// at a time.

mod config;
mod screenshot;

pub use config::{EmulatorConfig, VideoConfig};
pub use screenshot::{save_screenshot, ScreenshotError};

use crate::bus::Bus;
use crate::cartridge::{Cartridge, INesError};
use crate::cpu::Cpu;
use crate::input::Button;
use crate::ppu::FRAME_PIXELS;
use std::fmt;
use std::path::{Path, PathBuf};

/// Fault surfaced by `run_one_frame` in strict mode
///
/// Outside strict mode ROM misbehavior degrades to warnings and the frame
/// loop never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulationFault {
    /// An illegal opcode was fetched
    IllegalOpcode {
        /// The offending opcode byte
        opcode: u8,
        /// Address it was fetched from
        pc: u16,
    },
}

impl fmt::Display for EmulationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmulationFault::IllegalOpcode { opcode, pc } => {
                write!(f, "illegal opcode {:02X} at {:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for EmulationFault {}

/// Main emulator structure
///
/// Owns the CPU and the bus and exposes the frame-oriented driver API:
/// `run_one_frame`, `set_button`, `frame`, `reset`.
pub struct Emulator {
    /// CPU (6502 processor)
    cpu: Cpu,

    /// Bus owning PPU, RAM, controllers and the mapper
    bus: Bus,

    /// Configuration
    config: EmulatorConfig,

    /// Currently loaded ROM path, if any
    rom_path: Option<PathBuf>,
}

impl Emulator {
    /// Create a new emulator with default configuration
    pub fn new() -> Self {
        Self::with_config(EmulatorConfig::default())
    }

    /// Create a new emulator with the given configuration
    pub fn with_config(config: EmulatorConfig) -> Self {
        let mut cpu = Cpu::new();
        cpu.strict = config.strict_mode;

        Emulator {
            cpu,
            bus: Bus::new(),
            config,
            rom_path: None,
        }
    }

    /// Load a ROM file and reset into it
    ///
    /// # Errors
    /// Propagates `INesError` from parsing and mapper creation.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), INesError> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;

        self.insert_cartridge(cartridge)?;
        self.rom_path = Some(path.to_path_buf());

        Ok(())
    }

    /// Insert an already-parsed cartridge and reset into it
    ///
    /// # Errors
    /// Returns `INesError::UnsupportedMapper` for unimplemented mapper ids.
    pub fn insert_cartridge(&mut self, cartridge: Cartridge) -> Result<(), INesError> {
        self.bus.insert_cartridge(cartridge)?;
        self.reset();
        Ok(())
    }

    /// Reset the whole machine
    ///
    /// Idempotent: PPU latches and controller shift registers clear, the
    /// CPU re-reads the reset vector, cartridge and mapper state survive.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Run the machine until the PPU completes the current frame
    ///
    /// Ticks the PPU three dots per CPU cycle; within one cycle the PPU
    /// ticks precede the CPU tick, so an NMI raised at VBlank entry is
    /// visible to the CPU in the same cycle. Returns once the PPU latches
    /// frame_complete (crossing scanline 241 dot 1).
    ///
    /// # Errors
    /// In strict mode, reports a fault latched during the frame; the frame
    /// still completed and the machine remains consistent.
    pub fn run_one_frame(&mut self) -> Result<(), EmulationFault> {
        loop {
            self.bus.ppu_mut().step();
            self.bus.ppu_mut().step();
            self.bus.ppu_mut().step();
            self.cpu.clock(&mut self.bus);

            if self.bus.ppu_mut().take_frame_complete() {
                break;
            }
        }

        if let Some(fault) = self.cpu.take_fault() {
            return Err(EmulationFault::IllegalOpcode {
                opcode: fault.opcode,
                pc: fault.pc,
            });
        }

        Ok(())
    }

    /// Press or release a controller button
    ///
    /// `which` selects the controller (0 or 1).
    pub fn set_button(&mut self, which: usize, button: Button, pressed: bool) {
        self.bus.controllers_mut().set_button(which, button, pressed);
    }

    /// The rendered frame: 256x240 ARGB8888 pixels, row-major
    pub fn frame(&self) -> &[u32; FRAME_PIXELS] {
        self.bus.ppu().frame()
    }

    /// Capture the current frame as a PNG in the configured directory
    ///
    /// # Errors
    /// Returns `ScreenshotError` on I/O or encoding failure.
    pub fn screenshot(&self) -> Result<PathBuf, ScreenshotError> {
        save_screenshot(self.frame(), &self.config.screenshot_directory)
    }

    /// Reference to the CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable reference to the CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Reference to the bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutable reference to the bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Reference to the configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// The currently loaded ROM path
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
