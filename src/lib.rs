// nescore - cycle-aware NES emulator core
//
// The core of the machine is three coupled subsystems: the 6502 CPU, the
// 2C02 PPU and the shared bus with its cartridge mapper layer, driven in a
// fixed ratio of three PPU dots per CPU cycle. Presentation (window,
// keyboard) lives in the display module as an external consumer of the
// frame buffer.

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod display;
pub mod emulator;
pub mod input;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use bus::Bus;
pub use cartridge::{Cartridge, INesError, INesHeader, Mapper, Mirroring};
pub use cpu::Cpu;
pub use display::{DisplayWindow, WindowConfig};
pub use emulator::{EmulationFault, Emulator, EmulatorConfig};
pub use input::{Button, Controller, ControllerIO};
pub use ppu::Ppu;
pub use ram::Ram;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // All core components construct in their power-on state
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = Bus::new();
        let _controller_io = ControllerIO::new();
        let _ram = Ram::new();
        let _emulator = Emulator::new();
    }
}
