// Bus module - CPU-side memory bus
//
// The bus owns every memory-mapped component the CPU can see - work RAM,
// the PPU's register window, both controllers and the cartridge mapper -
// and decodes addresses to route accesses to them. The PPU-side address
// space (pattern tables, nametables, palette) is decoded inside the PPU
// itself, which shares the mapper handle.
//
// # NES Memory Map (CPU Address Space)
//
// ```text
// $0000-$07FF: 2KB internal RAM
// $0800-$1FFF: Mirrors of RAM
// $2000-$3FFF: PPU registers, mirrored every 8 bytes
// $4000-$4013: APU registers (stubbed: reads 0, writes ignored)
// $4014:       OAMDMA (write triggers the 256-byte OAM transfer)
// $4015:       APU status (stubbed)
// $4016:       Controller 1 data / strobe
// $4017:       Controller 2 data (writes belong to the APU frame counter)
// $4018-$FFFF: Cartridge space via the mapper
// ```

use crate::cartridge::{create_mapper, Cartridge, INesError, Mapper};
use crate::input::ControllerIO;
use crate::ppu::Ppu;
use crate::ram::Ram;
use std::cell::RefCell;
use std::rc::Rc;

/// First address routed to the cartridge mapper
const CARTRIDGE_SPACE_START: u16 = 0x4018;

/// Main memory bus
///
/// Owns the CPU-visible components and routes reads and writes by address.
/// Reads take `&mut self`: several locations (PPUSTATUS, PPUDATA, the
/// controller ports) have read side effects.
pub struct Bus {
    /// 2KB internal work RAM with mirroring
    ram: Ram,

    /// Picture processing unit; its registers occupy $2000-$3FFF
    ppu: Ppu,

    /// Both controller ports behind $4016/$4017
    controllers: ControllerIO,

    /// Cartridge mapper, shared with the PPU for pattern-table access
    mapper: Option<Rc<RefCell<Box<dyn Mapper>>>>,

    /// Flat fallback for cartridge space while no cartridge is inserted,
    /// so tests can place vectors and programs without building a mapper
    open_region: Box<[u8]>,

    /// Set by a $4014 write; the CPU clock drains it into the 513/514
    /// cycle DMA stall
    dma_pending: bool,
}

impl Bus {
    /// Create a new bus with no cartridge inserted
    pub fn new() -> Self {
        Bus {
            ram: Ram::new(),
            ppu: Ppu::new(),
            controllers: ControllerIO::new(),
            mapper: None,
            open_region: vec![0u8; 0x10000 - CARTRIDGE_SPACE_START as usize].into_boxed_slice(),
            dma_pending: false,
        }
    }

    /// Insert a cartridge, creating its mapper and wiring it to the PPU
    ///
    /// # Errors
    /// Returns `INesError::UnsupportedMapper` for unimplemented mapper ids.
    pub fn insert_cartridge(&mut self, cartridge: Cartridge) -> Result<(), INesError> {
        let mapper = Rc::new(RefCell::new(create_mapper(cartridge)?));
        self.ppu.set_mapper(mapper.clone());
        self.mapper = Some(mapper);
        Ok(())
    }

    /// Reset every component on the bus
    ///
    /// PPU latches and controller shift registers clear; cartridge and
    /// mapper state (MMC1 bank registers included) survive, as on the
    /// console's reset button.
    pub fn reset(&mut self) {
        self.ppu.reset();
        self.controllers.reset();
        self.dma_pending = false;
    }

    /// Read a byte from the bus
    pub fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),

            0x2000..=0x3FFF => self.ppu.read_register(addr & 0x0007),

            0x4016 => self.controllers.read(0),
            0x4017 => self.controllers.read(1),

            // APU and OAMDMA are write-only or stubbed; open bus reads 0
            0x4000..=0x4015 => 0,

            CARTRIDGE_SPACE_START..=0xFFFF => match &self.mapper {
                Some(mapper) => mapper.borrow().cpu_read(addr),
                None => self.open_region[(addr - CARTRIDGE_SPACE_START) as usize],
            },
        }
    }

    /// Write a byte to the bus
    pub fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, data),

            0x2000..=0x3FFF => self.ppu.write_register(addr & 0x0007, data),

            0x4014 => self.oam_dma(data),

            0x4016 => self.controllers.write_strobe(data),

            // $4017 is the APU frame counter; the rest is the stubbed APU
            0x4000..=0x4013 | 0x4015 | 0x4017 => {}

            CARTRIDGE_SPACE_START..=0xFFFF => match &self.mapper {
                Some(mapper) => mapper.borrow_mut().cpu_write(addr, data),
                None => self.open_region[(addr - CARTRIDGE_SPACE_START) as usize] = data,
            },
        }
    }

    /// Read a 16-bit little-endian word
    pub fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write a 16-bit little-endian word
    pub fn write_u16(&mut self, addr: u16, data: u16) {
        self.write(addr, (data & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (data >> 8) as u8);
    }

    /// OAM DMA ($4014): copy 256 bytes from CPU page (data << 8) into OAM
    ///
    /// The copy goes through the bus read path and lands in OAM starting at
    /// the current OAMADDR, wrapping. The transfer is atomic within the
    /// CPU cycle that triggered it; the stall is charged by the CPU clock.
    fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        let start = self.ppu.oam_addr;

        for i in 0..=255u8 {
            let value = self.read(base + i as u16);
            self.ppu.write_oam(start.wrapping_add(i), value);
        }

        self.dma_pending = true;
    }

    /// Take the DMA-pending flag, clearing it
    pub fn take_dma_pending(&mut self) -> bool {
        let pending = self.dma_pending;
        self.dma_pending = false;
        pending
    }

    /// Whether the PPU has the NMI line asserted
    pub fn nmi_pending(&self) -> bool {
        self.ppu.nmi_pending()
    }

    /// Clear the NMI line
    pub fn clear_nmi(&mut self) {
        self.ppu.clear_nmi();
    }

    /// Shared access to the PPU
    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    /// Mutable access to the PPU
    pub fn ppu_mut(&mut self) -> &mut Ppu {
        &mut self.ppu
    }

    /// Shared access to the controller ports
    pub fn controllers(&self) -> &ControllerIO {
        &self.controllers
    }

    /// Mutable access to the controller ports
    pub fn controllers_mut(&mut self) -> &mut ControllerIO {
        &mut self.controllers
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
