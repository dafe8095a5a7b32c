// Mappers module - Implementations of the supported NES cartridge mappers
//
// This module contains the mapper factory and the individual mapper
// implementations. Each mapper translates CPU and PPU addresses into
// offsets within the cartridge's PRG/CHR regions and may bank-switch
// under program control.

mod mapper0;
mod mapper1;
mod mapper2;
mod mapper3;

use super::{Cartridge, INesError, Mirroring};

pub use mapper0::Mapper0;
pub use mapper1::Mapper1;
pub use mapper2::Mapper2;
pub use mapper3::Mapper3;

/// Trait implemented by all cartridge mappers
///
/// The bus routes CPU accesses in cartridge space and all PPU pattern-table
/// accesses through these four operations. `mirroring()` is queried per
/// nametable access because some mappers (MMC1) switch it at runtime.
pub trait Mapper {
    /// Read a byte from the CPU address space ($4018-$FFFF)
    fn cpu_read(&self, addr: u16) -> u8;

    /// Write a byte to the CPU address space ($4018-$FFFF)
    ///
    /// Writes into ROM ranges do not modify ROM but may drive mapper
    /// registers (bank switching).
    fn cpu_write(&mut self, addr: u16, data: u8);

    /// Read a byte from the PPU address space ($0000-$1FFF)
    fn ppu_read(&self, addr: u16) -> u8;

    /// Write a byte to the PPU address space ($0000-$1FFF)
    ///
    /// Honored for CHR-RAM, silently ignored for CHR-ROM.
    fn ppu_write(&mut self, addr: u16, data: u8);

    /// The current nametable mirroring arrangement
    fn mirroring(&self) -> Mirroring;
}

/// Create a mapper instance for the cartridge's mapper id
///
/// # Errors
/// Returns `INesError::UnsupportedMapper` when no implementation exists for
/// the cartridge's mapper number.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, INesError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge))),
        1 => Ok(Box::new(Mapper1::new(cartridge))),
        2 => Ok(Box::new(Mapper2::new(cartridge))),
        3 => Ok(Box::new(Mapper3::new(cartridge))),
        id => Err(INesError::UnsupportedMapper(id)),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::test_cartridge;
    use super::*;

    #[test]
    fn test_known_mappers_create() {
        for id in 0..=3 {
            let cartridge = test_cartridge(id, 2, 1, Mirroring::Horizontal);
            assert!(create_mapper(cartridge).is_ok(), "mapper {} should exist", id);
        }
    }

    #[test]
    fn test_unsupported_mapper() {
        let cartridge = test_cartridge(4, 2, 1, Mirroring::Horizontal);
        let result = create_mapper(cartridge);
        assert!(matches!(result, Err(INesError::UnsupportedMapper(4))));
    }

    #[test]
    fn test_mapper_reports_header_mirroring() {
        let cartridge = test_cartridge(0, 1, 1, Mirroring::Vertical);
        let mapper = create_mapper(cartridge).unwrap();
        assert_eq!(mapper.mirroring(), Mirroring::Vertical);
    }
}
