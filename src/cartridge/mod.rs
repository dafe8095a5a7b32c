// Cartridge module - iNES ROM loading and mapper interface
//
// This module parses the iNES container format and exposes the PRG/CHR
// regions to the mapper layer. The cartridge owns both regions for its
// lifetime; the mapper created from it takes them over at insertion.
//
// # iNES Format
//
// ```text
// Bytes 0-3:  Magic "NES\x1A" (4E 45 53 1A)
// Byte 4:     PRG-ROM bank count (16KB units)
// Byte 5:     CHR-ROM bank count (8KB units, 0 = 8KB CHR-RAM)
// Byte 6:     Flags 6 (mirroring, battery, trainer, four-screen, mapper low)
// Byte 7:     Flags 7 (VS/PlayChoice, iNES version, mapper high)
// Byte 8:     Flags 8 (PRG-RAM size)
// Byte 9:     Flags 9 (TV system)
// Byte 10:    Flags 10 (TV system/PRG-RAM/bus conflicts)
// Bytes 11-15: Padding
// Offset 16:  Trainer (512 bytes, if present), then PRG-ROM, then CHR-ROM
// ```

pub mod mappers;

pub use mappers::{create_mapper, Mapper};

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// iNES magic bytes: "NES" followed by MS-DOS EOF
const INES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Size of the iNES header in bytes
const HEADER_SIZE: usize = 16;

/// Size of an optional trainer blob
const TRAINER_SIZE: usize = 512;

/// Size of one PRG-ROM bank (16KB)
pub const PRG_BANK_SIZE: usize = 16 * 1024;

/// Size of one CHR-ROM bank (8KB)
pub const CHR_BANK_SIZE: usize = 8 * 1024;

/// Errors produced while loading a cartridge
#[derive(Debug)]
pub enum INesError {
    /// Magic number mismatch or truncated image
    InvalidCartridge,
    /// No mapper implementation for this mapper id
    UnsupportedMapper(u8),
    /// File open/read failure
    Io(io::Error),
}

impl fmt::Display for INesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            INesError::InvalidCartridge => {
                write!(f, "not a valid iNES cartridge image")
            }
            INesError::UnsupportedMapper(id) => {
                write!(f, "mapper {} is not supported", id)
            }
            INesError::Io(err) => {
                write!(f, "I/O error while loading cartridge: {}", err)
            }
        }
    }
}

impl std::error::Error for INesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            INesError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for INesError {
    fn from(err: io::Error) -> Self {
        INesError::Io(err)
    }
}

/// Nametable mirroring arrangement
///
/// Determines how the four logical nametables at $2000-$2FFF map onto the
/// 2KB of internal VRAM. NROM/CNROM fix this from the header; MMC1 switches
/// it at runtime through its control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    /// Horizontal arrangement: tables {0,1} share bank 0, {2,3} share bank 1
    Horizontal,
    /// Vertical arrangement: tables {0,2} share bank 0, {1,3} share bank 1
    Vertical,
    /// One-screen, lower bank: all tables map to bank 0
    SingleScreenLower,
    /// One-screen, upper bank: all tables map to bank 1
    SingleScreenUpper,
    /// Four-screen VRAM (cartridge-resident RAM; approximated with 2KB)
    FourScreen,
}

/// Parsed iNES header fields
///
/// Raw header data decoded into named fields. Kept around for diagnostics;
/// the interesting values are copied onto the Cartridge itself.
#[derive(Debug, Clone, Copy)]
pub struct INesHeader {
    /// PRG-ROM bank count (16KB units)
    pub prg_banks: u8,
    /// CHR-ROM bank count (8KB units, 0 means CHR-RAM)
    pub chr_banks: u8,
    /// Mapper id: (flags7 high nibble << 4) | flags6 high nibble
    pub mapper: u8,
    /// Mirroring flag from flags6 bit 0 (0 = horizontal, 1 = vertical)
    pub mirroring_vertical: bool,
    /// Battery-backed PRG-RAM present (flags6 bit 1)
    pub has_battery: bool,
    /// 512-byte trainer present (flags6 bit 2)
    pub has_trainer: bool,
    /// Four-screen VRAM (flags6 bit 3)
    pub four_screen: bool,
    /// iNES version from flags7 bits 2-3 (2 = iNES 2.0)
    pub ines_version: u8,
    /// PRG-RAM size in 8KB units (flags8, 0 means one bank)
    pub prg_ram_size: u8,
    /// TV system from flags9 bit 0 (0 = NTSC, 1 = PAL)
    pub tv_system: u8,
}

impl INesHeader {
    /// Parse the 16-byte iNES header
    ///
    /// # Errors
    /// Returns `INesError::InvalidCartridge` if the magic bytes do not match.
    pub fn parse(data: &[u8]) -> Result<Self, INesError> {
        if data.len() < HEADER_SIZE || data[0..4] != INES_MAGIC {
            return Err(INesError::InvalidCartridge);
        }

        let flags6 = data[6];
        let flags7 = data[7];

        Ok(INesHeader {
            prg_banks: data[4],
            chr_banks: data[5],
            mapper: (flags7 & 0xF0) | (flags6 >> 4),
            mirroring_vertical: flags6 & 0x01 != 0,
            has_battery: flags6 & 0x02 != 0,
            has_trainer: flags6 & 0x04 != 0,
            four_screen: flags6 & 0x08 != 0,
            ines_version: (flags7 >> 2) & 0x03,
            prg_ram_size: data[8],
            tv_system: data[9] & 0x01,
        })
    }

    /// The mirroring arrangement implied by the header flags
    pub fn mirroring(&self) -> Mirroring {
        if self.four_screen {
            Mirroring::FourScreen
        } else if self.mirroring_vertical {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }
}

/// A loaded cartridge: header fields plus owned PRG/CHR regions
///
/// When the header declares zero CHR banks, an 8KB zero-initialized CHR-RAM
/// region is allocated in place of CHR-ROM and `chr_is_ram` is set, so the
/// mapper can honor PPU writes into it.
pub struct Cartridge {
    /// PRG-ROM data (multiple of 16KB)
    pub prg_rom: Vec<u8>,
    /// CHR-ROM data, or an allocated 8KB CHR-RAM region
    pub chr_rom: Vec<u8>,
    /// Whether `chr_rom` is writable CHR-RAM
    pub chr_is_ram: bool,
    /// Trainer data, if the header declared one
    pub trainer: Option<Vec<u8>>,
    /// Mapper id from the header
    pub mapper: u8,
    /// Mirroring arrangement from the header
    pub mirroring: Mirroring,
    /// Battery-backed PRG-RAM flag
    pub has_battery: bool,
}

impl Cartridge {
    /// Parse a cartridge from a raw iNES image
    ///
    /// # Errors
    /// Returns `INesError::InvalidCartridge` on magic mismatch or when the
    /// image is shorter than the bank counts declare.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, INesError> {
        let header = INesHeader::parse(data)?;

        // A cartridge with no PRG-ROM cannot boot
        if header.prg_banks == 0 {
            return Err(INesError::InvalidCartridge);
        }

        let trainer_len = if header.has_trainer { TRAINER_SIZE } else { 0 };
        let prg_len = header.prg_banks as usize * PRG_BANK_SIZE;
        let chr_len = header.chr_banks as usize * CHR_BANK_SIZE;

        let prg_start = HEADER_SIZE + trainer_len;
        let chr_start = prg_start + prg_len;

        if data.len() < chr_start + chr_len {
            return Err(INesError::InvalidCartridge);
        }

        let trainer = if header.has_trainer {
            Some(data[HEADER_SIZE..HEADER_SIZE + TRAINER_SIZE].to_vec())
        } else {
            None
        };

        let prg_rom = data[prg_start..prg_start + prg_len].to_vec();

        // chr_banks == 0 means the board carries CHR-RAM instead of CHR-ROM;
        // allocate the standard 8KB, zero-initialized.
        let (chr_rom, chr_is_ram) = if header.chr_banks == 0 {
            (vec![0u8; CHR_BANK_SIZE], true)
        } else {
            (data[chr_start..chr_start + chr_len].to_vec(), false)
        };

        log::info!(
            "cartridge: mapper {}, {}x16KB PRG, {}x8KB CHR{}, {:?} mirroring{}",
            header.mapper,
            header.prg_banks,
            header.chr_banks,
            if chr_is_ram { " (CHR-RAM)" } else { "" },
            header.mirroring(),
            if header.has_battery { ", battery" } else { "" },
        );
        if header.ines_version == 2 {
            log::info!("cartridge: iNES 2.0 header (extended fields ignored)");
        }

        Ok(Cartridge {
            prg_rom,
            chr_rom,
            chr_is_ram,
            trainer,
            mapper: header.mapper,
            mirroring: header.mirroring(),
            has_battery: header.has_battery,
        })
    }

    /// Load and parse a cartridge from a `.nes` file
    ///
    /// # Errors
    /// Returns `INesError::Io` on file errors, otherwise the parse errors of
    /// [`Cartridge::from_ines_bytes`].
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, INesError> {
        let data = fs::read(path)?;
        Self::from_ines_bytes(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal iNES image in memory
    pub(crate) fn build_ines(
        prg_banks: u8,
        chr_banks: u8,
        flags6: u8,
        flags7: u8,
    ) -> Vec<u8> {
        let mut image = vec![0u8; HEADER_SIZE];
        image[0..4].copy_from_slice(&INES_MAGIC);
        image[4] = prg_banks;
        image[5] = chr_banks;
        image[6] = flags6;
        image[7] = flags7;

        let trainer = flags6 & 0x04 != 0;
        if trainer {
            image.extend_from_slice(&[0u8; TRAINER_SIZE]);
        }
        image.extend(std::iter::repeat(0xAA).take(prg_banks as usize * PRG_BANK_SIZE));
        image.extend(std::iter::repeat(0xBB).take(chr_banks as usize * CHR_BANK_SIZE));
        image
    }

    #[test]
    fn test_header_magic_mismatch() {
        let mut image = build_ines(1, 1, 0x00, 0x00);
        image[0] = 0x00;

        let result = Cartridge::from_ines_bytes(&image);
        assert!(matches!(result, Err(INesError::InvalidCartridge)));
    }

    #[test]
    fn test_zero_prg_banks_rejected() {
        let image = build_ines(0, 1, 0x00, 0x00);
        let result = Cartridge::from_ines_bytes(&image);
        assert!(matches!(result, Err(INesError::InvalidCartridge)));
    }

    #[test]
    fn test_truncated_image_rejected() {
        let image = build_ines(2, 1, 0x00, 0x00);

        // Cut the image short of the declared CHR-ROM size
        let result = Cartridge::from_ines_bytes(&image[..image.len() - 1]);
        assert!(matches!(result, Err(INesError::InvalidCartridge)));
    }

    #[test]
    fn test_basic_parse() {
        let image = build_ines(2, 1, 0x00, 0x00);
        let cartridge = Cartridge::from_ines_bytes(&image).unwrap();

        assert_eq!(cartridge.prg_rom.len(), 2 * PRG_BANK_SIZE);
        assert_eq!(cartridge.chr_rom.len(), CHR_BANK_SIZE);
        assert!(!cartridge.chr_is_ram);
        assert_eq!(cartridge.mapper, 0);
        assert_eq!(cartridge.mirroring, Mirroring::Horizontal);
        assert!(cartridge.trainer.is_none());
        assert_eq!(cartridge.prg_rom[0], 0xAA);
        assert_eq!(cartridge.chr_rom[0], 0xBB);
    }

    #[test]
    fn test_chr_ram_allocation() {
        // chr_banks == 0 means 8KB CHR-RAM, zero-initialized
        let image = build_ines(1, 0, 0x00, 0x00);
        let cartridge = Cartridge::from_ines_bytes(&image).unwrap();

        assert!(cartridge.chr_is_ram);
        assert_eq!(cartridge.chr_rom.len(), CHR_BANK_SIZE);
        assert!(cartridge.chr_rom.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_mirroring_flag() {
        let vertical = Cartridge::from_ines_bytes(&build_ines(1, 1, 0x01, 0x00)).unwrap();
        assert_eq!(vertical.mirroring, Mirroring::Vertical);

        let horizontal = Cartridge::from_ines_bytes(&build_ines(1, 1, 0x00, 0x00)).unwrap();
        assert_eq!(horizontal.mirroring, Mirroring::Horizontal);

        let four_screen = Cartridge::from_ines_bytes(&build_ines(1, 1, 0x08, 0x00)).unwrap();
        assert_eq!(four_screen.mirroring, Mirroring::FourScreen);
    }

    #[test]
    fn test_mapper_id_from_both_nibbles() {
        // flags6 high nibble = 0x2, flags7 high nibble = 0x1 -> mapper 0x12
        let image = build_ines(1, 1, 0x20, 0x10);
        let cartridge = Cartridge::from_ines_bytes(&image).unwrap();
        assert_eq!(cartridge.mapper, 0x12);
    }

    #[test]
    fn test_trainer_offsets_prg() {
        let mut image = build_ines(1, 1, 0x04, 0x00);
        // First PRG byte lives after header + trainer
        image[HEADER_SIZE + TRAINER_SIZE] = 0x42;

        let cartridge = Cartridge::from_ines_bytes(&image).unwrap();
        assert!(cartridge.trainer.is_some());
        assert_eq!(cartridge.trainer.as_ref().unwrap().len(), TRAINER_SIZE);
        assert_eq!(cartridge.prg_rom[0], 0x42);
    }

    #[test]
    fn test_battery_flag() {
        let cartridge = Cartridge::from_ines_bytes(&build_ines(1, 1, 0x02, 0x00)).unwrap();
        assert!(cartridge.has_battery);
    }
}
