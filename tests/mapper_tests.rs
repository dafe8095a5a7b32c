// Mapper integration tests, driven through the bus so address decoding
// and the serial protocols are exercised end-to-end.

mod common;

use common::{build_ines_image, mmc1_with_marked_banks, CHR_BANK, PRG_BANK};
use nescore::cartridge::{Cartridge, INesError};
use nescore::Bus;

/// Serially write a 5-bit MMC1 register value through the bus, LSB first
fn mmc1_serial_write(bus: &mut Bus, addr: u16, value: u8) {
    for bit in 0..5 {
        bus.write(addr, (value >> bit) & 0x01);
    }
}

#[test]
fn test_mmc1_bank_switch_sequence() {
    // Four marked PRG banks; after a reset write, PRG mode is 3
    let mut bus = Bus::new();
    bus.insert_cartridge(mmc1_with_marked_banks(4)).unwrap();

    bus.write(0x8000, 0x80);

    // Serial sequence 01100 (LSB first) into $E000-$FFFF: prg_bank = 0x0C
    for bit in [0u8, 0, 1, 1, 0] {
        bus.write(0xE000, bit);
    }

    assert_eq!(
        bus.read(0x8000),
        1,
        "bank 0x0C wraps to 0x0C mod 4 = bank 0 at $8000"
    );
    assert_eq!(bus.read(0xC000), 4, "last bank fixed at $C000 in mode 3");
}

#[test]
fn test_mmc1_switches_visible_through_cpu_space() {
    let mut bus = Bus::new();
    bus.insert_cartridge(mmc1_with_marked_banks(8)).unwrap();

    bus.write(0x8000, 0x80);

    mmc1_serial_write(&mut bus, 0xE000, 0x05);
    assert_eq!(bus.read(0x8000), 6, "bank 5 at $8000");

    mmc1_serial_write(&mut bus, 0xE000, 0x02);
    assert_eq!(bus.read(0x8000), 3, "bank 2 after a second switch");
    assert_eq!(bus.read(0xC000), 8, "fixed last bank undisturbed");
}

#[test]
fn test_uxrom_bank_switch_through_bus() {
    let mut prg = vec![0u8; 4 * PRG_BANK];
    for bank in 0..4 {
        prg[bank * PRG_BANK] = bank as u8 + 1;
    }
    let image = build_ines_image(&prg, &[], 2, 0);
    let cartridge = Cartridge::from_ines_bytes(&image).unwrap();

    let mut bus = Bus::new();
    bus.insert_cartridge(cartridge).unwrap();

    assert_eq!(bus.read(0xC000), 4, "fixed last bank");

    bus.write(0x8000, 0x02);
    assert_eq!(bus.read(0x8000), 3, "16KB bank switched at $8000");
}

#[test]
fn test_cnrom_chr_switch_through_ppu_space() {
    let mut chr = vec![0u8; 4 * CHR_BANK];
    for bank in 0..4 {
        chr[bank * CHR_BANK] = bank as u8 + 1;
    }
    let image = build_ines_image(&vec![0u8; PRG_BANK], &chr, 3, 0);
    let cartridge = Cartridge::from_ines_bytes(&image).unwrap();

    let mut bus = Bus::new();
    bus.insert_cartridge(cartridge).unwrap();

    assert_eq!(bus.ppu_mut().read_ppu_memory(0x0000), 1);

    bus.write(0x8000, 0x03);
    assert_eq!(bus.ppu_mut().read_ppu_memory(0x0000), 4, "8KB CHR bank 3");
}

#[test]
fn test_unsupported_mapper_rejected_at_insertion() {
    let image = build_ines_image(&vec![0u8; PRG_BANK], &[], 7, 0);
    let cartridge = Cartridge::from_ines_bytes(&image).unwrap();

    let mut bus = Bus::new();
    let result = bus.insert_cartridge(cartridge);

    assert!(matches!(result, Err(INesError::UnsupportedMapper(7))));
}

#[test]
fn test_mmc1_state_survives_reset() {
    let mut bus = Bus::new();
    bus.insert_cartridge(mmc1_with_marked_banks(4)).unwrap();

    bus.write(0x8000, 0x80);
    mmc1_serial_write(&mut bus, 0xE000, 0x02);
    assert_eq!(bus.read(0x8000), 3);

    bus.reset();

    assert_eq!(bus.read(0x8000), 3, "latched MMC1 banks survive reset");
}
