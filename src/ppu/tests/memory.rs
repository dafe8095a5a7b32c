//! PPU memory tests: nametable mirroring arrangements, palette mirroring,
//! pattern-table access through the mapper.

use super::*;

// ========================================
// Nametable mirroring
// ========================================

#[test]
fn test_horizontal_mirroring_pairs() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Horizontal);

    ppu.write_ppu_memory(0x2000, 0x11);
    ppu.write_ppu_memory(0x2800, 0x22);

    // {0,1} share bank 0, {2,3} share bank 1
    assert_eq!(ppu.read_ppu_memory(0x2400), 0x11);
    assert_eq!(ppu.read_ppu_memory(0x2C00), 0x22);
    assert_ne!(ppu.read_ppu_memory(0x2000), ppu.read_ppu_memory(0x2800));
}

#[test]
fn test_vertical_mirroring_pairs() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Vertical);

    ppu.write_ppu_memory(0x2000, 0x11);
    ppu.write_ppu_memory(0x2400, 0x22);

    // {0,2} share bank 0, {1,3} share bank 1
    assert_eq!(ppu.read_ppu_memory(0x2800), 0x11);
    assert_eq!(ppu.read_ppu_memory(0x2C00), 0x22);
}

#[test]
fn test_single_screen_mirroring() {
    let mut ppu = Ppu::new();

    ppu.set_mirroring(Mirroring::SingleScreenLower);
    ppu.write_ppu_memory(0x2000, 0x33);
    for base in [0x2000u16, 0x2400, 0x2800, 0x2C00] {
        assert_eq!(ppu.read_ppu_memory(base), 0x33, "table at {:04X}", base);
    }

    ppu.set_mirroring(Mirroring::SingleScreenUpper);
    ppu.write_ppu_memory(0x2000, 0x44);
    assert_eq!(
        ppu.read_ppu_memory(0x2C00),
        0x44,
        "upper bank shared by all tables"
    );
}

#[test]
fn test_mirroring_consistency_across_offsets() {
    // Writes and reads agree through any alias of the same cell
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Vertical);

    for offset in [0x0000u16, 0x0155, 0x03FF] {
        let value = (offset & 0xFF) as u8 ^ 0xA5;
        ppu.write_ppu_memory(0x2000 + offset, value);
        assert_eq!(ppu.read_ppu_memory(0x2800 + offset), value);
    }
}

#[test]
fn test_3000_region_mirrors_nametables() {
    let mut ppu = Ppu::new();
    ppu.set_mirroring(Mirroring::Horizontal);

    ppu.write_ppu_memory(0x2123, 0x99);
    assert_eq!(ppu.read_ppu_memory(0x3123), 0x99);

    ppu.write_ppu_memory(0x3456, 0x77);
    assert_eq!(ppu.read_ppu_memory(0x2456), 0x77);
}

#[test]
fn test_mirroring_follows_mapper_at_runtime() {
    // MMC1 switches mirroring through its control register; the PPU must
    // see the change without re-attaching the mapper
    let mapper = create_mapper(chr_ram_cartridge(1, Mirroring::Horizontal)).unwrap();
    let mapper = Rc::new(RefCell::new(mapper));

    let mut ppu = Ppu::new();
    ppu.set_mapper(mapper.clone());

    // Control = 0b00010: vertical mirroring, written serially LSB first
    for bit in [0u8, 1, 0, 0, 0] {
        mapper.borrow_mut().cpu_write(0x8000, bit);
    }

    ppu.write_ppu_memory(0x2000, 0x5A);
    assert_eq!(
        ppu.read_ppu_memory(0x2800),
        0x5A,
        "vertical pairing after the MMC1 switch"
    );
}

// ========================================
// Palette RAM
// ========================================

#[test]
fn test_palette_backdrop_aliases() {
    let mut ppu = Ppu::new();

    // $3F10/$14/$18/$1C alias $3F00/$04/$08/$0C
    ppu.write_ppu_memory(0x3F10, 0x2A);
    assert_eq!(ppu.read_ppu_memory(0x3F00), 0x2A);

    ppu.write_ppu_memory(0x3F04, 0x1B);
    assert_eq!(ppu.read_ppu_memory(0x3F14), 0x1B);
}

#[test]
fn test_palette_mirrors_every_32_bytes() {
    let mut ppu = Ppu::new();

    ppu.write_ppu_memory(0x3F01, 0x15);
    assert_eq!(ppu.read_ppu_memory(0x3F21), 0x15);
    assert_eq!(ppu.read_ppu_memory(0x3FE1), 0x15);
}

#[test]
fn test_non_backdrop_sprite_entries_distinct() {
    let mut ppu = Ppu::new();

    ppu.write_ppu_memory(0x3F01, 0x11);
    ppu.write_ppu_memory(0x3F11, 0x22);

    assert_eq!(ppu.read_ppu_memory(0x3F01), 0x11);
    assert_eq!(ppu.read_ppu_memory(0x3F11), 0x22, "only entry 0 aliases");
}

// ========================================
// Pattern tables (mapper)
// ========================================

#[test]
fn test_pattern_table_through_chr_ram() {
    let mut ppu = ppu_with_chr_ram();

    ppu.write_ppu_memory(0x0000, 0x3C);
    ppu.write_ppu_memory(0x1FFF, 0xC3);

    assert_eq!(ppu.read_ppu_memory(0x0000), 0x3C);
    assert_eq!(ppu.read_ppu_memory(0x1FFF), 0xC3);
}

#[test]
fn test_pattern_table_without_mapper_reads_zero() {
    let mut ppu = Ppu::new();

    ppu.write_ppu_memory(0x0000, 0xFF);
    assert_eq!(ppu.read_ppu_memory(0x0000), 0, "no cartridge attached");
}

#[test]
fn test_addresses_fold_into_14_bits() {
    let mut ppu = Ppu::new();

    ppu.write_ppu_memory(0x2005, 0x66);
    assert_eq!(ppu.read_ppu_memory(0x6005), 0x66, "$4000+ mirrors down");
}
