// PPU constants

/// Size of one nametable in bytes (1KB)
pub(super) const NAMETABLE_SIZE: usize = 1024;

/// Size of palette RAM in bytes
pub(super) const PALETTE_SIZE: usize = 32;

/// Screen width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Screen height in pixels
pub const SCREEN_HEIGHT: usize = 240;

/// Total number of pixels in one frame
pub const FRAME_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

// ========================================
// PPU Timing Constants (NTSC)
// ========================================

/// Number of PPU dots per scanline
pub(super) const DOTS_PER_SCANLINE: u16 = 341;

/// Pre-render scanline
pub(super) const PRERENDER_SCANLINE: i16 = -1;

/// First visible scanline
pub(super) const FIRST_VISIBLE_SCANLINE: i16 = 0;

/// Last visible scanline
pub(super) const LAST_VISIBLE_SCANLINE: i16 = 239;

/// Post-render (idle) scanline
pub(super) const POSTRENDER_SCANLINE: i16 = 240;

/// First VBlank scanline; the VBlank flag is raised at dot 1
pub(super) const FIRST_VBLANK_SCANLINE: i16 = 241;

/// Last VBlank scanline
pub(super) const LAST_VBLANK_SCANLINE: i16 = 260;

// ========================================
// PPUCTRL bits
// ========================================

/// VRAM address increment select (0: +1, 1: +32)
pub(super) const CTRL_INCREMENT_32: u8 = 0x04;

/// Sprite pattern table select for 8x8 sprites
pub(super) const CTRL_SPRITE_TABLE: u8 = 0x08;

/// Background pattern table select
pub(super) const CTRL_BACKGROUND_TABLE: u8 = 0x10;

/// Sprite size (0: 8x8, 1: 8x16)
pub(super) const CTRL_SPRITE_SIZE: u8 = 0x20;

/// Generate NMI at the start of VBlank
pub(super) const CTRL_NMI_ENABLE: u8 = 0x80;

// ========================================
// PPUMASK bits
// ========================================

/// Grayscale output
pub(super) const MASK_GRAYSCALE: u8 = 0x01;

/// Show background in the leftmost 8 pixels
pub(super) const MASK_BACKGROUND_LEFT: u8 = 0x02;

/// Show sprites in the leftmost 8 pixels
pub(super) const MASK_SPRITE_LEFT: u8 = 0x04;

/// Background rendering enable
pub(super) const MASK_SHOW_BACKGROUND: u8 = 0x08;

/// Sprite rendering enable
pub(super) const MASK_SHOW_SPRITES: u8 = 0x10;

// ========================================
// PPUSTATUS bits
// ========================================

/// Sprite overflow flag
pub(super) const STATUS_SPRITE_OVERFLOW: u8 = 0x20;

/// Sprite 0 hit flag
pub(super) const STATUS_SPRITE_ZERO_HIT: u8 = 0x40;

/// VBlank flag
pub(super) const STATUS_VBLANK: u8 = 0x80;
