// Opcode decode table for the 6502 CPU
//
// A static 256-entry table indexed by the raw opcode byte. Each entry
// carries the mnemonic, addressing mode, encoded length, base cycle count
// and whether a page crossing during address calculation adds a cycle.
//
// Slots not covered by the 151 official instructions (including every
// opcode with both low bits set) hold a 2-cycle NOP sentinel marked
// unofficial; execution degrades to a no-op with a diagnostic.

use super::addressing::AddressingMode;

/// One decoded instruction record
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// The opcode byte this entry describes
    pub opcode: u8,
    /// Three-letter mnemonic ("???" for unofficial slots)
    pub mnemonic: &'static str,
    /// Addressing mode
    pub mode: AddressingMode,
    /// Encoded instruction length in bytes (opcode + operand)
    pub bytes: u8,
    /// Base cycle count
    pub cycles: u8,
    /// Whether a page cross during addressing adds one cycle
    pub page_cycle: bool,
    /// Whether this is an official 6502 instruction
    pub official: bool,
}

/// Encoded length implied by the addressing mode
const fn operand_bytes(mode: AddressingMode) -> u8 {
    match mode {
        AddressingMode::Implied | AddressingMode::Accumulator => 1,
        AddressingMode::Immediate
        | AddressingMode::ZeroPage
        | AddressingMode::ZeroPageX
        | AddressingMode::ZeroPageY
        | AddressingMode::Relative
        | AddressingMode::IndexedIndirect
        | AddressingMode::IndirectIndexed => 2,
        AddressingMode::Absolute
        | AddressingMode::AbsoluteX
        | AddressingMode::AbsoluteY
        | AddressingMode::Indirect => 3,
    }
}

/// Build an official instruction entry
const fn op(
    opcode: u8,
    mnemonic: &'static str,
    mode: AddressingMode,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        opcode,
        mnemonic,
        mode,
        bytes: operand_bytes(mode),
        cycles,
        page_cycle,
        official: true,
    }
}

/// Build the unofficial-opcode sentinel for a slot
const fn illegal(opcode: u8) -> OpcodeInfo {
    OpcodeInfo {
        opcode,
        mnemonic: "???",
        mode: AddressingMode::Implied,
        bytes: 1,
        cycles: 2,
        page_cycle: false,
        official: false,
    }
}

/// The 256-entry decode table, indexed by the raw opcode byte
pub static OPCODE_TABLE: [OpcodeInfo; 256] = build_opcode_table();

/// Look up the instruction record for an opcode
#[inline]
pub fn decode(opcode: u8) -> &'static OpcodeInfo {
    &OPCODE_TABLE[opcode as usize]
}

const fn build_opcode_table() -> [OpcodeInfo; 256] {
    use AddressingMode::*;

    let mut t = [illegal(0); 256];

    // Seed every slot with its own sentinel so decode(op).opcode == op
    // holds for unofficial opcodes too.
    let mut i = 0;
    while i < 256 {
        t[i] = illegal(i as u8);
        i += 1;
    }

    // Load/Store
    t[0xA9] = op(0xA9, "LDA", Immediate, 2, false);
    t[0xA5] = op(0xA5, "LDA", ZeroPage, 3, false);
    t[0xB5] = op(0xB5, "LDA", ZeroPageX, 4, false);
    t[0xAD] = op(0xAD, "LDA", Absolute, 4, false);
    t[0xBD] = op(0xBD, "LDA", AbsoluteX, 4, true);
    t[0xB9] = op(0xB9, "LDA", AbsoluteY, 4, true);
    t[0xA1] = op(0xA1, "LDA", IndexedIndirect, 6, false);
    t[0xB1] = op(0xB1, "LDA", IndirectIndexed, 5, true);

    t[0xA2] = op(0xA2, "LDX", Immediate, 2, false);
    t[0xA6] = op(0xA6, "LDX", ZeroPage, 3, false);
    t[0xB6] = op(0xB6, "LDX", ZeroPageY, 4, false);
    t[0xAE] = op(0xAE, "LDX", Absolute, 4, false);
    t[0xBE] = op(0xBE, "LDX", AbsoluteY, 4, true);

    t[0xA0] = op(0xA0, "LDY", Immediate, 2, false);
    t[0xA4] = op(0xA4, "LDY", ZeroPage, 3, false);
    t[0xB4] = op(0xB4, "LDY", ZeroPageX, 4, false);
    t[0xAC] = op(0xAC, "LDY", Absolute, 4, false);
    t[0xBC] = op(0xBC, "LDY", AbsoluteX, 4, true);

    t[0x85] = op(0x85, "STA", ZeroPage, 3, false);
    t[0x95] = op(0x95, "STA", ZeroPageX, 4, false);
    t[0x8D] = op(0x8D, "STA", Absolute, 4, false);
    t[0x9D] = op(0x9D, "STA", AbsoluteX, 5, false);
    t[0x99] = op(0x99, "STA", AbsoluteY, 5, false);
    t[0x81] = op(0x81, "STA", IndexedIndirect, 6, false);
    t[0x91] = op(0x91, "STA", IndirectIndexed, 6, false);

    t[0x86] = op(0x86, "STX", ZeroPage, 3, false);
    t[0x96] = op(0x96, "STX", ZeroPageY, 4, false);
    t[0x8E] = op(0x8E, "STX", Absolute, 4, false);

    t[0x84] = op(0x84, "STY", ZeroPage, 3, false);
    t[0x94] = op(0x94, "STY", ZeroPageX, 4, false);
    t[0x8C] = op(0x8C, "STY", Absolute, 4, false);

    // Arithmetic
    t[0x69] = op(0x69, "ADC", Immediate, 2, false);
    t[0x65] = op(0x65, "ADC", ZeroPage, 3, false);
    t[0x75] = op(0x75, "ADC", ZeroPageX, 4, false);
    t[0x6D] = op(0x6D, "ADC", Absolute, 4, false);
    t[0x7D] = op(0x7D, "ADC", AbsoluteX, 4, true);
    t[0x79] = op(0x79, "ADC", AbsoluteY, 4, true);
    t[0x61] = op(0x61, "ADC", IndexedIndirect, 6, false);
    t[0x71] = op(0x71, "ADC", IndirectIndexed, 5, true);

    t[0xE9] = op(0xE9, "SBC", Immediate, 2, false);
    t[0xE5] = op(0xE5, "SBC", ZeroPage, 3, false);
    t[0xF5] = op(0xF5, "SBC", ZeroPageX, 4, false);
    t[0xED] = op(0xED, "SBC", Absolute, 4, false);
    t[0xFD] = op(0xFD, "SBC", AbsoluteX, 4, true);
    t[0xF9] = op(0xF9, "SBC", AbsoluteY, 4, true);
    t[0xE1] = op(0xE1, "SBC", IndexedIndirect, 6, false);
    t[0xF1] = op(0xF1, "SBC", IndirectIndexed, 5, true);

    t[0xE6] = op(0xE6, "INC", ZeroPage, 5, false);
    t[0xF6] = op(0xF6, "INC", ZeroPageX, 6, false);
    t[0xEE] = op(0xEE, "INC", Absolute, 6, false);
    t[0xFE] = op(0xFE, "INC", AbsoluteX, 7, false);

    t[0xC6] = op(0xC6, "DEC", ZeroPage, 5, false);
    t[0xD6] = op(0xD6, "DEC", ZeroPageX, 6, false);
    t[0xCE] = op(0xCE, "DEC", Absolute, 6, false);
    t[0xDE] = op(0xDE, "DEC", AbsoluteX, 7, false);

    t[0xE8] = op(0xE8, "INX", Implied, 2, false);
    t[0xC8] = op(0xC8, "INY", Implied, 2, false);
    t[0xCA] = op(0xCA, "DEX", Implied, 2, false);
    t[0x88] = op(0x88, "DEY", Implied, 2, false);

    // Logic
    t[0x29] = op(0x29, "AND", Immediate, 2, false);
    t[0x25] = op(0x25, "AND", ZeroPage, 3, false);
    t[0x35] = op(0x35, "AND", ZeroPageX, 4, false);
    t[0x2D] = op(0x2D, "AND", Absolute, 4, false);
    t[0x3D] = op(0x3D, "AND", AbsoluteX, 4, true);
    t[0x39] = op(0x39, "AND", AbsoluteY, 4, true);
    t[0x21] = op(0x21, "AND", IndexedIndirect, 6, false);
    t[0x31] = op(0x31, "AND", IndirectIndexed, 5, true);

    t[0x09] = op(0x09, "ORA", Immediate, 2, false);
    t[0x05] = op(0x05, "ORA", ZeroPage, 3, false);
    t[0x15] = op(0x15, "ORA", ZeroPageX, 4, false);
    t[0x0D] = op(0x0D, "ORA", Absolute, 4, false);
    t[0x1D] = op(0x1D, "ORA", AbsoluteX, 4, true);
    t[0x19] = op(0x19, "ORA", AbsoluteY, 4, true);
    t[0x01] = op(0x01, "ORA", IndexedIndirect, 6, false);
    t[0x11] = op(0x11, "ORA", IndirectIndexed, 5, true);

    t[0x49] = op(0x49, "EOR", Immediate, 2, false);
    t[0x45] = op(0x45, "EOR", ZeroPage, 3, false);
    t[0x55] = op(0x55, "EOR", ZeroPageX, 4, false);
    t[0x4D] = op(0x4D, "EOR", Absolute, 4, false);
    t[0x5D] = op(0x5D, "EOR", AbsoluteX, 4, true);
    t[0x59] = op(0x59, "EOR", AbsoluteY, 4, true);
    t[0x41] = op(0x41, "EOR", IndexedIndirect, 6, false);
    t[0x51] = op(0x51, "EOR", IndirectIndexed, 5, true);

    t[0x24] = op(0x24, "BIT", ZeroPage, 3, false);
    t[0x2C] = op(0x2C, "BIT", Absolute, 4, false);

    // Shift/Rotate
    t[0x0A] = op(0x0A, "ASL", Accumulator, 2, false);
    t[0x06] = op(0x06, "ASL", ZeroPage, 5, false);
    t[0x16] = op(0x16, "ASL", ZeroPageX, 6, false);
    t[0x0E] = op(0x0E, "ASL", Absolute, 6, false);
    t[0x1E] = op(0x1E, "ASL", AbsoluteX, 7, false);

    t[0x4A] = op(0x4A, "LSR", Accumulator, 2, false);
    t[0x46] = op(0x46, "LSR", ZeroPage, 5, false);
    t[0x56] = op(0x56, "LSR", ZeroPageX, 6, false);
    t[0x4E] = op(0x4E, "LSR", Absolute, 6, false);
    t[0x5E] = op(0x5E, "LSR", AbsoluteX, 7, false);

    t[0x2A] = op(0x2A, "ROL", Accumulator, 2, false);
    t[0x26] = op(0x26, "ROL", ZeroPage, 5, false);
    t[0x36] = op(0x36, "ROL", ZeroPageX, 6, false);
    t[0x2E] = op(0x2E, "ROL", Absolute, 6, false);
    t[0x3E] = op(0x3E, "ROL", AbsoluteX, 7, false);

    t[0x6A] = op(0x6A, "ROR", Accumulator, 2, false);
    t[0x66] = op(0x66, "ROR", ZeroPage, 5, false);
    t[0x76] = op(0x76, "ROR", ZeroPageX, 6, false);
    t[0x6E] = op(0x6E, "ROR", Absolute, 6, false);
    t[0x7E] = op(0x7E, "ROR", AbsoluteX, 7, false);

    // Compare
    t[0xC9] = op(0xC9, "CMP", Immediate, 2, false);
    t[0xC5] = op(0xC5, "CMP", ZeroPage, 3, false);
    t[0xD5] = op(0xD5, "CMP", ZeroPageX, 4, false);
    t[0xCD] = op(0xCD, "CMP", Absolute, 4, false);
    t[0xDD] = op(0xDD, "CMP", AbsoluteX, 4, true);
    t[0xD9] = op(0xD9, "CMP", AbsoluteY, 4, true);
    t[0xC1] = op(0xC1, "CMP", IndexedIndirect, 6, false);
    t[0xD1] = op(0xD1, "CMP", IndirectIndexed, 5, true);

    t[0xE0] = op(0xE0, "CPX", Immediate, 2, false);
    t[0xE4] = op(0xE4, "CPX", ZeroPage, 3, false);
    t[0xEC] = op(0xEC, "CPX", Absolute, 4, false);

    t[0xC0] = op(0xC0, "CPY", Immediate, 2, false);
    t[0xC4] = op(0xC4, "CPY", ZeroPage, 3, false);
    t[0xCC] = op(0xCC, "CPY", Absolute, 4, false);

    // Branches (taken/page penalties are added by the branch handlers)
    t[0x90] = op(0x90, "BCC", Relative, 2, false);
    t[0xB0] = op(0xB0, "BCS", Relative, 2, false);
    t[0xF0] = op(0xF0, "BEQ", Relative, 2, false);
    t[0x30] = op(0x30, "BMI", Relative, 2, false);
    t[0xD0] = op(0xD0, "BNE", Relative, 2, false);
    t[0x10] = op(0x10, "BPL", Relative, 2, false);
    t[0x50] = op(0x50, "BVC", Relative, 2, false);
    t[0x70] = op(0x70, "BVS", Relative, 2, false);

    // Jump/Subroutine
    t[0x4C] = op(0x4C, "JMP", Absolute, 3, false);
    t[0x6C] = op(0x6C, "JMP", Indirect, 5, false);
    t[0x20] = op(0x20, "JSR", Absolute, 6, false);
    t[0x60] = op(0x60, "RTS", Implied, 6, false);

    // Stack
    t[0x48] = op(0x48, "PHA", Implied, 3, false);
    t[0x68] = op(0x68, "PLA", Implied, 4, false);
    t[0x08] = op(0x08, "PHP", Implied, 3, false);
    t[0x28] = op(0x28, "PLP", Implied, 4, false);
    t[0x9A] = op(0x9A, "TXS", Implied, 2, false);
    t[0xBA] = op(0xBA, "TSX", Implied, 2, false);

    // Transfers
    t[0xAA] = op(0xAA, "TAX", Implied, 2, false);
    t[0xA8] = op(0xA8, "TAY", Implied, 2, false);
    t[0x8A] = op(0x8A, "TXA", Implied, 2, false);
    t[0x98] = op(0x98, "TYA", Implied, 2, false);

    // Flags
    t[0x18] = op(0x18, "CLC", Implied, 2, false);
    t[0xD8] = op(0xD8, "CLD", Implied, 2, false);
    t[0x58] = op(0x58, "CLI", Implied, 2, false);
    t[0xB8] = op(0xB8, "CLV", Implied, 2, false);
    t[0x38] = op(0x38, "SEC", Implied, 2, false);
    t[0xF8] = op(0xF8, "SED", Implied, 2, false);
    t[0x78] = op(0x78, "SEI", Implied, 2, false);

    // Miscellaneous
    t[0x00] = op(0x00, "BRK", Implied, 7, false);
    t[0x40] = op(0x40, "RTI", Implied, 6, false);
    t[0xEA] = op(0xEA, "NOP", Implied, 2, false);

    t
}
