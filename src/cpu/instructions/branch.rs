// Branch instructions for the 6502 CPU
//
// All branches use Relative addressing. A branch not taken costs nothing
// beyond the base 2 cycles; a taken branch adds 1, and 1 more when the
// target lies in a different page than the instruction that follows.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    /// Shared branch core: jump when the condition holds
    ///
    /// Returns the extra cycles consumed (0, 1 or 2).
    fn branch(&mut self, addr_result: &AddressingResult, condition: bool) -> u8 {
        if !condition {
            return 0;
        }

        self.pc = addr_result.address;
        1 + addr_result.page_crossed as u8
    }

    /// BCC - Branch if Carry Clear
    pub fn bcc(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(addr_result, !self.get_flag(flags::CARRY))
    }

    /// BCS - Branch if Carry Set
    pub fn bcs(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(addr_result, self.get_flag(flags::CARRY))
    }

    /// BEQ - Branch if Equal (Z set)
    pub fn beq(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(addr_result, self.get_flag(flags::ZERO))
    }

    /// BNE - Branch if Not Equal (Z clear)
    pub fn bne(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(addr_result, !self.get_flag(flags::ZERO))
    }

    /// BMI - Branch if Minus (N set)
    pub fn bmi(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(addr_result, self.get_flag(flags::NEGATIVE))
    }

    /// BPL - Branch if Plus (N clear)
    pub fn bpl(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(addr_result, !self.get_flag(flags::NEGATIVE))
    }

    /// BVC - Branch if Overflow Clear
    pub fn bvc(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(addr_result, !self.get_flag(flags::OVERFLOW))
    }

    /// BVS - Branch if Overflow Set
    pub fn bvs(&mut self, _bus: &mut Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(addr_result, self.get_flag(flags::OVERFLOW))
    }
}
