// Stack operation instructions for the 6502 CPU

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    /// PHA - Push Accumulator
    ///
    /// Flags affected: none
    pub fn pha(&mut self, bus: &mut Bus, _addr_result: &AddressingResult) {
        self.stack_push(bus, self.a);
    }

    /// PLA - Pull Accumulator
    ///
    /// Flags affected: Z, N
    pub fn pla(&mut self, bus: &mut Bus, _addr_result: &AddressingResult) {
        self.a = self.stack_pop(bus);
        self.update_zero_and_negative_flags(self.a);
    }

    /// PHP - Push Processor Status
    ///
    /// The pushed copy always carries B and UNUSED set; the live status
    /// register is unchanged.
    pub fn php(&mut self, bus: &mut Bus, _addr_result: &AddressingResult) {
        let status_to_push = self.status | flags::BREAK | flags::UNUSED;
        self.stack_push(bus, status_to_push);
    }

    /// PLP - Pull Processor Status
    ///
    /// UNUSED is forced on and the B bit from the stack is discarded; B is
    /// not a real flag in the register, only in pushed copies.
    pub fn plp(&mut self, bus: &mut Bus, _addr_result: &AddressingResult) {
        let status_from_stack = self.stack_pop(bus);
        let current_b = self.get_flag(flags::BREAK);

        self.status = status_from_stack | flags::UNUSED;
        self.update_flag(flags::BREAK, current_b);
    }

    /// TXS - Transfer X to Stack Pointer
    ///
    /// Flags affected: none (the lone transfer that sets no flags)
    pub fn txs(&mut self) {
        self.sp = self.x;
    }

    /// TSX - Transfer Stack Pointer to X
    ///
    /// Flags affected: Z, N
    pub fn tsx(&mut self) {
        self.x = self.sp;
        self.update_zero_and_negative_flags(self.x);
    }
}
