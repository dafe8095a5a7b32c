// Load and store instructions for the 6502 CPU

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// LDA - Load Accumulator
    ///
    /// Flags affected: Z, N
    pub fn lda(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.a = self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// LDX - Load X Register
    ///
    /// Flags affected: Z, N
    pub fn ldx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.x = self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.x);
    }

    /// LDY - Load Y Register
    ///
    /// Flags affected: Z, N
    pub fn ldy(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        self.y = self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.y);
    }

    /// STA - Store Accumulator
    ///
    /// Flags affected: none
    pub fn sta(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.a);
    }

    /// STX - Store X Register
    ///
    /// Flags affected: none
    pub fn stx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.x);
    }

    /// STY - Store Y Register
    ///
    /// Flags affected: none
    pub fn sty(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lda_sets_flags() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.lda(&mut bus, &AddressingResult::immediate(0x00));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());

        cpu.lda(&mut bus, &AddressingResult::immediate(0x80));
        assert!(cpu.get_negative());
        assert!(!cpu.get_zero());
    }

    #[test]
    fn test_lda_from_memory() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.write(0x0010, 0x42);

        cpu.lda(&mut bus, &AddressingResult::new(0x0010));
        assert_eq!(cpu.a, 0x42);
    }

    #[test]
    fn test_ldx_ldy() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();

        cpu.ldx(&mut bus, &AddressingResult::immediate(0x11));
        cpu.ldy(&mut bus, &AddressingResult::immediate(0x22));
        assert_eq!(cpu.x, 0x11);
        assert_eq!(cpu.y, 0x22);
    }

    #[test]
    fn test_stores_do_not_touch_flags() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x42;
        cpu.x = 0x11;
        cpu.y = 0x22;
        let status = cpu.status;

        cpu.sta(&mut bus, &AddressingResult::new(0x0010));
        cpu.stx(&mut bus, &AddressingResult::new(0x0011));
        cpu.sty(&mut bus, &AddressingResult::new(0x0012));

        assert_eq!(bus.read(0x0010), 0x42);
        assert_eq!(bus.read(0x0011), 0x11);
        assert_eq!(bus.read(0x0012), 0x22);
        assert_eq!(cpu.status, status);
    }
}
