// Shift and rotate instructions for the 6502 CPU
//
// Each comes in an accumulator form and memory forms; the memory forms
// read-modify-write through the effective address. Carry receives the bit
// shifted out.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// ASL - Arithmetic Shift Left
    ///
    /// C <- bit 7, bit 0 <- 0.
    ///
    /// Flags affected: C, Z, N
    pub fn asl(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = if accumulator {
            self.a
        } else {
            bus.read(addr_result.address)
        };

        self.set_carry(value & 0x80 != 0);
        let result = value << 1;

        if accumulator {
            self.a = result;
        } else {
            bus.write(addr_result.address, result);
        }
        self.update_zero_and_negative_flags(result);
    }

    /// LSR - Logical Shift Right
    ///
    /// C <- bit 0, bit 7 <- 0.
    ///
    /// Flags affected: C, Z, N (N always clear)
    pub fn lsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = if accumulator {
            self.a
        } else {
            bus.read(addr_result.address)
        };

        self.set_carry(value & 0x01 != 0);
        let result = value >> 1;

        if accumulator {
            self.a = result;
        } else {
            bus.write(addr_result.address, result);
        }
        self.update_zero_and_negative_flags(result);
    }

    /// ROL - Rotate Left through Carry
    ///
    /// C <- bit 7, bit 0 <- old C.
    ///
    /// Flags affected: C, Z, N
    pub fn rol(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = if accumulator {
            self.a
        } else {
            bus.read(addr_result.address)
        };

        let carry_in = self.get_carry() as u8;
        self.set_carry(value & 0x80 != 0);
        let result = (value << 1) | carry_in;

        if accumulator {
            self.a = result;
        } else {
            bus.write(addr_result.address, result);
        }
        self.update_zero_and_negative_flags(result);
    }

    /// ROR - Rotate Right through Carry
    ///
    /// C <- bit 0, bit 7 <- old C.
    ///
    /// Flags affected: C, Z, N
    pub fn ror(&mut self, bus: &mut Bus, addr_result: &AddressingResult, accumulator: bool) {
        let value = if accumulator {
            self.a
        } else {
            bus.read(addr_result.address)
        };

        let carry_in = (self.get_carry() as u8) << 7;
        self.set_carry(value & 0x01 != 0);
        let result = (value >> 1) | carry_in;

        if accumulator {
            self.a = result;
        } else {
            bus.write(addr_result.address, result);
        }
        self.update_zero_and_negative_flags(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asl_accumulator_carry_out() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x81;

        cpu.asl(&mut bus, &AddressingResult::new(0), true);

        assert_eq!(cpu.a, 0x02);
        assert!(cpu.get_carry(), "bit 7 shifted into carry");
    }

    #[test]
    fn test_asl_memory() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.write(0x0010, 0x40);

        cpu.asl(&mut bus, &AddressingResult::new(0x0010), false);

        assert_eq!(bus.read(0x0010), 0x80);
        assert!(!cpu.get_carry());
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_lsr_carry_and_zero() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x01;

        cpu.lsr(&mut bus, &AddressingResult::new(0), true);

        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_carry());
        assert!(cpu.get_zero());
        assert!(!cpu.get_negative(), "LSR cannot produce a negative result");
    }

    #[test]
    fn test_rol_through_carry() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x80;
        cpu.set_carry(true);

        cpu.rol(&mut bus, &AddressingResult::new(0), true);

        assert_eq!(cpu.a, 0x01, "carry rotated into bit 0");
        assert!(cpu.get_carry(), "bit 7 rotated out");
    }

    #[test]
    fn test_ror_through_carry() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        cpu.a = 0x01;
        cpu.set_carry(true);

        cpu.ror(&mut bus, &AddressingResult::new(0), true);

        assert_eq!(cpu.a, 0x80, "carry rotated into bit 7");
        assert!(cpu.get_carry(), "bit 0 rotated out");
        assert!(cpu.get_negative());
    }
}
