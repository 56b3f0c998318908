// 256-entry opcode dispatch table for the 6502 instruction set.
//
// Folds the mnemonic/addressing-mode/cycle-count table that hardware
// references usually spread across prose and a cycle-count chart into a
// single static array indexed by opcode byte. `execute_instruction` still
// does the mnemonic dispatch as a match on the opcode, but every piece of
// bookkeeping that doesn't depend on *which* instruction it is (addressing
// mode, base cycle count, instruction length, page-cross penalty) lives
// here instead of being re-derived at call sites.

use crate::cpu::addressing::AddressingMode;

/// Static metadata for a single opcode byte.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// Mnemonic used in disassembly/trace output.
    pub mnemonic: &'static str,
    /// Addressing mode used to resolve the operand.
    pub mode: AddressingMode,
    /// Base cycle count, excluding page-cross and branch-taken penalties.
    pub cycles: u8,
    /// Total instruction length in bytes (opcode + operand bytes).
    pub bytes: u8,
    /// Whether this opcode incurs +1 cycle on a page crossing.
    pub page_cycle: bool,
}

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    cycles: u8,
    bytes: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        cycles,
        bytes,
        page_cycle,
    }
}

use AddressingMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Accumulator as ACM, Immediate as IMD,
    Implied as IMP, IndexedIndirect as IZX, Indirect as IND, IndirectIndexed as IZY,
    Relative as REL, ZeroPage as ZPG, ZeroPageX as ZPX, ZeroPageY as ZPY,
};

/// Opcode metadata indexed by opcode byte.
///
/// Unofficial opcodes use their conventional mnemonics (LAX, SAX, DCP, ISB,
/// SLO, RLA, SRE, RRA, the multi-byte NOPs) so trace output matches the
/// canonical `nestest` log. The handful of opcodes with no defined behavior
/// on real hardware (the "KIL"/"JAM" family, which halts the CPU) are listed
/// as single-byte, two-cycle no-ops; this core never needs to execute them.
pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    /* 0x00 */ op("BRK", IMP, 7, 1, false),
    /* 0x01 */ op("ORA", IZX, 6, 2, false),
    /* 0x02 */ op("KIL", IMP, 2, 1, false),
    /* 0x03 */ op("SLO", IZX, 8, 2, false),
    /* 0x04 */ op("NOP", ZPG, 3, 2, false),
    /* 0x05 */ op("ORA", ZPG, 3, 2, false),
    /* 0x06 */ op("ASL", ZPG, 5, 2, false),
    /* 0x07 */ op("SLO", ZPG, 5, 2, false),
    /* 0x08 */ op("PHP", IMP, 3, 1, false),
    /* 0x09 */ op("ORA", IMD, 2, 2, false),
    /* 0x0A */ op("ASL", ACM, 2, 1, false),
    /* 0x0B */ op("ANC", IMD, 2, 2, false),
    /* 0x0C */ op("NOP", ABS, 4, 3, false),
    /* 0x0D */ op("ORA", ABS, 4, 3, false),
    /* 0x0E */ op("ASL", ABS, 6, 3, false),
    /* 0x0F */ op("SLO", ABS, 6, 3, false),
    /* 0x10 */ op("BPL", REL, 2, 2, false),
    /* 0x11 */ op("ORA", IZY, 5, 2, true),
    /* 0x12 */ op("KIL", IMP, 2, 1, false),
    /* 0x13 */ op("SLO", IZY, 8, 2, false),
    /* 0x14 */ op("NOP", ZPX, 4, 2, false),
    /* 0x15 */ op("ORA", ZPX, 4, 2, false),
    /* 0x16 */ op("ASL", ZPX, 6, 2, false),
    /* 0x17 */ op("SLO", ZPX, 6, 2, false),
    /* 0x18 */ op("CLC", IMP, 2, 1, false),
    /* 0x19 */ op("ORA", ABY, 4, 3, true),
    /* 0x1A */ op("NOP", IMP, 2, 1, false),
    /* 0x1B */ op("SLO", ABY, 7, 3, false),
    /* 0x1C */ op("NOP", ABX, 4, 3, true),
    /* 0x1D */ op("ORA", ABX, 4, 3, true),
    /* 0x1E */ op("ASL", ABX, 7, 3, false),
    /* 0x1F */ op("SLO", ABX, 7, 3, false),
    /* 0x20 */ op("JSR", ABS, 6, 3, false),
    /* 0x21 */ op("AND", IZX, 6, 2, false),
    /* 0x22 */ op("KIL", IMP, 2, 1, false),
    /* 0x23 */ op("RLA", IZX, 8, 2, false),
    /* 0x24 */ op("BIT", ZPG, 3, 2, false),
    /* 0x25 */ op("AND", ZPG, 3, 2, false),
    /* 0x26 */ op("ROL", ZPG, 5, 2, false),
    /* 0x27 */ op("RLA", ZPG, 5, 2, false),
    /* 0x28 */ op("PLP", IMP, 4, 1, false),
    /* 0x29 */ op("AND", IMD, 2, 2, false),
    /* 0x2A */ op("ROL", ACM, 2, 1, false),
    /* 0x2B */ op("ANC", IMD, 2, 2, false),
    /* 0x2C */ op("BIT", ABS, 4, 3, false),
    /* 0x2D */ op("AND", ABS, 4, 3, false),
    /* 0x2E */ op("ROL", ABS, 6, 3, false),
    /* 0x2F */ op("RLA", ABS, 6, 3, false),
    /* 0x30 */ op("BMI", REL, 2, 2, false),
    /* 0x31 */ op("AND", IZY, 5, 2, true),
    /* 0x32 */ op("KIL", IMP, 2, 1, false),
    /* 0x33 */ op("RLA", IZY, 8, 2, false),
    /* 0x34 */ op("NOP", ZPX, 4, 2, false),
    /* 0x35 */ op("AND", ZPX, 4, 2, false),
    /* 0x36 */ op("ROL", ZPX, 6, 2, false),
    /* 0x37 */ op("RLA", ZPX, 6, 2, false),
    /* 0x38 */ op("SEC", IMP, 2, 1, false),
    /* 0x39 */ op("AND", ABY, 4, 3, true),
    /* 0x3A */ op("NOP", IMP, 2, 1, false),
    /* 0x3B */ op("RLA", ABY, 7, 3, false),
    /* 0x3C */ op("NOP", ABX, 4, 3, true),
    /* 0x3D */ op("AND", ABX, 4, 3, true),
    /* 0x3E */ op("ROL", ABX, 7, 3, false),
    /* 0x3F */ op("RLA", ABX, 7, 3, false),
    /* 0x40 */ op("RTI", IMP, 6, 1, false),
    /* 0x41 */ op("EOR", IZX, 6, 2, false),
    /* 0x42 */ op("KIL", IMP, 2, 1, false),
    /* 0x43 */ op("SRE", IZX, 8, 2, false),
    /* 0x44 */ op("NOP", ZPG, 3, 2, false),
    /* 0x45 */ op("EOR", ZPG, 3, 2, false),
    /* 0x46 */ op("LSR", ZPG, 5, 2, false),
    /* 0x47 */ op("SRE", ZPG, 5, 2, false),
    /* 0x48 */ op("PHA", IMP, 3, 1, false),
    /* 0x49 */ op("EOR", IMD, 2, 2, false),
    /* 0x4A */ op("LSR", ACM, 2, 1, false),
    /* 0x4B */ op("ALR", IMD, 2, 2, false),
    /* 0x4C */ op("JMP", ABS, 3, 3, false),
    /* 0x4D */ op("EOR", ABS, 4, 3, false),
    /* 0x4E */ op("LSR", ABS, 6, 3, false),
    /* 0x4F */ op("SRE", ABS, 6, 3, false),
    /* 0x50 */ op("BVC", REL, 2, 2, false),
    /* 0x51 */ op("EOR", IZY, 5, 2, true),
    /* 0x52 */ op("KIL", IMP, 2, 1, false),
    /* 0x53 */ op("SRE", IZY, 8, 2, false),
    /* 0x54 */ op("NOP", ZPX, 4, 2, false),
    /* 0x55 */ op("EOR", ZPX, 4, 2, false),
    /* 0x56 */ op("LSR", ZPX, 6, 2, false),
    /* 0x57 */ op("SRE", ZPX, 6, 2, false),
    /* 0x58 */ op("CLI", IMP, 2, 1, false),
    /* 0x59 */ op("EOR", ABY, 4, 3, true),
    /* 0x5A */ op("NOP", IMP, 2, 1, false),
    /* 0x5B */ op("SRE", ABY, 7, 3, false),
    /* 0x5C */ op("NOP", ABX, 4, 3, true),
    /* 0x5D */ op("EOR", ABX, 4, 3, true),
    /* 0x5E */ op("LSR", ABX, 7, 3, false),
    /* 0x5F */ op("SRE", ABX, 7, 3, false),
    /* 0x60 */ op("RTS", IMP, 6, 1, false),
    /* 0x61 */ op("ADC", IZX, 6, 2, false),
    /* 0x62 */ op("KIL", IMP, 2, 1, false),
    /* 0x63 */ op("RRA", IZX, 8, 2, false),
    /* 0x64 */ op("NOP", ZPG, 3, 2, false),
    /* 0x65 */ op("ADC", ZPG, 3, 2, false),
    /* 0x66 */ op("ROR", ZPG, 5, 2, false),
    /* 0x67 */ op("RRA", ZPG, 5, 2, false),
    /* 0x68 */ op("PLA", IMP, 4, 1, false),
    /* 0x69 */ op("ADC", IMD, 2, 2, false),
    /* 0x6A */ op("ROR", ACM, 2, 1, false),
    /* 0x6B */ op("ARR", IMD, 2, 2, false),
    /* 0x6C */ op("JMP", IND, 5, 3, false),
    /* 0x6D */ op("ADC", ABS, 4, 3, false),
    /* 0x6E */ op("ROR", ABS, 6, 3, false),
    /* 0x6F */ op("RRA", ABS, 6, 3, false),
    /* 0x70 */ op("BVS", REL, 2, 2, false),
    /* 0x71 */ op("ADC", IZY, 5, 2, true),
    /* 0x72 */ op("KIL", IMP, 2, 1, false),
    /* 0x73 */ op("RRA", IZY, 8, 2, false),
    /* 0x74 */ op("NOP", ZPX, 4, 2, false),
    /* 0x75 */ op("ADC", ZPX, 4, 2, false),
    /* 0x76 */ op("ROR", ZPX, 6, 2, false),
    /* 0x77 */ op("RRA", ZPX, 6, 2, false),
    /* 0x78 */ op("SEI", IMP, 2, 1, false),
    /* 0x79 */ op("ADC", ABY, 4, 3, true),
    /* 0x7A */ op("NOP", IMP, 2, 1, false),
    /* 0x7B */ op("RRA", ABY, 7, 3, false),
    /* 0x7C */ op("NOP", ABX, 4, 3, true),
    /* 0x7D */ op("ADC", ABX, 4, 3, true),
    /* 0x7E */ op("ROR", ABX, 7, 3, false),
    /* 0x7F */ op("RRA", ABX, 7, 3, false),
    /* 0x80 */ op("NOP", IMD, 2, 2, false),
    /* 0x81 */ op("STA", IZX, 6, 2, false),
    /* 0x82 */ op("NOP", IMD, 2, 2, false),
    /* 0x83 */ op("SAX", IZX, 6, 2, false),
    /* 0x84 */ op("STY", ZPG, 3, 2, false),
    /* 0x85 */ op("STA", ZPG, 3, 2, false),
    /* 0x86 */ op("STX", ZPG, 3, 2, false),
    /* 0x87 */ op("SAX", ZPG, 3, 2, false),
    /* 0x88 */ op("DEY", IMP, 2, 1, false),
    /* 0x89 */ op("NOP", IMD, 2, 2, false),
    /* 0x8A */ op("TXA", IMP, 2, 1, false),
    /* 0x8B */ op("XAA", IMD, 2, 2, false),
    /* 0x8C */ op("STY", ABS, 4, 3, false),
    /* 0x8D */ op("STA", ABS, 4, 3, false),
    /* 0x8E */ op("STX", ABS, 4, 3, false),
    /* 0x8F */ op("SAX", ABS, 4, 3, false),
    /* 0x90 */ op("BCC", REL, 2, 2, false),
    /* 0x91 */ op("STA", IZY, 6, 2, false),
    /* 0x92 */ op("KIL", IMP, 2, 1, false),
    /* 0x93 */ op("AHX", IZY, 6, 2, false),
    /* 0x94 */ op("STY", ZPX, 4, 2, false),
    /* 0x95 */ op("STA", ZPX, 4, 2, false),
    /* 0x96 */ op("STX", ZPY, 4, 2, false),
    /* 0x97 */ op("SAX", ZPY, 4, 2, false),
    /* 0x98 */ op("TYA", IMP, 2, 1, false),
    /* 0x99 */ op("STA", ABY, 5, 3, false),
    /* 0x9A */ op("TXS", IMP, 2, 1, false),
    /* 0x9B */ op("TAS", ABY, 5, 3, false),
    /* 0x9C */ op("SHY", ABX, 5, 3, false),
    /* 0x9D */ op("STA", ABX, 5, 3, false),
    /* 0x9E */ op("SHX", ABY, 5, 3, false),
    /* 0x9F */ op("AHX", ABY, 5, 3, false),
    /* 0xA0 */ op("LDY", IMD, 2, 2, false),
    /* 0xA1 */ op("LDA", IZX, 6, 2, false),
    /* 0xA2 */ op("LDX", IMD, 2, 2, false),
    /* 0xA3 */ op("LAX", IZX, 6, 2, false),
    /* 0xA4 */ op("LDY", ZPG, 3, 2, false),
    /* 0xA5 */ op("LDA", ZPG, 3, 2, false),
    /* 0xA6 */ op("LDX", ZPG, 3, 2, false),
    /* 0xA7 */ op("LAX", ZPG, 3, 2, false),
    /* 0xA8 */ op("TAY", IMP, 2, 1, false),
    /* 0xA9 */ op("LDA", IMD, 2, 2, false),
    /* 0xAA */ op("TAX", IMP, 2, 1, false),
    /* 0xAB */ op("LAX", IMD, 2, 2, false),
    /* 0xAC */ op("LDY", ABS, 4, 3, false),
    /* 0xAD */ op("LDA", ABS, 4, 3, false),
    /* 0xAE */ op("LDX", ABS, 4, 3, false),
    /* 0xAF */ op("LAX", ABS, 4, 3, false),
    /* 0xB0 */ op("BCS", REL, 2, 2, false),
    /* 0xB1 */ op("LDA", IZY, 5, 2, true),
    /* 0xB2 */ op("KIL", IMP, 2, 1, false),
    /* 0xB3 */ op("LAX", IZY, 5, 2, true),
    /* 0xB4 */ op("LDY", ZPX, 4, 2, false),
    /* 0xB5 */ op("LDA", ZPX, 4, 2, false),
    /* 0xB6 */ op("LDX", ZPY, 4, 2, false),
    /* 0xB7 */ op("LAX", ZPY, 4, 2, false),
    /* 0xB8 */ op("CLV", IMP, 2, 1, false),
    /* 0xB9 */ op("LDA", ABY, 4, 3, true),
    /* 0xBA */ op("TSX", IMP, 2, 1, false),
    /* 0xBB */ op("LAS", ABY, 4, 3, true),
    /* 0xBC */ op("LDY", ABX, 4, 3, true),
    /* 0xBD */ op("LDA", ABX, 4, 3, true),
    /* 0xBE */ op("LDX", ABY, 4, 3, true),
    /* 0xBF */ op("LAX", ABY, 4, 3, true),
    /* 0xC0 */ op("CPY", IMD, 2, 2, false),
    /* 0xC1 */ op("CMP", IZX, 6, 2, false),
    /* 0xC2 */ op("NOP", IMD, 2, 2, false),
    /* 0xC3 */ op("DCP", IZX, 8, 2, false),
    /* 0xC4 */ op("CPY", ZPG, 3, 2, false),
    /* 0xC5 */ op("CMP", ZPG, 3, 2, false),
    /* 0xC6 */ op("DEC", ZPG, 5, 2, false),
    /* 0xC7 */ op("DCP", ZPG, 5, 2, false),
    /* 0xC8 */ op("INY", IMP, 2, 1, false),
    /* 0xC9 */ op("CMP", IMD, 2, 2, false),
    /* 0xCA */ op("DEX", IMP, 2, 1, false),
    /* 0xCB */ op("AXS", IMD, 2, 2, false),
    /* 0xCC */ op("CPY", ABS, 4, 3, false),
    /* 0xCD */ op("CMP", ABS, 4, 3, false),
    /* 0xCE */ op("DEC", ABS, 6, 3, false),
    /* 0xCF */ op("DCP", ABS, 6, 3, false),
    /* 0xD0 */ op("BNE", REL, 2, 2, false),
    /* 0xD1 */ op("CMP", IZY, 5, 2, true),
    /* 0xD2 */ op("KIL", IMP, 2, 1, false),
    /* 0xD3 */ op("DCP", IZY, 8, 2, false),
    /* 0xD4 */ op("NOP", ZPX, 4, 2, false),
    /* 0xD5 */ op("CMP", ZPX, 4, 2, false),
    /* 0xD6 */ op("DEC", ZPX, 6, 2, false),
    /* 0xD7 */ op("DCP", ZPX, 6, 2, false),
    /* 0xD8 */ op("CLD", IMP, 2, 1, false),
    /* 0xD9 */ op("CMP", ABY, 4, 3, true),
    /* 0xDA */ op("NOP", IMP, 2, 1, false),
    /* 0xDB */ op("DCP", ABY, 7, 3, false),
    /* 0xDC */ op("NOP", ABX, 4, 3, true),
    /* 0xDD */ op("CMP", ABX, 4, 3, true),
    /* 0xDE */ op("DEC", ABX, 7, 3, false),
    /* 0xDF */ op("DCP", ABX, 7, 3, false),
    /* 0xE0 */ op("CPX", IMD, 2, 2, false),
    /* 0xE1 */ op("SBC", IZX, 6, 2, false),
    /* 0xE2 */ op("NOP", IMD, 2, 2, false),
    /* 0xE3 */ op("ISB", IZX, 8, 2, false),
    /* 0xE4 */ op("CPX", ZPG, 3, 2, false),
    /* 0xE5 */ op("SBC", ZPG, 3, 2, false),
    /* 0xE6 */ op("INC", ZPG, 5, 2, false),
    /* 0xE7 */ op("ISB", ZPG, 5, 2, false),
    /* 0xE8 */ op("INX", IMP, 2, 1, false),
    /* 0xE9 */ op("SBC", IMD, 2, 2, false),
    /* 0xEA */ op("NOP", IMP, 2, 1, false),
    /* 0xEB */ op("SBC", IMD, 2, 2, false),
    /* 0xEC */ op("CPX", ABS, 4, 3, false),
    /* 0xED */ op("SBC", ABS, 4, 3, false),
    /* 0xEE */ op("INC", ABS, 6, 3, false),
    /* 0xEF */ op("ISB", ABS, 6, 3, false),
    /* 0xF0 */ op("BEQ", REL, 2, 2, false),
    /* 0xF1 */ op("SBC", IZY, 5, 2, true),
    /* 0xF2 */ op("KIL", IMP, 2, 1, false),
    /* 0xF3 */ op("ISB", IZY, 8, 2, false),
    /* 0xF4 */ op("NOP", ZPX, 4, 2, false),
    /* 0xF5 */ op("SBC", ZPX, 4, 2, false),
    /* 0xF6 */ op("INC", ZPX, 6, 2, false),
    /* 0xF7 */ op("ISB", ZPX, 6, 2, false),
    /* 0xF8 */ op("SED", IMP, 2, 1, false),
    /* 0xF9 */ op("SBC", ABY, 4, 3, true),
    /* 0xFA */ op("NOP", IMP, 2, 1, false),
    /* 0xFB */ op("ISB", ABY, 7, 3, false),
    /* 0xFC */ op("NOP", ABX, 4, 3, true),
    /* 0xFD */ op("SBC", ABX, 4, 3, true),
    /* 0xFE */ op("INC", ABX, 7, 3, false),
    /* 0xFF */ op("ISB", ABX, 7, 3, false),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_opcode_byte() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn brk_is_implied_single_byte_seven_cycles() {
        let info = &OPCODE_TABLE[0x00];
        assert_eq!(info.mnemonic, "BRK");
        assert_eq!(info.bytes, 1);
        assert_eq!(info.cycles, 7);
    }

    #[test]
    fn jmp_indirect_uses_indirect_mode() {
        let info = &OPCODE_TABLE[0x6C];
        assert_eq!(info.mnemonic, "JMP");
        assert_eq!(info.mode, AddressingMode::Indirect);
        assert_eq!(info.bytes, 3);
    }

    #[test]
    fn lax_absolute_y_has_page_cross_penalty() {
        let info = &OPCODE_TABLE[0xBF];
        assert_eq!(info.mnemonic, "LAX");
        assert!(info.page_cycle);
    }

    #[test]
    fn lda_immediate_two_cycles_two_bytes() {
        let info = &OPCODE_TABLE[0xA9];
        assert_eq!(info.mnemonic, "LDA");
        assert_eq!(info.mode, AddressingMode::Immediate);
        assert_eq!(info.cycles, 2);
        assert_eq!(info.bytes, 2);
    }
}
