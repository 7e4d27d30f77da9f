//! The 6800 opcode table: every opcode byte reachable from the 72
//! mnemonics, and the declarative map from (mnemonic, addressing mode,
//! accumulator) to the opcode.

use crate::parser::ParserError;
use crate::registers::Acc;
use crate::tokens::{AddressingMode, Mnemonic};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    NOP = 0x01,
    TAP = 0x06,
    TPA = 0x07,
    INX = 0x08,
    DEX = 0x09,
    CLV = 0x0a,
    SEV = 0x0b,
    CLC = 0x0c,
    SEC = 0x0d,
    CLI = 0x0e,
    SEI = 0x0f,
    SBA = 0x10,
    CBA = 0x11,
    TAB = 0x16,
    TBA = 0x17,
    DAA = 0x19,
    ABA = 0x1b,
    BRA_rel = 0x20,
    BHI_rel = 0x22,
    BLS_rel = 0x23,
    BCC_rel = 0x24,
    BCS_rel = 0x25,
    BNE_rel = 0x26,
    BEQ_rel = 0x27,
    BVC_rel = 0x28,
    BVS_rel = 0x29,
    BPL_rel = 0x2a,
    BMI_rel = 0x2b,
    BGE_rel = 0x2c,
    BLT_rel = 0x2d,
    BGT_rel = 0x2e,
    BLE_rel = 0x2f,
    TSX = 0x30,
    INS = 0x31,
    PUL_a = 0x32,
    PUL_b = 0x33,
    DES = 0x34,
    TXS = 0x35,
    PSH_a = 0x36,
    PSH_b = 0x37,
    RTS = 0x39,
    RTI = 0x3b,
    WAI = 0x3e,
    SWI = 0x3f,
    NEG_a = 0x40,
    COM_a = 0x43,
    LSR_a = 0x44,
    ROR_a = 0x46,
    ASR_a = 0x47,
    ASL_a = 0x48,
    ROL_a = 0x49,
    DEC_a = 0x4a,
    INC_a = 0x4c,
    TST_a = 0x4d,
    CLR_a = 0x4f,
    NEG_b = 0x50,
    COM_b = 0x53,
    LSR_b = 0x54,
    ROR_b = 0x56,
    ASR_b = 0x57,
    ASL_b = 0x58,
    ROL_b = 0x59,
    DEC_b = 0x5a,
    INC_b = 0x5c,
    TST_b = 0x5d,
    CLR_b = 0x5f,
    NEG_idx = 0x60,
    COM_idx = 0x63,
    LSR_idx = 0x64,
    ROR_idx = 0x66,
    ASR_idx = 0x67,
    ASL_idx = 0x68,
    ROL_idx = 0x69,
    DEC_idx = 0x6a,
    INC_idx = 0x6c,
    TST_idx = 0x6d,
    JMP_idx = 0x6e,
    CLR_idx = 0x6f,
    NEG_ext = 0x70,
    COM_ext = 0x73,
    LSR_ext = 0x74,
    ROR_ext = 0x76,
    ASR_ext = 0x77,
    ASL_ext = 0x78,
    ROL_ext = 0x79,
    DEC_ext = 0x7a,
    INC_ext = 0x7c,
    TST_ext = 0x7d,
    JMP_ext = 0x7e,
    CLR_ext = 0x7f,
    SUB_imm_a = 0x80,
    CMP_imm_a = 0x81,
    SBC_imm_a = 0x82,
    AND_imm_a = 0x84,
    BIT_imm_a = 0x85,
    LDA_imm_a = 0x86,
    EOR_imm_a = 0x88,
    ADC_imm_a = 0x89,
    ORA_imm_a = 0x8a,
    ADD_imm_a = 0x8b,
    CPX_imm = 0x8c,
    BSR_rel = 0x8d,
    LDS_imm = 0x8e,
    SUB_dir_a = 0x90,
    CMP_dir_a = 0x91,
    SBC_dir_a = 0x92,
    AND_dir_a = 0x94,
    BIT_dir_a = 0x95,
    LDA_dir_a = 0x96,
    STA_dir_a = 0x97,
    EOR_dir_a = 0x98,
    ADC_dir_a = 0x99,
    ORA_dir_a = 0x9a,
    ADD_dir_a = 0x9b,
    CPX_dir = 0x9c,
    LDS_dir = 0x9e,
    STS_dir = 0x9f,
    SUB_idx_a = 0xa0,
    CMP_idx_a = 0xa1,
    SBC_idx_a = 0xa2,
    AND_idx_a = 0xa4,
    BIT_idx_a = 0xa5,
    LDA_idx_a = 0xa6,
    STA_idx_a = 0xa7,
    EOR_idx_a = 0xa8,
    ADC_idx_a = 0xa9,
    ORA_idx_a = 0xaa,
    ADD_idx_a = 0xab,
    CPX_idx = 0xac,
    JSR_idx = 0xad,
    LDS_idx = 0xae,
    STS_idx = 0xaf,
    SUB_ext_a = 0xb0,
    CMP_ext_a = 0xb1,
    SBC_ext_a = 0xb2,
    AND_ext_a = 0xb4,
    BIT_ext_a = 0xb5,
    LDA_ext_a = 0xb6,
    STA_ext_a = 0xb7,
    EOR_ext_a = 0xb8,
    ADC_ext_a = 0xb9,
    ORA_ext_a = 0xba,
    ADD_ext_a = 0xbb,
    CPX_ext = 0xbc,
    JSR_ext = 0xbd,
    LDS_ext = 0xbe,
    STS_ext = 0xbf,
    SUB_imm_b = 0xc0,
    CMP_imm_b = 0xc1,
    SBC_imm_b = 0xc2,
    AND_imm_b = 0xc4,
    BIT_imm_b = 0xc5,
    LDA_imm_b = 0xc6,
    EOR_imm_b = 0xc8,
    ADC_imm_b = 0xc9,
    ORA_imm_b = 0xca,
    ADD_imm_b = 0xcb,
    LDX_imm = 0xce,
    SUB_dir_b = 0xd0,
    CMP_dir_b = 0xd1,
    SBC_dir_b = 0xd2,
    AND_dir_b = 0xd4,
    BIT_dir_b = 0xd5,
    LDA_dir_b = 0xd6,
    STA_dir_b = 0xd7,
    EOR_dir_b = 0xd8,
    ADC_dir_b = 0xd9,
    ORA_dir_b = 0xda,
    ADD_dir_b = 0xdb,
    LDX_dir = 0xde,
    STX_dir = 0xdf,
    SUB_idx_b = 0xe0,
    CMP_idx_b = 0xe1,
    SBC_idx_b = 0xe2,
    AND_idx_b = 0xe4,
    BIT_idx_b = 0xe5,
    LDA_idx_b = 0xe6,
    STA_idx_b = 0xe7,
    EOR_idx_b = 0xe8,
    ADC_idx_b = 0xe9,
    ORA_idx_b = 0xea,
    ADD_idx_b = 0xeb,
    LDX_idx = 0xee,
    STX_idx = 0xef,
    SUB_ext_b = 0xf0,
    CMP_ext_b = 0xf1,
    SBC_ext_b = 0xf2,
    AND_ext_b = 0xf4,
    BIT_ext_b = 0xf5,
    LDA_ext_b = 0xf6,
    STA_ext_b = 0xf7,
    EOR_ext_b = 0xf8,
    ADC_ext_b = 0xf9,
    ORA_ext_b = 0xfa,
    ADD_ext_b = 0xfb,
    LDX_ext = 0xfe,
    STX_ext = 0xff,
}

fn by_acc(acc: Acc, a: OpCode, b: OpCode) -> OpCode {
    match acc {
        Acc::A => a,
        Acc::B => b,
    }
}

/// Select the opcode byte for a mnemonic in a given addressing mode. The
/// accumulator selector picks between the A and B encodings of the
/// dual-accumulator groups and is ignored everywhere else.
pub fn instruction_mode_to_opcode(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    acc: Acc,
) -> Result<OpCode, ParserError> {
    use AddressingMode::*;
    use Mnemonic as M;
    use OpCode::*;

    Ok(match (mnemonic, mode) {
        (M::ABA, INH) => ABA,
        (M::ADC, IMM) => by_acc(acc, ADC_imm_a, ADC_imm_b),
        (M::ADC, DIR) => by_acc(acc, ADC_dir_a, ADC_dir_b),
        (M::ADC, IDX) => by_acc(acc, ADC_idx_a, ADC_idx_b),
        (M::ADC, EXT) => by_acc(acc, ADC_ext_a, ADC_ext_b),
        (M::ADD, IMM) => by_acc(acc, ADD_imm_a, ADD_imm_b),
        (M::ADD, DIR) => by_acc(acc, ADD_dir_a, ADD_dir_b),
        (M::ADD, IDX) => by_acc(acc, ADD_idx_a, ADD_idx_b),
        (M::ADD, EXT) => by_acc(acc, ADD_ext_a, ADD_ext_b),
        (M::AND, IMM) => by_acc(acc, AND_imm_a, AND_imm_b),
        (M::AND, DIR) => by_acc(acc, AND_dir_a, AND_dir_b),
        (M::AND, IDX) => by_acc(acc, AND_idx_a, AND_idx_b),
        (M::AND, EXT) => by_acc(acc, AND_ext_a, AND_ext_b),
        (M::ASL, ACC) => by_acc(acc, ASL_a, ASL_b),
        (M::ASL, IDX) => ASL_idx,
        (M::ASL, EXT) => ASL_ext,
        (M::ASR, ACC) => by_acc(acc, ASR_a, ASR_b),
        (M::ASR, IDX) => ASR_idx,
        (M::ASR, EXT) => ASR_ext,
        (M::BCC, REL) => BCC_rel,
        (M::BCS, REL) => BCS_rel,
        (M::BEQ, REL) => BEQ_rel,
        (M::BNE, REL) => BNE_rel,
        (M::BGE, REL) => BGE_rel,
        (M::BGT, REL) => BGT_rel,
        (M::BLE, REL) => BLE_rel,
        (M::BLT, REL) => BLT_rel,
        (M::BHI, REL) => BHI_rel,
        (M::BLS, REL) => BLS_rel,
        (M::BMI, REL) => BMI_rel,
        (M::BPL, REL) => BPL_rel,
        (M::BVC, REL) => BVC_rel,
        (M::BVS, REL) => BVS_rel,
        (M::BRA, REL) => BRA_rel,
        (M::BSR, REL) => BSR_rel,
        (M::BIT, IMM) => by_acc(acc, BIT_imm_a, BIT_imm_b),
        (M::BIT, DIR) => by_acc(acc, BIT_dir_a, BIT_dir_b),
        (M::BIT, IDX) => by_acc(acc, BIT_idx_a, BIT_idx_b),
        (M::BIT, EXT) => by_acc(acc, BIT_ext_a, BIT_ext_b),
        (M::CBA, INH) => CBA,
        (M::CLC, INH) => CLC,
        (M::CLI, INH) => CLI,
        (M::CLV, INH) => CLV,
        (M::CLR, ACC) => by_acc(acc, CLR_a, CLR_b),
        (M::CLR, IDX) => CLR_idx,
        (M::CLR, EXT) => CLR_ext,
        (M::CMP, IMM) => by_acc(acc, CMP_imm_a, CMP_imm_b),
        (M::CMP, DIR) => by_acc(acc, CMP_dir_a, CMP_dir_b),
        (M::CMP, IDX) => by_acc(acc, CMP_idx_a, CMP_idx_b),
        (M::CMP, EXT) => by_acc(acc, CMP_ext_a, CMP_ext_b),
        (M::COM, ACC) => by_acc(acc, COM_a, COM_b),
        (M::COM, IDX) => COM_idx,
        (M::COM, EXT) => COM_ext,
        (M::CPX, IMM) => CPX_imm,
        (M::CPX, DIR) => CPX_dir,
        (M::CPX, IDX) => CPX_idx,
        (M::CPX, EXT) => CPX_ext,
        (M::DAA, INH) => DAA,
        (M::DEC, ACC) => by_acc(acc, DEC_a, DEC_b),
        (M::DEC, IDX) => DEC_idx,
        (M::DEC, EXT) => DEC_ext,
        (M::DES, INH) => DES,
        (M::DEX, INH) => DEX,
        (M::EOR, IMM) => by_acc(acc, EOR_imm_a, EOR_imm_b),
        (M::EOR, DIR) => by_acc(acc, EOR_dir_a, EOR_dir_b),
        (M::EOR, IDX) => by_acc(acc, EOR_idx_a, EOR_idx_b),
        (M::EOR, EXT) => by_acc(acc, EOR_ext_a, EOR_ext_b),
        (M::INC, ACC) => by_acc(acc, INC_a, INC_b),
        (M::INC, IDX) => INC_idx,
        (M::INC, EXT) => INC_ext,
        (M::INS, INH) => INS,
        (M::INX, INH) => INX,
        (M::JMP, EXT) => JMP_ext,
        (M::JMP, IDX) => JMP_idx,
        (M::JSR, EXT) => JSR_ext,
        (M::JSR, IDX) => JSR_idx,
        (M::LDA, IMM) => by_acc(acc, LDA_imm_a, LDA_imm_b),
        (M::LDA, DIR) => by_acc(acc, LDA_dir_a, LDA_dir_b),
        (M::LDA, IDX) => by_acc(acc, LDA_idx_a, LDA_idx_b),
        (M::LDA, EXT) => by_acc(acc, LDA_ext_a, LDA_ext_b),
        (M::LDS, IMM) => LDS_imm,
        (M::LDS, DIR) => LDS_dir,
        (M::LDS, IDX) => LDS_idx,
        (M::LDS, EXT) => LDS_ext,
        (M::LDX, IMM) => LDX_imm,
        (M::LDX, DIR) => LDX_dir,
        (M::LDX, IDX) => LDX_idx,
        (M::LDX, EXT) => LDX_ext,
        (M::LSR, ACC) => by_acc(acc, LSR_a, LSR_b),
        (M::LSR, IDX) => LSR_idx,
        (M::LSR, EXT) => LSR_ext,
        (M::NEG, ACC) => by_acc(acc, NEG_a, NEG_b),
        (M::NEG, IDX) => NEG_idx,
        (M::NEG, EXT) => NEG_ext,
        (M::NOP, INH) => NOP,
        (M::ORA, IMM) => by_acc(acc, ORA_imm_a, ORA_imm_b),
        (M::ORA, DIR) => by_acc(acc, ORA_dir_a, ORA_dir_b),
        (M::ORA, IDX) => by_acc(acc, ORA_idx_a, ORA_idx_b),
        (M::ORA, EXT) => by_acc(acc, ORA_ext_a, ORA_ext_b),
        (M::PSH, ACC) => by_acc(acc, PSH_a, PSH_b),
        (M::PUL, ACC) => by_acc(acc, PUL_a, PUL_b),
        (M::ROL, ACC) => by_acc(acc, ROL_a, ROL_b),
        (M::ROL, IDX) => ROL_idx,
        (M::ROL, EXT) => ROL_ext,
        (M::ROR, ACC) => by_acc(acc, ROR_a, ROR_b),
        (M::ROR, IDX) => ROR_idx,
        (M::ROR, EXT) => ROR_ext,
        (M::RTI, INH) => RTI,
        (M::RTS, INH) => RTS,
        (M::SBA, INH) => SBA,
        (M::SBC, IMM) => by_acc(acc, SBC_imm_a, SBC_imm_b),
        (M::SBC, DIR) => by_acc(acc, SBC_dir_a, SBC_dir_b),
        (M::SBC, IDX) => by_acc(acc, SBC_idx_a, SBC_idx_b),
        (M::SBC, EXT) => by_acc(acc, SBC_ext_a, SBC_ext_b),
        (M::SEC, INH) => SEC,
        (M::SEI, INH) => SEI,
        (M::SEV, INH) => SEV,
        (M::STA, DIR) => by_acc(acc, STA_dir_a, STA_dir_b),
        (M::STA, IDX) => by_acc(acc, STA_idx_a, STA_idx_b),
        (M::STA, EXT) => by_acc(acc, STA_ext_a, STA_ext_b),
        (M::STS, DIR) => STS_dir,
        (M::STS, IDX) => STS_idx,
        (M::STS, EXT) => STS_ext,
        (M::STX, DIR) => STX_dir,
        (M::STX, IDX) => STX_idx,
        (M::STX, EXT) => STX_ext,
        (M::SUB, IMM) => by_acc(acc, SUB_imm_a, SUB_imm_b),
        (M::SUB, DIR) => by_acc(acc, SUB_dir_a, SUB_dir_b),
        (M::SUB, IDX) => by_acc(acc, SUB_idx_a, SUB_idx_b),
        (M::SUB, EXT) => by_acc(acc, SUB_ext_a, SUB_ext_b),
        (M::SWI, INH) => SWI,
        (M::TAB, INH) => TAB,
        (M::TBA, INH) => TBA,
        (M::TAP, INH) => TAP,
        (M::TPA, INH) => TPA,
        (M::TST, ACC) => by_acc(acc, TST_a, TST_b),
        (M::TST, IDX) => TST_idx,
        (M::TST, EXT) => TST_ext,
        (M::TSX, INH) => TSX,
        (M::TXS, INH) => TXS,
        (M::WAI, INH) => WAI,
        _ => {
            return Err(ParserError::NoEncoding {
                mnemonic: format!("{:?}", mnemonic),
                mode: format!("{:?}", mode),
            })
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn opcode(mnemonic: Mnemonic, mode: AddressingMode, acc: Acc) -> u8 {
        instruction_mode_to_opcode(mnemonic, mode, acc).unwrap() as u8
    }

    #[test]
    fn dual_accumulator_rows() {
        use AddressingMode::*;
        let rows: [(Mnemonic, [u8; 8]); 7] = [
            (Mnemonic::LDA, [0x86, 0xC6, 0x96, 0xD6, 0xB6, 0xF6, 0xA6, 0xE6]),
            (Mnemonic::ADD, [0x8B, 0xCB, 0x9B, 0xDB, 0xBB, 0xFB, 0xAB, 0xEB]),
            (Mnemonic::ADC, [0x89, 0xC9, 0x99, 0xD9, 0xB9, 0xF9, 0xA9, 0xE9]),
            (Mnemonic::AND, [0x84, 0xC4, 0x94, 0xD4, 0xB4, 0xF4, 0xA4, 0xE4]),
            (Mnemonic::CMP, [0x81, 0xC1, 0x91, 0xD1, 0xB1, 0xF1, 0xA1, 0xE1]),
            (Mnemonic::SUB, [0x80, 0xC0, 0x90, 0xD0, 0xB0, 0xF0, 0xA0, 0xE0]),
            (Mnemonic::EOR, [0x88, 0xC8, 0x98, 0xD8, 0xB8, 0xF8, 0xA8, 0xE8]),
        ];
        for (mnemonic, bytes) in rows {
            assert_eq!(opcode(mnemonic, IMM, Acc::A), bytes[0], "{:?}", mnemonic);
            assert_eq!(opcode(mnemonic, IMM, Acc::B), bytes[1], "{:?}", mnemonic);
            assert_eq!(opcode(mnemonic, DIR, Acc::A), bytes[2], "{:?}", mnemonic);
            assert_eq!(opcode(mnemonic, DIR, Acc::B), bytes[3], "{:?}", mnemonic);
            assert_eq!(opcode(mnemonic, EXT, Acc::A), bytes[4], "{:?}", mnemonic);
            assert_eq!(opcode(mnemonic, EXT, Acc::B), bytes[5], "{:?}", mnemonic);
            assert_eq!(opcode(mnemonic, IDX, Acc::A), bytes[6], "{:?}", mnemonic);
            assert_eq!(opcode(mnemonic, IDX, Acc::B), bytes[7], "{:?}", mnemonic);
        }
    }

    #[test]
    fn store_has_no_immediate_form() {
        use AddressingMode::*;
        assert_eq!(opcode(Mnemonic::STA, DIR, Acc::A), 0x97);
        assert_eq!(opcode(Mnemonic::STA, EXT, Acc::B), 0xF7);
        assert_eq!(opcode(Mnemonic::STA, IDX, Acc::A), 0xA7);
        assert!(instruction_mode_to_opcode(Mnemonic::STA, IMM, Acc::A).is_err());
    }

    #[test]
    fn accumulator_group() {
        use AddressingMode::ACC;
        assert_eq!(opcode(Mnemonic::ASL, ACC, Acc::A), 0x48);
        assert_eq!(opcode(Mnemonic::ASL, ACC, Acc::B), 0x58);
        assert_eq!(opcode(Mnemonic::ROR, ACC, Acc::A), 0x46);
        assert_eq!(opcode(Mnemonic::CLR, ACC, Acc::B), 0x5F);
        assert_eq!(opcode(Mnemonic::NEG, ACC, Acc::A), 0x40);
        assert_eq!(opcode(Mnemonic::TST, ACC, Acc::B), 0x5D);
    }

    #[test]
    fn inherent_group() {
        use AddressingMode::INH;
        assert_eq!(opcode(Mnemonic::ABA, INH, Acc::A), 0x1B);
        assert_eq!(opcode(Mnemonic::SBA, INH, Acc::A), 0x10);
        assert_eq!(opcode(Mnemonic::CBA, INH, Acc::A), 0x11);
        assert_eq!(opcode(Mnemonic::DAA, INH, Acc::A), 0x19);
        assert_eq!(opcode(Mnemonic::NOP, INH, Acc::A), 0x01);
        assert_eq!(opcode(Mnemonic::TAB, INH, Acc::A), 0x16);
        assert_eq!(opcode(Mnemonic::TBA, INH, Acc::A), 0x17);
        assert_eq!(opcode(Mnemonic::TSX, INH, Acc::A), 0x30);
        assert_eq!(opcode(Mnemonic::TXS, INH, Acc::A), 0x35);
        assert_eq!(opcode(Mnemonic::RTI, INH, Acc::A), 0x3B);
        assert_eq!(opcode(Mnemonic::RTS, INH, Acc::A), 0x39);
        assert_eq!(opcode(Mnemonic::SWI, INH, Acc::A), 0x3F);
        assert_eq!(opcode(Mnemonic::WAI, INH, Acc::A), 0x3E);
        assert_eq!(opcode(Mnemonic::CLC, INH, Acc::A), 0x0C);
        assert_eq!(opcode(Mnemonic::SEC, INH, Acc::A), 0x0D);
        assert_eq!(opcode(Mnemonic::CLI, INH, Acc::A), 0x0E);
        assert_eq!(opcode(Mnemonic::SEI, INH, Acc::A), 0x0F);
        assert_eq!(opcode(Mnemonic::CLV, INH, Acc::A), 0x0A);
        assert_eq!(opcode(Mnemonic::SEV, INH, Acc::A), 0x0B);
    }

    #[test]
    fn branch_group() {
        use AddressingMode::REL;
        let branches = [
            (Mnemonic::BRA, 0x20),
            (Mnemonic::BHI, 0x22),
            (Mnemonic::BLS, 0x23),
            (Mnemonic::BCC, 0x24),
            (Mnemonic::BCS, 0x25),
            (Mnemonic::BNE, 0x26),
            (Mnemonic::BEQ, 0x27),
            (Mnemonic::BVC, 0x28),
            (Mnemonic::BVS, 0x29),
            (Mnemonic::BPL, 0x2A),
            (Mnemonic::BMI, 0x2B),
            (Mnemonic::BGE, 0x2C),
            (Mnemonic::BLT, 0x2D),
            (Mnemonic::BGT, 0x2E),
            (Mnemonic::BLE, 0x2F),
            (Mnemonic::BSR, 0x8D),
        ];
        for (mnemonic, byte) in branches {
            assert_eq!(opcode(mnemonic, REL, Acc::A), byte, "{:?}", mnemonic);
        }
    }

    #[test]
    fn index_and_stack_pointer_group() {
        use AddressingMode::*;
        assert_eq!(opcode(Mnemonic::CPX, IMM, Acc::A), 0x8C);
        assert_eq!(opcode(Mnemonic::CPX, DIR, Acc::A), 0x9C);
        assert_eq!(opcode(Mnemonic::CPX, EXT, Acc::A), 0xBC);
        assert_eq!(opcode(Mnemonic::LDS, IMM, Acc::A), 0x8E);
        assert_eq!(opcode(Mnemonic::LDS, DIR, Acc::A), 0x9E);
        assert_eq!(opcode(Mnemonic::LDX, IMM, Acc::A), 0xCE);
        assert_eq!(opcode(Mnemonic::LDX, DIR, Acc::A), 0xDE);
        assert_eq!(opcode(Mnemonic::STS, DIR, Acc::A), 0x9F);
        assert_eq!(opcode(Mnemonic::STS, EXT, Acc::A), 0xBF);
        assert_eq!(opcode(Mnemonic::STX, DIR, Acc::A), 0xDF);
        assert_eq!(opcode(Mnemonic::STX, EXT, Acc::A), 0xFF);
        assert_eq!(opcode(Mnemonic::JMP, EXT, Acc::A), 0x7E);
        assert_eq!(opcode(Mnemonic::JMP, IDX, Acc::A), 0x6E);
        assert_eq!(opcode(Mnemonic::JSR, EXT, Acc::A), 0xBD);
        assert_eq!(opcode(Mnemonic::JSR, IDX, Acc::A), 0xAD);
        assert_eq!(opcode(Mnemonic::PSH, ACC, Acc::A), 0x36);
        assert_eq!(opcode(Mnemonic::PSH, ACC, Acc::B), 0x37);
        assert_eq!(opcode(Mnemonic::PUL, ACC, Acc::A), 0x32);
        assert_eq!(opcode(Mnemonic::PUL, ACC, Acc::B), 0x33);
        assert_eq!(opcode(Mnemonic::INX, INH, Acc::A), 0x08);
        assert_eq!(opcode(Mnemonic::DEX, INH, Acc::A), 0x09);
        assert_eq!(opcode(Mnemonic::INS, INH, Acc::A), 0x31);
        assert_eq!(opcode(Mnemonic::DES, INH, Acc::A), 0x34);
    }

    #[test]
    fn unmapped_pairs_are_errors() {
        assert!(instruction_mode_to_opcode(Mnemonic::ABA, AddressingMode::IMM, Acc::A).is_err());
        assert!(instruction_mode_to_opcode(Mnemonic::JMP, AddressingMode::DIR, Acc::A).is_err());
        assert!(instruction_mode_to_opcode(Mnemonic::TAB, AddressingMode::ACC, Acc::A).is_err());
    }
}
