//! The opcode translator. A single generic executor selects the opcode
//! byte from the table, appends the operand encoding in 6800 order (high
//! byte first), applies the mnemonic's effect on the register file, and
//! commits the flag outcome.

pub mod ops_jump;
pub mod ops_logical;
pub mod ops_move;

use crate::lexer::Scanned;
use crate::opcodes::instruction_mode_to_opcode;
use crate::parser::{parse_immediate_value, ParserError};
use crate::processing::{self, Outcome};
use crate::registers::{Acc, Registers};
use crate::tokens::{AddressingMode, Mnemonic, Token};

/// Translate one instruction line: returns the machine-code bytes and
/// mutates the register file to reflect the instruction's visible effect.
pub fn translate(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    operands: &[Scanned],
    registers: &mut Registers,
) -> Result<Vec<u8>, ParserError> {
    let acc = accumulator(operands);
    let opcode = instruction_mode_to_opcode(mnemonic, mode, acc)?;
    let mut bytes = vec![opcode as u8];
    bytes.extend(operand_bytes(mode, operands)?);

    let imm8 = immediate_u8(mode, operands)?;
    let imm16 = immediate_u16(mode, operands)?;
    let outcome = apply(mnemonic, mode, acc, imm8, imm16, registers);
    processing::commit(registers, outcome);

    Ok(bytes)
}

/// The accumulator an instruction targets: the register written right
/// after the mnemonic. Instructions without one encode as the B form.
fn accumulator(operands: &[Scanned]) -> Acc {
    for operand in operands {
        match operand.token {
            Token::Register(crate::tokens::Register::A) => return Acc::A,
            Token::Register(crate::tokens::Register::B) => return Acc::B,
            _ => {}
        }
    }
    Acc::B
}

fn literal<'o>(operands: &'o [Scanned], kinds: &[Token]) -> Result<&'o str, ParserError> {
    operands
        .iter()
        .find(|operand| kinds.contains(&operand.token))
        .and_then(|operand| operand.data.as_deref())
        .ok_or(ParserError::InvalidOperand)
}

/// The operand encoding for each addressing mode. Immediate and address
/// literals decode from their hex text, which is already high byte first.
fn operand_bytes(mode: AddressingMode, operands: &[Scanned]) -> Result<Vec<u8>, ParserError> {
    match mode {
        AddressingMode::INH | AddressingMode::ACC => Ok(Vec::new()),
        AddressingMode::IMM => {
            parse_immediate_value(literal(operands, &[Token::ImmUint8, Token::ImmUint16])?)
        }
        AddressingMode::DIR | AddressingMode::IDX => {
            parse_immediate_value(literal(operands, &[Token::DirAddrUint8])?)
        }
        AddressingMode::EXT => {
            parse_immediate_value(literal(operands, &[Token::ExtAddrUint16])?)
        }
        AddressingMode::REL => Ok(vec![displacement_byte(literal(
            operands,
            &[Token::DispAddrInt8],
        )?)?]),
    }
}

/// A `$HH` displacement encodes directly; a label displacement encodes as
/// a zero placeholder for the assembler to patch once the label's byte
/// offset is known.
fn displacement_byte(data: &str) -> Result<u8, ParserError> {
    if data.starts_with('$') {
        let bytes = parse_immediate_value(data)?;
        if bytes.len() != 1 {
            return Err(ParserError::InvalidOperand);
        }
        Ok(bytes[0])
    } else {
        Ok(0)
    }
}

/// The label name of a relative operand that still needs patching, if any.
pub fn displacement_label(operands: &[Scanned]) -> Option<&str> {
    operands
        .iter()
        .find(|operand| operand.token == Token::DispAddrInt8)
        .and_then(|operand| operand.data.as_deref())
        .filter(|data| !data.starts_with('$'))
}

fn immediate_u8(
    mode: AddressingMode,
    operands: &[Scanned],
) -> Result<Option<u8>, ParserError> {
    if mode != AddressingMode::IMM {
        return Ok(None);
    }
    let data = literal(operands, &[Token::ImmUint8, Token::ImmUint16])?;
    let bytes = parse_immediate_value(data)?;
    Ok(Some(
        bytes.iter().fold(0u32, |value, &byte| (value << 8) | byte as u32) as u8,
    ))
}

fn immediate_u16(
    mode: AddressingMode,
    operands: &[Scanned],
) -> Result<Option<u16>, ParserError> {
    if mode != AddressingMode::IMM {
        return Ok(None);
    }
    let data = literal(operands, &[Token::ImmUint8, Token::ImmUint16])?;
    let bytes = parse_immediate_value(data)?;
    Ok(Some(
        bytes.iter().fold(0u32, |value, &byte| (value << 8) | byte as u32) as u16,
    ))
}

/// Dispatch to the mnemonic's register effect. Effects run only for
/// operands whose value is knowable without a memory model: immediate,
/// accumulator, and inherent forms. Memory-addressed forms emit bytes
/// only.
fn apply(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    acc: Acc,
    imm8: Option<u8>,
    imm16: Option<u16>,
    registers: &mut Registers,
) -> Outcome {
    use AddressingMode::ACC;
    use Mnemonic as M;

    match mnemonic {
        M::ABA => ops_logical::aba(registers),
        M::ADC => ops_logical::adc(registers, acc, imm8),
        M::ADD => ops_logical::add(registers, acc, imm8),
        M::SBA => ops_logical::sba(registers),
        M::SBC => ops_logical::sbc(registers, acc, imm8),
        M::SUB => ops_logical::sub(registers, acc, imm8),
        M::AND => ops_logical::and(registers, acc, imm8),
        M::ORA => ops_logical::ora(registers, acc, imm8),
        M::EOR => ops_logical::eor(registers, acc, imm8),
        M::CMP => ops_logical::cmp(registers, acc, imm8),
        M::CBA => ops_logical::cba(registers),
        M::BIT => ops_logical::bit(registers, acc, imm8),
        M::CPX => ops_logical::cpx(registers, imm16),
        M::DAA => ops_logical::daa(registers),
        M::TST if mode == ACC => ops_logical::tst(registers, acc),
        M::COM if mode == ACC => ops_logical::com(registers, acc),
        M::NEG if mode == ACC => ops_logical::neg(registers, acc),
        M::DEC if mode == ACC => ops_logical::dec(registers, acc),
        M::INC if mode == ACC => ops_logical::inc(registers, acc),
        M::CLR if mode == ACC => ops_logical::clr(registers, acc),
        M::ASL if mode == ACC => ops_logical::asl(registers, acc),
        M::ASR if mode == ACC => ops_logical::asr(registers, acc),
        M::LSR if mode == ACC => ops_logical::lsr(registers, acc),
        M::ROL if mode == ACC => ops_logical::rol(registers, acc),
        M::ROR if mode == ACC => ops_logical::ror(registers, acc),
        M::LDA => ops_move::lda(registers, acc, imm8),
        M::LDS => ops_move::lds(registers, imm16),
        M::LDX => ops_move::ldx(registers, imm16),
        M::STA => ops_move::sta(registers, acc),
        M::STS => ops_move::sts(registers),
        M::STX => ops_move::stx(registers),
        M::TAB => ops_move::tab(registers),
        M::TBA => ops_move::tba(registers),
        M::TAP => ops_move::tap(registers),
        M::TPA => ops_move::tpa(registers),
        M::TSX => ops_move::tsx(registers),
        M::TXS => ops_move::txs(registers),
        M::PSH if mode == ACC => ops_move::psh(registers, acc),
        M::PUL if mode == ACC => ops_move::pul(registers, acc),
        M::INS => ops_move::ins(registers),
        M::DES => ops_move::des(registers),
        M::INX => ops_move::inx(registers),
        M::DEX => ops_move::dex(registers),
        M::JSR => ops_jump::jsr(registers),
        M::BSR => ops_jump::bsr(registers),
        M::RTS => ops_jump::rts(registers),
        M::CLC => ops_jump::clc(registers),
        M::SEC => ops_jump::sec(registers),
        M::CLI => ops_jump::cli(registers),
        M::SEI => ops_jump::sei(registers),
        M::CLV => ops_jump::clv(registers),
        M::SEV => ops_jump::sev(registers),
        // Encoding-only: branches resolve at fixup time, and the
        // interrupt machinery is not simulated.
        _ => Outcome::untouched(),
    }
}
