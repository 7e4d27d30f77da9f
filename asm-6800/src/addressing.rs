//! Addressing-mode resolution: given a mnemonic and its operand tokens,
//! decide which of the seven 6800 addressing modes applies.
//!
//! Two formulations exist. [`addressing_mode`] is the direct classifier;
//! [`operand_state_machine`] walks the operand sequence token by token.
//! They agree on every operand shape the grammar accepts.

use crate::lexer::Scanned;
use crate::parser::ParserError;
use crate::tokens::{AddressingMode, Mnemonic, Register, Token};

fn no_mode(mnemonic: Mnemonic) -> ParserError {
    ParserError::NoEncoding {
        mnemonic: format!("{:?}", mnemonic),
        mode: "any".to_string(),
    }
}

/// The direct classifier. Rules are evaluated in order; first match wins.
pub fn addressing_mode(
    mnemonic: Mnemonic,
    operands: &[Scanned],
) -> Result<AddressingMode, ParserError> {
    if mnemonic.is_branch()
        && operands
            .iter()
            .any(|operand| operand.token == Token::DispAddrInt8)
    {
        return Ok(AddressingMode::REL);
    }
    if operands
        .iter()
        .any(|operand| matches!(operand.token, Token::ImmUint8 | Token::ImmUint16))
    {
        return Ok(AddressingMode::IMM);
    }
    if has_indexed_window(operands) {
        return Ok(AddressingMode::IDX);
    }
    if operands
        .iter()
        .any(|operand| operand.token == Token::DirAddrUint8)
    {
        return Ok(AddressingMode::DIR);
    }
    if operands
        .iter()
        .any(|operand| operand.token == Token::ExtAddrUint16)
    {
        return Ok(AddressingMode::EXT);
    }
    if operands.len() == 1
        && matches!(
            operands[0].token,
            Token::Register(Register::A) | Token::Register(Register::B)
        )
        && mnemonic.takes_accumulator_operand()
    {
        return Ok(AddressingMode::ACC);
    }
    if operands.is_empty() {
        return Ok(AddressingMode::INH);
    }
    Err(no_mode(mnemonic))
}

/// A direct address followed by a comma followed by register X.
fn has_indexed_window(operands: &[Scanned]) -> bool {
    operands.windows(3).any(|window| {
        window[0].token == Token::DirAddrUint8
            && window[1].token == Token::Comma
            && window[2].token == Token::Register(Register::X)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperandState {
    Start,
    SawReg,
    SawLit,
    SawComma,
    SawX,
}

/// State-machine formulation of the classifier.
pub fn operand_state_machine(
    mnemonic: Mnemonic,
    operands: &[Scanned],
) -> Result<AddressingMode, ParserError> {
    use OperandState::*;

    let mut state = Start;
    let mut literal: Option<Token> = None;

    for operand in operands {
        state = match (state, operand.token) {
            (Start, Token::Register(Register::A) | Token::Register(Register::B)) => SawReg,
            (
                Start | SawReg,
                token @ (Token::ImmUint8
                | Token::ImmUint16
                | Token::DirAddrUint8
                | Token::ExtAddrUint16
                | Token::DispAddrInt8),
            ) => {
                literal = Some(token);
                SawLit
            }
            (SawLit, Token::Comma) if literal == Some(Token::DirAddrUint8) => SawComma,
            (SawComma, Token::Register(Register::X)) => SawX,
            _ => return Err(no_mode(mnemonic)),
        };
    }

    match state {
        Start => Ok(AddressingMode::INH),
        SawReg if mnemonic.takes_accumulator_operand() => Ok(AddressingMode::ACC),
        SawLit => match literal {
            Some(Token::DispAddrInt8) if mnemonic.is_branch() => Ok(AddressingMode::REL),
            Some(Token::ImmUint8) | Some(Token::ImmUint16) => Ok(AddressingMode::IMM),
            Some(Token::DirAddrUint8) => Ok(AddressingMode::DIR),
            Some(Token::ExtAddrUint16) => Ok(AddressingMode::EXT),
            _ => Err(no_mode(mnemonic)),
        },
        SawX => Ok(AddressingMode::IDX),
        _ => Err(no_mode(mnemonic)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::{Line, Parser};
    use crate::symbol::SymbolTable;

    const FIXTURE: &str = "ADC A #$10\n\
                           ADC A $10\n\
                           ADD A $10,X\n\
                           BGE $FE\n\
                           BIT B $FCBC\n\
                           DAA\n\
                           DAA X\n";

    fn lines(source: &str) -> Vec<(Mnemonic, Vec<Scanned>)> {
        let mut lexer = Lexer::new(source);
        while lexer.next().is_some() {}
        let mut parser = Parser::new(source, lexer.into_symbols());
        let mut collected = Vec::new();
        while let Ok(Line::Instruction(record)) = parser.line() {
            collected.push((record.mnemonic, record.operands));
        }
        collected
    }

    #[test]
    fn classifier_covers_every_mode() {
        let lines = lines(FIXTURE);
        let expected = [
            AddressingMode::IMM,
            AddressingMode::DIR,
            AddressingMode::IDX,
            AddressingMode::REL,
            AddressingMode::EXT,
            AddressingMode::INH,
        ];
        for (index, mode) in expected.iter().enumerate() {
            let (mnemonic, operands) = &lines[index];
            assert_eq!(
                addressing_mode(*mnemonic, operands).unwrap(),
                *mode,
                "line {}",
                index
            );
        }
        // DAA X: a lone X register matches no mode.
        let (mnemonic, operands) = &lines[6];
        assert!(addressing_mode(*mnemonic, operands).is_err());
    }

    #[test]
    fn state_machine_agrees_with_the_classifier() {
        for (mnemonic, operands) in lines(FIXTURE) {
            let direct = addressing_mode(mnemonic, &operands);
            let machine = operand_state_machine(mnemonic, &operands);
            match direct {
                Ok(mode) => assert_eq!(machine.unwrap(), mode, "{:?}", mnemonic),
                Err(_) => assert!(machine.is_err(), "{:?}", mnemonic),
            }
        }
    }

    #[test]
    fn accumulator_mode_requires_a_permitting_mnemonic() {
        let source = "ASL A\nPSH B\n";
        for (mnemonic, operands) in lines(source) {
            assert_eq!(
                addressing_mode(mnemonic, &operands).unwrap(),
                AddressingMode::ACC
            );
            assert_eq!(
                operand_state_machine(mnemonic, &operands).unwrap(),
                AddressingMode::ACC
            );
        }
        // TAB takes no operand, so a stray register is an error.
        let mut parser = Parser::new("TAB A\n", SymbolTable::new());
        if let Ok(Line::Instruction(record)) = parser.line() {
            assert!(addressing_mode(record.mnemonic, &record.operands).is_err());
        } else {
            panic!("expected an instruction");
        }
    }
}
