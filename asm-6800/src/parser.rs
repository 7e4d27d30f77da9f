//! Line-oriented LL(1) parser. Drives the lexer one line at a time,
//! enforces the grammar, finalizes variable values in the symbol table,
//! and yields `(mnemonic, operands)` records for the translator.

use crate::ints::UInt16;
use crate::lexer::{Lexer, Scanned};
use crate::symbol::{SymbolKind, SymbolTable, SymbolValue};
use crate::tokens::{Mnemonic, Token};
use colored::Colorize;
use thiserror::Error;

/// The typed failure surfaced to the caller. Expectation failures carry
/// the diagnostic fields a user needs to find the offending source text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error(
        "Parser failed near \"{excerpt}\", expected one of {expected}, \
         but found \"{found}\" on line {line}."
    )]
    Expectation {
        excerpt: String,
        expected: String,
        found: String,
        line: usize,
    },
    #[error("Parser failed on variable \"{name}\"")]
    Variable { name: String },
    #[error("invalid instruction operand")]
    InvalidOperand,
    #[error("invalid hex literal \"{text}\"")]
    InvalidHex { text: String },
    #[error("no opcode for {mnemonic} with {mode} addressing")]
    NoEncoding { mnemonic: String, mode: String },
    #[error("branch displacement {value} is outside the signed byte range")]
    Displacement { value: i64 },
    #[error("branch target \"{name}\" is not a defined label")]
    UndefinedLabel { name: String },
}

impl ParserError {
    /// Render a multi-line diagnostic with the offending line in context.
    pub fn nice_message(&self, source: &str) -> String {
        let error_line = match self {
            ParserError::Expectation { line, .. } => *line,
            _ => {
                return format!("{}", self.to_string().bright_red());
            }
        };
        let range = 3;
        let min = error_line.saturating_sub(range);
        let max = error_line + range;

        let mut nice_message = String::from("\n\n");
        for (index, row_text) in source.lines().enumerate() {
            let row = index + 1;
            if row > max {
                break;
            }
            if row < min {
                continue;
            }
            let col_string = format!("{:>4}: ", row);
            nice_message.push_str(&format!("{}", col_string.cyan()));
            nice_message.push_str(&format!("{}", row_text.bright_white()));
            nice_message.push('\n');

            if row == error_line {
                nice_message.push_str(&format!("      {}", self.to_string().bright_red()));
                nice_message.push('\n');
            }
        }
        nice_message.push('\n');
        nice_message
    }
}

/// What a parsed line amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Instruction(InstructionRecord),
    VariableDefined,
    End,
}

/// One instruction line: the optional leading label, the mnemonic, and the
/// operand payloads in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionRecord {
    pub label: Option<String>,
    pub mnemonic: Mnemonic,
    pub operands: Vec<Scanned>,
}

/// Decode a `#$HH…` or `$HH…` literal to its bytes, high byte first.
pub fn parse_immediate_value(value: &str) -> Result<Vec<u8>, ParserError> {
    let hex = value
        .strip_prefix("#$")
        .or_else(|| value.strip_prefix('$'))
        .ok_or_else(|| ParserError::InvalidHex {
            text: value.to_string(),
        })?;
    if hex.is_empty() || hex.len() % 2 != 0 {
        return Err(ParserError::InvalidHex {
            text: value.to_string(),
        });
    }
    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for pair in hex.as_bytes().chunks(2) {
        let text = std::str::from_utf8(pair).map_err(|_| ParserError::InvalidHex {
            text: value.to_string(),
        })?;
        let byte = u8::from_str_radix(text, 16).map_err(|_| ParserError::InvalidHex {
            text: value.to_string(),
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}

pub struct Parser<'a> {
    line: usize,
    lexer: Lexer<'a>,
    symbols: SymbolTable,
}

impl<'a> Parser<'a> {
    /// `symbols` is the pass-1 table; this parser re-lexes the same source
    /// and finalizes variable values in that table as definitions reduce.
    pub fn new(source: &'a str, symbols: SymbolTable) -> Parser<'a> {
        Parser {
            line: 1,
            lexer: Lexer::new(source),
            symbols,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    fn expectation(&self, expected: &str, found: &str) -> ParserError {
        let location = self.lexer.last_addr();
        let excerpt: String = self
            .lexer
            .source()
            .get(location..)
            .unwrap_or("")
            .chars()
            .take(12)
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        ParserError::Expectation {
            excerpt,
            expected: expected.to_string(),
            found: found.to_string(),
            line: self.line,
        }
    }

    /// Pull one token and assert it is in the expected set; on mismatch the
    /// lexer is retracted so the token stays for the next consumer.
    pub fn take(&mut self, test: &[Token]) -> Result<(), ParserError> {
        let names = || {
            test.iter()
                .map(|token| token.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self.lexer.next() {
            None => Err(self.expectation(&names(), "end of input")),
            Some(next_token) => {
                if test.contains(&next_token) {
                    Ok(())
                } else {
                    self.lexer.retract();
                    Err(self.expectation(&names(), &next_token.name()))
                }
            }
        }
    }

    fn take_mnemonic(&mut self) -> Result<(), ParserError> {
        match self.lexer.next() {
            Some(Token::Mnemonic(_)) => Ok(()),
            Some(other) => {
                self.lexer.retract();
                Err(self.expectation("T_MNEMONIC", &other.name()))
            }
            None => Err(self.expectation("T_MNEMONIC", "end of input")),
        }
    }

    /// A line terminator, or end of input standing in for one.
    fn take_eol(&mut self) -> Result<(), ParserError> {
        match self.lexer.next() {
            Some(Token::Eol) | None => Ok(()),
            Some(other) => {
                self.lexer.retract();
                Err(self.expectation("T_EOL", &other.name()))
            }
        }
    }

    /// Parse one line. Blank lines are skipped; the line counter advances
    /// for every terminator consumed.
    pub fn line(&mut self) -> Result<Line, ParserError> {
        let mut current = match self.lexer.next() {
            Some(_) => self.lexer.yylex().clone(),
            None => return Ok(Line::End),
        };

        while current.token == Token::Eol {
            self.line += 1;
            current = match self.lexer.next() {
                Some(_) => self.lexer.yylex().clone(),
                None => return Ok(Line::End),
            };
        }

        match current.token {
            Token::Label => {
                let label = current.data.map(|name| name.trim_end_matches(':').to_string());
                self.take_mnemonic()?;
                let mnemonic = self.lexer.yylex().clone();
                let record = self.instruction(mnemonic, label)?;
                self.take_eol()?;
                self.line += 1;
                Ok(Line::Instruction(record))
            }
            Token::Variable => {
                self.variable(current)?;
                self.take_eol()?;
                self.line += 1;
                Ok(Line::VariableDefined)
            }
            Token::Mnemonic(_) => {
                let record = self.instruction(current, None)?;
                self.take_eol()?;
                self.line += 1;
                Ok(Line::Instruction(record))
            }
            _ => Err(self.expectation(
                "T_LABEL, T_VARIABLE, T_MNEMONIC",
                &current.token.name(),
            )),
        }
    }

    /// Reduce a `NAME = $HH`/`$HHHH` definition: grammar first, then the
    /// symbol's text value is rewritten to its byte decoding.
    fn variable(&mut self, scanned: Scanned) -> Result<(), ParserError> {
        let name = scanned.data.unwrap_or_default();
        let addr = self.lexer.last_addr();

        self.take(&[Token::Equal])?;
        self.take(&[Token::DirAddrUint8, Token::ExtAddrUint16])?;

        let stored = match self.symbols.get(&name) {
            Some(symbol) => match &symbol.value {
                SymbolValue::Text(text) => Some(text.clone()),
                _ => None,
            },
            None => None,
        };
        match stored {
            Some(text) => {
                let bytes = parse_immediate_value(&text)?;
                self.symbols.set(
                    &name,
                    UInt16::new(addr as i32),
                    SymbolKind::Variable,
                    SymbolValue::Bytes(bytes),
                );
                Ok(())
            }
            None => Err(ParserError::Variable { name }),
        }
    }

    fn instruction(
        &mut self,
        scanned: Scanned,
        label: Option<String>,
    ) -> Result<InstructionRecord, ParserError> {
        let mnemonic = match scanned.token {
            Token::Mnemonic(mnemonic) => mnemonic,
            other => return Err(self.expectation("T_MNEMONIC", &other.name())),
        };
        Ok(InstructionRecord {
            label,
            mnemonic,
            operands: self.operands(),
        })
    }

    /// Collect operand payloads until a token falls outside the operand
    /// set; that token is retracted for the next line.
    fn operands(&mut self) -> Vec<Scanned> {
        let mut operands = Vec::new();
        loop {
            match self.lexer.next() {
                None => break,
                Some(token) if is_operand_token(token) => {
                    operands.push(self.lexer.yylex().clone());
                }
                Some(_) => {
                    self.lexer.retract();
                    break;
                }
            }
        }
        operands
    }
}

fn is_operand_token(token: Token) -> bool {
    matches!(
        token,
        Token::Register(_)
            | Token::Comma
            | Token::ImmUint8
            | Token::ImmUint16
            | Token::DirAddrUint8
            | Token::ExtAddrUint16
            | Token::DispAddrInt8
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tokens::Register;

    fn pass_one(source: &str) -> SymbolTable {
        let mut lexer = Lexer::new(source);
        while lexer.next().is_some() {}
        lexer.into_symbols()
    }

    fn parser(source: &str) -> Parser<'_> {
        let symbols = pass_one(source);
        Parser::new(source, symbols)
    }

    #[test]
    fn take_rejects_an_unknown_lexeme() {
        let mut parse = parser("FAIL\nADD B #$10\n");
        let error = parse
            .take(&[Token::Mnemonic(Mnemonic::ADD)])
            .unwrap_err();
        match error {
            ParserError::Expectation {
                excerpt,
                expected,
                found,
                line,
            } => {
                assert_eq!(expected, "T_ADD");
                assert_eq!(found, "T_UNKNOWN");
                assert_eq!(line, 1);
                assert_eq!(excerpt, "FAIL ADD B #");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn take_rejects_a_wrong_expectation() {
        let mut parse = parser("ADD B #$10\n");
        assert!(parse.take(&[Token::Variable]).is_err());
        // The mismatched token was retracted and can be taken again.
        assert!(parse.take(&[Token::Mnemonic(Mnemonic::ADD)]).is_ok());
    }

    #[test]
    fn instructions_collect_operands_in_source_order() {
        let mut parse = parser("ADD B #$10\n");
        let line = parse.line().unwrap();
        match line {
            Line::Instruction(record) => {
                assert_eq!(record.mnemonic, Mnemonic::ADD);
                assert_eq!(record.label, None);
                let tokens: Vec<Token> =
                    record.operands.iter().map(|operand| operand.token).collect();
                assert_eq!(
                    tokens,
                    vec![Token::Register(Register::B), Token::ImmUint8]
                );
                assert_eq!(record.operands[1].data.as_deref(), Some("#$10"));
            }
            other => panic!("expected an instruction, got {:?}", other),
        }
    }

    #[test]
    fn labelled_instructions_carry_their_label() {
        let mut parse = parser("START JSR $FE3A\n");
        match parse.line().unwrap() {
            Line::Instruction(record) => {
                assert_eq!(record.label.as_deref(), Some("START"));
                assert_eq!(record.mnemonic, Mnemonic::JSR);
                assert_eq!(record.operands[0].token, Token::ExtAddrUint16);
            }
            other => panic!("expected an instruction, got {:?}", other),
        }
    }

    #[test]
    fn variables_finalize_to_bytes() {
        let source = "REDIS = $FFFF\nDIGADD = $00\nSTART JSR $1234\n";
        let mut parse = parser(source);
        assert_eq!(parse.line().unwrap(), Line::VariableDefined);
        assert_eq!(parse.line().unwrap(), Line::VariableDefined);

        let redis = parse.symbols().get("REDIS").unwrap();
        assert_eq!(redis.addr.num, 0);
        assert_eq!(redis.kind, SymbolKind::Variable);
        assert_eq!(redis.value, SymbolValue::Bytes(vec![0xFF, 0xFF]));

        let digadd = parse.symbols().get("DIGADD").unwrap();
        assert_eq!(digadd.value, SymbolValue::Bytes(vec![0x00]));

        match parse.line().unwrap() {
            Line::Instruction(record) => {
                assert_eq!(record.mnemonic, Mnemonic::JSR);
                let tokens: Vec<Token> =
                    record.operands.iter().map(|operand| operand.token).collect();
                assert_eq!(tokens, vec![Token::ExtAddrUint16]);
            }
            other => panic!("expected an instruction, got {:?}", other),
        }

        let start = parse.symbols().get("START").unwrap();
        assert_eq!(start.kind, SymbolKind::Label);
        assert_eq!(start.addr.num, 27);

        assert_eq!(parse.line().unwrap(), Line::End);
    }

    #[test]
    fn blank_lines_are_skipped_and_counted() {
        let mut parse = parser("\n\nADD B #$10\nFAIL HERE\n");
        assert!(matches!(parse.line().unwrap(), Line::Instruction(_)));
        let error = parse.line().unwrap_err();
        match error {
            ParserError::Expectation { line, found, .. } => {
                assert_eq!(line, 4);
                assert_eq!(found, "T_UNKNOWN");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn immediate_values_round_trip() {
        assert_eq!(parse_immediate_value("#$10").unwrap(), vec![0x10]);
        assert_eq!(parse_immediate_value("#$2F00").unwrap(), vec![0x2F, 0x00]);
        assert_eq!(parse_immediate_value("$FE3A").unwrap(), vec![0xFE, 0x3A]);
        assert!(parse_immediate_value("#$012").is_err());
        assert!(parse_immediate_value("NOPE").is_err());
    }

    #[test]
    fn missing_trailing_newline_still_ends_the_line() {
        let mut parse = parser("TAB");
        assert!(matches!(parse.line().unwrap(), Line::Instruction(_)));
        assert_eq!(parse.line().unwrap(), Line::End);
    }
}
