//! The two-pass assembler. Pass 1 drains a lexer over the source to
//! populate the symbol table; pass 2 drives the parser line by line,
//! translating each instruction into the program buffer and patching
//! label branch displacements once every label's byte offset is known.

use crate::addressing::addressing_mode;
use crate::ints::Int8;
use crate::lexer::Lexer;
use crate::parser::{InstructionRecord, Line, Parser, ParserError};
use crate::registers::Registers;
use crate::symbol::SymbolTable;
use crate::translate::{displacement_label, translate};
use std::collections::HashMap;

pub struct Assembler<'a> {
    parser: Parser<'a>,
    registers: Registers,
    program: Vec<u8>,
    /// Byte offset of every labelled instruction, for branch resolution.
    label_offsets: HashMap<String, usize>,
    /// (label, byte offset of the displacement operand) awaiting patching.
    branch_fixups: Vec<(String, usize)>,
}

impl<'a> Assembler<'a> {
    pub fn new(source: &'a str) -> Assembler<'a> {
        let mut lexer = Lexer::new(source);
        while lexer.next().is_some() {}
        let symbols = lexer.into_symbols();

        Assembler {
            parser: Parser::new(source, symbols),
            registers: Registers::new(),
            program: Vec::new(),
            label_offsets: HashMap::new(),
            branch_fixups: Vec::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        self.parser.symbols()
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Run pass 2 to completion and return the program byte stream.
    pub fn assemble(&mut self) -> Result<Vec<u8>, ParserError> {
        loop {
            match self.parser.line()? {
                Line::End => break,
                Line::VariableDefined => continue,
                Line::Instruction(record) => self.emit(record)?,
            }
        }
        self.resolve_branches()?;
        Ok(self.program.clone())
    }

    fn emit(&mut self, record: InstructionRecord) -> Result<(), ParserError> {
        if let Some(label) = &record.label {
            self.label_offsets.insert(label.clone(), self.program.len());
        }

        let mode = addressing_mode(record.mnemonic, &record.operands)?;
        if let Some(label) = displacement_label(&record.operands) {
            // The displacement operand is the byte after the opcode.
            self.branch_fixups
                .push((label.to_string(), self.program.len() + 1));
        }

        let bytes = translate(record.mnemonic, mode, &record.operands, &mut self.registers)?;
        self.program.extend(bytes);
        self.registers.pc.load(self.program.len() as u16);
        Ok(())
    }

    /// Fill in every label displacement now that label byte offsets are
    /// known: `disp = target − (pc after the branch)`, range-checked to a
    /// signed byte.
    fn resolve_branches(&mut self) -> Result<(), ParserError> {
        for (label, offset) in &self.branch_fixups {
            let target = self
                .label_offsets
                .get(label)
                .ok_or_else(|| ParserError::UndefinedLabel {
                    name: label.clone(),
                })?;
            let displacement = *target as i64 - (*offset as i64 + 1);
            if !(-128..=127).contains(&displacement) {
                return Err(ParserError::Displacement {
                    value: displacement,
                });
            }
            self.program[*offset] = Int8::new(displacement as i32).num as u8;
        }
        Ok(())
    }
}
