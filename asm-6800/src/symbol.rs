//! The symbol table built by the lexer during pass 1 and finalized by the
//! parser during pass 2.

use crate::ints::UInt16;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Label,
    Variable,
}

/// A symbol's value. Labels carry their own source offset as a word.
/// Variables start out as the raw text of their definition and are
/// rewritten to bytes when the parser reduces the definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolValue {
    Word(UInt16),
    Text(String),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub addr: UInt16,
    pub kind: SymbolKind,
    pub value: SymbolValue,
}

/// Name → (address, kind, value) mapping for labels and variables.
#[derive(Debug, Default)]
pub struct SymbolTable {
    table: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            table: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry for a label or variable.
    pub fn set(&mut self, name: &str, addr: UInt16, kind: SymbolKind, value: SymbolValue) {
        self.table
            .insert(name.to_string(), Symbol { addr, kind, value });
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.table.get(name)
    }

    /// Read access to the backing map.
    pub fn table(&self) -> &HashMap<String, Symbol> {
        &self.table
    }
}
