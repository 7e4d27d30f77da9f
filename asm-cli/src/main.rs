//! Command-line front end: assemble a 6800 source file and print the byte
//! stream, symbol table, and final register state.

use asm_6800::registers::{Registers, StatusFlag};
use asm_6800::symbol::{SymbolKind, SymbolValue};
use asm_6800::Assembler;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::process::exit;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "asm-6800", about = "Two-pass assembler for the Motorola 6800.")]
struct CliOptions {
    /// Path to the assembly source file.
    #[structopt(parse(from_os_str))]
    source: PathBuf,

    /// Write the assembled bytes to this file instead of printing a hex dump.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Print the symbol table after assembling.
    #[structopt(short, long)]
    symbols: bool,

    /// Print the simulated register state after assembling.
    #[structopt(short, long)]
    registers: bool,
}

fn main() {
    let options = CliOptions::from_args();

    let source = match fs::read_to_string(&options.source) {
        Ok(source) => source,
        Err(error) => {
            eprintln!(
                "{}",
                format!("Unable to read {}: {}", options.source.display(), error).bright_red()
            );
            exit(1);
        }
    };

    let mut assembler = Assembler::new(&source);
    let program = match assembler.assemble() {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", error.nice_message(&source));
            exit(1);
        }
    };

    match &options.output {
        Some(path) => {
            if let Err(error) = fs::write(path, &program) {
                eprintln!(
                    "{}",
                    format!("Unable to write {}: {}", path.display(), error).bright_red()
                );
                exit(1);
            }
            println!("{} bytes written to {}", program.len(), path.display());
        }
        None => print_hex_dump(&program),
    }

    if options.symbols {
        print_symbols(&assembler);
    }
    if options.registers {
        print_registers(assembler.registers());
    }
}

fn print_hex_dump(program: &[u8]) {
    for (row, chunk) in program.chunks(16).enumerate() {
        let offset = format!("{:04x}:", row * 16);
        let bytes: Vec<String> = chunk.iter().map(|byte| format!("{:02x}", byte)).collect();
        println!("{} {}", offset.cyan(), bytes.join(" "));
    }
}

fn print_symbols(assembler: &Assembler) {
    println!("\n{}", "Symbols:".bright_white());
    let mut entries: Vec<_> = assembler.symbols().table().iter().collect();
    entries.sort_by_key(|(name, _)| name.as_str());
    for (name, symbol) in entries {
        let kind = match symbol.kind {
            SymbolKind::Label => "label",
            SymbolKind::Variable => "variable",
        };
        let value = match &symbol.value {
            SymbolValue::Word(word) => format!("{:#06x}", word.num),
            SymbolValue::Text(text) => text.clone(),
            SymbolValue::Bytes(bytes) => bytes
                .iter()
                .map(|byte| format!("{:02x}", byte))
                .collect::<Vec<_>>()
                .join(" "),
        };
        println!("  {:<12} {:<8} addr={:#06x} value={}", name, kind, symbol.addr.num, value);
    }
}

fn print_registers(registers: &Registers) {
    println!("\n{}", "Registers:".bright_white());
    println!(
        "  A={:#04x} B={:#04x} X={:#06x} SP={:#06x} PC={:#06x}",
        registers.acc_a.num,
        registers.acc_b.num,
        registers.x.num,
        registers.sp.num,
        registers.pc.num
    );
    let flags = [
        ("C", StatusFlag::Carry),
        ("Z", StatusFlag::Zero),
        ("S", StatusFlag::Sign),
        ("O", StatusFlag::Overflow),
        ("I", StatusFlag::Interrupt),
        ("AC", StatusFlag::AuxCarry),
    ];
    let rendered: Vec<String> = flags
        .iter()
        .map(|(name, flag)| format!("{}={}", name, registers.is_status_flag_set(*flag) as u8))
        .collect();
    println!("  {}", rendered.join(" "));
}
