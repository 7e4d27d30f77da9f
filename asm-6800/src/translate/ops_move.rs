//! Load, store, transfer, and stack effects on the register file.

use crate::processing::{CarryUpdate, Outcome};
use crate::registers::{Acc, Registers, StackValue, StatusFlag};

/// Load an accumulator.
/// Function: ACCX := M
/// Flags: N Z
pub fn lda(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    registers.acc(acc).load(operand);
    Outcome::acc(acc).carry(CarryUpdate::Keep)
}

/// Load the stack pointer.
/// Function: SP := M
/// Flags: N Z
pub fn lds(registers: &mut Registers, operand: Option<u16>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    registers.sp.load(operand);
    Outcome::value16(operand, operand as i64).carry(CarryUpdate::Keep)
}

/// Load the index register.
/// Function: X := M
/// Flags: N Z
pub fn ldx(registers: &mut Registers, operand: Option<u16>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    registers.x.load(operand);
    Outcome::value16(operand, operand as i64).carry(CarryUpdate::Keep)
}

/// Store an accumulator. Memory is not modeled; the stored value still
/// sets the zero and sign flags.
/// Function: M := ACCX
/// Flags: N Z
pub fn sta(_registers: &mut Registers, acc: Acc) -> Outcome {
    Outcome::acc(acc).carry(CarryUpdate::Keep)
}

/// Store the stack pointer.
/// Function: M := SP
/// Flags: N Z
pub fn sts(registers: &mut Registers) -> Outcome {
    let value = registers.sp.num;
    Outcome::value16(value, value as i64).carry(CarryUpdate::Keep)
}

/// Store the index register.
/// Function: M := X
/// Flags: N Z
pub fn stx(registers: &mut Registers) -> Outcome {
    let value = registers.x.num;
    Outcome::value16(value, value as i64).carry(CarryUpdate::Keep)
}

/// Transfer A to B.
/// Function: B := A
/// Flags: N Z
pub fn tab(registers: &mut Registers) -> Outcome {
    let value = registers.acc_a.num;
    registers.acc_b.load(value);
    Outcome::acc(Acc::B).carry(CarryUpdate::Keep)
}

/// Transfer B to A.
/// Function: A := B
/// Flags: N Z
pub fn tba(registers: &mut Registers) -> Outcome {
    let value = registers.acc_b.num;
    registers.acc_a.load(value);
    Outcome::acc(Acc::A).carry(CarryUpdate::Keep)
}

/// Transfer A into the status register. Bits beyond the six flag
/// positions are ignored.
pub fn tap(registers: &mut Registers) -> Outcome {
    registers.sr = registers.acc_a.num & 0b0011_1111;
    Outcome::untouched()
}

/// Transfer the status register into A, zero-filled above the flags.
pub fn tpa(registers: &mut Registers) -> Outcome {
    let value = registers.sr;
    registers.acc_a.load(value);
    Outcome::untouched()
}

/// Transfer the stack pointer to X.
/// Function: X := SP + 1
pub fn tsx(registers: &mut Registers) -> Outcome {
    let value = registers.sp.num.wrapping_add(1);
    registers.x.load(value);
    Outcome::untouched()
}

/// Transfer X to the stack pointer.
/// Function: SP := X - 1
pub fn txs(registers: &mut Registers) -> Outcome {
    let value = registers.x.num.wrapping_sub(1);
    registers.sp.load(value);
    Outcome::untouched()
}

/// Push an accumulator onto the stack; the stack grows downward.
pub fn psh(registers: &mut Registers, acc: Acc) -> Outcome {
    let value = registers.acc_value(acc);
    registers.stack.push(StackValue::Byte(value));
    registers.sp.sub(1);
    Outcome::untouched()
}

/// Pull a byte from the stack into an accumulator. A 16-bit value on top
/// of the stack stays put; PUL cannot split it.
pub fn pul(registers: &mut Registers, acc: Acc) -> Outcome {
    match registers.stack.pop() {
        Some(StackValue::Byte(value)) => registers.acc(acc).load(value),
        Some(word @ StackValue::Word(_)) => registers.stack.push(word),
        None => {}
    }
    registers.sp.add(1);
    Outcome::untouched()
}

/// Increment the stack pointer.
pub fn ins(registers: &mut Registers) -> Outcome {
    registers.sp.add(1);
    Outcome::untouched()
}

/// Decrement the stack pointer.
pub fn des(registers: &mut Registers) -> Outcome {
    registers.sp.sub(1);
    Outcome::untouched()
}

/// Increment the index register.
/// Flags: Z
pub fn inx(registers: &mut Registers) -> Outcome {
    registers.x.add(1);
    let zero = registers.x.num == 0;
    registers.set_status_flag(StatusFlag::Zero, zero);
    Outcome::untouched()
}

/// Decrement the index register.
/// Flags: Z
pub fn dex(registers: &mut Registers) -> Outcome {
    registers.x.sub(1);
    let zero = registers.x.num == 0;
    registers.set_status_flag(StatusFlag::Zero, zero);
    Outcome::untouched()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ints::{UInt16, UInt8};
    use crate::processing::commit;

    #[test]
    fn transfers_copy_between_accumulators() {
        let mut registers = Registers::new();
        registers.acc_a = UInt8::new(0x80);
        let outcome = tab(&mut registers);
        commit(&mut registers, outcome);
        assert_eq!(registers.acc_b.num, 0x80);
        assert!(registers.is_status_flag_set(StatusFlag::Sign));

        registers.acc_b = UInt8::new(0);
        let outcome = tba(&mut registers);
        commit(&mut registers, outcome);
        assert_eq!(registers.acc_a.num, 0);
        assert!(registers.is_status_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn index_register_steps_flag_zero_only() {
        let mut registers = Registers::new();
        registers.set_status_flag(StatusFlag::Carry, true);
        registers.x = UInt16::new(0xFFFF);
        let outcome = inx(&mut registers);
        commit(&mut registers, outcome);
        assert_eq!(registers.x.num, 0);
        assert!(registers.is_status_flag_set(StatusFlag::Zero));
        // Carry is untouched by the index register.
        assert!(registers.is_status_flag_set(StatusFlag::Carry));

        let outcome = dex(&mut registers);
        commit(&mut registers, outcome);
        assert_eq!(registers.x.num, 0xFFFF);
        assert!(!registers.is_status_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn pull_leaves_words_on_the_stack() {
        let mut registers = Registers::new();
        registers.stack.push(StackValue::Word(0x1234));
        let outcome = pul(&mut registers, Acc::A);
        commit(&mut registers, outcome);
        assert_eq!(registers.acc_a.num, 0);
        assert_eq!(registers.stack.last(), Some(&StackValue::Word(0x1234)));
    }
}
