//! Arithmetic, logic, shift, and compare effects on the register file.
//!
//! Each operation returns the flag [`Outcome`] the processing wrapper
//! commits afterward. Operations that need an operand receive `None` for
//! memory-addressed forms and leave the registers alone.

use crate::processing::{
    half_carry, signed_overflow, signed_overflow_sub, CarryUpdate, Outcome,
};
use crate::registers::{Acc, Registers, StatusFlag};

/// Add accumulator B to accumulator A.
/// Function: A := A + B
/// Flags: H N Z V C
pub fn aba(registers: &mut Registers) -> Outcome {
    let a = registers.acc_a.num;
    let b = registers.acc_b.num;
    registers.acc_a.add(b as i32);
    let result = registers.acc_a.num;
    Outcome::acc(Acc::A)
        .overflow(signed_overflow(a, b, result))
        .aux_carry(half_carry(a, b, result))
}

/// The carry bit prepended to the operand's significant bits, so a set
/// carry turns #$10 into 0b110000 before the add.
fn prepend_carry(operand: u8) -> i32 {
    let bits = if operand == 0 {
        1
    } else {
        8 - operand.leading_zeros()
    };
    (operand as i32) | (1 << bits)
}

/// Add with carry.
/// Function: ACCX := ACCX + M + C
/// Flags: H N Z V C
pub fn adc(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let data = if registers.is_status_flag_set(StatusFlag::Carry) {
        prepend_carry(operand)
    } else {
        operand as i32
    };
    let before = registers.acc_value(acc);
    registers.acc(acc).add(data);
    let result = registers.acc_value(acc);
    Outcome::acc(acc)
        .overflow(signed_overflow(before, data as u8, result))
        .aux_carry(half_carry(before, data as u8, result))
}

/// Add without carry.
/// Function: ACCX := ACCX + M
/// Flags: H N Z V C
pub fn add(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let before = registers.acc_value(acc);
    registers.acc(acc).add(operand as i32);
    let result = registers.acc_value(acc);
    Outcome::acc(acc)
        .overflow(signed_overflow(before, operand, result))
        .aux_carry(half_carry(before, operand, result))
}

/// Subtract accumulator B from accumulator A.
/// Function: A := A - B
/// Flags: N Z V C
pub fn sba(registers: &mut Registers) -> Outcome {
    let a = registers.acc_a.num;
    let b = registers.acc_b.num;
    registers.acc_a.sub(b as i32);
    let result = registers.acc_a.num;
    Outcome::acc(Acc::A).overflow(signed_overflow_sub(a, b, result))
}

/// Subtract with carry.
/// Function: ACCX := ACCX - M - C
/// Flags: N Z V C
pub fn sbc(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let data = operand as i32 + registers.get_carry() as i32;
    let before = registers.acc_value(acc);
    registers.acc(acc).sub(data);
    let result = registers.acc_value(acc);
    Outcome::acc(acc).overflow(signed_overflow_sub(before, operand, result))
}

/// Subtract.
/// Function: ACCX := ACCX - M
/// Flags: N Z V C
pub fn sub(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let before = registers.acc_value(acc);
    registers.acc(acc).sub(operand as i32);
    let result = registers.acc_value(acc);
    Outcome::acc(acc).overflow(signed_overflow_sub(before, operand, result))
}

/// Logical and.
/// Function: ACCX := ACCX & M
/// Flags: N Z
pub fn and(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let result = registers.acc_value(acc) & operand;
    registers.acc(acc).load(result);
    Outcome::acc(acc).carry(CarryUpdate::Keep)
}

/// Inclusive or.
/// Function: ACCX := ACCX | M
/// Flags: N Z
pub fn ora(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let result = registers.acc_value(acc) | operand;
    registers.acc(acc).load(result);
    Outcome::acc(acc).carry(CarryUpdate::Keep)
}

/// Exclusive or.
/// Function: ACCX := ACCX ^ M
/// Flags: N Z
pub fn eor(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let result = registers.acc_value(acc) ^ operand;
    registers.acc(acc).load(result);
    Outcome::acc(acc).carry(CarryUpdate::Keep)
}

/// Compare; the difference is flagged but not stored.
/// Function: ACCX - M
/// Flags: N Z V C
pub fn cmp(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let a = registers.acc_value(acc);
    let result = a.wrapping_sub(operand);
    Outcome::value8(result, a as i64 - operand as i64)
        .overflow(signed_overflow_sub(a, operand, result))
}

/// Compare accumulators.
/// Function: A - B
/// Flags: N Z V C
pub fn cba(registers: &mut Registers) -> Outcome {
    let a = registers.acc_a.num;
    let b = registers.acc_b.num;
    let result = a.wrapping_sub(b);
    Outcome::value8(result, a as i64 - b as i64).overflow(signed_overflow_sub(a, b, result))
}

/// Bit test; the conjunction is flagged but not stored.
/// Function: ACCX & M
/// Flags: N Z
pub fn bit(registers: &mut Registers, acc: Acc, operand: Option<u8>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let result = registers.acc_value(acc) & operand;
    Outcome::value8(result, result as i64).carry(CarryUpdate::Keep)
}

/// Compare the index register against a 16-bit operand.
/// Function: X - M
/// Flags: N Z V
pub fn cpx(registers: &mut Registers, operand: Option<u16>) -> Outcome {
    let Some(operand) = operand else {
        return Outcome::untouched();
    };
    let x = registers.x.num;
    let result = x.wrapping_sub(operand);
    let overflow = ((x ^ operand) & (x ^ result) & 0x8000) != 0;
    Outcome::value16(result, x as i64 - operand as i64)
        .carry(CarryUpdate::Keep)
        .overflow(overflow)
}

/// Test; the value is flagged against zero, carry and overflow clear.
/// Function: ACCX - 0
/// Flags: N Z
pub fn tst(registers: &mut Registers, acc: Acc) -> Outcome {
    let value = registers.acc_value(acc);
    Outcome::value8(value, value as i64).carry(CarryUpdate::Force(false))
}

/// One's complement.
/// Function: ACCX := !ACCX
/// Flags: N Z C=1
pub fn com(registers: &mut Registers, acc: Acc) -> Outcome {
    let result = !registers.acc_value(acc);
    registers.acc(acc).load(result);
    Outcome::acc(acc).carry(CarryUpdate::Force(true))
}

/// Two's complement.
/// Function: ACCX := 0 - ACCX
/// Flags: N Z V C
pub fn neg(registers: &mut Registers, acc: Acc) -> Outcome {
    let result = 0u8.wrapping_sub(registers.acc_value(acc));
    registers.acc(acc).load(result);
    Outcome::acc(acc)
        .carry(CarryUpdate::Force(result != 0))
        .overflow(result == 0x80)
}

/// Decrement.
/// Function: ACCX := ACCX - 1
/// Flags: N Z V
pub fn dec(registers: &mut Registers, acc: Acc) -> Outcome {
    let before = registers.acc_value(acc);
    registers.acc(acc).sub(1);
    Outcome::acc(acc)
        .carry(CarryUpdate::Keep)
        .overflow(before == 0x80)
}

/// Increment.
/// Function: ACCX := ACCX + 1
/// Flags: N Z V
pub fn inc(registers: &mut Registers, acc: Acc) -> Outcome {
    let before = registers.acc_value(acc);
    registers.acc(acc).add(1);
    Outcome::acc(acc)
        .carry(CarryUpdate::Keep)
        .overflow(before == 0x7F)
}

/// Clear.
/// Function: ACCX := 0
/// Flags: N=0 Z=1 V=0 C=0
pub fn clr(registers: &mut Registers, acc: Acc) -> Outcome {
    registers.acc(acc).load(0);
    Outcome::acc(acc).carry(CarryUpdate::Force(false))
}

/// Arithmetic shift left.
/// Function: ACCX := ACCX << 1
/// Flags: N Z V C
pub fn asl(registers: &mut Registers, acc: Acc) -> Outcome {
    let value = registers.acc_value(acc);
    let carry_out = value & 0x80 != 0;
    let result = value << 1;
    registers.acc(acc).load(result);
    Outcome::acc(acc)
        .carry(CarryUpdate::Force(carry_out))
        .overflow(carry_out ^ (result & 0x80 != 0))
}

/// Arithmetic shift right; the sign bit is preserved.
/// Function: ACCX := ACCX >> 1, bit 7 held
/// Flags: N Z V C
pub fn asr(registers: &mut Registers, acc: Acc) -> Outcome {
    let value = registers.acc_value(acc);
    let carry_out = value & 0x01 != 0;
    let result = (value >> 1) | (value & 0x80);
    registers.acc(acc).load(result);
    Outcome::acc(acc)
        .carry(CarryUpdate::Force(carry_out))
        .overflow(carry_out ^ (result & 0x80 != 0))
}

/// Logical shift right.
/// Function: ACCX := ACCX >> 1
/// Flags: N=0 Z V C
pub fn lsr(registers: &mut Registers, acc: Acc) -> Outcome {
    let value = registers.acc_value(acc);
    let carry_out = value & 0x01 != 0;
    let result = value >> 1;
    registers.acc(acc).load(result);
    Outcome::acc(acc)
        .carry(CarryUpdate::Force(carry_out))
        .overflow(carry_out)
}

/// Rotate left through carry: carry shifts in at bit 0, bit 7 becomes the
/// new carry.
/// Function: ACCX := (ACCX << 1) | C
/// Flags: N Z V C
pub fn rol(registers: &mut Registers, acc: Acc) -> Outcome {
    let value = registers.acc_value(acc);
    let carry_out = value & 0x80 != 0;
    let result = (value << 1) | registers.get_carry();
    registers.acc(acc).load(result);
    Outcome::acc(acc)
        .carry(CarryUpdate::Force(carry_out))
        .overflow(carry_out ^ (result & 0x80 != 0))
}

/// Rotate right through carry: carry shifts in at bit 7, bit 0 becomes
/// the new carry.
/// Function: ACCX := (ACCX >> 1) | (C << 7)
/// Flags: N Z V C
pub fn ror(registers: &mut Registers, acc: Acc) -> Outcome {
    let value = registers.acc_value(acc);
    let carry_out = value & 0x01 != 0;
    let result = (value >> 1) | (registers.get_carry() << 7);
    registers.acc(acc).load(result);
    Outcome::acc(acc)
        .carry(CarryUpdate::Force(carry_out))
        .overflow(carry_out ^ (result & 0x80 != 0))
}

/// Decimal adjust accumulator A after BCD arithmetic: each nibble above
/// nine (or that carried) gains six.
/// Function: A := BCD-adjusted A
/// Flags: N Z C
pub fn daa(registers: &mut Registers) -> Outcome {
    let a = registers.acc_a.num;
    let had_carry = registers.is_status_flag_set(StatusFlag::Carry);
    let had_aux = registers.is_status_flag_set(StatusFlag::AuxCarry);

    let mut correction = 0u8;
    let mut carry = had_carry;
    if had_aux || (a & 0x0F) > 9 {
        correction |= 0x06;
    }
    if had_carry || (a >> 4) > 9 || ((a >> 4) == 9 && (a & 0x0F) > 9) {
        correction |= 0x60;
        carry = true;
    }
    registers.acc_a.add(correction as i32);
    Outcome::acc(Acc::A).carry(CarryUpdate::Force(carry))
}
