//! The flag-update wrapper around every translator operation.
//!
//! Each operation reports an [`Outcome`]: what the status register should
//! be recomputed from, plus the carry/overflow/half-carry witnesses only
//! the operation itself can see. [`commit`] turns that into the six flag
//! bits and then resets every raw counter, so the flags always describe
//! the last operation rather than cumulative history.

use crate::registers::{Acc, Registers, StatusFlag};

/// Where the recomputed flags come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagSource {
    /// The operation managed the status register itself (or touches no
    /// flags at all); leave it alone.
    Untouched,
    /// Flags describe the named accumulator's post-state and raw witness.
    Acc(Acc),
    /// Flags describe a computed value that was not stored, e.g. a
    /// compare result. `wide` selects the 16-bit carry/sign thresholds.
    Value { num: u16, raw: i64, wide: bool },
}

/// How the carry bit is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryUpdate {
    /// From the raw witness: the value left the unsigned range.
    FromRaw,
    /// The operation computed its own carry (shifts and rotates).
    Force(bool),
    /// The operation does not affect carry (loads, increments).
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub source: FlagSource,
    pub carry: CarryUpdate,
    pub overflow: bool,
    /// `None` when the operation leaves the auxiliary carry alone.
    pub aux_carry: Option<bool>,
}

impl Outcome {
    pub fn untouched() -> Outcome {
        Outcome {
            source: FlagSource::Untouched,
            carry: CarryUpdate::FromRaw,
            overflow: false,
            aux_carry: None,
        }
    }

    pub fn acc(acc: Acc) -> Outcome {
        Outcome {
            source: FlagSource::Acc(acc),
            carry: CarryUpdate::FromRaw,
            overflow: false,
            aux_carry: None,
        }
    }

    pub fn value8(num: u8, raw: i64) -> Outcome {
        Outcome {
            source: FlagSource::Value {
                num: num as u16,
                raw,
                wide: false,
            },
            carry: CarryUpdate::FromRaw,
            overflow: false,
            aux_carry: None,
        }
    }

    pub fn value16(num: u16, raw: i64) -> Outcome {
        Outcome {
            source: FlagSource::Value {
                num,
                raw,
                wide: true,
            },
            carry: CarryUpdate::FromRaw,
            overflow: false,
            aux_carry: None,
        }
    }

    pub fn carry(mut self, carry: CarryUpdate) -> Outcome {
        self.carry = carry;
        self
    }

    pub fn overflow(mut self, overflow: bool) -> Outcome {
        self.overflow = overflow;
        self
    }

    pub fn aux_carry(mut self, aux_carry: bool) -> Outcome {
        self.aux_carry = Some(aux_carry);
        self
    }
}

/// Recompute the status register from the operation's outcome, then reset
/// the raw counters.
pub fn commit(registers: &mut Registers, outcome: Outcome) {
    let (num, raw, wide) = match outcome.source {
        FlagSource::Untouched => return,
        FlagSource::Acc(acc) => {
            let value = *registers.acc(acc);
            (value.num as u16, value.raw as i64, false)
        }
        FlagSource::Value { num, raw, wide } => (num, raw, wide),
    };

    let limit: i64 = if wide { 0xFFFF } else { 0xFF };
    let carry = match outcome.carry {
        CarryUpdate::FromRaw => raw > limit || raw < 0,
        CarryUpdate::Force(value) => value,
        CarryUpdate::Keep => registers.is_status_flag_set(StatusFlag::Carry),
    };
    let sign_bit: u16 = if wide { 0x8000 } else { 0x80 };

    registers.set_status_flag(StatusFlag::Carry, carry);
    registers.set_status_flag(StatusFlag::Zero, num == 0);
    registers.set_status_flag(StatusFlag::Sign, num & sign_bit != 0);
    registers.set_status_flag(StatusFlag::Overflow, outcome.overflow);
    if let Some(aux_carry) = outcome.aux_carry {
        registers.set_status_flag(StatusFlag::AuxCarry, aux_carry);
    }

    registers.acc_a.reset_raw();
    registers.acc_b.reset_raw();
    registers.x.reset_raw();
    registers.sp.reset_raw();
}

/// Two inputs of the same sign producing a result of the opposite sign.
pub fn signed_overflow(a: u8, operand: u8, result: u8) -> bool {
    (!(a ^ operand) & (a ^ result) & 0x80) != 0
}

/// The subtraction variant: inputs of differing sign, result on the
/// subtrahend's side.
pub fn signed_overflow_sub(a: u8, operand: u8, result: u8) -> bool {
    ((a ^ operand) & (a ^ result) & 0x80) != 0
}

/// Carry out of bit 3 of `a + operand` (or minus, the identity is the
/// same), for the auxiliary-carry flag.
pub fn half_carry(a: u8, operand: u8, result: u8) -> bool {
    ((a ^ operand ^ result) & 0x10) != 0
}
