//! ALU arithmetic operations.
//!
//! All operands are unsigned 64-bit values. Addition, subtraction and
//! multiplication wrap modulo 2^64; division truncates. Division and remainder
//! by zero raise [`ArithmeticFault::DivideByZero`] instead of producing a value.

use crate::common::error::ArithmeticFault;
use crate::isa::opcode::Opcode;

/// Evaluates `op` on operands `a` and `b`.
///
/// # Examples
///
/// ```
/// use oosim_core::common::ArithmeticFault;
/// use oosim_core::core::units::alu::arithmetic::execute;
/// use oosim_core::isa::Opcode;
///
/// assert_eq!(execute(Opcode::Sub, 0, 1), Ok(u64::MAX));
/// assert_eq!(execute(Opcode::Divu, 100, 7), Ok(14));
/// assert_eq!(execute(Opcode::Remu, 1, 0), Err(ArithmeticFault::DivideByZero));
/// ```
pub fn execute(op: Opcode, a: u64, b: u64) -> Result<u64, ArithmeticFault> {
    match op {
        Opcode::Add => Ok(a.wrapping_add(b)),
        Opcode::Sub => Ok(a.wrapping_sub(b)),
        Opcode::Mulu => Ok(a.wrapping_mul(b)),
        Opcode::Divu => a.checked_div(b).ok_or(ArithmeticFault::DivideByZero),
        Opcode::Remu => a.checked_rem(b).ok_or(ArithmeticFault::DivideByZero),
    }
}
