#[macro_use]
mod macros;

mod bigdecimal;
mod bigint;
mod elementary;
mod error;

pub use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode, DEFAULT_PRECISION};
pub use bigint::{BigInt, ParseBigIntError, Sign};
pub use elementary::pi;
pub use error::{ArithmeticError, ArithmeticErrorKind};
