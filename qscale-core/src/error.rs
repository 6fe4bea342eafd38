//! Error types for checked quantity arithmetic.

use core::fmt;

/// Result type for checked quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// The arithmetic step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// Conversion of a count into the common scale.
    Rescale,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
            Operation::Div => "division",
            Operation::Rem => "remainder",
            Operation::Rescale => "rescaling",
        };
        f.write_str(name)
    }
}

/// Error type for the `checked_*` quantity operations.
///
/// The unchecked operators never produce this type: they follow the overflow behavior of the representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The result does not fit the representation.
    #[error("{operation} overflowed the representation")]
    Overflow {
        /// The failing step.
        operation: Operation,
    },

    /// The divisor of `/` or `%` is zero.
    #[error("{operation} by a zero count")]
    DivisionByZero {
        /// The failing step.
        operation: Operation,
    },

    /// A scale conversion factor is larger than the representation can hold.
    #[error("conversion factor {factor} does not fit the representation")]
    FactorOverflow {
        /// The exact conversion factor.
        factor: u64,
    },
}

impl QuantityError {
    /// The operation that failed; factor overflows are reported as [`Operation::Rescale`].
    pub fn operation(&self) -> Operation {
        match self {
            QuantityError::Overflow { operation } | QuantityError::DivisionByZero { operation } => *operation,
            QuantityError::FactorOverflow { .. } => Operation::Rescale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = QuantityError::Overflow { operation: Operation::Add };
        assert_eq!(err.to_string(), "addition overflowed the representation");

        let err = QuantityError::DivisionByZero { operation: Operation::Rem };
        assert_eq!(err.to_string(), "remainder by a zero count");

        let err = QuantityError::FactorOverflow { factor: 1000 };
        assert_eq!(err.to_string(), "conversion factor 1000 does not fit the representation");
    }

    #[test]
    fn operation_accessor() {
        assert_eq!(
            QuantityError::DivisionByZero { operation: Operation::Div }.operation(),
            Operation::Div
        );
        assert_eq!(QuantityError::FactorOverflow { factor: 7 }.operation(), Operation::Rescale);
    }
}
