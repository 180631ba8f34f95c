//! Error types for the fallible numeric helpers.
//!
//! The infallible functions of this crate never fail; they return defined
//! fallback values instead. The `try_*` variants report the same edge cases
//! through [`NumericError`].

use thiserror::Error;

/// Errors reported by the fallible numeric helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The operation needs at least one input value.
    ///
    /// Returned by the `try_mean` family for empty slices, where the plain
    /// variants fall back to zero.
    #[error("Operation requires at least one input value")]
    EmptyInput,

    /// The result is not representable in the requested numeric type.
    #[error("Result of {operation}({value}) overflows the target type")]
    Overflow {
        /// Name of the operation that overflowed
        operation: &'static str,
        /// Input value, formatted for display
        value: String,
    },

    /// The global configuration was already installed.
    ///
    /// The configuration is write-once; it is installed either explicitly or
    /// implicitly on first use.
    #[error("Global configuration has already been set")]
    AlreadyConfigured,
}

impl NumericError {
    /// Create an Overflow error for the given operation and input.
    pub fn overflow<V: std::fmt::Display>(operation: &'static str, value: V) -> Self {
        Self::Overflow {
            operation,
            value: value.to_string(),
        }
    }
}

/// Result type alias for the fallible numeric helpers.
pub type Result<T> = std::result::Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::EmptyInput.to_string(),
            "Operation requires at least one input value"
        );

        let err = NumericError::overflow("next_power_of_2", 100i8);
        assert_eq!(
            err.to_string(),
            "Result of next_power_of_2(100) overflows the target type"
        );

        assert_eq!(
            NumericError::AlreadyConfigured.to_string(),
            "Global configuration has already been set"
        );
    }

    #[test]
    fn test_overflow_fields() {
        match NumericError::overflow("closest_power_of_2", 250u8) {
            NumericError::Overflow { operation, value } => {
                assert_eq!(operation, "closest_power_of_2");
                assert_eq!(value, "250");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
