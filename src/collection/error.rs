//! Error types for collection operations.
//!
//! This module provides [`CollectionError`], the single error type signaled
//! by fallible collection operations. Every failure is synchronous and
//! atomic: an operation either fully succeeds or reports the precise error
//! kind without having mutated the receiver.

/// Represents a failed collection operation.
///
/// Each variant carries enough context to render a precise message without
/// holding onto the collection itself, so errors stay `Clone + Eq` and are
/// cheap to pass around.
///
/// # Examples
///
/// ```rust
/// use collectra::collection::{CollectionError, Sequence};
///
/// let mut empty: Sequence<i32> = Sequence::new();
/// assert_eq!(empty.pop(), Err(CollectionError::Empty { operation: "pop" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The operation requires at least one entry, but the collection has none.
    Empty {
        /// The name of the operation that required a non-empty collection.
        operation: &'static str,
    },
    /// A predicate-qualified lookup matched no entry.
    ///
    /// Distinct from [`Empty`](Self::Empty): the collection may well hold
    /// entries, none of which satisfied the predicate.
    NotFound {
        /// The name of the lookup that found no match.
        operation: &'static str,
    },
    /// Two positionally paired operands differ in length.
    LengthMismatch {
        /// Number of entries in the receiver.
        expected: usize,
        /// Number of entries in the supplied operand.
        actual: usize,
    },
    /// A value could not be treated as a number.
    TypeMismatch {
        /// The name of the aggregation that attempted the conversion.
        operation: &'static str,
    },
    /// Two values were compared but have no defined ordering.
    NotComparable {
        /// The name of the operation that required a total order.
        operation: &'static str,
    },
    /// A value tuple supplies fewer elements than the spread callback expects.
    Arity {
        /// Number of elements the callback destructures.
        expected: usize,
        /// Number of elements the value tuple actually held.
        found: usize,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { operation } => {
                write!(formatter, "{operation}: collection contains no entries")
            }
            Self::NotFound { operation } => {
                write!(formatter, "{operation}: no entry satisfied the predicate")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    formatter,
                    "combine: length mismatch, {expected} keys against {actual} values"
                )
            }
            Self::TypeMismatch { operation } => {
                write!(
                    formatter,
                    "{operation}: value is not representable as a number"
                )
            }
            Self::NotComparable { operation } => {
                write!(formatter, "{operation}: values do not form a total order")
            }
            Self::Arity { expected, found } => {
                write!(
                    formatter,
                    "map_spread: callback expects {expected} elements, value supplies {found}"
                )
            }
        }
    }
}

impl std::error::Error for CollectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_display() {
        let error = CollectionError::Empty { operation: "pop" };
        assert_eq!(format!("{error}"), "pop: collection contains no entries");
    }

    #[test]
    fn test_not_found_display() {
        let error = CollectionError::NotFound {
            operation: "first_where",
        };
        assert_eq!(
            format!("{error}"),
            "first_where: no entry satisfied the predicate"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let error = CollectionError::LengthMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            format!("{error}"),
            "combine: length mismatch, 2 keys against 3 values"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = CollectionError::TypeMismatch { operation: "avg" };
        assert_eq!(
            format!("{error}"),
            "avg: value is not representable as a number"
        );
    }

    #[test]
    fn test_not_comparable_display() {
        let error = CollectionError::NotComparable { operation: "sort" };
        assert_eq!(format!("{error}"), "sort: values do not form a total order");
    }

    #[test]
    fn test_arity_display() {
        let error = CollectionError::Arity {
            expected: 3,
            found: 1,
        };
        assert_eq!(
            format!("{error}"),
            "map_spread: callback expects 3 elements, value supplies 1"
        );
    }

    #[test]
    fn test_error_equality() {
        let error1 = CollectionError::Empty { operation: "avg" };
        let error2 = CollectionError::Empty { operation: "avg" };
        let error3 = CollectionError::Empty { operation: "pop" };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_clone() {
        let error = CollectionError::LengthMismatch {
            expected: 1,
            actual: 4,
        };
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_error_is_error() {
        use std::error::Error;

        let error = CollectionError::NotComparable { operation: "max" };
        let _: &dyn Error = &error;
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let error = CollectionError::Empty { operation: "random" };
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_debug() {
        let error = CollectionError::Arity {
            expected: 2,
            found: 0,
        };
        let debug_string = format!("{error:?}");
        assert!(debug_string.contains("Arity"));
        assert!(debug_string.contains("expected"));
    }
}
