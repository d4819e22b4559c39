use thiserror::Error;

use crate::metadata::token::Token;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every error is scoped to the generation of a single type: when [`crate::codegen::TypeGenerator`]
/// returns an error, no [`crate::codegen::CompileUnit`] is produced for that type, and the
/// generation of other types is unaffected.
///
/// # Error Categories
///
/// ## Layout Errors
/// - [`Error::UnsupportedLayout`] - The type requests explicit (overlapping) field layout
/// - [`Error::LayoutOrderingViolation`] - Sequential layout found duplicate or misordered fields
///
/// ## Registry Errors
/// - [`Error::TypeNotFound`] - A referenced type is not present in the type store
/// - [`Error::RootTypeMissing`] - A canonical root type is not present in the type store
/// - [`Error::UnsupportedSignature`] - A signature has no native representation
///
/// ## Collaborator Errors
/// - [`Error::MethodGeneration`] - The method generator rejected a method
///
/// ## Internal Errors
/// - [`Error::Malformed`] - Internal consistency check failed
///
/// # Examples
///
/// ```rust
/// use cilnative::Error;
///
/// fn report(err: &Error) -> String {
///     match err {
///         Error::UnsupportedLayout { type_name } => format!("skip {type_name}"),
///         other => other.to_string(),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The type declares explicit field layout.
    ///
    /// Explicit layout allows overlapping fields, which the emitted native structs cannot
    /// represent. Generation of the type aborts before any text is produced.
    #[error("Explicit field layout is not supported - {type_name}")]
    UnsupportedLayout {
        /// Name key of the offending type
        type_name: String,
    },

    /// Sequential layout produced an order that is not strictly increasing.
    ///
    /// Two fields share a declaration ordinal, or sorting left them out of order. This points
    /// at inconsistent upstream metadata and is never recovered from.
    #[error("Sequential layout of {type_name} is not strictly ordered - {previous} then {next}")]
    LayoutOrderingViolation {
        /// Name key of the offending type
        type_name: String,
        /// Token of the field emitted first
        previous: Token,
        /// Token of the field that should have followed it
        next: Token,
    },

    /// Failed to find type in the type store.
    ///
    /// The associated [`Token`] identifies which type was not found.
    #[error("Failed to find type in TypeRegistry - {0}")]
    TypeNotFound(Token),

    /// One of the canonical root types is not present in the type store.
    ///
    /// The root reference type and the root array type must be registered before names
    /// can be assigned.
    #[error("Canonical root type is missing - {0}")]
    RootTypeMissing(String),

    /// The signature has no native representation in the registry.
    #[error("Signature can not be mapped to a native type - {0}")]
    UnsupportedSignature(String),

    /// The method generator failed for a method.
    #[error("Failed to generate method {method} - {message}")]
    MethodGeneration {
        /// Name key of the method
        method: String,
        /// What went wrong
        message: String,
    },

    /// An internal consistency check failed.
    ///
    /// The error includes the source location where the problem was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was inconsistent
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_records_location() {
        let err = malformed_error!("unbalanced scope - depth {}", 2);
        match err {
            Error::Malformed {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "unbalanced scope - depth 2");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        let err = Error::LayoutOrderingViolation {
            type_name: "Demo.Point".to_string(),
            previous: Token::new(0x0400_0005),
            next: Token::new(0x0400_0005),
        };
        assert_eq!(
            err.to_string(),
            "Sequential layout of Demo.Point is not strictly ordered - 0x04000005 then 0x04000005"
        );

        let err = Error::UnsupportedLayout {
            type_name: "Demo.Union".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Explicit field layout is not supported - Demo.Union"
        );
    }
}
