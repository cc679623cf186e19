//! Error handling for the SHA-3 oracle.
//!
//! The hashing core itself cannot fail once it has a supported output size.
//! Every error here comes from the layers around it: parameter validation,
//! reading input, and parsing test vectors.

use thiserror::Error;

/// All error codes reported by the crate.
///
/// Each variant carries a stable numeric code so that the CLI and the
/// conformance corpus can compare failures by number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// Output size other than 224, 256, 384 or 512 (code 100)
    #[error("E100_UnsupportedOutputBits({0})")]
    E100_UnsupportedOutputBits(/* got */ u64),

    /// Input file or stdin could not be read (code 101)
    #[error("E101_InputUnreadable({0})")]
    E101_InputUnreadable(/* reason */ String),

    /// Character other than '0' or '1' in a bit string (code 102)
    #[error("E102_InvalidBitString({0})")]
    E102_InvalidBitString(/* index */ u64),

    /// Malformed hex (code 103)
    #[error("E103_InvalidHex")]
    E103_InvalidHex,
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_UnsupportedOutputBits(_) => 100,
            ErrorCode::E101_InputUnreadable(_) => 101,
            ErrorCode::E102_InvalidBitString(_) => 102,
            ErrorCode::E103_InvalidHex => 103,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_UnsupportedOutputBits(_) => "E100_UnsupportedOutputBits",
            ErrorCode::E101_InputUnreadable(_) => "E101_InputUnreadable",
            ErrorCode::E102_InvalidBitString(_) => "E102_InvalidBitString",
            ErrorCode::E103_InvalidHex => "E103_InvalidHex",
        }
    }
}

/// Result type for oracle operations.
pub type Sha3Result<T> = Result<T, ErrorCode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names_agree() {
        let errors = [
            ErrorCode::E100_UnsupportedOutputBits(128),
            ErrorCode::E101_InputUnreadable("gone".to_string()),
            ErrorCode::E102_InvalidBitString(3),
            ErrorCode::E103_InvalidHex,
        ];
        for e in &errors {
            assert!(e.name().starts_with(&format!("E{}_", e.code())));
        }
    }

    #[test]
    fn test_display_includes_param() {
        let e = ErrorCode::E100_UnsupportedOutputBits(128);
        assert_eq!(e.to_string(), "E100_UnsupportedOutputBits(128)");
    }
}
