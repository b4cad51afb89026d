//! Error types for range overlap checks.
//!
//! Input errors are reported for the first malformed value, overlap errors for
//! the first doubly covered value or sub-range.

use thiserror::Error;

/// Result type alias for overlap checks.
pub type Result<T> = std::result::Result<T, OverlapError>;

/// Everything a check can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlapError {
    // Input errors
    #[error("Invalid CIDR {input}: {reason}")]
    InvalidCidr { input: String, reason: String },

    #[error("Invalid CIDR: {input} is not IPv4")]
    NotIpv4 { input: String },

    #[error("Invalid address {input}: expected 4 octets")]
    InvalidAddress { input: String },

    #[error("Invalid mask {input}")]
    InvalidMask { input: String },

    #[error("Malformed range: from {from} is greater than to {to}")]
    MalformedRange { from: String, to: String },

    // Overlap errors
    #[error("The element {value} is supplied by more than one range.")]
    SinglePointOverlap { value: String },

    #[error("The elements between {from} and {to} are supplied by more than one range.")]
    RangeOverlap { from: String, to: String },

    #[error("Unsupported list element type: {found}")]
    UnsupportedType { found: String },
}

impl OverlapError {
    /// True when the values were well formed but cover some element twice.
    pub fn is_overlap(&self) -> bool {
        matches!(
            self,
            OverlapError::SinglePointOverlap { .. } | OverlapError::RangeOverlap { .. }
        )
    }

    pub(crate) fn invalid_cidr(input: &str, reason: impl Into<String>) -> Self {
        OverlapError::InvalidCidr {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(found: impl Into<String>) -> Self {
        OverlapError::UnsupportedType {
            found: found.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_messages() {
        let point = OverlapError::SinglePointOverlap {
            value: "192.168.3.0".to_string(),
        };
        assert_eq!(
            point.to_string(),
            "The element 192.168.3.0 is supplied by more than one range."
        );
        let range = OverlapError::RangeOverlap {
            from: "192.168.1.0".to_string(),
            to: "192.168.255.255".to_string(),
        };
        assert_eq!(
            range.to_string(),
            "The elements between 192.168.1.0 and 192.168.255.255 are supplied by more than one range."
        );
    }

    #[test]
    fn test_is_overlap() {
        assert!(OverlapError::SinglePointOverlap {
            value: "1".to_string()
        }
        .is_overlap());
        assert!(!OverlapError::NotIpv4 {
            input: "::1".to_string()
        }
        .is_overlap());
        assert!(!OverlapError::unsupported("bool").is_overlap());
    }

    #[test]
    fn test_not_ipv4_message() {
        let err = OverlapError::NotIpv4 {
            input: "2001:db8::".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid CIDR: 2001:db8:: is not IPv4");
    }
}
