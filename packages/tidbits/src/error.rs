use std::net::AddrParseError;

use thiserror::Error;

/// Errors that can occur when parsing numbers or remote addresses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input contained a character that is not a digit in the requested radix.
    #[error("invalid number syntax: '{input}' contains a character that is not a valid digit")]
    Syntax {
        /// The entire input that was being parsed.
        input: String,
    },

    /// The input was a well-formed number but its value does not fit in a `u64`.
    ///
    /// The best-effort value for such an input is `u64::MAX`, available via
    /// [`Error::clamped_value()`].
    #[error("number out of range: '{input}' does not fit in 64 bits")]
    Range {
        /// The entire input that was being parsed.
        input: String,
    },

    /// The address could not be split into a host and a port.
    #[error("invalid address format: '{address}' is invalid: {problem}")]
    AddressFormat {
        /// The entire address that was being parsed.
        address: String,

        /// A human-readable description of the problem.
        problem: &'static str,
    },

    /// The host part of the address is not an IP address literal.
    ///
    /// Host names are reported with this error, as no name resolution is performed.
    #[error("invalid IP address: host '{host}' in '{address}' is not an IP address literal")]
    InvalidIp {
        /// The entire address that was being parsed.
        address: String,

        /// The host part of the address.
        host: String,

        /// The reason the host was rejected by the IP address parser.
        #[source]
        source: AddrParseError,
    },
}

impl Error {
    /// The best-effort value that accompanies a failed number parse.
    ///
    /// This is `0` for syntax errors and `u64::MAX` for range errors. Address errors
    /// have no associated value and return `None`.
    #[must_use]
    pub fn clamped_value(&self) -> Option<u64> {
        match self {
            Self::Syntax { .. } => Some(0),
            Self::Range { .. } => Some(u64::MAX),
            Self::AddressFormat { .. } | Self::InvalidIp { .. } => None,
        }
    }
}

/// A specialized `Result` type for this crate's operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;
    use std::net::IpAddr;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn clamped_value_per_kind() {
        let syntax = Error::Syntax {
            input: "!".to_string(),
        };
        assert_eq!(syntax.clamped_value(), Some(0));

        let range = Error::Range {
            input: "99999999999999999999".to_string(),
        };
        assert_eq!(range.clamped_value(), Some(u64::MAX));

        let format = Error::AddressFormat {
            address: "nope".to_string(),
            problem: "missing port in address",
        };
        assert_eq!(format.clamped_value(), None);
    }

    #[test]
    fn messages_mention_input() {
        let range = Error::Range {
            input: "zzzzzzzzzzzzzz".to_string(),
        };
        assert!(range.to_string().contains("zzzzzzzzzzzzzz"));

        let format = Error::AddressFormat {
            address: "not-an-address".to_string(),
            problem: "missing port in address",
        };
        let message = format.to_string();
        assert!(message.contains("not-an-address"));
        assert!(message.contains("missing port in address"));
    }

    #[test]
    fn invalid_ip_exposes_source() {
        let source = "example.com".parse::<IpAddr>().unwrap_err();

        let error = Error::InvalidIp {
            address: "example.com:80".to_string(),
            host: "example.com".to_string(),
            source,
        };

        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("example.com"));
    }
}
