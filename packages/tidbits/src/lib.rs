#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Small, independent helpers for numbers and strings that network services tend to need:
//!
//! * Formatting a `u64` as decimal (or any radix up to 36) and computing its printed width.
//! * Parsing base-36 (or any radix up to 36) unsigned integers with overflow detection.
//! * Extracting the IP address from a `host:port` remote address.
//! * Building glob patterns for finding keys in a key-value store.
//!
//! Every function is pure and stateless, so all of them can be called from any number of
//! threads at the same time.
//!
//! # Example
//!
//! ```
//! let n = 1776;
//! assert_eq!(tidbits::format_u64(n), "1776");
//! assert_eq!(tidbits::width(n), 4);
//!
//! // Parsing is base-36.
//! assert_eq!(tidbits::parse_u64("zz").unwrap(), 1295);
//! assert_eq!(tidbits::parse_u64_radix("1776", tidbits::DECIMAL).unwrap(), n);
//!
//! assert_eq!(tidbits::extract_ip("[2001:db8::1]:443").unwrap(), "2001:db8::1");
//!
//! assert_eq!(
//!     tidbits::key_glob("__sid:", "eric@example.com"),
//!     "__sid:eric@example.com:*"
//! );
//! ```
//!
//! # Errors
//!
//! Parsing functions return [`Error`], which tells apart malformed digits, overflowing values,
//! addresses that cannot be split into a host and port, and hosts that are not IP literals.
//! Only address rejections emit `trace` level [`tracing`](https://docs.rs/tracing) events;
//! number parsing and formatting emit no events.

mod address;
mod error;
mod glob;
mod numeric;
mod parse;

pub use address::*;
pub use error::*;
pub use glob::*;
pub use numeric::*;
pub use parse::*;
