use std::net::IpAddr;

use tracing::trace;

const MISSING_PORT: &str = "missing port in address";
const TOO_MANY_COLONS: &str = "too many colons in address";
const MISSING_CLOSING_BRACKET: &str = "missing ']' in address";
const UNEXPECTED_OPENING_BRACKET: &str = "unexpected '[' in address";
const UNEXPECTED_CLOSING_BRACKET: &str = "unexpected ']' in address";

/// Returns the canonical text form of the IP address in a `host:port` remote address, as
/// reported by a server for an accepted connection.
///
/// IPv6 hosts must be enclosed in brackets. The result has no brackets and no port, and IPv6
/// addresses are in their compressed form. Host names are rejected, as no name resolution is
/// performed.
///
/// ```
/// assert_eq!(tidbits::extract_ip("192.0.2.1:8080").unwrap(), "192.0.2.1");
/// assert_eq!(tidbits::extract_ip("[2001:db8::1]:443").unwrap(), "2001:db8::1");
///
/// assert!(tidbits::extract_ip("not-an-address").is_err());
/// assert!(tidbits::extract_ip("example.com:80").is_err());
/// ```
pub fn extract_ip(address: &str) -> crate::Result<String> {
    extract_ip_addr(address).map(|ip| ip.to_string())
}

/// Returns the IP address in a `host:port` remote address.
///
/// See [`extract_ip()`] for the accepted format. An IPv4-mapped IPv6 address such as
/// `[::ffff:192.0.2.1]:80` is returned as the IPv4 address it maps.
pub fn extract_ip_addr(address: &str) -> crate::Result<IpAddr> {
    let (host, _port) = split_host_port(address)?;

    let ip = host.parse::<IpAddr>().map_err(|source| {
        trace!(address, host, "rejected address with a host that is not an IP literal");

        crate::Error::InvalidIp {
            address: address.to_string(),
            host: host.to_string(),
            source,
        }
    })?;

    Ok(ip.to_canonical())
}

/// Splits a `host:port` address into its host and port parts.
///
/// The split happens at the last colon. A host that itself contains colons (an IPv6 literal)
/// must be enclosed in brackets, which are not part of the returned host. Neither part is
/// validated beyond that: the host may be any text and the port may be empty.
///
/// ```
/// assert_eq!(
///     tidbits::split_host_port("[::1]:80").unwrap(),
///     ("::1", "80")
/// );
/// assert_eq!(
///     tidbits::split_host_port("localhost:").unwrap(),
///     ("localhost", "")
/// );
/// ```
pub fn split_host_port(address: &str) -> crate::Result<(&str, &str)> {
    let reject = |problem: &'static str| {
        trace!(address, problem, "rejected malformed address");

        crate::Error::AddressFormat {
            address: address.to_string(),
            problem,
        }
    };

    let Some((before_port, port)) = address.rsplit_once(':') else {
        return Err(reject(MISSING_PORT));
    };

    let Some(after_open) = address.strip_prefix('[') else {
        if before_port.contains(':') {
            return Err(reject(TOO_MANY_COLONS));
        }

        if address.contains('[') {
            return Err(reject(UNEXPECTED_OPENING_BRACKET));
        }

        if address.contains(']') {
            return Err(reject(UNEXPECTED_CLOSING_BRACKET));
        }

        return Ok((before_port, port));
    };

    let Some((host, after_close)) = after_open.split_once(']') else {
        return Err(reject(MISSING_CLOSING_BRACKET));
    };

    // The closing bracket must be followed directly by the colon that starts the port.
    match after_close.strip_prefix(':') {
        None => return Err(reject(MISSING_PORT)),
        Some(rest) if rest.contains(':') => return Err(reject(TOO_MANY_COLONS)),
        Some(_) => {}
    }

    if after_open.contains('[') {
        return Err(reject(UNEXPECTED_OPENING_BRACKET));
    }

    if after_close.contains(']') {
        return Err(reject(UNEXPECTED_CLOSING_BRACKET));
    }

    Ok((host, port))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use super::*;
    use crate::Error;

    fn format_problem(address: &str) -> &'static str {
        match split_host_port(address) {
            Err(Error::AddressFormat { problem, .. }) => problem,
            other => panic!("expected address format error for '{address}', got {other:?}"),
        }
    }

    #[test]
    fn extract_smoke_test() {
        assert_eq!(extract_ip("192.0.2.1:8080").unwrap(), "192.0.2.1");
        assert_eq!(extract_ip("[2001:db8::1]:443").unwrap(), "2001:db8::1");
        assert_eq!(extract_ip("127.0.0.1:0").unwrap(), "127.0.0.1");
        assert_eq!(extract_ip("[::1]:1").unwrap(), "::1");
        assert_eq!(extract_ip("[1.2.3.4]:5").unwrap(), "1.2.3.4");
    }

    #[test]
    fn ipv6_is_compressed() {
        assert_eq!(
            extract_ip("[2001:0db8:0000:0000:0000:0000:0000:0001]:443").unwrap(),
            "2001:db8::1"
        );
        assert_eq!(
            extract_ip("[FE80:0:0:0:0:0:0:AB]:22").unwrap(),
            "fe80::ab"
        );
    }

    #[test]
    fn ipv4_mapped_becomes_ipv4() {
        assert_eq!(extract_ip("[::ffff:192.0.2.1]:80").unwrap(), "192.0.2.1");
        assert_eq!(
            extract_ip_addr("[::ffff:192.0.2.1]:80").unwrap(),
            IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))
        );
    }

    #[test]
    fn extract_addr_types() {
        assert_eq!(
            extract_ip_addr("10.1.2.3:9").unwrap(),
            IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3))
        );
        assert_eq!(
            extract_ip_addr("[::]:9").unwrap(),
            IpAddr::V6(Ipv6Addr::UNSPECIFIED)
        );
    }

    #[test]
    fn missing_port_is_format_error() {
        let error = extract_ip("not-an-address").unwrap_err();
        assert!(matches!(
            &error,
            Error::AddressFormat { address, problem: MISSING_PORT } if address == "not-an-address"
        ));

        assert_eq!(format_problem(""), MISSING_PORT);
        assert_eq!(format_problem("192.0.2.1"), MISSING_PORT);
        assert_eq!(format_problem("[::1]"), MISSING_PORT);
        assert_eq!(format_problem("[::1]x:80"), MISSING_PORT);
        assert_eq!(format_problem("[abc"), MISSING_PORT);
    }

    #[test]
    fn unbracketed_ipv6_is_format_error() {
        assert_eq!(format_problem("2001:db8::1"), TOO_MANY_COLONS);
        assert_eq!(format_problem("::1:80"), TOO_MANY_COLONS);
        assert_eq!(format_problem("[::1]:80:90"), TOO_MANY_COLONS);
    }

    #[test]
    fn stray_brackets_are_format_errors() {
        assert_eq!(format_problem("[::1:80"), MISSING_CLOSING_BRACKET);
        assert_eq!(format_problem("[[::1]:80"), UNEXPECTED_OPENING_BRACKET);
        assert_eq!(format_problem("[::1]:8]0"), UNEXPECTED_CLOSING_BRACKET);
        assert_eq!(format_problem("a[b:80"), UNEXPECTED_OPENING_BRACKET);
        assert_eq!(format_problem("a]b:80"), UNEXPECTED_CLOSING_BRACKET);
    }

    #[test]
    fn hostname_is_invalid_ip() {
        let error = extract_ip("example.com:80").unwrap_err();

        assert!(matches!(
            &error,
            Error::InvalidIp { address, host, .. }
                if address == "example.com:80" && host == "example.com"
        ));
        assert_eq!(error.clamped_value(), None);
    }

    #[test]
    fn not_quite_ips_are_invalid() {
        for address in [
            "localhost:80",
            ":80",
            "256.0.0.1:80",
            "1.2.3:80",
            "01.2.3.4:80",
            "[fe80::1%eth0]:80",
            "[]:80",
        ] {
            assert!(
                matches!(extract_ip(address), Err(Error::InvalidIp { .. })),
                "{address}"
            );
        }
    }

    #[test]
    fn split_smoke_test() {
        assert_eq!(split_host_port("host:80").unwrap(), ("host", "80"));
        assert_eq!(split_host_port("1.2.3.4:").unwrap(), ("1.2.3.4", ""));
        assert_eq!(split_host_port(":80").unwrap(), ("", "80"));
        assert_eq!(split_host_port("[::1]:http").unwrap(), ("::1", "http"));
        assert_eq!(split_host_port("[]:80").unwrap(), ("", "80"));
    }
}
