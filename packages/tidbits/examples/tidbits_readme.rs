//! Example that demonstrates the typical usage of the package.
//!
//! This shows how to use the `tidbits` helpers for numbers, addresses and key globs.

fn main() {
    println!("=== Tidbits README Example ===");

    let n = u64::MAX;
    let text = tidbits::format_u64(n);
    assert_eq!(text.len(), tidbits::width(n));
    println!("{n} is {} characters wide", tidbits::width(n));

    let parsed = tidbits::parse_u64("zz").unwrap();
    assert_eq!(parsed, 1295);
    println!("'zz' in base 36 is {parsed}");

    match tidbits::parse_u64("99999999999999999999") {
        Ok(value) => println!("unexpectedly parsed {value}"),
        Err(error) => println!("{error} (clamped to {:?})", error.clamped_value()),
    }

    for address in ["192.0.2.1:8080", "[2001:db8::1]:443", "example.com:80"] {
        match tidbits::extract_ip(address) {
            Ok(ip) => println!("{address} -> {ip}"),
            Err(error) => println!("{address} -> {error}"),
        }
    }

    let pattern = tidbits::key_glob("__sid:", "eric@example.com");
    assert_eq!(pattern, "__sid:eric@example.com:*");
    println!("Session glob: {pattern}");

    println!("README example completed successfully!");
}
